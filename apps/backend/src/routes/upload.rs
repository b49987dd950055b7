//! Upload and editor endpoints

use axum::{
    extract::{Multipart, State},
    Json,
};
use problem_core::ProblemError;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

const DEFAULT_EDITOR_FILENAME: &str = "untitled.md";

/// POST /api/upload
///
/// Each file part is parsed and stored independently; failures are reported
/// per file and never abort the batch. A broken multipart stream ends the
/// batch early, and files stored before it are still reported.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut uploaded = Vec::new();
    let mut errors = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Upload stream failed after {} file(s): {}", uploaded.len(), e);
                errors.push(e.to_string());
                break;
            }
        };
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                errors.push(format!("{}: {}", filename, e));
                continue;
            }
        };

        let store = state.store.clone();
        let name = filename.clone();
        let result = match tokio::task::spawn_blocking(move || store.ingest(&name, &bytes)).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Upload of {} panicked: {}", filename, e);
                errors.push(format!("{}: {}", filename, e));
                continue;
            }
        };
        match result {
            Ok(saved) => {
                tracing::info!("Uploaded {} as {}", filename, saved.path);
                uploaded.push(UploadedFile {
                    filename,
                    title: saved.problem.title,
                    path: saved.path,
                    slug: saved.problem.slug,
                });
            }
            Err(e @ (ProblemError::NotMarkdown { .. } | ProblemError::InvalidUtf8 { .. })) => {
                errors.push(e.to_string())
            }
            Err(e) => {
                tracing::warn!("Upload of {} failed: {}", filename, e);
                errors.push(format!("{}: {}", filename, e));
            }
        }
    }

    Ok(Json(UploadResponse {
        success: uploaded.len(),
        uploaded,
        errors,
    }))
}

/// POST /api/editor/save
pub async fn editor_save(
    State(state): State<AppState>,
    Json(req): Json<EditorSaveRequest>,
) -> Result<Json<EditorSaveResponse>> {
    if req.markdown.trim().is_empty() {
        return Err(ApiError::BadRequest("markdown content is empty".to_string()));
    }

    let filename = editor_filename(req.filename.as_deref());
    let store = state.store.clone();
    let saved =
        tokio::task::spawn_blocking(move || store.ingest(&filename, req.markdown.as_bytes()))
            .await??;

    tracing::info!("Saved editor content as {}", saved.path);

    Ok(Json(EditorSaveResponse {
        title: saved.problem.title,
        slug: saved.problem.slug,
        path: saved.path,
    }))
}

/// Normalize the editor's filename: default when blank, `.md` appended.
fn editor_filename(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        None => DEFAULT_EDITOR_FILENAME.to_string(),
        Some(n) if n.ends_with(".md") => n.to_string(),
        Some(n) => format!("{}.md", n),
    }
}
