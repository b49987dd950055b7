//! Problem endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use problem_core::{paginate, PAGE_SIZE};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::catalog;
use crate::AppState;

/// GET /api/problems
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ProblemListResponse>> {
    let query = catalog::api_query(&params)?;
    let problems = query.apply(catalog::load(&state.store).await?);

    let response = match params.page {
        Some(page) => {
            let page = paginate(problems, page, PAGE_SIZE);
            ProblemListResponse {
                problems: page.items,
                total: page.total,
                page: Some(page.page),
                total_pages: Some(page.total_pages),
            }
        }
        None => ProblemListResponse {
            total: problems.len(),
            problems,
            page: None,
            total_pages: None,
        },
    };

    Ok(Json(response))
}

/// GET /api/problems/:slug
pub async fn get(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Problem>> {
    let problems = catalog::load(&state.store).await?;
    catalog::find_by_slug(problems, &slug)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Problem not found: {}", slug)))
}
