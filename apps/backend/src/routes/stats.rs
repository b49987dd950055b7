//! Collection summary endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::services::catalog;
use crate::AppState;

/// GET /api/stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let problems = catalog::load(&state.store).await?;
    Ok(Json(catalog::stats(&problems)))
}

/// GET /api/tags
pub async fn tags(State(state): State<AppState>) -> Result<Json<TagsResponse>> {
    let problems = catalog::load(&state.store).await?;
    Ok(Json(TagsResponse {
        tags: catalog::unique_tags(&problems),
    }))
}
