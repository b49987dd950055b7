//! Browsing UI: list view and problem detail at `/`.
//!
//! All view state comes from the query string; nothing is kept between
//! requests.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use problem_core::{paginate, DifficultyFilter, ProblemQuery, PAGE_SIZE};

use crate::error::Result;
use crate::models::UiQuery;
use crate::services::{catalog, html};
use crate::AppState;

/// GET /
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<UiQuery>,
) -> Result<Response> {
    let problems = catalog::load(&state.store).await?;

    if let Some(slug) = params.problem.as_deref().filter(|s| !s.is_empty()) {
        return Ok(match catalog::find_by_slug(problems, slug) {
            Some(problem) => Html(html::render_detail(&problem)).into_response(),
            None => (StatusCode::NOT_FOUND, Html(html::render_not_found(slug))).into_response(),
        });
    }

    let stats = catalog::stats(&problems);
    let all_tags = catalog::unique_tags(&problems);
    let page_number = params
        .page
        .as_deref()
        .and_then(|p| p.trim().parse::<usize>().ok())
        .unwrap_or(1);
    let page = paginate(ui_query(&params).apply(problems), page_number, PAGE_SIZE);

    let view = html::ListView {
        params: &params,
        stats: &stats,
        all_tags: &all_tags,
        page: &page,
    };
    Ok(Html(html::render_list(&view)).into_response())
}

/// Lenient counterpart of the API query: bad values fall back to defaults.
fn ui_query(params: &UiQuery) -> ProblemQuery {
    ProblemQuery {
        search: params.search.clone().unwrap_or_default(),
        difficulty: params
            .difficulty
            .as_deref()
            .and_then(|d| d.parse::<DifficultyFilter>().ok())
            .unwrap_or_default(),
        tags: catalog::split_tags(params.tag.as_deref()),
        sort: catalog::sort_param(params.sort.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use problem_core::SortKey;

    #[test]
    fn ui_query_is_lenient() {
        let params = UiQuery {
            difficulty: Some("Insane".to_string()),
            sort: Some("number_desc".to_string()),
            tag: Some("Graph,Trie".to_string()),
            ..Default::default()
        };
        let query = ui_query(&params);
        assert_eq!(query.difficulty, DifficultyFilter::All);
        assert_eq!(query.sort, Some(SortKey::NumberDesc));
        assert_eq!(query.tags, vec!["Graph", "Trie"]);
    }
}
