//! Collection access shared by the JSON API and the HTML views.
//!
//! The collection is re-read from disk on every request; there is no cache.

use std::collections::BTreeSet;
use std::sync::Arc;

use problem_core::{Difficulty, DifficultyFilter, Problem, ProblemQuery, ProblemStore, SortKey};

use crate::error::{ApiError, Result};
use crate::models::{ListQuery, StatsResponse};

/// Load the whole collection off the async runtime.
pub async fn load(store: &Arc<ProblemStore>) -> Result<Vec<Problem>> {
    let store = Arc::clone(store);
    let problems = tokio::task::spawn_blocking(move || store.load_all()).await?;
    Ok(problems)
}

/// First record in load order with the given slug.
pub fn find_by_slug(problems: Vec<Problem>, slug: &str) -> Option<Problem> {
    problems.into_iter().find(|p| p.slug == slug)
}

/// Counts by difficulty and by tag.
pub fn stats(problems: &[Problem]) -> StatsResponse {
    let mut stats = StatsResponse {
        total: problems.len(),
        ..Default::default()
    };

    for problem in problems {
        match problem.difficulty {
            Difficulty::Easy => stats.easy += 1,
            Difficulty::Medium => stats.medium += 1,
            Difficulty::Hard => stats.hard += 1,
            Difficulty::Unknown => stats.unknown += 1,
        }
        for tag in &problem.tags {
            *stats.tags.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    stats
}

/// Sorted, de-duplicated tags across the collection.
pub fn unique_tags(problems: &[Problem]) -> Vec<String> {
    problems
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Split a comma-separated tag parameter, dropping blanks.
pub fn split_tags(param: Option<&str>) -> Vec<String> {
    param
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Absent sort means number ascending; an unrecognized key keeps load order.
pub fn sort_param(param: Option<&str>) -> Option<SortKey> {
    match param {
        None => Some(SortKey::default()),
        Some(value) => SortKey::from_param(value),
    }
}

/// Build a query from API parameters. Unknown difficulty values are rejected.
pub fn api_query(params: &ListQuery) -> Result<ProblemQuery> {
    let difficulty = params
        .difficulty
        .as_deref()
        .unwrap_or_default()
        .parse::<DifficultyFilter>()
        .map_err(ApiError::BadRequest)?;

    Ok(ProblemQuery {
        search: params.search.clone().unwrap_or_default(),
        difficulty,
        tags: split_tags(params.tag.as_deref()),
        sort: sort_param(params.sort.as_deref()),
    })
}
