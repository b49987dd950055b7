//! API request and response types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// Re-export shared types from problem-core
pub use problem_core::{Difficulty, Problem, SortKey};

// === Problems ===

/// Query parameters for GET /api/problems
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub difficulty: Option<String>,
    /// Single tag or comma-separated list (OR semantics)
    pub tag: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ProblemListResponse {
    pub problems: Vec<Problem>,
    /// Number of filtered matches, across all pages
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
}

// === Stats ===

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StatsResponse {
    pub total: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub unknown: usize,
    pub tags: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

// === Upload ===

/// One successfully stored upload
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    pub filename: String,
    pub title: String,
    pub path: String,
    pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: usize,
    pub uploaded: Vec<UploadedFile>,
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditorSaveRequest {
    pub markdown: String,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EditorSaveResponse {
    pub title: String,
    pub slug: String,
    pub path: String,
}

// === Browsing UI ===

/// Query parameters for the HTML views at `/`.
///
/// Kept as raw strings so malformed values fall back to defaults instead of
/// rejecting the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiQuery {
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub tag: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    /// Slug of the problem to show in detail
    pub problem: Option<String>,
}

// === Health ===

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}
