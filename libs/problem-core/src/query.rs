//! Filtering, sorting and pagination over a loaded collection.
//!
//! All functions are pure: records are never modified, only selected and
//! reordered. Compose as filter, then sort, then paginate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::{Difficulty, Problem};

/// Items per page in list views.
pub const PAGE_SIZE: usize = 9;

/// Difficulty filter; `All` passes everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl FromStr for DifficultyFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "All" => Ok(Self::All),
            other => other.parse::<Difficulty>().map(Self::Only),
        }
    }
}

impl DifficultyFilter {
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            Self::All => true,
            Self::Only(d) => *d == difficulty,
        }
    }
}

/// Sort orders offered by the list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    NumberAsc,
    NumberDesc,
    DifficultyAsc,
    DifficultyDesc,
    DateDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        Self::NumberAsc,
        Self::NumberDesc,
        Self::DifficultyAsc,
        Self::DifficultyDesc,
        Self::DateDesc,
    ];

    /// Query parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NumberAsc => "number_asc",
            Self::NumberDesc => "number_desc",
            Self::DifficultyAsc => "difficulty_asc",
            Self::DifficultyDesc => "difficulty_desc",
            Self::DateDesc => "date_desc",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NumberAsc => "Number ↑",
            Self::NumberDesc => "Number ↓",
            Self::DifficultyAsc => "Difficulty ↑",
            Self::DifficultyDesc => "Difficulty ↓",
            Self::DateDesc => "Date ↓",
        }
    }

    /// Parse from a query parameter value.
    pub fn from_param(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request-scoped filter and sort parameters.
#[derive(Debug, Clone, Default)]
pub struct ProblemQuery {
    pub search: String,
    pub difficulty: DifficultyFilter,
    pub tags: Vec<String>,
    /// `None` keeps load order.
    pub sort: Option<SortKey>,
}

impl ProblemQuery {
    /// Filter then sort.
    pub fn apply(&self, problems: Vec<Problem>) -> Vec<Problem> {
        let problems = filter_search(problems, &self.search);
        let problems = filter_difficulty(problems, self.difficulty);
        let mut problems = filter_tags(problems, &self.tags);
        if let Some(key) = self.sort {
            sort_problems(&mut problems, key);
        }
        problems
    }
}

/// Case-insensitive substring match against title, number or any tag.
/// An empty query passes everything.
pub fn matches_search(problem: &Problem, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    problem.title.to_lowercase().contains(&query)
        || problem
            .number
            .map_or(false, |n| n.to_string().contains(&query))
        || problem
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(&query))
}

pub fn filter_search(problems: Vec<Problem>, query: &str) -> Vec<Problem> {
    if query.trim().is_empty() {
        return problems;
    }
    problems
        .into_iter()
        .filter(|p| matches_search(p, query))
        .collect()
}

pub fn filter_difficulty(problems: Vec<Problem>, filter: DifficultyFilter) -> Vec<Problem> {
    problems
        .into_iter()
        .filter(|p| filter.matches(p.difficulty))
        .collect()
}

/// Keep records carrying at least one of `tags`. An empty set passes
/// everything.
pub fn filter_tags(problems: Vec<Problem>, tags: &[String]) -> Vec<Problem> {
    if tags.is_empty() {
        return problems;
    }
    problems
        .into_iter()
        .filter(|p| tags.iter().any(|t| p.has_tag(t)))
        .collect()
}

/// Stable sort by `key`. Missing numbers and dates sort last.
pub fn sort_problems(problems: &mut [Problem], key: SortKey) {
    match key {
        SortKey::NumberAsc => problems.sort_by_key(|p| (p.number.is_none(), p.number)),
        SortKey::NumberDesc => {
            problems.sort_by(|a, b| b.number.unwrap_or(0).cmp(&a.number.unwrap_or(0)))
        }
        SortKey::DifficultyAsc => problems.sort_by_key(|p| p.difficulty.ordinal()),
        SortKey::DifficultyDesc => {
            problems.sort_by(|a, b| b.difficulty.ordinal().cmp(&a.difficulty.ordinal()))
        }
        SortKey::DateDesc => problems.sort_by(|a, b| {
            let a = a.date.as_deref().unwrap_or("");
            let b = b.date.as_deref().unwrap_or("");
            b.cmp(a)
        }),
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number after clamping.
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Slice out `page` (1-based), clamped to `[1, total_pages]`. An empty input
/// has one empty page.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;

    Page {
        items: items.into_iter().skip(start).take(page_size).collect(),
        page,
        total,
        total_pages,
    }
}
