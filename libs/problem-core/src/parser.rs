//! Markdown problem parser.
//!
//! # Format
//! ```markdown
//! ---
//! title: "Two Sum"
//! number: 1
//! difficulty: "Easy"
//! tags: ["Array", "Hash Table"]
//! date: "2024-01-01"
//! url: "https://leetcode.com/problems/two-sum/"
//! ---
//!
//! # 1. Two Sum
//! Solution notes...
//! ```
//!
//! Every front-matter key is optional. Missing values are inferred from the
//! body and filename (see [`crate::infer`]).

use crate::frontmatter::{self, Metadata};
use crate::infer::{detect_difficulty, detect_tags, extract_number, infer_title};
use crate::slug::derive_slug;
use crate::types::{Difficulty, Problem};

/// Parse markdown content into a normalized problem. Never fails.
pub fn parse(raw: &str, filename: &str) -> Problem {
    let (front_matter, body) = frontmatter::split(raw);
    let Metadata {
        title,
        number,
        difficulty,
        tags,
        date,
        url,
    } = front_matter.into_metadata();

    let title = title.unwrap_or_else(|| infer_title(body, filename));
    let number = number.unwrap_or_else(|| extract_number(filename, body));
    let difficulty = match difficulty {
        Some(value) => Difficulty::normalize(&value),
        None => detect_difficulty(body),
    };
    let tags = tags.unwrap_or_else(|| detect_tags(body));
    let slug = derive_slug(number, &title, filename);

    Problem {
        slug,
        title,
        number,
        difficulty,
        tags,
        date,
        url: url.unwrap_or_default(),
        body: body.trim().to_string(),
        filename: filename.to_string(),
    }
}
