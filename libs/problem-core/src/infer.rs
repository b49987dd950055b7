//! Metadata inference for documents whose front-matter leaves fields out.
//!
//! These are keyword and pattern heuristics, not classification. A body that
//! mentions "simple" while solving a hard problem is reported as Easy.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::types::Difficulty;

/// Topic vocabulary used for tag detection, in output order.
pub const KNOWN_TAGS: [&str; 38] = [
    "Array",
    "String",
    "Hash Table",
    "Dynamic Programming",
    "Math",
    "Sorting",
    "Greedy",
    "Depth-First Search",
    "Binary Search",
    "Database",
    "Breadth-First Search",
    "Tree",
    "Matrix",
    "Two Pointers",
    "Binary Tree",
    "Bit Manipulation",
    "Stack",
    "Heap",
    "Priority Queue",
    "Graph",
    "Prefix Sum",
    "Simulation",
    "Design",
    "Counting",
    "Backtracking",
    "Sliding Window",
    "Linked List",
    "Union Find",
    "Queue",
    "Recursion",
    "Divide and Conquer",
    "Memoization",
    "Monotonic Stack",
    "Trie",
    "Number Theory",
    "Geometry",
    "Game Theory",
    "Segment Tree",
];

/// Maximum number of auto-detected tags.
pub const MAX_DETECTED_TAGS: usize = 8;

/// Title used when neither a heading nor a filename stem is available.
pub const UNTITLED: &str = "Untitled";

const DIFFICULTY_KEYWORDS: [(Difficulty, &[&str]); 3] = [
    (Difficulty::Hard, &["hard", "difficult", "complex"]),
    (Difficulty::Medium, &["medium", "moderate"]),
    (Difficulty::Easy, &["easy", "simple", "basic"]),
];

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,2}[ \t]+(.+?)[ \t]*\r?$").expect("heading pattern is valid"));

static ORDINAL_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.(?:\s+|$)").expect("ordinal pattern is valid"));

static FILENAME_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[-_])0*(\d+)").expect("filename number pattern is valid"));

static HEADING_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,2}[ \t]+(\d+)\.").expect("heading number pattern is valid"));

static LEADING_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+-").expect("leading digits pattern is valid"));

/// Infer a title from the first level-1 or level-2 heading, falling back to
/// the filename stem. Never returns an empty string.
pub fn infer_title(body: &str, filename: &str) -> String {
    let from_heading = HEADING_RE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| ORDINAL_PREFIX_RE.replace(m.as_str(), "").trim().to_string())
        .filter(|t| !t.is_empty());

    from_heading.unwrap_or_else(|| title_from_filename(filename))
}

/// "0001-two-sum.md" -> "Two Sum"
fn title_from_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = LEADING_DIGITS_RE.replace(&stem, "");

    let title = stem
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Extract the problem number, first from the filename, then from a
/// `# <digits>.` heading in the body. A digit run that is zero or does not
/// fit in `u32` does not qualify, and the search moves on.
pub fn extract_number(filename: &str, body: &str) -> Option<u32> {
    let from_filename = FILENAME_NUMBER_RE
        .captures_iter(filename)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .find(|n| *n > 0);

    from_filename.or_else(|| {
        HEADING_NUMBER_RE
            .captures(body)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .filter(|n| *n > 0)
    })
}

/// Keyword scan over the body; the first matching group wins.
pub fn detect_difficulty(body: &str) -> Difficulty {
    let lower = body.to_lowercase();
    DIFFICULTY_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map_or(Difficulty::Unknown, |(difficulty, _)| *difficulty)
}

/// Vocabulary tags whose lowercase form appears in the body, in vocabulary
/// order, capped at [`MAX_DETECTED_TAGS`].
pub fn detect_tags(body: &str) -> Vec<String> {
    let lower = body.to_lowercase();
    KNOWN_TAGS
        .iter()
        .filter(|tag| lower.contains(&tag.to_lowercase()))
        .take(MAX_DETECTED_TAGS)
        .map(|tag| tag.to_string())
        .collect()
}
