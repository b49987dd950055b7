//! YAML front-matter extraction.
//!
//! A document may open with a block delimited by `---` lines:
//!
//! ```markdown
//! ---
//! title: "Two Sum"
//! number: 1
//! tags: ["Array", "Hash Table"]
//! ---
//!
//! # 1. Two Sum
//! ```
//!
//! Extraction never fails. A block that is not a valid YAML mapping is
//! reported as [`FrontMatter::Invalid`] and is still stripped from the body.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_yaml::Value;
use std::sync::LazyLock;

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)??---[ \t]*(?:\r?\n|\z)")
        .expect("front-matter pattern is valid")
});

/// Outcome of looking for a front-matter block.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontMatter {
    /// No leading `---` block.
    Absent,
    /// A block was present but did not parse as a mapping.
    Invalid,
    /// A block parsed as a mapping; recognized keys extracted.
    Parsed(Metadata),
}

impl FrontMatter {
    /// Metadata to apply, empty unless the block parsed.
    pub fn into_metadata(self) -> Metadata {
        match self {
            Self::Parsed(meta) => meta,
            Self::Absent | Self::Invalid => Metadata::default(),
        }
    }
}

/// Recognized front-matter keys.
///
/// Empty or zero values are stored as `None` so the caller falls back to
/// inference for them, the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: Option<String>,
    /// `Some(None)` for `number: null`: the record has no number and none is
    /// inferred.
    pub number: Option<Option<u32>>,
    pub difficulty: Option<String>,
    pub tags: Option<Vec<String>>,
    pub date: Option<String>,
    pub url: Option<String>,
}

/// Split raw text into its front-matter and the remaining body.
pub fn split(raw: &str) -> (FrontMatter, &str) {
    let Some(caps) = BLOCK_RE.captures(raw) else {
        return (FrontMatter::Absent, raw);
    };

    let end = caps.get(0).map_or(0, |m| m.end());
    let body = &raw[end..];
    let yaml = caps.get(1).map_or("", |m| m.as_str());

    if yaml.trim().is_empty() {
        return (FrontMatter::Parsed(Metadata::default()), body);
    }

    let front_matter = match serde_yaml::from_str::<Value>(yaml) {
        Ok(value @ Value::Mapping(_)) => FrontMatter::Parsed(Metadata::from_value(&value)),
        Ok(_) => FrontMatter::Invalid,
        Err(e) => {
            tracing::debug!("ignoring malformed front-matter: {}", e);
            FrontMatter::Invalid
        }
    };

    (front_matter, body)
}

impl Metadata {
    fn from_value(value: &Value) -> Self {
        Self {
            title: value.get("title").and_then(scalar_to_string),
            number: value.get("number").and_then(to_number),
            difficulty: value.get("difficulty").and_then(scalar_to_string),
            tags: value.get("tags").and_then(to_tags),
            date: value
                .get("date")
                .and_then(scalar_to_string)
                .map(|d| normalize_date(&d)),
            url: value.get("url").and_then(scalar_to_string),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

fn to_number(value: &Value) -> Option<Option<u32>> {
    let n = match value {
        Value::Null => return Some(None),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }?;
    (n > 0).then_some(Some(n))
}

/// Tags may be a YAML sequence or a single comma-separated string.
fn to_tags(value: &Value) -> Option<Vec<String>> {
    let raw: Vec<String> = match value {
        Value::Sequence(items) => items.iter().filter_map(scalar_to_string).collect(),
        Value::String(s) => s.split(',').map(|t| t.trim().to_string()).collect(),
        _ => return None,
    };

    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    (!tags.is_empty()).then_some(tags)
}

/// Reduce timestamps to `YYYY-MM-DD`; other strings are kept as written.
fn normalize_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.date().format("%Y-%m-%d").to_string();
        }
    }
    raw.to_string()
}
