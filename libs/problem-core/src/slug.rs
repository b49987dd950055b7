//! URL-safe identifiers for problems.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("disallowed pattern is valid"));
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("separator pattern is valid"));
static HYPHENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));

/// Convert text into a lowercase, hyphenated slug.
///
/// `"  Two--Sum!! "` becomes `"two-sum"`. May return an empty string when the
/// input has no word characters.
pub fn slugify(text: &str) -> String {
    let text = text.to_lowercase();
    let text = DISALLOWED_RE.replace_all(text.trim(), "");
    let text = SEPARATOR_RE.replace_all(&text, "-");
    HYPHENS_RE.replace_all(&text, "-").into_owned()
}

/// Derive a problem slug from its number and title, falling back to a short
/// hash of the filename when the title yields nothing.
pub fn derive_slug(number: Option<u32>, title: &str, filename: &str) -> String {
    let title_slug = slugify(title);
    let base = match number {
        Some(n) => format!("{}-{}", n, title_slug),
        None => title_slug,
    };

    if base.is_empty() {
        filename_hash(filename)
    } else {
        base
    }
}

/// First 6 hex characters of the SHA-256 of the filename.
pub fn filename_hash(filename: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(filename.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..6].to_string()
}
