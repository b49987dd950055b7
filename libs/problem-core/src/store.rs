//! Writing problems back to disk as markdown with front-matter.
//!
//! Saved files are grouped into a directory chosen from the problem's first
//! tag and named after its number and title:
//!
//! ```text
//! problems/
//!   Array/0001-two-sum.md
//!   Trees/0104-maximum-depth-of-binary-tree.md
//!   Uncategorized/scratch.md
//! ```

use chrono::Local;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{ProblemError, Result};
use crate::loader;
use crate::parser::parse;
use crate::slug::slugify;
use crate::types::{Difficulty, Problem};

/// Primary tag -> directory name. Tags not listed use their sanitized name.
pub const TAG_DIRECTORIES: [(&str, &str); 9] = [
    ("Hash Table", "Array"),
    ("Dynamic Programming", "Dp"),
    ("Two Pointers", "TwoPointers"),
    ("Linked List", "LinkedList"),
    ("Bit Manipulation", "BitManipulation"),
    ("Binary Tree", "Trees"),
    ("Tree", "Trees"),
    ("String", "Strings"),
    ("Trie", "Tries"),
];

/// Directory for problems without usable tags.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Serialize)]
struct FrontMatterOut<'a> {
    title: &'a String,
    number: Option<u32>,
    difficulty: Difficulty,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: &'a Vec<String>,
    date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    url: &'a String,
}

/// Render a problem as markdown with a YAML front-matter block. A missing
/// date is stamped with today's local date, and a missing number is written
/// as `null` so it is not re-inferred from the file name.
pub fn render_markdown(problem: &Problem) -> Result<String> {
    let front_matter = FrontMatterOut {
        title: &problem.title,
        number: problem.number,
        difficulty: problem.difficulty,
        tags: &problem.tags,
        date: problem
            .date
            .clone()
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string()),
        url: &problem.url,
    };
    let yaml = serde_yaml::to_string(&front_matter)?;

    let mut content = String::with_capacity(yaml.len() + problem.body.len() + 16);
    content.push_str("---\n");
    content.push_str(&yaml);
    content.push_str("---\n\n");
    content.push_str(&problem.body);
    content.push('\n');
    Ok(content)
}

/// Directory name for a problem, from its first tag.
pub fn directory_for(tags: &[String]) -> String {
    let Some(primary) = tags.first() else {
        return UNCATEGORIZED.to_string();
    };

    if let Some((_, dir)) = TAG_DIRECTORIES.iter().find(|(tag, _)| tag == primary) {
        return dir.to_string();
    }

    let sanitized: String = primary
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if sanitized.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        sanitized
    }
}

/// File name: `{number:04}-{title-slug}.md`, or `{title-slug}.md` without a
/// number. Falls back to the record slug if the title has no word characters.
pub fn file_name_for(problem: &Problem) -> String {
    let title_slug = slugify(&problem.title);
    let title_slug = if title_slug.is_empty() {
        problem.slug.clone()
    } else {
        title_slug
    };

    match problem.number {
        Some(n) => format!("{:04}-{}.md", n, title_slug),
        None => format!("{}.md", title_slug),
    }
}

/// A problem written to disk.
#[derive(Debug, Clone)]
pub struct SavedProblem {
    /// Record re-derived from the written file.
    pub problem: Problem,
    /// Path relative to the store root, `/`-separated.
    pub path: String,
}

/// Flat-file problem store rooted at a problems directory.
#[derive(Debug, Clone)]
pub struct ProblemStore {
    root: PathBuf,
}

impl ProblemStore {
    /// Create a store at `root`. The directory is created lazily.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the problems directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the whole collection from disk.
    pub fn load_all(&self) -> Vec<Problem> {
        loader::load_dir(&self.root)
    }

    /// Parse raw upload bytes and persist them.
    ///
    /// Rejects names without a `.md` extension and content that is not UTF-8.
    pub fn ingest(&self, filename: &str, bytes: &[u8]) -> Result<SavedProblem> {
        if !filename.ends_with(".md") {
            return Err(ProblemError::NotMarkdown {
                filename: filename.to_string(),
            });
        }
        let raw = std::str::from_utf8(bytes).map_err(|_| ProblemError::InvalidUtf8 {
            filename: filename.to_string(),
        })?;

        self.save(&parse(raw, filename))
    }

    /// Write a problem to its computed path, then re-derive the record from
    /// the written file. Never overwrites an existing file.
    pub fn save(&self, problem: &Problem) -> Result<SavedProblem> {
        let dir_name = directory_for(&problem.tags);
        let file_name = file_name_for(problem);
        let dir = self.root.join(&dir_name);
        fs::create_dir_all(&dir)?;

        let path = dir.join(&file_name);
        let content = render_markdown(problem)?;

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => ProblemError::AlreadyExists { path: path.clone() },
                _ => ProblemError::Io(e),
            })?;
        write_or_remove(file, &path, content.as_bytes(), File::sync_all)?;

        tracing::info!("saved problem {} to {}", problem.slug, path.display());

        Ok(SavedProblem {
            problem: parse(&content, &file_name),
            path: format!("{}/{}", dir_name, file_name),
        })
    }
}

/// Write `content` and flush it with `sync`. On failure the partial file at
/// `path` is removed so a retry is not blocked by `AlreadyExists`.
fn write_or_remove<W, F>(mut writer: W, path: &Path, content: &[u8], sync: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&W) -> std::io::Result<()>,
{
    let written = writer.write_all(content).and_then(|()| sync(&writer));
    if let Err(e) = written {
        drop(writer);
        if let Err(remove_err) = fs::remove_file(path) {
            tracing::warn!("failed to remove partial file {}: {}", path.display(), remove_err);
        }
        return Err(ProblemError::Io(e));
    }
    Ok(())
}
