//! Directory loader for problem collections.
//!
//! Layout: markdown files at the root of the problems directory and/or one
//! level of grouping subdirectories. Deeper nesting is not scanned.

use std::fs;
use std::path::{Path, PathBuf};

use crate::parser::parse;
use crate::types::Problem;

/// Load every problem under `root`.
///
/// Root-level files come first, then each subdirectory in name order; files
/// within a directory are in path order. Unreadable files are logged and
/// skipped. A missing root yields an empty collection.
pub fn load_dir(root: &Path) -> Vec<Problem> {
    if !root.is_dir() {
        tracing::debug!("problems directory {} does not exist", root.display());
        return Vec::new();
    }

    let mut problems = Vec::new();
    load_files(root, &mut problems);

    for subdir in list_dir(root).into_iter().filter(|p| p.is_dir()) {
        load_files(&subdir, &mut problems);
    }

    tracing::debug!("loaded {} problems from {}", problems.len(), root.display());
    problems
}

/// Read and parse a single file. The filename (not the full path) is what
/// the parser sees.
pub fn load_file(path: &Path) -> std::io::Result<Problem> {
    let raw = fs::read_to_string(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(parse(&raw, &filename))
}

fn load_files(dir: &Path, problems: &mut Vec<Problem>) {
    for path in list_dir(dir).into_iter().filter(|p| is_markdown(p)) {
        match load_file(&path) {
            Ok(problem) => problems.push(problem),
            Err(e) => tracing::warn!("skipping {}: {}", path.display(), e),
        }
    }
}

/// Entries of `dir` sorted by path.
fn list_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("failed to read directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();
    paths
}

fn is_markdown(path: &Path) -> bool {
    path.is_file() && path.extension().map_or(false, |ext| ext == "md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn filenames(problems: &[Problem]) -> Vec<&str> {
        problems.iter().map(|p| p.filename.as_str()).collect()
    }

    #[test]
    fn missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_dir(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn root_files_before_subdirectories() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Trees/0104-max-depth.md", b"# Maximum Depth");
        write(dir.path(), "0002-add-two.md", b"# Add Two Numbers");
        write(dir.path(), "0001-two-sum.md", b"# Two Sum");
        write(dir.path(), "Array/0003-longest.md", b"# Longest Substring");

        let problems = load_dir(dir.path());
        assert_eq!(
            filenames(&problems),
            vec![
                "0001-two-sum.md",
                "0002-add-two.md",
                "0003-longest.md",
                "0104-max-depth.md",
            ]
        );
    }

    #[test]
    fn ignores_non_markdown_and_deep_nesting() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "readme.txt", b"# Not a problem");
        write(dir.path(), "Array/notes.markdown", b"# Nope");
        write(dir.path(), "Array/deep/0009-deep.md", b"# Too Deep");
        write(dir.path(), "0001-two-sum.md", b"# Two Sum");

        let problems = load_dir(dir.path());
        assert_eq!(filenames(&problems), vec!["0001-two-sum.md"]);
    }

    #[test]
    fn undecodable_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "0001-bad.md", &[0xff, 0xfe, 0x00, 0x80]);
        write(dir.path(), "0002-good.md", b"# Good One");

        let problems = load_dir(dir.path());
        assert_eq!(filenames(&problems), vec!["0002-good.md"]);
    }

    #[test]
    fn duplicate_slugs_are_kept() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "0001-two-sum.md", b"# Two Sum");
        write(dir.path(), "Array/0001-two-sum.md", b"# Two Sum");

        let problems = load_dir(dir.path());
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].slug, problems[1].slug);
    }
}
