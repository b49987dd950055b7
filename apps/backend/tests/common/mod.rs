//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for a router over a temporary problems directory
//! - Helpers for writing problem files before a test runs
//!
//! No external services are needed; every context gets fresh directories.

pub mod fixtures;

use std::fs;
use std::path::Path;

use axum::Router;
use tempfile::TempDir;

use leetcode_series_backend::{build_router, AppState};

/// Test context owning the problems and static directories and the router
/// built over them.
pub struct TestContext {
    problems_dir: TempDir,
    static_dir: TempDir,
    app: Router,
}

impl TestContext {
    /// Create a context with an empty collection.
    pub fn new() -> Self {
        let problems_dir = TempDir::new().expect("Failed to create problems dir");
        let static_dir = TempDir::new().expect("Failed to create static dir");

        let state = AppState::new(problems_dir.path());
        let app = build_router(state, static_dir.path());

        Self {
            problems_dir,
            static_dir,
            app,
        }
    }

    /// Create a context pre-populated with `(relative path, content)` files.
    pub fn with_problems<P: AsRef<str>, C: AsRef<str>>(files: &[(P, C)]) -> Self {
        let ctx = Self::new();
        for (path, content) in files {
            ctx.write_problem(path.as_ref(), content.as_ref());
        }
        ctx
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Root of the problems collection.
    pub fn problems_root(&self) -> &Path {
        self.problems_dir.path()
    }

    /// Write a file under the problems directory, creating parents.
    pub fn write_problem(&self, rel: &str, content: &str) {
        write_file(self.problems_dir.path(), rel, content);
    }

    /// Write a file under the static directory.
    pub fn write_static(&self, rel: &str, content: &str) {
        write_file(self.static_dir.path(), rel, content);
    }
}

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, content).expect("Failed to write test file");
}
