//! Core library for a LeetCode solution-notes collection.
//!
//! Provides:
//! - Markdown parser with optional YAML front-matter
//! - Metadata inference (title, number, difficulty, tags) from note bodies
//! - Directory loader for a problems collection
//! - Search, filtering, sorting, and pagination
//! - Flat-file store for writing new problems

pub mod error;
pub mod frontmatter;
pub mod infer;
pub mod loader;
pub mod parser;
pub mod query;
pub mod slug;
pub mod store;
pub mod types;

pub use error::{ProblemError, Result};
pub use loader::{load_dir, load_file};
pub use parser::parse;
pub use query::{paginate, sort_problems, DifficultyFilter, Page, ProblemQuery, SortKey, PAGE_SIZE};
pub use slug::slugify;
pub use store::{render_markdown, ProblemStore, SavedProblem};
pub use types::{Difficulty, Problem};
