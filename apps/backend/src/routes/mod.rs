pub mod problems;
pub mod stats;
pub mod ui;
pub mod upload;
