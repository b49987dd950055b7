pub mod catalog;
pub mod html;
