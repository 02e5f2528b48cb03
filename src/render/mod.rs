//! Terminal rendering module
//!
//! Formats the completion text for display

pub mod markdown;
pub mod terminal;

pub use markdown::{render_markdown, LEFT_PADDING};
pub use terminal::{detect_width, DEFAULT_WIDTH};
