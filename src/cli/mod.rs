//! CLI output formatting
//!
//! Renders conversion results as colored terminal output.

pub mod display;

pub use display::bucket_label;
pub use display::TerminalPresenter;
