//! Post-fetch pipeline
//!
//! Classifies service records against the bound and formats the in-range
//! ones for display.

pub mod classify;
pub mod format;
pub mod number;

pub use classify::{classify, Bucket, Classification};
pub use format::{format, format_lenient, title_case, FormatError, Formatted};
pub use number::{WholeNumber, BOUND};
