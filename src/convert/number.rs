//! Records returned by the number-to-text service

use serde::{Deserialize, Serialize};

/// Bound applied to every classification: the inclusive range `[-BOUND, BOUND]`.
pub const BOUND: u64 = 9000;

/// A number together with its spelled-out text, as returned by the remote service.
///
/// `text` is opaque: it is never checked against `num`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WholeNumber {
    /// The integer the user submitted
    pub num: i64,
    /// The service's textual representation of `num`
    pub text: String,
}

impl WholeNumber {
    /// Create a record from a value and its text
    #[must_use]
    pub fn new(num: i64, text: &str) -> Self {
        Self {
            num,
            text: text.to_string(),
        }
    }
}
