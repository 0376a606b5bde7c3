//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::convert::number::WholeNumber;

/// Create a single `WholeNumber` record.
#[must_use]
pub fn make_record(num: i64, text: &str) -> WholeNumber {
    WholeNumber::new(num, text)
}

/// Create records from `(num, text)` pairs, preserving order.
#[must_use]
pub fn make_records(pairs: &[(i64, &str)]) -> Vec<WholeNumber> {
    pairs
        .iter()
        .map(|(num, text)| make_record(*num, text))
        .collect()
}
