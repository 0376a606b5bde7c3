//! Text formatter
//!
//! Orders in-range records by their raw text and normalizes each one to
//! title case for display.
//!
//! Tokens are split on the space character only. Tabs and newlines inside a
//! record's text stay part of the surrounding token, so `"forty\ttwo"`
//! becomes `"Forty\ttwo"`.

use super::number::WholeNumber;

/// Normalization failure for a single record's text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Splitting on spaces produced a zero-length token (leading, trailing
    /// or doubled spaces, or empty text)
    #[error("{}empty token at position {position} in {text:?}", record_prefix(.num))]
    EmptyToken {
        /// Value of the offending record, when known
        num: Option<i64>,
        /// The raw text that failed to normalize
        text: String,
        /// Zero-based index of the empty token
        position: usize,
    },
}

fn record_prefix(num: &Option<i64>) -> String {
    num.map_or_else(String::new, |n| format!("record {n}: "))
}

impl FormatError {
    /// Attach the record value to an error raised by [`title_case`].
    #[must_use]
    pub fn for_record(self, record_num: i64) -> Self {
        match self {
            Self::EmptyToken { text, position, .. } => Self::EmptyToken {
                num: Some(record_num),
                text,
                position,
            },
        }
    }
}

/// Output of the lenient formatter: display lines plus the records it had to skip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatted {
    /// Title-cased lines in display order
    pub lines: Vec<String>,
    /// One error per record that could not be normalized
    pub skipped: Vec<FormatError>,
}

/// Title-case a single string.
///
/// Lowercases everything, then uppercases the first character of each
/// space-separated token.
///
/// # Errors
/// Returns [`FormatError::EmptyToken`] if any token is empty.
pub fn title_case(text: &str) -> Result<String, FormatError> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();

    for (position, token) in lowered.split(' ').enumerate() {
        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return Err(FormatError::EmptyToken {
                num: None,
                text: text.to_string(),
                position,
            });
        };
        tokens.push(first.to_uppercase().chain(chars).collect::<String>());
    }

    Ok(tokens.join(" "))
}

/// Stable ordinal sort by raw text. Equal texts keep their input order.
fn sort_by_text(in_range: &[WholeNumber]) -> Vec<&WholeNumber> {
    let mut sorted: Vec<&WholeNumber> = in_range.iter().collect();
    sorted.sort_by(|a, b| a.text.cmp(&b.text));
    sorted
}

/// Sort and title-case the in-range records, failing on the first malformed one.
///
/// # Errors
/// Returns the [`FormatError`] of the first record (in sorted order) whose
/// text contains an empty token.
pub fn format(in_range: &[WholeNumber]) -> Result<Vec<String>, FormatError> {
    sort_by_text(in_range)
        .into_iter()
        .map(|record| title_case(&record.text).map_err(|e| e.for_record(record.num)))
        .collect()
}

/// Sort and title-case the in-range records, skipping malformed ones.
///
/// A bad record never fails the batch: it is left out of `lines` and
/// reported in `skipped`.
#[must_use]
pub fn format_lenient(in_range: &[WholeNumber]) -> Formatted {
    let mut formatted = Formatted::default();

    for record in sort_by_text(in_range) {
        match title_case(&record.text) {
            Ok(line) => formatted.lines.push(line),
            Err(e) => {
                let e = e.for_record(record.num);
                tracing::warn!(error = %e, "skipping record with malformed text");
                formatted.skipped.push(e);
            }
        }
    }

    formatted
}
