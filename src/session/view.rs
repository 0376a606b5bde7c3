//! Pure rendering chain: session state → classify → format → screen

use crate::convert::{classify, format_lenient, FormatError, WholeNumber};

use super::state::Session;

/// Everything shown for a batch of records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    /// Records below `-bound`
    pub below_count: usize,
    /// Sorted, title-cased in-range records
    pub lines: Vec<String>,
    /// Records above `bound`
    pub above_count: usize,
    /// In-range records left out because their text was malformed
    pub skipped: Vec<FormatError>,
}

impl ResultsView {
    fn is_empty(&self) -> bool {
        self.below_count == 0
            && self.above_count == 0
            && self.lines.is_empty()
            && self.skipped.is_empty()
    }
}

/// Main body of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A request is in flight
    Loading,
    /// No records to show
    Empty,
    /// At least one record to show
    Results(ResultsView),
}

/// Full screen derived from a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Bound the records were classified against
    pub bound: u64,
    /// Validation message next to the input
    pub error: Option<String>,
    /// Generic failure notice
    pub notice: Option<String>,
    /// Main body
    pub body: View,
}

/// Classify and format one batch of records.
#[must_use]
pub fn results_view(records: &[WholeNumber], bound: u64) -> ResultsView {
    let classification = classify(records, bound);
    let formatted = format_lenient(&classification.in_range);

    ResultsView {
        below_count: classification.below_count,
        lines: formatted.lines,
        above_count: classification.above_count,
        skipped: formatted.skipped,
    }
}

/// Derive the screen for the current session state.
#[must_use]
pub fn render(session: &Session, bound: u64) -> Screen {
    let body = if session.is_fetching() {
        View::Loading
    } else {
        let results = results_view(session.records(), bound);
        if results.is_empty() {
            View::Empty
        } else {
            View::Results(results)
        }
    };

    Screen {
        bound,
        error: session.error().map(str::to_string),
        notice: session.notice().map(str::to_string),
        body,
    }
}
