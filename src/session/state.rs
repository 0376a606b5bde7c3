//! Submission state machine
//!
//! `Session` owns everything the presentation layer shows: the current input,
//! the validation error next to it, the result list and the fetch phase. All
//! changes go through `edit_input`, `submit` and `apply`.
//!
//! Every accepted submission bumps a generation counter and hands out a
//! `Ticket`. An outcome is applied only when its ticket is the latest one, so
//! a slow response to an older submission can never overwrite a newer result.

use crate::client::FetchError;
use crate::convert::number::WholeNumber;

/// Notice shown when the request failed for a reason the user cannot fix
/// by editing the input
pub const TRANSPORT_NOTICE: &str = "Something went wrong while contacting the conversion service";

/// Why the last submission failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The service rejected the input (HTTP 400)
    Validation,
    /// Network fault, timeout, unexpected status or unreadable body
    Transport,
}

/// Where the session is in the submit/fetch cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Fetching,
    /// The latest request returned records
    Success,
    /// The latest request failed
    Failure(FailureKind),
}

/// Proof of a submission, returned to the caller and handed back with the outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    /// Generation number this ticket was issued for
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// A submission the guard refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    /// Nothing to send
    #[error("Please enter a list of numbers separated by commas")]
    EmptyInput,
    /// The current input was already rejected by the service and has not changed
    #[error("Fix the highlighted input before submitting again")]
    ValidationErrorActive,
}

/// Result of handing an outcome back to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// The outcome belonged to the latest submission and was applied
    Applied,
    /// A newer submission exists; the outcome was discarded
    Stale,
}

/// Presentation state for one user
#[derive(Debug, Clone, Default)]
pub struct Session {
    input: String,
    error: Option<String>,
    notice: Option<String>,
    phase: Phase,
    records: Vec<WholeNumber>,
    generation: u64,
}

impl Session {
    /// Create an idle session with empty input
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently in the input field
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Validation message from the service, shown next to the input
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Generic notice for transport failures
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Records from the latest successful response
    #[must_use]
    pub fn records(&self) -> &[WholeNumber] {
        &self.records
    }

    /// True while a request is in flight
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.phase == Phase::Fetching
    }

    /// Latest generation handed out (0 before the first submission)
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the input text. Editing clears any validation error.
    pub fn edit_input(&mut self, value: &str) {
        value.clone_into(&mut self.input);
        self.error = None;
    }

    fn check_submit(&self) -> Result<(), SubmitRejected> {
        if self.input.is_empty() {
            return Err(SubmitRejected::EmptyInput);
        }
        if self.error.is_some() {
            return Err(SubmitRejected::ValidationErrorActive);
        }
        Ok(())
    }

    /// Start a new submission.
    ///
    /// Clears the result list and any transport notice, enters `Fetching` and
    /// returns the ticket the outcome must be applied with. Submitting while
    /// already fetching supersedes the earlier request.
    ///
    /// # Errors
    /// Returns [`SubmitRejected`] when the input is empty or still carries a
    /// validation error.
    pub fn submit(&mut self) -> Result<Ticket, SubmitRejected> {
        self.check_submit()?;

        if self.is_fetching() {
            tracing::debug!(
                superseded = self.generation,
                "submission replaces request in flight"
            );
        }

        self.generation += 1;
        self.records = Vec::new();
        self.notice = None;
        self.phase = Phase::Fetching;
        tracing::debug!(generation = self.generation, input = %self.input, "submitted");

        Ok(Ticket {
            generation: self.generation,
        })
    }

    /// Apply the outcome of the request issued with `ticket`.
    ///
    /// Outcomes for anything but the latest ticket are discarded without
    /// touching the state.
    pub fn apply(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<WholeNumber>, FetchError>,
    ) -> ApplyResult {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "discarding stale response"
            );
            return ApplyResult::Stale;
        }

        match outcome {
            Ok(records) => {
                tracing::debug!(count = records.len(), "conversion succeeded");
                self.records = records;
                self.phase = Phase::Success;
            }
            Err(FetchError::Validation(message)) => {
                tracing::debug!(%message, "input rejected by service");
                self.records = Vec::new();
                self.error = Some(message);
                self.phase = Phase::Failure(FailureKind::Validation);
            }
            Err(e) => {
                tracing::warn!(error = %e, "conversion request failed");
                self.records = Vec::new();
                self.notice = Some(TRANSPORT_NOTICE.to_string());
                self.phase = Phase::Failure(FailureKind::Transport);
            }
        }

        ApplyResult::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{make_record, make_records};

    fn submitted(input: &str) -> (Session, Ticket) {
        let mut session = Session::new();
        session.edit_input(input);
        let ticket = session.submit().unwrap();
        (session, ticket)
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.generation(), 0);
        assert!(session.records().is_empty());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_submit_rejects_empty_input() {
        let mut session = Session::new();
        assert_eq!(session.submit(), Err(SubmitRejected::EmptyInput));
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_submit_enters_fetching() {
        let (session, ticket) = submitted("1,2,3");
        assert_eq!(session.phase(), Phase::Fetching);
        assert!(session.is_fetching());
        assert_eq!(ticket.generation(), 1);
    }

    #[test]
    fn test_success_stores_records() {
        let (mut session, ticket) = submitted("12");
        let records = make_records(&[(12, "twelve")]);

        assert_eq!(
            session.apply(ticket, Ok(records.clone())),
            ApplyResult::Applied
        );
        assert_eq!(session.phase(), Phase::Success);
        assert_eq!(session.records(), records.as_slice());
    }

    #[test]
    fn test_validation_failure_sets_error_and_clears_results() {
        let (mut session, ticket) = submitted("12");
        session.apply(ticket, Ok(vec![make_record(12, "twelve")]));

        session.edit_input("abc");
        let ticket = session.submit().unwrap();
        session.apply(
            ticket,
            Err(FetchError::Validation("'abc' is not a number".to_string())),
        );

        assert_eq!(session.phase(), Phase::Failure(FailureKind::Validation));
        assert_eq!(session.error(), Some("'abc' is not a number"));
        assert!(session.notice().is_none());
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_validation_error_blocks_resubmit_until_edit() {
        let (mut session, ticket) = submitted("abc");
        session.apply(ticket, Err(FetchError::Validation("bad".to_string())));

        assert_eq!(session.submit(), Err(SubmitRejected::ValidationErrorActive));

        session.edit_input("1");
        assert!(session.error().is_none());
        assert_eq!(session.submit().map(Ticket::generation), Ok(2));
    }

    #[test]
    fn test_transport_failure_sets_notice_not_error() {
        let (mut session, ticket) = submitted("1");
        session.apply(ticket, Err(FetchError::Status { status: 503 }));

        assert_eq!(session.phase(), Phase::Failure(FailureKind::Transport));
        assert_eq!(session.notice(), Some(TRANSPORT_NOTICE));
        assert!(session.error().is_none());
        assert!(session.records().is_empty());
        // Transport failures do not block a retry
        assert_eq!(session.submit().map(Ticket::generation), Ok(2));
    }

    #[test]
    fn test_resubmit_clears_notice_and_results() {
        let (mut session, ticket) = submitted("1");
        session.apply(ticket, Err(FetchError::Status { status: 502 }));

        session.submit().unwrap();
        assert!(session.notice().is_none());
        assert!(session.records().is_empty());
        assert!(session.is_fetching());
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let (mut session, first) = submitted("1");
        session.edit_input("2");
        let second = session.submit().unwrap();
        assert_eq!(second.generation(), 2);

        // Newer request finishes first
        session.apply(second, Ok(vec![make_record(2, "two")]));
        // Older one arrives late
        let result = session.apply(first, Ok(vec![make_record(1, "one")]));

        assert_eq!(result, ApplyResult::Stale);
        assert_eq!(session.records(), &[make_record(2, "two")]);
        assert_eq!(session.phase(), Phase::Success);
    }

    #[test]
    fn test_stale_failure_does_not_clobber_fetching() {
        let (mut session, first) = submitted("1");
        let _second = session.submit().unwrap();

        let result = session.apply(first, Err(FetchError::Validation("old".to_string())));

        assert_eq!(result, ApplyResult::Stale);
        assert!(session.is_fetching());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_edit_keeps_results() {
        let (mut session, ticket) = submitted("1");
        session.apply(ticket, Ok(vec![make_record(1, "one")]));

        session.edit_input("1,2");
        assert_eq!(session.input(), "1,2");
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.phase(), Phase::Success);
    }
}
