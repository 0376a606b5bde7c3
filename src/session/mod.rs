//! Submission state and presentation
//!
//! This module holds the submit/fetch state machine, the pure rendering
//! chain built on the classifier and formatter, and the drivers that tie
//! them to a converter.

pub mod driver;
pub mod state;
pub mod view;

pub use driver::{run_interactive, run_once, Presenter};
pub use state::{ApplyResult, FailureKind, Phase, Session, SubmitRejected, Ticket};
pub use view::{render, results_view, ResultsView, Screen, View};
