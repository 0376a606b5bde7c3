//! Submission drivers
//!
//! Connect a `Session` to a `Converter` and a `Presenter`. The one-shot
//! driver submits a single input. The interactive driver reads one input per
//! line and lets a new line supersede a request that is still in flight.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::{Converter, FetchError};
use crate::convert::number::{WholeNumber, BOUND};

use super::state::{ApplyResult, Session, SubmitRejected, Ticket};
use super::view::{render, Screen};

/// Receives everything the user should see
pub trait Presenter {
    /// A request was sent and is waiting for a response
    fn loading(&mut self);
    /// The submit guard refused the input
    fn rejected(&mut self, reason: SubmitRejected);
    /// The latest request finished; show the resulting screen
    fn screen(&mut self, screen: &Screen);
}

type Outcome = (Ticket, Result<Vec<WholeNumber>, FetchError>);

/// Submit `input` once and wait for the outcome.
///
/// Returns the final session so the caller can inspect the phase.
pub async fn run_once<P: Presenter>(
    converter: &dyn Converter,
    input: &str,
    presenter: &mut P,
) -> Session {
    let mut session = Session::new();
    session.edit_input(input);

    let ticket = match session.submit() {
        Ok(ticket) => ticket,
        Err(reason) => {
            presenter.rejected(reason);
            return session;
        }
    };
    presenter.loading();

    let outcome = converter.convert(session.input()).await;
    session.apply(ticket, outcome);
    presenter.screen(&render(&session, BOUND));
    session
}

/// Spawn the request for `ticket`, reporting the outcome on `tx`.
fn spawn_fetch(
    converter: Arc<dyn Converter>,
    input: String,
    ticket: Ticket,
    tx: mpsc::UnboundedSender<Outcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = converter.convert(&input).await;
        // Receiver only goes away when the driver has returned
        let _ = tx.send((ticket, outcome));
    })
}

/// Read submissions line by line until end of input.
///
/// Each non-empty line replaces the input and is submitted right away. A
/// request still in flight when the next line arrives is aborted, and any
/// response that does slip through is discarded by the session as stale.
/// After end of input the driver waits for the last request to finish.
///
/// # Errors
/// Returns an error if reading from `reader` fails.
pub async fn run_interactive<R, P>(
    converter: Arc<dyn Converter>,
    reader: R,
    presenter: &mut P,
) -> Result<Session>
where
    R: AsyncBufRead + Unpin,
    P: Presenter,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();
    let mut lines = reader.lines();
    let mut session = Session::new();
    let mut in_flight: Option<JoinHandle<()>> = None;
    let mut input_open = true;

    loop {
        if !input_open && !session.is_fetching() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line.context("Failed to read input")? else {
                    input_open = false;
                    continue;
                };

                session.edit_input(line.trim());
                match session.submit() {
                    Ok(ticket) => {
                        if let Some(handle) = in_flight.take() {
                            handle.abort();
                        }
                        in_flight = Some(spawn_fetch(
                            Arc::clone(&converter),
                            session.input().to_string(),
                            ticket,
                            tx.clone(),
                        ));
                        presenter.loading();
                    }
                    Err(reason) => presenter.rejected(reason),
                }
            }
            Some((ticket, outcome)) = rx.recv() => {
                if session.apply(ticket, outcome) == ApplyResult::Applied {
                    in_flight = None;
                    presenter.screen(&render(&session, BOUND));
                }
            }
        }
    }

    Ok(session)
}
