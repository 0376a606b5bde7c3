//! numtext - number-to-text conversion client
//!
//! Sends a list of integers to a remote number-to-text service, then sorts
//! and title-cases the spelled-out results that fall within a fixed bound,
//! reporting how many fell below or above it.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod client;
pub mod config;
pub mod convert;
pub mod session;
pub mod telemetry;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use cli::TerminalPresenter;
pub use client::{Converter, FetchError, HttpConverter};
pub use config::{AppConfig, EndpointConfig, Overrides};
pub use convert::{classify, format, Classification, FormatError, WholeNumber, BOUND};
pub use session::{render, run_interactive, run_once, Presenter, Screen, Session, View};
