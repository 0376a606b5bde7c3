//! Terminal display for conversion results
//!
//! Formatted lines go to stdout so they can be piped. Counts, errors,
//! notices and progress go to stderr.

use colored::Colorize;

use crate::convert::Bucket;
use crate::session::{Presenter, ResultsView, Screen, SubmitRejected, View};

/// Shown when a finished request left nothing to display
pub const NO_DATA: &str = "No data available";

/// Label for the count of records outside the bound on one side.
///
/// Returns `None` for the in-range bucket, which is shown as a list instead.
#[must_use]
pub fn bucket_label(bucket: Bucket, bound: u64, count: usize) -> Option<String> {
    match bucket {
        Bucket::Below => Some(format!("below -{bound} | Count: {count}")),
        Bucket::Above => Some(format!("above {bound} | Count: {count}")),
        Bucket::InRange => None,
    }
}

/// `Presenter` writing to the terminal
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    interactive: bool,
}

impl TerminalPresenter {
    /// Create a presenter; interactive mode also prints a prompt after each screen
    #[must_use]
    pub const fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    /// Print the title and usage hint at the start of an interactive session
    pub fn print_banner(&self) {
        eprintln!(
            "\n{} {}",
            "===".bold().cyan(),
            "Number to Text Converter".bold().cyan()
        );
        eprintln!("{}", "─".repeat(50).dimmed());
        eprintln!("  Enter a list of numbers separated by commas (e.g. 1,12,300,-5000)");
        eprintln!("  {}", "One list per line, Ctrl-D to quit".dimmed());
        self.prompt();
    }

    fn prompt(&self) {
        if self.interactive {
            eprint!("{} ", ">".bold());
        }
    }

    fn render_results(view: &ResultsView, bound: u64) {
        if view.below_count > 0 {
            if let Some(label) = bucket_label(Bucket::Below, bound, view.below_count) {
                eprintln!("  {} {}", "▼".blue().bold(), label.blue());
            }
        }

        for line in &view.lines {
            println!("{line}");
        }

        if view.above_count > 0 {
            if let Some(label) = bucket_label(Bucket::Above, bound, view.above_count) {
                eprintln!("  {} {}", "▲".magenta().bold(), label.magenta());
            }
        }

        if !view.skipped.is_empty() {
            eprintln!(
                "  {} {} record(s) skipped: malformed text",
                "⚠".yellow().bold(),
                view.skipped.len()
            );
        }
    }
}

impl Presenter for TerminalPresenter {
    fn loading(&mut self) {
        eprintln!("  {}", "Converting...".dimmed());
    }

    fn rejected(&mut self, reason: SubmitRejected) {
        eprintln!("  {} {}", "✗".red().bold(), reason.to_string().red());
        self.prompt();
    }

    fn screen(&mut self, screen: &Screen) {
        if let Some(error) = &screen.error {
            eprintln!("  {} {}", "✗".red().bold(), error.red());
        }

        if let Some(notice) = &screen.notice {
            eprintln!("  {} {}", "⚠".yellow().bold(), notice.yellow());
        }

        match &screen.body {
            View::Loading => eprintln!("  {}", "Converting...".dimmed()),
            View::Empty => eprintln!("  {}", NO_DATA.dimmed()),
            View::Results(view) => Self::render_results(view, screen.bound),
        }

        self.prompt();
    }
}
