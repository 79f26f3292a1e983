//! Terminal implementation of the view adapter.
//!
//! Navigation becomes a hint naming the command to run next; alerts go to
//! stderr and mark the run as failed.

use std::cell::Cell;

use aff_auth::{ErrorKind, ViewAdapter};
use aff_core::View;

#[derive(Debug, Default)]
pub struct CliAdapter {
    quiet: bool,
    failed: Cell<bool>,
}

impl CliAdapter {
    pub const fn new(quiet: bool) -> Self {
        Self {
            quiet,
            failed: Cell::new(false),
        }
    }

    /// Whether any alert was raised or a guard refused entry.
    pub fn failed(&self) -> bool {
        self.failed.get()
    }

    pub fn mark_failed(&self) {
        self.failed.set(true);
    }
}

/// Command that renders `view` in the terminal.
pub const fn next_command(view: View) -> &'static str {
    match view {
        View::Entry => "afl auth login --email <email> --password <password>",
        View::Register => "afl register",
        View::Dashboard => "afl dashboard",
        View::SetPassword => "afl auth set-password --link <reset-link> --password <new-password>",
        View::Admin => "afl admin list",
    }
}

const fn label(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Validation => "invalid input",
        ErrorKind::Authentication => "rejected",
        ErrorKind::Connection => "connection error",
        ErrorKind::Unauthenticated => "not logged in",
        ErrorKind::Storage => "storage error",
    }
}

impl ViewAdapter for CliAdapter {
    fn navigate(&self, view: View) {
        if !self.quiet {
            eprintln!("next: {}", next_command(view));
        }
    }

    fn alert(&self, kind: ErrorKind, message: &str) {
        self.mark_failed();
        eprintln!("afl {}: {message}", label(kind));
    }
}
