//! Colored terminal output on stderr.

use std::fmt::Display;

use console::{Term, style};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn line(&self, msg: impl Display) {
        let _ = self.term.write_line(&msg.to_string());
    }

    /// Plain progress line.
    pub(crate) fn info(&self, msg: &str) {
        self.line(msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(style(msg).green());
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(style(msg).yellow());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(style(msg).red());
    }

    /// Per-recipe line, dimmed and indented under the progress lines.
    pub(crate) fn detail(&self, msg: &str) {
        self.line(style(format!("  {msg}")).dim());
    }
}
