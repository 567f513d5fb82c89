//! The diagnostic channel.
//!
//! Diagnostics are part of the resolver's contract: soft failures and the
//! fatal-but-successful cases are reported here rather than through the error
//! return. Rendering is left to whoever drains the sink.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// Advice aimed at the author of the build description.
    AuthorWarning,
    /// General warning.
    Warning,
    /// Fatal error. The enclosing pass decides whether to stop.
    FatalError,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AuthorWarning => "author warning",
            Self::Warning => "warning",
            Self::FatalError => "fatal error",
        })
    }
}

/// A single emitted diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// How severe it is.
    pub severity: Severity,
    /// The message text.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Receiver of diagnostics.
pub trait DiagnosticSink {
    /// Emits a diagnostic.
    fn emit(&mut self, severity: Severity, message: String);
}

/// A sink that keeps every diagnostic in emission order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected diagnostics.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Returns the number of collected diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts diagnostics of one severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Returns true if any fatal error was emitted.
    #[must_use]
    pub fn has_fatal(&self) -> bool {
        self.count(Severity::FatalError) > 0
    }

    /// Removes and returns all collected diagnostics.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }

    /// Clears the log.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn emit(&mut self, severity: Severity, message: String) {
        self.entries.push(Diagnostic { severity, message });
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, severity: Severity, message: String) {
        self.push(Diagnostic { severity, message });
    }
}
