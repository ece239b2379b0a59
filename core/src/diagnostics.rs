//! Non-fatal diagnostics produced while resolving options.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

/// What is wrong with an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Option-shaped but not declared in the schema.
    UnknownOption,
    /// Option-shaped final argument with nothing after it to use as a value.
    MissingTrailingValue,
}

impl DiagnosticKind {
    /// Stable identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownOption => "unknown_option",
            Self::MissingTrailingValue => "missing_trailing_value",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A warning about one argument, borrowing the offending token.
///
/// # Examples
///
/// ```
/// use command_options_core::{Diagnostic, DiagnosticKind};
///
/// let diag = Diagnostic::new(DiagnosticKind::UnknownOption, "-z", 3);
/// assert_eq!(
///     diag.to_string(),
///     "Warning: argument #3, \"-z\", is not a known option."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Diagnostic<'a> {
    pub kind: DiagnosticKind,
    pub token: &'a str,
    pub index: usize,
}

impl<'a> Diagnostic<'a> {
    pub fn new(kind: DiagnosticKind, token: &'a str, index: usize) -> Self {
        Self { kind, token, index }
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnknownOption => write!(
                f,
                "Warning: argument #{}, \"{}\", is not a known option.",
                self.index, self.token
            ),
            DiagnosticKind::MissingTrailingValue => write!(
                f,
                "Warning: argument #{}, \"{}\", has no value following it.",
                self.index, self.token
            ),
        }
    }
}

/// Writes one line per diagnostic.
pub fn report_diagnostics<W: Write>(diagnostics: &[Diagnostic<'_>], mut out: W) -> io::Result<()> {
    for diag in diagnostics {
        writeln!(out, "{diag}")?;
    }
    out.flush()
}
