//! The ParseError type for wrapping model diagnostics.
//!
//! [`ParseError`] wraps the diagnostics raised while reading a model
//! document that failed. At least one of them is an error; warnings emitted
//! along the way are kept so the report is complete.

use std::fmt;

use thiserror::Error;

use crate::error::Diagnostic;

/// Error type for reading a class model.
///
/// Wraps one or more diagnostics. The display form shows the first one and
/// how many more there are.
#[derive(Debug, Error)]
#[error("{}", Summary(.diagnostics))]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

struct Summary<'a>(&'a [Diagnostic]);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.0.first() {
            write!(f, "{first}")?;
            if self.0.len() > 1 {
                write!(f, " (+{} more)", self.0.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
