//! Error types for Armillary operations.
//!
//! This module provides the main error type [`ArmillaryError`] which wraps
//! the error conditions that can occur while producing artifacts.

use std::io;

use thiserror::Error;

use armillary_core::{document::DocumentError, identifier::Id};
use armillary_parser::error::ParseError;

/// The main error type for Armillary operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps every parser diagnostic, so callers can report
/// each one separately.
#[derive(Debug, Error)]
pub enum ArmillaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Root class not found in model")]
    RootNotFound,

    #[error("Class `{owner}` references unknown class `{target}`")]
    DanglingReference { owner: Id, target: Id },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document `{name}`: {err}")]
    InvalidDocument { name: String, err: DocumentError },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<crate::export::Error> for ArmillaryError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            crate::export::Error::RootNotFound => Self::RootNotFound,
            crate::export::Error::DanglingReference { owner, target } => {
                Self::DanglingReference { owner, target }
            }
            crate::export::Error::Json(err) => Self::Json(err),
        }
    }
}

impl ArmillaryError {
    /// Create a new `InvalidDocument` error for the named input.
    pub fn new_invalid_document(name: impl Into<String>, err: DocumentError) -> Self {
        Self::InvalidDocument {
            name: name.into(),
            err,
        }
    }
}
