//! Model artifacts.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a resolved [`Model`] into a text artifact. It is the final stage
//! of the model pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Model XML
//!     ↓ parse
//! Model
//!     ↓ export (this module)
//! Artifact text
//! ```
//!
//! # Available Backends
//!
//! - [`tree`] - nested configuration skeleton via [`tree::TreeRenderer`]
//! - [`meta`] - flat class metadata via [`meta::MetaFlattener`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. Each variant converts into the
//! matching [`ArmillaryError`] variant at the crate boundary.
//!
//! [`ArmillaryError`]: crate::ArmillaryError

pub mod meta;
pub mod tree;

use std::fmt;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use armillary_core::{identifier::Id, model::Model};

/// Abstraction for model export backends.
pub trait Exporter {
    /// Exports the model to the backend's text format.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the model cannot be represented in the
    /// target format.
    fn export(&self, model: &Model) -> Result<String, Error>;
}

/// Errors that can occur during model export.
#[derive(Debug)]
pub enum Error {
    /// No class is flagged as root.
    RootNotFound,
    /// A relation of `owner` points at a class missing from the model.
    DanglingReference { owner: Id, target: Id },
    /// Serializing a JSON artifact failed.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotFound => write!(f, "Root class not found in model"),
            Self::DanglingReference { owner, target } => {
                write!(f, "Class `{owner}` references unknown class `{target}`")
            }
            Self::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Serializes `value` as pretty JSON with `indent` spaces per level.
///
/// Non-ASCII text is written as UTF-8, not escaped.
pub(crate) fn to_json_pretty<T: Serialize + ?Sized>(
    value: &T,
    indent: usize,
) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
