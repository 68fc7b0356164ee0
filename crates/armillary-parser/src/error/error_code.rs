//! Error codes for the Armillary diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document errors
//! - `E1xx` - Element errors
//! - `E2xx` - Model resolution warnings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Malformed XML.
    ///
    /// The model document is not well-formed XML.
    E001,

    // =========================================================================
    // Element Errors (E1xx)
    // =========================================================================
    /// Missing required attribute.
    ///
    /// A `Class`, `Attribute` or `Aggregation` element lacks one of its
    /// mandatory attributes.
    E100,

    // =========================================================================
    // Resolution Warnings (E2xx)
    // =========================================================================
    /// Unknown aggregation source.
    ///
    /// An `Aggregation` names a `source` class that is not defined. The
    /// aggregation is ignored.
    E200,

    /// Duplicate class definition.
    ///
    /// Two `Class` elements share a name. The later definition replaces the
    /// earlier one.
    E201,

    /// Multiple root classes.
    ///
    /// More than one class has `isRoot="true"`. The first one is used.
    E202,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed XML",
            ErrorCode::E100 => "missing required attribute",
            ErrorCode::E200 => "unknown aggregation source",
            ErrorCode::E201 => "duplicate class definition",
            ErrorCode::E202 => "multiple root classes",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
