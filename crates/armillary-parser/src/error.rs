//! Error and diagnostic system for the Armillary parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Element locations identifying the offending XML element
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, the element it
//! refers to, and help text. Multiple error diagnostics are wrapped in
//! [`ParseError`] for returning from [`crate::parse`].
//!
//! # Example
//!
//! ```
//! # use armillary_parser::error::{Diagnostic, ElementKind, ErrorCode, Location};
//!
//! let class = Location::new(ElementKind::Class, 2).with_name("Car");
//! let diag = Diagnostic::error("missing required attribute `type`")
//!     .with_code(ErrorCode::E100)
//!     .at(Location::new(ElementKind::Attribute, 1).within(class))
//!     .with_help("add a `type` attribute to the element");
//!
//! assert_eq!(
//!     diag.to_string(),
//!     "error[E100]: missing required attribute `type` (Attribute #1 in Class #2 `Car`)"
//! );
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod location;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use location::{ElementKind, Location};
pub use parse_error::ParseError;
pub use severity::Severity;
