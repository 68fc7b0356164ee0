//! The core diagnostic type for the Armillary error system.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, the model element it refers to, and help text.

use std::fmt;

use crate::error::{ErrorCode, Location, Severity};

/// A diagnostic message about the model document.
///
/// Diagnostics carry:
/// - A severity level
/// - An optional error code for documentation and searchability
/// - A primary message describing the issue
/// - The element the issue was found on, when there is one
/// - Optional help text with suggestions
///
/// # Example
///
/// ```text
/// error[E100]: missing required attribute `name` (Class #3)
///   help: every `Class` element needs a `name` attribute
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    location: Option<Location>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use armillary_parser::error::{Diagnostic, ElementKind, ErrorCode, Location};
    ///
    /// let diag = Diagnostic::error("missing required attribute `source`")
    ///     .with_code(ErrorCode::E100)
    ///     .at(Location::new(ElementKind::Aggregation, 4));
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create the error for a mandatory XML attribute that is absent.
    pub fn missing_field(field: &str, location: Location) -> Self {
        let kind = location.kind();
        Self::error(format!("missing required attribute `{field}`"))
            .with_code(ErrorCode::E100)
            .at(location)
            .with_help(format!("every `{kind}` element needs a `{field}` attribute"))
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the element this diagnostic refers to, if any.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the element this diagnostic refers to.
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            location: None,
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message (location)" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(location) = &self.location {
            write!(f, " ({location})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}
