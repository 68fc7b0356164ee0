//! Locations of model elements for diagnostic messages.
//!
//! The XML reader does not track byte offsets, so diagnostics point at an
//! element by its kind, its 1-based position among its siblings and, when it
//! has one, its name.

use std::fmt;

/// Tag of an element understood by the model reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A top-level `Class` element.
    Class,
    /// An `Attribute` child of a `Class`.
    Attribute,
    /// A top-level `Aggregation` element.
    Aggregation,
}

impl ElementKind {
    /// Returns the XML tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Class => "Class",
            ElementKind::Attribute => "Attribute",
            ElementKind::Aggregation => "Aggregation",
        }
    }

    /// Maps an XML tag to its kind, if it is one the reader understands.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Class" => Some(ElementKind::Class),
            "Attribute" => Some(ElementKind::Attribute),
            "Aggregation" => Some(ElementKind::Aggregation),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Position of an element inside the model document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    kind: ElementKind,
    position: usize,
    name: Option<String>,
    parent: Option<Box<Location>>,
}

impl Location {
    /// Creates a location for the `position`-th element (1-based) among its siblings.
    pub fn new(kind: ElementKind, position: usize) -> Self {
        Self {
            kind,
            position,
            name: None,
            parent: None,
        }
    }

    /// Attaches the element's identifying name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Nests this location inside its enclosing element.
    pub fn within(mut self, parent: Location) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Returns the element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Returns the 1-based position among siblings.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the element's name, if known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the enclosing element, if any.
    pub fn parent(&self) -> Option<&Location> {
        self.parent.as_deref()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind, self.position)?;
        if let Some(name) = &self.name {
            write!(f, " `{name}`")?;
        }
        if let Some(parent) = &self.parent {
            write!(f, " in {parent}")?;
        }
        Ok(())
    }
}
