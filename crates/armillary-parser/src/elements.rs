//! Typed view of the model document.
//!
//! Converts the generic XML tree into [`ModelElement`]s. Every mandatory
//! attribute is checked here, once, so the loader and resolver work with
//! plain fields and never look attributes up by name.

use log::debug;
use xmltree::{Element, XMLNode};

use crate::error::{Diagnostic, DiagnosticCollector, ElementKind, ErrorCode, Location};

/// A top-level element of the model document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ModelElement {
    Class(ClassElement),
    Aggregation(AggregationElement),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassElement {
    pub name: String,
    pub is_root: bool,
    pub documentation: String,
    pub attributes: Vec<AttributeElement>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttributeElement {
    pub name: String,
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AggregationElement {
    pub source: String,
    pub target: String,
    pub target_multiplicity: String,
    pub location: Location,
}

/// Parses XML text into the document's root element.
pub(crate) fn read_document(source: &str) -> Result<Element, Diagnostic> {
    Element::parse(source.as_bytes()).map_err(|err| {
        Diagnostic::error(format!("malformed model document: {err}"))
            .with_code(ErrorCode::E001)
            .with_help("the model must be a single well-formed XML document")
    })
}

/// Reads the typed elements under `root`, in document order.
///
/// Elements with missing mandatory attributes are reported to `collector`
/// and left out of the result. Unknown tags are skipped.
pub(crate) fn read_elements(
    root: &Element,
    collector: &mut DiagnosticCollector,
) -> Vec<ModelElement> {
    let mut elements = Vec::new();

    for (idx, element) in child_elements(root).enumerate() {
        let position = idx + 1;
        match ElementKind::from_tag(&element.name) {
            Some(ElementKind::Class) => {
                if let Some(class) = read_class(element, position, collector) {
                    elements.push(ModelElement::Class(class));
                }
            }
            Some(ElementKind::Aggregation) => {
                if let Some(aggregation) = read_aggregation(element, position, collector) {
                    elements.push(ModelElement::Aggregation(aggregation));
                }
            }
            _ => {
                debug!(tag = element.name, position; "Skipping unrecognized model element");
            }
        }
    }

    elements
}

fn read_class(
    element: &Element,
    position: usize,
    collector: &mut DiagnosticCollector,
) -> Option<ClassElement> {
    let mut location = Location::new(ElementKind::Class, position);
    let name = attribute(element, "name");
    match name {
        Some(name) => location = location.with_name(name),
        None => collector.emit(Diagnostic::missing_field("name", location.clone())),
    }

    // Attributes are checked even when the class itself is broken so that
    // every missing field shows up in one report.
    let mut attributes = Vec::new();
    let mut complete = name.is_some();
    let attribute_elements = child_elements(element)
        .filter(|child| ElementKind::from_tag(&child.name) == Some(ElementKind::Attribute));
    for (idx, child) in attribute_elements.enumerate() {
        let child_location = Location::new(ElementKind::Attribute, idx + 1);
        let child_location = match attribute(child, "name") {
            Some(attr_name) => child_location.with_name(attr_name),
            None => child_location,
        }
        .within(location.clone());

        let attr_name = required(child, "name", &child_location, collector);
        let type_name = required(child, "type", &child_location, collector);
        match (attr_name, type_name) {
            (Some(name), Some(type_name)) => attributes.push(AttributeElement {
                name: name.to_string(),
                type_name: type_name.to_string(),
            }),
            _ => complete = false,
        }
    }

    if !complete {
        return None;
    }

    Some(ClassElement {
        name: name?.to_string(),
        is_root: attribute(element, "isRoot") == Some("true"),
        documentation: attribute(element, "documentation")
            .unwrap_or_default()
            .to_string(),
        attributes,
        location,
    })
}

fn read_aggregation(
    element: &Element,
    position: usize,
    collector: &mut DiagnosticCollector,
) -> Option<AggregationElement> {
    let location = Location::new(ElementKind::Aggregation, position);

    let source = required(element, "source", &location, collector);
    let target = required(element, "target", &location, collector);
    let target_multiplicity = required(element, "targetMultiplicity", &location, collector);

    Some(AggregationElement {
        source: source?.to_string(),
        target: target?.to_string(),
        target_multiplicity: target_multiplicity?.to_string(),
        location,
    })
}

fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|node| match node {
        XMLNode::Element(child) => Some(child),
        _ => None,
    })
}

fn attribute<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    element.attributes.get(name).map(String::as_str)
}

fn required<'a>(
    element: &'a Element,
    name: &str,
    location: &Location,
    collector: &mut DiagnosticCollector,
) -> Option<&'a str> {
    let value = attribute(element, name);
    if value.is_none() {
        collector.emit(Diagnostic::missing_field(name, location.clone()));
    }
    value
}
