//! Builds class records from `Class` elements.
//!
//! Relations are not touched here; see [`crate::resolve`].

use log::{debug, trace};

use armillary_core::{
    identifier::Id,
    model::{AttributeRecord, ClassRecord, Model},
};

use crate::{
    elements::ModelElement,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, Location},
};

/// Builds the name → class mapping from the `Class` elements, in document order.
///
/// A name defined twice keeps its first position but takes the later
/// definition (warning `E201`). More than one root class is reported as
/// warning `E202`.
pub(crate) fn load_classes(
    elements: &[ModelElement],
    collector: &mut DiagnosticCollector,
) -> Model {
    let mut model = Model::new();

    for element in elements {
        let ModelElement::Class(class) = element else {
            continue;
        };

        let attributes = class
            .attributes
            .iter()
            .map(|attr| AttributeRecord::new(&attr.name, &attr.type_name))
            .collect();
        let record = ClassRecord::new(
            Id::new(&class.name),
            class.is_root,
            &class.documentation,
            attributes,
        );

        trace!(class = class.name, attributes = class.attributes.len(); "Loaded class");

        if model.insert(record).is_some() {
            collector.emit(
                Diagnostic::warning(format!("class `{}` is defined multiple times", class.name))
                    .with_code(ErrorCode::E201)
                    .at(class.location.clone())
                    .with_help("the later definition replaces the earlier one"),
            );
        }
    }

    warn_extra_roots(elements, &model, collector);

    debug!(classes = model.len(); "Classes loaded");
    model
}

/// Reports every root class after the first one in model order.
fn warn_extra_roots(
    elements: &[ModelElement],
    model: &Model,
    collector: &mut DiagnosticCollector,
) {
    let mut roots = model.classes().filter(|class| class.is_root());
    let Some(first) = roots.next() else {
        return;
    };

    for extra in roots {
        let mut diagnostic = Diagnostic::warning(format!(
            "class `{}` is marked as root, but `{}` already is",
            extra.name(),
            first.name()
        ))
        .with_code(ErrorCode::E202)
        .with_help(format!("`{}` is used as the root", first.name()));
        if let Some(location) = last_definition(elements, extra.name()) {
            diagnostic = diagnostic.at(location.clone());
        }
        collector.emit(diagnostic);
    }
}

/// Finds the `Class` element whose definition ended up in the model.
fn last_definition(elements: &[ModelElement], name: Id) -> Option<&Location> {
    elements.iter().rev().find_map(|element| match element {
        ModelElement::Class(class) if name == class.name.as_str() => Some(&class.location),
        _ => None,
    })
}
