//! Attaches aggregations to their owning classes.

use log::{debug, trace};

use armillary_core::{
    identifier::Id,
    model::{Model, RelationEdge},
};

use crate::{
    elements::ModelElement,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
};

/// Appends a composition edge to the source class of every `Aggregation`.
///
/// Edges are appended in document order. An aggregation whose `source` is
/// not a known class is skipped with warning `E200`. The `target` is never
/// checked; renderers decide what a dangling target means.
pub(crate) fn resolve_relations(
    elements: &[ModelElement],
    model: &mut Model,
    collector: &mut DiagnosticCollector,
) {
    let mut resolved = 0usize;

    for element in elements {
        let ModelElement::Aggregation(aggregation) = element else {
            continue;
        };

        let source = Id::new(&aggregation.source);
        let Some(class) = model.get_mut(source) else {
            collector.emit(
                Diagnostic::warning(format!(
                    "aggregation source `{}` does not match any class",
                    aggregation.source
                ))
                .with_code(ErrorCode::E200)
                .at(aggregation.location.clone())
                .with_help("the aggregation is ignored"),
            );
            continue;
        };

        trace!(
            source = aggregation.source,
            target = aggregation.target,
            multiplicity = aggregation.target_multiplicity;
            "Resolved aggregation"
        );
        class.push_relation(RelationEdge::composition(
            Id::new(&aggregation.target),
            &aggregation.target_multiplicity,
        ));
        resolved += 1;
    }

    debug!(relations = resolved; "Relations resolved");
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        elements::{read_document, read_elements},
        loader::load_classes,
    };

    fn resolve(source: &str) -> (Model, Vec<Diagnostic>) {
        let root = read_document(source).unwrap();
        let mut collector = DiagnosticCollector::new();
        let elements = read_elements(&root, &mut collector);
        let mut model = load_classes(&elements, &mut collector);
        resolve_relations(&elements, &mut model, &mut collector);
        (model, collector.finish().unwrap())
    }

    fn targets(model: &Model, class: &str) -> Vec<String> {
        model
            .get(Id::new(class))
            .unwrap()
            .relations()
            .iter()
            .map(|edge| edge.target().to_string())
            .collect()
    }

    #[test]
    fn test_edges_attach_to_source_only() {
        let (model, warnings) = resolve(
            r#"<Model>
                <Class name="Car"/>
                <Class name="Engine"/>
                <Aggregation source="Car" target="Engine" targetMultiplicity="1"/>
            </Model>"#,
        );

        assert!(warnings.is_empty());
        assert_eq!(targets(&model, "Car"), ["Engine"]);
        assert!(targets(&model, "Engine").is_empty());

        let edge = &model.get(Id::new("Car")).unwrap().relations()[0];
        assert_eq!(edge.min(), "1");
        assert_eq!(edge.max(), "1");
    }

    #[test]
    fn test_aggregation_before_class_still_resolves() {
        let (model, _) = resolve(
            r#"<Model>
                <Aggregation source="Car" target="Wheel" targetMultiplicity="4"/>
                <Class name="Car"/>
            </Model>"#,
        );

        assert_eq!(targets(&model, "Car"), ["Wheel"]);
    }

    #[test]
    fn test_edges_keep_document_order() {
        let (model, _) = resolve(
            r#"<Model>
                <Class name="Car"/>
                <Aggregation source="Car" target="Wheel" targetMultiplicity="4"/>
                <Aggregation source="Car" target="Engine" targetMultiplicity="1"/>
                <Aggregation source="Car" target="Seat" targetMultiplicity="5"/>
            </Model>"#,
        );

        assert_eq!(targets(&model, "Car"), ["Wheel", "Engine", "Seat"]);
    }

    #[test]
    fn test_unknown_source_is_skipped_with_warning() {
        let (model, warnings) = resolve(
            r#"<Model>
                <Class name="Car"/>
                <Aggregation source="Truck" target="Car" targetMultiplicity="1"/>
            </Model>"#,
        );

        assert!(model.classes().all(|class| class.relations().is_empty()));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].severity().is_warning());
        assert_eq!(warnings[0].code(), Some(ErrorCode::E200));
    }

    #[test]
    fn test_dangling_target_is_kept() {
        let (model, warnings) = resolve(
            r#"<Model>
                <Class name="Car"/>
                <Aggregation source="Car" target="Trailer" targetMultiplicity="0"/>
            </Model>"#,
        );

        assert!(warnings.is_empty());
        assert!(!model.contains(Id::new("Trailer")));
        assert_eq!(targets(&model, "Car"), ["Trailer"]);
    }

    fn check_unknown_sources_never_add_edges(sources: Vec<String>) -> Result<(), TestCaseError> {
        let aggregations: String = sources
            .iter()
            .map(|source| {
                format!(r#"<Aggregation source="x{source}" target="Known" targetMultiplicity="1"/>"#)
            })
            .collect();
        let document = format!(r#"<Model><Class name="Known"/>{aggregations}</Model>"#);

        let (model, warnings) = resolve(&document);

        prop_assert!(model.classes().all(|class| class.relations().is_empty()));
        prop_assert_eq!(warnings.len(), sources.len());
        Ok(())
    }

    proptest! {
        #[test]
        fn unknown_sources_never_add_edges(sources in prop::collection::vec("[a-z]{1,8}", 0..8)) {
            check_unknown_sources_never_add_edges(sources)?;
        }
    }
}
