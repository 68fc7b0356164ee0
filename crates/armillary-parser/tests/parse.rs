use armillary_core::identifier::Id;
use armillary_core::model::{AttributeRecord, ClassRecord, RelationKind};
use armillary_parser::error::{ErrorCode, Severity};
use armillary_parser::{parse, parse_with_warnings};

#[test]
fn test_root_with_child() {
    let source = r#"
        <Model>
            <Class name="Root" isRoot="true" documentation="d">
                <Attribute name="x" type="int"/>
            </Class>
            <Class name="Child">
                <Attribute name="y" type="str"/>
            </Class>
            <Aggregation source="Root" target="Child" targetMultiplicity="1"/>
        </Model>
    "#;

    let model = parse(source).expect("Failed to parse");

    assert_eq!(model.len(), 2);
    let root = model.root().expect("Expected a root class");
    assert_eq!(root.name(), Id::new("Root"));
    assert_eq!(root.documentation(), "d");
    assert_eq!(root.attributes(), [AttributeRecord::new("x", "int")]);

    let relations = root.relations();
    assert_eq!(relations.len(), 1);
    assert_eq!(relations[0].target(), Id::new("Child"));
    assert_eq!(relations[0].kind(), RelationKind::Class);
    assert_eq!(relations[0].min(), "1");
    assert_eq!(relations[0].max(), "1");

    let child = model.get(Id::new("Child")).expect("Expected Child");
    assert!(!child.is_root());
    assert!(child.relations().is_empty());
}

#[test]
fn test_classes_keep_declaration_order() {
    let source = r#"
        <Model>
            <Class name="Gamma"/>
            <Class name="Alpha"/>
            <Class name="Beta" isRoot="true"/>
        </Model>
    "#;

    let model = parse(source).expect("Failed to parse");

    let names: Vec<_> = model.classes().map(|c| c.name().to_string()).collect();
    assert_eq!(names, ["Gamma", "Alpha", "Beta"]);
}

#[test]
fn test_unknown_source_adds_no_edge() {
    let source = r#"
        <Model>
            <Class name="A" isRoot="true"/>
            <Aggregation source="Z" target="A" targetMultiplicity="1"/>
        </Model>
    "#;

    let (model, warnings) = parse_with_warnings(source).expect("Failed to parse");

    assert!(model.classes().all(|class| class.relations().is_empty()));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].severity(), Severity::Warning);
    assert_eq!(warnings[0].code(), Some(ErrorCode::E200));
    assert_eq!(
        warnings[0].to_string(),
        "warning[E200]: aggregation source `Z` does not match any class (Aggregation #2)"
    );
}

#[test]
fn test_model_without_root_still_parses() {
    let model = parse(r#"<Model><Class name="A"/></Model>"#).expect("Failed to parse");

    assert!(model.root().is_none());
    assert_eq!(model.len(), 1);
}

#[test]
fn test_cyclic_aggregations_are_recorded() {
    let source = r#"
        <Model>
            <Class name="A" isRoot="true"/>
            <Class name="B"/>
            <Aggregation source="A" target="B" targetMultiplicity="1"/>
            <Aggregation source="B" target="A" targetMultiplicity="1"/>
        </Model>
    "#;

    let model = parse(source).expect("Failed to parse");

    let a = model.get(Id::new("A")).unwrap();
    let b = model.get(Id::new("B")).unwrap();
    assert_eq!(a.relations()[0].target(), Id::new("B"));
    assert_eq!(b.relations()[0].target(), Id::new("A"));
}

#[test]
fn test_missing_fields_are_all_reported() {
    let source = r#"
        <Model>
            <Class name="Car" isRoot="true">
                <Attribute name="vin"/>
            </Class>
            <Aggregation source="Car" targetMultiplicity="4"/>
        </Model>
    "#;

    let err = parse(source).expect_err("Expected missing fields to fail");

    let diagnostics = err.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.code() == Some(ErrorCode::E100)));
    assert_eq!(
        diagnostics[0].to_string(),
        "error[E100]: missing required attribute `type` (Attribute #1 `vin` in Class #1 `Car`)"
    );
    assert_eq!(
        diagnostics[1].to_string(),
        "error[E100]: missing required attribute `target` (Aggregation #2)"
    );
    assert_eq!(
        err.to_string(),
        "error[E100]: missing required attribute `type` (Attribute #1 `vin` in Class #1 `Car`) (+1 more)"
    );
}

#[test]
fn test_malformed_xml_fails() {
    let err = parse("<Model><Class name=\"A\">").expect_err("Expected malformed XML to fail");

    assert_eq!(err.diagnostics().len(), 1);
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
}

#[test]
fn test_duplicate_class_last_definition_wins() {
    let source = r#"
        <Model>
            <Class name="A" isRoot="true">
                <Attribute name="old" type="int"/>
            </Class>
            <Class name="B"/>
            <Class name="A" isRoot="true">
                <Attribute name="new" type="int"/>
            </Class>
        </Model>
    "#;

    let (model, warnings) = parse_with_warnings(source).expect("Failed to parse");

    let names: Vec<_> = model.classes().map(ClassRecord::name).collect();
    assert_eq!(names, [Id::new("A"), Id::new("B")]);
    assert_eq!(
        model.get(Id::new("A")).unwrap().attributes(),
        [AttributeRecord::new("new", "int")]
    );
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code(), Some(ErrorCode::E201));
}
