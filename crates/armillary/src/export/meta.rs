//! Flat class metadata.
//!
//! Every class of the model becomes one JSON record, whether or not it is
//! reachable from the root:
//!
//! ```json
//! {
//!     "class": "Root",
//!     "documentation": "d",
//!     "isRoot": true,
//!     "parameters": [
//!         { "name": "x", "type": "int" },
//!         { "name": "Child", "type": "class" }
//!     ],
//!     "min": "1",
//!     "max": "1"
//! }
//! ```

use log::debug;
use serde::Serialize;

use armillary_core::model::{ClassRecord, Model, RelationKind};

use super::{Error, Exporter, to_json_pretty};
use crate::config::RenderConfig;

/// Metadata record of a single class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMetadata {
    class: String,
    documentation: String,
    #[serde(rename = "isRoot")]
    is_root: bool,
    parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<String>,
}

/// An attribute or composed class listed on a [`ClassMetadata`] record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
}

impl ClassMetadata {
    /// Projects a class record.
    ///
    /// Attributes are listed first, then one `class` parameter per class
    /// relation. `min` and `max` come from the last class relation; a class
    /// without one has neither.
    pub fn from_class(class: &ClassRecord) -> Self {
        let mut parameters: Vec<Parameter> = class
            .attributes()
            .iter()
            .map(|attribute| Parameter {
                name: attribute.name().to_string(),
                type_name: attribute.type_name().to_string(),
            })
            .collect();

        let mut bounds = None;
        for relation in class.relations().iter().filter(|r| r.is_class()) {
            parameters.push(Parameter {
                name: relation.target().to_string(),
                type_name: RelationKind::Class.as_str().to_string(),
            });
            bounds = Some((relation.min(), relation.max()));
        }

        Self {
            class: class.name().to_string(),
            documentation: class.documentation().to_string(),
            is_root: class.is_root(),
            parameters,
            min: bounds.map(|(min, _)| min.to_string()),
            max: bounds.map(|(_, max)| max.to_string()),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn min(&self) -> Option<&str> {
        self.min.as_deref()
    }

    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }
}

impl Parameter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Writes the metadata of every class as a JSON array.
#[derive(Debug, Clone)]
pub struct MetaFlattener {
    json_indent: usize,
}

impl Default for MetaFlattener {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl MetaFlattener {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            json_indent: config.json_indent(),
        }
    }

    /// Returns one record per class, in model order.
    pub fn flatten(&self, model: &Model) -> Vec<ClassMetadata> {
        let records: Vec<_> = model.classes().map(ClassMetadata::from_class).collect();
        debug!(records = records.len(); "Class metadata flattened");
        records
    }
}

impl Exporter for MetaFlattener {
    fn export(&self, model: &Model) -> Result<String, Error> {
        Ok(to_json_pretty(&self.flatten(model), self.json_indent)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use armillary_core::{
        identifier::Id,
        model::{AttributeRecord, RelationEdge},
    };

    use super::*;

    fn root_child_model() -> Model {
        let mut root = ClassRecord::new(
            Id::new("Root"),
            true,
            "d",
            vec![AttributeRecord::new("x", "int")],
        );
        root.push_relation(RelationEdge::composition(Id::new("Child"), "1"));
        let child = ClassRecord::new(
            Id::new("Child"),
            false,
            "",
            vec![AttributeRecord::new("y", "str")],
        );
        [root, child].into_iter().collect()
    }

    #[test]
    fn test_root_with_child() {
        let text = MetaFlattener::default()
            .export(&root_child_model())
            .unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value,
            json!([
                {
                    "class": "Root",
                    "documentation": "d",
                    "isRoot": true,
                    "parameters": [
                        {"name": "x", "type": "int"},
                        {"name": "Child", "type": "class"}
                    ],
                    "min": "1",
                    "max": "1"
                },
                {
                    "class": "Child",
                    "documentation": "",
                    "isRoot": false,
                    "parameters": [{"name": "y", "type": "str"}]
                }
            ])
        );
    }

    #[test]
    fn test_record_key_order() {
        let text = MetaFlattener::default()
            .export(&root_child_model())
            .unwrap();

        let positions: Vec<_> = [
            "\"class\"",
            "\"documentation\"",
            "\"isRoot\"",
            "\"parameters\"",
            "\"min\"",
            "\"max\"",
        ]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_last_relation_sets_bounds() {
        let mut car = ClassRecord::new(Id::new("Car"), true, "", Vec::new());
        car.push_relation(RelationEdge::composition(Id::new("Wheel"), "4"));
        car.push_relation(RelationEdge::composition(Id::new("Engine"), "1"));

        let record = ClassMetadata::from_class(&car);

        let names: Vec<_> = record.parameters().iter().map(Parameter::name).collect();
        assert_eq!(names, ["Wheel", "Engine"]);
        assert_eq!(record.min(), Some("1"));
        assert_eq!(record.max(), Some("1"));
    }

    #[test]
    fn test_records_ignore_reachability() {
        let model: Model = [
            ClassRecord::new(Id::new("A"), false, "", Vec::new()),
            ClassRecord::new(Id::new("B"), false, "", Vec::new()),
            ClassRecord::new(Id::new("C"), false, "", Vec::new()),
        ]
        .into_iter()
        .collect();

        let records = MetaFlattener::default().flatten(&model);

        let classes: Vec<_> = records.iter().map(ClassMetadata::class).collect();
        assert_eq!(classes, ["A", "B", "C"]);
    }

    #[test]
    fn test_dangling_target_is_listed() {
        let mut class = ClassRecord::new(Id::new("A"), true, "", Vec::new());
        class.push_relation(RelationEdge::composition(Id::new("Ghost"), "0"));
        let model: Model = [class].into_iter().collect();

        let records = MetaFlattener::default().flatten(&model);

        assert_eq!(records[0].parameters()[0].name(), "Ghost");
        assert_eq!(records[0].min(), Some("0"));
    }

    #[test]
    fn test_empty_model() {
        let text = MetaFlattener::default().export(&Model::new()).unwrap();
        assert_eq!(text, "[]");
    }
}
