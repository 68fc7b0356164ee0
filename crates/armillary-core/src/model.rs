//! Resolved class model.
//!
//! These types are the output of the parser: one [`ClassRecord`] per `Class`
//! element, with aggregations attached as [`RelationEdge`]s on the owning
//! (source) class. The target class carries no back-reference.
//!
//! # Pipeline Position
//!
//! ```text
//! Model XML
//!     ↓ parser (typed elements, loader, relation resolver)
//! Model (these types)
//!     ├─→ tree renderer     → config.xml
//!     └─→ metadata flattener → meta.json
//! ```

use indexmap::IndexMap;

use crate::identifier::Id;

/// Kind of a relation edge.
///
/// Only composition edges between classes exist in the input format today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RelationKind {
    /// Composition of another class.
    #[default]
    Class,
}

impl RelationKind {
    /// Returns the literal used for this kind in generated artifacts.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Class => "class",
        }
    }
}

/// A typed attribute declared on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    name: String,
    type_name: String,
}

impl AttributeRecord {
    /// Creates an attribute with its declared type.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// Returns the attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared primitive or class type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// A directed ownership edge from a parent class to a child class.
///
/// `min` and `max` are both taken from the aggregation's single target
/// multiplicity, so in practice they always hold the same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationEdge {
    target: Id,
    kind: RelationKind,
    min: String,
    max: String,
}

impl RelationEdge {
    /// Creates a class composition edge whose bounds both equal `multiplicity`.
    pub fn composition(target: Id, multiplicity: impl Into<String>) -> Self {
        let multiplicity = multiplicity.into();
        Self {
            target,
            kind: RelationKind::Class,
            min: multiplicity.clone(),
            max: multiplicity,
        }
    }

    /// Returns the name of the referenced class.
    ///
    /// The referenced class is not guaranteed to exist in the model.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the relation kind.
    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    /// Returns `true` if this edge composes another class.
    pub fn is_class(&self) -> bool {
        matches!(self.kind, RelationKind::Class)
    }

    /// Returns the lower multiplicity bound.
    pub fn min(&self) -> &str {
        &self.min
    }

    /// Returns the upper multiplicity bound.
    pub fn max(&self) -> &str {
        &self.max
    }
}

/// A class of the model with its attributes and outgoing relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    name: Id,
    is_root: bool,
    documentation: String,
    attributes: Vec<AttributeRecord>,
    relations: Vec<RelationEdge>,
}

impl ClassRecord {
    /// Creates a class without relations.
    pub fn new(
        name: Id,
        is_root: bool,
        documentation: impl Into<String>,
        attributes: Vec<AttributeRecord>,
    ) -> Self {
        Self {
            name,
            is_root,
            documentation: documentation.into(),
            attributes,
            relations: Vec::new(),
        }
    }

    /// Returns the class name.
    pub fn name(&self) -> Id {
        self.name
    }

    /// Returns `true` if this class is the entry point of the nested tree.
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Returns the documentation text, empty when none was given.
    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    /// Returns the attributes in declaration order.
    pub fn attributes(&self) -> &[AttributeRecord] {
        &self.attributes
    }

    /// Returns the outgoing relations in the order they were resolved.
    pub fn relations(&self) -> &[RelationEdge] {
        &self.relations
    }

    /// Appends an outgoing relation.
    pub fn push_relation(&mut self, relation: RelationEdge) {
        self.relations.push(relation);
    }
}

/// All classes of a model keyed by name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    classes: IndexMap<Id, ClassRecord>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a class, returning the record it replaced.
    ///
    /// A replaced class keeps its original position in iteration order.
    pub fn insert(&mut self, class: ClassRecord) -> Option<ClassRecord> {
        self.classes.insert(class.name(), class)
    }

    /// Returns the class with the given name.
    pub fn get(&self, name: Id) -> Option<&ClassRecord> {
        self.classes.get(&name)
    }

    /// Returns the class with the given name for mutation.
    pub fn get_mut(&mut self, name: Id) -> Option<&mut ClassRecord> {
        self.classes.get_mut(&name)
    }

    /// Returns `true` if a class with this name exists.
    pub fn contains(&self, name: Id) -> bool {
        self.classes.contains_key(&name)
    }

    /// Returns the first class flagged as root, if any.
    pub fn root(&self) -> Option<&ClassRecord> {
        self.classes.values().find(|class| class.is_root())
    }

    /// Iterates over all classes in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassRecord> {
        self.classes.values()
    }

    /// Returns the number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if the model has no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<ClassRecord> for Model {
    fn from_iter<I: IntoIterator<Item = ClassRecord>>(iter: I) -> Self {
        let mut model = Self::new();
        for class in iter {
            model.insert(class);
        }
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str, is_root: bool) -> ClassRecord {
        ClassRecord::new(Id::new(name), is_root, "", Vec::new())
    }

    #[test]
    fn test_composition_copies_multiplicity_into_both_bounds() {
        let edge = RelationEdge::composition(Id::new("Wheel"), "4");

        assert_eq!(edge.min(), "4");
        assert_eq!(edge.max(), "4");
        assert!(edge.is_class());
        assert_eq!(edge.kind().as_str(), "class");
    }

    #[test]
    fn test_model_preserves_declaration_order() {
        let model: Model = ["Car", "Engine", "Wheel"]
            .into_iter()
            .map(|name| class(name, false))
            .collect();

        let names: Vec<_> = model.classes().map(|c| c.name().to_string()).collect();
        assert_eq!(names, ["Car", "Engine", "Wheel"]);
    }

    #[test]
    fn test_insert_duplicate_keeps_position() {
        let mut model = Model::new();
        model.insert(class("A", false));
        model.insert(class("B", false));

        let replaced = model.insert(class("A", true));

        assert!(replaced.is_some());
        assert_eq!(model.len(), 2);
        let first = model.classes().next().unwrap();
        assert_eq!(first.name(), "A");
        assert!(first.is_root());
    }

    #[test]
    fn test_root_returns_first_flagged_class() {
        let model: Model = [class("A", false), class("B", true), class("C", true)]
            .into_iter()
            .collect();

        assert_eq!(model.root().map(ClassRecord::name), Some(Id::new("B")));
    }

    #[test]
    fn test_root_missing() {
        let model: Model = [class("A", false)].into_iter().collect();
        assert!(model.root().is_none());
    }

    #[test]
    fn test_push_relation_appends_in_order() {
        let mut car = class("Car", true);
        car.push_relation(RelationEdge::composition(Id::new("Engine"), "1"));
        car.push_relation(RelationEdge::composition(Id::new("Wheel"), "4"));

        let targets: Vec<_> = car.relations().iter().map(RelationEdge::target).collect();
        assert_eq!(targets, [Id::new("Engine"), Id::new("Wheel")]);
    }
}
