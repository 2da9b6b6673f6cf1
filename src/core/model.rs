//! Entity types for the schema model.
//!
//! These are the plain data shapes the store owns: tables with composed
//! fields, relationships between tables, and the purely visual areas and
//! notes. Serde names follow the export file format (camelCase, `type` for
//! the field/relationship kind), so a serialized snapshot matches documents
//! produced by the designer.

use serde::{Deserialize, Serialize};

/// A point on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whether a reference field points at one record or many.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    #[display("one")]
    One,
    #[display("many")]
    Many,
}

/// A single attribute of a table.
///
/// `field_type` is an open string: recognized kinds come from the
/// [`field_types`](crate::core::field_types) registry, but unknown strings
/// are carried through untouched and only affect display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<Cardinality>,
}

impl Field {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            field_type: field_type.into(),
            required: false,
            unique: false,
            is_primary: false,
            description: String::new(),
            default_value: None,
            index: None,
            cardinality: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks the field as the primary key. Primary fields are also required.
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self.required = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = Some(cardinality);
        self
    }
}

/// A modeled entity: a named table owning its fields by composition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub is_collapsed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl Table {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fields: Vec::new(),
            position: Position::default(),
            width: None,
            height: None,
            is_collapsed: false,
            z_index: None,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Find a field by id, returning its index and a reference.
    pub fn find_field(&self, field_id: &str) -> Option<(usize, &Field)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.id == field_id)
    }

    pub fn has_field(&self, field_id: &str) -> bool {
        self.fields.iter().any(|f| f.id == field_id)
    }
}

/// Structural cardinality of a relationship.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    #[display("1:1")]
    OneToOne,
    #[display("1:N")]
    OneToMany,
    #[display("N:1")]
    ManyToOne,
    #[display("N:M")]
    ManyToMany,
}

/// A directed link between two tables.
///
/// Either a structural cardinality link (`relation` set, from templates) or a
/// user-created reference-field link (`is_reference` set). The source field
/// always exists; the target field only exists for two-way references.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: String,
    pub source_table_id: String,
    pub source_field_id: String,
    pub target_table_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_field_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<RelationKind>,
    #[serde(default)]
    pub is_reference: bool,
    #[serde(default)]
    pub is_two_way: bool,
}

impl Relationship {
    pub fn new(
        id: impl Into<String>,
        source_table_id: impl Into<String>,
        source_field_id: impl Into<String>,
        target_table_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_table_id: source_table_id.into(),
            source_field_id: source_field_id.into(),
            target_table_id: target_table_id.into(),
            target_field_id: None,
            relation: None,
            is_reference: false,
            is_two_way: false,
        }
    }

    pub fn with_relation(mut self, relation: RelationKind) -> Self {
        self.relation = Some(relation);
        self
    }

    pub fn with_target_field(mut self, field_id: impl Into<String>) -> Self {
        self.target_field_id = Some(field_id.into());
        self
    }

    pub fn reference(mut self, is_two_way: bool) -> Self {
        self.is_reference = true;
        self.is_two_way = is_two_way;
        self
    }

    /// True when the relationship touches `table_id` as source or target.
    pub fn involves_table(&self, table_id: &str) -> bool {
        self.source_table_id == table_id || self.target_table_id == table_id
    }

    /// True when the relationship is anchored on `(table_id, field_id)` at
    /// either endpoint.
    pub fn involves_field(&self, table_id: &str, field_id: &str) -> bool {
        (self.source_table_id == table_id && self.source_field_id == field_id)
            || (self.target_table_id == table_id
                && self.target_field_id.as_deref() == Some(field_id))
    }
}

/// A free rectangle used for visually grouping tables. No relational
/// semantics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: String,
    pub title: String,
    pub color: String,
    #[serde(default)]
    pub position: Position,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl Area {
    pub fn new(id: impl Into<String>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            position: Position::default(),
            width: 320.0,
            height: 240.0,
            z_index: None,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// A freeform annotation pinned to the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content: String,
    pub color: String,
    #[serde(default)]
    pub position: Position,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl Note {
    pub fn new(id: impl Into<String>, content: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            color: color.into(),
            position: Position::default(),
            width: 200.0,
            height: None,
            z_index: None,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }
}

/// The full model state at one point in time: the unit of import/export and
/// of undo/redo history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSnapshot {
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl ModelSnapshot {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
            && self.relationships.is_empty()
            && self.areas.is_empty()
            && self.notes.is_empty()
    }

    /// Total number of entities across all four collections.
    pub fn entity_count(&self) -> usize {
        self.tables.len() + self.relationships.len() + self.areas.len() + self.notes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder() {
        let field = Field::new("f1", "id", "id").primary().unique();

        assert_eq!(field.id, "f1");
        assert!(field.is_primary);
        assert!(field.required);
        assert!(field.unique);
        assert!(field.cardinality.is_none());
    }

    #[test]
    fn test_table_builder_and_lookup() {
        let table = Table::new("t1", "users")
            .with_position(40.0, 80.0)
            .with_field(Field::new("f1", "id", "id").primary())
            .with_field(Field::new("f2", "email", "email").required().unique());

        assert_eq!(table.fields.len(), 2);
        assert_eq!(table.position, Position::new(40.0, 80.0));

        let (index, field) = table.find_field("f2").unwrap();
        assert_eq!(index, 1);
        assert_eq!(field.name, "email");
        assert!(table.find_field("missing").is_none());
    }

    #[test]
    fn test_relationship_endpoint_checks() {
        let rel = Relationship::new("r1", "t1", "f1", "t2")
            .reference(true)
            .with_target_field("f9");

        assert!(rel.involves_table("t1"));
        assert!(rel.involves_table("t2"));
        assert!(!rel.involves_table("t3"));

        assert!(rel.involves_field("t1", "f1"));
        assert!(rel.involves_field("t2", "f9"));
        assert!(!rel.involves_field("t1", "f9"));
        assert!(!rel.involves_field("t2", "f1"));
    }

    #[test]
    fn test_field_serializes_with_wire_names() {
        let field = Field::new("f1", "owner", "reference").with_cardinality(Cardinality::Many);
        let json = serde_json::to_value(&field).unwrap();

        assert_eq!(json["type"], "reference");
        assert_eq!(json["isPrimary"], false);
        assert_eq!(json["cardinality"], "many");
        assert!(json.get("defaultValue").is_none());
    }

    #[test]
    fn test_snapshot_defaults_missing_collections() {
        let snapshot: ModelSnapshot = serde_json::from_str(r#"{"tables":[]}"#).unwrap();

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.entity_count(), 0);
    }

    #[test]
    fn test_relation_kind_display() {
        assert_eq!(RelationKind::OneToOne.to_string(), "1:1");
        assert_eq!(RelationKind::OneToMany.to_string(), "1:N");
        assert_eq!(RelationKind::ManyToOne.to_string(), "N:1");
        assert_eq!(RelationKind::ManyToMany.to_string(), "N:M");
    }
}
