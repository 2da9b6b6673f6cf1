//! Typed partial updates for store entities.
//!
//! Each patch carries `Option` per mutable attribute; `None` leaves the
//! attribute alone. The store validates the target exists before applying,
//! so a patch never creates state on its own.

use serde::{Deserialize, Serialize};

use super::model::{Area, Cardinality, Field, Note, Position, RelationKind, Relationship, Table};

/// Partial update for a [`Table`]. Does not touch the field list; fields have
/// their own operations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_collapsed: Option<bool>,
}

impl TablePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub(crate) fn apply(self, table: &mut Table) {
        if let Some(name) = self.name {
            table.name = name;
        }
        if let Some(position) = self.position {
            table.position = position;
        }
        if let Some(width) = self.width {
            table.width = Some(width);
        }
        if let Some(height) = self.height {
            table.height = Some(height);
        }
        if let Some(is_collapsed) = self.is_collapsed {
            table.is_collapsed = is_collapsed;
        }
    }
}

/// Partial update for a [`Field`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<Cardinality>,
}

impl FieldPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub(crate) fn apply(self, field: &mut Field) {
        if let Some(name) = self.name {
            field.name = name;
        }
        if let Some(field_type) = self.field_type {
            field.field_type = field_type;
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(unique) = self.unique {
            field.unique = unique;
        }
        if let Some(is_primary) = self.is_primary {
            field.is_primary = is_primary;
        }
        if let Some(description) = self.description {
            field.description = description;
        }
        if let Some(default_value) = self.default_value {
            field.default_value = Some(default_value);
        }
        if let Some(cardinality) = self.cardinality {
            field.cardinality = Some(cardinality);
        }
    }
}

/// Partial update for a [`Relationship`]. Endpoints are immutable; delete and
/// recreate to re-anchor a relationship.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<RelationKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_two_way: Option<bool>,
}

impl RelationshipPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub(crate) fn apply(self, relationship: &mut Relationship) {
        if let Some(relation) = self.relation {
            relationship.relation = Some(relation);
        }
        if let Some(is_two_way) = self.is_two_way {
            relationship.is_two_way = is_two_way;
        }
    }
}

/// Partial update for an [`Area`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl AreaPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub(crate) fn apply(self, area: &mut Area) {
        if let Some(title) = self.title {
            area.title = title;
        }
        if let Some(color) = self.color {
            area.color = color;
        }
        if let Some(position) = self.position {
            area.position = position;
        }
        if let Some(width) = self.width {
            area.width = width;
        }
        if let Some(height) = self.height {
            area.height = height;
        }
    }
}

/// Partial update for a [`Note`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub(crate) fn apply(self, note: &mut Note) {
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(color) = self.color {
            note.color = color;
        }
        if let Some(position) = self.position {
            note.position = position;
        }
        if let Some(width) = self.width {
            note.width = width;
        }
        if let Some(height) = self.height {
            note.height = Some(height);
        }
    }
}
