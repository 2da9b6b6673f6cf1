//! Reference building: the multi-entity transaction behind "connect table A
//! to table B".
//!
//! One call synthesizes the source field, the relationship, and (for two-way
//! links) the inverse field on the target table, committed as a single
//! history entry.

use uuid::Uuid;

use super::model::{Cardinality, Field, Relationship};
use super::store::{ModelStore, StoreError};

/// Field type string for a one-way reference.
pub const REFERENCE_TYPE: &str = "reference";
/// Field type string for either side of a two-way reference.
pub const REFERENCE_TWO_TYPE: &str = "referenceTwo";

/// Ids of the entities a reference creation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedReference {
    pub relationship_id: String,
    pub source_field_id: String,
    /// Present only for two-way references.
    pub target_field_id: Option<String>,
}

impl ModelStore {
    /// Link `source_table_id` to `target_table_id` through a new reference
    /// field named `field_name`.
    ///
    /// - Self-references are rejected; the UI excludes the source table from
    ///   candidate targets, and the builder enforces the same rule.
    /// - `is_two_way` additionally creates an inverse `referenceTwo` field on
    ///   the target table, named after the source table.
    /// - `is_multiple` is recorded as the new field's cardinality so the
    ///   user's single/multi choice survives export.
    pub fn create_reference_field(
        &mut self,
        source_table_id: &str,
        target_table_id: &str,
        field_name: &str,
        is_two_way: bool,
        is_multiple: bool,
    ) -> Result<CreatedReference, StoreError> {
        if source_table_id == target_table_id {
            return Err(StoreError::SelfReference);
        }
        let field_name = field_name.trim();
        if field_name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let source_table_name = self
            .table(source_table_id)
            .map(|t| t.name.clone())
            .ok_or_else(|| StoreError::TableNotFound(source_table_id.to_string()))?;
        if self.table(target_table_id).is_none() {
            return Err(StoreError::TableNotFound(target_table_id.to_string()));
        }

        let field_type = if is_two_way {
            REFERENCE_TWO_TYPE
        } else {
            REFERENCE_TYPE
        };
        let cardinality = if is_multiple {
            Cardinality::Many
        } else {
            Cardinality::One
        };

        let source_field_id = Uuid::new_v4().to_string();
        let source_field = Field::new(source_field_id.clone(), field_name, field_type)
            .with_cardinality(cardinality);

        let target_field_id = is_two_way.then(|| Uuid::new_v4().to_string());
        let relationship_id = Uuid::new_v4().to_string();

        let mut relationship = Relationship::new(
            relationship_id.clone(),
            source_table_id,
            source_field_id.clone(),
            target_table_id,
        )
        .reference(is_two_way);
        if let Some(ref id) = target_field_id {
            relationship = relationship.with_target_field(id.clone());
        }

        // Endpoints were validated above; mutate directly so the whole
        // transaction lands in one commit.
        let source = self
            .tables
            .iter_mut()
            .find(|t| t.id == source_table_id)
            .ok_or_else(|| StoreError::TableNotFound(source_table_id.to_string()))?;
        source.fields.push(source_field);

        if let Some(ref id) = target_field_id {
            let inverse = Field::new(id.clone(), source_table_name, REFERENCE_TWO_TYPE)
                .with_cardinality(cardinality);
            let target = self
                .tables
                .iter_mut()
                .find(|t| t.id == target_table_id)
                .ok_or_else(|| StoreError::TableNotFound(target_table_id.to_string()))?;
            target.fields.push(inverse);
        }

        self.relationships.push(relationship);

        tracing::debug!(
            "reference created: {source_table_id} -> {target_table_id} (two_way: {is_two_way})"
        );
        self.commit();

        Ok(CreatedReference {
            relationship_id,
            source_field_id,
            target_field_id,
        })
    }
}
