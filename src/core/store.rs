//! The model store: single source of truth for all schema entities.
//!
//! Every mutation goes through a named operation that:
//! - validates its target (not-found and duplicate ids are reported, never
//!   silently absorbed),
//! - applies the change and any cascade,
//! - bumps the store version and commits a history snapshot.
//!
//! The store is constructed explicitly and passed to consumers; there is no
//! ambient singleton. All reads hand out borrows, and `export_model` returns
//! a deep clone so exported snapshots never alias live state.

use super::history::{DEFAULT_HISTORY_LIMIT, SnapshotHistory};
use super::model::{Area, Field, ModelSnapshot, Note, Position, Relationship, Table};
use super::patch::{AreaPatch, FieldPatch, NotePatch, RelationshipPatch, TablePatch};

/// Store mutation error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("table not found: {0}")]
    TableNotFound(String),

    #[error("field not found: {field_id} in table {table_id}")]
    FieldNotFound { table_id: String, field_id: String },

    #[error("relationship not found: {0}")]
    RelationshipNotFound(String),

    #[error("area not found: {0}")]
    AreaNotFound(String),

    #[error("note not found: {0}")]
    NoteNotFound(String),

    #[error("duplicate id: {0}")]
    DuplicateId(String),

    #[error("a table cannot reference itself")]
    SelfReference,

    #[error("name cannot be empty")]
    EmptyName,
}

/// Construction options for [`ModelStore`].
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// Maximum number of undo/redo snapshots retained.
    pub history_limit: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Owns the four entity collections and the undo/redo history.
#[derive(Debug)]
pub struct ModelStore {
    pub(crate) tables: Vec<Table>,
    pub(crate) relationships: Vec<Relationship>,
    pub(crate) areas: Vec<Area>,
    pub(crate) notes: Vec<Note>,
    version: u64,
    history: SnapshotHistory,
    gesture_depth: u32,
}

impl ModelStore {
    /// Create an empty store. The empty state is history entry zero.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            tables: Vec::new(),
            relationships: Vec::new(),
            areas: Vec::new(),
            notes: Vec::new(),
            version: 0,
            history: SnapshotHistory::new(ModelSnapshot::default(), options.history_limit),
            gesture_depth: 0,
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn relationship(&self, id: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.id == id)
    }

    pub fn area(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Monotonically increasing change counter. Reactive consumers compare
    /// versions instead of diffing collections.
    pub fn version(&self) -> u64 {
        self.version
    }

    // ------------------------------------------------------------------
    // Tables
    // ------------------------------------------------------------------

    pub fn add_table(&mut self, table: Table) -> Result<(), StoreError> {
        if self.table(&table.id).is_some() {
            return Err(StoreError::DuplicateId(table.id));
        }
        tracing::debug!("table added: {} ({} tables)", table.id, self.tables.len() + 1);
        self.tables.push(table);
        self.commit();
        Ok(())
    }

    /// Remove a table, cascading to every relationship that touches it as
    /// source or target. Returns the number of relationships removed.
    pub fn remove_table(&mut self, id: &str) -> Result<usize, StoreError> {
        let index = self
            .tables
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::TableNotFound(id.to_string()))?;
        self.tables.remove(index);

        let before = self.relationships.len();
        self.relationships.retain(|r| !r.involves_table(id));
        let cascaded = before - self.relationships.len();

        tracing::debug!("table removed: {id} ({cascaded} relationships cascaded)");
        self.commit();
        Ok(cascaded)
    }

    pub fn update_table(&mut self, id: &str, patch: TablePatch) -> Result<(), StoreError> {
        if patch.is_empty() {
            return Ok(());
        }
        let table = self.table_mut(id)?;
        patch.apply(table);
        tracing::debug!("table updated: {id}");
        self.commit();
        Ok(())
    }

    /// Rename a table. The name is trimmed; a blank result is rejected.
    pub fn update_table_name(&mut self, id: &str, name: &str) -> Result<(), StoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.update_table(
            id,
            TablePatch {
                name: Some(trimmed.to_string()),
                ..Default::default()
            },
        )
    }

    pub fn update_table_position(&mut self, id: &str, position: Position) -> Result<(), StoreError> {
        self.update_table(
            id,
            TablePatch {
                position: Some(position),
                ..Default::default()
            },
        )
    }

    // ------------------------------------------------------------------
    // Fields
    // ------------------------------------------------------------------

    pub fn add_field(&mut self, table_id: &str, field: Field) -> Result<(), StoreError> {
        let table = self.table_mut(table_id)?;
        if table.has_field(&field.id) {
            return Err(StoreError::DuplicateId(field.id));
        }
        tracing::debug!("field added: {} on table {table_id}", field.id);
        table.fields.push(field);
        self.commit();
        Ok(())
    }

    pub fn update_field(
        &mut self,
        table_id: &str,
        field_id: &str,
        patch: FieldPatch,
    ) -> Result<(), StoreError> {
        if patch.is_empty() {
            return Ok(());
        }
        let table = self.table_mut(table_id)?;
        let field = table
            .fields
            .iter_mut()
            .find(|f| f.id == field_id)
            .ok_or_else(|| StoreError::FieldNotFound {
                table_id: table_id.to_string(),
                field_id: field_id.to_string(),
            })?;
        patch.apply(field);
        tracing::debug!("field updated: {field_id} on table {table_id}");
        self.commit();
        Ok(())
    }

    /// Remove a field, cascading to every relationship anchored on that
    /// `(table, field)` pair at either endpoint. Returns the number of
    /// relationships removed.
    pub fn remove_field(&mut self, table_id: &str, field_id: &str) -> Result<usize, StoreError> {
        let table = self.table_mut(table_id)?;
        let index = table.fields.iter().position(|f| f.id == field_id).ok_or_else(|| {
            StoreError::FieldNotFound {
                table_id: table_id.to_string(),
                field_id: field_id.to_string(),
            }
        })?;
        table.fields.remove(index);

        let before = self.relationships.len();
        self.relationships
            .retain(|r| !r.involves_field(table_id, field_id));
        let cascaded = before - self.relationships.len();

        tracing::debug!(
            "field removed: {field_id} on table {table_id} ({cascaded} relationships cascaded)"
        );
        self.commit();
        Ok(cascaded)
    }

    // ------------------------------------------------------------------
    // Relationships
    // ------------------------------------------------------------------

    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<(), StoreError> {
        if self.relationship(&relationship.id).is_some() {
            return Err(StoreError::DuplicateId(relationship.id));
        }
        tracing::debug!(
            "relationship added: {} ({} -> {})",
            relationship.id,
            relationship.source_table_id,
            relationship.target_table_id
        );
        self.relationships.push(relationship);
        self.commit();
        Ok(())
    }

    pub fn update_relationship(
        &mut self,
        id: &str,
        patch: RelationshipPatch,
    ) -> Result<(), StoreError> {
        if patch.is_empty() {
            return Ok(());
        }
        let relationship = self
            .relationships
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::RelationshipNotFound(id.to_string()))?;
        patch.apply(relationship);
        tracing::debug!("relationship updated: {id}");
        self.commit();
        Ok(())
    }

    pub fn remove_relationship(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .relationships
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::RelationshipNotFound(id.to_string()))?;
        self.relationships.remove(index);
        tracing::debug!("relationship removed: {id}");
        self.commit();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Areas
    // ------------------------------------------------------------------

    pub fn add_area(&mut self, area: Area) -> Result<(), StoreError> {
        if self.area(&area.id).is_some() {
            return Err(StoreError::DuplicateId(area.id));
        }
        tracing::debug!("area added: {}", area.id);
        self.areas.push(area);
        self.commit();
        Ok(())
    }

    pub fn update_area(&mut self, id: &str, patch: AreaPatch) -> Result<(), StoreError> {
        if patch.is_empty() {
            return Ok(());
        }
        let area = self
            .areas
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::AreaNotFound(id.to_string()))?;
        patch.apply(area);
        tracing::debug!("area updated: {id}");
        self.commit();
        Ok(())
    }

    pub fn update_area_position(&mut self, id: &str, position: Position) -> Result<(), StoreError> {
        self.update_area(
            id,
            AreaPatch {
                position: Some(position),
                ..Default::default()
            },
        )
    }

    pub fn remove_area(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .areas
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::AreaNotFound(id.to_string()))?;
        self.areas.remove(index);
        tracing::debug!("area removed: {id}");
        self.commit();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------

    pub fn add_note(&mut self, note: Note) -> Result<(), StoreError> {
        if self.note(&note.id).is_some() {
            return Err(StoreError::DuplicateId(note.id));
        }
        tracing::debug!("note added: {}", note.id);
        self.notes.push(note);
        self.commit();
        Ok(())
    }

    pub fn update_note(&mut self, id: &str, patch: NotePatch) -> Result<(), StoreError> {
        if patch.is_empty() {
            return Ok(());
        }
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| StoreError::NoteNotFound(id.to_string()))?;
        patch.apply(note);
        tracing::debug!("note updated: {id}");
        self.commit();
        Ok(())
    }

    pub fn update_note_position(&mut self, id: &str, position: Position) -> Result<(), StoreError> {
        self.update_note(
            id,
            NotePatch {
                position: Some(position),
                ..Default::default()
            },
        )
    }

    pub fn remove_note(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| StoreError::NoteNotFound(id.to_string()))?;
        self.notes.remove(index);
        tracing::debug!("note removed: {id}");
        self.commit();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Import / export
    // ------------------------------------------------------------------

    /// Replace all four collections wholesale with the snapshot's contents.
    pub fn import_model(&mut self, snapshot: ModelSnapshot) {
        tracing::debug!(
            "model imported: {} tables, {} relationships, {} areas, {} notes",
            snapshot.tables.len(),
            snapshot.relationships.len(),
            snapshot.areas.len(),
            snapshot.notes.len()
        );
        self.tables = snapshot.tables;
        self.relationships = snapshot.relationships;
        self.areas = snapshot.areas;
        self.notes = snapshot.notes;
        self.commit();
    }

    /// Deep copy of the current state. Later store mutation never alters an
    /// already-exported snapshot.
    pub fn export_model(&self) -> ModelSnapshot {
        self.snapshot()
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restore the previous snapshot. Returns false when at the oldest state.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        let snapshot = snapshot.clone();
        self.restore(snapshot);
        true
    }

    /// Restore the next snapshot. Returns false when at the newest state.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        let snapshot = snapshot.clone();
        self.restore(snapshot);
        true
    }

    /// Suppress per-mutation history entries until the matching
    /// [`end_gesture`](Self::end_gesture). Pairs nest; only the outermost end
    /// commits, producing one history entry for the whole gesture.
    pub fn begin_gesture(&mut self) {
        self.gesture_depth += 1;
    }

    pub fn end_gesture(&mut self) {
        self.gesture_depth = self.gesture_depth.saturating_sub(1);
        if self.gesture_depth == 0 {
            // Pushing an unchanged snapshot is a no-op, so an aborted or
            // empty gesture leaves history untouched.
            self.history.push(self.snapshot());
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    pub(crate) fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            tables: self.tables.clone(),
            relationships: self.relationships.clone(),
            areas: self.areas.clone(),
            notes: self.notes.clone(),
        }
    }

    pub(crate) fn commit(&mut self) {
        self.version += 1;
        if self.gesture_depth == 0 {
            self.history.push(self.snapshot());
        }
    }

    fn restore(&mut self, snapshot: ModelSnapshot) {
        self.tables = snapshot.tables;
        self.relationships = snapshot.relationships;
        self.areas = snapshot.areas;
        self.notes = snapshot.notes;
        self.version += 1;
    }

    fn table_mut(&mut self, id: &str) -> Result<&mut Table, StoreError> {
        self.tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::TableNotFound(id.to_string()))
    }
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Cardinality, RelationKind};

    fn store_with_two_tables() -> ModelStore {
        let mut store = ModelStore::new();
        store
            .add_table(
                Table::new("t1", "users")
                    .with_position(0.0, 0.0)
                    .with_field(Field::new("f1", "id", "id").primary().unique()),
            )
            .unwrap();
        store
            .add_table(
                Table::new("t2", "posts")
                    .with_position(300.0, 0.0)
                    .with_field(Field::new("f2", "id", "id").primary().unique())
                    .with_field(Field::new("f3", "author", "reference")),
            )
            .unwrap();
        store
    }

    #[test]
    fn test_add_table_rejects_duplicate_id() {
        let mut store = ModelStore::new();
        store.add_table(Table::new("t1", "users")).unwrap();

        let err = store.add_table(Table::new("t1", "other")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("t1".to_string()));
        assert_eq!(store.tables().len(), 1);
    }

    #[test]
    fn test_remove_table_cascades_relationships() {
        let mut store = store_with_two_tables();
        store
            .add_relationship(
                Relationship::new("r1", "t2", "f3", "t1").with_relation(RelationKind::ManyToOne),
            )
            .unwrap();
        store
            .add_relationship(Relationship::new("r2", "t1", "f1", "t2"))
            .unwrap();

        let cascaded = store.remove_table("t1").unwrap();

        assert_eq!(cascaded, 2);
        assert!(store.relationships().is_empty());
        assert!(store.table("t1").is_none());
        assert!(store.table("t2").is_some());
    }

    #[test]
    fn test_remove_missing_table_reports_not_found() {
        let mut store = ModelStore::new();
        let version = store.version();

        let err = store.remove_table("ghost").unwrap_err();

        assert_eq!(err, StoreError::TableNotFound("ghost".to_string()));
        assert_eq!(store.version(), version);
    }

    #[test]
    fn test_update_table_name_trims_and_rejects_blank() {
        let mut store = store_with_two_tables();

        store.update_table_name("t1", "  accounts  ").unwrap();
        assert_eq!(store.table("t1").unwrap().name, "accounts");

        let err = store.update_table_name("t1", "   ").unwrap_err();
        assert_eq!(err, StoreError::EmptyName);
        assert_eq!(store.table("t1").unwrap().name, "accounts");
    }

    #[test]
    fn test_field_crud_and_duplicate_rejection() {
        let mut store = store_with_two_tables();

        store
            .add_field("t1", Field::new("f9", "email", "email").unique())
            .unwrap();
        assert!(store.table("t1").unwrap().has_field("f9"));

        let err = store
            .add_field("t1", Field::new("f9", "again", "text"))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("f9".to_string()));

        store
            .update_field(
                "t1",
                "f9",
                FieldPatch {
                    required: Some(true),
                    cardinality: Some(Cardinality::One),
                    ..Default::default()
                },
            )
            .unwrap();
        let (_, field) = store.table("t1").unwrap().find_field("f9").unwrap();
        assert!(field.required);
        assert_eq!(field.cardinality, Some(Cardinality::One));
    }

    #[test]
    fn test_remove_field_cascades_matching_relationships_only() {
        let mut store = store_with_two_tables();
        store
            .add_relationship(Relationship::new("r1", "t2", "f3", "t1"))
            .unwrap();
        store
            .add_relationship(Relationship::new("r2", "t2", "f2", "t1"))
            .unwrap();

        let cascaded = store.remove_field("t2", "f3").unwrap();

        assert_eq!(cascaded, 1);
        assert_eq!(store.relationships().len(), 1);
        assert_eq!(store.relationships()[0].id, "r2");
        assert!(!store.table("t2").unwrap().has_field("f3"));
    }

    #[test]
    fn test_remove_field_cascades_target_endpoint() {
        let mut store = store_with_two_tables();
        store
            .add_relationship(Relationship::new("r1", "t2", "f3", "t1").with_target_field("f1"))
            .unwrap();

        let cascaded = store.remove_field("t1", "f1").unwrap();

        assert_eq!(cascaded, 1);
        assert!(store.relationships().is_empty());
    }

    #[test]
    fn test_update_relationship_patches_kind_and_direction() {
        let mut store = store_with_two_tables();
        store
            .add_relationship(
                Relationship::new("r1", "t2", "f3", "t1").with_relation(RelationKind::ManyToOne),
            )
            .unwrap();

        store
            .update_relationship(
                "r1",
                RelationshipPatch {
                    relation: Some(RelationKind::OneToOne),
                    is_two_way: Some(true),
                },
            )
            .unwrap();

        let rel = store.relationship("r1").unwrap();
        assert_eq!(rel.relation, Some(RelationKind::OneToOne));
        assert!(rel.is_two_way);
        // Endpoints are immutable through patches.
        assert_eq!(rel.source_table_id, "t2");
        assert_eq!(rel.target_table_id, "t1");

        let err = store
            .update_relationship(
                "ghost",
                RelationshipPatch {
                    is_two_way: Some(false),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err, StoreError::RelationshipNotFound("ghost".to_string()));
    }

    #[test]
    fn test_remove_relationship_does_not_cascade_to_fields() {
        let mut store = store_with_two_tables();
        store
            .add_relationship(Relationship::new("r1", "t2", "f3", "t1").with_target_field("f1"))
            .unwrap();

        store.remove_relationship("r1").unwrap();

        assert!(store.relationships().is_empty());
        // Both endpoint fields survive the relationship's removal.
        assert!(store.table("t2").unwrap().has_field("f3"));
        assert!(store.table("t1").unwrap().has_field("f1"));

        let err = store.remove_relationship("r1").unwrap_err();
        assert_eq!(err, StoreError::RelationshipNotFound("r1".to_string()));
    }

    #[test]
    fn test_area_and_note_crud_never_cascade() {
        let mut store = store_with_two_tables();
        store
            .add_relationship(Relationship::new("r1", "t2", "f3", "t1"))
            .unwrap();
        store
            .add_area(Area::new("a1", "Auth", "#bfdbfe").with_size(400.0, 300.0))
            .unwrap();
        store.add_note(Note::new("n1", "todo: split", "#fde047")).unwrap();

        store
            .update_area_position("a1", Position::new(50.0, 60.0))
            .unwrap();
        store
            .update_note(
                "n1",
                NotePatch {
                    content: Some("done".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        store.remove_area("a1").unwrap();
        store.remove_note("n1").unwrap();

        assert_eq!(store.relationships().len(), 1);
        assert!(store.areas().is_empty());
        assert!(store.notes().is_empty());
    }

    #[test]
    fn test_export_is_a_deep_copy() {
        let mut store = store_with_two_tables();
        let exported = store.export_model();

        store.update_table_name("t1", "renamed").unwrap();
        store.remove_table("t2").unwrap();

        assert_eq!(exported.tables.len(), 2);
        assert_eq!(exported.tables[0].name, "users");
    }

    #[test]
    fn test_version_bumps_on_every_mutation() {
        let mut store = ModelStore::new();
        assert_eq!(store.version(), 0);

        store.add_table(Table::new("t1", "users")).unwrap();
        assert_eq!(store.version(), 1);

        store
            .update_table_position("t1", Position::new(10.0, 10.0))
            .unwrap();
        assert_eq!(store.version(), 2);

        // Empty patches commit nothing.
        store.update_table("t1", TablePatch::default()).unwrap();
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_undo_redo_across_ordinary_edits() {
        let mut store = ModelStore::new();
        store.add_table(Table::new("t1", "users")).unwrap();
        store.add_table(Table::new("t2", "posts")).unwrap();

        assert!(store.undo());
        assert_eq!(store.tables().len(), 1);

        assert!(store.undo());
        assert!(store.tables().is_empty());
        assert!(!store.undo());

        assert!(store.redo());
        assert!(store.redo());
        assert_eq!(store.tables().len(), 2);
        assert!(!store.redo());
    }

    #[test]
    fn test_mutation_after_undo_truncates_redo() {
        let mut store = ModelStore::new();
        store.add_table(Table::new("t1", "users")).unwrap();
        store.add_table(Table::new("t2", "posts")).unwrap();

        store.undo();
        store.add_table(Table::new("t3", "tags")).unwrap();

        assert!(!store.can_redo());
        assert_eq!(store.tables().len(), 2);
        assert_eq!(store.tables()[1].id, "t3");
    }

    #[test]
    fn test_gesture_coalesces_drag_frames() {
        let mut store = ModelStore::new();
        store.add_table(Table::new("t1", "users")).unwrap();
        let history_before = store.history_len();

        store.begin_gesture();
        for i in 0..20 {
            store
                .update_table_position("t1", Position::new(f64::from(i) * 4.0, 0.0))
                .unwrap();
        }
        store.end_gesture();

        assert_eq!(store.history_len(), history_before + 1);
        assert_eq!(store.table("t1").unwrap().position.x, 76.0);

        // One undo rewinds the whole drag.
        store.undo();
        assert_eq!(store.table("t1").unwrap().position.x, 0.0);
    }

    #[test]
    fn test_nested_gestures_commit_once_at_outermost_end() {
        let mut store = ModelStore::new();
        store.add_table(Table::new("t1", "users")).unwrap();
        let history_before = store.history_len();

        store.begin_gesture();
        store
            .update_table_position("t1", Position::new(10.0, 0.0))
            .unwrap();
        store.begin_gesture();
        store
            .update_table_position("t1", Position::new(20.0, 0.0))
            .unwrap();
        store.end_gesture();
        // The inner end commits nothing while the outer gesture is open.
        assert_eq!(store.history_len(), history_before);

        store
            .update_table_position("t1", Position::new(30.0, 0.0))
            .unwrap();
        store.end_gesture();

        assert_eq!(store.history_len(), history_before + 1);
        assert_eq!(store.table("t1").unwrap().position.x, 30.0);

        // One undo rewinds everything both nested pairs touched.
        store.undo();
        assert_eq!(store.table("t1").unwrap().position.x, 0.0);
    }

    #[test]
    fn test_unbalanced_end_gesture_is_harmless() {
        let mut store = ModelStore::new();
        store.add_table(Table::new("t1", "users")).unwrap();
        let history_before = store.history_len();

        store.end_gesture();
        assert_eq!(store.history_len(), history_before);

        // Ordinary commits still push afterwards.
        store
            .update_table_position("t1", Position::new(5.0, 0.0))
            .unwrap();
        assert_eq!(store.history_len(), history_before + 1);
    }

    #[test]
    fn test_empty_gesture_leaves_history_alone() {
        let mut store = ModelStore::new();
        store.add_table(Table::new("t1", "users")).unwrap();
        let history_before = store.history_len();

        store.begin_gesture();
        store.end_gesture();

        assert_eq!(store.history_len(), history_before);
    }

    #[test]
    fn test_history_limit_from_options() {
        let mut store = ModelStore::with_options(StoreOptions { history_limit: 3 });
        for i in 0..10 {
            store.add_table(Table::new(format!("t{i}"), "t")).unwrap();
        }

        assert_eq!(store.history_len(), 3);

        // Undo bottoms out two steps back, at the oldest retained snapshot.
        assert!(store.undo());
        assert!(store.undo());
        assert!(!store.undo());
        assert_eq!(store.tables().len(), 8);
    }

    #[test]
    fn test_import_replaces_wholesale_and_is_undoable() {
        let mut store = ModelStore::new();
        store.add_table(Table::new("t1", "users")).unwrap();

        let snapshot = ModelSnapshot {
            tables: vec![Table::new("x1", "imported")],
            notes: vec![Note::new("n1", "hello", "#fff")],
            ..Default::default()
        };
        store.import_model(snapshot);

        assert_eq!(store.tables().len(), 1);
        assert_eq!(store.tables()[0].id, "x1");
        assert_eq!(store.notes().len(), 1);

        store.undo();
        assert_eq!(store.tables()[0].id, "t1");
        assert!(store.notes().is_empty());
    }
}
