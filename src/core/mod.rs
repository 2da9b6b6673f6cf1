//! Core domain model and mutation/versioning engine for the schema designer.

pub mod field_types;
mod history;
mod io;
mod layers;
mod model;
mod patch;
mod reference;
mod store;
pub mod templates;

pub use history::{DEFAULT_HISTORY_LIMIT, HistoryEntry, SnapshotHistory};
pub use io::{ImportError, export_file_name, snapshot_from_json, snapshot_to_json};
pub use layers::LayerKind;
pub use model::{
    Area, Cardinality, Field, ModelSnapshot, Note, Position, RelationKind, Relationship, Table,
};
pub use patch::{AreaPatch, FieldPatch, NotePatch, RelationshipPatch, TablePatch};
pub use reference::{CreatedReference, REFERENCE_TWO_TYPE, REFERENCE_TYPE};
pub use store::{ModelStore, StoreError, StoreOptions};
