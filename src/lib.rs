//! schemacanvas - schema model core for a visual entity-relationship designer
//!
//! The in-memory data model behind the designer canvas: tables with typed
//! fields, relationships, grouping areas, and notes, owned by a single
//! [`ModelStore`](core::ModelStore) with typed mutation operations,
//! snapshot-based undo/redo, and whole-model JSON import/export. Rendering
//! and interaction live in the host application; this crate is the state
//! engine they call into.

pub mod core;
