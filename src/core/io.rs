//! Snapshot import/export as JSON.
//!
//! The export document is `{tables, relationships, areas, notes}` in the
//! designer's camelCase shape. Import tolerates missing top-level keys
//! (defaulting to empty collections) but rejects malformed documents in
//! full — parsing happens before any store mutation, so a failed import
//! leaves prior state untouched.

use super::model::ModelSnapshot;

/// Import failure. The offending document is never partially applied.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("invalid model JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Serialize a snapshot to pretty-printed JSON.
pub fn snapshot_to_json(snapshot: &ModelSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}

/// Parse a snapshot from JSON text.
pub fn snapshot_from_json(json: &str) -> Result<ModelSnapshot, ImportError> {
    let snapshot = serde_json::from_str::<ModelSnapshot>(json)?;
    tracing::debug!("snapshot parsed: {} entities", snapshot.entity_count());
    Ok(snapshot)
}

/// File name for a downloaded export: `<name>.json`, falling back to
/// `model.json` for a blank name.
pub fn export_file_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "model.json".to_string()
    } else {
        format!("{trimmed}.json")
    }
}
