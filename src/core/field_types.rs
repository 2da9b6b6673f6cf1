//! Static registry of recognized field types.
//!
//! Maps a field's type string to its display label, icon name, and group.
//! The registry only affects presentation: the store carries arbitrary type
//! strings, and unrecognized values fall back to a generic entry instead of
//! failing.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Icon used for field types the registry does not know about.
pub const FALLBACK_ICON: &str = "circle-help";

/// Coarse grouping of field types, used to order pickers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum FieldTypeGroup {
    #[display("basic")]
    Basic,
    #[display("datetime")]
    DateTime,
    #[display("choice")]
    Choice,
    #[display("contact")]
    Contact,
    #[display("media")]
    Media,
    #[display("relational")]
    Relational,
    #[display("computed")]
    Computed,
    #[display("system")]
    System,
}

/// Display metadata for a recognized field type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldTypeInfo {
    pub label: &'static str,
    pub icon: &'static str,
    pub group: FieldTypeGroup,
}

static FIELD_TYPES: LazyLock<HashMap<&'static str, FieldTypeInfo>> = LazyLock::new(|| {
    use FieldTypeGroup::*;

    let entries: [(&str, &str, &str, FieldTypeGroup); 37] = [
        ("id", "ID", "key", Basic),
        ("text", "Text", "type", Basic),
        ("longText", "Long Text", "align-left", Basic),
        ("number", "Number", "hash", Basic),
        ("decimal", "Decimal", "hash", Basic),
        ("currency", "Currency", "dollar-sign", Basic),
        ("percent", "Percent", "percent", Basic),
        ("rating", "Rating", "star", Basic),
        ("boolean", "Checkbox", "check-square", Basic),
        ("date", "Date", "calendar", DateTime),
        ("dateTime", "Date & Time", "calendar-clock", DateTime),
        ("time", "Time", "clock", DateTime),
        ("duration", "Duration", "timer", DateTime),
        ("select", "Single Select", "chevron-down-circle", Choice),
        ("multiSelect", "Multi Select", "list-checks", Choice),
        ("status", "Status", "loader", Choice),
        ("email", "Email", "mail", Contact),
        ("phone", "Phone", "phone", Contact),
        ("url", "URL", "link", Contact),
        ("attachment", "Attachment", "paperclip", Media),
        ("image", "Image", "image", Media),
        ("barcode", "Barcode", "scan-line", Media),
        ("button", "Button", "mouse-pointer-click", Media),
        ("reference", "Reference", "arrow-right", Relational),
        ("referenceTwo", "Two-way Reference", "arrow-left-right", Relational),
        ("lookup", "Lookup", "search", Relational),
        ("rollup", "Rollup", "sigma", Computed),
        ("formula", "Formula", "function-square", Computed),
        ("count", "Count", "tally-5", Computed),
        ("autoNumber", "Auto Number", "list-ordered", Computed),
        ("user", "User", "user", System),
        ("createdBy", "Created By", "user-plus", System),
        ("createdTime", "Created Time", "calendar-plus", System),
        ("modifiedBy", "Modified By", "user-pen", System),
        ("modifiedTime", "Modified Time", "calendar-check", System),
        ("json", "JSON", "braces", System),
        ("geo", "Geolocation", "map-pin", System),
    ];

    entries
        .into_iter()
        .map(|(key, label, icon, group)| (key, FieldTypeInfo { label, icon, group }))
        .collect()
});

/// Look up a recognized field type. Returns `None` for unknown strings.
pub fn field_type_info(field_type: &str) -> Option<&'static FieldTypeInfo> {
    FIELD_TYPES.get(field_type)
}

/// Check whether a type string is in the registry.
pub fn is_recognized(field_type: &str) -> bool {
    FIELD_TYPES.contains_key(field_type)
}

/// Display label for a type string, falling back to the raw string itself.
pub fn display_label(field_type: &str) -> String {
    field_type_info(field_type)
        .map(|info| info.label.to_string())
        .unwrap_or_else(|| field_type.to_string())
}

/// Icon name for a type string, falling back to [`FALLBACK_ICON`].
pub fn display_icon(field_type: &str) -> &'static str {
    field_type_info(field_type)
        .map(|info| info.icon)
        .unwrap_or(FALLBACK_ICON)
}

/// All recognized type strings, sorted for stable picker ordering.
pub fn recognized_types() -> Vec<&'static str> {
    let mut types: Vec<&'static str> = FIELD_TYPES.keys().copied().collect();
    types.sort_unstable();
    types
}
