//! Content store interface for the usage scanner.
//!
//! The scanner never touches a backend directly; it queries a `ContentStore`
//! handed to it at construction time. Two implementations ship with the
//! crate: a SQLite-backed store and an in-memory fixture store.

pub mod memory;
pub mod sqlite;

use thiserror::Error;

use crate::domain::{ContentRecord, MetaValue, RecordId};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors surfaced by content store reads
///
/// Store failures are fatal for the whole scan; the finder propagates them
/// without attempting partial results or retries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Backend-specific failure from a non-SQLite store
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Read access to the content repository
///
/// Implementations own all filtering by type/status; the finder relies on
/// `list_candidates` and `list_attached` applying the exclusions documented
/// on each method.
pub trait ContentStore {
    /// All content records eligible for body/metadata scanning: kind is
    /// neither "revision" nor "attachment", status is not "inherit".
    /// Order is store-defined.
    fn list_candidates(&self) -> Result<Vec<ContentRecord>, StoreError>;

    /// Records directly attached to the given media record (their id is the
    /// media row's parent). Only "revision" kind and "inherit" status are
    /// excluded here; attachment-kind records are allowed.
    fn list_attached(&self, media_id: RecordId) -> Result<Vec<ContentRecord>, StoreError>;

    /// Raw body text of a record; empty string if the record is gone
    fn body_of(&self, id: RecordId) -> Result<String, StoreError>;

    /// All raw metadata values of a record, in store order
    fn meta_values_of(&self, id: RecordId) -> Result<Vec<String>, StoreError>;

    /// Whether a raw metadata value looks like a serialized composite
    fn is_serialized(&self, raw: &str) -> bool {
        detect_serialized(raw)
    }

    /// Decode a serialized composite; `None` when decoding fails, in which
    /// case the caller falls back to the raw string
    fn decode_meta(&self, raw: &str) -> Option<MetaValue> {
        decode_serialized(raw)
    }

    /// Display label for a status tag; `None` for unregistered tags
    fn status_label(&self, status: &str) -> Option<String>;

    /// Display label for a record type tag; `None` for unregistered tags
    fn type_label(&self, kind: &str) -> Option<String>;
}

/// Detect the JSON composite encoding used by the bundled stores
///
/// A value counts as serialized when it both looks like a JSON list/mapping
/// and parses as one. Bare JSON scalars ("42", quoted strings) stay plain
/// scalars on purpose.
pub fn detect_serialized(raw: &str) -> bool {
    let trimmed = raw.trim_start();
    (trimmed.starts_with('[') || trimmed.starts_with('{'))
        && serde_json::from_str::<serde_json::Value>(raw).is_ok()
}

/// Decode a JSON composite into a `MetaValue` tree
pub fn decode_serialized(raw: &str) -> Option<MetaValue> {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .map(MetaValue::from)
}

/// Default status label registry shared by the bundled stores
pub(crate) fn default_status_labels() -> Vec<(String, String)> {
    [
        ("draft", "Draft"),
        ("published", "Published"),
        ("pending", "Pending Review"),
        ("private", "Private"),
        ("scheduled", "Scheduled"),
        ("trashed", "Trashed"),
    ]
    .into_iter()
    .map(|(tag, label)| (tag.to_string(), label.to_string()))
    .collect()
}

/// Default record type label registry shared by the bundled stores
pub(crate) fn default_type_labels() -> Vec<(String, String)> {
    [("article", "Article"), ("page", "Page"), ("attachment", "Media")]
        .into_iter()
        .map(|(tag, label)| (tag.to_string(), label.to_string()))
        .collect()
}
