//! In-memory content store.
//!
//! Fixture-style store used by the integration tests and handy for callers
//! that already hold their records in memory. Iteration order is insertion
//! order, which makes scan-order assertions deterministic.

use std::collections::HashMap;

use crate::domain::{ContentRecord, RecordId, STATUS_INHERIT, TYPE_ATTACHMENT, TYPE_REVISION};

use super::{default_status_labels, default_type_labels, ContentStore, StoreError};

struct StoredRecord {
    record: ContentRecord,
    parent: Option<RecordId>,
    body: String,
    meta: Vec<String>,
}

/// Content store backed by plain vectors
pub struct MemoryStore {
    records: Vec<StoredRecord>,
    status_labels: HashMap<String, String>,
    type_labels: HashMap<String, String>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store with the default label registries
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            status_labels: default_status_labels().into_iter().collect(),
            type_labels: default_type_labels().into_iter().collect(),
        }
    }

    /// Insert a content record with a body
    pub fn add_record(
        &mut self,
        id: i64,
        title: &str,
        kind: &str,
        status: &str,
        body: &str,
    ) -> RecordId {
        let id = RecordId(id);
        self.records.push(StoredRecord {
            record: ContentRecord::new(id, title, kind, status),
            parent: None,
            body: body.to_string(),
            meta: Vec::new(),
        });
        id
    }

    /// Insert a media/attachment row linked to an optional parent record
    pub fn add_attachment(&mut self, id: i64, file_name: &str, parent: Option<RecordId>) -> RecordId {
        let id = RecordId(id);
        self.records.push(StoredRecord {
            record: ContentRecord::new(id, file_name, TYPE_ATTACHMENT, STATUS_INHERIT),
            parent,
            body: String::new(),
            meta: Vec::new(),
        });
        id
    }

    /// Append a raw metadata value to a record
    pub fn add_meta(&mut self, id: RecordId, raw_value: &str) {
        if let Some(stored) = self.records.iter_mut().find(|s| s.record.id == id) {
            stored.meta.push(raw_value.to_string());
        }
    }

    /// Register or override a status display label
    pub fn register_status_label(&mut self, tag: impl Into<String>, label: impl Into<String>) {
        self.status_labels.insert(tag.into(), label.into());
    }

    /// Register or override a record type display label
    pub fn register_type_label(&mut self, tag: impl Into<String>, label: impl Into<String>) {
        self.type_labels.insert(tag.into(), label.into());
    }
}

impl ContentStore for MemoryStore {
    fn list_candidates(&self) -> Result<Vec<ContentRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|s| {
                s.record.kind != TYPE_REVISION
                    && s.record.kind != TYPE_ATTACHMENT
                    && s.record.status != STATUS_INHERIT
            })
            .map(|s| s.record.clone())
            .collect())
    }

    fn list_attached(&self, media_id: RecordId) -> Result<Vec<ContentRecord>, StoreError> {
        let parents: Vec<RecordId> = self
            .records
            .iter()
            .filter(|s| s.record.id == media_id)
            .filter_map(|s| s.parent)
            .collect();

        Ok(self
            .records
            .iter()
            .filter(|s| parents.contains(&s.record.id))
            .filter(|s| s.record.kind != TYPE_REVISION && s.record.status != STATUS_INHERIT)
            .map(|s| s.record.clone())
            .collect())
    }

    fn body_of(&self, id: RecordId) -> Result<String, StoreError> {
        Ok(self
            .records
            .iter()
            .find(|s| s.record.id == id)
            .map(|s| s.body.clone())
            .unwrap_or_default())
    }

    fn meta_values_of(&self, id: RecordId) -> Result<Vec<String>, StoreError> {
        Ok(self
            .records
            .iter()
            .find(|s| s.record.id == id)
            .map(|s| s.meta.clone())
            .unwrap_or_default())
    }

    fn status_label(&self, status: &str) -> Option<String> {
        self.status_labels.get(status).cloned()
    }

    fn type_label(&self, kind: &str) -> Option<String> {
        self.type_labels.get(kind).cloned()
    }
}
