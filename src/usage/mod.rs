//! Usage detection for media files.
//!
//! Given a media file name and its record id, `UsageFinder` scans the whole
//! content store and reports every record that references the file:
//!
//! 1. Records the media is directly attached to (authoritative, added first)
//! 2. Records whose body text contains the file name as a literal substring
//! 3. Records with a metadata value containing the file name, after
//!    serialized composites are decoded and flattened
//!
//! Matching is case-sensitive plain containment with no word-boundary
//! anchoring; a short file name can match inside unrelated text. That is
//! accepted behavior, not a bug to fix here.
//!
//! Every call rescans the full store. Nothing is cached between calls and
//! the store is never mutated.

use tracing::debug;

use crate::domain::{GroupedReport, RecordId, UsageMatch};
use crate::store::{ContentStore, StoreError};

/// Scans a content store for references to a media file
pub struct UsageFinder<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> UsageFinder<'a> {
    /// Create a finder over the given store
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Find every content record referencing the media file
    ///
    /// `file_name` is the basename of the media's stored location;
    /// `media_id` is the media row's id. The caller resolves the media
    /// record upstream — a nonexistent id simply yields no attachment
    /// matches here.
    ///
    /// Results come back in discovery order: directly-attached records
    /// first, then body/metadata matches in candidate-pool order. No record
    /// id appears twice, even when it matches by several reasons.
    pub fn find_usage(
        &self,
        file_name: &str,
        media_id: RecordId,
    ) -> Result<Vec<UsageMatch>, StoreError> {
        debug!(file = %file_name, media = %media_id, "scanning store for media usage");

        let candidates = self.store.list_candidates()?;

        // Directly-attached records are authoritative; they are never
        // re-checked against body or metadata.
        let mut matches: Vec<UsageMatch> = self
            .store
            .list_attached(media_id)?
            .into_iter()
            .map(UsageMatch::from)
            .collect();

        for candidate in candidates {
            if matches.iter().any(|m| m.id == candidate.id) {
                continue;
            }

            let body = self.store.body_of(candidate.id)?;
            if body.contains(file_name) {
                matches.push(UsageMatch::from(candidate));
                continue;
            }

            // Metadata check only runs when the body check failed. The
            // first matching value wins; remaining values are skipped.
            let mut meta_matched = false;
            for raw in self.store.meta_values_of(candidate.id)? {
                let haystack = if self.store.is_serialized(&raw) {
                    // Decode failure degrades to the raw string
                    match self.store.decode_meta(&raw) {
                        Some(value) => value.flatten(),
                        None => raw,
                    }
                } else {
                    raw
                };

                if haystack.contains(file_name) {
                    meta_matched = true;
                    break;
                }
            }

            if meta_matched {
                matches.push(UsageMatch::from(candidate));
            }
        }

        debug!(matches = matches.len(), "scan complete");
        Ok(matches)
    }

    /// Group matches by human-readable status label
    ///
    /// Labels come from the store's status registry; unregistered tags fall
    /// back to the capitalized raw tag. Group order is the first-seen order
    /// of each status and matches keep the order `find_usage` returned.
    pub fn group_by_status(&self, matches: Vec<UsageMatch>) -> GroupedReport {
        let mut report = GroupedReport::default();

        for usage in matches {
            let label = self
                .store
                .status_label(&usage.status)
                .unwrap_or_else(|| capitalize(&usage.status));
            report.push(label, usage);
        }

        report
    }
}

/// Capitalize the first character of a raw tag
pub(crate) fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
