//! Usage matches and the status-grouped report.

use serde::{Deserialize, Serialize};

use super::record::{ContentRecord, RecordId};

/// A content record confirmed to reference the traced media file
///
/// A record appears at most once per result set, even when it matches by
/// several reasons (attachment, body and metadata).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMatch {
    /// Identifier of the matched record
    pub id: RecordId,

    /// Title text
    pub title: String,

    /// Type tag of the record
    pub kind: String,

    /// Publication status tag
    pub status: String,
}

impl From<ContentRecord> for UsageMatch {
    fn from(record: ContentRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            kind: record.kind,
            status: record.status,
        }
    }
}

/// Matches sharing one human-readable status label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusGroup {
    /// Display label for the status ("Draft", "Published", ...)
    pub label: String,

    /// Matches in the order the finder discovered them
    pub matches: Vec<UsageMatch>,
}

/// Usage matches grouped by status label
///
/// Groups keep the insertion order of the first match seen with each
/// status; matches inside a group keep finder order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedReport {
    /// Ordered status groups
    pub groups: Vec<StatusGroup>,
}

impl GroupedReport {
    /// Append a match under the given label, creating the group on first use
    pub fn push(&mut self, label: String, usage: UsageMatch) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.label == label) {
            group.matches.push(usage);
        } else {
            self.groups.push(StatusGroup {
                label,
                matches: vec![usage],
            });
        }
    }

    /// Total number of matches across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.matches.len()).sum()
    }

    /// Check whether the report holds no matches
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
