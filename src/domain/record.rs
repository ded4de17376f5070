//! Record snapshots fetched from the content store.
//!
//! Records are read-only projections of store rows. Body text and metadata
//! are deliberately not carried inline; the finder fetches them per record
//! through the store so the candidate query stays a cheap header scan.

use serde::{Deserialize, Serialize};

/// Type tag for revision rows (always excluded from scans)
pub const TYPE_REVISION: &str = "revision";

/// Type tag for media/attachment rows (excluded from the candidate pool,
/// allowed in the attached-records query)
pub const TYPE_ATTACHMENT: &str = "attachment";

/// Pseudo-status used only by attachment rows (always excluded)
pub const STATUS_INHERIT: &str = "inherit";

/// Unique identifier of a store record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Get the raw numeric value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// The media file being traced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Unique identifier of the media row
    pub id: RecordId,

    /// Basename of the stored location (what content references it by)
    pub file_name: String,

    /// Record this media is directly attached to, if any
    pub parent: Option<RecordId>,
}

impl MediaRecord {
    /// Create a media record, deriving `file_name` from the stored path/URL
    pub fn new(id: RecordId, stored_path: &str, parent: Option<RecordId>) -> Self {
        Self {
            id,
            file_name: file_name_of(stored_path).to_string(),
            parent,
        }
    }
}

/// Derive the basename of a stored path or URL
///
/// Both `/` and `\` count as separators, matching how uploaded paths show
/// up in practice (URLs and Windows-style paths in old stores).
pub fn file_name_of(stored_path: &str) -> &str {
    stored_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(stored_path)
}

/// Header projection of a content item (article, page, ...)
///
/// `kind` and `status` are open-set tags; the store's label resolvers map
/// them to display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Title text
    pub title: String,

    /// Type tag ("article", "page", ...)
    pub kind: String,

    /// Publication status tag ("draft", "published", ...)
    pub status: String,
}

impl ContentRecord {
    /// Create a content record header
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        kind: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: kind.into(),
            status: status.into(),
        }
    }
}
