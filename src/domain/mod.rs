//! Data structures for the usage scanner.
//!
//! - `record`: identifiers and the media/content record snapshots
//! - `meta`: the decoded metadata value tree and its flattening
//! - `report`: match projections and the status-grouped report

pub mod meta;
pub mod record;
pub mod report;

pub use meta::MetaValue;
pub use record::{
    ContentRecord, MediaRecord, RecordId, STATUS_INHERIT, TYPE_ATTACHMENT, TYPE_REVISION,
};
pub use report::{GroupedReport, StatusGroup, UsageMatch};
