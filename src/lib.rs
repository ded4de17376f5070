//! mediascan - media usage tracing for content stores
//!
//! Scans a content repository to find every post or page that references a
//! given media file, either through a direct attachment relationship or
//! through substring occurrence of the file name in body text or metadata.
//! Results are grouped by publication status for display.
//!
//! # Architecture
//!
//! - `domain`: record snapshots, decoded metadata values, report types
//! - `store`: the `ContentStore` seam plus SQLite and in-memory backends
//! - `usage`: the `UsageFinder` scan and status grouping
//! - `cli`: thin presentation adapter over the finder
//!
//! The finder is synchronous and stateless: every call rescans the full
//! store and nothing is cached between calls.
//!
//! # Usage
//!
//! ```bash
//! # Trace a media record by id
//! mediascan usage 42
//!
//! # Same, against an explicit database, as JSON
//! mediascan usage 42 --db ./content.db --json
//!
//! # List media records
//! mediascan media
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod store;
pub mod usage;

// Re-export main types at crate root for convenience
pub use domain::{
    ContentRecord, GroupedReport, MediaRecord, MetaValue, RecordId, StatusGroup, UsageMatch,
};
pub use store::{ContentStore, MemoryStore, SqliteStore, StoreError};
pub use usage::UsageFinder;
