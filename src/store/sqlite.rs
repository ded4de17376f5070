//! SQLite-backed content store.
//!
//! The schema is a compact analog of the classic two-table content layout:
//! a `records` table holding every content item (articles, pages, revisions
//! and attachment rows alike) and a `record_meta` table holding key/value
//! metadata per record. Attachment rows carry the stored file path and the
//! "inherit" pseudo-status; their `parent` column points at the record they
//! were uploaded to.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::domain::{ContentRecord, MediaRecord, RecordId, STATUS_INHERIT, TYPE_ATTACHMENT};

use super::{default_status_labels, default_type_labels, ContentStore, StoreError};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS records (
    id        INTEGER PRIMARY KEY,
    title     TEXT NOT NULL DEFAULT '',
    kind      TEXT NOT NULL,
    status    TEXT NOT NULL,
    parent    INTEGER,
    body      TEXT NOT NULL DEFAULT '',
    file_path TEXT
);

CREATE TABLE IF NOT EXISTS record_meta (
    id         INTEGER PRIMARY KEY,
    record_id  INTEGER NOT NULL,
    meta_key   TEXT NOT NULL,
    meta_value TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_record_meta_record ON record_meta(record_id);
";

/// Content store over a SQLite database
pub struct SqliteStore {
    conn: Connection,
    status_labels: HashMap<String, String>,
    type_labels: HashMap<String, String>,
}

impl SqliteStore {
    /// Open (and initialize) a store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        Self::with_connection(conn)
    }

    /// Open an in-memory store (tests, scratch scans)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn,
            status_labels: default_status_labels().into_iter().collect(),
            type_labels: default_type_labels().into_iter().collect(),
        })
    }

    /// Register or override a status display label
    pub fn register_status_label(&mut self, tag: impl Into<String>, label: impl Into<String>) {
        self.status_labels.insert(tag.into(), label.into());
    }

    /// Register or override a record type display label
    pub fn register_type_label(&mut self, tag: impl Into<String>, label: impl Into<String>) {
        self.type_labels.insert(tag.into(), label.into());
    }

    /// Insert a content record, returning its id
    pub fn add_record(
        &self,
        title: &str,
        kind: &str,
        status: &str,
        body: &str,
    ) -> Result<RecordId, StoreError> {
        self.conn.execute(
            "INSERT INTO records (title, kind, status, body) VALUES (?1, ?2, ?3, ?4)",
            params![title, kind, status, body],
        )?;
        Ok(RecordId(self.conn.last_insert_rowid()))
    }

    /// Insert a media/attachment row, returning its id
    ///
    /// Attachment rows always get the "inherit" pseudo-status; their title
    /// is the file basename.
    pub fn add_attachment(
        &self,
        stored_path: &str,
        parent: Option<RecordId>,
    ) -> Result<RecordId, StoreError> {
        let title = crate::domain::record::file_name_of(stored_path);
        self.conn.execute(
            "INSERT INTO records (title, kind, status, parent, file_path)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                title,
                TYPE_ATTACHMENT,
                STATUS_INHERIT,
                parent.map(|p| p.as_i64()),
                stored_path
            ],
        )?;
        Ok(RecordId(self.conn.last_insert_rowid()))
    }

    /// Attach a metadata value to a record
    pub fn add_meta(&self, record: RecordId, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO record_meta (record_id, meta_key, meta_value) VALUES (?1, ?2, ?3)",
            params![record.as_i64(), key, value],
        )?;
        Ok(())
    }

    /// Resolve a media record by id
    ///
    /// Returns `None` when the id does not exist or is not an attachment
    /// row; the caller decides how to render "no such media".
    pub fn media(&self, id: RecordId) -> Result<Option<MediaRecord>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT file_path, parent FROM records WHERE id = ?1 AND kind = ?2",
                params![id.as_i64(), TYPE_ATTACHMENT],
                |row| {
                    let path: Option<String> = row.get(0)?;
                    let parent: Option<i64> = row.get(1)?;
                    Ok((path.unwrap_or_default(), parent))
                },
            )
            .optional()?;

        Ok(row.map(|(path, parent)| MediaRecord::new(id, &path, parent.map(RecordId))))
    }

    /// List all media rows in the store, in id order
    pub fn list_media(&self) -> Result<Vec<MediaRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, file_path, parent FROM records WHERE kind = ?1 ORDER BY id",
        )?;

        let rows = stmt.query_map(params![TYPE_ATTACHMENT], |row| {
            let id: i64 = row.get(0)?;
            let path: Option<String> = row.get(1)?;
            let parent: Option<i64> = row.get(2)?;
            Ok(MediaRecord::new(
                RecordId(id),
                &path.unwrap_or_default(),
                parent.map(RecordId),
            ))
        })?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ContentRecord> {
        Ok(ContentRecord {
            id: RecordId(row.get(0)?),
            title: row.get(1)?,
            kind: row.get(2)?,
            status: row.get(3)?,
        })
    }
}

impl ContentStore for SqliteStore {
    fn list_candidates(&self) -> Result<Vec<ContentRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, kind, status FROM records
             WHERE kind NOT IN ('revision', 'attachment') AND status != 'inherit'",
        )?;

        let records = stmt
            .query_map([], Self::record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(candidates = records.len(), "fetched candidate pool");
        Ok(records)
    }

    fn list_attached(&self, media_id: RecordId) -> Result<Vec<ContentRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.title, p.kind, p.status FROM records p
             JOIN records a ON p.id = a.parent
             WHERE a.id = ?1 AND p.kind != 'revision' AND p.status != 'inherit'",
        )?;

        let records = stmt
            .query_map(params![media_id.as_i64()], Self::record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn body_of(&self, id: RecordId) -> Result<String, StoreError> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM records WHERE id = ?1",
                params![id.as_i64()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(body.unwrap_or_default())
    }

    fn meta_values_of(&self, id: RecordId) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT meta_value FROM record_meta WHERE record_id = ?1 ORDER BY id")?;

        let values = stmt
            .query_map(params![id.as_i64()], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(values)
    }

    fn status_label(&self, status: &str) -> Option<String> {
        self.status_labels.get(status).cloned()
    }

    fn type_label(&self, kind: &str) -> Option<String> {
        self.type_labels.get(kind).cloned()
    }
}
