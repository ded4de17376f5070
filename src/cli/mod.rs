//! Command-line interface for mediascan.
//!
//! The CLI is the presentation adapter over the finder: it resolves the
//! media record, runs the scan and prints the grouped report. All matching
//! logic lives in `usage`; everything here is formatting.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config;
use crate::domain::{GroupedReport, RecordId, UsageMatch};
use crate::store::{ContentStore, SqliteStore};
use crate::usage::UsageFinder;

/// mediascan - trace where a media file is used across a content store
#[derive(Parser, Debug)]
#[command(name = "mediascan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every content record that uses a media file
    Usage {
        /// Id of the media record to trace
        media_id: i64,

        /// Database path (defaults to MEDIASCAN_DB or ~/.mediascan/store.db)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List media records in the store
    Media {
        /// Database path (defaults to MEDIASCAN_DB or ~/.mediascan/store.db)
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Usage { media_id, db, json } => show_usage(RecordId(media_id), db, json),
            Commands::Media { db } => list_media(db),
        }
    }
}

fn open_store(db: Option<PathBuf>) -> Result<SqliteStore> {
    let path = config::db_path(db)?;
    SqliteStore::open(&path).with_context(|| format!("Failed to open store: {}", path.display()))
}

fn show_usage(media_id: RecordId, db: Option<PathBuf>, json: bool) -> Result<()> {
    let store = open_store(db)?;

    let Some(media) = store.media(media_id)? else {
        println!("No media record with id {}.", media_id);
        return Ok(());
    };

    let finder = UsageFinder::new(&store);
    let matches = finder.find_usage(&media.file_name, media.id)?;

    if matches.is_empty() {
        println!("No usage found for {}.", media.file_name);
        return Ok(());
    }

    let report = finder.group_by_status(matches);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Usage of {}:", media.file_name);
        print_report(&store, &report);
    }

    Ok(())
}

fn print_report(store: &SqliteStore, report: &GroupedReport) {
    for group in &report.groups {
        println!("\n{} ({})", group.label, group.matches.len());
        for usage in &group.matches {
            println!("  {}: {}", type_label(store, usage), usage.title);
        }
    }
}

fn type_label(store: &SqliteStore, usage: &UsageMatch) -> String {
    store
        .type_label(&usage.kind)
        .unwrap_or_else(|| crate::usage::capitalize(&usage.kind))
}

fn list_media(db: Option<PathBuf>) -> Result<()> {
    let store = open_store(db)?;
    let media = store.list_media()?;

    if media.is_empty() {
        println!("No media records in the store.");
        return Ok(());
    }

    for record in media {
        match record.parent {
            Some(parent) => println!("{}  {} (attached to {})", record.id, record.file_name, parent),
            None => println!("{}  {}", record.id, record.file_name),
        }
    }

    Ok(())
}
