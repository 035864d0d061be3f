//! GCAT catalog TSV ingestion.
//!
//! Reads the tab-separated launch catalog files published by the GCAT
//! project (e.g. `Electron.tsv`) and converts them into [`LaunchRecord`]
//! structs for aggregation. The format carries its header on the first line,
//! prefixed with `#`; later `#` lines are comments.

use std::fs;
use std::path::Path;

use chrono_tz::Tz;
use tracing::{debug, warn};

use launch_core::error::{LaunchError, Result};
use launch_core::models::LaunchRecord;
use launch_core::vague_date::parse_vague_datetime;

/// Catalog columns the pipeline requires.
const COL_LAUNCH_DATE: &str = "Launch_Date";
const COL_FLIGHT_ID: &str = "Flight_ID";
const COL_FLIGHT: &str = "Flight";

// ── Raw rows ──────────────────────────────────────────────────────────────────

/// One catalog row with its launch date still in Vague Date string form.
#[derive(Debug, Clone)]
pub struct CatalogRow {
    pub flight_id: String,
    pub flight: String,
    pub launch_date: String,
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// Read and parse a catalog TSV file from disk.
pub fn read_catalog(path: &Path) -> Result<Vec<CatalogRow>> {
    let content = fs::read_to_string(path).map_err(|source| LaunchError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content)
}

/// Parse catalog TSV text into raw rows.
///
/// The first line is the header (its leading `#` is stripped); subsequent
/// lines starting with `#` are comments. Rows missing the required fields
/// are skipped with a warning rather than aborting the whole catalog.
pub fn parse_catalog(content: &str) -> Result<Vec<CatalogRow>> {
    let mut lines = content.lines();

    let header_line = lines
        .next()
        .ok_or_else(|| LaunchError::CatalogFormat("empty catalog".to_string()))?;
    let headers: Vec<&str> = header_line
        .trim_start_matches('#')
        .trim()
        .split('\t')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .collect();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| *h == name)
            .ok_or_else(|| LaunchError::MissingColumn(name.to_string()))
    };
    let date_idx = column(COL_LAUNCH_DATE)?;
    let flight_id_idx = column(COL_FLIGHT_ID)?;
    let flight_idx = column(COL_FLIGHT)?;

    let mut rows = Vec::new();
    for (line_no, line) in lines.enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();

        let field = |idx: usize| fields.get(idx).copied().unwrap_or_default();
        let launch_date = field(date_idx);
        if launch_date.is_empty() {
            warn!("catalog line {}: no launch date, skipping", line_no + 2);
            continue;
        }

        rows.push(CatalogRow {
            flight_id: field(flight_id_idx).to_string(),
            flight: field(flight_idx).to_string(),
            launch_date: launch_date.to_string(),
        });
    }

    debug!("parsed {} catalog rows", rows.len());
    Ok(rows)
}

// ── Record construction ───────────────────────────────────────────────────────

/// Run the Vague Date parser over raw rows, producing launch records in `tz`.
///
/// Rows whose date matches none of the Vague Date grammars are dropped; the
/// total dropped count is logged so a minority of malformed rows never
/// blocks an otherwise valid catalog.
pub fn build_launch_records(rows: Vec<CatalogRow>, tz: Tz) -> Vec<LaunchRecord> {
    let mut dropped = 0usize;
    let records: Vec<LaunchRecord> = rows
        .into_iter()
        .filter_map(|row| match parse_vague_datetime(&row.launch_date, tz) {
            Some(launch_date) => Some(LaunchRecord {
                flight_id: row.flight_id,
                flight: row.flight,
                launch_date,
            }),
            None => {
                debug!(
                    "unparseable launch date {:?} for flight {}",
                    row.launch_date, row.flight_id
                );
                dropped += 1;
                None
            }
        })
        .collect();

    if dropped > 0 {
        warn!("{} catalog rows had unparseable launch dates", dropped);
    }
    records
}

// ── Tests ─────────────────────────────────────────────────────────────────────
