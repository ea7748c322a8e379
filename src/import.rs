// Bulk loading of listing documents from a JSON file.

use crate::db::listings::insert_many;
use crate::db::Database;
use crate::domain::form::ListingDraft;
use crate::domain::listing::ListingRecord;
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads a JSON array of listings and inserts every valid one in a single
/// transaction. Returns how many were inserted.
pub fn import_file(db: &Database, path: &Path) -> Result<usize> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let docs: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} must hold a JSON array of listings", path.display()))?;

    let total = docs.len();
    let records = prepare_records(docs);
    let now = Utc::now().naive_utc();
    let inserted = db
        .with_conn(|conn| insert_many(conn, &records, now))
        .context("Failed to insert listings")?;

    tracing::info!(inserted, skipped = total - inserted, file = %path.display(), "import finished");
    Ok(inserted)
}

/// Drops documents that can't be stored (wrongly typed fields, missing
/// fields, no coordinates in the map link), logging why.
pub fn prepare_records(docs: Vec<Value>) -> Vec<ListingRecord> {
    docs.into_iter()
        .enumerate()
        .filter_map(|(index, doc)| {
            let title = doc
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let draft = match serde_json::from_value::<ListingDraft>(doc) {
                Ok(draft) => draft,
                Err(e) => {
                    tracing::warn!(index, %title, error = %e, "skipping malformed listing");
                    return None;
                }
            };
            match draft.validate_import() {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(index, %title, error = %e, "skipping listing");
                    None
                }
            }
        })
        .collect()
}
