//! The CSV-backed store.
//!
//! The collection is the unit of persistence: every save rewrites the whole
//! file, there is no per-row update. The layout is a header row with the 17
//! canonical column names followed by one row per record, dates as
//! ISO-8601, everything else plain text.
//!
//! # Recovery policy
//!
//! `load` never fails. A missing, unreadable, or malformed backing file
//! (wrong header, undecodable rows, bad dates) degrades to an empty or
//! partial collection with a `warn!`, keeping the UI renderable no matter
//! what happened to the file on disk. Write failures, by contrast, are
//! surfaced: a caller must not assume a failed save persisted anything.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use lotweave_core::{LotCollection, LotRecord, schema};

use crate::error::{Error, Result};

/// Handle to the backing CSV file.
///
/// Holds the file path explicitly; there is no ambient global. Constructing
/// a store does no I/O.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store over the given backing file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection from disk.
    ///
    /// Never fails; see the module docs for the recovery policy. Rows that
    /// cannot be decoded and rows that repeat an earlier lot number are
    /// skipped with a warning (first occurrence wins).
    pub fn load(&self) -> LotCollection {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "backing file absent, starting empty");
            return LotCollection::new();
        }

        let mut reader = match csv::ReaderBuilder::new().flexible(true).from_path(&self.path) {
            Ok(reader) => reader,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "backing file unreadable, starting empty");
                return LotCollection::new();
            }
        };

        match reader.headers() {
            Ok(headers) => {
                let expected = schema::header();
                if headers.iter().collect::<Vec<_>>() != expected {
                    warn!(
                        path = %self.path.display(),
                        "backing file header does not match the lot schema, starting empty"
                    );
                    return LotCollection::new();
                }
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "backing file header unreadable, starting empty");
                return LotCollection::new();
            }
        }

        let mut records = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for (index, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    warn!(row = index + 1, %err, "skipping undecodable row");
                    continue;
                }
            };
            let cells: Vec<&str> = row.iter().collect();
            let record = match LotRecord::from_row(&cells) {
                Ok(record) => record,
                Err(err) => {
                    warn!(row = index + 1, %err, "skipping malformed row");
                    continue;
                }
            };
            if !seen.insert(record.lot_number.clone()) {
                warn!(
                    row = index + 1,
                    lot_number = %record.lot_number,
                    "skipping row with duplicate lot number"
                );
                continue;
            }
            records.push(record);
        }

        LotCollection::from_records(records)
    }

    /// Write the full collection to disk, replacing the backing file.
    ///
    /// Writes go to a sibling temp file first and are renamed into place,
    /// so a concurrent `load` sees either the old file or the new one,
    /// never a torn write.
    pub fn save(&self, collection: &LotCollection) -> Result<()> {
        let tmp = self.path.with_extension("csv.tmp");
        let result = self.write_to(&tmp, collection).and_then(|()| {
            fs::rename(&tmp, &self.path)?;
            Ok(())
        });
        if result.is_err() {
            // Best effort: do not leave the temp file behind.
            let _ = fs::remove_file(&tmp);
        } else {
            debug!(path = %self.path.display(), records = collection.len(), "saved collection");
        }
        result
    }

    fn write_to(&self, path: &Path, collection: &LotCollection) -> Result<()> {
        let file = fs::File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);
        write_collection(&mut writer, collection)?;
        writer.flush()?;
        writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        Ok(())
    }
}

/// Serialize the collection to a CSV string, same layout as the backing
/// file. This backs the export action: what you download is exactly what
/// a save would write.
pub fn export_csv(collection: &LotCollection) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_collection(&mut writer, collection)?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn write_collection<W: Write>(
    writer: &mut csv::Writer<W>,
    collection: &LotCollection,
) -> Result<()> {
    writer.write_record(schema::header())?;
    for record in collection {
        writer.write_record(record.row())?;
    }
    Ok(())
}
