//! Lot records and the ordered collection that holds them.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::Field;

/// Date format used everywhere a date crosses a text boundary (CSV, forms).
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Parse an ISO-8601 (`YYYY-MM-DD`) date string.
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, DATE_FMT)
}

/// One production lot, one row of the backing file.
///
/// Serde names mirror the column headers exactly, so a serialized record is
/// keyed the way the grid and the CSV header spell the columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotRecord {
    /// Primary key, unique across the collection.
    #[serde(rename = "LOT NUMBER")]
    pub lot_number: String,
    /// Fabric description.
    #[serde(rename = "FABRICS")]
    pub fabrics: String,
    /// Fabrication date.
    #[serde(rename = "FAB. DATE")]
    pub fab_date: NaiveDate,
    /// Short number.
    #[serde(rename = "SHORT NO.")]
    pub short_no: String,
    /// Roll number.
    #[serde(rename = "ROLL NO.")]
    pub roll_no: String,
    /// Meters of fabric.
    #[serde(rename = "MTR")]
    pub mtr: String,
    /// Contracted jobber for this lot.
    #[serde(rename = "JOBBER")]
    pub jobber: String,
    /// Date the job was handed to the jobber.
    #[serde(rename = "JOB DATE")]
    pub job_date: NaiveDate,
    /// Panno (fabric width).
    #[serde(rename = "PANNO")]
    pub panno: String,
    /// Average consumption; the one column that may be empty.
    #[serde(rename = "AVERAGE", default)]
    pub average: String,
    /// Thread specification.
    #[serde(rename = "THREAD")]
    pub thread: String,
    /// Piece length.
    #[serde(rename = "LENGTH")]
    pub length: String,
    /// Garment size.
    #[serde(rename = "SIZE")]
    pub size: String,
    /// K.P. attribute.
    #[serde(rename = "K.P.")]
    pub kp: String,
    /// Belt specification.
    #[serde(rename = "BELT")]
    pub belt: String,
    /// Rate agreed for the lot.
    #[serde(rename = "RATE")]
    pub rate: String,
    /// Washing instruction.
    #[serde(rename = "WASHING")]
    pub washing: String,
}

impl LotRecord {
    /// The serialized cell value for one column.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::LotNumber => self.lot_number.clone(),
            Field::Fabrics => self.fabrics.clone(),
            Field::FabDate => self.fab_date.format(DATE_FMT).to_string(),
            Field::ShortNo => self.short_no.clone(),
            Field::RollNo => self.roll_no.clone(),
            Field::Mtr => self.mtr.clone(),
            Field::Jobber => self.jobber.clone(),
            Field::JobDate => self.job_date.format(DATE_FMT).to_string(),
            Field::Panno => self.panno.clone(),
            Field::Average => self.average.clone(),
            Field::Thread => self.thread.clone(),
            Field::Length => self.length.clone(),
            Field::Size => self.size.clone(),
            Field::Kp => self.kp.clone(),
            Field::Belt => self.belt.clone(),
            Field::Rate => self.rate.clone(),
            Field::Washing => self.washing.clone(),
        }
    }

    /// All cell values in canonical column order.
    pub fn row(&self) -> Vec<String> {
        Field::ALL.iter().map(|f| self.value(*f)).collect()
    }

    /// Rebuild a record from cells in canonical column order.
    ///
    /// Missing trailing cells read as empty strings; a date cell that does
    /// not parse as `YYYY-MM-DD` is an error. This is the load-side inverse
    /// of [`LotRecord::row`].
    pub fn from_row(cells: &[&str]) -> Result<LotRecord, crate::error::ValidationError> {
        let cell = |i: usize| cells.get(i).copied().unwrap_or("").to_string();
        let date = |i: usize, field: Field| {
            let raw = cells.get(i).copied().unwrap_or("");
            parse_date(raw).map_err(|_| crate::error::ValidationError::BadDate {
                field,
                value: raw.to_string(),
            })
        };
        Ok(LotRecord {
            lot_number: cell(0),
            fabrics: cell(1),
            fab_date: date(2, Field::FabDate)?,
            short_no: cell(3),
            roll_no: cell(4),
            mtr: cell(5),
            jobber: cell(6),
            job_date: date(7, Field::JobDate)?,
            panno: cell(8),
            average: cell(9),
            thread: cell(10),
            length: cell(11),
            size: cell(12),
            kp: cell(13),
            belt: cell(14),
            rate: cell(15),
            washing: cell(16),
        })
    }
}

/// Raw field values as collected by a form, keyed by column header.
///
/// This is the untyped side of the validator boundary: everything is a
/// string, anything may be absent, and whitespace-only values count as
/// absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(HashMap<String, String>);

impl FieldMap {
    /// An empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field's raw value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> &mut Self {
        self.0.insert(field.name().to_string(), value.into());
        self
    }

    /// The trimmed raw value for a field, or `None` if absent or blank.
    pub fn get(&self, field: Field) -> Option<&str> {
        let raw = self.0.get(field.name())?.trim();
        if raw.is_empty() { None } else { Some(raw) }
    }
}

impl From<HashMap<String, String>> for FieldMap {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// The ordered set of all lot records.
///
/// Insertion order is display order. The uniqueness invariant on
/// `LOT NUMBER` is maintained by the admission paths in
/// [`crate::validate`]; the collection itself is a plain ordered sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LotCollection(Vec<LotRecord>);

impl LotCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-validated record set.
    pub fn from_records(records: Vec<LotRecord>) -> Self {
        Self(records)
    }

    /// The records, in display order.
    pub fn records(&self) -> &[LotRecord] {
        &self.0
    }

    /// Iterate the records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, LotRecord> {
        self.0.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any record carries this lot number.
    pub fn contains_lot(&self, lot_number: &str) -> bool {
        self.0.iter().any(|r| r.lot_number == lot_number)
    }

    /// The record with this lot number, if present.
    pub fn get(&self, lot_number: &str) -> Option<&LotRecord> {
        self.0.iter().find(|r| r.lot_number == lot_number)
    }

    /// Append an admitted record.
    pub fn push(&mut self, record: LotRecord) {
        self.0.push(record);
    }

    /// Remove every record with this lot number, returning how many went.
    ///
    /// Removing a key that is not present is a no-op, not an error.
    pub fn remove(&mut self, lot_number: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|r| r.lot_number != lot_number);
        before - self.0.len()
    }

    /// Consume the collection, yielding the record set.
    pub fn into_records(self) -> Vec<LotRecord> {
        self.0
    }
}

impl IntoIterator for LotCollection {
    type Item = LotRecord;
    type IntoIter = std::vec::IntoIter<LotRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LotCollection {
    type Item = &'a LotRecord;
    type IntoIter = std::slice::Iter<'a, LotRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
