//! The fixed 17-column schema for lot records.
//!
//! Column names are the exact headers of the backing CSV file and of any
//! form/grid surface that feeds the validator. Order matters: `Field::ALL`
//! is the canonical column order and every serialization path follows it.

use std::fmt;

/// One column of the lot schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `LOT NUMBER` — primary key, unique across the collection.
    LotNumber,
    /// `FABRICS`
    Fabrics,
    /// `FAB. DATE` — optional, defaults to the record-creation date.
    FabDate,
    /// `SHORT NO.`
    ShortNo,
    /// `ROLL NO.`
    RollNo,
    /// `MTR`
    Mtr,
    /// `JOBBER`
    Jobber,
    /// `JOB DATE` — optional, defaults to the record-creation date.
    JobDate,
    /// `PANNO`
    Panno,
    /// `AVERAGE` — the only free-text column that may be left empty.
    Average,
    /// `THREAD`
    Thread,
    /// `LENGTH`
    Length,
    /// `SIZE`
    Size,
    /// `K.P.`
    Kp,
    /// `BELT`
    Belt,
    /// `RATE`
    Rate,
    /// `WASHING`
    Washing,
}

impl Field {
    /// All columns in canonical (header) order.
    pub const ALL: [Field; 17] = [
        Field::LotNumber,
        Field::Fabrics,
        Field::FabDate,
        Field::ShortNo,
        Field::RollNo,
        Field::Mtr,
        Field::Jobber,
        Field::JobDate,
        Field::Panno,
        Field::Average,
        Field::Thread,
        Field::Length,
        Field::Size,
        Field::Kp,
        Field::Belt,
        Field::Rate,
        Field::Washing,
    ];

    /// The exact column header for this field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::LotNumber => "LOT NUMBER",
            Field::Fabrics => "FABRICS",
            Field::FabDate => "FAB. DATE",
            Field::ShortNo => "SHORT NO.",
            Field::RollNo => "ROLL NO.",
            Field::Mtr => "MTR",
            Field::Jobber => "JOBBER",
            Field::JobDate => "JOB DATE",
            Field::Panno => "PANNO",
            Field::Average => "AVERAGE",
            Field::Thread => "THREAD",
            Field::Length => "LENGTH",
            Field::Size => "SIZE",
            Field::Kp => "K.P.",
            Field::Belt => "BELT",
            Field::Rate => "RATE",
            Field::Washing => "WASHING",
        }
    }

    /// Look up a field by its exact column header.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Whether a submission must supply a non-empty value for this field.
    ///
    /// Dates are defaulted rather than required; `AVERAGE` is plain optional.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::FabDate | Field::JobDate | Field::Average)
    }

    /// Whether this field carries an ISO-8601 date rather than free text.
    pub fn is_date(&self) -> bool {
        matches!(self, Field::FabDate | Field::JobDate)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The canonical header row, in column order.
pub fn header() -> Vec<&'static str> {
    Field::ALL.iter().map(Field::name).collect()
}
