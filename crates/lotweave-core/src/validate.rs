//! Admission gatekeeping between raw form input and the collection.
//!
//! Two terminal outcomes only: a submission is either admitted as a
//! [`LotRecord`] or rejected with a non-empty error list. There is no
//! pending state and no partial admission.
//!
//! Check order is observable and deliberate: the duplicate-key check runs
//! first and short-circuits, so a submission that both reuses a lot number
//! and omits required fields reports only the duplicate.

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;
use crate::model::{FieldMap, LotCollection, LotRecord, parse_date};
use crate::schema::Field;

/// Validate a raw submission against the existing collection.
///
/// Dates default to today when not supplied. See [`validate_new_at`] for
/// the full rules; this wrapper only fixes "today" to the local date.
pub fn validate_new(
    fields: &FieldMap,
    existing: &LotCollection,
) -> Result<LotRecord, Vec<ValidationError>> {
    validate_new_at(fields, existing, Local::now().date_naive())
}

/// Validate a raw submission, with an explicit creation date.
///
/// Rules, in order:
/// 1. If `LOT NUMBER` already exists in `existing`, reject with exactly one
///    [`ValidationError::DuplicateKey`] and report nothing else.
/// 2. Otherwise collect one [`ValidationError::MissingField`] per required
///    field that is empty or absent, and one [`ValidationError::BadDate`]
///    per supplied date that does not parse as `YYYY-MM-DD`.
/// 3. With no errors, construct the record; `FAB. DATE` and `JOB DATE`
///    default to `today` when absent, `AVERAGE` defaults to empty.
pub fn validate_new_at(
    fields: &FieldMap,
    existing: &LotCollection,
    today: NaiveDate,
) -> Result<LotRecord, Vec<ValidationError>> {
    if let Some(lot_number) = fields.get(Field::LotNumber)
        && existing.contains_lot(lot_number)
    {
        return Err(vec![ValidationError::DuplicateKey {
            lot_number: lot_number.to_string(),
        }]);
    }

    let mut errors = Vec::new();
    for field in Field::ALL {
        if field.is_required() && fields.get(field).is_none() {
            errors.push(ValidationError::MissingField { field });
        }
    }

    let date_or_today = |field: Field, errors: &mut Vec<ValidationError>| match fields.get(field) {
        None => Some(today),
        Some(raw) => match parse_date(raw) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(ValidationError::BadDate {
                    field,
                    value: raw.to_string(),
                });
                None
            }
        },
    };
    let fab_date = date_or_today(Field::FabDate, &mut errors);
    let job_date = date_or_today(Field::JobDate, &mut errors);

    let text = |field: Field| fields.get(field).unwrap_or("").to_string();
    // A None date always pushed an error, so the fallthrough list is non-empty.
    match (fab_date, job_date) {
        (Some(fab_date), Some(job_date)) if errors.is_empty() => Ok(LotRecord {
            lot_number: text(Field::LotNumber),
            fabrics: text(Field::Fabrics),
            fab_date,
            short_no: text(Field::ShortNo),
            roll_no: text(Field::RollNo),
            mtr: text(Field::Mtr),
            jobber: text(Field::Jobber),
            job_date,
            panno: text(Field::Panno),
            average: text(Field::Average),
            thread: text(Field::Thread),
            length: text(Field::Length),
            size: text(Field::Size),
            kp: text(Field::Kp),
            belt: text(Field::Belt),
            rate: text(Field::Rate),
            washing: text(Field::Washing),
        }),
        _ => Err(errors),
    }
}

/// Replace the whole record set, as a grid edit does.
///
/// Unlike the original tool, the edit path is validated: the incoming set
/// must keep every lot number non-empty and unique, or the collection is
/// left untouched and the offenses are reported.
pub fn replace_all(
    collection: &mut LotCollection,
    records: Vec<LotRecord>,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if records.iter().any(|r| r.lot_number.trim().is_empty()) {
        errors.push(ValidationError::MissingField {
            field: Field::LotNumber,
        });
    }

    let mut seen = std::collections::HashSet::new();
    for record in &records {
        if !record.lot_number.trim().is_empty() && !seen.insert(record.lot_number.as_str()) {
            let duplicate = ValidationError::DuplicateKey {
                lot_number: record.lot_number.clone(),
            };
            if !errors.contains(&duplicate) {
                errors.push(duplicate);
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    *collection = LotCollection::from_records(records);
    Ok(())
}
