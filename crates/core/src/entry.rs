//! Line-oriented input format.
//!
//! Each non-blank line is one entry:
//!
//! ```text
//! PATIENT,<id>,<name>,<sex M|F|X>,<date of birth YYYY-MM-DD>
//! RECORD,<id>,<date YYYY-MM-DD>,<heart rate>,<systolic>/<diastolic>,<temperature C>,<respiratory rate>
//! ```
//!
//! Trailing empty fields are dropped before counting, so `PATIENT,1,Ann,F,1990-01-01,`
//! is a valid registration. Empty fields elsewhere still count.
//!
//! Parsing only checks shape and field types. Whether an id is known or already
//! taken is decided by the [`Clinic`](crate::Clinic).

use crate::constants::{PATIENT_ENTRY_TAG, RECORD_ENTRY_TAG};
use crate::record::Record;
use chrono::NaiveDate;
use clinic_types::Sex;
use std::str::FromStr;

const PATIENT_FIELDS: usize = 5;
const RECORD_FIELDS: usize = 7;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("unrecognised entry type '{0}'")]
    UnrecognisedType(String),
    #[error("{tag} entry expects {expected} fields, found {found}")]
    FieldCount {
        tag: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid {field} '{value}'")]
    InvalidField { field: &'static str, value: String },
}

/// A patient registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub id: u64,
    pub name: String,
    pub sex: Sex,
    pub date_of_birth: NaiveDate,
}

/// One set of vital signs taken on one date.
#[derive(Clone, Debug, PartialEq)]
pub struct VitalsReading {
    pub id: u64,
    pub date: NaiveDate,
    pub heart_rate: i32,
    pub systolic_bp: i32,
    pub diastolic_bp: i32,
    pub temperature_c: f64,
    pub respiratory_rate: i32,
}

impl VitalsReading {
    /// The four records of this reading in evaluation order.
    pub fn records(&self) -> [Record; 4] {
        [
            Record::heart_rate(self.date, self.heart_rate),
            Record::blood_pressure(self.date, self.systolic_bp, self.diastolic_bp),
            Record::temperature(self.date, self.temperature_c),
            Record::respiratory_rate(self.date, self.respiratory_rate),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    RegisterPatient(Registration),
    RecordVitals(VitalsReading),
}

impl Entry {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Entry>, EntryError> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let mut parts: Vec<&str> = line.split(',').map(str::trim).collect();
        while parts.len() > 1 && parts.last().is_some_and(|last| last.is_empty()) {
            parts.pop();
        }

        match parts[0] {
            PATIENT_ENTRY_TAG => parse_patient(&parts).map(|r| Some(Entry::RegisterPatient(r))),
            RECORD_ENTRY_TAG => parse_record(&parts).map(|v| Some(Entry::RecordVitals(v))),
            other => Err(EntryError::UnrecognisedType(other.to_string())),
        }
    }

    /// The patient id the entry refers to.
    pub fn patient_id(&self) -> u64 {
        match self {
            Entry::RegisterPatient(registration) => registration.id,
            Entry::RecordVitals(reading) => reading.id,
        }
    }
}

fn expect_fields(parts: &[&str], tag: &'static str, expected: usize) -> Result<(), EntryError> {
    if parts.len() != expected {
        return Err(EntryError::FieldCount {
            tag,
            expected,
            found: parts.len(),
        });
    }
    Ok(())
}

fn field<T: FromStr>(value: &str, field: &'static str) -> Result<T, EntryError> {
    value.parse::<T>().map_err(|_| EntryError::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn date_field(value: &str, field: &'static str) -> Result<NaiveDate, EntryError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EntryError::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn parse_patient(parts: &[&str]) -> Result<Registration, EntryError> {
    expect_fields(parts, PATIENT_ENTRY_TAG, PATIENT_FIELDS)?;

    Ok(Registration {
        id: field(parts[1], "patient id")?,
        name: parts[2].to_string(),
        sex: field(parts[3], "sex")?,
        date_of_birth: date_field(parts[4], "date of birth")?,
    })
}

fn parse_record(parts: &[&str]) -> Result<VitalsReading, EntryError> {
    expect_fields(parts, RECORD_ENTRY_TAG, RECORD_FIELDS)?;

    let (systolic, diastolic) =
        parts[4]
            .split_once('/')
            .ok_or_else(|| EntryError::InvalidField {
                field: "blood pressure",
                value: parts[4].to_string(),
            })?;

    Ok(VitalsReading {
        id: field(parts[1], "patient id")?,
        date: date_field(parts[2], "measurement date")?,
        heart_rate: field(parts[3], "heart rate")?,
        systolic_bp: field(systolic.trim(), "systolic blood pressure")?,
        diastolic_bp: field(diastolic.trim(), "diastolic blood pressure")?,
        temperature_c: field(parts[5], "temperature")?,
        respiratory_rate: field(parts[6], "respiratory rate")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(Entry::parse(""), Ok(None));
        assert_eq!(Entry::parse("   \t"), Ok(None));
    }

    #[test]
    fn parses_patient_entry() {
        let entry = Entry::parse("PATIENT,42,Alice Smith,F,1995-01-15")
            .expect("valid")
            .expect("not blank");
        assert_eq!(
            entry,
            Entry::RegisterPatient(Registration {
                id: 42,
                name: "Alice Smith".into(),
                sex: Sex::Female,
                date_of_birth: ymd(1995, 1, 15),
            })
        );
        assert_eq!(entry.patient_id(), 42);
    }

    #[test]
    fn parses_record_entry_with_spaces() {
        let entry = Entry::parse("RECORD, 42, 2025-03-01, 150, 150/95, 39.5, 10")
            .expect("valid")
            .expect("not blank");
        let Entry::RecordVitals(reading) = entry else {
            panic!("expected vitals entry");
        };
        assert_eq!(reading.id, 42);
        assert_eq!(reading.date, ymd(2025, 3, 1));
        assert_eq!(reading.heart_rate, 150);
        assert_eq!((reading.systolic_bp, reading.diastolic_bp), (150, 95));
        assert_eq!(reading.temperature_c, 39.5);
        assert_eq!(reading.respiratory_rate, 10);

        let kinds: Vec<_> = reading.records().iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                crate::record::VitalKind::HeartRate,
                crate::record::VitalKind::BloodPressure,
                crate::record::VitalKind::Temperature,
                crate::record::VitalKind::RespiratoryRate,
            ]
        );
    }

    #[test]
    fn rejects_unknown_type() {
        let err = Entry::parse("VISIT,1,2025-01-01").expect_err("unknown type");
        assert_eq!(err, EntryError::UnrecognisedType("VISIT".into()));
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = Entry::parse("PATIENT,1,Alice,F").expect_err("too few fields");
        assert!(matches!(
            err,
            EntryError::FieldCount {
                expected: 5,
                found: 4,
                ..
            }
        ));
    }

    #[test]
    fn trailing_empty_fields_are_ignored() {
        let entry = Entry::parse("PATIENT,1,Alice,F,1995-01-15,")
            .expect("valid")
            .expect("not blank");
        assert_eq!(entry.patient_id(), 1);

        let entry = Entry::parse("RECORD,1,2025-05-20,72,118/76,36.9,14, ,,")
            .expect("valid")
            .expect("not blank");
        assert!(matches!(entry, Entry::RecordVitals(_)));

        // An empty field before the end is still a field.
        let err = Entry::parse("PATIENT,1,Alice,,F,1995-01-15").expect_err("extra field");
        assert!(matches!(
            err,
            EntryError::FieldCount {
                expected: 5,
                found: 6,
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_numeric_and_date_fields() {
        let err = Entry::parse("RECORD,1,2025-01-01,fast,120/80,37.0,16").expect_err("bad hr");
        assert!(matches!(err, EntryError::InvalidField { field: "heart rate", .. }));

        let err = Entry::parse("RECORD,1,2025-13-01,80,120/80,37.0,16").expect_err("bad date");
        assert!(matches!(err, EntryError::InvalidField { field: "measurement date", .. }));

        let err = Entry::parse("RECORD,1,2025-01-01,80,120-80,37.0,16").expect_err("bad bp");
        assert!(matches!(err, EntryError::InvalidField { field: "blood pressure", .. }));

        let err = Entry::parse("PATIENT,-3,Alice,F,1995-01-15").expect_err("negative id");
        assert!(matches!(err, EntryError::InvalidField { field: "patient id", .. }));
    }

    #[test]
    fn rejects_unknown_sex() {
        let err = Entry::parse("PATIENT,1,Alice,Q,1995-01-15").expect_err("bad sex");
        assert!(matches!(err, EntryError::InvalidField { field: "sex", .. }));
    }
}
