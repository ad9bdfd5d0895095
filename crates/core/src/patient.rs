//! Patient demographics and accumulated findings.
//!
//! A [`Patient`] owns its records and the alerts derived from them. Both lists
//! only ever grow, in arrival order.

use crate::record::Record;
use crate::vitals::{self, Alert};
use crate::{ClinicError, ClinicResult};
use chrono::{Datelike, NaiveDate};
use clinic_types::{NonEmptyText, Sex};

#[derive(Clone, Debug)]
pub struct Patient {
    id: u64,
    name: NonEmptyText,
    sex: Sex,
    date_of_birth: NaiveDate,
    records: Vec<Record>,
    alerts: Vec<Alert>,
}

impl Patient {
    /// Register a patient.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::InvalidDemographics` if:
    /// - `name` is empty or whitespace,
    /// - `date_of_birth` is after `today`.
    pub fn new(
        id: u64,
        name: &str,
        sex: Sex,
        date_of_birth: NaiveDate,
        today: NaiveDate,
    ) -> ClinicResult<Self> {
        let name = NonEmptyText::new(name).map_err(|e| ClinicError::InvalidDemographics {
            id,
            reason: format!("name: {e}"),
        })?;

        if date_of_birth > today {
            return Err(ClinicError::InvalidDemographics {
                id,
                reason: format!("date of birth {date_of_birth} is in the future"),
            });
        }

        Ok(Self {
            id,
            name,
            sex,
            date_of_birth,
            records: Vec::new(),
            alerts: Vec::new(),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn name_text(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Age in whole years on `today`.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        whole_years_between(self.date_of_birth, today)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn num_alerts(&self) -> usize {
        self.alerts.len()
    }

    /// Store a record and evaluate it against the patient's sex and age on
    /// `today`, which is the processing date rather than the measurement date.
    ///
    /// Returns the alert raised by this record, if any.
    pub fn add_record(&mut self, record: Record, today: NaiveDate) -> Option<&Alert> {
        self.records.push(record);

        let alert = vitals::evaluate(&record, self.sex, self.age_on(today))?;
        self.alerts.push(alert);
        self.alerts.last()
    }
}

/// Completed years from `from` to `to`; zero if `to` is earlier than `from`.
///
/// A birthday on 29 February is reached on 1 March in non-leap years.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to < from {
        return 0;
    }

    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}
