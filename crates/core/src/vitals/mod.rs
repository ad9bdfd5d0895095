//! Clinical threshold evaluation.
//!
//! Each vital kind has a pure classifier in its own module that maps a reading,
//! plus the patient's sex and age in whole years, to an optional [`Condition`].
//! [`evaluate`] dispatches a [`Record`] to the right classifier and wraps any
//! finding in an [`Alert`].
//!
//! Ages 0 through 12 use the pediatric tables; 13 and above use the adult rules.
//! Thresholds follow the University of Iowa pediatric vital sign reference
//! ranges and the ACC/AHA adult blood pressure categories.

pub mod blood_pressure;
pub mod heart_rate;
pub mod respiratory_rate;
pub mod temperature;

use crate::record::{Record, Vital, VitalKind};
use chrono::NaiveDate;
use clinic_types::Sex;
use serde::Serialize;
use std::fmt;

/// An abnormal finding for one vital.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Tachycardia,
    Bradycardia,
    Hypotension,
    /// Pediatric hypertension; the pediatric tables are not staged.
    Hypertension,
    HypertensionStage1,
    HypertensionStage2,
    ElevatedBloodPressure,
    HighFever,
    ModerateFever,
    Hypothermia,
    Tachypnea,
    Bradypnea,
}

impl Condition {
    /// Human-readable wording used in alert text.
    pub fn description(self) -> &'static str {
        match self {
            Condition::Tachycardia => "Possible tachycardia",
            Condition::Bradycardia => "Possible bradycardia",
            Condition::Hypotension => "Possible hypotension",
            Condition::Hypertension => "Possible hypertension",
            Condition::HypertensionStage1 => "Possible hypertension stage 1",
            Condition::HypertensionStage2 => "Possible hypertension stage 2",
            Condition::ElevatedBloodPressure => "Possible elevated blood pressure",
            Condition::HighFever => "High fever",
            Condition::ModerateFever => "Moderate fever",
            Condition::Hypothermia => "Hypothermia",
            Condition::Tachypnea => "Possible tachypnea",
            Condition::Bradypnea => "Possible bradypnea",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A dated abnormal reading, rendered as
/// `<date> [<vital>] <condition> (<reading>)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Alert {
    date: NaiveDate,
    vital: VitalKind,
    condition: Condition,
    reading: String,
}

impl Alert {
    fn new(record: &Record, condition: Condition) -> Self {
        Self {
            date: record.date(),
            vital: record.kind(),
            condition,
            reading: record.vital().to_string(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn vital(&self) -> VitalKind {
        self.vital
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// The triggering value with its unit.
    pub fn reading(&self) -> &str {
        &self.reading
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} ({})",
            self.date,
            self.vital.label(),
            self.condition,
            self.reading
        )
    }
}

/// Evaluate one record against the patient's demographics.
///
/// Returns `None` when the reading is within the normal range. Total over all
/// ages: ages at or above [`ADULT_AGE_YEARS`](crate::constants::ADULT_AGE_YEARS)
/// never reach the pediatric tables.
pub fn evaluate(record: &Record, sex: Sex, age_years: u32) -> Option<Alert> {
    let condition = match *record.vital() {
        Vital::HeartRate { bpm } => heart_rate::classify(bpm, age_years),
        Vital::BloodPressure {
            systolic,
            diastolic,
        } => blood_pressure::classify(systolic, diastolic, sex, age_years),
        Vital::Temperature { celsius } => temperature::classify(celsius),
        Vital::RespiratoryRate { breaths_per_minute } => {
            respiratory_rate::classify(breaths_per_minute, age_years)
        }
    }?;

    Some(Alert::new(record, condition))
}

/// Inclusive normal range for a rate-based vital within one age band.
///
/// A band applies to ages strictly below `below_age`; `None` means no upper age
/// limit.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RateBand {
    pub below_age: Option<u32>,
    pub lower: i32,
    pub upper: i32,
}

/// Where a rate falls relative to its band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RateFinding {
    Above,
    Below,
}

/// Find the first band, in ascending age order, that covers `age_years` and
/// compare `value` with its bounds. Values on a bound are normal.
pub(crate) fn classify_rate(bands: &[RateBand], value: i32, age_years: u32) -> Option<RateFinding> {
    let band = bands
        .iter()
        .find(|band| match band.below_age {
            Some(limit) => age_years < limit,
            None => true,
        })?;

    if value > band.upper {
        Some(RateFinding::Above)
    } else if value < band.lower {
        Some(RateFinding::Below)
    } else {
        None
    }
}
