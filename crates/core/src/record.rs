//! Vital-sign measurements.
//!
//! A [`Record`] is one measurement of one vital on one date. A single vitals
//! entry in the input fans out into four records, one per [`VitalKind`], in the
//! fixed order heart rate, blood pressure, temperature, respiratory rate.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// The four vitals the clinic evaluates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    HeartRate,
    BloodPressure,
    Temperature,
    RespiratoryRate,
}

impl VitalKind {
    /// Label shown in brackets in alert text.
    pub fn label(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "Heart Rate",
            VitalKind::BloodPressure => "Blood Pressure",
            VitalKind::Temperature => "Temperature",
            VitalKind::RespiratoryRate => "Respiratory Rate",
        }
    }
}

/// Vital-specific payload of a [`Record`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Vital {
    /// Beats per minute.
    HeartRate { bpm: i32 },
    /// Systolic over diastolic, in mmHg.
    BloodPressure { systolic: i32, diastolic: i32 },
    /// Body temperature in degrees Celsius.
    Temperature { celsius: f64 },
    /// Breaths per minute.
    RespiratoryRate { breaths_per_minute: i32 },
}

impl Vital {
    pub fn kind(&self) -> VitalKind {
        match self {
            Vital::HeartRate { .. } => VitalKind::HeartRate,
            Vital::BloodPressure { .. } => VitalKind::BloodPressure,
            Vital::Temperature { .. } => VitalKind::Temperature,
            Vital::RespiratoryRate { .. } => VitalKind::RespiratoryRate,
        }
    }
}

/// Renders the raw value with its unit, e.g. `150/95 mmHg` or `38.0 °C`.
impl fmt::Display for Vital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vital::HeartRate { bpm } => write!(f, "{bpm} bpm"),
            Vital::BloodPressure {
                systolic,
                diastolic,
            } => write!(f, "{systolic}/{diastolic} mmHg"),
            Vital::Temperature { celsius } => {
                // Whole degrees keep one decimal place: 38 prints as "38.0".
                if celsius.fract() == 0.0 {
                    write!(f, "{celsius:.1} \u{00B0}C")
                } else {
                    write!(f, "{celsius} \u{00B0}C")
                }
            }
            Vital::RespiratoryRate { breaths_per_minute } => {
                write!(f, "{breaths_per_minute} breaths/min")
            }
        }
    }
}

/// One dated measurement. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    date: NaiveDate,
    vital: Vital,
}

impl Record {
    pub fn new(date: NaiveDate, vital: Vital) -> Self {
        Self { date, vital }
    }

    pub fn heart_rate(date: NaiveDate, bpm: i32) -> Self {
        Self::new(date, Vital::HeartRate { bpm })
    }

    pub fn blood_pressure(date: NaiveDate, systolic: i32, diastolic: i32) -> Self {
        Self::new(
            date,
            Vital::BloodPressure {
                systolic,
                diastolic,
            },
        )
    }

    pub fn temperature(date: NaiveDate, celsius: f64) -> Self {
        Self::new(date, Vital::Temperature { celsius })
    }

    pub fn respiratory_rate(date: NaiveDate, breaths_per_minute: i32) -> Self {
        Self::new(date, Vital::RespiratoryRate { breaths_per_minute })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn vital(&self) -> &Vital {
        &self.vital
    }

    pub fn kind(&self) -> VitalKind {
        self.vital.kind()
    }
}
