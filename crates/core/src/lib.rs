//! # Clinic Core
//!
//! Core business logic for the clinic vital-signs report.
//!
//! This crate contains the clinical evaluation engine and everything around it:
//! - Threshold classifiers for heart rate, blood pressure, temperature and respiratory rate
//! - Patient registry with append-only records and alerts
//! - Stable ranking of patients by alert count
//! - Text and JSON report rendering
//! - Parsing of the line-oriented input format
//!
//! **No CLI concerns**: argument parsing, prompts and logging setup belong in `clinic-cli`.

pub mod clinic;
pub mod config;
pub mod constants;
pub mod entry;
pub mod error;
pub mod patient;
pub mod ranking;
pub mod record;
pub mod report;
pub mod vitals;

pub use clinic::{Clinic, IngestSummary};
pub use config::{ClinicConfig, ReferenceDate, RejectPolicy};
pub use entry::{Entry, EntryError, Registration, VitalsReading};
pub use error::{ClinicError, ClinicResult};
pub use patient::Patient;
pub use record::{Record, Vital, VitalKind};
pub use report::ReportFormat;
pub use vitals::{Alert, Condition};

// Re-export validated primitives so callers need only this crate.
pub use clinic_types::{NonEmptyText, Sex};
