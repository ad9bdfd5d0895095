//! Constants used throughout the clinic core crate.
//!
//! File defaults and report layout strings live here so the CLI and the
//! renderer agree on them.

/// Input file used when the caller does not name one.
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// Output file used when the caller does not name one.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// First field of a patient registration line.
pub const PATIENT_ENTRY_TAG: &str = "PATIENT";

/// First field of a vital-signs line.
pub const RECORD_ENTRY_TAG: &str = "RECORD";

/// Ages below this use the pediatric threshold tables.
pub const ADULT_AGE_YEARS: u32 = 13;

/// Banner printed at the top of every text report.
pub const REPORT_HEADER: &str =
    "=========================\n      CLINIC REPORT      \n=========================";

/// Divider closing each patient section.
pub const PATIENT_DIVIDER: &str = "-------------------------";

/// Placeholder shown for patients without alerts.
pub const NO_ALERTS: &str = "No alerts.";
