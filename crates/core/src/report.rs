//! Report rendering.
//!
//! Rendering is pure formatting over an already ranked list of patients.

use crate::constants::{NO_ALERTS, PATIENT_DIVIDER, REPORT_HEADER};
use crate::patient::Patient;
use crate::vitals::Alert;
use crate::{ClinicError, ClinicResult};
use chrono::NaiveDate;
use clinic_types::{NonEmptyText, Sex};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Output format of the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Render `ranked` in `format`, computing ages on `today`.
pub fn render(format: ReportFormat, ranked: &[&Patient], today: NaiveDate) -> ClinicResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(ranked, today)),
        ReportFormat::Json => render_json(ranked, today),
    }
}

/// Plain-text report: a banner followed by one section per patient.
pub fn render_text(ranked: &[&Patient], today: NaiveDate) -> String {
    let mut report = String::from(REPORT_HEADER);
    for patient in ranked {
        report.push_str("\n\n");
        render_patient(&mut report, patient, today);
    }
    report
}

fn render_patient(out: &mut String, patient: &Patient, today: NaiveDate) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Patient: {} ({})", patient.name_text(), patient.id());
    let _ = writeln!(out, "Sex: {}", patient.sex());
    let _ = writeln!(
        out,
        "Age: {} ({})",
        patient.age_on(today),
        patient.date_of_birth()
    );
    out.push('\n');
    out.push_str("-- Alerts --\n");

    if patient.alerts().is_empty() {
        let _ = writeln!(out, "{NO_ALERTS}");
    } else {
        for alert in patient.alerts() {
            let _ = writeln!(out, "{alert}");
        }
    }

    out.push('\n');
    out.push_str(PATIENT_DIVIDER);
}

#[derive(Serialize)]
struct JsonReport<'a> {
    patients: Vec<JsonPatient<'a>>,
}

#[derive(Serialize)]
struct JsonPatient<'a> {
    id: u64,
    name: &'a NonEmptyText,
    sex: Sex,
    age: u32,
    date_of_birth: NaiveDate,
    alerts: Vec<JsonAlert<'a>>,
}

#[derive(Serialize)]
struct JsonAlert<'a> {
    #[serde(flatten)]
    alert: &'a Alert,
    message: String,
}

/// JSON report with the same ordering as the text report.
pub fn render_json(ranked: &[&Patient], today: NaiveDate) -> ClinicResult<String> {
    let report = JsonReport {
        patients: ranked
            .iter()
            .map(|patient| JsonPatient {
                id: patient.id(),
                name: patient.name_text(),
                sex: patient.sex(),
                age: patient.age_on(today),
                date_of_birth: patient.date_of_birth(),
                alerts: patient
                    .alerts()
                    .iter()
                    .map(|alert| JsonAlert {
                        alert,
                        message: alert.to_string(),
                    })
                    .collect(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&report).map_err(ClinicError::Serialization)
}

/// Write a rendered report to `path`, replacing any existing file.
pub fn write_report(path: &Path, report: &str) -> ClinicResult<()> {
    std::fs::write(path, report).map_err(ClinicError::FileWrite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn today() -> NaiveDate {
        ymd(2025, 6, 1)
    }

    #[test]
    fn empty_report_is_just_the_banner() {
        assert_eq!(render_text(&[], today()), REPORT_HEADER);
    }

    #[test]
    fn renders_patient_without_alerts() {
        let patient =
            Patient::new(3, "Dan", Sex::Male, ymd(2000, 7, 4), today()).expect("valid patient");
        let report = render_text(&[&patient], today());
        let expected = format!(
            "{REPORT_HEADER}\n\nPatient: Dan (3)\nSex: M\nAge: 24 (2000-07-04)\n\n-- Alerts --\nNo alerts.\n\n{PATIENT_DIVIDER}"
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn renders_alerts_in_generation_order() {
        let mut patient =
            Patient::new(5, "Eve", Sex::Female, ymd(1990, 1, 1), today()).expect("valid patient");
        patient.add_record(Record::temperature(ymd(2025, 5, 1), 34.0), today());
        patient.add_record(Record::heart_rate(ymd(2025, 5, 2), 40), today());

        let report = render_text(&[&patient], today());
        let expected_alerts = "-- Alerts --\n\
            2025-05-01 [Temperature] Hypothermia (34.0 \u{00B0}C)\n\
            2025-05-02 [Heart Rate] Possible bradycardia (40 bpm)\n\n";
        assert!(report.contains(expected_alerts), "{report}");
        assert!(!report.contains(NO_ALERTS));
    }

    #[test]
    fn json_report_contains_structured_alerts() {
        let mut patient =
            Patient::new(6, "Fay", Sex::Unspecified, ymd(2020, 6, 2), today()).expect("valid");
        patient.add_record(Record::blood_pressure(ymd(2025, 5, 1), 120, 60), today());

        let json = render(ReportFormat::Json, &[&patient], today()).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        let first = &value["patients"][0];
        assert_eq!(first["id"], 6);
        assert_eq!(first["name"], "Fay");
        assert_eq!(first["sex"], "X");
        assert_eq!(first["age"], 4);
        assert_eq!(first["date_of_birth"], "2020-06-02");
        let alert = &first["alerts"][0];
        assert_eq!(alert["vital"], "blood_pressure");
        assert_eq!(alert["condition"], "hypertension");
        assert_eq!(alert["reading"], "120/60 mmHg");
        assert_eq!(
            alert["message"],
            "2025-05-01 [Blood Pressure] Possible hypertension (120/60 mmHg)"
        );
    }

    #[test]
    fn write_report_creates_file_and_fails_for_missing_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("output.txt");
        write_report(&path, REPORT_HEADER).expect("write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), REPORT_HEADER);

        let err = write_report(&dir.path().join("no/such/dir/out.txt"), "x").expect_err("bad dir");
        assert!(matches!(err, ClinicError::FileWrite(_)));
    }
}
