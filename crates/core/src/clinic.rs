//! The clinic registry and ingestion loop.
//!
//! [`Clinic`] owns every registered [`Patient`], routes entries to them in arrival
//! order, and produces the ranked report. Processing is single-pass and
//! append-only: patients are never removed and their records never change.

use crate::config::{ClinicConfig, RejectPolicy};
use crate::entry::{Entry, EntryError, Registration, VitalsReading};
use crate::patient::Patient;
use crate::ranking::rank_by_alerts;
use crate::report::{self, ReportFormat};
use crate::{ClinicError, ClinicResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Counts from one ingestion pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Entries that changed the registry.
    pub accepted: usize,
    /// Entries rejected with a warning.
    pub skipped: usize,
    /// Blank lines.
    pub blank: usize,
}

#[derive(Debug)]
pub struct Clinic {
    cfg: ClinicConfig,
    // Registration order; ranking ties fall back to it.
    patients: Vec<Patient>,
    index: HashMap<u64, usize>,
}

impl Clinic {
    pub fn new(cfg: ClinicConfig) -> Self {
        Self {
            cfg,
            patients: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a clinic from an input file.
    ///
    /// # Errors
    ///
    /// - `ClinicError::FileRead` if the file cannot be opened or read.
    /// - Any entry error when the reject policy is `Strict`.
    pub fn from_file(cfg: ClinicConfig, path: &Path) -> ClinicResult<Self> {
        let file = File::open(path).map_err(ClinicError::FileRead)?;
        let mut clinic = Self::new(cfg);
        let summary = clinic.ingest_reader(BufReader::new(file))?;

        tracing::info!(
            "loaded {} patients from {} ({} entries accepted, {} skipped)",
            clinic.len(),
            path.display(),
            summary.accepted,
            summary.skipped
        );
        Ok(clinic)
    }

    pub fn config(&self) -> &ClinicConfig {
        &self.cfg
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn patient(&self, id: u64) -> Option<&Patient> {
        self.index.get(&id).map(|&i| &self.patients[i])
    }

    /// Patients in registration order.
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter()
    }

    /// Read entries line by line from `reader`.
    ///
    /// Lines are decoded as UTF-8 with invalid bytes replaced by U+FFFD, so a
    /// badly encoded line is handled like any other entry instead of ending the
    /// pass. Only a failing read is fatal.
    pub fn ingest_reader<R: BufRead>(&mut self, mut reader: R) -> ClinicResult<IngestSummary> {
        let mut summary = IngestSummary::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(ClinicError::FileRead)?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);

            let outcome = match Entry::parse(line) {
                Ok(None) => {
                    summary.blank += 1;
                    continue;
                }
                Ok(Some(entry)) => self.apply(entry),
                Err(EntryError::UnrecognisedType(_)) => Err(ClinicError::UnrecognisedEntry {
                    line: line.to_string(),
                }),
                Err(reason) => Err(ClinicError::MalformedEntry {
                    line: line.to_string(),
                    reason,
                }),
            };

            self.settle(outcome, line_number, Some(line), &mut summary)?;
        }

        Ok(summary)
    }

    pub fn ingest_str(&mut self, input: &str) -> ClinicResult<IngestSummary> {
        self.ingest_reader(input.as_bytes())
    }

    /// Ingest already parsed entries under the configured reject policy.
    pub fn ingest<I>(&mut self, entries: I) -> ClinicResult<IngestSummary>
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut summary = IngestSummary::default();
        for (i, entry) in entries.into_iter().enumerate() {
            let outcome = self.apply(entry);
            self.settle(outcome, i + 1, None, &mut summary)?;
        }
        Ok(summary)
    }

    /// Apply one entry. Rejections are returned as errors regardless of policy.
    pub fn apply(&mut self, entry: Entry) -> ClinicResult<()> {
        match entry {
            Entry::RegisterPatient(registration) => self.register_patient(registration),
            Entry::RecordVitals(reading) => self.record_vitals(&reading).map(|_| ()),
        }
    }

    /// Register a new patient. The first registration of an id wins.
    pub fn register_patient(&mut self, registration: Registration) -> ClinicResult<()> {
        let Registration {
            id,
            name,
            sex,
            date_of_birth,
        } = registration;

        if self.index.contains_key(&id) {
            return Err(ClinicError::DuplicatePatient { id });
        }

        let patient = Patient::new(id, &name, sex, date_of_birth, self.cfg.today())?;
        tracing::debug!("registered patient {}", id);

        self.index.insert(id, self.patients.len());
        self.patients.push(patient);
        Ok(())
    }

    /// Add the four records of a reading to an existing patient.
    ///
    /// Returns how many alerts the reading raised.
    pub fn record_vitals(&mut self, reading: &VitalsReading) -> ClinicResult<usize> {
        let slot = *self
            .index
            .get(&reading.id)
            .ok_or(ClinicError::UnknownPatient { id: reading.id })?;
        let patient = &mut self.patients[slot];

        let mut raised = 0;
        for record in reading.records() {
            // Age is re-read for every record.
            let today = self.cfg.today();
            if let Some(alert) = patient.add_record(record, today) {
                tracing::debug!("patient {}: {}", reading.id, alert);
                raised += 1;
            }
        }
        Ok(raised)
    }

    fn settle(
        &self,
        outcome: ClinicResult<()>,
        line_number: usize,
        line: Option<&str>,
        summary: &mut IngestSummary,
    ) -> ClinicResult<()> {
        match outcome {
            Ok(()) => {
                summary.accepted += 1;
                Ok(())
            }
            Err(err) if err.is_recoverable() && self.cfg.reject_policy() == RejectPolicy::Warn => {
                tracing::warn!("{}", skip_message(&err, line_number, line));
                summary.skipped += 1;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Patients ordered by alert count, most first; ties keep registration order.
    pub fn ranked(&self) -> Vec<&Patient> {
        rank_by_alerts(&self.patients)
    }

    /// The ranked plain-text report.
    pub fn generate_report(&self) -> String {
        report::render_text(&self.ranked(), self.cfg.today())
    }

    pub fn generate_report_as(&self, format: ReportFormat) -> ClinicResult<String> {
        report::render(format, &self.ranked(), self.cfg.today())
    }
}

/// Warning text for a skipped entry. Names the reason and, when the error does
/// not already carry it, the offending line.
fn skip_message(err: &ClinicError, line_number: usize, line: Option<&str>) -> String {
    match (err.entry_line(), line) {
        (None, Some(line)) => format!("{err}, skipping entry {line_number}: {line}"),
        _ => format!("{err}, skipping entry {line_number}"),
    }
}
