use crate::entry::EntryError;

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid format ({reason}): {line}")]
    MalformedEntry {
        line: String,
        #[source]
        reason: EntryError,
    },
    #[error("unrecognised entry type: {line}")]
    UnrecognisedEntry { line: String },
    #[error("duplicate patient ID {id}")]
    DuplicatePatient { id: u64 },
    #[error("unknown patient ID {id}")]
    UnknownPatient { id: u64 },
    #[error("invalid demographics for patient {id}: {reason}")]
    InvalidDemographics { id: u64, reason: String },

    #[error("failed to read input file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write report file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize report: {0}")]
    Serialization(serde_json::Error),
}

impl ClinicError {
    /// The raw input line, for errors raised while parsing one.
    pub fn entry_line(&self) -> Option<&str> {
        match self {
            ClinicError::MalformedEntry { line, .. } | ClinicError::UnrecognisedEntry { line } => {
                Some(line)
            }
            _ => None,
        }
    }

    /// Whether ingestion may skip this error and carry on with the next entry.
    ///
    /// I/O and serialisation failures are always fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            ClinicError::FileRead(_) | ClinicError::FileWrite(_) | ClinicError::Serialization(_)
        )
    }
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
