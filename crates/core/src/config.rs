//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! [`Clinic`](crate::Clinic). The core never reads environment variables while it
//! is ingesting entries, so a run behaves the same under any test harness.

use crate::{ClinicError, ClinicResult};
use chrono::{Local, NaiveDate};
use std::str::FromStr;

/// What to do with an entry the clinic cannot accept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RejectPolicy {
    /// Log a warning and continue with the next entry.
    #[default]
    Warn,
    /// Stop ingestion and return the error to the caller.
    Strict,
}

impl FromStr for RejectPolicy {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" => Ok(RejectPolicy::Warn),
            "strict" => Ok(RejectPolicy::Strict),
            other => Err(ClinicError::InvalidInput(format!(
                "reject policy must be 'warn' or 'strict' (got '{other}')"
            ))),
        }
    }
}

/// The calendar date ages are measured against.
///
/// `Today` re-reads the local clock on every call, so a long run that crosses
/// midnight uses the new date for later entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReferenceDate {
    #[default]
    Today,
    Fixed(NaiveDate),
}

impl ReferenceDate {
    pub fn today(&self) -> NaiveDate {
        match self {
            ReferenceDate::Today => Local::now().date_naive(),
            ReferenceDate::Fixed(date) => *date,
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct ClinicConfig {
    reject_policy: RejectPolicy,
    reference_date: ReferenceDate,
}

impl ClinicConfig {
    /// Create a new `ClinicConfig`.
    pub fn new(reject_policy: RejectPolicy, reference_date: ReferenceDate) -> Self {
        Self {
            reject_policy,
            reference_date,
        }
    }

    pub fn reject_policy(&self) -> RejectPolicy {
        self.reject_policy
    }

    pub fn reference_date(&self) -> ReferenceDate {
        self.reference_date
    }

    /// The date "now" for age calculations.
    pub fn today(&self) -> NaiveDate {
        self.reference_date.today()
    }
}

/// Parse the reject policy from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`RejectPolicy::Warn`].
pub fn reject_policy_from_env_value(value: Option<String>) -> ClinicResult<RejectPolicy> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<RejectPolicy>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Parse the reference date from an optional `YYYY-MM-DD` string value.
///
/// If `value` is `None` or empty/whitespace, returns [`ReferenceDate::Today`].
pub fn reference_date_from_env_value(value: Option<String>) -> ClinicResult<ReferenceDate> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(ReferenceDate::Today),
        Some(v) => NaiveDate::parse_from_str(&v, "%Y-%m-%d")
            .map(ReferenceDate::Fixed)
            .map_err(|e| {
                ClinicError::InvalidInput(format!("reference date '{v}' is not YYYY-MM-DD: {e}"))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_policy_defaults_to_warn() {
        assert_eq!(
            reject_policy_from_env_value(None).expect("default"),
            RejectPolicy::Warn
        );
        assert_eq!(
            reject_policy_from_env_value(Some("  ".into())).expect("blank"),
            RejectPolicy::Warn
        );
    }

    #[test]
    fn reject_policy_parses_case_insensitively() {
        assert_eq!(
            reject_policy_from_env_value(Some("STRICT".into())).expect("strict"),
            RejectPolicy::Strict
        );
    }

    #[test]
    fn reject_policy_rejects_unknown_value() {
        let err = reject_policy_from_env_value(Some("ignore".into())).expect_err("should reject");
        assert!(matches!(err, ClinicError::InvalidInput(msg) if msg.contains("ignore")));
    }

    #[test]
    fn reference_date_parses_fixed_date() {
        let date = reference_date_from_env_value(Some("2024-02-29".into())).expect("valid date");
        assert_eq!(
            date,
            ReferenceDate::Fixed(NaiveDate::from_ymd_opt(2024, 2, 29).expect("date"))
        );
        assert_eq!(
            reference_date_from_env_value(None).expect("default"),
            ReferenceDate::Today
        );
    }

    #[test]
    fn reference_date_rejects_garbage() {
        let err = reference_date_from_env_value(Some("29/02/2024".into())).expect_err("bad date");
        assert!(matches!(err, ClinicError::InvalidInput(msg) if msg.contains("YYYY-MM-DD")));
    }
}
