//! Validated primitive types shared by the clinic crates.
//!
//! Values of these types are checked once at construction, so code that receives
//! them can rely on the invariant without re-validating.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Errors that can occur when parsing a [`Sex`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SexError {
    #[error("sex cannot be empty")]
    Empty,
    #[error("sex must be 'M', 'F', or 'X' (got '{0}')")]
    Unknown(char),
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// Returns `Err(TextError::Empty)` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Administrative sex as recorded at registration.
///
/// Only `M` selects the male pediatric blood pressure tables; `F` and `X`
/// share the other set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
    Unspecified,
}

impl Sex {
    /// Single-letter code used in input files and reports.
    pub fn code(self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
            Sex::Unspecified => 'X',
        }
    }

    /// Parse from a single-letter code.
    pub fn from_code(code: char) -> Result<Self, SexError> {
        match code {
            'M' => Ok(Sex::Male),
            'F' => Ok(Sex::Female),
            'X' => Ok(Sex::Unspecified),
            other => Err(SexError::Unknown(other)),
        }
    }
}

impl FromStr for Sex {
    type Err = SexError;

    /// Only the first character is significant, so `"Female"` parses as `F`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.trim().chars().next().ok_or(SexError::Empty)?;
        Sex::from_code(first)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl serde::Serialize for Sex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.code())
    }
}
