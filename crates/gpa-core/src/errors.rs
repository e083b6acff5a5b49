//! Error taxonomy shared by every gpacert crate.
//!
//! Validation failures never leave partial state behind: the registry, the
//! cached summary, and the student record are untouched when one of these is
//! returned. Rendering errors live in `gpa-certificate`; the binary converges
//! everything through `anyhow`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A subject field is missing or malformed.
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// The subject list is already full.
    #[error("Maximum {max} subjects allowed")]
    CapacityExceeded { max: usize },

    /// GPA requested with no subjects entered.
    #[error("Please add at least one subject before calculating GPA")]
    EmptyRegistry,

    /// Certificate requested before a GPA summary exists for the current list.
    #[error("Please calculate GPA first before generating the certificate")]
    NotReady,

    /// A student identity field is blank.
    #[error("Student information is incomplete: {field} is required")]
    IncompleteStudentInfo { field: String },

    /// Roll number contains something other than ASCII letters and digits.
    #[error(
        "Roll number '{value}' must contain letters and numbers only (e.g., K20SW075)"
    )]
    InvalidRollNumber { value: String },

    /// Year is not a 4-digit number in 1900..=2100.
    #[error("Year '{value}' is not a valid 4-digit year between 1900 and 2100")]
    InvalidYear { value: String },

    /// Grade letter outside the grade table.
    #[error("Unknown grade '{grade}'")]
    UnknownGrade { grade: String },
}

impl CoreError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
