use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Grade, SubjectKind};

/// Opaque per-session token used to remove a subject. Never displayed on the
/// certificate and never handed out twice within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    #[must_use]
    pub fn from_counter(counter: u64) -> Self {
        Self(format!("sub-{counter:04}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubjectId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

/// A course entry held by the registry.
///
/// `grade_point`, `quality_points`, and `obtained_marks` are derived when the
/// subject is added. The display code is not stored here; see
/// [`ListedSubject`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub kind: SubjectKind,
    pub total_marks: u32,
    pub passing_marks: u32,
    pub obtained_marks: u32,
    pub credit_hours: f64,
    pub grade: Grade,
    pub grade_point: f64,
    pub quality_points: f64,
}

/// A subject as listed, with its 1-based position as the code.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ListedSubject {
    pub sequence_code: String,
    #[serde(flatten)]
    pub subject: Subject,
}

/// Raw subject entry as typed by a user or read from a subject sheet.
///
/// Everything is optional or defaulted so that validation, not
/// deserialization, decides what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SubjectInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: SubjectKind,
    /// Overrides the kind's default total marks.
    #[serde(default)]
    pub total_marks: Option<u32>,
    /// Overrides the kind's default passing marks.
    #[serde(default)]
    pub passing_marks: Option<u32>,
    #[serde(default)]
    pub credit_hours: Option<f64>,
    #[serde(default)]
    pub grade: Option<String>,
}

impl SubjectInput {
    #[must_use]
    pub fn new(name: &str, kind: SubjectKind, credit_hours: f64, grade: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            total_marks: None,
            passing_marks: None,
            credit_hours: Some(credit_hours),
            grade: Some(grade.to_string()),
        }
    }

    #[must_use]
    pub const fn with_marks(mut self, total_marks: u32, passing_marks: u32) -> Self {
        self.total_marks = Some(total_marks);
        self.passing_marks = Some(passing_marks);
        self
    }
}

/// A subject entry that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubject {
    pub name: String,
    pub kind: SubjectKind,
    pub total_marks: u32,
    pub passing_marks: u32,
    pub credit_hours: f64,
    pub grade: Grade,
}
