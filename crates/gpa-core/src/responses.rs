//! Response types printed by `gpa` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{GpaSummary, ListedSubject};
use crate::enums::{Grade, SubjectKind};
use crate::grade_table::grade_point;
use crate::marks::{MarksBand, ObtainedRange};

/// One line of `gpa grades`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GradeBandRow {
    pub grade: Grade,
    pub grade_point: f64,
    pub min_percent: u32,
    pub max_percent: u32,
}

impl GradeBandRow {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn for_grade(grade: Grade) -> Self {
        let band = MarksBand::for_grade(grade);
        Self {
            grade,
            grade_point: grade_point(grade),
            min_percent: (band.min_ratio * 100.0).round() as u32,
            max_percent: (band.max_ratio * 100.0).round() as u32,
        }
    }
}

/// Response from `gpa simulate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SimulateResponse {
    pub grade: Grade,
    pub kind: SubjectKind,
    pub total_marks: u32,
    pub passing_marks: u32,
    pub band: MarksBand,
    pub range: ObtainedRange,
    pub obtained_marks: u32,
}

/// Response from `gpa calculate` and the shell's `calc`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GpaResponse {
    pub subjects: Vec<ListedSubject>,
    pub summary: GpaSummary,
    /// GPA rounded to two decimals.
    pub gpa: String,
    pub total_credit_hours: String,
    pub total_quality_points: String,
}

impl GpaResponse {
    #[must_use]
    pub fn new(subjects: Vec<ListedSubject>, summary: GpaSummary) -> Self {
        Self {
            subjects,
            gpa: summary.gpa_display(),
            total_credit_hours: summary.credit_hours_display(),
            total_quality_points: summary.quality_points_display(),
            summary,
        }
    }
}

/// Response from `gpa check-student`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudentCheckResponse {
    pub valid: bool,
    pub error: Option<String>,
}
