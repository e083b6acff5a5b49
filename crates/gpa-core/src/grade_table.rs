//! Fixed letter-grade to grade-point mapping.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Grade;
use crate::errors::CoreError;

/// One row of the grade table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GradeTableEntry {
    pub grade: Grade,
    pub grade_point: f64,
}

/// Grade point awarded for `grade`.
#[must_use]
pub const fn grade_point(grade: Grade) -> f64 {
    match grade {
        Grade::APlus => 4.0,
        Grade::A => 3.5,
        Grade::BPlus => 3.0,
        Grade::B => 2.5,
        Grade::CPlus => 2.0,
        Grade::C => 1.5,
        Grade::CMinus => 1.0,
        Grade::F => 0.0,
    }
}

/// Grade point for a raw grade letter.
///
/// # Errors
///
/// Returns [`CoreError::UnknownGrade`] when `letter` is not in the table.
pub fn grade_point_for(letter: &str) -> Result<f64, CoreError> {
    letter.parse::<Grade>().map(grade_point)
}

/// The whole table, best grade first.
#[must_use]
pub fn entries() -> Vec<GradeTableEntry> {
    Grade::ALL
        .into_iter()
        .map(|grade| GradeTableEntry {
            grade,
            grade_point: grade_point(grade),
        })
        .collect()
}
