//! Entry checks run before the registry is mutated or a certificate is issued.
//!
//! Both checks are pure: they read their input and either return a cleaned
//! value or the first failing precondition.

use crate::entities::{StudentInfo, SubjectInput, ValidSubject};
use crate::enums::Grade;
use crate::errors::CoreError;

/// Validate a subject entry and resolve kind-based mark defaults.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] naming the first bad field: an empty
/// name, missing or non-positive credit hours, a missing or unrecognized
/// grade, or marks where passing is zero or exceeds the total.
pub fn validate_subject(input: &SubjectInput) -> Result<ValidSubject, CoreError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(CoreError::invalid("name", "please enter subject name"));
    }

    let credit_hours = match input.credit_hours {
        Some(hours) if hours.is_finite() && hours > 0.0 => hours,
        Some(hours) => {
            return Err(CoreError::invalid(
                "credit_hours",
                format!("must be greater than 0, got {hours}"),
            ));
        }
        None => return Err(CoreError::invalid("credit_hours", "please select credit hours")),
    };

    let grade = match input.grade.as_deref().map(str::trim) {
        None | Some("") => return Err(CoreError::invalid("grade", "please select a grade")),
        Some(letter) => Grade::parse(letter).ok_or_else(|| {
            CoreError::invalid("grade", format!("'{letter}' is not a recognized grade"))
        })?,
    };

    let (default_total, default_passing) = input.kind.default_marks();
    let total_marks = input.total_marks.unwrap_or(default_total);
    let passing_marks = input.passing_marks.unwrap_or(default_passing);
    if total_marks == 0 {
        return Err(CoreError::invalid("total_marks", "must be at least 1"));
    }
    if passing_marks == 0 {
        return Err(CoreError::invalid("passing_marks", "must be at least 1"));
    }
    if passing_marks > total_marks {
        return Err(CoreError::invalid(
            "passing_marks",
            format!("{passing_marks} exceeds total marks {total_marks}"),
        ));
    }

    Ok(ValidSubject {
        name: name.to_string(),
        kind: input.kind,
        total_marks,
        passing_marks,
        credit_hours,
        grade,
    })
}

/// Whether `year` is exactly four ASCII digits within 1900..=2100.
#[must_use]
pub fn is_valid_year(year: &str) -> bool {
    year.len() == 4
        && year.bytes().all(|b| b.is_ascii_digit())
        && year
            .parse::<u16>()
            .is_ok_and(|y| (1900..=2100).contains(&y))
}

/// Whether `roll` is a non-empty run of ASCII letters and digits.
#[must_use]
pub fn is_valid_roll_number(roll: &str) -> bool {
    !roll.is_empty() && roll.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Validate the student identity fields, after trimming.
///
/// # Errors
///
/// - [`CoreError::IncompleteStudentInfo`] for the first blank field
/// - [`CoreError::InvalidRollNumber`] for a roll number with other characters
/// - [`CoreError::InvalidYear`] for a year outside `1900..=2100`
pub fn validate_student(info: &StudentInfo) -> Result<StudentInfo, CoreError> {
    let info = info.trimmed();

    if let Some((field, _)) = info.fields().into_iter().find(|(_, value)| value.is_empty()) {
        return Err(CoreError::IncompleteStudentInfo {
            field: field.to_string(),
        });
    }

    if !is_valid_roll_number(&info.roll_number) {
        return Err(CoreError::InvalidRollNumber {
            value: info.roll_number,
        });
    }

    if !is_valid_year(&info.year) {
        return Err(CoreError::InvalidYear { value: info.year });
    }

    Ok(info)
}
