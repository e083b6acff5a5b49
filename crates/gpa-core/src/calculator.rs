//! GPA aggregation over a subject list.

use tracing::debug;

use crate::entities::{GpaSummary, Subject};
use crate::errors::CoreError;

/// Sum credit hours and quality points and divide.
///
/// # Errors
///
/// [`CoreError::EmptyRegistry`] for an empty list. A list whose credit hours
/// sum to zero cannot come out of the registry; if one is passed anyway it
/// fails with [`CoreError::InvalidInput`] on `credit_hours` rather than
/// producing a non-finite GPA.
pub fn calculate(subjects: &[Subject]) -> Result<GpaSummary, CoreError> {
    if subjects.is_empty() {
        return Err(CoreError::EmptyRegistry);
    }

    let total_credit_hours: f64 = subjects.iter().map(|s| s.credit_hours).sum();
    let total_quality_points: f64 = subjects.iter().map(|s| s.quality_points).sum();

    if total_credit_hours.is_nan() || total_credit_hours <= 0.0 {
        return Err(CoreError::invalid(
            "credit_hours",
            format!("total credit hours must be greater than 0, got {total_credit_hours}"),
        ));
    }

    let summary = GpaSummary {
        total_credit_hours,
        total_quality_points,
        gpa: total_quality_points / total_credit_hours,
    };
    debug!(
        subjects = subjects.len(),
        credit_hours = summary.total_credit_hours,
        quality_points = summary.total_quality_points,
        gpa = %summary.gpa_display(),
        "gpa calculated"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SubjectId;
    use crate::enums::{Grade, SubjectKind};

    fn subject(credit_hours: f64, quality_points: f64) -> Subject {
        Subject {
            id: SubjectId::from_counter(1),
            name: "Maths".into(),
            kind: SubjectKind::Theory,
            total_marks: 100,
            passing_marks: 50,
            obtained_marks: 90,
            credit_hours,
            grade: Grade::APlus,
            grade_point: 4.0,
            quality_points,
        }
    }

    #[test]
    fn gpa_is_weighted_by_credit_hours() {
        let summary = calculate(&[subject(3.0, 12.0), subject(4.0, 10.0)]).unwrap();
        assert!((summary.total_credit_hours - 7.0).abs() < f64::EPSILON);
        assert!((summary.total_quality_points - 22.0).abs() < f64::EPSILON);
        assert!((summary.gpa - 22.0 / 7.0).abs() < f64::EPSILON);
        assert_eq!(summary.gpa_display(), "3.14");
        assert_eq!(summary.credit_hours_display(), "7.0");
        assert_eq!(summary.quality_points_display(), "22.00");
    }

    #[test]
    fn empty_list_fails() {
        assert_eq!(calculate(&[]).unwrap_err(), CoreError::EmptyRegistry);
    }

    #[test]
    fn zero_credit_hours_fail_fast() {
        let err = calculate(&[subject(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { field, .. } if field == "credit_hours"));
    }
}
