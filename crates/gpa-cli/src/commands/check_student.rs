use anyhow::bail;
use gpa_core::entities::StudentInfo;
use gpa_core::responses::StudentCheckResponse;
use gpa_core::validation::validate_student;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SheetArgs;
use crate::commands::shared::sheet::load_sheet;
use crate::output::output;

/// Handle `gpa check-student`. Prints the verdict and fails when invalid.
pub fn handle(args: &SheetArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sheet = load_sheet(&args.sheet)?;
    let response = check(&sheet.student.unwrap_or_default());
    output(&response, flags.format)?;
    if let Some(error) = response.error {
        bail!("student information rejected: {error}");
    }
    Ok(())
}

fn check(student: &StudentInfo) -> StudentCheckResponse {
    match validate_student(student) {
        Ok(_) => StudentCheckResponse {
            valid: true,
            error: None,
        },
        Err(error) => StudentCheckResponse {
            valid: false,
            error: Some(error.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::check;
    use gpa_core::entities::StudentInfo;

    fn student() -> StudentInfo {
        StudentInfo {
            name: "Ayesha Khan".into(),
            roll_number: "K21SW001".into(),
            batch: "Software 2021".into(),
            semester: "Third".into(),
            exam_month: "March".into(),
            year: "2024".into(),
        }
    }

    #[test]
    fn complete_student_is_valid() {
        let response = check(&student());
        assert!(response.valid);
        assert!(response.error.is_none());
    }

    #[test]
    fn missing_student_reports_first_blank_field() {
        let response = check(&StudentInfo::default());
        assert!(!response.valid);
        assert_eq!(
            response.error.as_deref(),
            Some("Student information is incomplete: name is required")
        );
    }

    #[test]
    fn bad_year_is_reported() {
        let mut info = student();
        info.year = "20245".into();
        let response = check(&info);
        assert!(response.error.is_some_and(|e| e.contains("'20245'")));
    }
}
