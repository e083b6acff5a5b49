//! Serde roundtrip and JsonSchema validation tests for entity types.

use gpa_core::entities::*;
use gpa_core::enums::{Grade, SubjectKind};
use gpa_core::marks::{MarksBand, ObtainedRange};
use gpa_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_subject() -> Subject {
    Subject {
        id: SubjectId::from_counter(3),
        name: "Digital Logic Design".into(),
        kind: SubjectKind::Practical,
        total_marks: 50,
        passing_marks: 25,
        obtained_marks: 41,
        credit_hours: 1.0,
        grade: Grade::A,
        grade_point: 3.5,
        quality_points: 3.5,
    }
}

roundtrip_and_validate!(subject_roundtrip, Subject, sample_subject());

roundtrip_and_validate!(
    listed_subject_roundtrip,
    ListedSubject,
    ListedSubject {
        sequence_code: "1".into(),
        subject: sample_subject(),
    }
);

roundtrip_and_validate!(
    subject_input_roundtrip,
    SubjectInput,
    SubjectInput::new("Calculus", SubjectKind::Theory, 3.0, "B+").with_marks(100, 40)
);

roundtrip_and_validate!(
    student_roundtrip,
    StudentInfo,
    StudentInfo {
        name: "Ayesha Khan".into(),
        roll_number: "K20SW075".into(),
        batch: "2020".into(),
        semester: "8th Semester".into(),
        exam_month: "March".into(),
        year: "2024".into(),
    }
);

roundtrip_and_validate!(
    summary_roundtrip,
    GpaSummary,
    GpaSummary {
        total_credit_hours: 7.0,
        total_quality_points: 22.0,
        gpa: 22.0 / 7.0,
    }
);

roundtrip_and_validate!(
    sheet_roundtrip,
    SubjectSheet,
    SubjectSheet {
        student: None,
        subjects: vec![SubjectInput::new("Calculus", SubjectKind::Theory, 3.0, "A")],
    }
);

roundtrip_and_validate!(
    simulate_response_roundtrip,
    SimulateResponse,
    SimulateResponse {
        grade: Grade::C,
        kind: SubjectKind::Theory,
        total_marks: 100,
        passing_marks: 50,
        band: MarksBand::for_grade(Grade::C),
        range: ObtainedRange { min: 55, max: 59 },
        obtained_marks: 57,
    }
);

roundtrip_and_validate!(
    grade_band_row_roundtrip,
    GradeBandRow,
    GradeBandRow::for_grade(Grade::BPlus)
);

#[test]
fn listed_subject_flattens_subject_fields() {
    let listed = ListedSubject {
        sequence_code: "2".into(),
        subject: sample_subject(),
    };
    let json = serde_json::to_value(&listed).unwrap();
    assert_eq!(json["sequence_code"], "2");
    assert_eq!(json["name"], "Digital Logic Design");
    assert_eq!(json["kind"], "practical");
    assert_eq!(json["grade"], "A");
    assert_eq!(json["id"], "sub-0003");
}

#[test]
fn grade_band_row_reports_percentages() {
    let row = GradeBandRow::for_grade(Grade::F);
    assert_eq!((row.min_percent, row.max_percent), (0, 49));
}
