//! Turns the subject list into the certificate's table rows.
//!
//! Subjects are grouped by name in first-seen order. A group prints its
//! Theory entry first, carrying the subject name, and its Practical entry on
//! a continuation row underneath. A Practical entry without a Theory sibling
//! prints as a full row. One summary row closes the table.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use gpa_core::entities::{GpaSummary, StudentInfo, Subject};
use gpa_core::enums::SubjectKind;
use gpa_core::errors::CoreError;
use gpa_core::format::fixed;
use gpa_core::validation::validate_student;

/// Column labels, left to right.
pub const TABLE_HEADER: [&str; COLUMN_COUNT] = [
    "CODE NO",
    "SUBJECT",
    "TYPE",
    "TOTAL MARKS",
    "PASSING MARKS",
    "OBTAINED",
    "CREDIT HOURS",
    "GRADE",
    "QUALITY POINTS",
];

pub const COLUMN_COUNT: usize = 9;

pub const COL_CREDIT_HOURS: usize = 6;
pub const COL_QUALITY_POINTS: usize = 8;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RowKind {
    /// Carries the subject name. `row_span` is 2 when a Practical
    /// continuation row follows.
    Subject { row_span: u8 },
    /// Practical row under its Theory sibling; code and name cells are blank.
    Continuation,
    /// Totals row; only the credit-hour and quality-point cells are filled.
    Summary,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CertificateRow {
    #[serde(flatten)]
    pub kind: RowKind,
    pub cells: [String; COLUMN_COUNT],
}

impl CertificateRow {
    fn for_subject(kind: RowKind, name: &str, subject: &Subject) -> Self {
        let name = match kind {
            RowKind::Continuation => String::new(),
            _ => name.to_string(),
        };
        Self {
            kind,
            cells: [
                String::new(),
                name,
                subject.kind.label().to_string(),
                subject.total_marks.to_string(),
                subject.passing_marks.to_string(),
                subject.obtained_marks.to_string(),
                subject.credit_hours.to_string(),
                subject.grade.as_str().to_string(),
                fixed(subject.quality_points, 2),
            ],
        }
    }

    fn summary(summary: &GpaSummary) -> Self {
        let mut cells: [String; COLUMN_COUNT] = Default::default();
        cells[COL_CREDIT_HOURS] = summary.credit_hours_display();
        cells[COL_QUALITY_POINTS] = summary.quality_points_display();
        Self {
            kind: RowKind::Summary,
            cells,
        }
    }
}

/// Everything the layout needs: validated student identity, the summary,
/// and the rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CertificatePayload {
    pub student: StudentInfo,
    pub summary: GpaSummary,
    pub rows: Vec<CertificateRow>,
}

impl CertificatePayload {
    /// Rows other than the closing summary row.
    #[must_use]
    pub fn subject_rows(&self) -> &[CertificateRow] {
        match self.rows.split_last() {
            Some((last, rest)) if last.kind == RowKind::Summary => rest,
            _ => &self.rows,
        }
    }
}

struct Group<'a> {
    name: &'a str,
    theory: Option<&'a Subject>,
    practical: Option<&'a Subject>,
}

/// Build the certificate payload.
///
/// Student info is validated first; an incomplete form is reported before a
/// missing calculation.
///
/// # Errors
///
/// The student-info variants of [`CoreError`] when the identity is invalid;
/// [`CoreError::NotReady`] when there are no subjects or no summary.
pub fn compose(
    subjects: &[Subject],
    summary: Option<&GpaSummary>,
    student: &StudentInfo,
) -> Result<CertificatePayload, CoreError> {
    let student = validate_student(student)?;
    let summary = match summary {
        Some(summary) if !subjects.is_empty() => *summary,
        _ => return Err(CoreError::NotReady),
    };

    let mut rows = Vec::with_capacity(subjects.len() + 1);
    for group in group_by_name(subjects) {
        match (group.theory, group.practical) {
            (Some(theory), practical) => {
                let row_span = if practical.is_some() { 2 } else { 1 };
                rows.push(CertificateRow::for_subject(
                    RowKind::Subject { row_span },
                    group.name,
                    theory,
                ));
                if let Some(practical) = practical {
                    rows.push(CertificateRow::for_subject(
                        RowKind::Continuation,
                        group.name,
                        practical,
                    ));
                }
            }
            (None, Some(practical)) => rows.push(CertificateRow::for_subject(
                RowKind::Subject { row_span: 1 },
                group.name,
                practical,
            )),
            (None, None) => {}
        }
    }
    rows.push(CertificateRow::summary(&summary));

    debug!(rows = rows.len(), roll = %student.roll_number, "certificate composed");
    Ok(CertificatePayload {
        student,
        summary,
        rows,
    })
}

fn group_by_name(subjects: &[Subject]) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    for subject in subjects {
        let index = match groups.iter().position(|g| g.name == subject.name) {
            Some(index) => index,
            None => {
                groups.push(Group {
                    name: &subject.name,
                    theory: None,
                    practical: None,
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[index];
        let slot = match subject.kind {
            SubjectKind::Theory => &mut group.theory,
            SubjectKind::Practical => &mut group.practical,
        };
        if let Some(previous) = slot.replace(subject) {
            warn!(
                name = %subject.name,
                kind = %subject.kind,
                replaced = %previous.id,
                by = %subject.id,
                "duplicate subject entry, the later one is printed"
            );
        }
    }
    groups
}
