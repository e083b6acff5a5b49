use gpa_core::entities::{GpaSummary, ListedSubject};
use gpa_core::format::fixed;

use crate::output::table::{TableOptions, render_entity_table, render_table_with_footer};

const HEADERS: [&str; 10] = [
    "CODE", "ID", "SUBJECT", "TYPE", "TOTAL", "PASSING", "OBTAINED", "CH", "GRADE", "QP",
];

/// The subject list as a table. With a summary, a totals row closes it.
#[must_use]
pub fn render_listing(
    subjects: &[ListedSubject],
    summary: Option<&GpaSummary>,
    options: TableOptions,
) -> String {
    if subjects.is_empty() {
        return String::from("(no subjects)");
    }

    let rows = subjects
        .iter()
        .map(|listed| {
            let subject = &listed.subject;
            vec![
                listed.sequence_code.clone(),
                subject.id.to_string(),
                subject.name.clone(),
                subject.kind.label().to_string(),
                subject.total_marks.to_string(),
                subject.passing_marks.to_string(),
                subject.obtained_marks.to_string(),
                subject.credit_hours.to_string(),
                subject.grade.to_string(),
                fixed(subject.quality_points, 2),
            ]
        })
        .collect::<Vec<_>>();

    match summary {
        Some(summary) => {
            let mut footer = vec![String::new(); HEADERS.len()];
            footer[2] = format!("GPA {}", summary.gpa_display());
            footer[7] = summary.credit_hours_display();
            footer[9] = summary.quality_points_display();
            render_table_with_footer(&HEADERS, &rows, &footer, options)
        }
        None => render_entity_table(&HEADERS, &rows, options),
    }
}
