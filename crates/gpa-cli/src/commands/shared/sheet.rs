use std::fs;
use std::path::Path;

use anyhow::Context;
use gpa_core::Session;
use gpa_core::entities::SubjectSheet;

/// Read and parse a TOML subject sheet.
pub fn load_sheet(path: &Path) -> anyhow::Result<SubjectSheet> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read subject sheet {}", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse subject sheet {}", path.display()))
}

/// Enter every subject of `sheet` into `session`, in order, and take its
/// student table if present. Stops at the first rejected subject.
pub fn populate(session: &mut Session, sheet: &SubjectSheet) -> anyhow::Result<()> {
    for (index, input) in sheet.subjects.iter().enumerate() {
        session
            .add_subject(input)
            .with_context(|| format!("subject #{} ('{}') rejected", index + 1, input.name))?;
    }
    if let Some(student) = &sheet.student {
        session.set_student(student.clone());
    }
    Ok(())
}
