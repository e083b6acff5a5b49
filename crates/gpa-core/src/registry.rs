//! Ordered, capacity-bounded subject list.

use tracing::debug;

use crate::entities::{ListedSubject, Subject, SubjectId, SubjectInput};
use crate::errors::CoreError;
use crate::grade_table::grade_point;
use crate::marks::{RandomSource, simulate_obtained};
use crate::validation::validate_subject;

/// Most subjects a single certificate can carry.
pub const MAX_SUBJECTS: usize = 11;

/// In-memory subject list. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct SubjectRegistry {
    subjects: Vec<Subject>,
    issued: u64,
}

impl SubjectRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subjects: Vec::new(),
            issued: 0,
        }
    }

    /// Validate `input`, derive its computed fields, and append it.
    ///
    /// # Errors
    ///
    /// [`CoreError::CapacityExceeded`] when the list already holds
    /// [`MAX_SUBJECTS`]; [`CoreError::InvalidInput`] when validation fails.
    /// Nothing is appended on error.
    pub fn add(
        &mut self,
        input: &SubjectInput,
        random: &mut dyn RandomSource,
    ) -> Result<Subject, CoreError> {
        if self.subjects.len() >= MAX_SUBJECTS {
            return Err(CoreError::CapacityExceeded { max: MAX_SUBJECTS });
        }

        let valid = validate_subject(input)?;
        let grade_point = grade_point(valid.grade);
        let obtained_marks =
            simulate_obtained(valid.grade, valid.total_marks, valid.passing_marks, random);

        self.issued += 1;
        let subject = Subject {
            id: SubjectId::from_counter(self.issued),
            name: valid.name,
            kind: valid.kind,
            total_marks: valid.total_marks,
            passing_marks: valid.passing_marks,
            obtained_marks,
            credit_hours: valid.credit_hours,
            grade: valid.grade,
            grade_point,
            quality_points: grade_point * valid.credit_hours,
        };

        debug!(
            id = %subject.id,
            name = %subject.name,
            kind = %subject.kind,
            grade = %subject.grade,
            obtained = subject.obtained_marks,
            "subject added"
        );
        self.subjects.push(subject.clone());
        Ok(subject)
    }

    /// Remove the subject with `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: &SubjectId) -> Option<Subject> {
        let index = self.subjects.iter().position(|subject| &subject.id == id)?;
        let removed = self.subjects.remove(index);
        debug!(id = %removed.id, name = %removed.name, "subject removed");
        Some(removed)
    }

    /// Drop every subject. Ids already handed out stay retired.
    pub fn clear(&mut self) {
        debug!(count = self.subjects.len(), "subject list cleared");
        self.subjects.clear();
    }

    /// Subjects in order, each coded by its current 1-based position.
    #[must_use]
    pub fn list(&self) -> Vec<ListedSubject> {
        self.subjects
            .iter()
            .enumerate()
            .map(|(index, subject)| ListedSubject {
                sequence_code: (index + 1).to_string(),
                subject: subject.clone(),
            })
            .collect()
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.subjects.len() >= MAX_SUBJECTS
    }
}
