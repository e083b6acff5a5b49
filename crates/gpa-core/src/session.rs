//! Owned session state: the subject list, the cached GPA summary, and the
//! student record, plus the random source used for simulated marks.
//!
//! The summary is dropped by every subject-list mutation, so a summary that
//! is present always describes the current list.

use std::fmt;

use crate::calculator;
use crate::entities::{GpaSummary, ListedSubject, StudentInfo, Subject, SubjectId, SubjectInput};
use crate::errors::CoreError;
use crate::marks::{RandomSource, RngSource};
use crate::registry::SubjectRegistry;

pub struct Session {
    registry: SubjectRegistry,
    summary: Option<GpaSummary>,
    student: StudentInfo,
    random: Box<dyn RandomSource>,
}

impl Session {
    /// Fresh session drawing from `random`.
    #[must_use]
    pub fn init(random: Box<dyn RandomSource>) -> Self {
        Self {
            registry: SubjectRegistry::new(),
            summary: None,
            student: StudentInfo::default(),
            random,
        }
    }

    /// Fresh session with a reproducible random source when `seed` is given,
    /// an OS-seeded one otherwise.
    #[must_use]
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::init(Box::new(RngSource::seeded(seed))),
            None => Self::init(Box::new(RngSource::from_os_rng())),
        }
    }

    /// Forget subjects, summary, and student info. The random source and the
    /// retired subject ids are kept.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.summary = None;
        self.student = StudentInfo::default();
    }

    /// Add a subject.
    ///
    /// # Errors
    ///
    /// See [`SubjectRegistry::add`]. The summary survives a failed add.
    pub fn add_subject(&mut self, input: &SubjectInput) -> Result<Subject, CoreError> {
        let subject = self.registry.add(input, self.random.as_mut())?;
        self.summary = None;
        Ok(subject)
    }

    /// Remove a subject by id. Drops the summary only when something was
    /// removed; an unknown id leaves the session untouched.
    pub fn remove_subject(&mut self, id: &SubjectId) -> Option<Subject> {
        let removed = self.registry.remove(id);
        if removed.is_some() {
            self.summary = None;
        }
        removed
    }

    /// Empty the subject list. Callers gate this behind a confirmation.
    pub fn clear_subjects(&mut self) {
        self.registry.clear();
        self.summary = None;
    }

    /// Compute and cache the GPA summary.
    ///
    /// # Errors
    ///
    /// [`CoreError::EmptyRegistry`] when no subjects are entered.
    pub fn calculate(&mut self) -> Result<GpaSummary, CoreError> {
        let summary = calculator::calculate(self.registry.subjects())?;
        self.summary = Some(summary);
        Ok(summary)
    }

    #[must_use]
    pub fn list(&self) -> Vec<ListedSubject> {
        self.registry.list()
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        self.registry.subjects()
    }

    #[must_use]
    pub const fn registry(&self) -> &SubjectRegistry {
        &self.registry
    }

    /// The cached summary, if it is still valid.
    #[must_use]
    pub const fn summary(&self) -> Option<&GpaSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub const fn student(&self) -> &StudentInfo {
        &self.student
    }

    pub const fn student_mut(&mut self) -> &mut StudentInfo {
        &mut self.student
    }

    pub fn set_student(&mut self, student: StudentInfo) {
        self.student = student;
    }

    /// The session's random source, for anything else that needs draws.
    pub fn random(&mut self) -> &mut dyn RandomSource {
        self.random.as_mut()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("registry", &self.registry)
            .field("summary", &self.summary)
            .field("student", &self.student)
            .finish_non_exhaustive()
    }
}
