//! Letter grades and subject kinds.
//!
//! `Grade` serializes with its printed letter (`"A+"`, `"C-"`), `SubjectKind`
//! with `snake_case` via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

/// Letter grade awarded for a subject, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Every grade in table order.
    pub const ALL: [Self; 8] = [
        Self::APlus,
        Self::A,
        Self::BPlus,
        Self::B,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::F,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::F => "F",
        }
    }

    /// Look up a grade by its printed letter. Surrounding whitespace is ignored;
    /// letters are case-sensitive.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|grade| grade.as_str() == raw)
    }

    /// Whether this grade fails the subject.
    #[must_use]
    pub const fn is_failing(self) -> bool {
        matches!(self, Self::F)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownGrade {
            grade: s.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// SubjectKind
// ---------------------------------------------------------------------------

/// Whether a subject entry is the theory or the practical part of a course.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    #[default]
    Theory,
    Practical,
}

impl SubjectKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theory => "theory",
            Self::Practical => "practical",
        }
    }

    /// Capitalized form printed in tables and on the certificate.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Theory => "Theory",
            Self::Practical => "Practical",
        }
    }

    /// Default `(total, passing)` marks for this kind.
    #[must_use]
    pub const fn default_marks(self) -> (u32, u32) {
        match self {
            Self::Theory => (100, 50),
            Self::Practical => (50, 25),
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SubjectKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "theory" => Ok(Self::Theory),
            "practical" => Ok(Self::Practical),
            _ => Err(CoreError::InvalidInput {
                field: "kind".to_string(),
                reason: format!("'{s}' is not one of: theory, practical"),
            }),
        }
    }
}
