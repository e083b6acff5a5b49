use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{StudentInfo, SubjectInput};

/// A subject sheet: the subjects to enter, in order, and optionally the
/// student they belong to.
///
/// ```toml
/// [student]
/// name = "Ayesha Khan"
/// roll_number = "K20SW075"
///
/// [[subject]]
/// name = "Mathematics"
/// kind = "theory"
/// credit_hours = 3
/// grade = "A"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SubjectSheet {
    #[serde(default)]
    pub student: Option<StudentInfo>,
    #[serde(default, rename = "subject")]
    pub subjects: Vec<SubjectInput>,
}
