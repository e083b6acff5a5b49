use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identity printed on the certificate. Validated only when a certificate is
/// requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudentInfo {
    #[serde(default)]
    pub name: String,
    /// Roll / I.D. number, letters and digits only.
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub batch: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub exam_month: String,
    #[serde(default)]
    pub year: String,
}

impl StudentInfo {
    /// Field names in form order, paired with their current values.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("name", self.name.as_str()),
            ("roll_number", self.roll_number.as_str()),
            ("batch", self.batch.as_str()),
            ("semester", self.semester.as_str()),
            ("exam_month", self.exam_month.as_str()),
            ("year", self.year.as_str()),
        ]
    }

    /// Set one field by name. Returns `false` for an unknown field name.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "roll_number" | "roll" => &mut self.roll_number,
            "batch" => &mut self.batch,
            "semester" => &mut self.semester,
            "exam_month" | "month" => &mut self.exam_month,
            "year" => &mut self.year,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    /// Copy with every field trimmed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            roll_number: self.roll_number.trim().to_string(),
            batch: self.batch.trim().to_string(),
            semester: self.semester.trim().to_string(),
            exam_month: self.exam_month.trim().to_string(),
            year: self.year.trim().to_string(),
        }
    }
}
