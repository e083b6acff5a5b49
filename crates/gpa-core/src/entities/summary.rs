use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::format::fixed;

/// Aggregate over the current subject list. Full precision is kept; rounding
/// happens only in the `*_display` helpers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GpaSummary {
    pub total_credit_hours: f64,
    pub total_quality_points: f64,
    pub gpa: f64,
}

impl GpaSummary {
    /// GPA at two decimals.
    #[must_use]
    pub fn gpa_display(&self) -> String {
        fixed(self.gpa, 2)
    }

    /// Total credit hours at one decimal.
    #[must_use]
    pub fn credit_hours_display(&self) -> String {
        fixed(self.total_credit_hours, 1)
    }

    /// Total quality points at two decimals.
    #[must_use]
    pub fn quality_points_display(&self) -> String {
        fixed(self.total_quality_points, 2)
    }
}
