use gpa_core::enums::Grade;
use gpa_core::responses::GradeBandRow;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `gpa grades`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&grade_rows(), flags.format)
}

fn grade_rows() -> Vec<GradeBandRow> {
    Grade::ALL.into_iter().map(GradeBandRow::for_grade).collect()
}

#[cfg(test)]
mod tests {
    use super::grade_rows;
    use gpa_core::enums::Grade;

    #[test]
    fn rows_follow_table_order() {
        let rows = grade_rows();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].grade, Grade::APlus);
        assert_eq!(rows[0].min_percent, 90);
        assert_eq!(rows[7].grade, Grade::F);
        assert!(rows.windows(2).all(|w| w[0].grade_point > w[1].grade_point));
    }
}
