use anyhow::bail;
use gpa_core::Session;
use gpa_core::enums::{Grade, SubjectKind};
use gpa_core::marks::{MarksBand, obtained_range};
use gpa_core::responses::SimulateResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SimulateArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gpa simulate`.
pub fn handle(args: &SimulateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = simulate(args, &mut ctx.session)?;
    output(&response, flags.format)
}

fn simulate(args: &SimulateArgs, session: &mut Session) -> anyhow::Result<SimulateResponse> {
    let grade: Grade = args.grade.parse()?;
    let kind: SubjectKind = args.kind.parse()?;
    let (default_total, default_passing) = kind.default_marks();
    let total_marks = args.total.unwrap_or(default_total);
    let passing_marks = args.passing.unwrap_or(default_passing);

    if total_marks == 0 || passing_marks == 0 {
        bail!("total and passing marks must be at least 1");
    }
    if passing_marks > total_marks {
        bail!("passing marks ({passing_marks}) cannot exceed total marks ({total_marks})");
    }

    let range = obtained_range(grade, total_marks, passing_marks);
    let obtained_marks = range.pick(session.random());
    Ok(SimulateResponse {
        grade,
        kind,
        total_marks,
        passing_marks,
        band: MarksBand::for_grade(grade),
        range,
        obtained_marks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(grade: &str, kind: &str, total: Option<u32>, passing: Option<u32>) -> SimulateArgs {
        SimulateArgs {
            grade: grade.to_string(),
            kind: kind.to_string(),
            total,
            passing,
        }
    }

    #[test]
    fn practical_defaults_apply() {
        let mut session = Session::with_seed(Some(3));
        let response = simulate(&args("B+", "practical", None, None), &mut session).unwrap();
        assert_eq!((response.total_marks, response.passing_marks), (50, 25));
        assert_eq!((response.range.min, response.range.max), (36, 40));
        assert!((36..=40).contains(&response.obtained_marks));
    }

    #[test]
    fn failing_grade_stays_below_passing() {
        let mut session = Session::with_seed(Some(3));
        let response = simulate(&args("F", "theory", None, None), &mut session).unwrap();
        assert!(response.obtained_marks < 50);
    }

    #[test]
    fn unknown_grade_is_rejected() {
        let mut session = Session::with_seed(Some(3));
        let err = simulate(&args("E", "theory", None, None), &mut session).unwrap_err();
        assert!(err.to_string().contains("Unknown grade 'E'"));
    }

    #[test]
    fn passing_above_total_is_rejected() {
        let mut session = Session::with_seed(Some(3));
        let err = simulate(&args("A", "theory", Some(40), Some(50)), &mut session).unwrap_err();
        assert!(err.to_string().contains("cannot exceed"));
    }
}
