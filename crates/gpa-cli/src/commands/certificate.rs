use crate::cli::GlobalFlags;
use crate::cli::root_commands::CertificateArgs;
use crate::commands::shared::issue::issue_from_session;
use crate::commands::shared::sheet::{load_sheet, populate};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gpa certificate`.
pub fn handle(
    args: &CertificateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sheet = load_sheet(&args.sheet.sheet)?;
    populate(&mut ctx.session, &sheet)?;
    ctx.session.calculate()?;
    let response = issue_from_session(ctx, args.out.as_deref(), args.preview)?;
    output(&response, flags.format)
}
