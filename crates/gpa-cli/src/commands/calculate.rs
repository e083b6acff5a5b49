use gpa_core::responses::GpaResponse;
use tracing::info;

use crate::cli::root_commands::SheetArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::listing::render_listing;
use crate::commands::shared::sheet::{load_sheet, populate};
use crate::context::AppContext;
use crate::output::{output, table_options};

/// Handle `gpa calculate`.
pub fn handle(args: &SheetArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sheet = load_sheet(&args.sheet)?;
    populate(&mut ctx.session, &sheet)?;
    let summary = ctx.session.calculate()?;
    info!(
        subjects = ctx.session.subjects().len(),
        gpa = %summary.gpa_display(),
        "gpa calculated"
    );

    if flags.format == OutputFormat::Table {
        println!(
            "{}",
            render_listing(&ctx.session.list(), Some(&summary), table_options())
        );
        return Ok(());
    }
    output(&GpaResponse::new(ctx.session.list(), summary), flags.format)
}
