use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Grades => commands::grades::handle(flags),
        Commands::Simulate(args) => commands::simulate::handle(args, ctx, flags),
        Commands::Calculate(args) => commands::calculate::handle(args, ctx, flags),
        Commands::Certificate(args) => commands::certificate::handle(args, ctx, flags),
        Commands::CheckStudent(args) => commands::check_student::handle(args, flags),
        Commands::Shell => commands::shell::handle(ctx, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gpa_config::GpaConfig;

    use super::dispatch;
    use crate::cli::Cli;
    use crate::context::AppContext;

    fn run(args: &[&str]) -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(args).expect("cli should parse");
        let config = GpaConfig::default();
        let flags = cli.global_flags(&config);
        let mut ctx = AppContext::init(config, flags.seed);
        dispatch(&cli.command, &mut ctx, &flags)
    }

    #[test]
    fn stateless_commands_are_routed() {
        run(&["gpa", "grades"]).unwrap();
        run(&["gpa", "schema", "subject-sheet"]).unwrap();
    }

    #[test]
    fn check_student_reaches_its_handler() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = run(&["gpa", "check-student", missing.to_str().unwrap()]).unwrap_err();
        assert!(format!("{err:#}").contains("missing.toml"));
    }
}
