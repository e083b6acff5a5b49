use clap::{Parser, ValueEnum};

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `gpa` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gpa",
    version,
    about = "gpacert - GPA calculator and grade certificate generator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Seed for simulated marks and certificate serials (defaults to `general.seed`)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers, falling
    /// back to configured defaults for what was not given on the command line.
    #[must_use]
    pub fn global_flags(&self, config: &gpa_config::GpaConfig) -> GlobalFlags {
        let format = self
            .format
            .or_else(|| OutputFormat::from_str(&config.general.default_format, true).ok())
            .unwrap_or(OutputFormat::Json);
        GlobalFlags {
            format,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            seed: self.seed.or(config.general.seed),
        }
    }
}
