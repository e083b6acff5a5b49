use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the grade table with each grade's marks band.
    Grades,
    /// Simulate obtained marks for one grade.
    Simulate(SimulateArgs),
    /// Load a subject sheet and calculate the GPA.
    Calculate(SheetArgs),
    /// Load a subject sheet, calculate, and write the grade certificate.
    Certificate(CertificateArgs),
    /// Validate the student table of a subject sheet.
    CheckStudent(SheetArgs),
    /// Interactive session: add subjects, calculate, issue a certificate.
    Shell,
    /// Print the JSON schema of an input or output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SimulateArgs {
    /// Letter grade (A+, A, B+, B, C+, C, C-, F).
    #[arg(short, long, allow_hyphen_values = true)]
    pub grade: String,

    /// Subject kind; picks the default total/passing marks.
    #[arg(short, long, default_value = "theory")]
    pub kind: String,

    /// Total marks (defaults from kind).
    #[arg(long)]
    pub total: Option<u32>,

    /// Passing marks (defaults from kind).
    #[arg(long)]
    pub passing: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct SheetArgs {
    /// Subject sheet: TOML with `[[subject]]` tables and an optional `[student]`.
    pub sheet: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct CertificateArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,

    /// Output directory (defaults to `certificate.output_dir`).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Write a plain-text preview instead of the PDF.
    #[arg(long)]
    pub preview: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    SubjectSheet,
    Subject,
    Summary,
    Row,
    Payload,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to describe.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
