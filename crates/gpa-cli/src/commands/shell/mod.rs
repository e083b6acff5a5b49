//! `gpa shell`: one session kept alive across typed commands.

mod parse;

use std::io::{self, BufRead, Write};

use anyhow::bail;
use tracing::debug;

use crate::cli::GlobalFlags;
use crate::commands::shared::issue::issue_from_session;
use crate::commands::shared::listing::render_listing;
use crate::context::AppContext;
use crate::output::table_options;

use parse::{HELP, ShellCommand, parse_line};

/// Handle `gpa shell` on stdin/stdout.
pub fn handle(ctx: &mut AppContext, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(ctx, &mut stdin.lock(), &mut stdout.lock())
}

/// Read commands until `quit` or end of input. A failed command prints its
/// error and the loop carries on.
pub fn run<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "gpa shell. Type 'help' for commands.")?;
    loop {
        write!(out, "gpa> ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            break;
        };

        let command = match parse_line(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };
        debug!(?command, "shell command");
        if let Err(error) = execute(command, ctx, input, out) {
            writeln!(out, "error: {error:#}")?;
        }
    }
    Ok(())
}

fn execute<R: BufRead, W: Write>(
    command: ShellCommand,
    ctx: &mut AppContext,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let session = &mut ctx.session;
    match command {
        ShellCommand::Add(subject) => {
            let added = session.add_subject(&subject)?;
            writeln!(
                out,
                "added {}: {} ({}), obtained {}/{}",
                added.id,
                added.name,
                added.kind.label(),
                added.obtained_marks,
                added.total_marks
            )?;
        }
        ShellCommand::Remove(id) => match session.remove_subject(&id) {
            Some(removed) => writeln!(out, "removed {} ({})", removed.id, removed.name)?,
            None => writeln!(out, "no subject with id '{id}', nothing removed")?,
        },
        ShellCommand::List => {
            writeln!(
                out,
                "{}",
                render_listing(&session.list(), session.summary(), table_options())
            )?;
        }
        ShellCommand::Calc => {
            let summary = session.calculate()?;
            writeln!(
                out,
                "{}",
                render_listing(&session.list(), Some(&summary), table_options())
            )?;
            writeln!(out, "GPA: {}", summary.gpa_display())?;
        }
        ShellCommand::Student { field: None, .. } => {
            for (field, value) in session.student().fields() {
                let value = if value.is_empty() { "-" } else { value };
                writeln!(out, "{field:<12} {value}")?;
            }
        }
        ShellCommand::Student {
            field: Some(field),
            value,
        } => {
            if !session.student_mut().set_field(&field, &value) {
                bail!("unknown student field '{field}'");
            }
            writeln!(out, "{field} set")?;
        }
        ShellCommand::Certificate { preview } => {
            let issued = issue_from_session(ctx, None, preview)?;
            writeln!(
                out,
                "certificate written to {} (book no {}, certificate no {})",
                issued.path.display(),
                issued.book_no,
                issued.certificate_no
            )?;
        }
        ShellCommand::Clear => {
            let count = session.subjects().len();
            if confirm(&format!("Remove all {count} subjects?"), input, out)? {
                session.clear_subjects();
                writeln!(out, "subject list cleared")?;
            } else {
                writeln!(out, "cancelled")?;
            }
        }
        ShellCommand::Reset => {
            if confirm("Start over? Subjects and student info will be lost.", input, out)? {
                session.reset();
                writeln!(out, "session reset")?;
            } else {
                writeln!(out, "cancelled")?;
            }
        }
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Empty | ShellCommand::Quit => {}
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask a yes/no question. Only `y` or `yes` confirms.
fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> io::Result<bool> {
    write!(out, "{prompt} [y/N] ")?;
    out.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use gpa_config::GpaConfig;

    use super::run;
    use crate::context::AppContext;

    fn context(dir: &Path) -> AppContext {
        let mut config = GpaConfig::default();
        config.certificate.output_dir = dir.display().to_string();
        config.certificate.logo_candidates = vec![];
        config.certificate.signature_candidates = vec![];
        AppContext::init(config, Some(21))
    }

    fn session_output(ctx: &mut AppContext, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run(ctx, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_then_calc_prints_gpa() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());
        let out = session_output(
            &mut ctx,
            "add theory 3 A+ Maths\nadd theory 3 B+ Physics\ncalc\nquit\n",
        );
        assert!(out.contains("added sub-0001: Maths (Theory)"));
        assert!(out.contains("GPA: 3.50"));
        assert_eq!(ctx.session.subjects().len(), 2);
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());
        let out = session_output(&mut ctx, "calc\nbogus\nadd theory 3 A Maths\n");
        assert!(out.contains("error: Please add at least one subject before calculating GPA"));
        assert!(out.contains("unknown command 'bogus'"));
        assert_eq!(ctx.session.subjects().len(), 1);
    }

    #[test]
    fn removing_unknown_id_keeps_the_result() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());
        let out = session_output(&mut ctx, "add theory 3 A Maths\ncalc\nremove sub-9999\n");
        assert!(out.contains("no subject with id 'sub-9999', nothing removed"));
        assert!(!out.contains("error:"));
        assert_eq!(ctx.session.subjects().len(), 1);
        assert!(ctx.session.summary().is_some());
    }

    #[test]
    fn clear_needs_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());
        let out = session_output(&mut ctx, "add theory 3 A Maths\nclear\nn\n");
        assert!(out.contains("cancelled"));
        assert_eq!(ctx.session.subjects().len(), 1);

        let out = session_output(&mut ctx, "clear\ny\nlist\n");
        assert!(out.contains("subject list cleared"));
        assert!(out.contains("(no subjects)"));
        assert!(ctx.session.subjects().is_empty());
    }

    #[test]
    fn reset_forgets_student() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());
        session_output(&mut ctx, "student name Ayesha Khan\nreset\nyes\n");
        assert!(ctx.session.student().name.is_empty());
    }

    #[test]
    fn certificate_after_student_and_calc() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());
        let script = "\
add theory 3 A Maths
calc
certificate
student name Ayesha Khan
student roll K21SW001
student batch Software 2021
student semester Third
student month March
student year 2024
certificate
certificate preview
";
        let out = session_output(&mut ctx, script);
        assert!(out.contains("error: Student information is incomplete: name is required"));
        assert!(out.contains("certificate written to"));
        for extension in ["pdf", "txt"] {
            assert!(
                dir.path()
                    .join(format!("MUET_SZAB_GPA_Certificate_K21SW001_2024.{extension}"))
                    .exists()
            );
        }
    }

    #[test]
    fn unknown_student_field_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());
        let out = session_output(&mut ctx, "student age 20\nstudent\n");
        assert!(out.contains("error: unknown student field 'age'"));
        assert!(out.contains("roll_number  -"));
    }
}
