//! Line parser for `gpa shell`.

use gpa_core::entities::{SubjectId, SubjectInput};
use gpa_core::enums::SubjectKind;

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Add(SubjectInput),
    Remove(SubjectId),
    List,
    Calc,
    /// No field shows the current student record.
    Student { field: Option<String>, value: String },
    /// `preview` writes the plain-text rendition instead of the PDF.
    Certificate { preview: bool },
    Clear,
    Reset,
    Help,
    Quit,
    Empty,
}

pub const HELP: &str = "\
commands:
  add <theory|practical> <credit-hours> <grade> <name...> [total=N] [passing=N]
  remove <id>
  list
  calc
  student [<field> <value...>]   fields: name roll_number batch semester exam_month year
  certificate [preview]          write the PDF (or a text preview)
  clear                          remove every subject (asks first)
  reset                          start over (asks first)
  help
  quit";

/// Parse one input line. Errors are user-facing messages.
pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(ShellCommand::Empty);
    };
    let rest: Vec<&str> = words.collect();

    match head.to_ascii_lowercase().as_str() {
        "add" => parse_add(&rest).map(ShellCommand::Add),
        "remove" | "rm" => match rest.as_slice() {
            [id] => Ok(ShellCommand::Remove(SubjectId::from(*id))),
            _ => Err(String::from("usage: remove <id>")),
        },
        "list" | "ls" => Ok(ShellCommand::List),
        "calc" | "calculate" => Ok(ShellCommand::Calc),
        "student" => Ok(match rest.split_first() {
            None => ShellCommand::Student {
                field: None,
                value: String::new(),
            },
            Some((field, value)) => ShellCommand::Student {
                field: Some((*field).to_string()),
                value: value.join(" "),
            },
        }),
        "certificate" | "cert" => match rest.as_slice() {
            [] => Ok(ShellCommand::Certificate { preview: false }),
            [mode] if mode.eq_ignore_ascii_case("preview") => {
                Ok(ShellCommand::Certificate { preview: true })
            }
            _ => Err(String::from("usage: certificate [preview]")),
        },
        "clear" => Ok(ShellCommand::Clear),
        "reset" => Ok(ShellCommand::Reset),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(format!("unknown command '{other}' (try 'help')")),
    }
}

fn parse_add(words: &[&str]) -> Result<SubjectInput, String> {
    const USAGE: &str =
        "usage: add <theory|practical> <credit-hours> <grade> <name...> [total=N] [passing=N]";

    let [kind, credit_hours, grade, rest @ ..] = words else {
        return Err(USAGE.to_string());
    };
    let kind = kind.parse::<SubjectKind>().map_err(|e| e.to_string())?;
    let credit_hours: f64 = credit_hours
        .parse()
        .map_err(|_| format!("credit hours '{credit_hours}' is not a number"))?;

    let mut input = SubjectInput::new("", kind, credit_hours, grade);
    let mut name = Vec::new();
    for word in rest {
        match word.split_once('=') {
            Some(("total", value)) => input.total_marks = Some(parse_marks("total", value)?),
            Some(("passing", value)) => input.passing_marks = Some(parse_marks("passing", value)?),
            _ => name.push(*word),
        }
    }
    if name.is_empty() {
        return Err(USAGE.to_string());
    }
    input.name = name.join(" ");
    Ok(input)
}

fn parse_marks(field: &str, value: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("{field} marks '{value}' is not a whole number"))
}
