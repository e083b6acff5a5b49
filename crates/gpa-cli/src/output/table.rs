#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    render_table(headers, rows, None, options)
}

/// Like [`render_entity_table`], closed by a divider and a totals row.
#[must_use]
pub fn render_table_with_footer(
    headers: &[&str],
    rows: &[Vec<String>],
    footer: &[String],
    options: TableOptions,
) -> String {
    render_table(headers, rows, Some(footer), options)
}

fn render_table(
    headers: &[&str],
    rows: &[Vec<String>],
    footer: Option<&[String]>,
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .map(Vec::as_slice)
                .chain(footer)
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(4)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            format_cell(&text, *width, false, false)
        })
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(strip_ansi(&header_line).chars().count());

    let mut lines = Vec::with_capacity(4 + rows.len());
    lines.push(header_line);
    lines.push(divider.clone());
    lines.extend(rows.iter().map(|row| render_row(row, &widths, options)));
    if let Some(footer) = footer {
        lines.push(divider);
        lines.push(render_row(footer, &widths, options));
    }
    lines.join("\n")
}

fn render_row(row: &[String], widths: &[usize], options: TableOptions) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let value = row.get(index).cloned().unwrap_or_default();
            let truncated = truncate_text(&value, *width);
            let numeric = looks_numeric(&truncated);
            let colored = if options.color {
                colorize_cell(&truncated)
            } else {
                truncated
            };
            format_cell(&colored, *width, numeric, options.color)
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].len().max(4);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] = widths[idx].saturating_sub(1);
        total = widths.iter().sum::<usize>() + separators;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool, has_ansi: bool) -> String {
    let plain_len = if has_ansi {
        strip_ansi(value).chars().count()
    } else {
        value.chars().count()
    };
    let pad = width.saturating_sub(plain_len);
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Green for top grades and passing checks, red for failures.
fn colorize_cell(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    let code = if matches!(lower.as_str(), "a+" | "a" | "true" | "pass" | "valid") {
        Some("32")
    } else if matches!(lower.as_str(), "c-" | "warning") {
        Some("33")
    } else if matches!(lower.as_str(), "f" | "false" | "fail" | "invalid") {
        Some("31")
    } else {
        None
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn numbers_align_right() {
        let rows = vec![
            vec!["Maths".to_string(), "3".to_string()],
            vec!["Physics Lab".to_string(), "12.50".to_string()],
        ];
        let table = render_entity_table(&["SUBJECT", "QP"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "Maths            3");
        assert_eq!(lines[3], "Physics Lab  12.50");
    }

    #[test]
    fn footer_follows_a_divider() {
        let rows = vec![vec!["Maths".to_string(), "3".to_string()]];
        let footer = vec!["Total".to_string(), "3.0".to_string()];
        let table = render_table_with_footer(&["SUBJECT", "CH"], &rows, &footer, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[3].chars().all(|c| c == '-'));
        assert!(lines[4].starts_with("Total"));
        assert!(lines[4].ends_with("3.0"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "Introduction to Information and Communication Technologies".to_string(),
            "A".to_string(),
        ]];
        let table = render_entity_table(
            &["SUBJECT", "GRADE"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn failing_grade_is_red() {
        assert_eq!(colorize_cell("F"), "\u{1b}[31mF\u{1b}[0m");
        assert_eq!(colorize_cell("B+"), "B+");
        assert_eq!(strip_ansi(&colorize_cell("A+")), "A+");
    }

    #[test]
    fn grade_letters_are_not_numeric() {
        assert!(!looks_numeric("-"));
        assert!(!looks_numeric("C-"));
        assert!(looks_numeric("3.14"));
    }
}
