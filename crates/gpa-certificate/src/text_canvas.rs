//! Plain-text preview backend.
//!
//! Text is placed on a character grid (one column per
//! [`MM_PER_COLUMN`] millimetres, one line per [`MM_PER_LINE`]) and written
//! out page by page. Rectangles are not drawn; images become `[name]`
//! placeholders.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::assets::Asset;
use crate::canvas::{Align, DocumentCanvas, PAGE_WIDTH, Rect, RectStyle, TextStyle};
use crate::error::CertificateError;

pub const MM_PER_COLUMN: f64 = 2.0;
pub const MM_PER_LINE: f64 = 3.5;

/// Page separator in the saved file.
pub const PAGE_BREAK: &str = "\u{c}\n";

#[derive(Debug, Clone)]
struct Placed {
    line: usize,
    column: usize,
    text: String,
}

#[derive(Debug, Default)]
pub struct TextCanvas {
    pages: Vec<Vec<Placed>>,
}

impl TextCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
        }
    }

    fn place(&mut self, text: String, column: usize, y: f64) {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let line = to_cells(y, MM_PER_LINE);
        if let Some(page) = self.pages.last_mut() {
            page.push(Placed { line, column, text });
        }
    }

    /// The document as it will be saved.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, page) in self.pages.iter().enumerate() {
            if index > 0 {
                out.push_str(PAGE_BREAK);
            }
            out.push_str(&render_page(page));
        }
        out
    }
}

impl DocumentCanvas for TextCanvas {
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        let lines = match style.max_width {
            Some(width) => wrap(text, to_cells(width, MM_PER_COLUMN).max(1)),
            None => vec![text.to_string()],
        };
        let mut y = y;
        for line in lines {
            let width = line.chars().count();
            let column = match style.align {
                Align::Left => to_cells(x, MM_PER_COLUMN),
                Align::Center => to_cells(x, MM_PER_COLUMN).saturating_sub(width / 2),
            };
            self.place(line, column, y);
            y += MM_PER_LINE;
        }
    }

    fn draw_rect(&mut self, _rect: Rect, _style: RectStyle) {}

    fn draw_image(&mut self, asset: &Asset, rect: Rect) {
        let label = format!("[{}]", asset.name);
        let center = to_cells(rect.x + rect.width / 2.0, MM_PER_COLUMN);
        let column = center.saturating_sub(label.chars().count() / 2);
        self.place(label, column, rect.y + rect.height / 2.0);
    }

    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn save(&mut self, path: &Path) -> Result<(), CertificateError> {
        let rendered = self.render();
        fs::write(path, &rendered).map_err(|source| CertificateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), pages = self.pages.len(), "text certificate saved");
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cells(mm: f64, per_cell: f64) -> usize {
    if mm.is_finite() && mm > 0.0 {
        (mm / per_cell).round() as usize
    } else {
        0
    }
}

fn render_page(page: &[Placed]) -> String {
    let mut items: Vec<&Placed> = page.iter().collect();
    items.sort_by_key(|p| (p.line, p.column));

    let page_columns = to_cells(PAGE_WIDTH, MM_PER_COLUMN);
    let mut out = String::new();
    let mut current_line = 0;
    let mut buffer = String::new();
    for item in items {
        while current_line < item.line {
            out.push_str(buffer.trim_end());
            out.push('\n');
            buffer.clear();
            current_line += 1;
        }
        let used = buffer.chars().count();
        if used > 0 && used >= item.column {
            buffer.push(' ');
        } else {
            let pad = item.column.min(page_columns).saturating_sub(used);
            buffer.push_str(&" ".repeat(pad));
        }
        buffer.push_str(&item.text);
    }
    out.push_str(buffer.trim_end());
    out.push('\n');
    out
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
