//! Drawing surface the certificate layout renders onto.
//!
//! Coordinates are millimetres on an A4 portrait page, origin top-left, `y`
//! growing downwards. Text `y` is the baseline.

use std::path::{Path, PathBuf};

use crate::assets::Asset;
use crate::error::CertificateError;

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
/// A table row ending below this starts a new page.
pub const PAGE_BOTTOM: f64 = 270.0;
/// Where the table continues on a fresh page.
pub const PAGE_TOP: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub bold: bool,
    pub align: Align,
    pub color: Color,
    /// Wrap width in millimetres.
    pub max_width: Option<f64>,
}

impl TextStyle {
    #[must_use]
    pub const fn normal(size: f64) -> Self {
        Self {
            size,
            bold: false,
            align: Align::Left,
            color: Color::Black,
            max_width: None,
        }
    }

    #[must_use]
    pub const fn bold(size: f64) -> Self {
        Self {
            bold: true,
            ..Self::normal(size)
        }
    }

    #[must_use]
    pub const fn centered(self) -> Self {
        Self {
            align: Align::Center,
            ..self
        }
    }

    #[must_use]
    pub const fn colored(self, color: Color) -> Self {
        Self { color, ..self }
    }

    #[must_use]
    pub const fn wrapped(self, max_width: f64) -> Self {
        Self {
            max_width: Some(max_width),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectStyle {
    Fill(Color),
    Stroke,
}

/// A grid table: a filled header row then bordered body rows.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec<'a> {
    pub header: &'a [&'a str],
    pub rows: &'a [Vec<String>],
    pub column_widths: &'a [f64],
    pub x: f64,
    pub row_height: f64,
    pub font_size: f64,
}

pub trait DocumentCanvas {
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle);

    fn draw_rect(&mut self, rect: Rect, style: RectStyle);

    fn draw_image(&mut self, asset: &Asset, rect: Rect);

    /// Continue on a fresh page.
    fn add_page(&mut self);

    /// File extension of the saved artifact, without the dot.
    fn extension(&self) -> &'static str;

    /// Write the document to `path`.
    ///
    /// # Errors
    ///
    /// [`CertificateError::Io`] when the file cannot be written, or
    /// [`CertificateError::Pdf`] when a PDF backend cannot serialize.
    fn save(&mut self, path: &Path) -> Result<(), CertificateError>;

    /// Draw `table` starting at `start_y` and return the `y` where content
    /// below the table may start. Breaks to a new page whenever a row ends
    /// past [`PAGE_BOTTOM`].
    fn draw_table(&mut self, table: &TableSpec<'_>, start_y: f64) -> f64 {
        let mut y = start_y;
        let header_style = TextStyle::bold(table.font_size)
            .centered()
            .colored(Color::White);
        let mut x = table.x;
        for (label, width) in table.header.iter().zip(table.column_widths) {
            self.draw_rect(
                Rect::new(x, y, *width, table.row_height),
                RectStyle::Fill(Color::Black),
            );
            self.draw_text(label, x + width / 2.0, y + table.row_height / 2.0, header_style);
            x += width;
        }
        y += table.row_height;

        let body_style = TextStyle::normal(table.font_size);
        for row in table.rows {
            let mut x = table.x;
            for (cell, width) in row.iter().zip(table.column_widths) {
                self.draw_rect(Rect::new(x, y, *width, table.row_height), RectStyle::Stroke);
                if !cell.is_empty() {
                    self.draw_text(cell, x + 2.0, y + table.row_height / 2.0 + 2.0, body_style);
                }
                x += width;
            }
            y += table.row_height;

            if y > PAGE_BOTTOM {
                self.add_page();
                y = PAGE_TOP;
            }
        }

        y + 10.0
    }
}

/// One drawing call as recorded by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
    },
    Rect {
        rect: Rect,
        style: RectStyle,
    },
    Image {
        name: String,
        rect: Rect,
    },
    NewPage,
}

/// Keeps every call in order instead of drawing. Used to inspect a layout.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<Command>,
    pub saved_to: Option<PathBuf>,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every `draw_text` call, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        1 + self
            .commands
            .iter()
            .filter(|c| matches!(c, Command::NewPage))
            .count()
    }

    #[must_use]
    pub fn images(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Image { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DocumentCanvas for RecordingCanvas {
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        self.commands.push(Command::Text {
            text: text.to_string(),
            x,
            y,
            style,
        });
    }

    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        self.commands.push(Command::Rect { rect, style });
    }

    fn draw_image(&mut self, asset: &Asset, rect: Rect) {
        self.commands.push(Command::Image {
            name: asset.name.clone(),
            rect,
        });
    }

    fn add_page(&mut self) {
        self.commands.push(Command::NewPage);
    }

    fn extension(&self) -> &'static str {
        "rec"
    }

    fn save(&mut self, path: &Path) -> Result<(), CertificateError> {
        self.saved_to = Some(path.to_path_buf());
        Ok(())
    }
}
