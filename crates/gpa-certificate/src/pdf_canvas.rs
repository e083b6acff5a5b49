//! PDF canvas backend built on `lopdf`.
//!
//! Pages are A4 with the standard Helvetica fonts, so no font files are
//! embedded. Millimetre coordinates from the layout are flipped into PDF
//! user space (points, origin bottom-left) as they are drawn. JPEG images
//! are embedded as-is; everything else is re-encoded as RGB with an alpha
//! soft mask when the source has transparency.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use tracing::{debug, warn};

use crate::assets::Asset;
use crate::canvas::{Align, Color, DocumentCanvas, PAGE_HEIGHT, PAGE_WIDTH, Rect, RectStyle, TextStyle};
use crate::error::CertificateError;

/// Points per millimetre.
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Line advance for wrapped text, as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f64 = 1.15;

/// Border width of stroked rectangles, in millimetres.
const STROKE_WIDTH_MM: f64 = 0.2;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

/// An image XObject waiting to be written.
#[derive(Debug, Clone)]
struct EmbeddedImage {
    resource: String,
    image: Stream,
    alpha: Option<Stream>,
}

#[derive(Debug)]
pub struct PdfCanvas {
    pages: Vec<Vec<Operation>>,
    images: Vec<EmbeddedImage>,
    by_source: HashMap<PathBuf, String>,
}

impl Default for PdfCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            images: Vec::new(),
            by_source: HashMap::new(),
        }
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn ops(&mut self) -> &mut Vec<Operation> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn show_line(&mut self, text: &str, x: f64, baseline: f64, style: TextStyle) {
        let font = if style.bold { FONT_BOLD } else { FONT_REGULAR };
        let (r, g, b) = rgb(style.color);
        let ops = self.ops();
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), real(style.size)],
        ));
        ops.push(Operation::new("rg", vec![real(r), real(g), real(b)]));
        ops.push(Operation::new(
            "Td",
            vec![real(x * PT_PER_MM), real((PAGE_HEIGHT - baseline) * PT_PER_MM)],
        ));
        ops.push(Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]));
        ops.push(Operation::new("ET", vec![]));
    }

    /// Resource name for `asset`, embedding it on first use.
    fn embed(&mut self, asset: &Asset) -> Option<String> {
        if let Some(resource) = self.by_source.get(&asset.source) {
            return Some(resource.clone());
        }
        let resource = format!("Im{}", self.images.len() + 1);
        let (image, alpha) = encode_image(asset)?;
        self.images.push(EmbeddedImage {
            resource: resource.clone(),
            image,
            alpha,
        });
        self.by_source.insert(asset.source.clone(), resource.clone());
        Some(resource)
    }

    /// Assemble the document. Streams are compressed except embedded JPEGs.
    fn build(&self) -> Result<Document, lopdf::Error> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular = doc.add_object(standard_font("Helvetica"));
        let bold = doc.add_object(standard_font("Helvetica-Bold"));

        let mut xobjects = Dictionary::new();
        for embedded in &self.images {
            let mut image = embedded.image.clone();
            if let Some(alpha) = &embedded.alpha {
                let alpha_id = doc.add_object(alpha.clone());
                image.dict.set("SMask", alpha_id);
            }
            let image_id = doc.add_object(image);
            xobjects.set(embedded.resource.as_bytes().to_vec(), image_id);
        }

        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_REGULAR => regular,
                FONT_BOLD => bold,
            },
            "XObject" => xobjects,
        });

        let mut kids = Vec::with_capacity(self.pages.len());
        for operations in &self.pages {
            let content = Content {
                operations: operations.clone(),
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::from(page_id));
        }

        let count = i64::try_from(kids.len()).unwrap_or(i64::MAX);
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    real(0.0),
                    real(0.0),
                    real(PAGE_WIDTH * PT_PER_MM),
                    real(PAGE_HEIGHT * PT_PER_MM),
                ],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();
        Ok(doc)
    }
}

impl DocumentCanvas for PdfCanvas {
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        let lines = match style.max_width {
            Some(width) => wrap(text, width, style),
            None => vec![text.to_string()],
        };
        let advance = style.size * LINE_HEIGHT_FACTOR / PT_PER_MM;
        let mut baseline = y;
        for line in lines {
            let start = match style.align {
                Align::Left => x,
                Align::Center => x - text_width_mm(&line, style) / 2.0,
            };
            self.show_line(&line, start, baseline, style);
            baseline += advance;
        }
    }

    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        let bounds = vec![
            real(rect.x * PT_PER_MM),
            real((PAGE_HEIGHT - rect.y - rect.height) * PT_PER_MM),
            real(rect.width * PT_PER_MM),
            real(rect.height * PT_PER_MM),
        ];
        let ops = self.ops();
        ops.push(Operation::new("q", vec![]));
        match style {
            RectStyle::Fill(color) => {
                let (r, g, b) = rgb(color);
                ops.push(Operation::new("rg", vec![real(r), real(g), real(b)]));
                ops.push(Operation::new("re", bounds));
                ops.push(Operation::new("f", vec![]));
            }
            RectStyle::Stroke => {
                ops.push(Operation::new("w", vec![real(STROKE_WIDTH_MM * PT_PER_MM)]));
                ops.push(Operation::new("RG", vec![real(0.0), real(0.0), real(0.0)]));
                ops.push(Operation::new("re", bounds));
                ops.push(Operation::new("S", vec![]));
            }
        }
        ops.push(Operation::new("Q", vec![]));
    }

    fn draw_image(&mut self, asset: &Asset, rect: Rect) {
        let Some(resource) = self.embed(asset) else {
            warn!(name = %asset.name, "image could not be decoded, left out of the PDF");
            return;
        };
        let ops = self.ops();
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![
                real(rect.width * PT_PER_MM),
                real(0.0),
                real(0.0),
                real(rect.height * PT_PER_MM),
                real(rect.x * PT_PER_MM),
                real((PAGE_HEIGHT - rect.y - rect.height) * PT_PER_MM),
            ],
        ));
        ops.push(Operation::new("Do", vec![Object::Name(resource.into_bytes())]));
        ops.push(Operation::new("Q", vec![]));
    }

    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn save(&mut self, path: &Path) -> Result<(), CertificateError> {
        let pdf_error = |reason: String| CertificateError::Pdf {
            path: path.to_path_buf(),
            reason,
        };
        let mut doc = self.build().map_err(|err| pdf_error(err.to_string()))?;
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|err| pdf_error(err.to_string()))?;
        fs::write(path, &bytes).map_err(|source| CertificateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            pages = self.pages.len(),
            images = self.images.len(),
            bytes = bytes.len(),
            "pdf certificate saved"
        );
        Ok(())
    }
}

fn standard_font(base: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

#[allow(clippy::cast_possible_truncation)]
fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

const fn rgb(color: Color) -> (f64, f64, f64) {
    match color {
        Color::Black => (0.0, 0.0, 0.0),
        Color::White => (1.0, 1.0, 1.0),
    }
}

/// Latin-1 characters map straight onto WinAnsi; anything else prints as `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

/// Image and optional soft-mask streams for `asset`.
fn encode_image(asset: &Asset) -> Option<(Stream, Option<Stream>)> {
    let decoded = asset.decode()?;
    let (width, height) = (i64::from(decoded.width()), i64::from(decoded.height()));

    if asset.format() == Some(ImageFormat::Jpeg) {
        let color_space = match decoded.color() {
            image::ColorType::L8 | image::ColorType::La8 => "DeviceGray",
            _ => "DeviceRGB",
        };
        let mut stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width,
                "Height" => height,
                "ColorSpace" => color_space,
                "BitsPerComponent" => 8_i64,
                "Filter" => "DCTDecode",
            },
            asset.data.clone(),
        );
        stream.allows_compression = false;
        return Some((stream, None));
    }

    let rgba = decoded.to_rgba8();
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    let mut alpha = Vec::with_capacity(rgba.len() / 4);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        rgb.extend_from_slice(&[r, g, b]);
        alpha.push(a);
    }
    let has_alpha = alpha.iter().any(|a| *a != u8::MAX);

    let image = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width,
            "Height" => height,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8_i64,
        },
        rgb,
    );
    let mask = has_alpha.then(|| {
        Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width,
                "Height" => height,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8_i64,
            },
            alpha,
        )
    });
    Some((image, mask))
}

/// Width of `text` in millimetres at `style`'s size.
#[must_use]
pub fn text_width_mm(text: &str, style: TextStyle) -> f64 {
    let units: u32 = text
        .chars()
        .map(|c| helvetica_width(c, style.bold))
        .sum();
    f64::from(units) / 1000.0 * style.size / PT_PER_MM
}

fn wrap(text: &str, max_width: f64, style: TextStyle) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if !line.is_empty() && text_width_mm(&candidate, style) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Advance widths of the standard Helvetica faces for printable ASCII, in
/// 1/1000 em. Other characters use the width of `o`.
fn helvetica_width(c: char, bold: bool) -> u32 {
    const REGULAR: [u16; 95] = [
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
        1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
        333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
        556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
    ];
    const BOLD: [u16; 95] = [
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
        975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
        333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
        611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
    ];
    let table = if bold { &BOLD } else { &REGULAR };
    let fallback = usize::from(b'o' - b' ');
    let index = (c as usize)
        .checked_sub(usize::from(b' '))
        .filter(|i| *i < table.len())
        .unwrap_or(fallback);
    u32::from(table[index])
}
