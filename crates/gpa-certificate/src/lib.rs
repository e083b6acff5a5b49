//! # gpa-certificate
//!
//! Grade certificate generation for gpacert.
//!
//! - [`composer`] groups subjects into the fixed 9-column table rows
//! - [`issue`] draws serial numbers and formats the declaration date and
//!   output file name
//! - [`canvas`] defines the [`DocumentCanvas`] drawing surface
//! - [`pdf_canvas::PdfCanvas`] writes the certificate PDF;
//!   [`text_canvas::TextCanvas`] writes a plain-text preview
//! - [`layout`] places everything on an A4 page
//! - [`assets`] loads the optional logo and signature images

pub mod assets;
pub mod canvas;
pub mod composer;
pub mod error;
pub mod issue;
pub mod layout;
pub mod pdf_canvas;
pub mod text_canvas;

use std::fs;
use std::path::{Path, PathBuf};

use gpa_config::GpaConfig;
use tracing::info;

pub use assets::{Asset, CertificateAssets, try_load_asset};
pub use canvas::DocumentCanvas;
pub use composer::{CertificatePayload, CertificateRow, RowKind, compose};
pub use error::CertificateError;
pub use issue::{IssueDetails, SerialNumbers, certificate_file_name};
pub use layout::CertificateLayout;
pub use pdf_canvas::PdfCanvas;
pub use text_canvas::TextCanvas;

/// Render `payload` onto `canvas` and save it into `output_dir` under the
/// deterministic certificate file name. Returns the written path.
///
/// # Errors
///
/// [`CertificateError::Io`] when the output directory cannot be created or
/// the canvas fails to save; [`CertificateError::Pdf`] when the PDF backend
/// cannot serialize the document.
pub fn issue_certificate(
    canvas: &mut dyn DocumentCanvas,
    payload: &CertificatePayload,
    issue: &IssueDetails,
    config: &GpaConfig,
    output_dir: &Path,
) -> Result<PathBuf, CertificateError> {
    fs::create_dir_all(output_dir).map_err(|source| CertificateError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let assets = CertificateAssets::load(&config.certificate);
    CertificateLayout::new(&config.institution, &config.certificate)
        .render(canvas, payload, issue, &assets);

    let path = output_dir.join(certificate_file_name(
        &config.institution.file_prefix,
        &payload.student,
        canvas.extension(),
    ));
    canvas.save(&path)?;
    info!(
        path = %path.display(),
        book_no = issue.serials.book_no,
        certificate_no = issue.serials.certificate_no,
        "certificate issued"
    );
    Ok(path)
}
