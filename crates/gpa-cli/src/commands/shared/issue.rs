use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use gpa_certificate::{
    DocumentCanvas, IssueDetails, PdfCanvas, TextCanvas, compose, issue_certificate,
};
use serde::Serialize;

use crate::context::AppContext;

/// Response from `gpa certificate` and the shell's `certificate`.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateResponse {
    pub path: PathBuf,
    pub student: String,
    pub roll_number: String,
    pub book_no: u32,
    pub certificate_no: u32,
    pub declared_on: String,
    pub rows: usize,
    pub gpa: String,
}

/// Compose the session's certificate and write it into `out_dir` (or the
/// configured output directory): a PDF, or a plain-text preview.
pub fn issue_from_session(
    ctx: &mut AppContext,
    out_dir: Option<&Path>,
    preview: bool,
) -> anyhow::Result<CertificateResponse> {
    issue_on(ctx, out_dir, preview, Local::now().date_naive())
}

fn canvas(preview: bool) -> Box<dyn DocumentCanvas> {
    if preview {
        Box::new(TextCanvas::new())
    } else {
        Box::new(PdfCanvas::new())
    }
}

pub fn issue_on(
    ctx: &mut AppContext,
    out_dir: Option<&Path>,
    preview: bool,
    declared_on: NaiveDate,
) -> anyhow::Result<CertificateResponse> {
    let session = &mut ctx.session;
    let payload = compose(session.subjects(), session.summary(), session.student())?;
    let issue = IssueDetails::new(session.random(), declared_on);

    let out_dir = out_dir.map_or_else(
        || PathBuf::from(&ctx.config.certificate.output_dir),
        Path::to_path_buf,
    );
    let mut canvas = canvas(preview);
    let path = issue_certificate(canvas.as_mut(), &payload, &issue, &ctx.config, &out_dir)
        .context("failed to write certificate")?;

    Ok(CertificateResponse {
        path,
        student: payload.student.name.clone(),
        roll_number: payload.student.roll_number.clone(),
        book_no: issue.serials.book_no,
        certificate_no: issue.serials.certificate_no,
        declared_on: issue.declaration_date(),
        rows: payload.rows.len(),
        gpa: payload.summary.gpa_display(),
    })
}
