//! The A4 grade certificate, drawn onto any [`DocumentCanvas`].

use gpa_config::{CertificateConfig, InstitutionConfig};

use crate::assets::{Asset, CertificateAssets};
use crate::canvas::{DocumentCanvas, PAGE_WIDTH, Rect, TableSpec, TextStyle};
use crate::composer::{CertificatePayload, TABLE_HEADER};
use crate::issue::IssueDetails;

const LEFT: f64 = 20.0;
const VALUE_X: f64 = 70.0;
const CENTER_X: f64 = PAGE_WIDTH / 2.0;
const TOP_MARGIN: f64 = 20.0;
const HEADER_LINE_GAP: f64 = 7.0;
const STUDENT_LINE_GAP: f64 = 7.0;
const STUDENT_TOP: f64 = 75.0;

const MM_PER_PX: f64 = 0.264_583;
const LOGO_WIDTH_PX: f64 = 80.0;
const LOGO_FALLBACK_PX: (u32, u32) = (200, 200);
const SIGNATURE_WIDTH_MM: f64 = 40.0;
const SIGNATURE_FALLBACK_PX: (u32, u32) = (100, 80);
const SIGNATURE_CENTER_X: f64 = 150.0;

const COLUMN_WIDTHS: [f64; 9] = [15.0, 30.0, 15.0, 20.0, 20.0, 17.0, 20.0, 15.0, 20.0];
const ROW_HEIGHT: f64 = 7.0;
const TABLE_FONT: f64 = 8.0;
const BODY_FONT: f64 = 9.0;
const NOTE_WIDTH: f64 = 170.0;

pub struct CertificateLayout<'a> {
    pub institution: &'a InstitutionConfig,
    pub certificate: &'a CertificateConfig,
}

impl<'a> CertificateLayout<'a> {
    #[must_use]
    pub const fn new(institution: &'a InstitutionConfig, certificate: &'a CertificateConfig) -> Self {
        Self {
            institution,
            certificate,
        }
    }

    /// Draw the whole certificate. Missing images are simply left out.
    pub fn render(
        &self,
        canvas: &mut dyn DocumentCanvas,
        payload: &CertificatePayload,
        issue: &IssueDetails,
        assets: &CertificateAssets,
    ) {
        self.draw_masthead(canvas, issue, assets.logo.as_ref());
        let y = self.draw_student(canvas, payload);
        let final_y = draw_subject_table(canvas, payload, y + 5.0);
        self.draw_footer(canvas, payload, issue, assets.signature.as_ref(), final_y);
    }

    fn draw_masthead(
        &self,
        canvas: &mut dyn DocumentCanvas,
        issue: &IssueDetails,
        logo: Option<&Asset>,
    ) {
        let title = TextStyle::bold(22.0).centered();
        let mut y = TOP_MARGIN;
        for line in &self.institution.header_lines {
            canvas.draw_text(line, CENTER_X, y, title);
            y += HEADER_LINE_GAP;
        }

        if let Some(logo) = logo {
            let (width_px, height_px) = logo.dimensions().unwrap_or(LOGO_FALLBACK_PX);
            let width = LOGO_WIDTH_PX * MM_PER_PX;
            let height = width * f64::from(height_px) / f64::from(width_px);
            canvas.draw_image(
                logo,
                Rect::new((PAGE_WIDTH - width) / 2.0, TOP_MARGIN + 20.0, width, height),
            );
        }

        canvas.draw_text(
            &self.institution.campus,
            CENTER_X,
            52.0,
            TextStyle::bold(8.0).centered(),
        );

        let serial = TextStyle::normal(10.0);
        canvas.draw_text(
            &format!("Book No: {}", issue.serials.book_no),
            LEFT,
            45.0,
            serial,
        );
        canvas.draw_text(
            &format!("Certificate No: {}", issue.serials.certificate_no),
            150.0,
            45.0,
            serial,
        );
        canvas.draw_text("ORIGINAL", LEFT, 50.0, TextStyle::bold(10.0));
        canvas.draw_text(
            "GRADE CERTIFICATE",
            CENTER_X,
            65.0,
            TextStyle::bold(10.0).centered(),
        );
    }

    /// Six labelled identity lines. Returns the `y` of the last one.
    fn draw_student(&self, canvas: &mut dyn DocumentCanvas, payload: &CertificatePayload) -> f64 {
        let student = &payload.student;
        let held_in = format!("{}, {}", student.exam_month, student.year);
        let lines: [(&str, &str); 6] = [
            ("The grades obtained by", &student.name),
            ("having ID.No", &student.roll_number),
            ("in", &student.semester),
            (&self.institution.degree_prefix, &student.batch),
            ("Type of Examination", &self.certificate.examination_type),
            ("held in the month of", &held_in),
        ];

        let mut y = STUDENT_TOP;
        for (index, (label, value)) in lines.iter().enumerate() {
            if index > 0 {
                y += STUDENT_LINE_GAP;
            }
            canvas.draw_text(label, LEFT, y, TextStyle::normal(BODY_FONT));
            canvas.draw_text(value, VALUE_X, y, TextStyle::bold(BODY_FONT));
        }
        canvas.draw_text("are given below : ", 100.0, y, TextStyle::normal(BODY_FONT));
        y
    }

    fn draw_footer(
        &self,
        canvas: &mut dyn DocumentCanvas,
        payload: &CertificatePayload,
        issue: &IssueDetails,
        signature: Option<&Asset>,
        final_y: f64,
    ) {
        let normal = TextStyle::normal(BODY_FONT);
        let bold = TextStyle::bold(BODY_FONT);
        let summary = &payload.summary;
        let date = issue.declaration_date();

        canvas.draw_text("Total Credit Hours:", LEFT, final_y, normal);
        canvas.draw_text(&summary.credit_hours_display(), 50.0, final_y, bold);
        canvas.draw_text("Total Quality Points:", 80.0, final_y, normal);
        canvas.draw_text(&summary.quality_points_display(), 110.0, final_y, bold);
        canvas.draw_text("G.P.A", 140.0, final_y, normal);
        canvas.draw_text(&summary.gpa_display(), 150.0, final_y, bold);

        canvas.draw_text("Date of Declaration of Result:", LEFT, final_y + 7.0, normal);
        canvas.draw_text(&date, VALUE_X, final_y + 7.0, bold);

        canvas.draw_text("Remarks:", LEFT, final_y + 14.0, bold);
        canvas.draw_text(&self.certificate.remarks, 40.0, final_y + 14.0, bold);

        let mut footer_y = final_y + 20.0;
        canvas.draw_text("Received Rs : ", LEFT, footer_y, normal);
        canvas.draw_text("Valid Challan No.", 50.0, footer_y, normal);
        canvas.draw_text("Dated:", 90.0, footer_y, normal);

        canvas.draw_text("Prepared By:", LEFT, footer_y + 7.0, normal);
        if !self.certificate.prepared_by.trim().is_empty() {
            canvas.draw_text(&self.certificate.prepared_by, 40.0, footer_y + 7.0, bold);
        }
        canvas.draw_text("Checked By:", 60.0, footer_y + 7.0, normal);
        if !self.certificate.checked_by.trim().is_empty() {
            canvas.draw_text(&self.certificate.checked_by, 80.0, footer_y + 7.0, bold);
        }

        canvas.draw_text(
            &format!("{}, Dated {date}", self.institution.city),
            LEFT,
            footer_y + 25.0,
            normal,
        );

        let controller_y = footer_y + 30.0;
        if let Some(signature) = signature {
            let (width_px, height_px) = signature
                .dimensions()
                .unwrap_or(SIGNATURE_FALLBACK_PX);
            let height = SIGNATURE_WIDTH_MM * f64::from(height_px) / f64::from(width_px);
            canvas.draw_image(
                signature,
                Rect::new(
                    SIGNATURE_CENTER_X - SIGNATURE_WIDTH_MM / 2.0,
                    controller_y - height - 3.0,
                    SIGNATURE_WIDTH_MM,
                    height,
                ),
            );
        }
        canvas.draw_text(
            &self.certificate.controller_title,
            120.0,
            controller_y,
            TextStyle::bold(11.0),
        );

        footer_y += 45.0;
        canvas.draw_text("Note:", LEFT, footer_y - 4.0, bold);
        let note = TextStyle::normal(8.0).wrapped(NOTE_WIDTH);
        for (index, text) in self.certificate.notes.iter().enumerate() {
            if index > 0 {
                footer_y += 4.0;
            }
            canvas.draw_text(text, LEFT, footer_y, note);
        }
    }
}

fn draw_subject_table(
    canvas: &mut dyn DocumentCanvas,
    payload: &CertificatePayload,
    start_y: f64,
) -> f64 {
    let rows: Vec<Vec<String>> = payload.rows.iter().map(|row| row.cells.to_vec()).collect();
    canvas.draw_table(
        &TableSpec {
            header: &TABLE_HEADER,
            rows: &rows,
            column_widths: &COLUMN_WIDTHS,
            x: LEFT,
            row_height: ROW_HEIGHT,
            font_size: TABLE_FONT,
        },
        start_y,
    )
}
