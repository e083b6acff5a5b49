//! End-to-end certificate rendering: session -> compose -> layout -> canvas.

use std::fs;

use chrono::NaiveDate;
use gpa_certificate::canvas::{Command, RecordingCanvas};
use gpa_certificate::composer::TABLE_HEADER;
use gpa_certificate::text_canvas::{PAGE_BREAK, TextCanvas};
use gpa_certificate::{
    CertificateAssets, CertificateLayout, IssueDetails, PdfCanvas, compose, issue_certificate,
};
use gpa_config::GpaConfig;
use gpa_core::Session;
use gpa_core::entities::{StudentInfo, SubjectInput};
use gpa_core::enums::SubjectKind;
use pretty_assertions::assert_eq;

fn student() -> StudentInfo {
    StudentInfo {
        name: "Ayesha Khan".into(),
        roll_number: "K21SW001".into(),
        batch: "Software 2021".into(),
        semester: "Third Semester".into(),
        exam_month: "March".into(),
        year: "2024".into(),
    }
}

fn ready_session() -> Session {
    let mut session = Session::with_seed(Some(2024));
    for input in [
        SubjectInput::new("Physics", SubjectKind::Theory, 3.0, "A"),
        SubjectInput::new("Physics", SubjectKind::Practical, 1.0, "B+"),
        SubjectInput::new("Maths", SubjectKind::Theory, 3.0, "A+"),
    ] {
        session.add_subject(&input).unwrap();
    }
    session.set_student(student());
    session.calculate().unwrap();
    session
}

fn issue(session: &mut Session) -> IssueDetails {
    IssueDetails::new(
        session.random(),
        NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
    )
}

fn config_without_images(dir: &std::path::Path) -> GpaConfig {
    let mut config = GpaConfig::default();
    config.certificate.logo_candidates = vec![dir.join("images.png").display().to_string()];
    config.certificate.signature_candidates =
        vec![dir.join("signature.png").display().to_string()];
    config
}

#[test]
fn layout_draws_every_section_in_order() {
    let mut session = ready_session();
    let payload = compose(session.subjects(), session.summary(), session.student()).unwrap();
    let issue = issue(&mut session);
    let config = GpaConfig::default();

    let mut canvas = RecordingCanvas::new();
    CertificateLayout::new(&config.institution, &config.certificate).render(
        &mut canvas,
        &payload,
        &issue,
        &CertificateAssets::default(),
    );

    let texts = canvas.texts();
    let position = |needle: &str| {
        texts
            .iter()
            .position(|t| *t == needle)
            .unwrap_or_else(|| panic!("{needle} not drawn"))
    };

    assert!(position("MEHRAN UNIVERSITY") < position("GRADE CERTIFICATE"));
    assert!(position("GRADE CERTIFICATE") < position("Ayesha Khan"));
    assert!(position("Ayesha Khan") < position("CODE NO"));
    for label in TABLE_HEADER {
        position(label);
    }
    assert!(position("QUALITY POINTS") < position("Total Credit Hours:"));
    assert!(position("Total Credit Hours:") < position("CONTROLLER OF EXAMINATIONS"));

    assert_eq!(texts.iter().filter(|t| **t == "Physics").count(), 1);
    assert!(texts.contains(&"March, 2024"));
    assert!(texts.contains(&"15/04/2024"));
    assert!(texts.contains(&"Jamshoro, Dated 15/04/2024"));
    assert!(texts.contains(&payload.summary.gpa_display().as_str()));
    assert!(canvas.images().is_empty());
    assert_eq!(canvas.page_count(), 1);
}

#[test]
fn serials_are_printed() {
    let mut session = ready_session();
    let payload = compose(session.subjects(), session.summary(), session.student()).unwrap();
    let issue = issue(&mut session);
    let config = GpaConfig::default();

    let mut canvas = RecordingCanvas::new();
    CertificateLayout::new(&config.institution, &config.certificate).render(
        &mut canvas,
        &payload,
        &issue,
        &CertificateAssets::default(),
    );

    let book = format!("Book No: {}", issue.serials.book_no);
    let cert = format!("Certificate No: {}", issue.serials.certificate_no);
    assert!(canvas.texts().contains(&book.as_str()));
    assert!(canvas.texts().contains(&cert.as_str()));
}

#[test]
fn blank_signatories_print_labels_only() {
    let mut session = ready_session();
    let payload = compose(session.subjects(), session.summary(), session.student()).unwrap();
    let issue = issue(&mut session);
    let mut config = GpaConfig::default();
    config.certificate.checked_by = "H. Chajro".into();

    let mut canvas = RecordingCanvas::new();
    CertificateLayout::new(&config.institution, &config.certificate).render(
        &mut canvas,
        &payload,
        &issue,
        &CertificateAssets::default(),
    );

    let texts = canvas.texts();
    let prepared = texts.iter().position(|t| *t == "Prepared By:").unwrap();
    assert_eq!(texts[prepared + 1], "Checked By:");
    assert_eq!(texts[prepared + 2], "H. Chajro");
}

#[test]
fn images_are_placed_when_available() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("images.png");
    fs::write(&logo, b"not really a png").unwrap();
    let mut config = config_without_images(dir.path());
    config.certificate.logo_candidates = vec![logo.display().to_string()];

    let mut session = ready_session();
    let payload = compose(session.subjects(), session.summary(), session.student()).unwrap();
    let issue = issue(&mut session);

    let mut canvas = RecordingCanvas::new();
    CertificateLayout::new(&config.institution, &config.certificate).render(
        &mut canvas,
        &payload,
        &issue,
        &CertificateAssets::load(&config.certificate),
    );
    assert_eq!(canvas.images(), vec!["images.png"]);

    let logo_rect = canvas
        .commands
        .iter()
        .find_map(|c| match c {
            Command::Image { rect, .. } => Some(*rect),
            _ => None,
        })
        .unwrap();
    // unknown dimensions fall back to a square logo
    assert!((logo_rect.width - logo_rect.height).abs() < 1e-9);
}

#[test]
fn issue_writes_text_certificate_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("certs");
    let config = config_without_images(dir.path());

    let mut session = ready_session();
    let payload = compose(session.subjects(), session.summary(), session.student()).unwrap();
    let issue = issue(&mut session);

    let mut canvas = TextCanvas::new();
    let path = issue_certificate(&mut canvas, &payload, &issue, &config, &out).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "MUET_SZAB_GPA_Certificate_K21SW001_2024.txt"
    );
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("GRADE CERTIFICATE"));
    assert!(written.contains("Ayesha Khan"));
    assert!(written.contains("CONTROLLER OF EXAMINATIONS"));
    assert!(!written.contains(PAGE_BREAK));
}

#[test]
fn issue_writes_pdf_certificate_with_logo() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("certs");
    let config = config_without_images(dir.path());
    let logo = image::RgbImage::from_pixel(64, 32, image::Rgb([0, 80, 160]));
    logo.save_with_format(dir.path().join("images.png"), image::ImageFormat::Png)
        .unwrap();

    let mut session = ready_session();
    let payload = compose(session.subjects(), session.summary(), session.student()).unwrap();
    let issue = issue(&mut session);

    let mut canvas = PdfCanvas::new();
    let path = issue_certificate(&mut canvas, &payload, &issue, &config, &out).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "MUET_SZAB_GPA_Certificate_K21SW001_2024.pdf"
    );
    let doc = lopdf::Document::load(&path).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
    let page = *doc.get_pages().values().next().unwrap();
    let content = lopdf::content::Content::decode(&doc.get_page_content(page).unwrap()).unwrap();
    let shown: Vec<Vec<u8>> = content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first()?.as_str().ok().map(<[u8]>::to_vec))
        .collect();
    assert!(shown.iter().any(|text| text == b"GRADE CERTIFICATE"));
    assert!(shown.iter().any(|text| text == b"Ayesha Khan"));
    assert!(content.operations.iter().any(|op| op.operator == "Do"));
}

#[test]
fn full_registry_still_fits_one_page() {
    let mut session = Session::with_seed(Some(5));
    for i in 0..11 {
        session
            .add_subject(&SubjectInput::new(
                &format!("Subject {i}"),
                SubjectKind::Theory,
                3.0,
                "B",
            ))
            .unwrap();
    }
    session.set_student(student());
    session.calculate().unwrap();
    let payload = compose(session.subjects(), session.summary(), session.student()).unwrap();
    let issue = issue(&mut session);
    let config = GpaConfig::default();

    let mut canvas = RecordingCanvas::new();
    CertificateLayout::new(&config.institution, &config.certificate).render(
        &mut canvas,
        &payload,
        &issue,
        &CertificateAssets::default(),
    );
    assert_eq!(payload.rows.len(), 12);
    assert_eq!(canvas.page_count(), 1);
}
