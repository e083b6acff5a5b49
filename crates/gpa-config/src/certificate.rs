//! Certificate content and output settings.

use serde::{Deserialize, Serialize};

fn default_output_dir() -> String {
    String::from(".")
}

fn default_logo_candidates() -> Vec<String> {
    vec![String::from("images.png"), String::from("./images.png")]
}

fn default_signature_candidates() -> Vec<String> {
    vec![String::from("signature.png"), String::from("./signature.png")]
}

fn default_examination_type() -> String {
    String::from("Regular Examination")
}

fn default_remarks() -> String {
    String::from("Pass")
}

fn default_controller_title() -> String {
    String::from("CONTROLLER OF EXAMINATIONS")
}

fn default_notes() -> Vec<String> {
    vec![
        String::from(
            "1. The University reserves the right of issuing any correction in the result if any mistake is detected later.",
        ),
        String::from("2. This certificate has been issued without any erasure/overwriting."),
        String::from(
            "3. Error or omission if any occurred inadvertently can be rectified at any stage on the basis of original record.",
        ),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CertificateConfig {
    /// Directory the rendered certificate is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Paths tried in order for the logo image. Missing files are skipped.
    #[serde(default = "default_logo_candidates")]
    pub logo_candidates: Vec<String>,

    /// Paths tried in order for the controller's signature image.
    #[serde(default = "default_signature_candidates")]
    pub signature_candidates: Vec<String>,

    #[serde(default = "default_examination_type")]
    pub examination_type: String,

    #[serde(default = "default_remarks")]
    pub remarks: String,

    /// Name printed after "Prepared By:". Blank leaves the label alone.
    #[serde(default)]
    pub prepared_by: String,

    /// Name printed after "Checked By:". Blank leaves the label alone.
    #[serde(default)]
    pub checked_by: String,

    #[serde(default = "default_controller_title")]
    pub controller_title: String,

    /// Numbered notes at the foot of the certificate.
    #[serde(default = "default_notes")]
    pub notes: Vec<String>,
}

impl Default for CertificateConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            logo_candidates: default_logo_candidates(),
            signature_candidates: default_signature_candidates(),
            examination_type: default_examination_type(),
            remarks: default_remarks(),
            prepared_by: String::new(),
            checked_by: String::new(),
            controller_title: default_controller_title(),
            notes: default_notes(),
        }
    }
}
