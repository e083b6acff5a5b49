//! Issuing institution details printed on the certificate.

use serde::{Deserialize, Serialize};

fn default_header_lines() -> Vec<String> {
    vec![
        String::from("MEHRAN UNIVERSITY"),
        String::from("OF"),
        String::from("ENGINEERING & TECHNOLOGY"),
    ]
}

fn default_campus() -> String {
    String::from("SHAHEED ZULFIQAR ALI BHUTTO CAMPUS, KHAIRPUR MIR'S")
}

fn default_file_prefix() -> String {
    String::from("MUET_SZAB")
}

fn default_city() -> String {
    String::from("Jamshoro")
}

fn default_degree_prefix() -> String {
    String::from("B.E of")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstitutionConfig {
    /// Centered title lines at the top of the certificate.
    #[serde(default = "default_header_lines")]
    pub header_lines: Vec<String>,

    /// Campus line printed under the logo.
    #[serde(default = "default_campus")]
    pub campus: String,

    /// Leading part of the certificate file name.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Place of issue.
    #[serde(default = "default_city")]
    pub city: String,

    /// Label in front of the batch line (e.g. `B.E of`).
    #[serde(default = "default_degree_prefix")]
    pub degree_prefix: String,
}

impl Default for InstitutionConfig {
    fn default() -> Self {
        Self {
            header_lines: default_header_lines(),
            campus: default_campus(),
            file_prefix: default_file_prefix(),
            city: default_city(),
            degree_prefix: default_degree_prefix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_name_the_university() {
        let config = InstitutionConfig::default();
        assert_eq!(config.header_lines.len(), 3);
        assert_eq!(config.header_lines[0], "MEHRAN UNIVERSITY");
        assert_eq!(config.file_prefix, "MUET_SZAB");
    }
}
