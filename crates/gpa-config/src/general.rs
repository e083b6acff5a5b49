//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    String::from("json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Seed for simulated marks and certificate serials. Unset means a fresh
    /// OS-seeded source per run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Output format used when `--format` is not given (`json`, `table`, `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_format: default_format(),
        }
    }
}
