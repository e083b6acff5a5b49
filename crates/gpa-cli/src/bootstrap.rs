use anyhow::Context;
use gpa_config::GpaConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<GpaConfig> {
    GpaConfig::load_with_dotenv().context("failed to load gpacert configuration")
}
