use gpa_config::GpaConfig;
use gpa_core::Session;
use tracing::debug;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: GpaConfig,
    pub session: Session,
}

impl AppContext {
    /// Build the context around a fresh session. `seed` makes simulated
    /// marks and certificate serials reproducible.
    #[must_use]
    pub fn init(config: GpaConfig, seed: Option<u64>) -> Self {
        debug!(seeded = seed.is_some(), "session initialized");
        Self {
            config,
            session: Session::with_seed(seed),
        }
    }
}
