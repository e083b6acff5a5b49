const ENV_PREFIX: &str = "GPACERT_";

/// Prefixed variables that are not config keys.
const NON_CONFIG_KEYS: [&str; 1] = ["GPACERT_LOG"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(ENV_PREFIX) && !NON_CONFIG_KEYS.contains(&key.as_str()))
        .filter(|key| !key[ENV_PREFIX.len()..].contains("__"))
        .collect::<Vec<_>>();
    keys.sort();

    keys.into_iter()
        .map(|key| {
            format!(
                "{key} is ignored: config env vars need a double underscore between section and field (example: GPACERT_INSTITUTION__CITY)."
            )
        })
        .collect()
}
