use shared_types::AppConfig;
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents, falling back to defaults when they are invalid.
fn parse_or_default(path: &Path, contents: &str) -> AppConfig {
    AppConfig::from_toml_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Read and parse the config at `path`. A missing or unreadable file
/// yields the defaults.
fn load_from(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_or_default(path, &contents),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "No config file, using defaults");
            AppConfig::default()
        }
    }
}

/// Read `config.toml` once and cache it. Safe to call repeatedly.
///
/// A missing or unparseable file yields the defaults. Web builds have no
/// filesystem, so they always run on defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = load_from(Path::new(CONFIG_PATH));
        tracing::debug!(?config, "Loaded app config");
        config
    })
}
