use serde::{Deserialize, Serialize};

/// Default brand shown in the header, footer and CTA copy.
pub const DEFAULT_BRAND_NAME: &str = "Morelux Agency";

/// Default number of postings previewed on the landing page.
pub const DEFAULT_FEATURED_JOBS: usize = 3;

fn default_brand_name() -> String {
    DEFAULT_BRAND_NAME.to_string()
}

fn default_featured_jobs() -> usize {
    DEFAULT_FEATURED_JOBS
}

/// Landing page settings.
///
/// Every field has a serde default so that a missing or partial
/// `[landing]` table still yields a usable page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LandingConfig {
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    #[serde(default = "default_featured_jobs")]
    pub featured_jobs: usize,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            featured_jobs: default_featured_jobs(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub landing: LandingConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
