use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Connection settings for the hosted backend project.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc123.backend.example`.
    pub base_url: String,

    /// Project anon key, sent as the `apikey` header on every request.
    pub api_key: String,
}

impl BackendConfig {
    /// Load from `huddle.toml` (if present) layered under `HUDDLE_*`
    /// environment variables.
    pub fn load() -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name("huddle").required(false))
            .add_source(::config::Environment::with_prefix("HUDDLE"))
            .build()
            .context("build backend config failed")?;

        settings
            .try_deserialize()
            .context("deserialize backend config failed")
    }

    /// Load from an explicit config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()
            .with_context(|| format!("read backend config failed: {}", path.display()))?;

        settings
            .try_deserialize()
            .context("deserialize backend config failed")
    }

    /// Join an endpoint path onto the project base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
