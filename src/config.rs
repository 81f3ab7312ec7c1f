use std::sync::Arc;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::discovery::{Discovery, DiscoveryError, OmdbProvider, TmdbProvider};

/// Process-wide configuration, resolved once at startup. No hot-reload.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Which metadata backend serves this deployment, and its credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// "tmdb" (rich) or "omdb" (sparse).
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Rich-provider credential: v3 API key or v4 bearer token.
    pub tmdb_api_key: Option<String>,
    /// Sparse-provider API key.
    pub omdb_api_key: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            tmdb_api_key: None,
            omdb_api_key: None,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8650".to_string()
}

fn default_backend() -> String {
    "tmdb".to_string()
}

impl AppConfig {
    /// Layered load: optional `cinetrack.toml`, overridden by
    /// `CINETRACK_*` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("cinetrack").required(false))
            .add_source(Environment::with_prefix("CINETRACK").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Build the configured discovery backend. A missing credential for the
    /// selected backend is a configuration error, distinct from the empty
    /// results upstream failures degrade to.
    pub fn build_discovery(&self) -> Result<Discovery, DiscoveryError> {
        match self.provider.backend.as_str() {
            "tmdb" => {
                let key = self.provider.tmdb_api_key.as_deref().ok_or_else(|| {
                    DiscoveryError::Config("tmdb_api_key is not configured".to_string())
                })?;
                Ok(Discovery::new(Arc::new(TmdbProvider::new(key))))
            }
            "omdb" => {
                let key = self.provider.omdb_api_key.as_deref().ok_or_else(|| {
                    DiscoveryError::Config("omdb_api_key is not configured".to_string())
                })?;
                Ok(Discovery::new(Arc::new(OmdbProvider::new(key))))
            }
            other => Err(DiscoveryError::Config(format!(
                "unknown provider backend: {other}"
            ))),
        }
    }
}
