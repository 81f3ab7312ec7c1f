mod aggregate;
mod matcher;
mod normalize;
pub mod provider;
pub mod tables;
mod types;

#[cfg(test)]
mod tests;

pub use aggregate::Discovery;
pub use matcher::{matches_category, matches_language};
pub use normalize::{canonical_id, external_id, normalize_image_url};
pub use provider::{DiscoveryProvider, HttpClient, OmdbProvider, TmdbProvider};
pub use types::{
    CastMember, DiscoverPage, DiscoverRequest, EpisodeSummary, ListKind, MediaKind, MediaSummary,
    MediaType, SeasonDetail, SeasonSummary, TitleDetail,
};

/// Discovery result type
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Discovery error types
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DiscoveryError {
    /// Whether this error marks a missing credential or other fatal setup
    /// problem, as opposed to an upstream failure that degrades to empty.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
