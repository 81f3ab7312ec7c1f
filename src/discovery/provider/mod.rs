mod http;
pub mod omdb;
pub mod tmdb;

pub use http::HttpClient;
pub use omdb::OmdbProvider;
pub use tmdb::TmdbProvider;

use async_trait::async_trait;

use crate::discovery::{
    DiscoverPage, DiscoverRequest, ListKind, MediaType, Result, SeasonDetail, TitleDetail,
};

/// Backend contract for a metadata source. A deployment configures exactly
/// one provider behind the aggregator; the two are never combined in a
/// single call.
#[async_trait]
pub trait DiscoveryProvider: Send + Sync {
    /// Provider identifier (e.g., "tmdb", "omdb")
    fn id(&self) -> &'static str;

    /// Human-readable provider name
    fn name(&self) -> &'static str;

    /// Fetch one page of a list, honoring the request's filters.
    ///
    /// Upstream failures degrade to an empty page; only configuration
    /// errors propagate.
    async fn discover(&self, list: ListKind, request: &DiscoverRequest) -> Result<DiscoverPage>;

    /// Free-text title search.
    async fn search(&self, query: &str, request: &DiscoverRequest) -> Result<DiscoverPage>;

    /// Lightweight search used for typeahead. Capped at 8 results.
    async fn suggestions(&self, query: &str) -> Result<Vec<crate::discovery::MediaSummary>> {
        if query.trim().len() < 2 {
            return Ok(Vec::new());
        }
        let mut page = self.search(query, &DiscoverRequest::default()).await?;
        page.results.truncate(8);
        Ok(page.results)
    }

    /// Full detail for a single title. `id` is the provider-native
    /// identifier (numeric for the rich provider, external for the sparse).
    async fn title_detail(&self, media_type: MediaType, id: &str) -> Result<TitleDetail>;

    /// Episode listing for one season of a series.
    async fn season_detail(&self, series_id: &str, season: u32) -> Result<SeasonDetail>;
}
