use std::sync::Arc;

use tracing::{debug, info};

use crate::discovery::{
    DiscoverPage, DiscoverRequest, ListKind, MediaSummary, MediaType, Result, SeasonDetail,
    TitleDetail, provider::DiscoveryProvider,
};

/// Top-level query entry point. Wraps the one provider this deployment is
/// configured with and enforces the output invariants the backends cannot
/// guarantee on their own.
///
/// No deduplication is performed: a franchise with a same-named movie and
/// series legitimately yields two entries, distinguished by
/// `(id, media_type)`.
#[derive(Clone)]
pub struct Discovery {
    provider: Arc<dyn DiscoveryProvider>,
}

impl Discovery {
    pub fn new(provider: Arc<dyn DiscoveryProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Fetch one page of a list.
    pub async fn discover(&self, list: ListKind, request: &DiscoverRequest) -> Result<DiscoverPage> {
        let mut page = self.provider.discover(list, request).await?;
        Self::drop_unresolved(&mut page.results);
        info!(
            provider = self.provider.id(),
            list = %list,
            page = page.page,
            results = page.results.len(),
            "discover completed"
        );
        Ok(page)
    }

    /// Free-text search.
    pub async fn search(&self, query: &str, request: &DiscoverRequest) -> Result<DiscoverPage> {
        let mut page = self.provider.search(query, request).await?;
        Self::drop_unresolved(&mut page.results);
        debug!(
            provider = self.provider.id(),
            query,
            results = page.results.len(),
            "search completed"
        );
        Ok(page)
    }

    /// Typeahead suggestions, capped at 8.
    pub async fn suggestions(&self, query: &str) -> Result<Vec<MediaSummary>> {
        let mut results = self.provider.suggestions(query).await?;
        Self::drop_unresolved(&mut results);
        Ok(results)
    }

    pub async fn title_detail(&self, media_type: MediaType, id: &str) -> Result<TitleDetail> {
        self.provider.title_detail(media_type, id).await
    }

    pub async fn season_detail(&self, series_id: &str, season: u32) -> Result<SeasonDetail> {
        self.provider.season_detail(series_id, season).await
    }

    /// A canonical id of 0 means the source identifier never resolved.
    /// Such records are dropped here, uniformly for every path, so that
    /// consumers can rely on `id` as a key.
    fn drop_unresolved(results: &mut Vec<MediaSummary>) {
        results.retain(|summary| summary.id != 0);
    }
}
