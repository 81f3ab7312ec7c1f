use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use futures::future::join_all;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::api::{OmdbRecord, SearchResponse, SearchStub, SeasonResponse};
use crate::discovery::{
    DiscoverPage, DiscoverRequest, DiscoveryError, ListKind, MediaSummary, MediaType, Result,
    SeasonDetail, TitleDetail,
    matcher::{category_keywords, matches_category, matches_language},
    normalize::{canonical_id, ensure_external_id, normalize_image_url},
    provider::{DiscoveryProvider, HttpClient},
    tables::seed_titles,
    types::{CastMember, EpisodeSummary, SeasonSummary},
};

const OMDB_BASE_URL: &str = "https://www.omdbapi.com";

/// Independent deadline for each point lookup. A timed-out title is skipped,
/// never fatal for the batch.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Seed titles resolved per page.
const SEED_PAGE_SIZE: usize = 20;

/// The provider's own search page size, mirrored in reported totals.
const SEARCH_PAGE_SIZE: usize = 10;

/// Detail fetches per media kind on the category-search path.
const CATEGORY_DETAIL_LIMIT: usize = 5;

/// Adapter for the sparse provider, which only supports exact-title/id
/// point lookups and basic free-text search. List discovery is simulated by
/// walking a curated seed list and filtering client-side.
pub struct OmdbProvider {
    client: HttpClient,
    api_key: String,
}

impl OmdbProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: HttpClient::new(OMDB_BASE_URL),
            api_key: api_key.into(),
        }
    }

    /// Point lookup bounded by [`LOOKUP_TIMEOUT`]. Expiry cancels the
    /// in-flight request and resolves to an error the caller treats as
    /// "no data for this title".
    async fn bounded_get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let mut full: Vec<(&str, &str)> = vec![("apikey", self.api_key.as_str())];
        full.extend_from_slice(params);

        match tokio::time::timeout(LOOKUP_TIMEOUT, self.client.get_with_params("/", &full)).await {
            Ok(result) => result,
            Err(_) => Err(DiscoveryError::Timeout(format!(
                "lookup exceeded {}s",
                LOOKUP_TIMEOUT.as_secs()
            ))),
        }
    }

    async fn lookup_by_title(&self, title: &str, media_type: MediaType) -> Result<OmdbRecord> {
        let type_param = Self::type_param(media_type);
        self.bounded_get(&[("t", title), ("type", type_param)]).await
    }

    async fn lookup_by_id(&self, external_id: &str, plot: &str) -> Result<OmdbRecord> {
        self.bounded_get(&[("i", external_id), ("plot", plot)]).await
    }

    fn type_param(media_type: MediaType) -> &'static str {
        match media_type {
            MediaType::Series => "series",
            MediaType::Movie => "movie",
        }
    }

    fn parse_rating(raw: Option<&str>) -> f64 {
        raw.and_then(|s| s.parse().ok()).unwrap_or(0.0)
    }

    fn parse_votes(raw: Option<&str>) -> u64 {
        raw.map(|s| s.replace(',', ""))
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }

    /// Leading-digits parse, tolerant of ranges like "2008-2013".
    fn parse_leading_number(raw: &str) -> Option<u32> {
        let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
        digits.parse().ok()
    }

    fn non_na(raw: Option<&str>) -> Option<String> {
        raw.map(str::trim)
            .filter(|s| !s.is_empty() && *s != "N/A")
            .map(str::to_string)
    }

    /// Render a bare year as a plausible ISO date, or nothing.
    fn year_as_date(raw: Option<&str>) -> Option<String> {
        let year = Self::parse_leading_number(raw?)?;
        let current = Utc::now().year() as u32;
        if year > 1900 && year <= current + 10 {
            Some(format!("{year}-01-01"))
        } else {
            None
        }
    }

    fn split_list(raw: Option<&str>) -> Vec<String> {
        match Self::non_na(raw) {
            Some(s) => s.split(',').map(|part| part.trim().to_string()).collect(),
            None => Vec::new(),
        }
    }

    /// Map a full record to the normalized shape. The record's own type
    /// field decides movie vs series when the caller has no stronger claim.
    fn summary_from_record(record: &OmdbRecord, media_type: MediaType) -> MediaSummary {
        let rating = Self::parse_rating(record.imdb_rating.as_deref());
        let external = record.imdb_id.clone();

        MediaSummary {
            id: external.as_deref().map(canonical_id).unwrap_or(0),
            external_id: external,
            media_type,
            title: record.title.clone(),
            overview: Self::non_na(record.plot.as_deref()).unwrap_or_default(),
            poster_url: record
                .poster
                .as_deref()
                .and_then(normalize_image_url),
            backdrop_url: None,
            rating,
            vote_count: Self::parse_votes(record.imdb_votes.as_deref()),
            release_date: Self::non_na(record.released.as_deref()),
            year: Self::non_na(record.year.as_deref()),
            language: Self::non_na(record.language.as_deref()).unwrap_or_default(),
            genres: Self::split_list(record.genre.as_deref()),
            popularity: rating,
        }
    }

    fn record_media_type(record: &OmdbRecord) -> MediaType {
        match record.media_type.as_deref() {
            Some("series") => MediaType::Series,
            _ => MediaType::Movie,
        }
    }

    fn passes_filters(record: &OmdbRecord, request: &DiscoverRequest) -> bool {
        matches_language(&request.language, record.language.as_deref().unwrap_or(""))
            && matches_category(&request.category, record.genre.as_deref().unwrap_or(""))
    }

    /// Resolve one seed title: series lookup first when the kind allows it,
    /// movie lookup only when the series lookup found nothing. Any failure
    /// or filter miss yields None and never aborts the batch.
    async fn resolve_seed_title(&self, title: &str, request: &DiscoverRequest) -> Option<MediaSummary> {
        if request.media_kind.includes_series() {
            match self.lookup_by_title(title, MediaType::Series).await {
                Ok(record) if record.is_found() => {
                    if !Self::passes_filters(&record, request) {
                        return None;
                    }
                    return Some(Self::summary_from_record(&record, MediaType::Series));
                }
                Ok(_) => {}
                Err(e) => {
                    debug!("series lookup failed for {title:?}: {e}");
                    return None;
                }
            }
        }

        if request.media_kind.includes_movie() {
            match self.lookup_by_title(title, MediaType::Movie).await {
                Ok(record) if record.is_found() => {
                    if !Self::passes_filters(&record, request) {
                        return None;
                    }
                    return Some(Self::summary_from_record(&record, MediaType::Movie));
                }
                Ok(_) => {}
                Err(e) => debug!("movie lookup failed for {title:?}: {e}"),
            }
        }

        None
    }

    /// Seed-list path: pick the page slice of the curated titles and issue
    /// all point lookups concurrently, waiting for every outcome.
    async fn seed_discover(&self, list: ListKind, request: &DiscoverRequest) -> DiscoverPage {
        let titles = seed_titles(list, &request.language);
        let page = request.page.max(1);
        let start = (page as usize - 1) * SEED_PAGE_SIZE;
        let page_titles: &[&str] = if start < titles.len() {
            &titles[start..(start + SEED_PAGE_SIZE).min(titles.len())]
        } else {
            &[]
        };

        let lookups = page_titles
            .iter()
            .map(|title| self.resolve_seed_title(title, request));
        let mut results: Vec<MediaSummary> =
            join_all(lookups).await.into_iter().flatten().collect();

        results.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            "seed path resolved {} of {} titles for {list} (page {page})",
            results.len(),
            page_titles.len(),
        );

        DiscoverPage {
            page,
            total_pages: titles.len().div_ceil(SEED_PAGE_SIZE) as u32,
            total_results: results.len() as u64,
            results,
        }
    }

    /// Free-text search stubs for one media kind; degrades to empty.
    async fn search_stubs(
        &self,
        query: &str,
        media_type: MediaType,
        page: Option<u32>,
    ) -> Vec<SearchStub> {
        let type_param = Self::type_param(media_type);
        let page_param;
        let mut params = vec![("s", query), ("type", type_param)];
        if let Some(page) = page {
            page_param = page.to_string();
            params.push(("page", page_param.as_str()));
        }

        match self.bounded_get::<SearchResponse>(&params).await {
            Ok(response) if response.response == "True" => response.search,
            Ok(response) => {
                debug!(
                    "search returned no results for {query:?} ({type_param}): {}",
                    response.error.as_deref().unwrap_or("unknown")
                );
                Vec::new()
            }
            Err(e) => {
                warn!("search failed for {query:?} ({type_param}): {e}");
                Vec::new()
            }
        }
    }

    /// Category path: search per concrete media kind on the category's
    /// first keyword variant, detail-fetch a handful of hits, and keep the
    /// ones that pass both matchers.
    async fn category_search(&self, request: &DiscoverRequest) -> Vec<MediaSummary> {
        let keywords = category_keywords(&request.category);
        let Some(keyword) = keywords.first() else {
            return Vec::new();
        };

        let mut aggregated = Vec::new();
        for media_type in request.media_kind.concrete() {
            let stubs = self.search_stubs(keyword, *media_type, None).await;
            let details = join_all(
                stubs
                    .iter()
                    .take(CATEGORY_DETAIL_LIMIT)
                    .filter_map(|stub| stub.imdb_id.as_deref())
                    .map(|id| self.lookup_by_id(id, "short")),
            )
            .await;

            for outcome in details {
                match outcome {
                    Ok(record) if record.is_found() => {
                        if Self::passes_filters(&record, request) {
                            aggregated.push(Self::summary_from_record(&record, *media_type));
                        }
                    }
                    Ok(_) => {}
                    Err(e) => debug!("category detail fetch failed: {e}"),
                }
            }
        }

        aggregated
    }

    /// Decide whether category-search results preempt the seed list. Any
    /// hit wins: the results become a single unpaginated page. No hits
    /// yields None and the caller walks the seed list instead.
    pub(crate) fn category_page(mut results: Vec<MediaSummary>) -> Option<DiscoverPage> {
        if results.is_empty() {
            return None;
        }
        results.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Some(DiscoverPage {
            page: 1,
            total_pages: 1,
            total_results: results.len() as u64,
            results,
        })
    }
}

#[async_trait]
impl DiscoveryProvider for OmdbProvider {
    fn id(&self) -> &'static str {
        "omdb"
    }

    fn name(&self) -> &'static str {
        "Open Movie Database"
    }

    async fn discover(&self, list: ListKind, request: &DiscoverRequest) -> Result<DiscoverPage> {
        // The category path takes priority when it produces anything;
        // otherwise execution falls back to the seed list.
        if request.category != "all" {
            if let Some(page) = Self::category_page(self.category_search(request).await) {
                return Ok(page);
            }
        }

        Ok(self.seed_discover(list, request).await)
    }

    async fn search(&self, query: &str, request: &DiscoverRequest) -> Result<DiscoverPage> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(DiscoverPage::empty(1));
        }

        // The provider caps search pagination at 10 pages.
        let page = request.page.clamp(1, 10);

        let (tv_stubs, movie_stubs) = tokio::join!(
            async {
                if request.media_kind.includes_series() {
                    self.search_stubs(query, MediaType::Series, Some(page)).await
                } else {
                    Vec::new()
                }
            },
            async {
                if request.media_kind.includes_movie() {
                    self.search_stubs(query, MediaType::Movie, Some(page)).await
                } else {
                    Vec::new()
                }
            },
        );

        let stubs: Vec<SearchStub> = tv_stubs.into_iter().chain(movie_stubs).collect();
        let details = join_all(
            stubs
                .iter()
                .filter_map(|stub| stub.imdb_id.as_deref())
                .map(|id| self.lookup_by_id(id, "short")),
        )
        .await;

        let mut results: Vec<MediaSummary> = Vec::new();
        for outcome in details {
            let record = match outcome {
                Ok(record) if record.is_found() => record,
                Ok(_) => continue,
                Err(e) => {
                    debug!("search detail fetch failed: {e}");
                    continue;
                }
            };
            if !Self::passes_filters(&record, request) {
                continue;
            }

            let mut summary =
                Self::summary_from_record(&record, Self::record_media_type(&record));
            summary.release_date = Self::year_as_date(record.year.as_deref())
                .or_else(|| Self::year_as_date(record.released.as_deref()));
            if summary.id > 0 && !summary.title.is_empty() {
                results.push(summary);
            }
        }

        results.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total_results = results.len() as u64;
        Ok(DiscoverPage {
            page,
            total_pages: results.len().div_ceil(SEARCH_PAGE_SIZE) as u32,
            total_results,
            results,
        })
    }

    async fn title_detail(&self, media_type: MediaType, id: &str) -> Result<TitleDetail> {
        let external = ensure_external_id(id);
        let type_param = Self::type_param(media_type);
        let record: OmdbRecord = self
            .bounded_get(&[("i", external.as_str()), ("type", type_param), ("plot", "full")])
            .await?;

        if !record.is_found() {
            return Err(DiscoveryError::NotFound(
                record
                    .error
                    .unwrap_or_else(|| format!("{type_param} {external} not found")),
            ));
        }

        let summary = Self::summary_from_record(&record, media_type);

        // The provider has no cast metadata beyond a flat actor list and no
        // per-season breakdown; seasons are synthesized from the count.
        let cast = Self::split_list(record.actors.as_deref())
            .into_iter()
            .enumerate()
            .map(|(index, name)| CastMember {
                id: index as i64 + 1,
                name,
                character: String::new(),
                profile_url: None,
                order: index as i32,
            })
            .collect();

        let total_seasons = record
            .total_seasons
            .as_deref()
            .and_then(Self::parse_leading_number)
            .unwrap_or(0);
        let seasons = (1..=total_seasons)
            .map(|number| SeasonSummary {
                season_number: number,
                name: format!("Season {number}"),
                overview: String::new(),
                poster_url: None,
                air_date: None,
                episode_count: 0,
            })
            .collect();

        let runtime = record
            .runtime
            .as_deref()
            .and_then(Self::parse_leading_number);

        Ok(TitleDetail {
            summary,
            tagline: None,
            status: None,
            runtime,
            number_of_seasons: total_seasons,
            number_of_episodes: 0,
            cast,
            seasons,
        })
    }

    async fn season_detail(&self, series_id: &str, season: u32) -> Result<SeasonDetail> {
        let external = ensure_external_id(series_id);

        // Season listings are only addressable by title, so resolve it first.
        let series: OmdbRecord = self
            .bounded_get(&[("i", external.as_str()), ("type", "series")])
            .await?;
        if !series.is_found() {
            return Err(DiscoveryError::NotFound(
                series
                    .error
                    .unwrap_or_else(|| format!("series {external} not found")),
            ));
        }

        let season_param = season.to_string();
        let response: SeasonResponse = self
            .bounded_get(&[("t", series.title.as_str()), ("Season", season_param.as_str())])
            .await?;
        if response.response != "True" {
            return Err(DiscoveryError::NotFound(
                response
                    .error
                    .unwrap_or_else(|| format!("season {season} of {external} not found")),
            ));
        }

        let episodes: Vec<EpisodeSummary> = response
            .episodes
            .into_iter()
            .enumerate()
            .map(|(index, ep)| EpisodeSummary {
                episode_number: ep
                    .episode
                    .as_deref()
                    .and_then(Self::parse_leading_number)
                    .unwrap_or(index as u32 + 1),
                name: if ep.title.is_empty() {
                    format!("Episode {}", index + 1)
                } else {
                    ep.title
                },
                overview: String::new(),
                still_url: None,
                air_date: Self::non_na(ep.released.as_deref()),
                rating: Self::parse_rating(ep.imdb_rating.as_deref()),
                external_id: ep.imdb_id,
            })
            .collect();

        Ok(SeasonDetail {
            season_number: season,
            name: format!("Season {season}"),
            air_date: episodes.first().and_then(|ep| ep.air_date.clone()),
            episode_count: episodes.len() as u32,
            episodes,
        })
    }
}
