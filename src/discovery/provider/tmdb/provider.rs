use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::warn;

use super::api::{DetailResponse, ListItem, ListResponse, SeasonResponse};
use crate::discovery::{
    DiscoverPage, DiscoverRequest, DiscoveryError, ListKind, MediaKind, MediaSummary, MediaType,
    Result, SeasonDetail, TitleDetail,
    provider::{DiscoveryProvider, HttpClient},
    tables::{CATEGORY_TO_GENRE_IDS, GENRE_NAMES},
    types::{CastMember, EpisodeSummary, SeasonSummary},
};

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Adapter for the rich provider: native filtered discovery, pagination and
/// structured genre/language fields.
pub struct TmdbProvider {
    client: HttpClient,
    /// v3 API key passed as a query parameter. None when the credential is
    /// a v4 bearer token, which rides on the client instead.
    api_key: Option<String>,
}

impl TmdbProvider {
    /// Create a provider from a credential. v4 tokens are recognized by
    /// their JWT prefix and sent as a bearer header; anything else is
    /// treated as a v3 key.
    pub fn new(credential: impl Into<String>) -> Self {
        let credential = credential.into();
        if credential.starts_with("eyJ") {
            Self {
                client: HttpClient::new(TMDB_BASE_URL).with_bearer_token(credential),
                api_key: None,
            }
        } else {
            Self {
                client: HttpClient::new(TMDB_BASE_URL),
                api_key: Some(credential),
            }
        }
    }

    fn image_url(path: Option<&str>, size: &str) -> Option<String> {
        path.map(|p| format!("{TMDB_IMAGE_BASE}/{size}{p}"))
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        extra_params: &[(&str, String)],
    ) -> Result<T> {
        let mut params: Vec<(&str, &str)> = extra_params
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        if let Some(ref key) = self.api_key {
            params.push(("api_key", key.as_str()));
        }

        self.client.get_with_params(endpoint, &params).await
    }

    /// Genre ids active for this request: explicit ids win, otherwise the
    /// category keyword is translated through the static table.
    fn active_genre_ids(request: &DiscoverRequest) -> Vec<u32> {
        if !request.genre_ids.is_empty() {
            return request.genre_ids.clone();
        }
        if request.category != "all" {
            if let Some(ids) = CATEGORY_TO_GENRE_IDS.get(request.category.to_lowercase().as_str()) {
                return ids.to_vec();
            }
        }
        Vec::new()
    }

    /// Endpoint and query parameters for one list fetch: canned list
    /// endpoints when no filter survives genre translation, the parametric
    /// discovery endpoint otherwise.
    pub(crate) fn list_endpoint(
        list: ListKind,
        media_type: MediaType,
        request: &DiscoverRequest,
    ) -> (String, Vec<(&'static str, String)>) {
        let kind = media_type.to_string();
        let genre_ids = Self::active_genre_ids(request);
        let filtered = request.language != "all" || !genre_ids.is_empty();

        let mut params: Vec<(&'static str, String)> = vec![("page", request.page.to_string())];

        let endpoint = if filtered {
            if request.language != "all" {
                params.push(("with_original_language", request.language.clone()));
            }
            if !genre_ids.is_empty() {
                let joined = genre_ids
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join("|");
                params.push(("with_genres", joined));
            }
            if let Some(ref year) = request.year {
                match media_type {
                    MediaType::Movie => params.push(("primary_release_year", year.clone())),
                    MediaType::Series => params.push(("first_air_date_year", year.clone())),
                }
            }

            let today = Utc::now().date_naive();
            match list {
                ListKind::TopRated => {
                    params.push(("sort_by", "vote_average.desc".to_string()));
                    params.push(("vote_count.gte", "200".to_string()));
                }
                ListKind::Upcoming => {
                    params.push(("sort_by", "popularity.desc".to_string()));
                    let field = match media_type {
                        MediaType::Movie => "primary_release_date.gte",
                        MediaType::Series => "first_air_date.gte",
                    };
                    params.push((field, today.to_string()));
                }
                ListKind::NowPlaying => {
                    params.push(("sort_by", "popularity.desc".to_string()));
                    let month_ago = today - Duration::days(30);
                    let (gte, lte) = match media_type {
                        MediaType::Movie => {
                            ("primary_release_date.gte", "primary_release_date.lte")
                        }
                        MediaType::Series => ("first_air_date.gte", "first_air_date.lte"),
                    };
                    params.push((gte, month_ago.to_string()));
                    params.push((lte, today.to_string()));
                }
                ListKind::Trending | ListKind::Popular => {
                    params.push(("sort_by", "popularity.desc".to_string()));
                }
            }

            format!("/discover/{kind}")
        } else {
            match list {
                ListKind::Trending => format!("/trending/{kind}/week"),
                ListKind::Popular => format!("/{kind}/popular"),
                ListKind::TopRated => format!("/{kind}/top_rated"),
                ListKind::Upcoming => match media_type {
                    MediaType::Movie => "/movie/upcoming".to_string(),
                    MediaType::Series => "/tv/on_the_air".to_string(),
                },
                ListKind::NowPlaying => match media_type {
                    MediaType::Movie => "/movie/now_playing".to_string(),
                    MediaType::Series => "/tv/airing_today".to_string(),
                },
            }
        };

        (endpoint, params)
    }

    /// One list fetch for a concrete media type. Upstream failures degrade
    /// to an empty response.
    async fn fetch_list(
        &self,
        list: ListKind,
        media_type: MediaType,
        request: &DiscoverRequest,
    ) -> ListResponse {
        let (endpoint, params) = Self::list_endpoint(list, media_type, request);
        match self.request::<ListResponse>(&endpoint, &params).await {
            Ok(response) => response,
            Err(e) => {
                // Degrades to empty; callers cannot distinguish "provider
                // error" from "no matches" without the logs.
                warn!("list fetch failed for {endpoint}: {e}");
                ListResponse::empty()
            }
        }
    }

    fn summary_from_item(item: ListItem, media_type: MediaType) -> MediaSummary {
        let rating = item.vote_average;
        let genres = item
            .genre_ids
            .iter()
            .filter_map(|id| GENRE_NAMES.get(id).map(|name| (*name).to_string()))
            .collect();

        MediaSummary {
            id: item.id,
            external_id: None,
            media_type,
            title: item.title.or(item.name).unwrap_or_default(),
            overview: item.overview,
            poster_url: Self::image_url(item.poster_path.as_deref(), "w500"),
            backdrop_url: Self::image_url(item.backdrop_path.as_deref(), "w780"),
            rating,
            vote_count: item.vote_count,
            release_date: item.release_date.or(item.first_air_date),
            year: None,
            language: item.original_language.unwrap_or_default(),
            genres,
            popularity: item.popularity.unwrap_or(rating),
        }
    }

    async fn search_kind(
        &self,
        media_type: MediaType,
        query: &str,
        request: &DiscoverRequest,
    ) -> ListResponse {
        let mut params: Vec<(&str, String)> = vec![
            ("query", query.trim().to_string()),
            ("page", request.page.to_string()),
            ("include_adult", "false".to_string()),
        ];
        if request.language != "all" {
            params.push(("language", request.language.clone()));
        }

        let endpoint = format!("/search/{media_type}");
        match self.request::<ListResponse>(&endpoint, &params).await {
            Ok(response) => response,
            Err(e) => {
                warn!("search failed for {endpoint}: {e}");
                ListResponse::empty()
            }
        }
    }

    fn detail_from_response(detail: DetailResponse, media_type: MediaType) -> TitleDetail {
        let rating = detail.vote_average;
        let summary = MediaSummary {
            id: detail.id,
            external_id: None,
            media_type,
            title: detail.title.or(detail.name).unwrap_or_default(),
            overview: detail.overview,
            poster_url: Self::image_url(detail.poster_path.as_deref(), "w500"),
            backdrop_url: Self::image_url(detail.backdrop_path.as_deref(), "w780"),
            rating,
            vote_count: detail.vote_count,
            release_date: detail.release_date.or(detail.first_air_date),
            year: None,
            language: detail.original_language.unwrap_or_default(),
            genres: detail.genres.into_iter().map(|g| g.name).collect(),
            popularity: detail.popularity.unwrap_or(rating),
        };

        let cast = detail
            .credits
            .map(|credits| {
                credits
                    .cast
                    .into_iter()
                    .take(20)
                    .map(|c| CastMember {
                        id: c.id,
                        name: c.name,
                        character: c.character,
                        profile_url: Self::image_url(c.profile_path.as_deref(), "w200"),
                        order: c.order,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let seasons = detail
            .seasons
            .into_iter()
            .map(|s| SeasonSummary {
                season_number: s.season_number,
                name: s.name,
                overview: s.overview,
                poster_url: Self::image_url(s.poster_path.as_deref(), "w300"),
                air_date: s.air_date,
                episode_count: s.episode_count,
            })
            .collect();

        TitleDetail {
            summary,
            tagline: detail.tagline,
            status: detail.status,
            runtime: detail.runtime.or_else(|| detail.episode_run_time.first().copied()),
            number_of_seasons: detail.number_of_seasons.unwrap_or(0),
            number_of_episodes: detail.number_of_episodes.unwrap_or(0),
            cast,
            seasons,
        }
    }

    fn map_not_found(e: DiscoveryError, what: String) -> DiscoveryError {
        match e {
            DiscoveryError::Api { status: 404, .. } => DiscoveryError::NotFound(what),
            other => other,
        }
    }
}

#[async_trait]
impl DiscoveryProvider for TmdbProvider {
    fn id(&self) -> &'static str {
        "tmdb"
    }

    fn name(&self) -> &'static str {
        "The Movie Database"
    }

    async fn discover(&self, list: ListKind, request: &DiscoverRequest) -> Result<DiscoverPage> {
        match request.media_kind {
            MediaKind::Both => {
                // One call per concrete kind, issued concurrently. The
                // merged set is re-sorted by rating for stable ordering
                // across two disjoint result spaces.
                let (tv, movies) = tokio::join!(
                    self.fetch_list(list, MediaType::Series, request),
                    self.fetch_list(list, MediaType::Movie, request),
                );

                let total_pages = tv.total_pages.max(movies.total_pages);
                let total_results = tv.total_results + movies.total_results;

                let mut results: Vec<MediaSummary> = tv
                    .results
                    .into_iter()
                    .map(|item| Self::summary_from_item(item, MediaType::Series))
                    .chain(
                        movies
                            .results
                            .into_iter()
                            .map(|item| Self::summary_from_item(item, MediaType::Movie)),
                    )
                    .collect();
                results.sort_by(|a, b| {
                    b.rating
                        .partial_cmp(&a.rating)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });

                Ok(DiscoverPage {
                    page: request.page,
                    results,
                    total_pages,
                    total_results,
                })
            }
            kind => {
                let media_type = if kind.includes_series() {
                    MediaType::Series
                } else {
                    MediaType::Movie
                };
                let response = self.fetch_list(list, media_type, request).await;
                let mut page = DiscoverPage {
                    page: request.page,
                    total_pages: response.total_pages,
                    total_results: response.total_results,
                    results: response
                        .results
                        .into_iter()
                        .map(|item| Self::summary_from_item(item, media_type))
                        .collect(),
                };
                page.sort_by_rating();
                Ok(page)
            }
        }
    }

    async fn search(&self, query: &str, request: &DiscoverRequest) -> Result<DiscoverPage> {
        if query.trim().is_empty() {
            return Ok(DiscoverPage::empty(1));
        }

        let (tv, movies) = tokio::join!(
            async {
                if request.media_kind.includes_series() {
                    self.search_kind(MediaType::Series, query, request).await
                } else {
                    ListResponse::empty()
                }
            },
            async {
                if request.media_kind.includes_movie() {
                    self.search_kind(MediaType::Movie, query, request).await
                } else {
                    ListResponse::empty()
                }
            },
        );

        let total_pages = tv.total_pages.max(movies.total_pages);
        let total_results = tv.total_results + movies.total_results;

        let genre_filter = Self::active_genre_ids(request);
        let mut results: Vec<MediaSummary> = Vec::new();
        for (response, media_type) in [(tv, MediaType::Series), (movies, MediaType::Movie)] {
            for item in response.results {
                if !genre_filter.is_empty()
                    && !item.genre_ids.iter().any(|id| genre_filter.contains(id))
                {
                    continue;
                }
                results.push(Self::summary_from_item(item, media_type));
            }
        }
        results.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(DiscoverPage {
            page: request.page,
            results,
            total_pages,
            total_results,
        })
    }

    async fn suggestions(&self, query: &str) -> Result<Vec<MediaSummary>> {
        if query.trim().len() < 2 {
            return Ok(Vec::new());
        }

        let request = DiscoverRequest::default();
        let (tv, movies) = tokio::join!(
            self.search_kind(MediaType::Series, query, &request),
            self.search_kind(MediaType::Movie, query, &request),
        );

        let mut combined: Vec<MediaSummary> = tv
            .results
            .into_iter()
            .take(5)
            .map(|item| Self::summary_from_item(item, MediaType::Series))
            .chain(
                movies
                    .results
                    .into_iter()
                    .take(5)
                    .map(|item| Self::summary_from_item(item, MediaType::Movie)),
            )
            .collect();
        combined.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        combined.truncate(8);

        Ok(combined)
    }

    async fn title_detail(&self, media_type: MediaType, id: &str) -> Result<TitleDetail> {
        let endpoint = format!("/{media_type}/{id}");
        let params = [(
            "append_to_response",
            "credits,videos,images".to_string(),
        )];

        let detail: DetailResponse = self
            .request(&endpoint, &params)
            .await
            .map_err(|e| Self::map_not_found(e, format!("{media_type} {id}")))?;

        Ok(Self::detail_from_response(detail, media_type))
    }

    async fn season_detail(&self, series_id: &str, season: u32) -> Result<SeasonDetail> {
        let endpoint = format!("/tv/{series_id}/season/{season}");
        let response: SeasonResponse = self
            .request(&endpoint, &[])
            .await
            .map_err(|e| Self::map_not_found(e, format!("series {series_id} season {season}")))?;

        let episodes: Vec<EpisodeSummary> = response
            .episodes
            .into_iter()
            .map(|ep| EpisodeSummary {
                episode_number: ep.episode_number,
                name: ep.name,
                overview: ep.overview,
                still_url: Self::image_url(ep.still_path.as_deref(), "w300"),
                air_date: ep.air_date,
                rating: ep.vote_average,
                external_id: None,
            })
            .collect();

        Ok(SeasonDetail {
            season_number: response.season_number.unwrap_or(season),
            name: if response.name.is_empty() {
                format!("Season {season}")
            } else {
                response.name
            },
            air_date: response.air_date,
            episode_count: episodes.len() as u32,
            episodes,
        })
    }
}
