use serde::{Deserialize, Serialize};

/// Resolved media classification. Every record leaving the aggregation layer
/// carries one of these; there is no "unknown" variant on the output side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    #[serde(rename = "movie")]
    Movie,
    #[serde(rename = "tv")]
    Series,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "tv"),
        }
    }
}

/// Requested media kind filter. `Both` fans out to one call per concrete
/// kind and merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaKind {
    Movie,
    Series,
    #[default]
    Both,
}

impl MediaKind {
    pub fn includes_movie(self) -> bool {
        matches!(self, Self::Movie | Self::Both)
    }

    pub fn includes_series(self) -> bool {
        matches!(self, Self::Series | Self::Both)
    }

    /// Concrete types covered by this kind, series first. The sparse
    /// adapter relies on this ordering for its lookup short-circuit.
    pub fn concrete(self) -> &'static [MediaType] {
        match self {
            Self::Movie => &[MediaType::Movie],
            Self::Series => &[MediaType::Series],
            Self::Both => &[MediaType::Series, MediaType::Movie],
        }
    }

    /// Parse the wire spelling used by the UI ("movie", "tv", "all").
    pub fn parse(s: &str) -> Self {
        match s {
            "movie" => Self::Movie,
            "tv" | "series" => Self::Series,
            _ => Self::Both,
        }
    }
}

/// Requested list category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Trending,
    Popular,
    TopRated,
    Upcoming,
    NowPlaying,
}

impl ListKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::Upcoming => "upcoming",
            Self::NowPlaying => "now_playing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "trending" => Some(Self::Trending),
            "popular" => Some(Self::Popular),
            "top_rated" => Some(Self::TopRated),
            "upcoming" => Some(Self::Upcoming),
            "now_playing" => Some(Self::NowPlaying),
            _ => None,
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for a discovery or search request.
#[derive(Debug, Clone)]
pub struct DiscoverRequest {
    pub media_kind: MediaKind,
    /// Short language code ("hi", "ko", ...) or "all".
    pub language: String,
    /// Genre category keyword ("sci-fi", "drama", ...) or "all".
    pub category: String,
    /// Explicit rich-provider genre ids. Takes precedence over `category`.
    pub genre_ids: Vec<u32>,
    /// Release year filter (rich provider only).
    pub year: Option<String>,
    /// 1-indexed page.
    pub page: u32,
}

impl Default for DiscoverRequest {
    fn default() -> Self {
        Self {
            media_kind: MediaKind::Both,
            language: "all".to_string(),
            category: "all".to_string(),
            genre_ids: Vec::new(),
            year: None,
            page: 1,
        }
    }
}

/// Normalized result record, provider-agnostic. The uniformity of this shape
/// across both backends is the reason the aggregation layer exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSummary {
    /// Canonical numeric id. `0` means the source id could not be resolved;
    /// the aggregator filters such records out before returning.
    pub id: i64,
    /// Sparse-provider native identifier, retained for detail lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub media_type: MediaType,
    pub title: String,
    pub overview: String,
    /// None or a syntactically valid absolute https:// URL.
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    /// 0-10 scale.
    pub rating: f64,
    pub vote_count: u64,
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Free-text language as reported by the source, not a code.
    pub language: String,
    pub genres: Vec<String>,
    /// Sort-ordering score only. Derived from rating when the source has no
    /// native popularity.
    pub popularity: f64,
}

/// One page of normalized results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverPage {
    pub page: u32,
    pub results: Vec<MediaSummary>,
    pub total_pages: u32,
    pub total_results: u64,
}

impl DiscoverPage {
    /// Empty page, the degraded shape for upstream failures.
    pub fn empty(page: u32) -> Self {
        Self {
            page,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }

    /// Sort results non-increasing by rating. Imposed deterministically
    /// after fan-out; request completion order carries no meaning.
    pub fn sort_by_rating(&mut self) {
        self.results
            .sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(std::cmp::Ordering::Equal));
    }
}

/// Cast entry on a detail record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    pub character: String,
    pub profile_url: Option<String>,
    pub order: i32,
}

/// Season stub on a series detail record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season_number: u32,
    pub name: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub air_date: Option<String>,
    pub episode_count: u32,
}

/// Full detail record for a single title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleDetail {
    #[serde(flatten)]
    pub summary: MediaSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    pub number_of_seasons: u32,
    pub number_of_episodes: u32,
    pub cast: Vec<CastMember>,
    pub seasons: Vec<SeasonSummary>,
}

/// Episode entry in a season listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub episode_number: u32,
    pub name: String,
    pub overview: String,
    pub still_url: Option<String>,
    pub air_date: Option<String>,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Episode listing for one season of a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonDetail {
    pub season_number: u32,
    pub name: String,
    pub air_date: Option<String>,
    pub episode_count: u32,
    pub episodes: Vec<EpisodeSummary>,
}
