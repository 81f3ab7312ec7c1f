use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    ApiResponse, ApiResult, Ctx,
    discovery::{
        DiscoverPage, DiscoverRequest, Discovery, DiscoveryError, ListKind, MediaKind,
        MediaSummary, tables::MOOD_GENRES,
    },
};

/// Discovery request parameters
#[derive(Debug, Deserialize)]
pub struct DiscoverQuery {
    /// List kind: trending, popular, top_rated, upcoming, now_playing
    pub list: String,
    /// Media kind filter: movie, tv, all (default: all)
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    /// Short language code or "all"
    pub language: Option<String>,
    /// Genre category keyword or "all"
    pub category: Option<String>,
    /// Explicit genre ids, comma-separated
    pub genres: Option<String>,
    /// Release year filter
    pub year: Option<String>,
    /// Page number (1-indexed)
    pub page: Option<u32>,
}

/// Search request parameters
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub language: Option<String>,
    pub category: Option<String>,
    pub page: Option<u32>,
}

/// Typeahead request parameters
#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    pub query: String,
}

/// One entry of the mood map
#[derive(Debug, Serialize)]
pub struct Mood {
    pub id: &'static str,
    pub genres: &'static [u32],
}

pub(crate) fn require_discovery(
    ctx: &Ctx,
) -> Result<&Discovery, (StatusCode, Json<ApiResponse<()>>)> {
    ctx.discovery.as_ref().ok_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse {
                code: 500,
                message: "Metadata provider is not configured".to_string(),
                data: None,
            }),
        )
    })
}

pub(crate) fn map_error(e: DiscoveryError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match e {
        DiscoveryError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DiscoveryError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ApiResponse {
            code: status.as_u16(),
            message: e.to_string(),
            data: None,
        }),
    )
}

fn parse_genre_ids(raw: Option<&str>) -> Vec<u32> {
    raw.map(|s| {
        s.split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect()
    })
    .unwrap_or_default()
}

/// Fetch one page of a discovery list
/// GET /api/discover?list=popular&type=all&language=all&category=all&page=1
async fn discover(
    State(ctx): State<Ctx>,
    Query(params): Query<DiscoverQuery>,
) -> ApiResult<DiscoverPage> {
    let discovery = require_discovery(&ctx)?;

    let list = ListKind::parse(&params.list).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse {
                code: 400,
                message: format!("unknown list kind: {}", params.list),
                data: None,
            }),
        )
    })?;

    let request = DiscoverRequest {
        media_kind: MediaKind::parse(params.media_type.as_deref().unwrap_or("all")),
        language: params.language.unwrap_or_else(|| "all".to_string()),
        category: params.category.unwrap_or_else(|| "all".to_string()),
        genre_ids: parse_genre_ids(params.genres.as_deref()),
        year: params.year,
        page: params.page.unwrap_or(1).max(1),
    };

    let page = discovery
        .discover(list, &request)
        .await
        .map_err(map_error)?;
    Ok(Json(ApiResponse::ok(page)))
}

/// Free-text search
/// GET /api/search?query=...&type=all&page=1
async fn search(
    State(ctx): State<Ctx>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<DiscoverPage> {
    let discovery = require_discovery(&ctx)?;

    if params.query.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse {
                code: 400,
                message: "query is required".to_string(),
                data: None,
            }),
        ));
    }

    let request = DiscoverRequest {
        media_kind: MediaKind::parse(params.media_type.as_deref().unwrap_or("all")),
        language: params.language.unwrap_or_else(|| "all".to_string()),
        category: params.category.unwrap_or_else(|| "all".to_string()),
        page: params.page.unwrap_or(1).max(1),
        ..Default::default()
    };

    let page = discovery
        .search(&params.query, &request)
        .await
        .map_err(map_error)?;
    Ok(Json(ApiResponse::ok(page)))
}

/// Typeahead suggestions
/// GET /api/search/suggestions?query=...
async fn suggestions(
    State(ctx): State<Ctx>,
    Query(params): Query<SuggestionsQuery>,
) -> ApiResult<Vec<MediaSummary>> {
    let discovery = require_discovery(&ctx)?;
    let results = discovery
        .suggestions(&params.query)
        .await
        .map_err(map_error)?;
    Ok(Json(ApiResponse::ok(results)))
}

/// Static mood-to-genre map
/// GET /api/moods
async fn moods() -> Json<ApiResponse<Vec<Mood>>> {
    let moods = MOOD_GENRES
        .iter()
        .map(|&(id, genres)| Mood { id, genres })
        .collect();
    Json(ApiResponse::ok(moods))
}

pub fn mount() -> Router<Ctx> {
    Router::new()
        .route("/api/discover", get(discover))
        .route("/api/search", get(search))
        .route("/api/search/suggestions", get(suggestions))
        .route("/api/moods", get(moods))
}
