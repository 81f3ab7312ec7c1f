use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    ApiResponse, ApiResult, Ctx,
    discovery::{MediaType, SeasonDetail, TitleDetail},
    routes::api::discover::{map_error, require_discovery},
};

fn parse_media_type(raw: &str) -> Option<MediaType> {
    match raw {
        "movie" => Some(MediaType::Movie),
        "tv" | "series" => Some(MediaType::Series),
        _ => None,
    }
}

/// Full detail for one title
/// GET /api/title/{media_type}/{id}
async fn title_detail(
    State(ctx): State<Ctx>,
    Path((media_type, id)): Path<(String, String)>,
) -> ApiResult<TitleDetail> {
    let discovery = require_discovery(&ctx)?;

    let media_type = parse_media_type(&media_type).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse {
                code: 400,
                message: format!("unknown media type: {media_type}"),
                data: None,
            }),
        )
    })?;

    let detail = discovery
        .title_detail(media_type, &id)
        .await
        .map_err(map_error)?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// Episode listing for one season
/// GET /api/title/series/{id}/season/{season}
async fn season_detail(
    State(ctx): State<Ctx>,
    Path((id, season)): Path<(String, u32)>,
) -> ApiResult<SeasonDetail> {
    let discovery = require_discovery(&ctx)?;
    let detail = discovery
        .season_detail(&id, season)
        .await
        .map_err(map_error)?;
    Ok(Json(ApiResponse::ok(detail)))
}

pub fn mount() -> Router<Ctx> {
    Router::new()
        .route("/api/title/{media_type}/{id}", get(title_detail))
        .route("/api/title/series/{id}/season/{season}", get(season_detail))
}
