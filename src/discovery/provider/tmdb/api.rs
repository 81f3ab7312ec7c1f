//! Wire types for the rich provider's JSON responses.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<ListItem>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

impl ListResponse {
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// One entry of a list/discover/search response. Movies carry `title` and
/// `release_date`, series carry `name` and `first_air_date`.
#[derive(Debug, Deserialize)]
pub struct ListItem {
    pub id: i64,
    pub name: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub original_language: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    pub popularity: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CastCredit {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastCredit>,
}

#[derive(Debug, Deserialize)]
pub struct SeasonStub {
    pub season_number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub air_date: Option<String>,
    #[serde(default)]
    pub episode_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    pub id: i64,
    pub name: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub original_language: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    pub tagline: Option<String>,
    pub status: Option<String>,
    pub popularity: Option<f64>,
    pub credits: Option<Credits>,
    #[serde(default)]
    pub seasons: Vec<SeasonStub>,
}

#[derive(Debug, Deserialize)]
pub struct EpisodeItem {
    #[serde(default)]
    pub episode_number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    pub still_path: Option<String>,
    pub air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

#[derive(Debug, Deserialize)]
pub struct SeasonResponse {
    pub season_number: Option<u32>,
    #[serde(default)]
    pub name: String,
    pub air_date: Option<String>,
    #[serde(default)]
    pub episodes: Vec<EpisodeItem>,
}
