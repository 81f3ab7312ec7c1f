//! Wire types for the sparse provider's JSON responses.
//!
//! Every field arrives as a string; absent values are the literal "N/A".
//! Success is signalled in-band by `Response: "True"` rather than by HTTP
//! status.

use serde::Deserialize;

/// Full record returned by title and id point lookups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbRecord {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type")]
    pub media_type: Option<String>,
    #[serde(rename = "totalSeasons")]
    pub total_seasons: Option<String>,
}

impl OmdbRecord {
    /// In-band success marker, with an id present.
    pub fn is_found(&self) -> bool {
        self.response == "True" && self.imdb_id.is_some()
    }
}

/// Stub from the free-text search endpoint; full detail needs a follow-up
/// id lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchStub {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type")]
    pub media_type: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchStub>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeasonEpisodeStub {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Episode")]
    pub episode: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeasonResponse {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Episodes", default)]
    pub episodes: Vec<SeasonEpisodeStub>,
}
