//! Wire types for the upstream movie metadata API. Absent fields are
//! tolerated everywhere; normalization decides the defaults.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieListResponse {
    #[serde(default)]
    pub results: Vec<MovieRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonMatch {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonSearchResponse {
    #[serde(default)]
    pub results: Vec<PersonMatch>,
}

/// Movie credits of a single person. Only cast credits are of interest;
/// crew credits are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonCreditsResponse {
    #[serde(default)]
    pub cast: Vec<MovieRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetailsRecord {
    pub id: u64,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditsResponse {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub results: Vec<VideoRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoRecord {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type")]
    #[serde(default)]
    pub video_type: String,
}
