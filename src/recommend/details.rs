//! Aggregated detail view for a single movie: core details, credits and
//! videos fetched concurrently and joined into one shape. A failure in any
//! of the three calls fails the aggregate.

use serde::Serialize;

use crate::config::TmdbConfig;
use crate::tmdb::{ApiResult, MovieSource};

pub const CAST_LIMIT: usize = 8;

const TRAILER_TYPE: &str = "Trailer";
const TRAILER_SITE: &str = "YouTube";

#[derive(Debug, Clone, Serialize)]
pub struct MovieDetails {
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    pub runtime: String,
    pub genres: Vec<String>,
    pub cast: Vec<CastEntry>,
    #[serde(rename = "trailerKey")]
    pub trailer_key: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CastEntry {
    pub name: String,
    pub photo: Option<String>,
}

pub async fn fetch_details(
    source: &dyn MovieSource,
    movie_id: u64,
    tmdb: &TmdbConfig,
) -> ApiResult<MovieDetails> {
    let (details, credits, videos) = tokio::try_join!(
        source.movie_details(movie_id),
        source.movie_credits(movie_id),
        source.movie_videos(movie_id),
    )?;

    // First matching video in upstream order; no further tie-breaking.
    let trailer = videos
        .into_iter()
        .find(|v| v.video_type == TRAILER_TYPE && v.site == TRAILER_SITE);

    Ok(MovieDetails {
        imdb_rating: match details.vote_average {
            Some(rating) if rating > 0.0 => format!("{:.1}", rating),
            _ => "N/A".to_string(),
        },
        runtime: match details.runtime {
            Some(minutes) if minutes > 0 => format!("{} min", minutes),
            _ => "N/A".to_string(),
        },
        genres: details.genres.into_iter().map(|g| g.name).collect(),
        cast: credits
            .cast
            .into_iter()
            .take(CAST_LIMIT)
            .map(|member| CastEntry {
                name: member.name,
                photo: member
                    .profile_path
                    .map(|p| format!("{}{}", tmdb.profile_base, p)),
            })
            .collect(),
        trailer_key: trailer.map(|v| v.key),
    })
}
