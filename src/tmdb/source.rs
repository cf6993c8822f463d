use async_trait::async_trait;

use super::types::*;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Upstream request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Upstream returned status {0}")]
    Status(u16),
    #[error("Failed to parse upstream response: {0}")]
    Parse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The upstream movie metadata operations the service depends on. The
/// classifier and handlers only see this trait, never the concrete client.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Discovery filtered by original language, optionally scoped to an
    /// origin country, sorted by popularity.
    async fn discover_by_language(
        &self,
        language: &str,
        origin_country: Option<&str>,
    ) -> ApiResult<Vec<MovieRecord>>;

    async fn search_person(&self, query: &str) -> ApiResult<Vec<PersonMatch>>;

    /// Cast credits only; crew credits are excluded upstream of this call.
    async fn person_movie_credits(&self, person_id: u64) -> ApiResult<Vec<MovieRecord>>;

    async fn search_movie(&self, query: &str) -> ApiResult<Vec<MovieRecord>>;

    async fn movie_recommendations(&self, movie_id: u64) -> ApiResult<Vec<MovieRecord>>;

    async fn popular_movies(&self) -> ApiResult<Vec<MovieRecord>>;

    /// Popularity-sorted discovery scoped to one origin country.
    async fn popular_by_country(&self, country: &str) -> ApiResult<Vec<MovieRecord>>;

    async fn movie_details(&self, movie_id: u64) -> ApiResult<MovieDetailsRecord>;

    async fn movie_credits(&self, movie_id: u64) -> ApiResult<CreditsResponse>;

    async fn movie_videos(&self, movie_id: u64) -> ApiResult<Vec<VideoRecord>>;
}
