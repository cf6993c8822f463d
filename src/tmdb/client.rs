use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::TmdbConfig;

use super::source::{ApiError, ApiResult, MovieSource};
use super::types::*;

pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.baseurl.clone(),
            api_key,
        }
    }

    fn url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}?api_key={}", self.base_url, path, self.api_key);
        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> ApiResult<T> {
        let url = self.url(path, params);
        debug!(path = path, "upstream request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn discover_by_language(
        &self,
        language: &str,
        origin_country: Option<&str>,
    ) -> ApiResult<Vec<MovieRecord>> {
        let mut params = vec![
            ("with_original_language", language),
            ("sort_by", "popularity.desc"),
        ];
        if let Some(country) = origin_country {
            params.insert(0, ("with_origin_country", country));
        }
        let list: MovieListResponse = self.fetch_json("/discover/movie", &params).await?;
        Ok(list.results)
    }

    async fn search_person(&self, query: &str) -> ApiResult<Vec<PersonMatch>> {
        let list: PersonSearchResponse = self
            .fetch_json("/search/person", &[("query", query)])
            .await?;
        Ok(list.results)
    }

    async fn person_movie_credits(&self, person_id: u64) -> ApiResult<Vec<MovieRecord>> {
        let credits: PersonCreditsResponse = self
            .fetch_json(&format!("/person/{}/movie_credits", person_id), &[])
            .await?;
        Ok(credits.cast)
    }

    async fn search_movie(&self, query: &str) -> ApiResult<Vec<MovieRecord>> {
        let list: MovieListResponse = self
            .fetch_json("/search/movie", &[("query", query)])
            .await?;
        Ok(list.results)
    }

    async fn movie_recommendations(&self, movie_id: u64) -> ApiResult<Vec<MovieRecord>> {
        let list: MovieListResponse = self
            .fetch_json(&format!("/movie/{}/recommendations", movie_id), &[])
            .await?;
        Ok(list.results)
    }

    async fn popular_movies(&self) -> ApiResult<Vec<MovieRecord>> {
        let list: MovieListResponse = self.fetch_json("/movie/popular", &[]).await?;
        Ok(list.results)
    }

    async fn popular_by_country(&self, country: &str) -> ApiResult<Vec<MovieRecord>> {
        let list: MovieListResponse = self
            .fetch_json(
                "/discover/movie",
                &[
                    ("with_origin_country", country),
                    ("sort_by", "popularity.desc"),
                ],
            )
            .await?;
        Ok(list.results)
    }

    async fn movie_details(&self, movie_id: u64) -> ApiResult<MovieDetailsRecord> {
        self.fetch_json(&format!("/movie/{}", movie_id), &[]).await
    }

    async fn movie_credits(&self, movie_id: u64) -> ApiResult<CreditsResponse> {
        self.fetch_json(&format!("/movie/{}/credits", movie_id), &[])
            .await
    }

    async fn movie_videos(&self, movie_id: u64) -> ApiResult<Vec<VideoRecord>> {
        let list: VideoListResponse = self
            .fetch_json(&format!("/movie/{}/videos", movie_id), &[])
            .await?;
        Ok(list.results)
    }
}
