//! Turns a free-text query into a list of upstream movie records by running
//! an ordered chain of lookup strategies. The first strategy that yields a
//! non-empty result set wins; later strategies are never consulted.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use crate::tmdb::{ApiResult, MovieRecord, MovieSource};

use super::language;

/// Country filter applied to regional discovery and the country half of the
/// popularity fallback.
pub const ORIGIN_COUNTRY: &str = "IN";

/// Minimum query length (after trimming) before any upstream call is made.
/// Shorter input yields an empty result, not an error.
pub const MIN_QUERY_LEN: usize = 2;

static FILLER_WORDS: OnceLock<Regex> = OnceLock::new();

fn filler_words() -> &'static Regex {
    FILLER_WORDS.get_or_init(|| {
        Regex::new(r"(?i)\b(movies|movie|films|film|cinema|list)\b").unwrap()
    })
}

#[async_trait]
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns the records this strategy can produce for the query, or an
    /// empty list when the strategy does not apply.
    async fn attempt(&self, source: &dyn MovieSource, query: &str) -> ApiResult<Vec<MovieRecord>>;
}

/// Discovery scoped to one of the regional languages named in the query.
pub struct RegionalLanguage;

#[async_trait]
impl Strategy for RegionalLanguage {
    fn name(&self) -> &'static str {
        "regional-language"
    }

    async fn attempt(&self, source: &dyn MovieSource, query: &str) -> ApiResult<Vec<MovieRecord>> {
        match language::match_language(query, language::REGIONAL_LANGUAGES) {
            Some(code) => source.discover_by_language(code, Some(ORIGIN_COUNTRY)).await,
            None => Ok(Vec::new()),
        }
    }
}

/// Discovery scoped to a world language named in the query, no country filter.
pub struct WorldLanguage;

#[async_trait]
impl Strategy for WorldLanguage {
    fn name(&self) -> &'static str {
        "world-language"
    }

    async fn attempt(&self, source: &dyn MovieSource, query: &str) -> ApiResult<Vec<MovieRecord>> {
        match language::match_language(query, language::WORLD_LANGUAGES) {
            Some(code) => source.discover_by_language(code, None).await,
            None => Ok(Vec::new()),
        }
    }
}

/// Treats the query as a person name (after stripping filler words like
/// "movies") and returns the first matching person's cast credits.
pub struct PersonCredits;

#[async_trait]
impl Strategy for PersonCredits {
    fn name(&self) -> &'static str {
        "person-credits"
    }

    async fn attempt(&self, source: &dyn MovieSource, query: &str) -> ApiResult<Vec<MovieRecord>> {
        let cleaned = filler_words().replace_all(query, "");
        let matches = source.search_person(cleaned.as_ref()).await?;
        match matches.first() {
            Some(person) => source.person_movie_credits(person.id).await,
            None => Ok(Vec::new()),
        }
    }
}

/// Treats the query as a movie title and returns the recommendation list of
/// the first title match.
pub struct TitleRecommendations;

#[async_trait]
impl Strategy for TitleRecommendations {
    fn name(&self) -> &'static str {
        "title-recommendations"
    }

    async fn attempt(&self, source: &dyn MovieSource, query: &str) -> ApiResult<Vec<MovieRecord>> {
        let matches = source.search_movie(query).await?;
        match matches.first() {
            Some(movie) => source.movie_recommendations(movie.id).await,
            None => Ok(Vec::new()),
        }
    }
}

/// Last resort: country-scoped and global popularity lists, fetched
/// concurrently and concatenated (country list first). Duplicates are left
/// for the normalizer.
pub struct PopularFallback;

#[async_trait]
impl Strategy for PopularFallback {
    fn name(&self) -> &'static str {
        "popular-fallback"
    }

    async fn attempt(&self, source: &dyn MovieSource, _query: &str) -> ApiResult<Vec<MovieRecord>> {
        let (mut country, global) = tokio::try_join!(
            source.popular_by_country(ORIGIN_COUNTRY),
            source.popular_movies(),
        )?;
        country.extend(global);
        Ok(country)
    }
}

fn strategies() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(RegionalLanguage),
        Box::new(WorldLanguage),
        Box::new(PersonCredits),
        Box::new(TitleRecommendations),
        Box::new(PopularFallback),
    ]
}

/// Classifies a raw user query and returns the winning strategy's records.
/// Any upstream failure aborts the whole chain; there are no partial results.
pub async fn classify(source: &dyn MovieSource, raw_query: &str) -> ApiResult<Vec<MovieRecord>> {
    let query = raw_query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        debug!("query too short, skipping upstream lookup");
        return Ok(Vec::new());
    }

    for strategy in strategies() {
        let results = strategy.attempt(source, &query).await?;
        if !results.is_empty() {
            debug!(
                strategy = strategy.name(),
                count = results.len(),
                "query classified"
            );
            return Ok(results);
        }
    }

    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::tmdb::{ApiError, CreditsResponse, MovieDetailsRecord, PersonMatch, VideoRecord};

    fn movie(id: u64) -> MovieRecord {
        MovieRecord {
            id,
            title: format!("movie-{}", id),
            overview: None,
            release_date: None,
            poster_path: None,
            backdrop_path: None,
        }
    }

    #[derive(Default)]
    struct StubSource {
        calls: Mutex<Vec<String>>,
        discover: HashMap<String, Vec<MovieRecord>>,
        persons: Vec<PersonMatch>,
        person_credits: Vec<MovieRecord>,
        movie_matches: Vec<MovieRecord>,
        recommendations: Vec<MovieRecord>,
        popular: Vec<MovieRecord>,
        popular_country: Vec<MovieRecord>,
        fail: bool,
    }

    impl StubSource {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn check_fail(&self) -> ApiResult<()> {
            if self.fail {
                Err(ApiError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl MovieSource for StubSource {
        async fn discover_by_language(
            &self,
            language: &str,
            origin_country: Option<&str>,
        ) -> ApiResult<Vec<MovieRecord>> {
            self.record(format!(
                "discover:{}:{}",
                language,
                origin_country.unwrap_or("")
            ));
            self.check_fail()?;
            Ok(self.discover.get(language).cloned().unwrap_or_default())
        }

        async fn search_person(&self, query: &str) -> ApiResult<Vec<PersonMatch>> {
            self.record(format!("search_person:{}", query));
            self.check_fail()?;
            Ok(self.persons.clone())
        }

        async fn person_movie_credits(&self, person_id: u64) -> ApiResult<Vec<MovieRecord>> {
            self.record(format!("person_credits:{}", person_id));
            self.check_fail()?;
            Ok(self.person_credits.clone())
        }

        async fn search_movie(&self, query: &str) -> ApiResult<Vec<MovieRecord>> {
            self.record(format!("search_movie:{}", query));
            self.check_fail()?;
            Ok(self.movie_matches.clone())
        }

        async fn movie_recommendations(&self, movie_id: u64) -> ApiResult<Vec<MovieRecord>> {
            self.record(format!("recommendations:{}", movie_id));
            self.check_fail()?;
            Ok(self.recommendations.clone())
        }

        async fn popular_movies(&self) -> ApiResult<Vec<MovieRecord>> {
            self.record("popular".to_string());
            self.check_fail()?;
            Ok(self.popular.clone())
        }

        async fn popular_by_country(&self, country: &str) -> ApiResult<Vec<MovieRecord>> {
            self.record(format!("popular_country:{}", country));
            self.check_fail()?;
            Ok(self.popular_country.clone())
        }

        async fn movie_details(&self, _movie_id: u64) -> ApiResult<MovieDetailsRecord> {
            unimplemented!("not used by the classifier")
        }

        async fn movie_credits(&self, _movie_id: u64) -> ApiResult<CreditsResponse> {
            unimplemented!("not used by the classifier")
        }

        async fn movie_videos(&self, _movie_id: u64) -> ApiResult<Vec<VideoRecord>> {
            unimplemented!("not used by the classifier")
        }
    }

    #[tokio::test]
    async fn test_short_query_makes_no_calls() {
        let stub = StubSource::default();
        let results = classify(&stub, "  x  ").await.unwrap();
        assert!(results.is_empty());
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_regional_language_short_circuits() {
        let mut stub = StubSource::default();
        stub.discover
            .insert("ta".to_string(), vec![movie(1), movie(2), movie(3)]);

        let results = classify(&stub, "Tamil Action").await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(stub.calls(), vec!["discover:ta:IN"]);
    }

    #[tokio::test]
    async fn test_regional_table_order_wins() {
        let mut stub = StubSource::default();
        stub.discover.insert("te".to_string(), vec![movie(7)]);
        // hindi appears first in the query, telugu first in the table
        let results = classify(&stub, "hindi or telugu drama").await.unwrap();
        assert_eq!(results[0].id, 7);
        assert_eq!(stub.calls(), vec!["discover:te:IN"]);
    }

    #[tokio::test]
    async fn test_empty_regional_result_falls_through_to_world() {
        let mut stub = StubSource::default();
        // telugu matches but the discovery returns nothing; english should
        // then match in the world stage without the country filter.
        stub.discover.insert("en".to_string(), vec![movie(5)]);

        let results = classify(&stub, "telugu english").await.unwrap();
        assert_eq!(results[0].id, 5);
        assert_eq!(stub.calls(), vec!["discover:te:IN", "discover:en:"]);
    }

    #[tokio::test]
    async fn test_person_stage_strips_filler_words() {
        let mut stub = StubSource::default();
        stub.persons = vec![PersonMatch {
            id: 31,
            name: "Tom Hanks".to_string(),
        }];
        stub.person_credits = vec![movie(10), movie(11)];

        let results = classify(&stub, "Tom Hanks movies").await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(
            stub.calls(),
            vec!["search_person:tom hanks ", "person_credits:31"]
        );
    }

    #[tokio::test]
    async fn test_title_stage_returns_recommendations() {
        let mut stub = StubSource::default();
        stub.movie_matches = vec![movie(99)];
        stub.recommendations = vec![movie(100), movie(101)];

        let results = classify(&stub, "inception").await.unwrap();
        assert_eq!(results.len(), 2);
        let calls = stub.calls();
        assert!(calls.contains(&"search_movie:inception".to_string()));
        assert!(calls.contains(&"recommendations:99".to_string()));
        assert!(!calls.iter().any(|c| c.starts_with("popular")));
    }

    #[tokio::test]
    async fn test_fallback_concatenates_both_lists() {
        let mut stub = StubSource::default();
        stub.popular_country = vec![movie(1), movie(2)];
        stub.popular = vec![movie(2), movie(3)];

        let results = classify(&stub, "xy").await.unwrap();
        // country list first, then global; dedup is the normalizer's job
        let ids: Vec<u64> = results.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 2, 3]);

        let calls = stub.calls();
        assert!(calls.contains(&"popular_country:IN".to_string()));
        assert!(calls.contains(&"popular".to_string()));
    }

    #[tokio::test]
    async fn test_upstream_failure_aborts_chain() {
        let stub = StubSource {
            fail: true,
            ..Default::default()
        };
        let result = classify(&stub, "tamil").await;
        assert!(matches!(result, Err(ApiError::Status(500))));
    }
}
