//! Flattens a raw credits response into the short summary the UI shows:
//! a handful of cast names plus director, producer and music composer.

use serde::Serialize;

use crate::tmdb::CreditsResponse;

pub const CREDITS_CAST_LIMIT: usize = 6;

/// Jobs that count as the music credit, checked in crew order.
const MUSIC_JOBS: &[&str] = &["Original Music Composer", "Music Director", "Composer"];

#[derive(Debug, Clone, Serialize)]
pub struct CreditsSummary {
    pub cast: Vec<String>,
    pub director: String,
    pub producer: String,
    pub music: String,
}

pub fn summarize_credits(credits: CreditsResponse) -> CreditsSummary {
    let crew_with_job = |job: &str| {
        credits
            .crew
            .iter()
            .find(|member| member.job == job)
            .map(|member| member.name.clone())
    };

    let music = credits
        .crew
        .iter()
        .find(|member| MUSIC_JOBS.contains(&member.job.as_str()))
        .map(|member| member.name.clone());

    CreditsSummary {
        cast: credits
            .cast
            .iter()
            .take(CREDITS_CAST_LIMIT)
            .map(|member| member.name.clone())
            .collect(),
        director: crew_with_job("Director").unwrap_or_else(|| "N/A".to_string()),
        producer: crew_with_job("Producer").unwrap_or_else(|| "N/A".to_string()),
        music: music.unwrap_or_else(|| "N/A".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::{CastMember, CrewMember};

    fn cast(name: &str) -> CastMember {
        CastMember {
            name: name.to_string(),
            profile_path: None,
        }
    }

    fn crew(name: &str, job: &str) -> CrewMember {
        CrewMember {
            name: name.to_string(),
            job: job.to_string(),
        }
    }

    #[test]
    fn test_cast_limited_to_six_names() {
        let credits = CreditsResponse {
            cast: (0..9).map(|i| cast(&format!("actor-{}", i))).collect(),
            crew: Vec::new(),
        };
        let summary = summarize_credits(credits);
        assert_eq!(summary.cast.len(), CREDITS_CAST_LIMIT);
        assert_eq!(summary.cast[0], "actor-0");
    }

    #[test]
    fn test_crew_roles_selected_by_job() {
        let credits = CreditsResponse {
            cast: Vec::new(),
            crew: vec![
                crew("Jane Editor", "Editor"),
                crew("Raj Director", "Director"),
                crew("Priya Producer", "Producer"),
                crew("Ilayaraja", "Music Director"),
            ],
        };
        let summary = summarize_credits(credits);
        assert_eq!(summary.director, "Raj Director");
        assert_eq!(summary.producer, "Priya Producer");
        assert_eq!(summary.music, "Ilayaraja");
    }

    #[test]
    fn test_missing_crew_roles_default() {
        let summary = summarize_credits(CreditsResponse::default());
        assert!(summary.cast.is_empty());
        assert_eq!(summary.director, "N/A");
        assert_eq!(summary.producer, "N/A");
        assert_eq!(summary.music, "N/A");
    }

    #[test]
    fn test_any_music_job_matches() {
        for job in ["Original Music Composer", "Music Director", "Composer"] {
            let credits = CreditsResponse {
                cast: Vec::new(),
                crew: vec![crew("Someone", job)],
            };
            assert_eq!(summarize_credits(credits).music, "Someone");
        }
    }
}
