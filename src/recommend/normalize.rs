//! Shapes raw upstream records into the response the UI consumes:
//! order-preserving dedup by id, a hard cap on the list length, and
//! defaults for absent optional fields.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::TmdbConfig;
use crate::tmdb::MovieRecord;

pub const MAX_RECOMMENDATIONS: usize = 10;

const DEFAULT_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMovie {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub poster: Option<String>,
    pub backdrop: Option<String>,
}

/// Deduplicates by id while preserving upstream order. The first occurrence
/// of an id fixes its position; a later duplicate overwrites the stored
/// value at that position (last write wins).
fn dedup_by_id(records: Vec<MovieRecord>) -> Vec<MovieRecord> {
    let mut position: HashMap<u64, usize> = HashMap::new();
    let mut deduped: Vec<MovieRecord> = Vec::with_capacity(records.len());

    for record in records {
        match position.get(&record.id) {
            Some(&index) => deduped[index] = record,
            None => {
                position.insert(record.id, deduped.len());
                deduped.push(record);
            }
        }
    }

    deduped
}

/// Pure and total: malformed records degrade to defaults, never to errors.
pub fn normalize(records: Vec<MovieRecord>, tmdb: &TmdbConfig) -> Vec<NormalizedMovie> {
    let mut deduped = dedup_by_id(records);
    deduped.truncate(MAX_RECOMMENDATIONS);

    deduped
        .into_iter()
        .map(|record| NormalizedMovie {
            id: record.id,
            title: record.title,
            description: record
                .overview
                .filter(|o| !o.is_empty())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            release_date: record
                .release_date
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            poster: record
                .poster_path
                .map(|p| format!("{}{}", tmdb.poster_base, p)),
            backdrop: record
                .backdrop_path
                .map(|p| format!("{}{}", tmdb.backdrop_base, p)),
        })
        .collect()
}
