use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::recommend::{classify, fetch_details, normalize, summarize_credits};
use crate::server::AppState;
use crate::tmdb::ApiError;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub user_input: String,
}

/// All upstream failures collapse to a generic 500 with a fixed message;
/// the caller cannot distinguish network, status and parse errors.
fn upstream_error(context: &str, err: ApiError, message: &'static str) -> Response {
    error!("{}: {}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

pub async fn recommend(
    State(state): State<AppState>,
    Json(body): Json<RecommendRequest>,
) -> Response {
    match classify(state.source.as_ref(), &body.user_input).await {
        Ok(records) => {
            let recommendations = normalize(records, &state.config.tmdb);
            Json(json!({ "recommendations": recommendations })).into_response()
        }
        Err(e) => upstream_error(
            "recommendation lookup failed",
            e,
            "Failed to fetch recommendations",
        ),
    }
}

pub async fn movie_credits(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.source.movie_credits(id).await {
        Ok(credits) => Json(summarize_credits(credits)).into_response(),
        Err(e) => upstream_error("credits lookup failed", e, "Failed to fetch credits"),
    }
}

pub async fn movie_details(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match fetch_details(state.source.as_ref(), id, &state.config.tmdb).await {
        Ok(details) => Json(details).into_response(),
        Err(e) => upstream_error(
            "details lookup failed",
            e,
            "Failed to fetch movie details",
        ),
    }
}
