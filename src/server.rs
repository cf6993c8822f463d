use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::db::SqliteRepository;
use crate::tmdb::MovieSource;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<SqliteRepository>,
    pub source: Arc<dyn MovieSource>,
}

impl AppState {
    pub fn new(config: Config, db: Arc<SqliteRepository>, source: Arc<dyn MovieSource>) -> Self {
        Self {
            config: Arc::new(config),
            db,
            source,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/recommend", post(crate::handlers::recommend))
        .route("/movie/:id/credits", get(crate::handlers::movie_credits))
        .route("/movie/:id/details", get(crate::handlers::movie_details))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
