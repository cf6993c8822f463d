pub mod client;
pub mod source;
pub mod types;

pub use client::TmdbClient;
pub use source::{ApiError, ApiResult, MovieSource};
pub use types::*;
