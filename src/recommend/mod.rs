pub mod classifier;
pub mod credits;
pub mod details;
pub mod language;
pub mod normalize;

pub use classifier::classify;
pub use credits::{summarize_credits, CreditsSummary};
pub use details::{fetch_details, MovieDetails};
pub use normalize::{normalize, NormalizedMovie, MAX_RECOMMENDATIONS};
