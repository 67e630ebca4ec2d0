// Movie Catalog - Core Library
// Exposes all modules for use in the web server, the CLI, and tests

pub mod movie;
pub mod store;
pub mod query;
pub mod views;
pub mod routes;
pub mod config;

// Re-export commonly used types
pub use movie::{Movie, MISSING_SCORE, is_score_present};
pub use store::MovieStore;
pub use query::{
    find_by_id, find_by_title, with_metascore, without_metascore, highlight_missing,
    parse_movie_id, HighlightedMovie, InvalidMovieId, ScoreSummary,
};
pub use views::{View, highlight_class, not_equals, HIGHLIGHT_CLASS};
pub use routes::{router, AppState};
pub use config::ServerConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
