// 🔍 Query Layer - pure functions over the loaded records
// Every result is an owned copy; the store itself is never touched

use crate::movie::Movie;
use serde::Serialize;
use std::num::IntErrorKind;

// ============================================================================
// ID LOOKUP
// ============================================================================

/// `movieId` form value that is not a usable integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMovieId {
    pub input: String,
    /// An integer, just too large for any stored identifier
    pub out_of_range: bool,
}

impl std::fmt::Display for InvalidMovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.out_of_range {
            write!(f, "movie ID {:?} is out of range", self.input)
        } else {
            write!(f, "movie ID must be an integer, got {:?}", self.input)
        }
    }
}

impl std::error::Error for InvalidMovieId {}

/// Parse a submitted movie ID; surrounding whitespace is ignored
pub fn parse_movie_id(raw: &str) -> Result<i64, InvalidMovieId> {
    raw.trim().parse::<i64>().map_err(|e| InvalidMovieId {
        input: raw.to_string(),
        out_of_range: matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow),
    })
}

/// First record whose identifier equals `id`; records without one never match
pub fn find_by_id(movies: &[Movie], id: i64) -> Option<Movie> {
    movies.iter().find(|m| m.movie_id == Some(id)).cloned()
}

// ============================================================================
// TITLE SEARCH
// ============================================================================

/// Case-insensitive substring match on the title, original order kept.
/// An empty query matches everything.
pub fn find_by_title(movies: &[Movie], text: &str) -> Vec<Movie> {
    let needle = text.to_lowercase();
    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

// ============================================================================
// SCORE CLASSIFICATION
// ============================================================================

pub fn with_metascore(movies: &[Movie]) -> Vec<Movie> {
    movies.iter().filter(|m| m.has_metascore()).cloned().collect()
}

pub fn without_metascore(movies: &[Movie]) -> Vec<Movie> {
    movies.iter().filter(|m| !m.has_metascore()).cloned().collect()
}

/// A record tagged for the highlighted listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightedMovie {
    #[serde(flatten)]
    pub movie: Movie,
    /// True when the record has no usable score
    pub highlight: bool,
}

pub fn highlight_missing(movies: &[Movie]) -> Vec<HighlightedMovie> {
    movies
        .iter()
        .map(|m| HighlightedMovie {
            highlight: !m.has_metascore(),
            movie: m.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreSummary {
    pub total: usize,
    pub scored: usize,
    pub unscored: usize,
}

impl ScoreSummary {
    pub fn of(movies: &[Movie]) -> Self {
        let scored = movies.iter().filter(|m| m.has_metascore()).count();
        ScoreSummary {
            total: movies.len(),
            scored,
            unscored: movies.len() - scored,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
