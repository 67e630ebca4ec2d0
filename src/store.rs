// 🗄️ Dataset Store - one-time load of movieData.json into memory
// Read-only after construction; clones share the same records

use crate::movie::Movie;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct MovieStore {
    movies: Arc<[Movie]>,
    loaded_at: Option<DateTime<Utc>>,
    source: Option<PathBuf>,
}

impl MovieStore {
    /// A store that never loaded anything
    pub fn empty() -> Self {
        MovieStore {
            movies: Arc::from(Vec::<Movie>::new()),
            loaded_at: None,
            source: None,
        }
    }

    /// Loaded store over the given records, in the given order
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        MovieStore {
            movies: Arc::from(movies),
            loaded_at: Some(Utc::now()),
            source: None,
        }
    }

    /// Parse a JSON array of movie records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let movies: Vec<Movie> =
            serde_json::from_str(json).context("Failed to parse movie data JSON")?;
        Ok(MovieStore::from_movies(movies))
    }

    /// Read and parse a dataset file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read movie data file: {:?}", path))?;

        let mut store = MovieStore::from_json_str(&content)
            .with_context(|| format!("Invalid movie data in {:?}", path))?;
        store.source = Some(path.to_path_buf());
        Ok(store)
    }

    /// Load a dataset file; on any failure log it and fall back to an empty store
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match MovieStore::from_file(path) {
            Ok(store) => {
                tracing::info!("Movie data loaded: {} records from {:?}", store.len(), path);
                store
            }
            Err(e) => {
                tracing::error!("Error loading movie data: {:#}", e);
                MovieStore::empty()
            }
        }
    }

    /// `load_or_empty` off the async runtime
    pub async fn load(path: PathBuf) -> Self {
        match tokio::task::spawn_blocking(move || MovieStore::load_or_empty(path)).await {
            Ok(store) => store,
            Err(e) => {
                tracing::error!("Movie data load task failed: {}", e);
                MovieStore::empty()
            }
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// False only when no load ever succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"[
        {"Movie_ID": 1, "Title": "Inception", "Metascore": "74"},
        {"Movie_ID": 2, "Title": "Nope", "Metascore": "N/A"}
    ]"#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_store() {
        let store = MovieStore::empty();

        assert!(store.is_empty());
        assert!(!store.is_loaded());
        assert_eq!(store.loaded_at(), None);
        assert_eq!(store.source(), None);
    }

    #[test]
    fn test_from_json_str_keeps_order() {
        let store = MovieStore::from_json_str(SAMPLE).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.is_loaded());
        assert_eq!(store.movies()[0].title, "Inception");
        assert_eq!(store.movies()[1].title, "Nope");
    }

    #[test]
    fn test_from_json_str_rejects_non_array() {
        assert!(MovieStore::from_json_str(r#"{"Movie_ID": 1}"#).is_err());
        assert!(MovieStore::from_json_str("not json").is_err());
    }

    #[test]
    fn test_off_type_fields_keep_every_record() {
        let store = MovieStore::from_json_str(
            r#"[
                {"Movie_ID": 1, "Title": "Inception", "Metascore": "74"},
                {"Movie_ID": "2", "Title": "Nope"},
                {"Movie_ID": 3, "Title": null, "Metascore": 61},
                {"Movie_ID": "tt0111", "Title": "Unnumbered"}
            ]"#,
        )
        .unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(store.movies()[1].movie_id, Some(2));
        assert_eq!(store.movies()[2].title, "");
        assert_eq!(store.movies()[3].movie_id, None);
        assert_eq!(store.movies()[3].title, "Unnumbered");
    }

    #[test]
    fn test_from_file_records_source() {
        let file = write_temp(SAMPLE);
        let store = MovieStore::from_file(file.path()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.source(), Some(file.path()));
    }

    #[test]
    fn test_from_file_error_names_path() {
        let err = MovieStore::from_file("/definitely/not/here.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_load_or_empty_on_missing_file() {
        let store = MovieStore::load_or_empty("/definitely/not/here.json");

        assert!(store.is_empty());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_load_or_empty_on_malformed_file() {
        let file = write_temp("[{\"Movie_ID\": ");
        let store = MovieStore::load_or_empty(file.path());

        assert!(store.is_empty());
        assert!(!store.is_loaded());
    }

    #[tokio::test]
    async fn test_async_load() {
        let file = write_temp(SAMPLE);
        let store = MovieStore::load(file.path().to_path_buf()).await;

        assert_eq!(store.len(), 2);
        assert!(store.is_loaded());
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("movieData/movieData.json");
        let store = MovieStore::from_file(path).unwrap();

        assert!(!store.is_empty());
        assert!(store.movies().iter().any(|m| !m.has_metascore()));
        assert!(store.movies().iter().any(|m| m.has_metascore()));
    }

    #[test]
    fn test_clones_share_records() {
        let store = MovieStore::from_json_str(SAMPLE).unwrap();
        let clone = store.clone();

        assert!(std::ptr::eq(store.movies().as_ptr(), clone.movies().as_ptr()));
    }
}
