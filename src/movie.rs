// 🎬 Movie Record - the only entity in the catalog
// Core fields are typed, everything else in the source record rides along untouched

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Sentinel the dataset uses for "no score recorded"
pub const MISSING_SCORE: &str = "N/A";

/// One movie entry as found in `movieData.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    // ========================================================================
    // CORE FIELDS
    // ========================================================================
    /// None when the source value is not an integer; such a record never matches a lookup
    #[serde(rename = "Movie_ID", default, deserialize_with = "lenient_id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<i64>,

    #[serde(rename = "Title", default, deserialize_with = "lenient_title")]
    pub title: String,

    /// Absent, empty and "N/A" all mean "no score"
    #[serde(rename = "Metascore", default, deserialize_with = "lenient_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metascore: Option<String>,

    // ========================================================================
    // EVERYTHING ELSE (Year, Genre, Director, Plot, ...)
    // ========================================================================
    #[serde(flatten)]
    pub details: BTreeMap<String, Value>,
}

/// Accept strings, numbers and null for text-ish fields
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_text))
}

fn lenient_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Integers, integral floats and numeric strings; anything else has no id
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// Render a JSON value as display text; null has no text
pub fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// A score counts as present only when non-empty and not the "N/A" sentinel
pub fn is_score_present(score: Option<&str>) -> bool {
    matches!(score, Some(s) if !s.is_empty() && s != MISSING_SCORE)
}

impl Movie {
    pub fn new(movie_id: i64, title: &str, metascore: Option<&str>) -> Self {
        Movie {
            movie_id: Some(movie_id),
            title: title.to_string(),
            metascore: metascore.map(str::to_string),
            details: BTreeMap::new(),
        }
    }

    /// Identifier as display text, empty when the record has none
    pub fn id_text(&self) -> String {
        self.movie_id.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn has_metascore(&self) -> bool {
        is_score_present(self.metascore.as_deref())
    }

    /// Text of an extra field, e.g. `detail("Year")`
    pub fn detail(&self, key: &str) -> Option<String> {
        self.details.get(key).cloned().and_then(value_text)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "Movie_ID": 7,
            "Title": "Arrival",
            "Year": "2016",
            "Director": "Denis Villeneuve",
            "Metascore": "81",
            "imdbRating": 7.9
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();

        assert_eq!(movie.movie_id, Some(7));
        assert_eq!(movie.title, "Arrival");
        assert_eq!(movie.metascore.as_deref(), Some("81"));
        assert_eq!(movie.detail("Year").as_deref(), Some("2016"));
        assert_eq!(movie.detail("imdbRating").as_deref(), Some("7.9"));
        assert!(!movie.details.contains_key("Title"));
    }

    #[test]
    fn test_numeric_metascore_becomes_text() {
        let movie: Movie =
            serde_json::from_str(r#"{"Movie_ID": 1, "Title": "X", "Metascore": 74}"#).unwrap();

        assert_eq!(movie.metascore.as_deref(), Some("74"));
        assert!(movie.has_metascore());
    }

    #[test]
    fn test_missing_and_null_metascore() {
        let missing: Movie = serde_json::from_str(r#"{"Movie_ID": 1, "Title": "X"}"#).unwrap();
        let null: Movie =
            serde_json::from_str(r#"{"Movie_ID": 2, "Title": "Y", "Metascore": null}"#).unwrap();

        assert_eq!(missing.metascore, None);
        assert_eq!(null.metascore, None);
        assert!(!missing.has_metascore());
        assert!(!null.has_metascore());
    }

    #[test]
    fn test_missing_or_null_title_defaults_to_empty() {
        let missing: Movie = serde_json::from_str(r#"{"Movie_ID": 3}"#).unwrap();
        let null: Movie = serde_json::from_str(r#"{"Movie_ID": 4, "Title": null}"#).unwrap();

        assert_eq!(missing.title, "");
        assert_eq!(null.title, "");
    }

    #[test]
    fn test_numeric_title_becomes_text() {
        let movie: Movie = serde_json::from_str(r#"{"Movie_ID": 5, "Title": 1917}"#).unwrap();
        assert_eq!(movie.title, "1917");
    }

    #[test]
    fn test_numeric_string_id_is_accepted() {
        let movie: Movie = serde_json::from_str(r#"{"Movie_ID": " 2 ", "Title": "Nope"}"#).unwrap();
        assert_eq!(movie.movie_id, Some(2));

        let movie: Movie = serde_json::from_str(r#"{"Movie_ID": 3.0, "Title": "X"}"#).unwrap();
        assert_eq!(movie.movie_id, Some(3));
    }

    #[test]
    fn test_unusable_id_keeps_record() {
        for json in [
            r#"{"Title": "No id"}"#,
            r#"{"Movie_ID": null, "Title": "Null id"}"#,
            r#"{"Movie_ID": "tt0111", "Title": "Text id"}"#,
            r#"{"Movie_ID": 2.5, "Title": "Fractional id"}"#,
            r#"{"Movie_ID": [1], "Title": "Array id"}"#,
        ] {
            let movie: Movie = serde_json::from_str(json).unwrap();
            assert_eq!(movie.movie_id, None, "{}", json);
            assert_eq!(movie.id_text(), "");
        }
    }

    #[test]
    fn test_score_presence() {
        assert!(is_score_present(Some("74")));
        assert!(is_score_present(Some("0")));
        assert!(!is_score_present(Some("")));
        assert!(!is_score_present(Some("N/A")));
        assert!(!is_score_present(None));
    }
}
