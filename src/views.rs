// 🖼️ View Renderer - named views + data context → HTML
// Layout, nav and footer are shared; every interpolated value goes through escape_html

use crate::movie::{is_score_present, value_text, Movie, MISSING_SCORE};
use crate::query::{HighlightedMovie, ScoreSummary};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::{DateTime, Utc};

/// CSS class for rows without a usable Metascore
pub const HIGHLIGHT_CLASS: &str = "highlighted_row";

// ============================================================================
// PRESENTATION HELPERS
// ============================================================================

pub fn not_equals(a: &str, b: &str) -> bool {
    a != b
}

/// `highlighted_row` when the score is absent, empty or "N/A"
pub fn highlight_class(score: Option<&str>) -> &'static str {
    if is_score_present(score) {
        ""
    } else {
        HIGHLIGHT_CLASS
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// VIEWS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Home,
    About,
    DataLoaded {
        summary: ScoreSummary,
        loaded_at: Option<DateTime<Utc>>,
    },
    SearchByIdForm,
    SearchByTitleForm,
    MovieInfo(Movie),
    MovieList {
        query: String,
        movies: Vec<Movie>,
    },
    AllData(Vec<Movie>),
    FilteredData(Vec<Movie>),
    HighlightedData(Vec<HighlightedMovie>),
    Error {
        status: StatusCode,
        message: String,
    },
}

impl View {
    pub fn error(status: StatusCode, message: &str) -> Self {
        View::Error {
            status,
            message: message.to_string(),
        }
    }

    /// Template name of the view
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "index",
            View::About => "about",
            View::DataLoaded { .. } => "data",
            View::SearchByIdForm => "searchByIdForm",
            View::SearchByTitleForm => "searchByTitleForm",
            View::MovieInfo(_) => "movieInfo",
            View::MovieList { .. } => "movieList",
            View::AllData(_) => "allData",
            View::FilteredData(_) => "filteredData",
            View::HighlightedData(_) => "highlightedData",
            View::Error { .. } => "error",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Movie Catalog",
            View::About => "About",
            View::DataLoaded { .. } => "Data",
            View::SearchByIdForm => "Search by ID",
            View::SearchByTitleForm => "Search by Title",
            View::MovieInfo(_) => "Movie Details",
            View::MovieList { .. } => "Search Results",
            View::AllData(_) => "All Movies",
            View::FilteredData(_) => "Movies with Metascore",
            View::HighlightedData(_) => "Movies (missing Metascore highlighted)",
            View::Error { .. } => "Error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            View::Error { status, .. } => *status,
            _ => StatusCode::OK,
        }
    }

    /// Full HTML document
    pub fn render(&self) -> String {
        layout(self.title(), &self.body())
    }

    fn body(&self) -> String {
        match self {
            View::Home => HOME_BODY.to_string(),
            View::About => ABOUT_BODY.to_string(),
            View::DataLoaded { summary, loaded_at } => data_loaded(summary, *loaded_at),
            View::SearchByIdForm => SEARCH_BY_ID_BODY.to_string(),
            View::SearchByTitleForm => SEARCH_BY_TITLE_BODY.to_string(),
            View::MovieInfo(movie) => movie_info(movie),
            View::MovieList { query, movies } => movie_list(query, movies),
            View::AllData(movies) => table_page(
                "All Movies",
                movies.iter().map(|m| (m, "")),
            ),
            View::FilteredData(movies) => table_page(
                "Movies with a Metascore",
                movies.iter().map(|m| (m, "")),
            ),
            View::HighlightedData(rows) => table_page(
                "All Movies (missing Metascore highlighted)",
                rows.iter().map(|row| {
                    let class = if row.highlight {
                        highlight_class(row.movie.metascore.as_deref())
                    } else {
                        ""
                    };
                    (&row.movie, class)
                }),
            ),
            View::Error { message, .. } => format!(
                "<h1>Error</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to home</a></p>",
                escape_html(message)
            ),
        }
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        (self.status(), Html(self.render())).into_response()
    }
}

// ============================================================================
// LAYOUT & PARTIALS
// ============================================================================

const NAV: &str = r#"<nav>
  <a href="/">Home</a>
  <a href="/about">About</a>
  <a href="/data">Data</a>
  <a href="/data/search/id">Search by ID</a>
  <a href="/data/search/title">Search by Title</a>
  <a href="/allData">All Data</a>
  <a href="/filteredData">Filtered Data</a>
  <a href="/highlightedData">Highlighted Data</a>
</nav>"#;

const FOOTER: &str = r#"<footer><p>Movie Catalog</p></footer>"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="stylesheet" href="/css/style.css">
</head>
<body>
{nav}
<main>
{body}
</main>
{footer}
</body>
</html>
"#,
        title = escape_html(title),
        nav = NAV,
        body = body,
        footer = FOOTER,
    )
}

const HOME_BODY: &str = r#"<h1>Movie Catalog</h1>
<p>Browse the movie dataset, look a movie up by ID or search by title.</p>"#;

const ABOUT_BODY: &str = r#"<h1>About</h1>
<p>A read-only catalog over a bundled movie dataset. Records are loaded once at startup and served from memory.</p>"#;

const SEARCH_BY_ID_BODY: &str = r#"<h1>Search by Movie ID</h1>
<form method="POST" action="/data/search/id">
  <label for="movieId">Movie ID</label>
  <input type="number" id="movieId" name="movieId" required>
  <button type="submit">Search</button>
</form>"#;

const SEARCH_BY_TITLE_BODY: &str = r#"<h1>Search by Title</h1>
<form method="POST" action="/data/search/title">
  <label for="movieTitle">Title</label>
  <input type="text" id="movieTitle" name="movieTitle">
  <button type="submit">Search</button>
</form>"#;

// ============================================================================
// DATA VIEWS
// ============================================================================

fn data_loaded(summary: &ScoreSummary, loaded_at: Option<DateTime<Utc>>) -> String {
    match loaded_at {
        Some(at) => format!(
            r#"<h1>Data Loaded</h1>
<p>Movie data loaded successfully at {at}.</p>
<ul>
  <li>Movies: {total}</li>
  <li>With Metascore: {scored}</li>
  <li>Without Metascore: {unscored}</li>
</ul>"#,
            at = at.format("%Y-%m-%d %H:%M:%S UTC"),
            total = summary.total,
            scored = summary.scored,
            unscored = summary.unscored,
        ),
        None => "<h1>Data</h1>\n<p>No movie data loaded.</p>".to_string(),
    }
}

fn movie_info(movie: &Movie) -> String {
    let score = movie.metascore.as_deref().unwrap_or(MISSING_SCORE);
    let mut html = format!(
        "<h1>{title}</h1>\n<dl class=\"movie\">\n  <dt>Movie ID</dt><dd>{id}</dd>\n  <dt>Metascore</dt><dd>{score}</dd>\n",
        title = escape_html(&movie.title),
        id = movie.id_text(),
        score = escape_html(score),
    );

    for (key, value) in &movie.details {
        let Some(text) = value_text(value.clone()) else {
            continue;
        };
        if !text.is_empty() && not_equals(&text, MISSING_SCORE) {
            html.push_str(&format!(
                "  <dt>{}</dt><dd>{}</dd>\n",
                escape_html(key),
                escape_html(&text)
            ));
        }
    }

    html.push_str("</dl>");
    html
}

fn movie_list(query: &str, movies: &[Movie]) -> String {
    let mut html = format!(
        "<h1>Search Results</h1>\n<p>{} movie(s) matching &quot;{}&quot;</p>\n",
        movies.len(),
        escape_html(query)
    );

    if movies.is_empty() {
        html.push_str("<p>No movies matched your search.</p>");
        return html;
    }

    html.push_str("<ul class=\"movie-list\">\n");
    for movie in movies {
        html.push_str(&format!(
            "  <li>{} ({})</li>\n",
            escape_html(&movie.title),
            movie.id_text()
        ));
    }
    html.push_str("</ul>");
    html
}

fn table_page<'a>(heading: &str, rows: impl Iterator<Item = (&'a Movie, &'static str)>) -> String {
    let mut html = format!(
        "<h1>{}</h1>\n<table>\n  <thead>\n    <tr><th>Movie ID</th><th>Title</th><th>Year</th><th>Genre</th><th>Director</th><th>Metascore</th></tr>\n  </thead>\n  <tbody>\n",
        escape_html(heading)
    );

    for (movie, class) in rows {
        let open = if class.is_empty() {
            "<tr>".to_string()
        } else {
            format!("<tr class=\"{}\">", class)
        };
        html.push_str(&format!(
            "    {open}<td>{id}</td><td>{title}</td><td>{year}</td><td>{genre}</td><td>{director}</td><td>{score}</td></tr>\n",
            open = open,
            id = movie.id_text(),
            title = escape_html(&movie.title),
            year = escape_html(&movie.detail("Year").unwrap_or_default()),
            genre = escape_html(&movie.detail("Genre").unwrap_or_default()),
            director = escape_html(&movie.detail("Director").unwrap_or_default()),
            score = escape_html(movie.metascore.as_deref().unwrap_or_default()),
        ));
    }

    html.push_str("  </tbody>\n</table>");
    html
}

// ============================================================================
// TESTS
// ============================================================================
