// 🌐 Route Dispatcher - method+path → query → view
// Handlers share one read-only MovieStore through axum State

use crate::movie::lenient_text;
use crate::query::{
    find_by_id, find_by_title, highlight_missing, parse_movie_id, with_metascore, ScoreSummary,
};
use crate::store::MovieStore;
use crate::views::View;
use axum::{
    async_trait,
    extract::{FromRequest, Form, Json, Request, State},
    handler::HandlerWithoutStateExt,
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, MethodRouter},
    Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const MOVIE_NOT_FOUND: &str = "Movie ID not found!";
pub const INVALID_MOVIE_ID: &str = "Movie ID must be a number!";
pub const WRONG_ROUTE: &str = "Wrong Route";
pub const BAD_SEARCH_REQUEST: &str = "Search request could not be read!";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: MovieStore,
}

impl AppState {
    pub fn new(store: MovieStore) -> Self {
        AppState { store }
    }
}

#[derive(Debug, Deserialize)]
pub struct IdSearchForm {
    #[serde(rename = "movieId", default, deserialize_with = "lenient_text")]
    pub movie_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TitleSearchForm {
    #[serde(rename = "movieTitle", default, deserialize_with = "lenient_text")]
    pub movie_title: Option<String>,
}

// ============================================================================
// SEARCH BODY EXTRACTOR
// ============================================================================

/// Search fields from a urlencoded or JSON body.
/// A body without Content-Type is read as urlencoded; any rejection becomes the error view.
pub struct SearchBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for SearchBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = View;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase());

        match content_type {
            Some(ct) if ct.starts_with("application/json") => Json::<T>::from_request(req, state)
                .await
                .map(|Json(body)| SearchBody(body))
                .map_err(|rejection| {
                    tracing::debug!("Rejected JSON search body: {}", rejection.body_text());
                    View::error(rejection.status(), BAD_SEARCH_REQUEST)
                }),
            content_type => {
                if content_type.is_none() {
                    req.headers_mut().insert(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("application/x-www-form-urlencoded"),
                    );
                }
                Form::<T>::from_request(req, state)
                    .await
                    .map(|Form(body)| SearchBody(body))
                    .map_err(|rejection| {
                        tracing::debug!("Rejected form search body: {}", rejection.body_text());
                        View::error(rejection.status(), BAD_SEARCH_REQUEST)
                    })
            }
        }
    }
}

// ============================================================================
// PAGE HANDLERS
// ============================================================================

/// GET /
async fn home() -> View {
    View::Home
}

/// GET /about
async fn about() -> View {
    View::About
}

/// GET /users
async fn users() -> &'static str {
    "respond with a resource"
}

/// GET /data - Data loaded confirmation
async fn data(State(state): State<AppState>) -> View {
    View::DataLoaded {
        summary: ScoreSummary::of(state.store.movies()),
        loaded_at: state.store.loaded_at(),
    }
}

/// GET /data/search/id
async fn search_by_id_form() -> View {
    View::SearchByIdForm
}

/// POST /data/search/id
async fn search_by_id(
    State(state): State<AppState>,
    SearchBody(form): SearchBody<IdSearchForm>,
) -> View {
    let raw = form.movie_id.unwrap_or_default();
    let id = match parse_movie_id(&raw) {
        Ok(id) => id,
        Err(e) if e.out_of_range => {
            tracing::debug!("Movie ID search out of range: {}", e);
            return View::error(StatusCode::NOT_FOUND, MOVIE_NOT_FOUND);
        }
        Err(e) => {
            tracing::debug!("Rejected ID search: {}", e);
            return View::error(StatusCode::BAD_REQUEST, INVALID_MOVIE_ID);
        }
    };

    match find_by_id(state.store.movies(), id) {
        Some(movie) => View::MovieInfo(movie),
        None => {
            tracing::debug!("Movie {} not found", id);
            View::error(StatusCode::NOT_FOUND, MOVIE_NOT_FOUND)
        }
    }
}

/// GET /data/search/title
async fn search_by_title_form() -> View {
    View::SearchByTitleForm
}

/// POST /data/search/title
async fn search_by_title(
    State(state): State<AppState>,
    SearchBody(form): SearchBody<TitleSearchForm>,
) -> View {
    let query = form.movie_title.unwrap_or_default();
    let movies = find_by_title(state.store.movies(), &query);
    tracing::debug!("Title search {:?}: {} matches", query, movies.len());

    View::MovieList { query, movies }
}

/// GET /allData
async fn all_data(State(state): State<AppState>) -> View {
    View::AllData(state.store.movies().to_vec())
}

/// GET /filteredData - only movies with a Metascore
async fn filtered_data(State(state): State<AppState>) -> View {
    View::FilteredData(with_metascore(state.store.movies()))
}

/// GET /highlightedData - all movies, missing Metascore flagged
async fn highlighted_data(State(state): State<AppState>) -> View {
    View::HighlightedData(highlight_missing(state.store.movies()))
}

/// Anything no route or static file answers
async fn wrong_route() -> impl IntoResponse {
    View::error(StatusCode::NOT_FOUND, WRONG_ROUTE)
}

// ============================================================================
// ROUTER
// ============================================================================

/// Known path, unsupported method: same answer as an unknown path
fn page(method_router: MethodRouter<AppState>) -> MethodRouter<AppState> {
    method_router.fallback(wrong_route)
}

pub fn router<P: AsRef<Path>>(state: AppState, public_dir: P) -> Router {
    let assets = ServeDir::new(public_dir.as_ref())
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(wrong_route.into_service());

    Router::new()
        .route("/", page(get(home)))
        .route("/about", page(get(about)))
        .route("/users", page(get(users)))
        .route("/data", page(get(data)))
        .route(
            "/data/search/id",
            page(get(search_by_id_form).post(search_by_id)),
        )
        .route(
            "/data/search/title",
            page(get(search_by_title_form).post(search_by_title)),
        )
        .route("/allData", page(get(all_data)))
        .route("/filteredData", page(get(filtered_data)))
        .route("/highlightedData", page(get(highlighted_data)))
        .fallback_service(assets)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

// ============================================================================
// TESTS
// ============================================================================
