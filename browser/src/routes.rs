use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use common::{Profile, SearchForm};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::browser::{NOTHING_TO_EXPORT, Notice, SEARCH_IN_PROGRESS};
use crate::error::Result;
use crate::export::{self, ExportError};
use crate::state::AppState;
use crate::view::IndexPage;

/// Current carousel contents as JSON
#[derive(Debug, Serialize)]
struct ProfilesResponse {
    index: usize,
    total: usize,
    profiles: Vec<Profile>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/search", post(search_handler))
        .route("/carousel/previous", post(previous_handler))
        .route("/carousel/next", post(next_handler))
        .route("/export", get(export_handler))
        .route("/api/profiles", get(profiles_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for GET / (the page)
async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let mut browser = state.browser.lock().await;
    let page = IndexPage::from_browser(&mut browser, state.in_flight.is_active());
    Ok(Html(page.render()?))
}

/// Handler for POST /search
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Redirect {
    // Validate locally; a bad form never reaches the scraping service
    let request = {
        let mut browser = state.browser.lock().await;
        browser.remember_form(&form.url, &form.limit);
        match form.validate() {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected search form");
                browser.notify(Notice::error(e.to_string()));
                return Redirect::to("/");
            }
        }
    };

    // Claim the single in-flight slot
    let Some(_in_flight) = state.in_flight.try_begin() else {
        tracing::debug!("Search submitted while another is running");
        state
            .browser
            .lock()
            .await
            .notify(Notice::info(SEARCH_IN_PROGRESS));
        return Redirect::to("/");
    };

    // The browser lock is not held here; the page keeps rendering while the
    // scrape runs.
    tracing::info!(limit = request.limit, "Submitting search");
    let outcome = state.api.scrape(&request).await;

    // Store the results (or the failure notice)
    state.browser.lock().await.apply(outcome);

    Redirect::to("/")
}

/// Handler for POST /carousel/previous
async fn previous_handler(State(state): State<Arc<AppState>>) -> Redirect {
    state.browser.lock().await.previous();
    Redirect::to("/")
}

/// Handler for POST /carousel/next
async fn next_handler(State(state): State<Arc<AppState>>) -> Redirect {
    state.browser.lock().await.next();
    Redirect::to("/")
}

/// Handler for GET /export
async fn export_handler(State(state): State<Arc<AppState>>) -> Result<Response> {
    let mut browser = state.browser.lock().await;

    // Build the workbook, or send the user back with a notice
    match export::build_workbook(browser.profiles()) {
        Ok(bytes) => {
            tracing::info!(profiles = browser.profiles().len(), "Exporting profiles");
            let headers = [
                (header::CONTENT_TYPE, export::CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export::FILE_NAME),
                ),
            ];
            Ok((headers, bytes).into_response())
        }
        Err(ExportError::Empty) => {
            browser.notify(Notice::info(NOTHING_TO_EXPORT));
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Handler for GET /api/profiles
async fn profiles_handler(State(state): State<Arc<AppState>>) -> Json<ProfilesResponse> {
    let browser = state.browser.lock().await;
    Json(ProfilesResponse {
        index: browser.index(),
        total: browser.profiles().len(),
        profiles: browser.profiles().to_vec(),
    })
}

/// Handler for GET /health
async fn health_handler() -> &'static str {
    "ok"
}
