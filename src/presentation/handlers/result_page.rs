use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::presentation::state::AppState;
use crate::presentation::views;

use super::media::lookup;

#[tracing::instrument(skip(state))]
pub async fn result_page_handler(
    State(state): State<AppState>,
    Path(result_id): Path<String>,
) -> Response {
    match lookup(&state, &result_id).await {
        Ok(Some((id, result))) => Html(views::result_page(&id, &result.filename)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response(),
        Err(response) => response,
    }
}
