use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::domain::{ProcessedResult, ResultId};
use crate::presentation::state::AppState;

const NOT_FOUND_MESSAGE: &str = "Result not found";

/// Looks a result up by its raw path segment. Malformed ids are simply
/// unknown ids.
pub(crate) async fn lookup(
    state: &AppState,
    raw_id: &str,
) -> Result<Option<(ResultId, ProcessedResult)>, Response> {
    let Some(id) = ResultId::parse(raw_id) else {
        tracing::debug!(raw_id, "Malformed result id");
        return Ok(None);
    };

    match state.denoise_service.fetch(&id).await {
        Ok(Some(result)) => Ok(Some((id, result))),
        Ok(None) => {
            tracing::debug!(result_id = %id, "Result not found");
            Ok(None)
        }
        Err(e) => {
            tracing::error!(error = %e, result_id = %id, "Failed to fetch result");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch result").into_response())
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn preview_handler(
    State(state): State<AppState>,
    Path(result_id): Path<String>,
) -> Response {
    match lookup(&state, &result_id).await {
        Ok(Some((_, result))) => (
            [
                (header::CONTENT_TYPE, result.content_type().to_string()),
                (header::CONTENT_DISPOSITION, "inline".to_string()),
            ],
            Body::from(result.data),
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
        Err(response) => response,
    }
}

#[tracing::instrument(skip(state))]
pub async fn download_handler(
    State(state): State<AppState>,
    Path(result_id): Path<String>,
) -> Response {
    match lookup(&state, &result_id).await {
        Ok(Some((_, result))) => {
            let disposition = format!("attachment; filename=\"{}\"", result.filename);
            (
                [
                    (header::CONTENT_TYPE, result.content_type().to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                Body::from(result.data),
            )
                .into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
        Err(response) => response,
    }
}
