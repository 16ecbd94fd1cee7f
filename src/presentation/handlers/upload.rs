use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::services::{DenoiseError, ProcessingError};
use crate::domain::UploadedMedia;
use crate::presentation::state::AppState;

pub const UPLOAD_FIELD: &str = "audio_file";

/// Slack on top of the file size ceiling for multipart boundaries and headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Debug)]
pub enum UploadRejection {
    NoFilePart,
    NoSelectedFile,
    EmptyFile,
    TooLarge,
    Malformed(String),
}

impl IntoResponse for UploadRejection {
    fn into_response(self) -> Response {
        match self {
            Self::NoFilePart => (StatusCode::BAD_REQUEST, "No file part").into_response(),
            Self::NoSelectedFile => (StatusCode::BAD_REQUEST, "No selected file").into_response(),
            Self::EmptyFile => {
                (StatusCode::BAD_REQUEST, "Uploaded file is empty").into_response()
            }
            Self::TooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "File too large").into_response(),
            Self::Malformed(reason) => (
                StatusCode::BAD_REQUEST,
                format!("Malformed upload: {}", reason),
            )
                .into_response(),
        }
    }
}

impl From<MultipartError> for UploadRejection {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::TooLarge
        } else {
            Self::Malformed(e.body_text())
        }
    }
}

#[tracing::instrument(skip(state, headers, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let limit = state.denoise_service.max_upload_bytes();

    if let Some(declared) = declared_length(&headers) {
        if declared > limit.saturating_add(MULTIPART_OVERHEAD_BYTES) {
            tracing::warn!(declared, limit, "Upload rejected by content length");
            return UploadRejection::TooLarge.into_response();
        }
    }

    let media = match read_upload(multipart).await {
        Ok(media) => media,
        Err(rejection) => {
            tracing::warn!(?rejection, "Upload rejected");
            return rejection.into_response();
        }
    };

    if state.denoise_service.check_size(media.size_bytes()).is_err() {
        tracing::warn!(bytes = media.size_bytes(), limit, "Upload exceeds size limit");
        return UploadRejection::TooLarge.into_response();
    }

    tracing::debug!(
        filename = %media.original_name,
        bytes = media.size_bytes(),
        format = ?media.format,
        "Audio upload received"
    );

    match state.denoise_service.submit(media).await {
        Ok(id) => Redirect::to(&format!("/result/{}", id)).into_response(),
        Err(e) => denoise_error_response(e),
    }
}

/// Finds the `audio_file` file part and reads it fully. Other parts are skipped.
async fn read_upload(mut multipart: Multipart) -> Result<UploadedMedia, UploadRejection> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        // A part without a filename attribute is a plain form value, not a file.
        let Some(filename) = field.file_name().map(|name| name.trim().to_string()) else {
            continue;
        };
        if filename.is_empty() {
            return Err(UploadRejection::NoSelectedFile);
        }
        let content_type = field.content_type().map(str::to_string);

        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(UploadRejection::EmptyFile);
        }

        return Ok(UploadedMedia::new(data, filename, content_type.as_deref()));
    }

    Err(UploadRejection::NoFilePart)
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

fn denoise_error_response(e: DenoiseError) -> Response {
    match e {
        DenoiseError::TooLarge { .. } => UploadRejection::TooLarge.into_response(),
        DenoiseError::EmptyUpload => UploadRejection::EmptyFile.into_response(),
        DenoiseError::Processing(ProcessingError::Decode(e)) => {
            tracing::warn!(error = %e, "Uploaded audio could not be decoded");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Could not read audio file: {}", e),
            )
                .into_response()
        }
        DenoiseError::Processing(e) => {
            tracing::error!(error = %e, "Audio processing failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Audio processing failed").into_response()
        }
        DenoiseError::Storage(e) => {
            tracing::error!(error = %e, "Failed to store processed audio");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to store processed audio",
            )
                .into_response()
        }
        DenoiseError::WorkerFailed(e) => {
            tracing::error!(error = %e, "Processing worker failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Audio processing failed").into_response()
        }
    }
}
