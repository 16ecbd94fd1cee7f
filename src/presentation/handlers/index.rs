use axum::extract::State;
use axum::response::Html;

use crate::presentation::state::AppState;
use crate::presentation::views;

pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let max_mb = state
        .denoise_service
        .max_upload_bytes()
        .div_ceil(1024 * 1024);
    Html(views::upload_page(max_mb))
}
