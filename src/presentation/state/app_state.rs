use std::sync::Arc;

use crate::application::services::DenoiseService;

#[derive(Clone)]
pub struct AppState {
    pub denoise_service: Arc<DenoiseService>,
}

impl AppState {
    pub fn new(denoise_service: Arc<DenoiseService>) -> Self {
        Self { denoise_service }
    }
}
