pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use config::{
    DenoiseSettings, Environment, LoggingSettings, ServerSettings, Settings,
    StorageProviderSetting, StorageSettings, UploadSettings,
};
pub use router::create_router;
pub use state::AppState;
