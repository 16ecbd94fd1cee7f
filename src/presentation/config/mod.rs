mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DenoiseSettings, LoggingSettings, ServerSettings, Settings, StorageProviderSetting,
    StorageSettings, UploadSettings,
};
