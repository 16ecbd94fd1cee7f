use std::net::SocketAddr;
use std::time::Duration;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::{Deserialize, Serialize};

use super::Environment;

const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
    pub storage: StorageSettings,
    pub denoise: DenoiseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
    /// 0 keeps results until restart.
    pub ttl_seconds: u64,
    /// Memory provider only. 0 means no cap.
    pub max_entries: usize,
    pub sweep_interval_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Memory,
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenoiseSettings {
    pub fft_size: usize,
    pub n_std_threshold: f32,
    pub prop_decrease: f32,
    pub time_smoothing: f32,
    pub freq_smoothing_bins: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub level: String,
    pub enable_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            upload: UploadSettings {
                max_file_size_mb: 10,
            },
            storage: StorageSettings {
                provider: StorageProviderSetting::Memory,
                local_path: "uploads".to_string(),
                ttl_seconds: 3600,
                max_entries: 256,
                sweep_interval_seconds: 60,
            },
            denoise: DenoiseSettings {
                fft_size: 2048,
                n_std_threshold: 1.5,
                prop_decrease: 1.0,
                time_smoothing: 0.5,
                freq_smoothing_bins: 2,
            },
            logging: LoggingSettings {
                level: "info,hushwave=debug,tower_http=debug".to_string(),
                enable_json: false,
            },
        }
    }
}

impl Settings {
    /// Defaults, then `config/base.toml`, then `config/{environment}.toml`,
    /// then `APP__SECTION__KEY` environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from("config", environment)
    }

    pub fn load_from(config_dir: &str, environment: Environment) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name(&format!("{}/base", config_dir)).required(false))
            .add_source(
                File::with_name(&format!("{}/{}", config_dir, environment.as_str()))
                    .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".into()));
        }
        if self.upload.max_file_size_mb == 0 {
            return Err(ConfigError::Message(
                "upload.max_file_size_mb must be greater than 0".into(),
            ));
        }
        if self.storage.provider == StorageProviderSetting::Local
            && self.storage.local_path.trim().is_empty()
        {
            return Err(ConfigError::Message(
                "storage.local_path is required for the local provider".into(),
            ));
        }
        if self.storage.ttl_seconds > 0 && self.storage.sweep_interval_seconds == 0 {
            return Err(ConfigError::Message(
                "storage.sweep_interval_seconds must be greater than 0 when a ttl is set".into(),
            ));
        }
        Ok(())
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid server address: {}", e)))
    }
}

impl UploadSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_file_size_mb.saturating_mul(BYTES_PER_MB)
    }
}

impl StorageSettings {
    pub fn ttl(&self) -> Option<Duration> {
        (self.ttl_seconds > 0).then(|| Duration::from_secs(self.ttl_seconds))
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds.max(1))
    }
}
