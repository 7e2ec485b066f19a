//! Configuration - 配置加载与校验

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, validate_config, ConfigError};
pub use types::{
    AppConfig, LogConfig, ScratchConfig, ServerConfig, StorageConfig, TtsConfig, TtsEngineKind,
};
