//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, TtsEngineKind};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VOCARA_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `VOCARA_STORAGE__ENDPOINT=https://xyz.supabase.co`
/// - `VOCARA_STORAGE__API_KEY=service-key`
/// - `VOCARA_STORAGE__BUCKET=audio`
/// - `VOCARA_TTS__URL=http://model-server:8000`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5080)?
        .set_default("tts.engine", "http")?
        .set_default("tts.url", "http://localhost:8000")?
        .set_default("tts.timeout_secs", 120)?
        .set_default("tts.preload_timeout_secs", 600)?
        .set_default("storage.endpoint", "")?
        .set_default("storage.api_key", "")?
        .set_default("storage.bucket", "")?
        .set_default("storage.timeout_secs", 60)?
        .set_default("scratch.dir", "/tmp/vocara")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 前缀: VOCARA_，层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("VOCARA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 存储三要素缺失属于致命错误：无法上传的 worker 不应接收任务
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.tts.engine == TtsEngineKind::Http && config.tts.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS URL cannot be empty".to_string(),
        ));
    }

    if config.storage.endpoint.is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage endpoint is required (VOCARA_STORAGE__ENDPOINT)".to_string(),
        ));
    }

    if config.storage.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage API key is required (VOCARA_STORAGE__API_KEY)".to_string(),
        ));
    }

    if config.storage.bucket.is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage bucket is required (VOCARA_STORAGE__BUCKET)".to_string(),
        ));
    }

    if config.scratch.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Scratch directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，密钥不输出）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("TTS Engine: {:?}", config.tts.engine);
    tracing::info!("TTS URL: {}", config.tts.url);
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::info!("Storage Endpoint: {}", config.storage.endpoint);
    tracing::info!("Storage Bucket: {}", config.storage.bucket);
    tracing::info!("Scratch Directory: {:?}", config.scratch.dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.storage.endpoint = "https://xyz.supabase.co".to_string();
        config.storage.api_key = "service-key".to_string();
        config.storage.bucket = "audio".to_string();
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_missing_storage_endpoint() {
        let mut config = valid_config();
        config.storage.endpoint = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_missing_api_key() {
        let mut config = valid_config();
        config.storage.api_key = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_missing_bucket() {
        let mut config = valid_config();
        config.storage.bucket = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_tts_url() {
        let mut config = valid_config();
        config.tts.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_fake_engine_allows_empty_tts_url() {
        let mut config = valid_config();
        config.tts.engine = TtsEngineKind::Fake;
        config.tts.url = String::new();
        assert!(validate_config(&config).is_ok());
    }
}
