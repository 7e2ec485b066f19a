//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// TTS 生成器配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 对象存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 临时文件配置
    #[serde(default)]
    pub scratch: ScratchConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 生成器种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsEngineKind {
    /// 外部模型服务
    #[default]
    Http,
    /// 固定波形，用于测试和离线运行
    Fake,
}

/// TTS 生成器配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// 生成器种类
    #[serde(default)]
    pub engine: TtsEngineKind,

    /// 模型服务基础 URL
    #[serde(default = "default_tts_url")]
    pub url: String,

    /// 生成请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    /// 预加载超时时间（秒）
    #[serde(default = "default_preload_timeout")]
    pub preload_timeout_secs: u64,
}

fn default_tts_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_tts_timeout() -> u64 {
    120
}

fn default_preload_timeout() -> u64 {
    600
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            engine: TtsEngineKind::default(),
            url: default_tts_url(),
            timeout_secs: default_tts_timeout(),
            preload_timeout_secs: default_preload_timeout(),
        }
    }
}

/// 对象存储配置
///
/// endpoint / api_key / bucket 三项必填，无默认值；
/// 缺失时启动校验直接失败
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 存储服务 endpoint，如 https://xyz.supabase.co
    #[serde(default)]
    pub endpoint: String,

    /// 服务访问密钥
    #[serde(default)]
    pub api_key: String,

    /// 目标 bucket 名
    #[serde(default)]
    pub bucket: String,

    /// 上传请求超时时间（秒）
    #[serde(default = "default_storage_timeout")]
    pub timeout_secs: u64,
}

fn default_storage_timeout() -> u64 {
    60
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            bucket: String::new(),
            timeout_secs: default_storage_timeout(),
        }
    }
}

/// 临时文件配置
#[derive(Debug, Clone, Deserialize)]
pub struct ScratchConfig {
    /// 临时音频文件目录，每个任务一个 {job_id}.wav
    #[serde(default = "default_scratch_dir")]
    pub dir: PathBuf,
}

fn default_scratch_dir() -> PathBuf {
    PathBuf::from("/tmp/vocara")
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            dir: default_scratch_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5080);
        assert_eq!(config.tts.url, "http://localhost:8000");
        assert_eq!(config.tts.engine, TtsEngineKind::Http);
        assert_eq!(config.scratch.dir, PathBuf::from("/tmp/vocara"));
        assert!(config.storage.endpoint.is_empty());
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5080");
    }

    #[test]
    fn test_engine_kind_from_str() {
        let config: TtsConfig = toml::from_str(r#"engine = "fake""#).unwrap();
        assert_eq!(config.engine, TtsEngineKind::Fake);
    }
}
