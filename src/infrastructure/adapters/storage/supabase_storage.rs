//! Supabase Storage Client - 对象存储上传
//!
//! 实现 ObjectStoragePort trait，调用 Supabase Storage REST API
//!
//! 外部存储 API:
//! POST {endpoint}/storage/v1/object/{bucket}/{key}          上传对象（Bearer 认证）
//! GET  {endpoint}/storage/v1/object/public/{bucket}/{key}   公开访问 URL

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{ObjectStoragePort, StorageError};

/// Supabase 存储客户端配置
///
/// 三项外部配置缺一不可：endpoint、访问密钥、bucket 名；
/// 缺失在启动时由配置校验拦截
#[derive(Debug, Clone)]
pub struct SupabaseStorageConfig {
    /// 存储服务 endpoint，如 https://xyz.supabase.co
    pub endpoint: String,
    /// 服务访问密钥
    pub api_key: String,
    /// 目标 bucket 名
    pub bucket: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl SupabaseStorageConfig {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            bucket: bucket.into(),
            timeout_secs: 60,
        }
    }
}

/// Supabase 存储客户端
pub struct SupabaseStorageClient {
    client: Client,
    config: SupabaseStorageConfig,
}

impl SupabaseStorageClient {
    pub fn new(config: SupabaseStorageConfig) -> Result<Self, StorageError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StorageError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 上传对象的 URL
    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.bucket,
            key
        )
    }

    /// 对象的公开访问 URL
    fn object_public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.bucket,
            key
        )
    }

    /// 校验对象 key（key 直接拼进 URL 路径）
    fn check_key(key: &str) -> Result<(), StorageError> {
        if key.is_empty() || key.starts_with('/') || key.contains("..") {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStoragePort for SupabaseStorageClient {
    async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        Self::check_key(key)?;

        let url = self.object_url(key);
        let size = data.len();

        tracing::debug!(url = %url, size = size, content_type = %content_type, "Uploading object");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("apikey", &self.config.api_key)
            .header("content-type", content_type)
            .body(data)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StorageError::Timeout
                } else if e.is_connect() {
                    StorageError::NetworkError(format!("Cannot connect to storage service: {}", e))
                } else {
                    StorageError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StorageError::UploadRejected(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        tracing::info!(key = %key, bucket = %self.config.bucket, size = size, "Object uploaded");
        Ok(())
    }

    async fn public_url(&self, key: &str) -> Result<String, StorageError> {
        Self::check_key(key)?;
        Ok(self.object_public_url(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseStorageClient {
        SupabaseStorageClient::new(SupabaseStorageConfig::new(
            "https://xyz.supabase.co",
            "service-key",
            "audio",
        ))
        .unwrap()
    }

    #[test]
    fn test_object_url() {
        assert_eq!(
            client().object_url("job-1.wav"),
            "https://xyz.supabase.co/storage/v1/object/audio/job-1.wav"
        );
    }

    #[test]
    fn test_public_url() {
        assert_eq!(
            client().object_public_url("job-1.wav"),
            "https://xyz.supabase.co/storage/v1/object/public/audio/job-1.wav"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = SupabaseStorageClient::new(SupabaseStorageConfig::new(
            "https://xyz.supabase.co/",
            "k",
            "audio",
        ))
        .unwrap();
        assert_eq!(
            client.object_url("a.wav"),
            "https://xyz.supabase.co/storage/v1/object/audio/a.wav"
        );
    }

    #[test]
    fn test_key_validation() {
        assert!(SupabaseStorageClient::check_key("job-1.wav").is_ok());
        assert!(SupabaseStorageClient::check_key("").is_err());
        assert!(SupabaseStorageClient::check_key("/etc/passwd").is_err());
        assert!(SupabaseStorageClient::check_key("../escape.wav").is_err());
    }
}
