//! Object Storage Port - 对象存储抽象
//!
//! 定义"上传对象 + 解析公开 URL"两个操作，
//! bucket 管理不在此范围内

use async_trait::async_trait;
use thiserror::Error;

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Upload rejected: {0}")]
    UploadRejected(String),

    #[error("Invalid object key: {0}")]
    InvalidKey(String),
}

/// Object Storage Port
///
/// 外部对象存储服务的抽象接口
#[async_trait]
pub trait ObjectStoragePort: Send + Sync {
    /// 上传对象到配置的 bucket
    async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// 获取对象的公开访问 URL
    async fn public_url(&self, key: &str) -> Result<String, StorageError>;
}
