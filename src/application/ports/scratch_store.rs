//! Scratch Store Port - 临时音频文件存储抽象
//!
//! 每个任务写一个以 job id 命名的临时 WAV 文件，
//! 上传结束后无条件删除

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::waveform::Waveform;

/// 临时文件存储错误
#[derive(Debug, Error)]
pub enum ScratchError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Encode error: {0}")]
    EncodeError(String),
}

/// Scratch Store Port
///
/// 管理单次调用范围内的临时音频文件
#[async_trait]
pub trait ScratchStorePort: Send + Sync {
    /// 任务对应的临时文件路径（由 job id 确定性派生）
    fn audio_path(&self, job_id: &str) -> PathBuf;

    /// 将波形编码为 WAV 并写入临时文件
    async fn write_wav(&self, job_id: &str, waveform: &Waveform) -> Result<PathBuf, ScratchError>;

    /// 读取临时文件内容
    async fn read(&self, job_id: &str) -> Result<Vec<u8>, ScratchError>;

    /// 删除临时文件（幂等，文件不存在不算错误）
    async fn remove(&self, job_id: &str) -> Result<(), ScratchError>;

    /// 检查临时文件是否存在
    async fn exists(&self, job_id: &str) -> bool;
}
