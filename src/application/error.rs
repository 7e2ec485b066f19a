//! 应用层错误定义
//!
//! 任务处理的封闭错误集合：校验 / 生成 / 写文件 / 上传。
//! 所有预期内的外部调用失败都映射为结构化的 `{"error": ...}` 结果，
//! 不向调用方抛出原始错误。

use thiserror::Error;

use crate::application::ports::{GeneratorError, ScratchError, StorageError};
use crate::domain::job::JobOutput;

/// 任务处理错误
#[derive(Debug, Error)]
pub enum HandlerError {
    /// 输入校验失败（字段级错误信息）
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    /// 模型生成失败
    #[error("Failed to generate audio: {0}")]
    Generation(String),

    /// 临时文件写入失败
    #[error("Failed to write audio: {0}")]
    Write(String),

    /// 上传或 URL 解析失败
    #[error("Failed to upload audio: {0}")]
    Upload(String),
}

impl HandlerError {
    /// 转换为任务结果
    pub fn into_output(self) -> JobOutput {
        JobOutput::error(self.to_string())
    }
}

impl From<GeneratorError> for HandlerError {
    fn from(err: GeneratorError) -> Self {
        Self::Generation(err.to_string())
    }
}

impl From<ScratchError> for HandlerError {
    fn from(err: ScratchError) -> Self {
        Self::Write(err.to_string())
    }
}

impl From<StorageError> for HandlerError {
    fn from(err: StorageError) -> Self {
        Self::Upload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generation_error_message() {
        let err: HandlerError = GeneratorError::ServiceError("oom".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Failed to generate audio: Service error: oom"
        );
    }

    #[test]
    fn test_upload_error_message() {
        let err: HandlerError = StorageError::UploadRejected("403".to_string()).into();
        assert_eq!(err.to_string(), "Failed to upload audio: Upload rejected: 403");
    }

    #[test]
    fn test_validation_joins_messages() {
        let err = HandlerError::Validation(vec!["a is required".into(), "b must be a string".into()]);
        assert_eq!(err.to_string(), "a is required; b must be a string");
    }

    #[test]
    fn test_into_output() {
        let output = HandlerError::Write("disk full".to_string()).into_output();
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({"error": "Failed to write audio: disk full"})
        );
    }
}
