//! Audio Generator Port - 文本转音频模型抽象
//!
//! 定义生成模型的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::waveform::Waveform;

/// 生成错误
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unknown voice preset: {0}")]
    UnknownPreset(String),
}

/// 生成请求
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// 要合成的文本
    pub text: String,
    /// 可选的音色预设（None 时由模型使用默认音色）
    pub voice_preset: Option<String>,
}

/// Audio Generator Port
///
/// 外部文本转音频模型的抽象接口
#[async_trait]
pub trait AudioGeneratorPort: Send + Sync {
    /// 预加载模型权重
    ///
    /// 进程启动时调用一次，之后的调用共享已加载的状态；
    /// 失败应视为启动错误
    async fn preload(&self) -> Result<(), GeneratorError> {
        Ok(()) // 默认实现：无需预加载
    }

    /// 执行生成，返回固定采样率的波形
    async fn generate(&self, request: GenerateRequest) -> Result<Waveform, GeneratorError>;
}
