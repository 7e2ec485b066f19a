//! HTTP TTS Generator - 调用外部文本转音频模型服务
//!
//! 实现 AudioGeneratorPort trait，通过 HTTP 调用模型服务
//!
//! 外部模型 API:
//! POST {base}/api/model/preload    进程启动时调用一次，触发权重加载
//! POST {base}/api/tts/generate     Request: {"text": "...", "voice_preset": "..."}  (JSON)
//!                                  Response: f32 LE PCM binary, 采样率在 X-Sample-Rate header

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{AudioGeneratorPort, GenerateRequest, GeneratorError};
use crate::domain::waveform::Waveform;

/// 生成请求体 (JSON)
#[derive(Debug, Serialize)]
struct TtsHttpRequest {
    /// 要合成的文本
    text: String,
    /// 音色预设，None 时不发送该字段
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_preset: Option<String>,
}

/// HTTP TTS 生成器配置
#[derive(Debug, Clone)]
pub struct HttpTtsGeneratorConfig {
    /// 模型服务基础 URL
    pub base_url: String,
    /// 生成请求超时时间（秒）
    pub timeout_secs: u64,
    /// 预加载超时时间（秒），权重加载可能较慢
    pub preload_timeout_secs: u64,
}

impl Default for HttpTtsGeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 120,
            preload_timeout_secs: 600,
        }
    }
}

impl HttpTtsGeneratorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP TTS 生成器
///
/// 通过 HTTP 调用外部模型服务；模型权重由服务端持有，
/// preload 只在进程启动时触发一次
pub struct HttpTtsGenerator {
    client: Client,
    config: HttpTtsGeneratorConfig,
}

impl HttpTtsGenerator {
    pub fn new(config: HttpTtsGeneratorConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeneratorError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/tts/generate", self.config.base_url)
    }

    fn preload_url(&self) -> String {
        format!("{}/api/model/preload", self.config.base_url)
    }

    fn map_send_error(e: reqwest::Error) -> GeneratorError {
        if e.is_timeout() {
            GeneratorError::Timeout
        } else if e.is_connect() {
            GeneratorError::NetworkError(format!("Cannot connect to model service: {}", e))
        } else {
            GeneratorError::NetworkError(e.to_string())
        }
    }

    /// 解析 f32 LE PCM 响应体
    fn parse_samples(data: &[u8]) -> Result<Vec<f32>, GeneratorError> {
        if data.len() % 4 != 0 {
            return Err(GeneratorError::InvalidResponse(format!(
                "PCM body length {} is not a multiple of 4",
                data.len()
            )));
        }

        Ok(data
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect())
    }
}

#[async_trait]
impl AudioGeneratorPort for HttpTtsGenerator {
    async fn preload(&self) -> Result<(), GeneratorError> {
        tracing::info!(url = %self.preload_url(), "Preloading model weights");

        let response = self
            .client
            .post(&self.preload_url())
            .timeout(Duration::from_secs(self.config.preload_timeout_secs))
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::ServiceError(format!(
                "Preload failed: HTTP {}: {}",
                status, error_text
            )));
        }

        tracing::info!("Model weights preloaded");
        Ok(())
    }

    async fn generate(&self, request: GenerateRequest) -> Result<Waveform, GeneratorError> {
        let http_request = TtsHttpRequest {
            text: request.text,
            voice_preset: request.voice_preset,
        };

        tracing::debug!(
            url = %self.generate_url(),
            text_len = http_request.text.len(),
            voice_preset = ?http_request.voice_preset,
            "Sending generate request"
        );

        let response = self
            .client
            .post(&self.generate_url())
            .json(&http_request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // 采样率在 header 中
        let sample_rate: u32 = response
            .headers()
            .get("X-Sample-Rate")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| {
                GeneratorError::InvalidResponse("missing X-Sample-Rate header".to_string())
            })?;

        let body = response
            .bytes()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        let samples = Self::parse_samples(&body)?;
        let waveform = Waveform::new(samples, sample_rate);

        tracing::info!(
            samples = waveform.samples.len(),
            sample_rate = sample_rate,
            duration_ms = waveform.duration_ms(),
            "Generation completed"
        );

        Ok(waveform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpTtsGeneratorConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpTtsGeneratorConfig::new("http://model:9000").with_timeout(60);
        assert_eq!(config.base_url, "http://model:9000");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_parse_samples() {
        let mut data = Vec::new();
        data.extend_from_slice(&0.5f32.to_le_bytes());
        data.extend_from_slice(&(-0.25f32).to_le_bytes());

        let samples = HttpTtsGenerator::parse_samples(&data).unwrap();
        assert_eq!(samples, vec![0.5, -0.25]);
    }

    #[test]
    fn test_parse_samples_bad_length() {
        let err = HttpTtsGenerator::parse_samples(&[0, 1, 2]).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidResponse(_)));
    }

    #[test]
    fn test_request_omits_missing_preset() {
        let request = TtsHttpRequest {
            text: "hi".to_string(),
            voice_preset: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"text":"hi"}"#);

        let request = TtsHttpRequest {
            text: "hi".to_string(),
            voice_preset: Some("v2/en_speaker_6".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("voice_preset"));
    }
}
