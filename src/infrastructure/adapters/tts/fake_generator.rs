//! Fake TTS Generator - 用于测试和离线运行的生成器
//!
//! 不调用任何外部服务，返回确定性的正弦波形

use async_trait::async_trait;
use std::f32::consts::PI;

use crate::application::ports::{AudioGeneratorPort, GenerateRequest, GeneratorError};
use crate::domain::waveform::Waveform;

/// Fake 生成器配置
#[derive(Debug, Clone)]
pub struct FakeTtsGeneratorConfig {
    /// 固定返回的音频时长（毫秒）
    pub duration_ms: u64,
    /// 采样率
    pub sample_rate: u32,
    /// 正弦波频率（Hz）
    pub frequency: f32,
}

impl Default for FakeTtsGeneratorConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            sample_rate: 24000,
            frequency: 440.0,
        }
    }
}

/// Fake TTS 生成器
///
/// 始终返回配置时长的正弦波，文本和预设只记入日志
pub struct FakeTtsGenerator {
    config: FakeTtsGeneratorConfig,
}

impl FakeTtsGenerator {
    pub fn new(config: FakeTtsGeneratorConfig) -> Self {
        tracing::info!(
            duration_ms = config.duration_ms,
            sample_rate = config.sample_rate,
            "FakeTtsGenerator initialized"
        );
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeTtsGeneratorConfig::default())
    }
}

#[async_trait]
impl AudioGeneratorPort for FakeTtsGenerator {
    async fn generate(&self, request: GenerateRequest) -> Result<Waveform, GeneratorError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice_preset = ?request.voice_preset,
            "FakeTtsGenerator: returning fixed waveform"
        );

        let num_samples =
            (self.config.sample_rate as u64 * self.config.duration_ms / 1000) as usize;
        let samples = (0..num_samples)
            .map(|i| {
                let t = i as f32 / self.config.sample_rate as f32;
                (2.0 * PI * self.config.frequency * t).sin() * 0.5
            })
            .collect();

        Ok(Waveform::new(samples, self.config.sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_duration() {
        let generator = FakeTtsGenerator::new(FakeTtsGeneratorConfig {
            duration_ms: 500,
            sample_rate: 24000,
            frequency: 440.0,
        });

        let waveform = generator
            .generate(GenerateRequest {
                text: "hello".to_string(),
                voice_preset: None,
            })
            .await
            .unwrap();

        assert_eq!(waveform.samples.len(), 12000);
        assert_eq!(waveform.sample_rate, 24000);
        assert_eq!(waveform.duration_ms(), 500);
    }

    #[tokio::test]
    async fn test_samples_within_range() {
        let generator = FakeTtsGenerator::with_defaults();
        let waveform = generator
            .generate(GenerateRequest {
                text: "hi".to_string(),
                voice_preset: Some("any".to_string()),
            })
            .await
            .unwrap();

        assert!(waveform.samples.iter().all(|s| s.abs() <= 0.5));
    }
}
