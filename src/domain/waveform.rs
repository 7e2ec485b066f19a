//! Waveform - 生成的音频波形
//!
//! 单声道浮点采样序列 + 固定采样率。
//! 生命周期仅限单次调用：写入 WAV 后即丢弃。

/// 音频波形
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    /// 采样值，范围 [-1.0, 1.0]（编码时超出范围会被截断）
    pub samples: Vec<f32>,
    /// 采样率（Hz）
    pub sample_rate: u32,
}

impl Waveform {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// 音频时长（毫秒）
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        (self.samples.len() as u64 * 1000) / self.sample_rate as u64
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_ms() {
        let wave = Waveform::new(vec![0.0; 24000], 24000);
        assert_eq!(wave.duration_ms(), 1000);

        let wave = Waveform::new(vec![0.0; 12000], 24000);
        assert_eq!(wave.duration_ms(), 500);
    }

    #[test]
    fn test_duration_ms_zero_rate() {
        let wave = Waveform::new(vec![0.0; 100], 0);
        assert_eq!(wave.duration_ms(), 0);
    }
}
