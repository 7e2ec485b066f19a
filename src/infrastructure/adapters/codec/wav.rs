//! WAV Encoder - 波形编码为 WAV 字节
//!
//! f32 单声道采样 → 16-bit PCM，手工构造 RIFF 头（44 字节标准头）

use crate::domain::waveform::Waveform;

/// WAV 头长度
pub const WAV_HEADER_SIZE: usize = 44;

/// 将波形编码为 16-bit PCM 单声道 WAV
///
/// 超出 [-1.0, 1.0] 的采样值会被截断
pub fn encode_wav(waveform: &Waveform) -> Vec<u8> {
    let data_size = waveform.samples.len() * 2;
    let mut out = Vec::with_capacity(WAV_HEADER_SIZE + data_size);

    // RIFF 头
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&((36 + data_size) as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk: PCM, 单声道, 16 bit
    let num_channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let block_align = num_channels * bits_per_sample / 8;
    let byte_rate = waveform.sample_rate * block_align as u32;

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&num_channels.to_le_bytes());
    out.extend_from_slice(&waveform.sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&(data_size as u32).to_le_bytes());

    for &sample in &waveform.samples {
        let clamped = sample.clamp(-1.0, 1.0);
        let value = (clamped * i16::MAX as f32) as i16;
        out.extend_from_slice(&value.to_le_bytes());
    }

    out
}
