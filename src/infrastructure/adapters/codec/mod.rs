//! Audio Codec Adapters

pub mod wav;

pub use wav::{encode_wav, WAV_HEADER_SIZE};
