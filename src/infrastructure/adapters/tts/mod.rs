//! TTS Generator Adapters

mod fake_generator;
mod http_generator;

pub use fake_generator::{FakeTtsGenerator, FakeTtsGeneratorConfig};
pub use http_generator::{HttpTtsGenerator, HttpTtsGeneratorConfig};
