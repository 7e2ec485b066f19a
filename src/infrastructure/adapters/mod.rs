//! Infrastructure Adapters
//!
//! 出站端口的具体实现：
//! - tts: HTTP / Fake 生成器
//! - storage: Supabase 对象存储客户端
//! - codec: WAV 编码

pub mod codec;
pub mod storage;
pub mod tts;

pub use storage::{SupabaseStorageClient, SupabaseStorageConfig};
pub use tts::{FakeTtsGenerator, FakeTtsGeneratorConfig, HttpTtsGenerator, HttpTtsGeneratorConfig};
