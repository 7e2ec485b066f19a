//! Domain Layer - 核心领域模型
//!
//! - job: 任务与结果值对象
//! - waveform: 生成的音频波形
//! - schema: 任务输入的声明式校验

pub mod job;
pub mod schema;
pub mod waveform;
