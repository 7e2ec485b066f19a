//! Vocara - 文本转音频生成 worker
//!
//! 接收文本任务，调用外部预训练模型生成波形，写入临时 WAV，
//! 上传到对象存储并返回公开 URL；临时文件在任何退出路径上都会被删除。
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Job / JobOutput / Waveform 值对象
//! - 输入 schema 校验
//!
//! 应用层 (application/):
//! - Ports: 出站端口（AudioGenerator, ObjectStorage, ScratchStore）
//! - Handler: 线性任务流水线（校验 → 生成 → 写文件 → 上传 → 清理）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 任务提交入口
//! - Adapters: HTTP/Fake 生成器、Supabase 存储客户端、WAV 编码
//! - Scratch: 临时文件存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
