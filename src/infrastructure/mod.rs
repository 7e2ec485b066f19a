//! Infrastructure Layer - 基础设施实现
//!
//! - adapters: 生成器 / 对象存储 / WAV 编码
//! - scratch: 临时文件存储
//! - http: 任务提交入口

pub mod adapters;
pub mod http;
pub mod scratch;
