//! Application Layer - 任务处理编排
//!
//! - ports: 出站端口（生成器 / 对象存储 / 临时文件存储）
//! - handler: 任务处理流水线
//! - error: 封闭的错误集合

pub mod error;
pub mod handler;
pub mod ports;

pub use error::HandlerError;
pub use handler::JobHandler;
