//! HTTP Infrastructure - 任务入口
//!
//! 外部运行时通过 HTTP 投递任务；本层只负责把请求体
//! 转成 Job、调用处理器、把结果对象原样返回

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
