//! HTTP Routes
//!
//! API Endpoints:
//! - /ping   GET   健康检查
//! - /run    POST  提交任务，同步返回结果对象

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/run", post(handlers::run_job))
}
