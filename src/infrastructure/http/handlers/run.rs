//! Run Handler - 任务提交入口
//!
//! 外部运行时通过此端点逐个投递任务并取回结果对象。
//! 成功和失败都返回 HTTP 200，结果语义在响应体里
//! （`{"audio_url": ...}` 或 `{"error": ...}`）

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::job::JobOutput;
use crate::infrastructure::http::dto::RunJobRequest;
use crate::infrastructure::http::state::AppState;

/// 提交一个任务并等待结果
pub async fn run_job(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RunJobRequest>,
) -> Json<JobOutput> {
    let job = request.into_job();

    tracing::info!(job_id = %job.id, "Job received");

    let output = state.job_handler.handle(job).await;
    Json(output)
}
