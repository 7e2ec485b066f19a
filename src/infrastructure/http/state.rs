//! Application State

use std::sync::Arc;

use crate::application::JobHandler;

/// 应用状态
///
/// 只持有任务处理器；生成器等共享资源在处理器内部
pub struct AppState {
    pub job_handler: Arc<JobHandler>,
}

impl AppState {
    pub fn new(job_handler: Arc<JobHandler>) -> Self {
        Self { job_handler }
    }
}
