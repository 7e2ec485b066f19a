//! Data Transfer Objects
//!
//! 运行时提交任务的请求体：`{"id": "...", "input": {...}}`，
//! `id` 可省略；响应体直接是 JobOutput 的序列化结果

use serde::Deserialize;

use crate::domain::job::Job;

/// 提交任务请求
#[derive(Debug, Deserialize)]
pub struct RunJobRequest {
    /// 任务 ID，省略时自动生成
    #[serde(default)]
    pub id: Option<String>,
    /// 原始任务输入，由 schema 校验
    pub input: serde_json::Value,
}

impl RunJobRequest {
    pub fn into_job(self) -> Job {
        Job::new(self.id, self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_id() {
        let request: RunJobRequest = serde_json::from_value(json!({
            "id": "job-9",
            "input": {"text_prompt": "hi"},
        }))
        .unwrap();

        let job = request.into_job();
        assert_eq!(job.id, "job-9");
        assert_eq!(job.input, json!({"text_prompt": "hi"}));
    }

    #[test]
    fn test_deserialize_without_id() {
        let request: RunJobRequest = serde_json::from_value(json!({
            "input": {"text_prompt": "hi"},
        }))
        .unwrap();

        let job = request.into_job();
        assert!(!job.id.is_empty());
    }

    #[test]
    fn test_input_is_required() {
        let result: Result<RunJobRequest, _> = serde_json::from_value(json!({"id": "x"}));
        assert!(result.is_err());
    }
}
