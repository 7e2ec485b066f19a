//! Job - 任务值对象
//!
//! 一次调用处理一个 Job：外部运行时提交原始输入，
//! 处理结果要么是 `{"audio_url": ...}`，要么是 `{"error": ...}`，
//! 两者互斥，不存在部分成功。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 一个待处理的生成任务
///
/// `id` 在单次调用内唯一，用于命名临时文件和存储对象 key
#[derive(Debug, Clone)]
pub struct Job {
    /// 任务 ID（未提供时自动生成）
    pub id: String,
    /// 原始输入，校验后得到 [`JobInput`]
    pub input: serde_json::Value,
}

impl Job {
    /// 创建任务；`id` 为 None 时生成 UUID v4
    ///
    /// 注意：外部提供的 id 不做唯一性校验，重复 id 的并发任务
    /// 会竞争同一个临时文件名
    pub fn new(id: Option<String>, input: serde_json::Value) -> Self {
        Self {
            id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            input,
        }
    }

    /// 存储对象 key（也是临时文件名）
    pub fn object_key(&self) -> String {
        format!("{}.wav", self.id)
    }
}

/// 校验通过后的任务输入
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobInput {
    /// 要合成的文本
    pub text_prompt: String,
    /// 可选的音色/说话人预设
    pub voice_preset: Option<String>,
}

/// 任务结果
///
/// 序列化后恰好是 `{"audio_url": "<url>"}` 或 `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobOutput {
    Success { audio_url: String },
    Error { error: String },
}

impl JobOutput {
    pub fn success(audio_url: impl Into<String>) -> Self {
        Self::Success {
            audio_url: audio_url.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_generates_id_when_missing() {
        let job = Job::new(None, json!({}));
        assert!(Uuid::parse_str(&job.id).is_ok());
    }

    #[test]
    fn test_job_keeps_provided_id() {
        let job = Job::new(Some("job-42".to_string()), json!({}));
        assert_eq!(job.id, "job-42");
        assert_eq!(job.object_key(), "job-42.wav");
    }

    #[test]
    fn test_output_success_shape() {
        let output = JobOutput::success("https://example.com/a.wav");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value, json!({"audio_url": "https://example.com/a.wav"}));
    }

    #[test]
    fn test_output_error_shape() {
        let output = JobOutput::error("boom");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value, json!({"error": "boom"}));
    }
}
