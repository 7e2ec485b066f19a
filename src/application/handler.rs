//! Job Handler - 任务处理流水线
//!
//! 严格线性的处理流程：
//! Received → Validating → Generating → Writing → Uploading → CleaningUp → Done
//!
//! 单个任务内无并发、无重试、无分支回退。
//! 临时文件在上传成功或失败后都会被删除。

use std::sync::Arc;

use crate::application::error::HandlerError;
use crate::application::ports::{
    AudioGeneratorPort, GenerateRequest, ObjectStoragePort, ScratchStorePort,
};
use crate::domain::job::{Job, JobOutput};
use crate::domain::schema::validate_job_input;

/// 上传对象的 content type
const AUDIO_CONTENT_TYPE: &str = "audio/wav";

/// 任务处理器
///
/// 持有共享的生成器（进程启动时预加载一次）、对象存储客户端
/// 和临时文件存储，可被并发调用；每次调用独立处理一个任务
pub struct JobHandler {
    generator: Arc<dyn AudioGeneratorPort>,
    storage: Arc<dyn ObjectStoragePort>,
    scratch: Arc<dyn ScratchStorePort>,
}

impl JobHandler {
    pub fn new(
        generator: Arc<dyn AudioGeneratorPort>,
        storage: Arc<dyn ObjectStoragePort>,
        scratch: Arc<dyn ScratchStorePort>,
    ) -> Self {
        Self {
            generator,
            storage,
            scratch,
        }
    }

    /// 处理单个任务
    ///
    /// 所有预期内的失败都转换为 `{"error": ...}` 结果，
    /// 不向调用方传播原始错误
    pub async fn handle(&self, job: Job) -> JobOutput {
        match self.process(&job).await {
            Ok(audio_url) => {
                tracing::info!(job_id = %job.id, audio_url = %audio_url, "Job completed");
                JobOutput::success(audio_url)
            }
            Err(e) => {
                tracing::warn!(job_id = %job.id, error = %e, "Job failed");
                e.into_output()
            }
        }
    }

    async fn process(&self, job: &Job) -> Result<String, HandlerError> {
        // 1. 校验输入，失败直接短路，不触发模型
        let input = validate_job_input(&job.input).map_err(HandlerError::Validation)?;

        tracing::debug!(
            job_id = %job.id,
            text_len = input.text_prompt.len(),
            voice_preset = ?input.voice_preset,
            "Input validated"
        );

        // 2. 生成波形
        let waveform = self
            .generator
            .generate(GenerateRequest {
                text: input.text_prompt,
                voice_preset: input.voice_preset,
            })
            .await?;

        tracing::debug!(
            job_id = %job.id,
            samples = waveform.samples.len(),
            sample_rate = waveform.sample_rate,
            duration_ms = waveform.duration_ms(),
            "Audio generated"
        );

        // 3. 写临时 WAV 文件；失败时清理可能的残留文件
        if let Err(e) = self.scratch.write_wav(&job.id, &waveform).await {
            self.cleanup(&job.id).await;
            return Err(e.into());
        }

        // 4. 上传 + 解析公开 URL；无论结果如何都删除临时文件
        let result = self.upload_audio(job).await;
        self.cleanup(&job.id).await;
        result
    }

    async fn upload_audio(&self, job: &Job) -> Result<String, HandlerError> {
        let key = job.object_key();

        let data = self
            .scratch
            .read(&job.id)
            .await
            .map_err(|e| HandlerError::Upload(e.to_string()))?;

        self.storage.upload(&key, data, AUDIO_CONTENT_TYPE).await?;

        let url = self.storage.public_url(&key).await?;
        Ok(url)
    }

    /// 删除临时文件，失败只记日志，不影响任务结果
    async fn cleanup(&self, job_id: &str) {
        if let Err(e) = self.scratch.remove(job_id).await {
            tracing::warn!(job_id = %job_id, error = %e, "Failed to remove scratch file");
        }
    }
}
