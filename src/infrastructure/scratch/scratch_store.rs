//! File Scratch Store - 文件系统临时音频存储
//!
//! 实现 ScratchStorePort trait：路径由 job id 确定性派生，
//! 删除操作幂等

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{ScratchError, ScratchStorePort};
use crate::domain::waveform::Waveform;
use crate::infrastructure::adapters::codec::encode_wav;

/// 文件系统临时存储
pub struct FileScratchStore {
    /// 临时文件目录
    base_dir: PathBuf,
}

impl FileScratchStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 确保临时目录存在
    pub async fn ensure_dir(&self) -> Result<(), ScratchError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| ScratchError::IoError(e.to_string()))
    }
}

#[async_trait]
impl ScratchStorePort for FileScratchStore {
    fn audio_path(&self, job_id: &str) -> PathBuf {
        self.base_dir.join(format!("{}.wav", job_id))
    }

    async fn write_wav(&self, job_id: &str, waveform: &Waveform) -> Result<PathBuf, ScratchError> {
        if waveform.is_empty() {
            return Err(ScratchError::EncodeError("empty waveform".to_string()));
        }

        self.ensure_dir().await?;

        let path = self.audio_path(job_id);
        let data = encode_wav(waveform);

        fs::write(&path, &data)
            .await
            .map_err(|e| ScratchError::IoError(e.to_string()))?;

        tracing::debug!(
            job_id = %job_id,
            path = %path.display(),
            size = data.len(),
            "Scratch WAV written"
        );

        Ok(path)
    }

    async fn read(&self, job_id: &str) -> Result<Vec<u8>, ScratchError> {
        fs::read(self.audio_path(job_id))
            .await
            .map_err(|e| ScratchError::IoError(e.to_string()))
    }

    async fn remove(&self, job_id: &str) -> Result<(), ScratchError> {
        let path = self.audio_path(job_id);

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(job_id = %job_id, "Scratch file removed");
                Ok(())
            }
            // 幂等：文件不存在视为已删除
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ScratchError::IoError(e.to_string())),
        }
    }

    async fn exists(&self, job_id: &str) -> bool {
        self.audio_path(job_id).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn waveform() -> Waveform {
        Waveform::new(vec![0.5; 1000], 24000)
    }

    #[tokio::test]
    async fn test_write_read_remove() {
        let dir = tempdir().unwrap();
        let store = FileScratchStore::new(dir.path());

        let path = store.write_wav("job-1", &waveform()).await.unwrap();
        assert!(path.exists());
        assert!(store.exists("job-1").await);

        let data = store.read("job-1").await.unwrap();
        assert_eq!(&data[0..4], b"RIFF");

        store.remove("job-1").await.unwrap();
        assert!(!store.exists("job-1").await);
    }

    #[tokio::test]
    async fn test_path_derived_from_job_id() {
        let store = FileScratchStore::new("/tmp/vocara");
        assert_eq!(
            store.audio_path("abc-123"),
            PathBuf::from("/tmp/vocara/abc-123.wav")
        );
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileScratchStore::new(dir.path());

        store.remove("never-written").await.unwrap();
        store.remove("never-written").await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_waveform_rejected() {
        let dir = tempdir().unwrap();
        let store = FileScratchStore::new(dir.path());

        let err = store
            .write_wav("job-2", &Waveform::new(vec![], 24000))
            .await
            .unwrap_err();
        assert!(matches!(err, ScratchError::EncodeError(_)));
        assert!(!store.exists("job-2").await);
    }

    #[tokio::test]
    async fn test_write_creates_missing_dir() {
        let dir = tempdir().unwrap();
        let store = FileScratchStore::new(dir.path().join("nested/scratch"));

        store.write_wav("job-3", &waveform()).await.unwrap();
        assert!(store.exists("job-3").await);
    }
}
