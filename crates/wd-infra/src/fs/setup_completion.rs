//! File-based setup completion repository
//!
//! Persists the wizard acknowledgement flag to a local JSON file in the
//! application data directory.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use wd_core::ports::SetupCompletionPort;
use wd_core::setup::SetupCompletion;

pub const DEFAULT_SETUP_COMPLETION_FILE: &str = ".setup_completion";

pub struct FileSetupCompletionRepository {
    completion_file_path: PathBuf,
}

impl FileSetupCompletionRepository {
    /// Create repository with custom file path
    pub fn new(completion_file_path: PathBuf) -> Self {
        Self {
            completion_file_path,
        }
    }

    /// Create repository with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self {
            completion_file_path: base_dir.join(filename.into()),
        }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            completion_file_path: base_dir.join(DEFAULT_SETUP_COMPLETION_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.completion_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SetupCompletionPort for FileSetupCompletionRepository {
    async fn get_completion(&self) -> anyhow::Result<SetupCompletion> {
        if !self.completion_file_path.exists() {
            return Ok(SetupCompletion::default());
        }

        let content = fs::read_to_string(&self.completion_file_path).await?;

        if content.trim().is_empty() {
            return Ok(SetupCompletion::default());
        }

        let completion: SetupCompletion = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse setup completion: {e}"))?;

        Ok(completion)
    }

    async fn set_completion(&self, completion: &SetupCompletion) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(completion)
            .map_err(|e| anyhow::anyhow!("Failed to serialize setup completion: {e}"))?;

        let mut file = fs::File::create(&self.completion_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create completion file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write completion file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync completion file: {e}"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn get_completion_returns_default_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSetupCompletionRepository::new(temp_dir.path().join("missing.json"));

        let completion = repo.get_completion().await.unwrap();

        assert!(!completion.has_acknowledged);
    }

    #[tokio::test]
    async fn set_completion_then_get_completion_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSetupCompletionRepository::new(temp_dir.path().join("completion.json"));

        let completion = SetupCompletion {
            has_acknowledged: true,
        };

        repo.set_completion(&completion).await.unwrap();
        let stored = repo.get_completion().await.unwrap();

        assert_eq!(stored, completion);
    }

    #[tokio::test]
    async fn empty_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let completion_file = temp_dir.path().join("empty.json");

        fs::write(&completion_file, "").await.unwrap();

        let repo = FileSetupCompletionRepository::new(completion_file);
        let completion = repo.get_completion().await.unwrap();

        assert!(!completion.has_acknowledged);
    }

    #[tokio::test]
    async fn invalid_json_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let completion_file = temp_dir.path().join("invalid.json");

        fs::write(&completion_file, "{invalid json").await.unwrap();

        let repo = FileSetupCompletionRepository::new(completion_file);
        let result = repo.get_completion().await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[tokio::test]
    async fn with_defaults_uses_expected_path() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSetupCompletionRepository::with_defaults(temp_dir.path().to_path_buf());

        let expected_path = temp_dir.path().join(DEFAULT_SETUP_COMPLETION_FILE);
        assert_eq!(repo.completion_file_path, expected_path);
    }
}
