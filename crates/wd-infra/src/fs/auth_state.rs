//! File-based session repository
//!
//! Keeps the signed-in identity and its expiry in a local JSON file so the
//! console can restore a live session after a restart. Credentials are never
//! written here.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use wd_core::account::AuthSession;
use wd_core::ports::AuthStatePort;

pub const DEFAULT_AUTH_STATE_FILE: &str = ".auth_state";

pub struct FileAuthStateRepository {
    state_file_path: PathBuf,
}

impl FileAuthStateRepository {
    /// Create repository with custom file path
    pub fn new(state_file_path: PathBuf) -> Self {
        Self { state_file_path }
    }

    /// Create repository with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self {
            state_file_path: base_dir.join(filename.into()),
        }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            state_file_path: base_dir.join(DEFAULT_AUTH_STATE_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.state_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl AuthStatePort for FileAuthStateRepository {
    async fn load(&self) -> anyhow::Result<Option<AuthSession>> {
        if !self.state_file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.state_file_path).await?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let session: AuthSession = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stored session: {e}"))?;

        Ok(Some(session))
    }

    async fn store(&self, session: &AuthSession) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(session)
            .map_err(|e| anyhow::anyhow!("Failed to serialize session: {e}"))?;

        let mut file = fs::File::create(&self.state_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create session file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write session file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync session file: {e}"))?;

        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        if !self.state_file_path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.state_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to remove session file: {e}"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use wd_core::account::User;

    use tempfile::TempDir;

    fn session() -> AuthSession {
        AuthSession {
            user: User {
                id: 1,
                username: "root".to_string(),
                email: "ops@example.com".to_string(),
                is_system_root: true,
            },
            expires_at: Utc::now() + Duration::hours(8),
        }
    }

    #[tokio::test]
    async fn load_returns_none_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileAuthStateRepository::new(temp_dir.path().join("missing.json"));

        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn store_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileAuthStateRepository::new(temp_dir.path().join("session.json"));

        let session = session();
        repo.store(&session).await.unwrap();
        let loaded = repo.load().await.unwrap();

        assert_eq!(loaded, Some(session));
    }

    #[tokio::test]
    async fn clear_removes_stored_session() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileAuthStateRepository::new(temp_dir.path().join("session.json"));

        repo.store(&session()).await.unwrap();
        repo.clear().await.unwrap();

        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_is_idempotent_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileAuthStateRepository::new(temp_dir.path().join("session.json"));

        repo.clear().await.unwrap();
        repo.clear().await.unwrap();
    }

    #[tokio::test]
    async fn invalid_json_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let state_file = temp_dir.path().join("invalid.json");

        fs::write(&state_file, "{invalid json").await.unwrap();

        let repo = FileAuthStateRepository::new(state_file);
        let result = repo.load().await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }
}
