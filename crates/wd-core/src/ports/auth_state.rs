use async_trait::async_trait;

use crate::account::AuthSession;

/// Persistence for the authenticated session across console restarts.
///
/// Stores identity and expiry only; no credentials or tokens.
#[async_trait]
pub trait AuthStatePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<AuthSession>>;
    async fn store(&self, session: &AuthSession) -> anyhow::Result<()>;
    async fn clear(&self) -> anyhow::Result<()>;
}
