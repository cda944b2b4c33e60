use async_trait::async_trait;

use crate::setup::SetupCompletion;

/// Persistence for the setup acknowledgement flag.
#[async_trait]
pub trait SetupCompletionPort: Send + Sync {
    async fn get_completion(&self) -> anyhow::Result<SetupCompletion>;
    async fn set_completion(&self, completion: &SetupCompletion) -> anyhow::Result<()>;
}
