use async_trait::async_trait;

use crate::account::AuthSession;
use crate::ports::errors::GatewayError;
use crate::security::SecretString;

/// Backend authentication operations.
#[async_trait]
pub trait AuthGatewayPort: Send + Sync {
    async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<AuthSession, GatewayError>;

    async fn logout(&self) -> Result<(), GatewayError>;
}
