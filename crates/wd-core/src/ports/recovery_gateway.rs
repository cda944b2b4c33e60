use async_trait::async_trait;

use crate::ports::errors::GatewayError;
use crate::recovery::{RecoveryTicket, ValidatedKey};
use crate::security::SecretString;

/// Backend operations used by the recovery flow.
///
/// A key that the backend reports as invalid surfaces as
/// `GatewayError::Rejected`, not as an `Ok` value.
#[async_trait]
pub trait RecoveryGatewayPort: Send + Sync {
    async fn validate_key(&self, pem: &SecretString) -> Result<ValidatedKey, GatewayError>;

    async fn open_recovery_request(
        &self,
        pem_key_id: &str,
    ) -> Result<RecoveryTicket, GatewayError>;

    async fn reset_password(
        &self,
        pem: &SecretString,
        new_password: &SecretString,
    ) -> Result<(), GatewayError>;
}
