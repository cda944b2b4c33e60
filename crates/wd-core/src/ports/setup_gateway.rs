use async_trait::async_trait;

use crate::account::{RootAccountDraft, RootCredential};
use crate::ports::errors::GatewayError;
use crate::setup::{ConnectionProbe, DatabaseConfigDraft, DatabaseSetupStatus, HealthSnapshot};

/// Backend operations used by the setup wizard.
///
/// The two status reads are independent; callers must not assume any
/// ordering between them.
#[async_trait]
pub trait SetupGatewayPort: Send + Sync {
    async fn database_status(&self) -> Result<DatabaseSetupStatus, GatewayError>;

    async fn root_account_exists(&self) -> Result<bool, GatewayError>;

    async fn save_database_config(
        &self,
        draft: &DatabaseConfigDraft,
    ) -> Result<(), GatewayError>;

    async fn test_connection(
        &self,
        draft: &DatabaseConfigDraft,
    ) -> Result<ConnectionProbe, GatewayError>;

    async fn create_root_account(
        &self,
        draft: &RootAccountDraft,
    ) -> Result<RootCredential, GatewayError>;

    async fn health(&self) -> Result<HealthSnapshot, GatewayError>;
}
