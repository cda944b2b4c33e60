//! 保存数据库配置的用例

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use wd_core::ports::{GatewayError, Notice, NotifierPort, SetupGatewayPort};
use wd_core::setup::{DatabaseConfigDraft, DatabaseConfigError};

use super::refresh_status::RefreshSetupStatus;

#[derive(Debug, thiserror::Error)]
pub enum SaveDatabaseConfigError {
    #[error(transparent)]
    Validation(#[from] DatabaseConfigError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Use case for submitting a database configuration to the backend.
///
/// Validation runs locally first; only a valid draft reaches the wire. On
/// success the setup status is refreshed so the wizard advances without an
/// extra round trip from the caller.
pub struct SaveDatabaseConfiguration {
    gateway: Arc<dyn SetupGatewayPort>,
    refresh: Arc<RefreshSetupStatus>,
    notifier: Arc<dyn NotifierPort>,
}

impl SaveDatabaseConfiguration {
    pub fn new(
        gateway: Arc<dyn SetupGatewayPort>,
        refresh: Arc<RefreshSetupStatus>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            gateway,
            refresh,
            notifier,
        }
    }

    pub async fn execute(&self, draft: &DatabaseConfigDraft) -> Result<(), SaveDatabaseConfigError> {
        draft.validate()?;

        let span = info_span!("usecase.save_database_configuration.execute", kind = %draft.kind());

        async {
            match self.gateway.save_database_config(draft).await {
                Ok(()) => {
                    info!("database configuration accepted");
                    self.notify(Notice::success("Database configuration saved"))
                        .await;
                    self.refresh.execute().await;
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "database configuration rejected");
                    self.notify(Notice::error(err.user_message())).await;
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn notify(&self, notice: Notice) {
        if let Err(err) = self.notifier.toast(notice).await {
            warn!(error = %err, "failed to deliver notification");
        }
    }
}
