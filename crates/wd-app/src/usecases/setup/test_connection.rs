//! 测试数据库连接的用例

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use wd_core::ports::{GatewayError, Notice, NotifierPort, SetupGatewayPort};
use wd_core::setup::{ConnectionProbe, DatabaseConfigDraft, DatabaseConfigError};

#[derive(Debug, thiserror::Error)]
pub enum TestConnectionError {
    #[error(transparent)]
    Validation(#[from] DatabaseConfigError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Use case for probing a candidate database configuration without saving it.
///
/// An unreachable database is a normal probe result, not an error: the probe
/// outcome carries the backend's message either way.
pub struct TestDatabaseConnection {
    gateway: Arc<dyn SetupGatewayPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl TestDatabaseConnection {
    pub fn new(gateway: Arc<dyn SetupGatewayPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { gateway, notifier }
    }

    pub async fn execute(
        &self,
        draft: &DatabaseConfigDraft,
    ) -> Result<ConnectionProbe, TestConnectionError> {
        draft.validate()?;

        let span = info_span!("usecase.test_database_connection.execute", kind = %draft.kind());

        async {
            match self.gateway.test_connection(draft).await {
                Ok(probe) => {
                    info!(reachable = probe.reachable, "connection probe finished");
                    Ok(probe)
                }
                Err(err) => {
                    warn!(error = %err, "connection probe failed");
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
