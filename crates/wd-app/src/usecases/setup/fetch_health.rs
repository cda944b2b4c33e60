//! 获取后端健康状态的用例

use std::sync::Arc;

use tracing::{debug, info_span, warn, Instrument};
use wd_core::ports::{GatewayError, SetupGatewayPort};
use wd_core::setup::HealthSnapshot;

/// Use case for fetching the backend health snapshot.
///
/// Shown inline on the status page, so failures are returned to the caller
/// instead of raising a toast.
pub struct FetchSystemHealth {
    gateway: Arc<dyn SetupGatewayPort>,
}

impl FetchSystemHealth {
    pub fn new(gateway: Arc<dyn SetupGatewayPort>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self) -> Result<HealthSnapshot, GatewayError> {
        let span = info_span!("usecase.fetch_system_health.execute");

        async {
            match self.gateway.health().await {
                Ok(snapshot) => {
                    debug!(status = ?snapshot.status, "health snapshot fetched");
                    Ok(snapshot)
                }
                Err(err) => {
                    warn!(error = %err, "health check failed");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
