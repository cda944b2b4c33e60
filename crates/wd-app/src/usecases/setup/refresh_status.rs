//! 刷新安装状态的用例

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info_span, warn, Instrument};
use wd_core::ports::{NotifierPort, SetupCompletionPort, SetupGatewayPort};
use wd_core::ports::Notice;
use wd_core::setup::DatabaseSetupStatus;

use crate::store::{SetupSnapshot, SetupStore};

/// Use case for refreshing installation progress from the backend.
///
/// Both status probes run concurrently. Each probe degrades independently:
/// a failed probe reports its step as not done while the other probe's
/// answer is still applied. Unknown is never treated as done.
///
/// 两个状态探测并发执行，各自独立降级：失败的探测将该步骤视为未完成，
/// 另一个探测的结果照常生效。未知一律视为未完成。
pub struct RefreshSetupStatus {
    gateway: Arc<dyn SetupGatewayPort>,
    completion: Arc<dyn SetupCompletionPort>,
    store: SetupStore,
    notifier: Arc<dyn NotifierPort>,
}

impl RefreshSetupStatus {
    pub fn new(
        gateway: Arc<dyn SetupGatewayPort>,
        completion: Arc<dyn SetupCompletionPort>,
        store: SetupStore,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            gateway,
            completion,
            store,
            notifier,
        }
    }

    /// Fetch both setup statuses, apply them to the store, and return the
    /// resulting snapshot.
    pub async fn execute(&self) -> SetupSnapshot {
        let span = info_span!("usecase.refresh_setup_status.execute");

        async {
            let (database, root) = tokio::join!(
                self.gateway.database_status(),
                self.gateway.root_account_exists(),
            );

            let database_detail = match database {
                Ok(detail) => detail,
                Err(err) => {
                    warn!(error = %err, "failed to fetch database setup status");
                    self.notify(Notice::error(err.user_message())).await;
                    DatabaseSetupStatus::default()
                }
            };

            let root_account_exists = match root {
                Ok(exists) => exists,
                Err(err) => {
                    warn!(error = %err, "failed to fetch root account status");
                    self.notify(Notice::error(err.user_message())).await;
                    false
                }
            };

            let completion = match self.completion.get_completion().await {
                Ok(completion) => completion,
                Err(err) => {
                    warn!(error = %err, "failed to load setup acknowledgement");
                    Default::default()
                }
            };

            self.store.update(|snapshot| {
                snapshot.status.database_configured = database_detail.configured;
                snapshot.status.root_account_exists = root_account_exists;
                snapshot.database_detail = database_detail;
                snapshot.completion = completion;
            });

            let snapshot = self.store.get();
            debug!(
                database_configured = snapshot.status.database_configured,
                root_account_exists = snapshot.status.root_account_exists,
                "setup status refreshed"
            );
            snapshot
        }
        .instrument(span)
        .await
    }

    /// Spawn a background task that re-runs the refresh on a fixed interval.
    ///
    /// The first refresh fires immediately; callers keep the handle to stop
    /// the task.
    pub fn spawn_periodic(self: Arc<Self>, every: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                self.execute().await;
            }
        })
    }

    async fn notify(&self, notice: Notice) {
        if let Err(err) = self.notifier.toast(notice).await {
            warn!(error = %err, "failed to deliver notification");
        }
    }
}
