//! 创建根账户的用例

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use wd_core::account::{RootAccountDraft, RootAccountError, RootCredential};
use wd_core::ports::{GatewayError, Notice, NotifierPort, SetupGatewayPort};

use super::refresh_status::RefreshSetupStatus;

#[derive(Debug, thiserror::Error)]
pub enum CreateRootAccountError {
    #[error(transparent)]
    Validation(#[from] RootAccountError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Use case for creating the system root account.
///
/// The backend answers with a one-time credential file. It is returned to
/// the caller for download and never persisted by the console; losing it
/// means going through recovery.
///
/// 创建系统根账户。返回的一次性凭证文件交由调用方下载，控制台不落盘。
pub struct CreateRootAccount {
    gateway: Arc<dyn SetupGatewayPort>,
    refresh: Arc<RefreshSetupStatus>,
    notifier: Arc<dyn NotifierPort>,
}

impl CreateRootAccount {
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

    pub async fn execute(
        &self,
        draft: &RootAccountDraft,
    ) -> Result<RootCredential, CreateRootAccountError> {
        draft.validate()?;

        let span = info_span!(
            "usecase.create_root_account.execute",
            username = %draft.username
        );

        async {
            match self.gateway.create_root_account(draft).await {
                Ok(credential) => {
                    info!(filename = %credential.filename, "root account created");
                    self.notify(Notice::success(credential.message.clone())).await;
                    self.refresh.execute().await;
                    Ok(credential)
                }
                Err(err) => {
                    warn!(error = %err, "root account creation failed");
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
