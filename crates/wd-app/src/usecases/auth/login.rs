//! 登录用例

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use wd_core::account::AuthSession;
use wd_core::ports::{AuthGatewayPort, AuthStatePort, GatewayError, Notice, NotifierPort};
use wd_core::security::SecretString;

use crate::store::AuthStore;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("username is required")]
    UsernameRequired,
    #[error("password is required")]
    PasswordRequired,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Use case for logging into the console.
///
/// On success the session is persisted for the next launch and published to
/// the auth store. A persistence failure downgrades to a warning; the live
/// session is still usable.
pub struct Login {
    gateway: Arc<dyn AuthGatewayPort>,
    auth_state: Arc<dyn AuthStatePort>,
    store: AuthStore,
    notifier: Arc<dyn NotifierPort>,
}

impl Login {
    pub fn new(
        gateway: Arc<dyn AuthGatewayPort>,
        auth_state: Arc<dyn AuthStatePort>,
        store: AuthStore,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            gateway,
            auth_state,
            store,
            notifier,
        }
    }

    pub async fn execute(
        &self,
        username: &str,
        password: SecretString,
    ) -> Result<AuthSession, LoginError> {
        if username.trim().is_empty() {
            return Err(LoginError::UsernameRequired);
        }
        if password.expose().is_empty() {
            return Err(LoginError::PasswordRequired);
        }

        let span = info_span!("usecase.login.execute", username = %username);

        async {
            match self.gateway.login(username, &password).await {
                Ok(session) => {
                    if let Err(err) = self.auth_state.store(&session).await {
                        warn!(error = %err, "failed to persist auth session");
                    }
                    self.store
                        .update(|snapshot| snapshot.session = Some(session.clone()));
                    info!(user_id = session.user.id, "login succeeded");
                    Ok(session)
                }
                Err(err) => {
                    warn!(error = %err, "login failed");
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
