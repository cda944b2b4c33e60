//! 登出用例

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use wd_core::ports::{AuthGatewayPort, AuthStatePort, Notice, NotifierPort};

use crate::store::AuthStore;

/// Use case for logging out of the console.
///
/// The session identity lives in a server-issued cookie, so local state is
/// only cleared after the backend confirms the logout. A failed call keeps
/// the session; the operator retries.
pub struct Logout {
    gateway: Arc<dyn AuthGatewayPort>,
    auth_state: Arc<dyn AuthStatePort>,
    store: AuthStore,
    notifier: Arc<dyn NotifierPort>,
}

impl Logout {
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

    pub async fn execute(&self) -> Result<(), wd_core::ports::GatewayError> {
        let span = info_span!("usecase.logout.execute");

        async {
            match self.gateway.logout().await {
                Ok(()) => {
                    if let Err(err) = self.auth_state.clear().await {
                        warn!(error = %err, "failed to clear persisted auth session");
                    }
                    self.store.update(|snapshot| snapshot.session = None);
                    info!("logged out");
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "logout failed, keeping local session");
                    self.notify(Notice::error(err.user_message())).await;
                    Err(err)
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

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::sync::Mutex as StdMutex;
    use wd_core::account::{AuthSession, User};
    use wd_core::ports::GatewayError;
    use wd_core::security::SecretString;

    use crate::store::AuthSnapshot;

    fn session() -> AuthSession {
        AuthSession {
            user: User {
                id: 1,
                username: "root".to_string(),
                email: "ops@example.com".to_string(),
                is_system_root: true,
            },
            expires_at: Utc::now() + Duration::hours(8),
        }
    }

    struct StubGateway {
        fail: bool,
    }

    #[async_trait]
    impl AuthGatewayPort for StubGateway {
        async fn login(
            &self,
            _username: &str,
            _password: &SecretString,
        ) -> Result<AuthSession, GatewayError> {
            Err(GatewayError::Network("down".to_string()))
        }

        async fn logout(&self) -> Result<(), GatewayError> {
            if self.fail {
                Err(GatewayError::Network("down".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct MockAuthState {
        stored: StdMutex<Option<AuthSession>>,
    }

    #[async_trait]
    impl AuthStatePort for MockAuthState {
        async fn load(&self) -> anyhow::Result<Option<AuthSession>> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn store(&self, session: &AuthSession) -> anyhow::Result<()> {
            *self.stored.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        async fn clear(&self) -> anyhow::Result<()> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: StdMutex<Vec<Notice>>,
    }

    #[async_trait]
    impl NotifierPort for RecordingNotifier {
        async fn toast(&self, notice: Notice) -> anyhow::Result<()> {
            self.notices.lock().unwrap().push(notice);
            Ok(())
        }
    }

    fn logged_in_fixture(fail: bool) -> (Logout, Arc<MockAuthState>, AuthStore, Arc<RecordingNotifier>) {
        let auth_state = Arc::new(MockAuthState::default());
        *auth_state.stored.lock().unwrap() = Some(session());
        let store = AuthStore::new(AuthSnapshot {
            session: Some(session()),
        });
        let notifier = Arc::new(RecordingNotifier::default());
        let logout = Logout::new(
            Arc::new(StubGateway { fail }),
            auth_state.clone(),
            store.clone(),
            notifier.clone(),
        );
        (logout, auth_state, store, notifier)
    }

    #[tokio::test]
    async fn logout_clears_local_state_after_server_confirms() {
        let (logout, auth_state, store, notifier) = logged_in_fixture(false);

        logout.execute().await.unwrap();

        assert!(auth_state.stored.lock().unwrap().is_none());
        assert!(!store.get().is_authenticated());
        assert!(notifier.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_logout_keeps_session_and_reports() {
        let (logout, auth_state, store, notifier) = logged_in_fixture(true);

        let result = logout.execute().await;

        assert!(result.is_err());
        assert!(auth_state.stored.lock().unwrap().is_some());
        assert!(store.get().is_authenticated());
        assert_eq!(notifier.notices.lock().unwrap().len(), 1);
    }
}
