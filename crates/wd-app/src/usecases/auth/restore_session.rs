//! 恢复持久化会话的用例

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, info_span, warn, Instrument};
use wd_core::account::AuthSession;
use wd_core::ports::AuthStatePort;

use crate::store::AuthStore;

/// Use case for restoring a persisted session at launch.
///
/// An expired session is discarded and cleared from disk; the console then
/// starts logged out rather than presenting a session the backend will
/// reject on first use.
pub struct RestoreSession {
    auth_state: Arc<dyn AuthStatePort>,
    store: AuthStore,
}

impl RestoreSession {
    pub fn new(auth_state: Arc<dyn AuthStatePort>, store: AuthStore) -> Self {
        Self { auth_state, store }
    }

    pub async fn execute(&self) -> Option<AuthSession> {
        let span = info_span!("usecase.restore_session.execute");

        async {
            let session = match self.auth_state.load().await {
                Ok(session) => session,
                Err(err) => {
                    warn!(error = %err, "failed to load persisted auth session");
                    return None;
                }
            };

            let session = match session {
                Some(session) => session,
                None => {
                    debug!("no persisted auth session");
                    return None;
                }
            };

            if session.is_expired_at(Utc::now()) {
                info!(user_id = session.user.id, "persisted session expired, discarding");
                if let Err(err) = self.auth_state.clear().await {
                    warn!(error = %err, "failed to clear expired auth session");
                }
                return None;
            }

            self.store
                .update(|snapshot| snapshot.session = Some(session.clone()));
            info!(user_id = session.user.id, "session restored");
            Some(session)
        }
        .instrument(span)
        .await
    }
}
