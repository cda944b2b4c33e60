use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wd_app::store::SetupStore;
use wd_app::usecases::{CompleteSetupOutcome, RefreshSetupStatus, SetupFlow};
use wd_core::account::{RootAccountDraft, RootCredential};
use wd_core::ports::{
    GatewayError, Notice, NotifierPort, SetupCompletionPort, SetupGatewayPort,
};
use wd_core::setup::{
    ConnectionProbe, DatabaseConfigDraft, DatabaseSetupStatus, HealthSnapshot, HealthState,
    SetupCompletion, StepId,
};

#[tokio::test]
async fn setup_flow_test_refresh_populates_store_from_gateway() {
    let gateway = Arc::new(MockSetupGateway::with_status(true, false));
    let (refresh, flow, store, _notices) = build_flow(gateway.clone());

    let snapshot = refresh.execute().await;

    assert!(snapshot.status.database_configured);
    assert!(!snapshot.status.root_account_exists);
    assert_eq!(store.get(), snapshot);
    assert_eq!(gateway.database_status_calls.load(Ordering::SeqCst), 1);

    let plan = flow.plan();
    assert_eq!(plan.current, Some(StepId::RootAccount));
    assert!(!plan.all_completed);
    assert!(!plan.can_proceed);
}

#[tokio::test]
async fn setup_flow_test_database_probe_failure_fails_closed() {
    let gateway = Arc::new(MockSetupGateway::with_status(true, true));
    *gateway.database_status.lock().unwrap() = Err(GatewayError::Timeout);
    let (refresh, _flow, store, notices) = build_flow(gateway);

    let snapshot = refresh.execute().await;

    // The failed probe reports not-configured; the healthy probe still lands.
    assert!(!snapshot.status.database_configured);
    assert!(snapshot.status.root_account_exists);
    assert!(!store.get().is_setup_complete());
    assert_eq!(notices.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn setup_flow_test_root_probe_failure_fails_closed() {
    let gateway = Arc::new(MockSetupGateway::with_status(true, true));
    *gateway.root_exists.lock().unwrap() =
        Err(GatewayError::Network("connection refused".to_string()));
    let (refresh, _flow, _store, _notices) = build_flow(gateway);

    let snapshot = refresh.execute().await;

    assert!(snapshot.status.database_configured);
    assert!(!snapshot.status.root_account_exists);
}

#[tokio::test]
async fn setup_flow_test_completion_refused_while_steps_pending() {
    let gateway = Arc::new(MockSetupGateway::with_status(true, false));
    let (refresh, flow, _store, _notices) = build_flow(gateway);
    refresh.execute().await;

    let outcome = flow.complete_setup().await.expect("complete setup");

    assert_eq!(outcome, CompleteSetupOutcome::StepsIncomplete);
    assert!(!flow.plan().can_proceed);
}

#[tokio::test]
async fn setup_flow_test_completion_persists_acknowledgement() {
    let gateway = Arc::new(MockSetupGateway::with_status(true, true));
    let completion = Arc::new(MockCompletionRepo::default());
    let store = SetupStore::default();
    let notifier = Arc::new(RecordingNotifier::default());
    let refresh = Arc::new(RefreshSetupStatus::new(
        gateway,
        completion.clone(),
        store.clone(),
        notifier,
    ));
    let flow = SetupFlow::new(completion.clone(), store.clone());

    refresh.execute().await;
    assert!(!flow.plan().can_proceed);

    let outcome = flow.complete_setup().await.expect("complete setup");

    assert_eq!(outcome, CompleteSetupOutcome::Acknowledged);
    assert!(completion.saved.lock().unwrap().has_acknowledged);
    assert!(flow.plan().can_proceed);
    assert!(store.get().completion.has_acknowledged);
}

#[tokio::test(start_paused = true)]
async fn setup_flow_test_periodic_refresh_keeps_polling() {
    let gateway = Arc::new(MockSetupGateway::with_status(false, false));
    let (refresh, _flow, _store, _notices) = build_flow(gateway.clone());

    let handle = refresh.spawn_periodic(std::time::Duration::from_secs(30));

    // First tick fires immediately, then once per interval.
    tokio::time::sleep(std::time::Duration::from_secs(65)).await;
    handle.abort();

    assert!(gateway.database_status_calls.load(Ordering::SeqCst) >= 3);
}

fn build_flow(
    gateway: Arc<MockSetupGateway>,
) -> (
    Arc<RefreshSetupStatus>,
    SetupFlow,
    SetupStore,
    Arc<Mutex<Vec<Notice>>>,
) {
    let completion = Arc::new(MockCompletionRepo::default());
    let store = SetupStore::default();
    let notifier = Arc::new(RecordingNotifier::default());
    let notices = notifier.notices.clone();
    let refresh = Arc::new(RefreshSetupStatus::new(
        gateway,
        completion.clone(),
        store.clone(),
        notifier,
    ));
    let flow = SetupFlow::new(completion, store.clone());
    (refresh, flow, store, notices)
}

struct MockSetupGateway {
    database_status: Mutex<Result<DatabaseSetupStatus, GatewayError>>,
    root_exists: Mutex<Result<bool, GatewayError>>,
    database_status_calls: AtomicUsize,
}

impl MockSetupGateway {
    fn with_status(database_configured: bool, root_account_exists: bool) -> Self {
        let detail = DatabaseSetupStatus {
            configured: database_configured,
            ..Default::default()
        };
        Self {
            database_status: Mutex::new(Ok(detail)),
            root_exists: Mutex::new(Ok(root_account_exists)),
            database_status_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SetupGatewayPort for MockSetupGateway {
    async fn database_status(&self) -> Result<DatabaseSetupStatus, GatewayError> {
        self.database_status_calls.fetch_add(1, Ordering::SeqCst);
        self.database_status.lock().unwrap().clone()
    }

    async fn root_account_exists(&self) -> Result<bool, GatewayError> {
        self.root_exists.lock().unwrap().clone()
    }

    async fn save_database_config(&self, _draft: &DatabaseConfigDraft) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn test_connection(
        &self,
        _draft: &DatabaseConfigDraft,
    ) -> Result<ConnectionProbe, GatewayError> {
        Ok(ConnectionProbe {
            reachable: true,
            message: "ok".to_string(),
        })
    }

    async fn create_root_account(
        &self,
        _draft: &RootAccountDraft,
    ) -> Result<RootCredential, GatewayError> {
        Err(GatewayError::Status {
            code: 500,
            message: "not wired in this test".to_string(),
        })
    }

    async fn health(&self) -> Result<HealthSnapshot, GatewayError> {
        Ok(HealthSnapshot {
            status: HealthState::SetupRequired,
            database: None,
        })
    }
}

#[derive(Default)]
struct MockCompletionRepo {
    saved: Mutex<SetupCompletion>,
}

#[async_trait]
impl SetupCompletionPort for MockCompletionRepo {
    async fn get_completion(&self) -> anyhow::Result<SetupCompletion> {
        Ok(self.saved.lock().unwrap().clone())
    }

    async fn set_completion(&self, completion: &SetupCompletion) -> anyhow::Result<()> {
        *self.saved.lock().unwrap() = completion.clone();
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

#[async_trait]
impl NotifierPort for RecordingNotifier {
    async fn toast(&self, notice: Notice) -> anyhow::Result<()> {
        self.notices.lock().unwrap().push(notice);
        Ok(())
    }
}
