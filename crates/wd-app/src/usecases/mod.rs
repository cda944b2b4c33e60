//! Business logic use cases
//! 是否是独立 Use Case，
//! 取决于“是否需要用户 / 系统再次做出决策”
//!
//! RefreshSetupStatus ──→ SetupStore ──→ SetupFlow (plan / complete)
//!                                   └─→ RouteGuard ←── AuthStore ←── Login / Logout
//! RecoveryOrchestrator: standalone state machine, no store involvement

pub mod auth;
pub mod navigation;
pub mod recovery;
pub mod setup;

pub use auth::{Login, LoginError, Logout, RestoreSession};
pub use navigation::RouteGuard;
pub use recovery::{RecoveryContext, RecoveryFlowError, RecoveryOrchestrator};
pub use setup::{
    CompleteSetupOutcome, CreateRootAccount, CreateRootAccountError, FetchSystemHealth,
    RefreshSetupStatus, SaveDatabaseConfigError, SaveDatabaseConfiguration, SetupFlow, SetupPlan,
    TestConnectionError, TestDatabaseConnection,
};
