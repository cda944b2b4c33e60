//! Setup wizard use cases.
//!
//! 安装向导用例。

pub mod create_root_account;
pub mod fetch_health;
pub mod flow;
pub mod refresh_status;
pub mod save_database_config;
pub mod test_connection;

pub use create_root_account::{CreateRootAccount, CreateRootAccountError};
pub use fetch_health::FetchSystemHealth;
pub use flow::{CompleteSetupOutcome, SetupFlow, SetupPlan};
pub use refresh_status::RefreshSetupStatus;
pub use save_database_config::{SaveDatabaseConfigError, SaveDatabaseConfiguration};
pub use test_connection::{TestConnectionError, TestDatabaseConnection};
