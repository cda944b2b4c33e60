use chrono::{DateTime, Utc};

use crate::setup::database::DatabaseKind;

/// Canonical setup status derived from the backend status endpoints.
///
/// Both flags default to `false`; an unknown or failed status check must
/// never report a step as done.
///
/// 安装状态：未知时一律视为未完成。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetupStatus {
    pub database_configured: bool,
    pub root_account_exists: bool,
}

impl SetupStatus {
    /// True when every setup step has been reported complete.
    pub fn is_complete(&self) -> bool {
        self.database_configured && self.root_account_exists
    }
}

impl Default for SetupStatus {
    fn default() -> Self {
        Self {
            database_configured: false,
            root_account_exists: false,
        }
    }
}

/// Completion acknowledgement persisted across console restarts.
///
/// Step completion alone does not unlock the dashboard; the operator must
/// explicitly finish the wizard, which sets this flag.
///
/// 安装完成确认标记，持久化保存。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetupCompletion {
    pub has_acknowledged: bool,
}

impl Default for SetupCompletion {
    fn default() -> Self {
        Self {
            has_acknowledged: false,
        }
    }
}

/// Detailed database setup report returned by the backend.
///
/// Informational payload shown on the database step; routing decisions only
/// read `configured`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSetupStatus {
    pub configured: bool,
    pub locked: bool,
    #[serde(rename = "type")]
    pub kind: Option<DatabaseKind>,
    pub created_at: Option<DateTime<Utc>>,
    pub config_exists: bool,
    pub lock_exists: bool,
}

impl Default for DatabaseSetupStatus {
    fn default() -> Self {
        Self {
            configured: false,
            locked: false,
            kind: None,
            created_at: None,
            config_exists: false,
            lock_exists: false,
        }
    }
}

/// Result of probing a candidate database configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConnectionProbe {
    pub reachable: bool,
    pub message: String,
}

/// Overall backend health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Healthy,
    Unhealthy,
    SetupRequired,
}

/// Snapshot of the `/health` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    pub status: HealthState,
    pub database: Option<DatabaseHealthReport>,
}

/// Database section of a health snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHealthReport {
    #[serde(rename = "type")]
    pub kind: String,
    pub configured: bool,
    pub locked: bool,
    pub configured_at: Option<String>,
    pub connection_test: ConnectionTestReport,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionTestReport {
    pub success: bool,
    pub error: Option<String>,
}
