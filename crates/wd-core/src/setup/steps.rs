//! Setup step computation.
//!
//! Pure functions that derive the wizard step list from the status flags.
//! No side effects; callers fetch status and persist acknowledgement
//! through ports.

use std::fmt;

use crate::setup::SetupStatus;

/// Identifier of a setup wizard step.
///
/// 设置向导步骤标识。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    Database,
    RootAccount,
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepId::Database => f.write_str("database"),
            StepId::RootAccount => f.write_str("root-account"),
        }
    }
}

/// A single wizard step with its completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetupStep {
    pub id: StepId,
    pub required: bool,
    pub completed: bool,
}

/// Derive the ordered step list from the current status.
///
/// Deterministic: database configuration always precedes root account
/// creation, and both steps are required.
pub fn compute_steps(status: &SetupStatus) -> Vec<SetupStep> {
    vec![
        SetupStep {
            id: StepId::Database,
            required: true,
            completed: status.database_configured,
        },
        SetupStep {
            id: StepId::RootAccount,
            required: true,
            completed: status.root_account_exists,
        },
    ]
}

/// First required step that is not yet completed, in list order.
///
/// Returns `None` once every required step is done.
pub fn current_step(steps: &[SetupStep]) -> Option<StepId> {
    steps
        .iter()
        .find(|step| step.required && !step.completed)
        .map(|step| step.id)
}

/// True iff every required step is completed.
pub fn all_completed(steps: &[SetupStep]) -> bool {
    steps.iter().filter(|step| step.required).all(|step| step.completed)
}

/// Whether the operator may leave the wizard for the dashboard.
///
/// Requires both step completion and the explicit acknowledgement flag;
/// a transiently complete-looking status alone is not enough.
pub fn can_proceed(all_completed: bool, has_acknowledged: bool) -> bool {
    all_completed && has_acknowledged
}
