//! Setup wizard step planning and completion.
//!
//! 安装向导的步骤规划与完成确认。

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use wd_core::ports::SetupCompletionPort;
use wd_core::setup::{all_completed, can_proceed, compute_steps, current_step};
use wd_core::setup::{SetupCompletion, SetupStep, StepId};

use crate::store::SetupStore;

/// Derived view of the wizard for a given snapshot.
///
/// 基于当前快照推导出的向导视图。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupPlan {
    /// Ordered wizard steps with their completion flags.
    pub steps: Vec<SetupStep>,
    /// First required step that is not yet completed, if any.
    pub current: Option<StepId>,
    /// True once every required step reports done.
    pub all_completed: bool,
    /// True once steps are done and the operator has acknowledged the wizard.
    pub can_proceed: bool,
}

/// Outcome of a completion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteSetupOutcome {
    /// Acknowledgement recorded and persisted.
    Acknowledged,
    /// Steps are still pending; nothing was persisted.
    StepsIncomplete,
}

/// Use case exposing the setup wizard's derived state and its single
/// mutation: acknowledging completion.
pub struct SetupFlow {
    completion: Arc<dyn SetupCompletionPort>,
    store: SetupStore,
}

impl SetupFlow {
    pub fn new(completion: Arc<dyn SetupCompletionPort>, store: SetupStore) -> Self {
        Self { completion, store }
    }

    /// Compute the wizard plan from the current snapshot.
    ///
    /// Pure derivation; never touches the backend.
    pub fn plan(&self) -> SetupPlan {
        let snapshot = self.store.get();
        let steps = compute_steps(&snapshot.status);
        let current = current_step(&steps);
        let done = all_completed(&steps);

        SetupPlan {
            current,
            all_completed: done,
            can_proceed: can_proceed(done, snapshot.completion.has_acknowledged),
            steps,
        }
    }

    /// Record the operator's completion acknowledgement.
    ///
    /// Refuses to acknowledge while any required step is still pending, so a
    /// stale or hand-crafted call cannot unlock the console early.
    pub async fn complete_setup(&self) -> anyhow::Result<CompleteSetupOutcome> {
        let span = info_span!("usecase.setup_flow.complete_setup");

        async {
            let snapshot = self.store.get();
            let steps = compute_steps(&snapshot.status);
            if !all_completed(&steps) {
                warn!(
                    current = ?current_step(&steps),
                    "ignoring completion request while steps are pending"
                );
                return Ok(CompleteSetupOutcome::StepsIncomplete);
            }

            let completion = SetupCompletion {
                has_acknowledged: true,
            };
            self.completion.set_completion(&completion).await?;
            self.store.update(|snapshot| snapshot.completion = completion);

            info!("setup wizard acknowledged as complete");
            Ok(CompleteSetupOutcome::Acknowledged)
        }
        .instrument(span)
        .await
    }
}
