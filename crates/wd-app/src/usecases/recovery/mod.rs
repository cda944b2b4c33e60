//! Recovery flow use cases.
//!
//! 恢复流程用例。

pub mod context;
pub mod orchestrator;

pub use context::RecoveryContext;
pub use orchestrator::{RecoveryFlowError, RecoveryOrchestrator};
