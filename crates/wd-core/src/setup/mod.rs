//! Setup domain module.
//!
//! This module defines the first-run setup status model and the
//! step computation used by the setup wizard.

pub mod database;
pub mod status;
pub mod steps;

pub use database::{DatabaseConfigDraft, DatabaseConfigError, DatabaseKind, ServerConfig};
pub use status::{
    ConnectionProbe, DatabaseSetupStatus, HealthSnapshot, HealthState, SetupCompletion,
    SetupStatus,
};
pub use steps::{all_completed, can_proceed, compute_steps, current_step, SetupStep, StepId};
