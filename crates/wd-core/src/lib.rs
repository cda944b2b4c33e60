//! # wd-core
//!
//! Core domain models and business logic for Watchdeck.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod account;
pub mod config;
pub mod ports;
pub mod recovery;
pub mod routing;
pub mod security;
pub mod setup;

// Re-export commonly used types at the crate root
pub use account::{RootAccountDraft, User};
pub use config::AppConfig;
pub use recovery::{RecoveryAction, RecoveryError, RecoveryEvent, RecoveryState};
pub use routing::{PathPattern, RouteContext, RouteTable, RoutingRule};
pub use security::SecretString;
pub use setup::{SetupCompletion, SetupStatus, SetupStep, StepId};
