//! WatchDeck Application Orchestration Layer
//!
//! This crate contains business logic use cases, shared state stores, and
//! the recovery orchestration runtime.

pub mod deps;
pub mod store;
pub mod usecases;

pub use deps::AppDeps;
pub use store::{AuthSnapshot, AuthStore, SetupSnapshot, SetupStore, Store};
