//! # watchdeck
//!
//! Composition layer for the WatchDeck console core.
//!
//! This crate provides:
//! - Configuration loading and tracing bootstrap
//! - Dependency wiring from config down to the use-case layer
//! - The application runtime handed to the embedding shell
//!
//! ## Modules
//!
//! - **bootstrap**: config, tracing, wiring and the startup sequence
//! - **adapters**: runtime adapters closing the core ports
//! - **runtime**: AppRuntime and the UseCases accessor

pub mod adapters;
pub mod bootstrap;
pub mod runtime;

// Re-export commonly used types
pub use bootstrap::{initialize, load_config, wire_dependencies};
pub use runtime::{AppRuntime, UseCases};
