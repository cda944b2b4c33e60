//! Runtime adapters that close the core ports for headless operation.

pub mod notifier;

pub use notifier::TracingNotifier;
