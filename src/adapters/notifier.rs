//! Logging adapter for the notifier port.
//!
//! This adapter is used to wire the use-case layer into a headless runtime.
//! A shell-specific notifier that forwards toasts to the webview replaces
//! this once the console runs embedded.

use anyhow::Result;
use async_trait::async_trait;
use wd_core::ports::{Notice, NotifierPort, Severity};

/// Logs toast notices using `tracing`. Does not emit to a frontend.
pub struct TracingNotifier;

#[async_trait]
impl NotifierPort for TracingNotifier {
    async fn toast(&self, notice: Notice) -> Result<()> {
        match notice.severity {
            Severity::Error => tracing::warn!(message = %notice.message, "Toast"),
            Severity::Success | Severity::Info => {
                tracing::info!(message = %notice.message, "Toast")
            }
        }
        Ok(())
    }
}
