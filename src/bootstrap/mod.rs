pub mod config;
pub mod init;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use init::{initialize, start_status_refresh, STATUS_REFRESH_INTERVAL};
pub use wiring::{wire_dependencies, WiringError, WiringResult};
