//! Application state directory resolution.
//!
//! 应用状态目录解析。

use std::path::PathBuf;

use wd_core::config::StateConfig;

const APP_DIR_NAME: &str = "watchdeck";

fn resolved_app_dir_name() -> String {
    match std::env::var("WATCHDECK_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Concrete directories for local state and logs.
///
/// `WATCHDECK_PROFILE` appends a suffix to the directory name so separate
/// profiles never share acknowledgement or session files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    pub state_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl StatePaths {
    /// Resolve directories from configuration, falling back to the platform
    /// local data directory.
    pub fn resolve(config: &StateConfig) -> anyhow::Result<Self> {
        let state_dir = match &config.dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Platform local data directory unavailable"))?
                .join(resolved_app_dir_name()),
        };
        let logs_dir = state_dir.join("logs");
        Ok(Self {
            state_dir,
            logs_dir,
        })
    }
}
