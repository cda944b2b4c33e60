//! Bootstrap initialization functions
//!
//! This module contains initialization functions that run during application startup.

use std::time::Duration;

use crate::runtime::AppRuntime;

/// How often the background poller re-reads the backend setup status.
/// 后台轮询器重新读取后端安装状态的间隔。
pub const STATUS_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Runs the startup sequence and reports where the entry pathname lands.
///
/// When the console loads, this function restores any persisted session,
/// performs the first setup status refresh, and evaluates the route guard
/// for the pathname the shell opened on.
///
/// # Arguments
///
/// * `runtime` - The assembled application runtime
/// * `entry_pathname` - The pathname the shell is about to render
///
/// # Returns
///
/// * `Option<String>` - A redirect target, or `None` to render in place
///
/// # Behavior
///
/// - An expired persisted session is discarded, the console starts logged out
/// - A failed status refresh degrades to "nothing is set up yet"; the guard
///   then sends the operator to the setup flow, which re-checks on its own
/// - Never fails: every degradation lands on a renderable pathname
///
/// # Example
///
/// ```no_run
/// use watchdeck::bootstrap::init::initialize;
/// use watchdeck::AppRuntime;
///
/// # async fn example(runtime: &AppRuntime) {
/// if let Some(target) = initialize(runtime, "/dashboard").await {
///     // navigate the webview to `target` before first paint
/// }
/// # }
/// ```
pub async fn initialize(runtime: &AppRuntime, entry_pathname: &str) -> Option<String> {
    // Step 1: Restore persisted session / 恢复持久化会话
    let restored = runtime.usecases().restore_session().execute().await;
    tracing::info!(
        session_restored = restored.is_some(),
        "startup session restore finished"
    );

    // Step 2: First status refresh / 首次状态刷新
    runtime.usecases().refresh_setup_status().execute().await;

    // Step 3: Entry redirect decision / 入口重定向决策
    runtime.usecases().route_guard().resolve(entry_pathname)
}

/// Starts the background task that keeps the setup snapshot current.
///
/// The task re-runs the refresh every [`STATUS_REFRESH_INTERVAL`]; its first
/// run fires immediately. Callers keep the handle to stop the task on
/// shutdown.
///
/// 启动保持安装快照最新的后台任务，首次运行立即触发。
pub fn start_status_refresh(runtime: &AppRuntime) -> tokio::task::JoinHandle<()> {
    runtime
        .usecases()
        .refresh_setup_status()
        .spawn_periodic(STATUS_REFRESH_INTERVAL)
}
