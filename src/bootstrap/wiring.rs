//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (http gateways, file state) / 创建 infra 层具体实现
//! - ✅ Inject all dependencies into AppDeps / 将所有依赖注入到 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! - Do not decide "what to do if setup is incomplete"
//! - 不判断"如果安装未完成就怎样"
//! - Do not handle "what to do if the session expired"
//! - 不处理"如果会话过期就怎样"
//!
//! ❌ **No configuration validation / 禁止做配置验证**
//! - Config already loaded in config.rs
//! - 配置已在 config.rs 加载
//! - Validation should be in use case or upper layer
//! - 验证应在 use case 或上层
//!
//! ## Architecture Principle / 架构原则
//!
//! > **This is the only place allowed to depend on wd-infra + wd-app simultaneously.**
//! > **这是唯一允许同时依赖 wd-infra 和 wd-app 的地方。**
//! > But this privilege is only for "assembly", not for "decision making".
//! > 但这种特权仅用于"组装"，不用于"决策"。

use std::sync::Arc;

use wd_app::AppDeps;
use wd_core::config::AppConfig;
use wd_core::ports::*;
use wd_infra::api::{HttpAuthGateway, HttpRecoveryGateway, HttpSetupGateway};
use wd_infra::fs::{FileAuthStateRepository, FileSetupCompletionRepository};
use wd_infra::{ApiClient, StatePaths};

use crate::adapters::TracingNotifier;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),

    #[error("State directory initialization failed: {0}")]
    StateDirInit(String),
}

/// Remote gateway implementations / 远程网关实现
///
/// All three gateways share one [`ApiClient`] so that the session cookie
/// issued at login travels with every later request.
/// 三个网关共享同一个 [`ApiClient`]，登录时下发的会话 Cookie 随后续请求一起发送。
struct GatewayLayer {
    setup_gateway: Arc<dyn SetupGatewayPort>,
    recovery_gateway: Arc<dyn RecoveryGatewayPort>,
    auth_gateway: Arc<dyn AuthGatewayPort>,
}

/// Local persistence implementations / 本地持久化实现
struct StateLayer {
    setup_completion: Arc<dyn SetupCompletionPort>,
    auth_state: Arc<dyn AuthStatePort>,
}

/// Create the shared HTTP client
/// 创建共享 HTTP 客户端
///
/// # Errors / 错误
///
/// Returns `WiringError::HttpClientInit` if the underlying client builder
/// rejects the configuration.
/// 如果底层客户端构建器拒绝配置，返回 `WiringError::HttpClientInit`。
fn create_api_client(config: &AppConfig) -> WiringResult<ApiClient> {
    ApiClient::new(&config.api)
        .map_err(|e| WiringError::HttpClientInit(format!("Failed to create API client: {}", e)))
}

/// Create gateway layer implementations
/// 创建网关层实现
fn create_gateway_layer(client: ApiClient) -> GatewayLayer {
    // Each gateway clones the client; reqwest clients share their
    // connection pool and cookie store across clones.
    // 每个网关克隆客户端；reqwest 客户端在克隆间共享连接池和 Cookie 存储。
    let setup_gateway: Arc<dyn SetupGatewayPort> =
        Arc::new(HttpSetupGateway::new(client.clone()));
    let recovery_gateway: Arc<dyn RecoveryGatewayPort> =
        Arc::new(HttpRecoveryGateway::new(client.clone()));
    let auth_gateway: Arc<dyn AuthGatewayPort> = Arc::new(HttpAuthGateway::new(client));

    GatewayLayer {
        setup_gateway,
        recovery_gateway,
        auth_gateway,
    }
}

/// Create local state layer implementations
/// 创建本地状态层实现
///
/// # Errors / 错误
///
/// Returns `WiringError::StateDirInit` if the state directory cannot be
/// resolved for this platform.
/// 如果无法为当前平台解析状态目录，返回 `WiringError::StateDirInit`。
fn create_state_layer(config: &AppConfig) -> WiringResult<StateLayer> {
    let paths = StatePaths::resolve(&config.state)
        .map_err(|e| WiringError::StateDirInit(format!("Failed to resolve state dir: {}", e)))?;

    let setup_completion: Arc<dyn SetupCompletionPort> = Arc::new(
        FileSetupCompletionRepository::with_defaults(paths.state_dir.clone()),
    );
    let auth_state: Arc<dyn AuthStatePort> =
        Arc::new(FileAuthStateRepository::with_defaults(paths.state_dir));

    Ok(StateLayer {
        setup_completion,
        auth_state,
    })
}

/// Wire all dependencies into an [`AppDeps`] bundle
/// 将所有依赖组装为 [`AppDeps`]
///
/// # Errors / 错误
///
/// Returns `WiringError` if any infrastructure component fails to initialize.
/// 如果任何基础设施组件初始化失败，返回 `WiringError`。
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    // Step 1: Shared HTTP client / 共享 HTTP 客户端
    let client = create_api_client(config)?;

    // Step 2: Remote gateways / 远程网关
    let gateways = create_gateway_layer(client);

    // Step 3: Local state repositories / 本地状态仓库
    let state = create_state_layer(config)?;

    // Step 4: Notifier / 通知器
    let notifier: Arc<dyn NotifierPort> = Arc::new(TracingNotifier);

    Ok(AppDeps {
        setup_gateway: gateways.setup_gateway,
        setup_completion: state.setup_completion,
        recovery_gateway: gateways.recovery_gateway,
        auth_gateway: gateways.auth_gateway,
        auth_state: state.auth_state,
        notifier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config(dir: PathBuf) -> AppConfig {
        let mut config = AppConfig::default();
        config.api.base_url = "http://127.0.0.1:9".to_string();
        config.state.dir = Some(dir);
        config
    }

    #[test]
    fn wire_dependencies_assembles_full_bundle() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(temp_dir.path().to_path_buf());

        let deps = wire_dependencies(&config).unwrap();

        // Wiring must not touch the network or the disk; constructing the
        // bundle against an unreachable endpoint stays infallible.
        let _ = Arc::clone(&deps.setup_gateway);
        let _ = Arc::clone(&deps.auth_state);
        let _ = Arc::clone(&deps.notifier);
    }

    #[test]
    fn wire_dependencies_accepts_relative_state_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = test_config(temp_dir.path().join("nested").join("state"));

        // Directories are created lazily on first write, not during wiring.
        let result = wire_dependencies(&config);
        assert!(result.is_ok());
    }
}
