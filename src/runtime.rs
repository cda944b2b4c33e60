//! # Use Cases Accessor
//!
//! This module provides the `UseCases` accessor which is attached to `AppRuntime`
//! to provide convenient access to all use cases with their dependencies pre-wired.
//!
//! ## Architecture
//!
//! - **wd-app/usecases**: Pure use cases with `new()` constructors taking ports
//! - **watchdeck/runtime**: This module wires `Arc<dyn Port>` from AppDeps into use cases
//! - **Shell commands**: Call `runtime.usecases().xxx()` to get use case instances
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure use case has a `new()` constructor taking its required ports
//! 2. Add a method to `UseCases` that calls `new()` with deps
//! 3. Commands can now call `runtime.usecases().your_use_case()`

use std::sync::Arc;

use wd_app::usecases::{
    CreateRootAccount, FetchSystemHealth, Login, Logout, RecoveryOrchestrator, RefreshSetupStatus,
    RestoreSession, RouteGuard, SaveDatabaseConfiguration, SetupFlow, TestDatabaseConnection,
};
use wd_app::{AppDeps, AuthStore, SetupStore};

/// Application runtime with dependencies.
///
/// This struct holds all application dependencies and provides
/// access to use cases through the `usecases()` method.
///
/// ## Architecture / 架构
///
/// The `AppRuntime` serves as the central point for accessing all application
/// dependencies and use cases. It wraps `AppDeps`, owns the two shared state
/// stores, and provides a `usecases()` method that returns a `UseCases`
/// accessor.
///
/// `AppRuntime` 是访问所有应用依赖和用例的中心点。它包装 `AppDeps`，
/// 持有两个共享状态 Store，并提供返回 `UseCases` 访问器的 `usecases()` 方法。
pub struct AppRuntime {
    /// Application dependencies
    pub deps: AppDeps,

    /// Shared setup snapshot store – every refresh publishes here, every
    /// plan derivation and route decision reads from here.
    setup_store: SetupStore,

    /// Shared auth snapshot store – login, logout and session restore all
    /// publish the current session through this handle.
    auth_store: AuthStore,

    /// Cached recovery orchestrator – shared across all commands so that
    /// the in-memory recovery state machine is not reset on every call.
    ///
    /// 缓存的恢复编排器 – 在所有命令间共享，
    /// 避免每次调用都重置内存中的恢复状态机。
    recovery_orchestrator: Arc<RecoveryOrchestrator>,

    /// Cached refresh use case – the periodic poller and the mutation use
    /// cases must publish through the same instance.
    refresh_setup_status: Arc<RefreshSetupStatus>,
}

impl AppRuntime {
    /// Create a new AppRuntime from dependencies.
    /// 从依赖创建新的 AppRuntime。
    pub fn new(deps: AppDeps) -> Self {
        let setup_store = SetupStore::default();
        let auth_store = AuthStore::default();

        let recovery_orchestrator = Arc::new(RecoveryOrchestrator::new(
            deps.recovery_gateway.clone(),
            deps.notifier.clone(),
        ));
        let refresh_setup_status = Arc::new(RefreshSetupStatus::new(
            deps.setup_gateway.clone(),
            deps.setup_completion.clone(),
            setup_store.clone(),
            deps.notifier.clone(),
        ));

        Self {
            deps,
            setup_store,
            auth_store,
            recovery_orchestrator,
            refresh_setup_status,
        }
    }

    /// Get use cases accessor.
    /// 获取用例访问器。
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }

    /// Handle to the setup snapshot store, for subscribers.
    /// 安装快照 Store 句柄，供订阅者使用。
    pub fn setup_store(&self) -> SetupStore {
        self.setup_store.clone()
    }

    /// Handle to the auth snapshot store, for subscribers.
    /// 认证快照 Store 句柄，供订阅者使用。
    pub fn auth_store(&self) -> AuthStore {
        self.auth_store.clone()
    }
}

/// Use cases accessor for AppRuntime.
///
/// This struct provides methods to access all use cases with their dependencies
/// pre-wired from the AppRuntime's deps.
///
/// ## Design Pattern / 设计模式
///
/// This implements the Factory pattern for use cases:
/// - Commands don't need to know which ports a use case needs
/// - All port-to-use-case wiring is centralized in one place
/// - Use cases remain pure (no dependency on AppDeps)
///
/// 这为用例实现了工厂模式：
/// - 命令不需要知道用例需要哪些端口
/// - 所有端口到用例的连接集中在一个地方
/// - 用例保持纯净（不依赖 AppDeps）
///
/// AppRuntime 的用例访问器。
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    /// Create a new UseCases accessor from AppRuntime.
    /// 从 AppRuntime 创建新的 UseCases 访问器。
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    /// Shared refresh use case that polls the backend and publishes the
    /// merged snapshot.
    ///
    /// 共享的刷新用例，轮询后端并发布合并后的快照。
    pub fn refresh_setup_status(&self) -> Arc<RefreshSetupStatus> {
        self.runtime.refresh_setup_status.clone()
    }

    /// Wizard plan derivation and completion acknowledgement.
    ///
    /// 向导步骤推导与完成确认。
    pub fn setup_flow(&self) -> SetupFlow {
        SetupFlow::new(
            self.runtime.deps.setup_completion.clone(),
            self.runtime.setup_store.clone(),
        )
    }

    /// Persist a database configuration draft to the backend.
    ///
    /// 将数据库配置草稿保存到后端。
    pub fn save_database_configuration(&self) -> SaveDatabaseConfiguration {
        SaveDatabaseConfiguration::new(
            self.runtime.deps.setup_gateway.clone(),
            self.runtime.refresh_setup_status.clone(),
            self.runtime.deps.notifier.clone(),
        )
    }

    /// Probe a database configuration draft without saving it.
    ///
    /// 探测数据库配置草稿但不保存。
    pub fn test_database_connection(&self) -> TestDatabaseConnection {
        TestDatabaseConnection::new(
            self.runtime.deps.setup_gateway.clone(),
            self.runtime.deps.notifier.clone(),
        )
    }

    /// Create the root account and capture the returned credential.
    ///
    /// 创建 root 账户并捕获返回的凭证。
    pub fn create_root_account(&self) -> CreateRootAccount {
        CreateRootAccount::new(
            self.runtime.deps.setup_gateway.clone(),
            self.runtime.refresh_setup_status.clone(),
            self.runtime.deps.notifier.clone(),
        )
    }

    /// Fetch the backend health snapshot.
    ///
    /// 获取后端健康快照。
    pub fn fetch_system_health(&self) -> FetchSystemHealth {
        FetchSystemHealth::new(self.runtime.deps.setup_gateway.clone())
    }

    /// Shared recovery orchestrator holding the wizard state machine.
    ///
    /// 持有向导状态机的共享恢复编排器。
    pub fn recovery(&self) -> Arc<RecoveryOrchestrator> {
        self.runtime.recovery_orchestrator.clone()
    }

    /// Authenticate against the backend and persist the session.
    ///
    /// 向后端认证并持久化会话。
    pub fn login(&self) -> Login {
        Login::new(
            self.runtime.deps.auth_gateway.clone(),
            self.runtime.deps.auth_state.clone(),
            self.runtime.auth_store.clone(),
            self.runtime.deps.notifier.clone(),
        )
    }

    /// End the session once the backend confirms the logout.
    ///
    /// 后端确认登出后结束会话。
    pub fn logout(&self) -> Logout {
        Logout::new(
            self.runtime.deps.auth_gateway.clone(),
            self.runtime.deps.auth_state.clone(),
            self.runtime.auth_store.clone(),
            self.runtime.deps.notifier.clone(),
        )
    }

    /// Restore a persisted session into the auth store.
    ///
    /// 将持久化的会话恢复到认证 Store。
    pub fn restore_session(&self) -> RestoreSession {
        RestoreSession::new(
            self.runtime.deps.auth_state.clone(),
            self.runtime.auth_store.clone(),
        )
    }

    /// Redirect decisions from the current snapshots.
    ///
    /// 基于当前快照做出重定向决策。
    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(self.runtime.setup_store(), self.runtime.auth_store())
    }
}
