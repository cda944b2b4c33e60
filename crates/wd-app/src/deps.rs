//! # Application Dependencies / 应用依赖
//!
//! This module defines the dependency grouping for use case construction.
//! 此模块定义用例构造的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! **这不是 Builder 模式。**
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - No hidden logic / 无隐藏逻辑
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;
use wd_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required - no defaults, no optional fields.
/// 所有依赖都是必需的 - 无默认值，无可选字段。
pub struct AppDeps {
    // Setup dependencies / 安装依赖
    pub setup_gateway: Arc<dyn SetupGatewayPort>,
    pub setup_completion: Arc<dyn SetupCompletionPort>,

    // Recovery dependencies / 恢复依赖
    pub recovery_gateway: Arc<dyn RecoveryGatewayPort>,

    // Auth dependencies / 认证依赖
    pub auth_gateway: Arc<dyn AuthGatewayPort>,
    pub auth_state: Arc<dyn AuthStatePort>,

    // UI dependencies / UI 依赖
    pub notifier: Arc<dyn NotifierPort>,
}
