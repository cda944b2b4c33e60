//! Shared application state containers.
//!
//! 共享应用状态容器。
//!
//! A `Store<T>` wraps a `tokio::sync::watch` channel so that use cases can
//! publish new snapshots and long-lived consumers (view layers, background
//! tasks) can observe them without polling.
//!
//! `Store<T>` 基于 `tokio::sync::watch` 通道封装，用例发布新快照后，
//! 长生命周期的消费者（视图层、后台任务）无需轮询即可观察到变化。

use tokio::sync::watch;

use wd_core::account::{AuthSession, User};
use wd_core::setup::{DatabaseSetupStatus, SetupCompletion, SetupStatus};

/// Cloneable handle to a watched piece of state.
///
/// 可克隆的被观察状态句柄。
pub struct Store<T> {
    tx: watch::Sender<T>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the current value and notifies subscribers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutates the current value in place and notifies subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Creates a receiver that observes every subsequent change.
    ///
    /// 创建一个接收端，观察后续的每次变化。
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Everything the console knows about installation progress.
///
/// 控制台掌握的安装进度全貌。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetupSnapshot {
    /// Step-level completion flags, refreshed from the backend.
    pub status: SetupStatus,
    /// Raw database status detail as last reported by the backend.
    pub database_detail: DatabaseSetupStatus,
    /// Locally persisted wizard acknowledgement.
    pub completion: SetupCompletion,
}

impl SetupSnapshot {
    /// True once both external setup steps report done.
    ///
    /// Note that this is independent of [`SetupCompletion`]: routing treats
    /// setup as complete as soon as the backend says so, while the wizard
    /// additionally waits for the user's explicit acknowledgement.
    pub fn is_setup_complete(&self) -> bool {
        self.status.is_complete()
    }
}

/// Current authentication state of the console.
///
/// 控制台当前的认证状态。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthSnapshot {
    pub session: Option<AuthSession>,
}

impl AuthSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }
}

pub type SetupStore = Store<SetupSnapshot>;
pub type AuthStore = Store<AuthSnapshot>;
