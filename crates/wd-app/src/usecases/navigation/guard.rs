//! Navigation guard over the live application state.
//!
//! 基于实时应用状态的导航守卫。

use tracing::debug;
use wd_core::routing::{RouteContext, RouteTable};

use crate::store::{AuthStore, SetupStore};

/// Evaluates the redirect table against the current snapshots.
///
/// Routing reads step completion straight from the setup status; the
/// wizard's acknowledgement flag only affects leaving the wizard, never
/// where a pathname lands.
pub struct RouteGuard {
    table: RouteTable,
    setup_store: SetupStore,
    auth_store: AuthStore,
}

impl RouteGuard {
    pub fn new(setup_store: SetupStore, auth_store: AuthStore) -> Self {
        Self::with_table(RouteTable::default(), setup_store, auth_store)
    }

    pub fn with_table(table: RouteTable, setup_store: SetupStore, auth_store: AuthStore) -> Self {
        Self {
            table,
            setup_store,
            auth_store,
        }
    }

    /// Decide where a navigation to `pathname` must land.
    ///
    /// `None` means render in place.
    pub fn resolve(&self, pathname: &str) -> Option<String> {
        let setup = self.setup_store.get();
        let auth = self.auth_store.get();
        let ctx = RouteContext {
            pathname,
            setup_complete: setup.is_setup_complete(),
            authenticated: auth.is_authenticated(),
        };

        let target = self.table.resolve(&ctx).map(str::to_string);
        debug!(
            pathname,
            setup_complete = ctx.setup_complete,
            authenticated = ctx.authenticated,
            target = target.as_deref().unwrap_or("-"),
            "route evaluated"
        );
        target
    }
}
