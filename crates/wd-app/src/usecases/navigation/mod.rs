//! Navigation use cases.

pub mod guard;

pub use guard::RouteGuard;
