//! Authentication use cases.
//!
//! 认证用例。

pub mod login;
pub mod logout;
pub mod restore_session;

pub use login::{Login, LoginError};
pub use logout::Logout;
pub use restore_session::RestoreSession;
