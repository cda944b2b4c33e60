//! Security primitives shared across the domain.

pub mod secret;

pub use secret::SecretString;
