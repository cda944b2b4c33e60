//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port here, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure layer?**
//!
//! If all three answers are **yes**, place it in `wd-core/ports`.
//! Otherwise, place it in the relevant `domain` submodule.

pub mod auth_gateway;
pub mod auth_state;
pub mod errors;
pub mod notifier;
pub mod recovery_gateway;
pub mod setup_completion;
pub mod setup_gateway;

pub use auth_gateway::AuthGatewayPort;
pub use auth_state::AuthStatePort;
pub use errors::GatewayError;
pub use notifier::{Notice, NotifierPort, Severity};
pub use recovery_gateway::RecoveryGatewayPort;
pub use setup_completion::SetupCompletionPort;
pub use setup_gateway::SetupGatewayPort;
