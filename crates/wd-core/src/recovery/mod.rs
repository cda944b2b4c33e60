//! Recovery domain module.
//!
//! Defines the PEM-based root account recovery state machine.

pub mod key;
pub mod state_machine;

pub use key::{validate_key_shape, RecoveryTicket, ValidatedKey};
pub use state_machine::{
    RecoveryAction, RecoveryError, RecoveryEvent, RecoveryState, RecoveryStateMachine,
};
