//! Local JSON file persistence.

pub mod auth_state;
pub mod setup_completion;

pub use auth_state::{FileAuthStateRepository, DEFAULT_AUTH_STATE_FILE};
pub use setup_completion::{FileSetupCompletionRepository, DEFAULT_SETUP_COMPLETION_FILE};
