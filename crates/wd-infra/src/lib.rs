pub mod api;
pub mod fs;
pub mod paths;

pub use api::ApiClient;
pub use paths::StatePaths;
