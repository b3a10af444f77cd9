pub mod change_log_repository;
pub mod customer_repository;

// Re-exports
pub use change_log_repository::*;
pub use customer_repository::*;

/// Error type shared by every repository operation. Storage backends box
/// their native error; the lifecycle engine maps it to the caller-facing
/// taxonomy.
pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;
