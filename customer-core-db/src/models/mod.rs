pub mod customer;

// Re-exports
pub use customer::*;
