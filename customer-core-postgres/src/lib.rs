pub mod postgres_repositories;
pub mod repository;
pub mod service;
pub mod utils;

pub use postgres_repositories::{CustomerRepositories, PostgresRepositories};
pub use repository::customer::change_log_repository::ChangeLogRepositoryImpl;
pub use repository::customer::customer_repository::CustomerRepositoryImpl;
pub use service::lifecycle::CustomerLifecycleImpl;

#[cfg(test)]
pub mod test_helper;
