pub mod change_log_repository;
pub mod customer_repository;
