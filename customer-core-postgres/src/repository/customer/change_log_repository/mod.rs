pub mod repo_impl;

pub mod append;
pub mod delete_for;
pub mod list_for;

pub use repo_impl::ChangeLogRepositoryImpl;
