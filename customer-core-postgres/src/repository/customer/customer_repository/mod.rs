pub mod repo_impl;

pub mod delete_cascade;
pub mod find_by_unique_id;
pub mod find_conflicts;
pub mod insert;
pub mod list_recent;
pub mod search_by_text;
pub mod update;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::CustomerRepositoryImpl;
