use async_trait::async_trait;

use crate::models::customer::{ContactConflictRow, ContactKeys, CustomerContact, CustomerModel};
use crate::repository::RepositoryError;

/// Repository for the `customers` table.
///
/// Implementations check one pooled connection out per call and release it
/// on every exit path; no state is shared between invocations outside the
/// store itself.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer.
    ///
    /// Assigns the internal id and the next `MC_<n>` public id, storing
    /// absent optional fields as NULL. The read-increment-insert sequence
    /// runs in one transaction and retries on unique-id collision, so two
    /// racing creations never mint the same identifier.
    ///
    /// Returns the assigned `C_unique_id`.
    async fn insert(&self, contact: &CustomerContact) -> Result<String, RepositoryError>;

    /// Replace every mutable contact field of the given customer.
    ///
    /// Returns the affected-row count; zero means the id is unknown.
    async fn update(&self, internal_id: i64, contact: &CustomerContact)
        -> Result<u64, RepositoryError>;

    /// Delete the customer row together with all of its history rows in a
    /// single transaction, so a mid-sequence failure cannot leave orphaned
    /// history or a dangling customer.
    ///
    /// Returns the number of customer rows removed (0 or 1).
    async fn delete_cascade(&self, internal_id: i64) -> Result<u64, RepositoryError>;

    /// Point lookup by public unique id. `None` is a not-found outcome,
    /// not an error.
    async fn find_by_unique_id(&self, unique_id: &str)
        -> Result<Option<CustomerModel>, RepositoryError>;

    /// Whether a customer row with this internal id exists.
    async fn exists(&self, internal_id: i64) -> Result<bool, RepositoryError>;

    /// All customers ordered by `last_updated` descending. Unbounded.
    async fn list_recent(&self) -> Result<Vec<CustomerModel>, RepositoryError>;

    /// All customers where any of the named text columns contains `query`
    /// as a substring. The empty query matches every row.
    async fn search_by_text(&self, query: &str) -> Result<Vec<CustomerModel>, RepositoryError>;

    /// Rows whose stored primary phone or WhatsApp number normalizes to the
    /// given keys, or whose email equals the raw email key. Empty keys are
    /// skipped; `exclude_id` removes the record being updated so it cannot
    /// collide with itself.
    async fn find_conflicts(
        &self,
        keys: &ContactKeys,
        exclude_id: Option<i64>,
    ) -> Result<Vec<ContactConflictRow>, RepositoryError>;
}
