use async_trait::async_trait;
use customer_core_api::domain::FieldChange;

use crate::models::customer::ChangeLogModel;
use crate::repository::RepositoryError;

/// Repository for the append-only `customer_updates` history table.
#[async_trait]
pub trait ChangeLogRepository: Send + Sync {
    /// Append one row per change tuple, timestamped at write time.
    ///
    /// Entries of one batch carry strictly increasing timestamps so that
    /// timestamp-ordered read-back reproduces the caller's array order.
    ///
    /// Returns the number of rows written.
    async fn append(
        &self,
        customer_id: i64,
        c_unique_id: &str,
        changes: &[FieldChange],
    ) -> Result<u64, RepositoryError>;

    /// All entries for the customer, newest `changed_at` first. An empty
    /// list is a valid outcome, not an error.
    async fn list_for(&self, customer_id: i64) -> Result<Vec<ChangeLogModel>, RepositoryError>;

    /// Remove every entry for the customer. Returns the removed-row count.
    async fn delete_for(&self, customer_id: i64) -> Result<u64, RepositoryError>;
}
