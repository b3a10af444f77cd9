use async_trait::async_trait;

use crate::domain::{ChangeLogEntry, CustomerRecord, CustomerRequest, HistorySubmission};
use crate::error::ApiResult;

/// The customer record lifecycle engine.
///
/// Callers are assumed to be authenticated and to hand in well-formed,
/// already-parsed requests; routing, sessions and upload parsing live
/// outside this boundary.
#[async_trait]
pub trait CustomerLifecycle: Send + Sync {
    /// Create a new customer record.
    ///
    /// Requires a primary phone number, runs duplicate detection across all
    /// existing records, and on success returns the newly assigned
    /// `C_unique_id` (`MC_<n>`).
    async fn create(&self, request: CustomerRequest) -> ApiResult<String>;

    /// Full-replace update of every mutable contact field.
    ///
    /// Duplicate detection excludes the record being updated; zero affected
    /// rows is a not-found outcome, distinct from a validation failure.
    async fn update(&self, internal_id: i64, request: CustomerRequest) -> ApiResult<()>;

    /// Append a batch of field changes to the audit trail, then read back
    /// and return the customer's full history, newest first.
    async fn submit_history(&self, submission: HistorySubmission) -> ApiResult<Vec<ChangeLogEntry>>;

    /// Read-only history fetch, newest first. An unknown customer id is
    /// not-found; a known customer with no history yields an empty list.
    async fn fetch_history(&self, internal_id: i64) -> ApiResult<Vec<ChangeLogEntry>>;

    /// Delete the customer row and all of its history atomically.
    async fn delete(&self, internal_id: i64) -> ApiResult<()>;

    /// Point lookup by public unique id.
    async fn view(&self, unique_id: &str) -> ApiResult<CustomerRecord>;

    /// All customers, most recently updated first. Unbounded.
    async fn list_recent(&self) -> ApiResult<Vec<CustomerRecord>>;

    /// Substring search across the named text columns.
    async fn search(&self, query: &str) -> ApiResult<Vec<CustomerRecord>>;
}
