use async_trait::async_trait;
use customer_core_api::domain::FieldChange;
use customer_core_db::models::customer::ChangeLogModel;
use customer_core_db::repository::{ChangeLogRepository, RepositoryError};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct ChangeLogRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ChangeLogRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ChangeLogModel {
    fn try_from_row(row: &PgRow) -> Result<Self, RepositoryError> {
        Ok(ChangeLogModel {
            id: row.try_get("id")?,
            customer_id: row.try_get("customer_id")?,
            c_unique_id: get_heapless_string(row, "c_unique_id")?,
            field: get_heapless_string(row, "field")?,
            old_value: get_optional_heapless_string(row, "old_value")?,
            new_value: get_optional_heapless_string(row, "new_value")?,
            changed_at: row.try_get("changed_at")?,
        })
    }
}

#[async_trait]
impl ChangeLogRepository for ChangeLogRepositoryImpl {
    async fn append(
        &self,
        customer_id: i64,
        c_unique_id: &str,
        changes: &[FieldChange],
    ) -> Result<u64, RepositoryError> {
        self.append_impl(customer_id, c_unique_id, changes).await
    }

    async fn list_for(&self, customer_id: i64) -> Result<Vec<ChangeLogModel>, RepositoryError> {
        self.list_for_impl(customer_id).await
    }

    async fn delete_for(&self, customer_id: i64) -> Result<u64, RepositoryError> {
        self.delete_for_impl(customer_id).await
    }
}
