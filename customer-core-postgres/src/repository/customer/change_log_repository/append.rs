use chrono::{Duration, Utc};
use customer_core_api::domain::FieldChange;
use customer_core_db::repository::RepositoryError;

use super::repo_impl::ChangeLogRepositoryImpl;

impl ChangeLogRepositoryImpl {
    /// One row per change tuple, all in one transaction.
    ///
    /// Timestamps are assigned here, not by the caller. Entries of a batch
    /// get a shared base instant plus one microsecond per position, so the
    /// timestamp ordering used at read time reproduces the caller's array
    /// order even within a single batch.
    pub(super) async fn append_impl(
        &self,
        customer_id: i64,
        c_unique_id: &str,
        changes: &[FieldChange],
    ) -> Result<u64, RepositoryError> {
        if changes.is_empty() {
            return Ok(0);
        }

        let base = Utc::now();
        let mut tx = self.pool.begin().await?;

        for (i, change) in changes.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO customer_updates
                (customer_id, c_unique_id, field, old_value, new_value, changed_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(customer_id)
            .bind(c_unique_id)
            .bind(&change.field)
            .bind(change.old_value.as_deref())
            .bind(change.new_value.as_deref())
            .bind(base + Duration::microseconds(i as i64))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(changes.len() as u64)
    }
}
