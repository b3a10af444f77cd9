use customer_core_db::repository::RepositoryError;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    /// History rows and the customer row are removed in one transaction, so
    /// a mid-sequence failure can never strand orphaned history or leave
    /// history pointing at a vanished customer.
    pub(super) async fn delete_cascade_impl(
        &self,
        internal_id: i64,
    ) -> Result<u64, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM customer_updates WHERE customer_id = $1")
            .bind(internal_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(internal_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
