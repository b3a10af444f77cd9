use customer_core_db::models::customer::ChangeLogModel;
use customer_core_db::repository::RepositoryError;

use super::repo_impl::ChangeLogRepositoryImpl;
use crate::utils::TryFromRow;

impl ChangeLogRepositoryImpl {
    /// Ordering is re-derived from `changed_at` at read time, never from
    /// insertion sequence.
    pub(super) async fn list_for_impl(
        &self,
        customer_id: i64,
    ) -> Result<Vec<ChangeLogModel>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, customer_id, c_unique_id, field, old_value, new_value, changed_at
            FROM customer_updates
            WHERE customer_id = $1
            ORDER BY changed_at DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(ChangeLogModel::try_from_row).collect()
    }
}
