use customer_core_db::repository::RepositoryError;

use super::repo_impl::ChangeLogRepositoryImpl;

impl ChangeLogRepositoryImpl {
    pub(super) async fn delete_for_impl(&self, customer_id: i64) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM customer_updates WHERE customer_id = $1")
            .bind(customer_id)
            .execute(&*self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::customer::customer_repository::test_utils::{
        new_test_contact, unique_phone,
    };
    use crate::test_helper::setup_test_context;
    use customer_core_api::domain::FieldChange;
    use customer_core_db::repository::{ChangeLogRepository, CustomerRepository};
    use serial_test::serial;

    fn change(field: &str) -> FieldChange {
        FieldChange {
            field: field.to_string(),
            old_value: None,
            new_value: Some("set".to_string()),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_for_removes_only_that_customers_entries(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customers = &ctx.customer_repos.customer_repository;
        let change_log = &ctx.customer_repos.change_log_repository;

        let first_id = customers.insert(&new_test_contact(&unique_phone())).await?;
        let second_id = customers.insert(&new_test_contact(&unique_phone())).await?;
        let first = customers.find_by_unique_id(&first_id).await?.unwrap();
        let second = customers.find_by_unique_id(&second_id).await?.unwrap();

        change_log
            .append(first.id, &first_id, &[change("comment"), change("disposition")])
            .await?;
        change_log
            .append(second.id, &second_id, &[change("country")])
            .await?;

        let removed = change_log.delete_for(first.id).await?;
        assert_eq!(removed, 2);
        assert!(change_log.list_for(first.id).await?.is_empty());
        // The neighbour's history is untouched.
        assert_eq!(change_log.list_for(second.id).await?.len(), 1);

        ctx.delete_by_unique_id(&first_id).await?;
        ctx.delete_by_unique_id(&second_id).await?;
        Ok(())
    }
}
