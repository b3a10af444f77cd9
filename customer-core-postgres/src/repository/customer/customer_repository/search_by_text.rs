use customer_core_db::models::customer::CustomerModel;
use customer_core_db::repository::RepositoryError;

use super::repo_impl::CustomerRepositoryImpl;
use crate::utils::TryFromRow;

impl CustomerRepositoryImpl {
    /// Substring match across the fifteen searchable text columns.
    ///
    /// LIKE follows the storage collation's case rules; the empty query
    /// matches every row (c_unique_id is never NULL).
    pub(super) async fn search_by_text_impl(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerModel>, RepositoryError> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query(
            r#"
            SELECT id, c_unique_id, first_name, middle_name, last_name, gender,
                   phone_no_primary, whatsapp_num, phone_no_secondary, email_id,
                   address, country, company_name, contact_type, source,
                   disposition, agent_name, comment, date_of_birth, last_updated
            FROM customers
            WHERE first_name LIKE $1
               OR middle_name LIKE $1
               OR last_name LIKE $1
               OR gender::TEXT LIKE $1
               OR phone_no_primary LIKE $1
               OR whatsapp_num LIKE $1
               OR phone_no_secondary LIKE $1
               OR email_id LIKE $1
               OR c_unique_id LIKE $1
               OR agent_name LIKE $1
               OR address LIKE $1
               OR country LIKE $1
               OR contact_type LIKE $1
               OR company_name LIKE $1
               OR disposition LIKE $1
            ORDER BY last_updated DESC
            "#,
        )
        .bind(&pattern)
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(CustomerModel::try_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::customer::customer_repository::test_utils::{
        new_test_contact, unique_phone,
    };
    use crate::test_helper::setup_test_context;
    use customer_core_db::repository::CustomerRepository;
    use heapless::String as HeaplessString;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_search_matches_substring_of_any_text_field(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.customer_repos.customer_repository;

        let mut contact = new_test_contact(&unique_phone());
        let company = format!("Acme-{}", unique_phone());
        contact.company_name = Some(HeaplessString::try_from(company.as_str()).unwrap());
        let unique_id = repo.insert(&contact).await?;

        let hits = repo.search_by_text(&company[5..]).await?;
        assert!(hits.iter().any(|c| c.c_unique_id.as_str() == unique_id));

        // The assigned unique id itself is searchable.
        let hits = repo.search_by_text(&unique_id).await?;
        assert!(hits.iter().any(|c| c.c_unique_id.as_str() == unique_id));

        ctx.delete_by_unique_id(&unique_id).await?;
        Ok(())
    }
}
