use customer_core_db::models::customer::CustomerContact;
use customer_core_db::repository::RepositoryError;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    /// Full replace of the mutable contact fields. Absent optional fields
    /// overwrite the stored value with NULL; id and c_unique_id are never
    /// touched, and the last_updated trigger stamps the row.
    pub(super) async fn update_impl(
        &self,
        internal_id: i64,
        contact: &CustomerContact,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE customers SET
                first_name = $2, middle_name = $3, last_name = $4,
                gender = $5, phone_no_primary = $6, whatsapp_num = $7,
                phone_no_secondary = $8, email_id = $9, address = $10,
                country = $11, company_name = $12, contact_type = $13,
                source = $14, disposition = $15, agent_name = $16,
                comment = $17, date_of_birth = $18
            WHERE id = $1
            "#,
        )
        .bind(internal_id)
        .bind(contact.first_name.as_deref())
        .bind(contact.middle_name.as_deref())
        .bind(contact.last_name.as_deref())
        .bind(contact.gender)
        .bind(contact.phone_no_primary.as_deref())
        .bind(contact.whatsapp_num.as_deref())
        .bind(contact.phone_no_secondary.as_deref())
        .bind(contact.email_id.as_deref())
        .bind(contact.address.as_deref())
        .bind(contact.country.as_deref())
        .bind(contact.company_name.as_deref())
        .bind(contact.contact_type.as_deref())
        .bind(contact.source.as_deref())
        .bind(contact.disposition.as_deref())
        .bind(contact.agent_name.as_deref())
        .bind(contact.comment.as_deref())
        .bind(contact.date_of_birth)
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
    use customer_core_db::repository::CustomerRepository;
    use heapless::String as HeaplessString;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_update_is_full_replace(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.customer_repos.customer_repository;

        let mut contact = new_test_contact(&unique_phone());
        contact.comment = Some(HeaplessString::try_from("call back on Monday").unwrap());
        let unique_id = repo.insert(&contact).await?;
        let stored = repo.find_by_unique_id(&unique_id).await?.unwrap();

        // Omitting the comment in the replacement payload nulls it out.
        contact.comment = None;
        let affected = repo.update(stored.id, &contact).await?;
        assert_eq!(affected, 1);

        let updated = repo.find_by_unique_id(&unique_id).await?.unwrap();
        assert!(updated.comment.is_none());
        assert_eq!(updated.c_unique_id, stored.c_unique_id);

        ctx.delete_by_unique_id(&unique_id).await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_update_unknown_id_affects_zero_rows(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.customer_repos.customer_repository;

        let affected = repo.update(i64::MAX, &new_test_contact(&unique_phone())).await?;
        assert_eq!(affected, 0);
        Ok(())
    }
}
