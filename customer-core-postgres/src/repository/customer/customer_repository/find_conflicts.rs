use customer_core_db::models::customer::{ContactConflictRow, ContactKeys};
use customer_core_db::repository::RepositoryError;
use sqlx::Row;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    /// Rows colliding with the normalized candidate keys.
    ///
    /// Phone columns are normalized in SQL the same way the normalizer does
    /// it in Rust: strip non-digits, keep the last 10. Email is compared
    /// raw. An empty key disables its predicate, so an absent value never
    /// matches anything; `exclude_id` keeps an update from colliding with
    /// the record it is updating.
    pub(super) async fn find_conflicts_impl(
        &self,
        keys: &ContactKeys,
        exclude_id: Option<i64>,
    ) -> Result<Vec<ContactConflictRow>, RepositoryError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT c_unique_id, phone_no_primary, whatsapp_num, email_id
            FROM customers
            WHERE (
                ($1 <> '' AND RIGHT(regexp_replace(COALESCE(phone_no_primary, ''), '\D', '', 'g'), 10) = $1)
                OR ($2 <> '' AND RIGHT(regexp_replace(COALESCE(whatsapp_num, ''), '\D', '', 'g'), 10) = $2)
                OR ($3 <> '' AND email_id = $3)
            )
            AND ($4::BIGINT IS NULL OR id <> $4)
            "#,
        )
        .bind(&keys.primary)
        .bind(&keys.whatsapp)
        .bind(keys.email.as_deref().unwrap_or(""))
        .bind(exclude_id)
        .fetch_all(&*self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(ContactConflictRow {
                    c_unique_id: row.try_get("c_unique_id")?,
                    phone_no_primary: row.try_get("phone_no_primary")?,
                    whatsapp_num: row.try_get("whatsapp_num")?,
                    email_id: row.try_get("email_id")?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::customer::customer_repository::test_utils::{
        new_test_contact, unique_phone,
    };
    use crate::test_helper::setup_test_context;
    use customer_core_db::models::customer::ContactKeys;
    use customer_core_db::repository::CustomerRepository;
    use customer_core_db::utils::phone::normalize_phone;
    use heapless::String as HeaplessString;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_normalized_phone_collision_is_found(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.customer_repos.customer_repository;

        let digits = unique_phone();
        let formatted = format!("+91 {}-{}", &digits[..5], &digits[5..]);
        let unique_id = repo.insert(&new_test_contact(&formatted)).await?;

        let keys = ContactKeys {
            primary: normalize_phone(Some(&digits)),
            whatsapp: String::new(),
            email: None,
        };
        let rows = repo.find_conflicts(&keys, None).await?;
        assert!(rows.iter().any(|r| r.c_unique_id == unique_id));

        ctx.delete_by_unique_id(&unique_id).await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_exclusion_prevents_self_collision(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.customer_repos.customer_repository;

        let digits = unique_phone();
        let mut contact = new_test_contact(&digits);
        let email = format!("{digits}@example.com");
        contact.email_id = Some(HeaplessString::try_from(email.as_str()).unwrap());
        let unique_id = repo.insert(&contact).await?;
        let stored = repo.find_by_unique_id(&unique_id).await?.unwrap();

        let keys = ContactKeys {
            primary: normalize_phone(Some(&digits)),
            whatsapp: String::new(),
            email: Some(email),
        };
        let rows = repo.find_conflicts(&keys, Some(stored.id)).await?;
        assert!(rows.iter().all(|r| r.c_unique_id != unique_id));

        ctx.delete_by_unique_id(&unique_id).await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_empty_keys_skip_the_query(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.customer_repos.customer_repository;

        let rows = repo.find_conflicts(&ContactKeys::default(), None).await?;
        assert!(rows.is_empty());
        Ok(())
    }
}
