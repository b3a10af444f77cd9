use customer_core_db::models::customer::CustomerContact;
use customer_core_db::repository::RepositoryError;
use customer_core_db::utils::unique_id::next_unique_id;

use super::repo_impl::CustomerRepositoryImpl;
use crate::utils::is_unique_violation;

/// Retry budget for identifier minting when two creations race on the same
/// predecessor and collide on the `c_unique_id` unique constraint.
const MAX_MINT_ATTEMPTS: u32 = 3;

impl CustomerRepositoryImpl {
    pub(super) async fn insert_impl(
        &self,
        contact: &CustomerContact,
    ) -> Result<String, RepositoryError> {
        let mut attempt = 0;
        loop {
            attempt += 1;

            // Read-increment-insert runs inside one transaction; the unique
            // constraint on c_unique_id makes the loser of a race fail fast
            // and re-read instead of reusing the identifier.
            let mut tx = self.pool.begin().await?;

            let last: Option<String> = sqlx::query_scalar(
                r#"
                SELECT c_unique_id
                FROM customers
                ORDER BY id DESC
                LIMIT 1
                "#,
            )
            .fetch_optional(&mut *tx)
            .await?;

            let unique_id = next_unique_id(last.as_deref())?;

            let result = sqlx::query(
                r#"
                INSERT INTO customers
                (c_unique_id, first_name, middle_name, last_name, gender,
                 phone_no_primary, whatsapp_num, phone_no_secondary, email_id,
                 address, country, company_name, contact_type, source,
                 disposition, agent_name, comment, date_of_birth)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
                "#,
            )
            .bind(&unique_id)
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
            .execute(&mut *tx)
            .await;

            match result {
                Ok(_) => {
                    tx.commit().await?;
                    return Ok(unique_id);
                }
                Err(err) if is_unique_violation(&err) && attempt < MAX_MINT_ATTEMPTS => {
                    tracing::debug!(%unique_id, attempt, "unique id collision, retrying mint");
                    tx.rollback().await?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
