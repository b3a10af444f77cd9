use customer_core_db::models::customer::CustomerModel;
use customer_core_db::repository::RepositoryError;

use super::repo_impl::CustomerRepositoryImpl;
use crate::utils::TryFromRow;

impl CustomerRepositoryImpl {
    /// Every customer, most recently updated first. No pagination ceiling;
    /// callers must tolerate unbounded result size.
    pub(super) async fn list_recent_impl(&self) -> Result<Vec<CustomerModel>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, c_unique_id, first_name, middle_name, last_name, gender,
                   phone_no_primary, whatsapp_num, phone_no_secondary, email_id,
                   address, country, company_name, contact_type, source,
                   disposition, agent_name, comment, date_of_birth, last_updated
            FROM customers
            ORDER BY last_updated DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(CustomerModel::try_from_row).collect()
    }
}
