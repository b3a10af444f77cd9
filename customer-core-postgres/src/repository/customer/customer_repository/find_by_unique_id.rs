use customer_core_db::models::customer::CustomerModel;
use customer_core_db::repository::RepositoryError;

use super::repo_impl::CustomerRepositoryImpl;
use crate::utils::TryFromRow;

impl CustomerRepositoryImpl {
    pub(super) async fn find_by_unique_id_impl(
        &self,
        unique_id: &str,
    ) -> Result<Option<CustomerModel>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, c_unique_id, first_name, middle_name, last_name, gender,
                   phone_no_primary, whatsapp_num, phone_no_secondary, email_id,
                   address, country, company_name, contact_type, source,
                   disposition, agent_name, comment, date_of_birth, last_updated
            FROM customers
            WHERE c_unique_id = $1
            "#,
        )
        .bind(unique_id)
        .fetch_optional(&*self.pool)
        .await?;

        row.as_ref().map(CustomerModel::try_from_row).transpose()
    }
}
