use async_trait::async_trait;
use customer_core_db::models::customer::{
    ContactConflictRow, ContactKeys, CustomerContact, CustomerModel,
};
use customer_core_db::repository::{CustomerRepository, RepositoryError};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct CustomerRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl CustomerRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for CustomerModel {
    fn try_from_row(row: &PgRow) -> Result<Self, RepositoryError> {
        Ok(CustomerModel {
            id: row.try_get("id")?,
            c_unique_id: get_heapless_string(row, "c_unique_id")?,
            first_name: get_optional_heapless_string(row, "first_name")?,
            middle_name: get_optional_heapless_string(row, "middle_name")?,
            last_name: get_optional_heapless_string(row, "last_name")?,
            gender: row.try_get("gender")?,
            phone_no_primary: get_optional_heapless_string(row, "phone_no_primary")?,
            whatsapp_num: get_optional_heapless_string(row, "whatsapp_num")?,
            phone_no_secondary: get_optional_heapless_string(row, "phone_no_secondary")?,
            email_id: get_optional_heapless_string(row, "email_id")?,
            address: get_optional_heapless_string(row, "address")?,
            country: get_optional_heapless_string(row, "country")?,
            company_name: get_optional_heapless_string(row, "company_name")?,
            contact_type: get_optional_heapless_string(row, "contact_type")?,
            source: get_optional_heapless_string(row, "source")?,
            disposition: get_optional_heapless_string(row, "disposition")?,
            agent_name: get_optional_heapless_string(row, "agent_name")?,
            comment: get_optional_heapless_string(row, "comment")?,
            date_of_birth: row.try_get("date_of_birth")?,
            last_updated: row.try_get("last_updated")?,
        })
    }
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn insert(&self, contact: &CustomerContact) -> Result<String, RepositoryError> {
        self.insert_impl(contact).await
    }

    async fn update(
        &self,
        internal_id: i64,
        contact: &CustomerContact,
    ) -> Result<u64, RepositoryError> {
        self.update_impl(internal_id, contact).await
    }

    async fn delete_cascade(&self, internal_id: i64) -> Result<u64, RepositoryError> {
        self.delete_cascade_impl(internal_id).await
    }

    async fn find_by_unique_id(
        &self,
        unique_id: &str,
    ) -> Result<Option<CustomerModel>, RepositoryError> {
        self.find_by_unique_id_impl(unique_id).await
    }

    async fn exists(&self, internal_id: i64) -> Result<bool, RepositoryError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM customers WHERE id = $1")
            .bind(internal_id)
            .fetch_optional(&*self.pool)
            .await?;
        Ok(found.is_some())
    }

    async fn list_recent(&self) -> Result<Vec<CustomerModel>, RepositoryError> {
        self.list_recent_impl().await
    }

    async fn search_by_text(&self, query: &str) -> Result<Vec<CustomerModel>, RepositoryError> {
        self.search_by_text_impl(query).await
    }

    async fn find_conflicts(
        &self,
        keys: &ContactKeys,
        exclude_id: Option<i64>,
    ) -> Result<Vec<ContactConflictRow>, RepositoryError> {
        self.find_conflicts_impl(keys, exclude_id).await
    }
}
