use async_trait::async_trait;
use heapless::String as HeaplessString;
use std::sync::Arc;

use customer_core_api::domain::{
    ChangeLogEntry, CustomerRecord, CustomerRequest, FieldChange, HistorySubmission,
};
use customer_core_api::error::{ApiError, ApiResult};
use customer_core_api::service::CustomerLifecycle;
use customer_core_db::models::customer::{
    conflict_messages, ChangeLogModel, ContactKeys, CustomerContact, CustomerModel, Gender,
};
use customer_core_db::repository::{ChangeLogRepository, CustomerRepository, RepositoryError};
use customer_core_db::utils::phone::normalize_phone;

pub const PRIMARY_PHONE_REQUIRED: &str = "Primary phone number is required.";

/// Lifecycle engine over the Postgres repositories.
///
/// Validation and conflict detection happen before any write; a rejected
/// request leaves storage untouched.
pub struct CustomerLifecycleImpl {
    customers: Arc<dyn CustomerRepository>,
    change_log: Arc<dyn ChangeLogRepository>,
}

impl CustomerLifecycleImpl {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        change_log: Arc<dyn ChangeLogRepository>,
    ) -> Self {
        Self {
            customers,
            change_log,
        }
    }
}

/// Storage failures are logged for operators; the caller only ever sees a
/// generic internal-failure message, never the underlying cause.
fn storage_failure(context: &'static str, err: RepositoryError) -> ApiError {
    tracing::error!(context, error = %err, "storage operation failed");
    ApiError::DatabaseError("internal storage failure".to_string())
}

fn bounded<const N: usize>(
    field: &'static str,
    value: &Option<String>,
) -> ApiResult<Option<HeaplessString<N>>> {
    value
        .as_deref()
        .map(|v| {
            HeaplessString::try_from(v).map_err(|_| {
                ApiError::ValidationError(format!("Field '{field}' exceeds {N} characters"))
            })
        })
        .transpose()
}

fn contact_from_request(request: &CustomerRequest) -> ApiResult<CustomerContact> {
    // Absent gender takes the column default; a present but unrecognized
    // token is rejected instead of silently coerced.
    let gender = match request.gender.as_deref() {
        None => Gender::default(),
        Some(token) => token.parse().map_err(|_| {
            ApiError::ValidationError(format!("Invalid gender value '{token}'"))
        })?,
    };

    Ok(CustomerContact {
        first_name: bounded("first_name", &request.first_name)?,
        middle_name: bounded("middle_name", &request.middle_name)?,
        last_name: bounded("last_name", &request.last_name)?,
        gender,
        phone_no_primary: bounded("phone_no_primary", &request.phone_no_primary)?,
        whatsapp_num: bounded("whatsapp_num", &request.whatsapp_num)?,
        phone_no_secondary: bounded("phone_no_secondary", &request.phone_no_secondary)?,
        email_id: bounded("email_id", &request.email_id)?,
        address: bounded("address", &request.address)?,
        country: bounded("country", &request.country)?,
        company_name: bounded("company_name", &request.company_name)?,
        contact_type: bounded("contact_type", &request.contact_type)?,
        source: bounded("source", &request.source)?,
        disposition: bounded("disposition", &request.disposition)?,
        agent_name: bounded("agent_name", &request.agent_name)?,
        comment: bounded("comment", &request.comment)?,
        date_of_birth: request.date_of_birth,
    })
}

fn contact_keys(contact: &CustomerContact) -> ContactKeys {
    ContactKeys {
        primary: normalize_phone(contact.phone_no_primary.as_deref()),
        whatsapp: normalize_phone(contact.whatsapp_num.as_deref()),
        email: contact.email_id.as_deref().map(str::to_string),
    }
}

fn record_from_model(model: &CustomerModel) -> CustomerRecord {
    CustomerRecord {
        id: model.id,
        c_unique_id: model.c_unique_id.to_string(),
        first_name: model.first_name.as_deref().map(str::to_string),
        middle_name: model.middle_name.as_deref().map(str::to_string),
        last_name: model.last_name.as_deref().map(str::to_string),
        gender: model.gender.to_string(),
        phone_no_primary: model.phone_no_primary.as_deref().map(str::to_string),
        whatsapp_num: model.whatsapp_num.as_deref().map(str::to_string),
        phone_no_secondary: model.phone_no_secondary.as_deref().map(str::to_string),
        email_id: model.email_id.as_deref().map(str::to_string),
        address: model.address.as_deref().map(str::to_string),
        country: model.country.as_deref().map(str::to_string),
        company_name: model.company_name.as_deref().map(str::to_string),
        contact_type: model.contact_type.as_deref().map(str::to_string),
        source: model.source.as_deref().map(str::to_string),
        disposition: model.disposition.as_deref().map(str::to_string),
        agent_name: model.agent_name.as_deref().map(str::to_string),
        comment: model.comment.as_deref().map(str::to_string),
        date_of_birth: model.date_of_birth,
        last_updated: model.last_updated,
    }
}

fn entry_from_model(model: &ChangeLogModel) -> ChangeLogEntry {
    ChangeLogEntry {
        id: model.id,
        customer_id: model.customer_id,
        c_unique_id: model.c_unique_id.to_string(),
        field: model.field.to_string(),
        old_value: model.old_value.as_deref().map(str::to_string),
        new_value: model.new_value.as_deref().map(str::to_string),
        changed_at: model.changed_at,
    }
}

fn validate_changes(changes: &[FieldChange]) -> ApiResult<()> {
    if changes.is_empty() {
        return Err(ApiError::ValidationError("Invalid request data".to_string()));
    }
    for change in changes {
        if change.field.trim().is_empty() {
            return Err(ApiError::ValidationError(
                "Change entries must name a field".to_string(),
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl CustomerLifecycle for CustomerLifecycleImpl {
    async fn create(&self, request: CustomerRequest) -> ApiResult<String> {
        let contact = contact_from_request(&request)?;

        // The missing-phone message is collected rather than returned
        // immediately so it is reported alongside any uniqueness conflicts.
        let mut errors = Vec::new();
        if contact.phone_no_primary.as_deref().map_or(true, str::is_empty) {
            errors.push(PRIMARY_PHONE_REQUIRED.to_string());
        }

        let keys = contact_keys(&contact);
        let rows = self
            .customers
            .find_conflicts(&keys, None)
            .await
            .map_err(|e| storage_failure("detect duplicate contacts", e))?;
        let conflicts = conflict_messages(&rows, &keys);

        if !errors.is_empty() && conflicts.is_empty() {
            return Err(ApiError::ValidationError(errors.remove(0)));
        }
        errors.extend(conflicts);
        if !errors.is_empty() {
            return Err(ApiError::ConflictError(errors));
        }

        let unique_id = self
            .customers
            .insert(&contact)
            .await
            .map_err(|e| storage_failure("insert customer", e))?;
        tracing::debug!(%unique_id, "customer record created");
        Ok(unique_id)
    }

    async fn update(&self, internal_id: i64, request: CustomerRequest) -> ApiResult<()> {
        let contact = contact_from_request(&request)?;

        let keys = contact_keys(&contact);
        let rows = self
            .customers
            .find_conflicts(&keys, Some(internal_id))
            .await
            .map_err(|e| storage_failure("detect duplicate contacts", e))?;
        let conflicts = conflict_messages(&rows, &keys);
        if !conflicts.is_empty() {
            return Err(ApiError::ConflictError(conflicts));
        }

        let affected = self
            .customers
            .update(internal_id, &contact)
            .await
            .map_err(|e| storage_failure("update customer", e))?;
        if affected == 0 {
            return Err(ApiError::NotFound("Customer not found".to_string()));
        }
        Ok(())
    }

    async fn submit_history(
        &self,
        submission: HistorySubmission,
    ) -> ApiResult<Vec<ChangeLogEntry>> {
        if submission.customer_id <= 0 || submission.c_unique_id.is_empty() {
            return Err(ApiError::ValidationError("Invalid request data".to_string()));
        }
        validate_changes(&submission.changes)?;

        self.change_log
            .append(
                submission.customer_id,
                &submission.c_unique_id,
                &submission.changes,
            )
            .await
            .map_err(|e| storage_failure("append change history", e))?;

        let history = self
            .change_log
            .list_for(submission.customer_id)
            .await
            .map_err(|e| storage_failure("read change history", e))?;
        Ok(history.iter().map(entry_from_model).collect())
    }

    async fn fetch_history(&self, internal_id: i64) -> ApiResult<Vec<ChangeLogEntry>> {
        // An unknown customer is not-found; a known customer with no
        // history yet legitimately yields an empty list.
        let exists = self
            .customers
            .exists(internal_id)
            .await
            .map_err(|e| storage_failure("look up customer", e))?;
        if !exists {
            return Err(ApiError::NotFound("Customer not found".to_string()));
        }

        let history = self
            .change_log
            .list_for(internal_id)
            .await
            .map_err(|e| storage_failure("read change history", e))?;
        Ok(history.iter().map(entry_from_model).collect())
    }

    async fn delete(&self, internal_id: i64) -> ApiResult<()> {
        if internal_id <= 0 {
            return Err(ApiError::ValidationError(
                "Valid Customer ID is required".to_string(),
            ));
        }

        let removed = self
            .customers
            .delete_cascade(internal_id)
            .await
            .map_err(|e| storage_failure("delete customer", e))?;
        if removed == 0 {
            return Err(ApiError::NotFound("Customer not found".to_string()));
        }
        Ok(())
    }

    async fn view(&self, unique_id: &str) -> ApiResult<CustomerRecord> {
        let model = self
            .customers
            .find_by_unique_id(unique_id)
            .await
            .map_err(|e| storage_failure("look up customer", e))?;
        match model {
            Some(model) => Ok(record_from_model(&model)),
            None => Err(ApiError::NotFound("Customer not found".to_string())),
        }
    }

    async fn list_recent(&self) -> ApiResult<Vec<CustomerRecord>> {
        let models = self
            .customers
            .list_recent()
            .await
            .map_err(|e| storage_failure("list customers", e))?;
        Ok(models.iter().map(record_from_model).collect())
    }

    async fn search(&self, query: &str) -> ApiResult<Vec<CustomerRecord>> {
        let models = self
            .customers
            .search_by_text(query)
            .await
            .map_err(|e| storage_failure("search customers", e))?;
        Ok(models.iter().map(record_from_model).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::customer::customer_repository::test_utils::unique_phone;
    use crate::test_helper::setup_test_context;
    use customer_core_db::models::customer::PRIMARY_PHONE_IN_USE;
    use serial_test::serial;

    fn request(primary_phone: &str) -> CustomerRequest {
        CustomerRequest {
            first_name: Some("Ann".to_string()),
            phone_no_primary: Some(primary_phone.to_string()),
            ..CustomerRequest::default()
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_create_then_duplicate_is_rejected(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let engine = ctx.lifecycle();

        let digits = unique_phone();
        let formatted = format!("+91 {}-{}", &digits[..5], &digits[5..]);
        let unique_id = engine.create(request(&formatted)).await?;
        assert!(unique_id.starts_with("MC_"));

        // Same normalized suffix, different formatting.
        let err = engine.create(request(&digits)).await.unwrap_err();
        match err {
            ApiError::ConflictError(messages) => {
                assert!(messages.contains(&PRIMARY_PHONE_IN_USE.to_string()));
            }
            other => panic!("expected conflict, got {other:?}"),
        }

        ctx.delete_by_unique_id(&unique_id).await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_create_requires_primary_phone(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let engine = ctx.lifecycle();

        let err = engine.create(CustomerRequest::default()).await.unwrap_err();
        match err {
            ApiError::ValidationError(message) => {
                assert_eq!(message, PRIMARY_PHONE_REQUIRED);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_gender_is_rejected(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let engine = ctx.lifecycle();

        let mut req = request(&unique_phone());
        req.gender = Some("unknown".to_string());
        let err = engine.create(req).await.unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_update_with_own_contact_is_not_a_self_conflict(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let engine = ctx.lifecycle();

        let digits = unique_phone();
        let unique_id = engine.create(request(&digits)).await?;
        let record = engine.view(&unique_id).await?;

        let mut req = request(&digits);
        req.first_name = Some("Anna".to_string());
        engine.update(record.id, req).await?;

        let updated = engine.view(&unique_id).await?;
        assert_eq!(updated.first_name.as_deref(), Some("Anna"));

        ctx.delete_by_unique_id(&unique_id).await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_submit_history_rejects_malformed_payload(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let engine = ctx.lifecycle();

        let submission = HistorySubmission {
            customer_id: 7,
            c_unique_id: "MC_7".to_string(),
            changes: Vec::new(),
        };
        let err = engine.submit_history(submission).await.unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_history_unknown_customer_is_not_found(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let engine = ctx.lifecycle();

        let err = engine.fetch_history(i64::MAX).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_submit_then_fetch_returns_ordered_history(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let engine = ctx.lifecycle();

        let unique_id = engine.create(request(&unique_phone())).await?;
        let record = engine.view(&unique_id).await?;

        let submission = HistorySubmission {
            customer_id: record.id,
            c_unique_id: unique_id.clone(),
            changes: vec![
                FieldChange {
                    field: "comment".to_string(),
                    old_value: None,
                    new_value: Some("first touch".to_string()),
                },
                FieldChange {
                    field: "disposition".to_string(),
                    old_value: None,
                    new_value: Some("callback".to_string()),
                },
            ],
        };
        let history = engine.submit_history(submission).await?;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].field, "disposition");

        let fetched = engine.fetch_history(record.id).await?;
        assert_eq!(fetched.len(), 2);

        ctx.delete_by_unique_id(&unique_id).await?;
        Ok(())
    }
}
