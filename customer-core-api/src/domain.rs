use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Flat field mapping accepted by the create and update intakes.
///
/// The caller-facing boundary has already parsed and authorized the request;
/// this struct is the well-formed payload handed to the lifecycle engine.
/// Update is a full replace: a field omitted here becomes NULL in storage,
/// not "unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerRequest {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    /// Free-form token; validated against the gender enum by the engine.
    pub gender: Option<String>,
    pub phone_no_primary: Option<String>,
    pub whatsapp_num: Option<String>,
    pub phone_no_secondary: Option<String>,
    pub email_id: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub company_name: Option<String>,
    pub contact_type: Option<String>,
    pub source: Option<String>,
    pub disposition: Option<String>,
    pub agent_name: Option<String>,
    pub comment: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// One audited field mutation as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

/// History submission body: a batch of field changes for one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySubmission {
    #[serde(rename = "customerId")]
    pub customer_id: i64,
    #[serde(rename = "C_unique_id")]
    pub c_unique_id: String,
    pub changes: Vec<FieldChange>,
}

/// Caller-facing view of one customer row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: i64,
    #[serde(rename = "C_unique_id")]
    pub c_unique_id: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: String,
    pub phone_no_primary: Option<String>,
    pub whatsapp_num: Option<String>,
    pub phone_no_secondary: Option<String>,
    pub email_id: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub company_name: Option<String>,
    pub contact_type: Option<String>,
    pub source: Option<String>,
    pub disposition: Option<String>,
    pub agent_name: Option<String>,
    pub comment: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub last_updated: DateTime<Utc>,
}

/// Caller-facing view of one change-history row, newest first in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    pub id: i64,
    pub customer_id: i64,
    #[serde(rename = "C_unique_id")]
    pub c_unique_id: String,
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub changed_at: DateTime<Utc>,
}
