use serde::{Deserialize, Serialize};

use crate::utils::phone::normalize_phone;

pub const PRIMARY_PHONE_IN_USE: &str =
    "The phone number in the Primary field is already in use!!";
pub const WHATSAPP_IN_USE: &str =
    "The phone number in the Whatsapp field is already in use!!";
pub const EMAIL_IN_USE: &str = "The email address is already in use!!";

/// Normalized comparison keys for duplicate detection.
///
/// Phone keys are last-10-digit normalized; the email key is compared raw.
/// An empty key never matches anything and is skipped entirely.
#[derive(Debug, Clone, Default)]
pub struct ContactKeys {
    pub primary: String,
    pub whatsapp: String,
    pub email: Option<String>,
}

impl ContactKeys {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
            && self.whatsapp.is_empty()
            && self.email.as_deref().map_or(true, str::is_empty)
    }
}

/// Contact columns of one row returned by the duplicate-detection query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConflictRow {
    pub c_unique_id: String,
    pub phone_no_primary: Option<String>,
    pub whatsapp_num: Option<String>,
    pub email_id: Option<String>,
}

/// Derive the conflict report from the colliding rows.
///
/// Each row contributes one message per colliding field, so a single row can
/// produce up to three messages. A non-empty result must abort the mutation
/// as a whole.
pub fn conflict_messages(rows: &[ContactConflictRow], keys: &ContactKeys) -> Vec<String> {
    let mut messages = Vec::new();
    for row in rows {
        if !keys.primary.is_empty()
            && normalize_phone(row.phone_no_primary.as_deref()) == keys.primary
        {
            messages.push(PRIMARY_PHONE_IN_USE.to_string());
        }
        if !keys.whatsapp.is_empty()
            && normalize_phone(row.whatsapp_num.as_deref()) == keys.whatsapp
        {
            messages.push(WHATSAPP_IN_USE.to_string());
        }
        if let Some(email) = keys.email.as_deref() {
            if !email.is_empty() && row.email_id.as_deref() == Some(email) {
                messages.push(EMAIL_IN_USE.to_string());
            }
        }
    }
    messages
}
