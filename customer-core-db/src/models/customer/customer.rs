use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Database model for the gender enum column.
///
/// An absent value falls back to the column default (`male`); a present but
/// unrecognized token is rejected upstream rather than silently coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "gender", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(()),
        }
    }
}

/// Database model for one customer row.
///
/// `id` is the internal storage key, `c_unique_id` the public `MC_<n>`
/// identifier; both are immutable after creation. Phone fields keep the raw
/// string as submitted; comparison keys are derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerModel {
    pub id: i64,
    pub c_unique_id: HeaplessString<20>,
    pub first_name: Option<HeaplessString<50>>,
    pub middle_name: Option<HeaplessString<50>>,
    pub last_name: Option<HeaplessString<50>>,
    pub gender: Gender,
    pub phone_no_primary: Option<HeaplessString<30>>,
    pub whatsapp_num: Option<HeaplessString<30>>,
    pub phone_no_secondary: Option<HeaplessString<30>>,
    pub email_id: Option<HeaplessString<100>>,
    pub address: Option<HeaplessString<200>>,
    pub country: Option<HeaplessString<50>>,
    pub company_name: Option<HeaplessString<100>>,
    pub contact_type: Option<HeaplessString<50>>,
    pub source: Option<HeaplessString<50>>,
    pub disposition: Option<HeaplessString<50>>,
    pub agent_name: Option<HeaplessString<100>>,
    pub comment: Option<HeaplessString<500>>,
    pub date_of_birth: Option<NaiveDate>,
    /// Maintained by storage on every mutation; never caller-supplied.
    pub last_updated: DateTime<Utc>,
}

/// The mutable contact fields of a customer, as written by insert and by
/// full-replace update. Absent optional fields are stored as NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerContact {
    pub first_name: Option<HeaplessString<50>>,
    pub middle_name: Option<HeaplessString<50>>,
    pub last_name: Option<HeaplessString<50>>,
    pub gender: Gender,
    pub phone_no_primary: Option<HeaplessString<30>>,
    pub whatsapp_num: Option<HeaplessString<30>>,
    pub phone_no_secondary: Option<HeaplessString<30>>,
    pub email_id: Option<HeaplessString<100>>,
    pub address: Option<HeaplessString<200>>,
    pub country: Option<HeaplessString<50>>,
    pub company_name: Option<HeaplessString<100>>,
    pub contact_type: Option<HeaplessString<50>>,
    pub source: Option<HeaplessString<50>>,
    pub disposition: Option<HeaplessString<50>>,
    pub agent_name: Option<HeaplessString<100>>,
    pub comment: Option<HeaplessString<500>>,
    pub date_of_birth: Option<NaiveDate>,
}
