use chrono::Utc;
use customer_core_db::models::customer::CustomerContact;
use heapless::String as HeaplessString;

/// Ten digits derived from the clock; unique enough for one test run.
pub fn unique_phone() -> String {
    format!(
        "{:010}",
        Utc::now().timestamp_nanos_opt().unwrap_or_default() % 10_000_000_000
    )
}

pub fn new_test_contact(primary_phone: &str) -> CustomerContact {
    CustomerContact {
        first_name: Some(HeaplessString::try_from("Ann").unwrap()),
        last_name: Some(HeaplessString::try_from("Sharma").unwrap()),
        phone_no_primary: Some(HeaplessString::try_from(primary_phone).unwrap()),
        ..CustomerContact::default()
    }
}
