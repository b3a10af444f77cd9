use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

/// Database model for one audited field mutation.
///
/// Rows are append-only: they are never updated, and they are only deleted
/// together with their owning customer. `changed_at` is assigned at write
/// time and drives newest-first read ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeLogModel {
    pub id: i64,
    pub customer_id: i64,
    pub c_unique_id: HeaplessString<20>,
    pub field: HeaplessString<50>,
    pub old_value: Option<HeaplessString<500>>,
    pub new_value: Option<HeaplessString<500>>,
    pub changed_at: DateTime<Utc>,
}
