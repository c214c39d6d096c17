use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One diesel purchase as stored in `diesel_records`.
///
/// Field order matches the CSV export columns.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct DieselRecord {
    pub id: i32,
    pub lorry_number: String,
    pub record_date: NaiveDate,
    pub price: f64,
    pub liters: f64,
    pub created_at: NaiveDateTime,
}

/// A validated record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDieselRecord {
    pub lorry_number: String,
    pub record_date: NaiveDate,
    pub price: f64,
    pub liters: f64,
}

/// Raw create payload. Fields stay loosely typed so that every problem can be
/// reported at once instead of failing on the first bad field.
#[derive(Debug, Default, Deserialize)]
pub struct PostDieselRecord {
    pub lorry_number: Option<Value>,
    pub record_date: Option<Value>,
    pub price: Option<Value>,
    pub liters: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedRecord {
    pub success: bool,
    pub id: i32,
}
