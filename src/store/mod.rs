//! Persistence for diesel records.
//!
//! The service only talks to [`RecordStore`]; Postgres is the production
//! backend and an in-memory store backs the tests.

mod postgres;
#[cfg(test)]
pub mod memory;

pub use postgres::PgRecordStore;

use async_trait::async_trait;

use crate::filter::DateRange;
use crate::model::{DieselRecord, NewDieselRecord};

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a record and returns it with `id` and `created_at` filled in.
    async fn insert(&self, record: NewDieselRecord) -> Result<DieselRecord, sqlx::Error>;

    /// Records inside `range`, newest `record_date` first, ties by descending id.
    async fn list(&self, range: &DateRange) -> Result<Vec<DieselRecord>, sqlx::Error>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error>;
}
