use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::RecordStore;
use crate::filter::DateRange;
use crate::model::{DieselRecord, NewDieselRecord};

#[derive(Default)]
struct Table {
    rows: Vec<DieselRecord>,
    last_id: i32,
}

/// Test double with the same ordering and id rules as the Postgres table.
#[derive(Default)]
pub struct MemoryRecordStore {
    table: Mutex<Table>,
    failing: AtomicBool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail like a lost connection.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolClosed)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert(&self, record: NewDieselRecord) -> Result<DieselRecord, sqlx::Error> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        table.last_id += 1;
        let row = DieselRecord {
            id: table.last_id,
            lorry_number: record.lorry_number,
            record_date: record.record_date,
            price: record.price,
            liters: record.liters,
            created_at: Utc::now().naive_utc(),
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self, range: &DateRange) -> Result<Vec<DieselRecord>, sqlx::Error> {
        self.check()?;
        let table = self.table.lock().unwrap();
        let mut rows: Vec<DieselRecord> = table
            .rows
            .iter()
            .filter(|r| range.contains(r.record_date))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.record_date.cmp(&a.record_date).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);
        Ok(table.rows.len() < before)
    }
}
