use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, QueryBuilder};

use super::RecordStore;
use crate::filter::DateRange;
use crate::model::{DieselRecord, NewDieselRecord};
use crate::schema;

const INSERT_RECORD: &str = r#"
    INSERT INTO diesel_records
    (lorry_number, record_date, price, liters)
    VALUES($1, $2, $3, $4)
    RETURNING id, lorry_number, record_date, price, liters, created_at;
    "#;

const DELETE_RECORD: &str = "DELETE FROM diesel_records WHERE id = $1";

/// Filtered listing, newest `record_date` first and ties by descending id.
fn list_query(range: &DateRange) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT id, lorry_number, record_date, price, liters, created_at FROM diesel_records",
    );
    range.push_where(&mut qb);
    qb.push(" ORDER BY record_date DESC, id DESC");
    qb
}

pub struct PgRecordStore {
    db: PgPool,
}

impl PgRecordStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let db = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self { db })
    }

    /// Creates the table and its index if they are missing.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        for statement in schema::STATEMENTS {
            sqlx::query(statement).execute(&self.db).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert(&self, record: NewDieselRecord) -> Result<DieselRecord, sqlx::Error> {
        sqlx::query_as::<_, DieselRecord>(INSERT_RECORD)
            .bind(record.lorry_number)
            .bind(record.record_date)
            .bind(record.price)
            .bind(record.liters)
            .fetch_one(&self.db)
            .await
    }

    async fn list(&self, range: &DateRange) -> Result<Vec<DieselRecord>, sqlx::Error> {
        let mut qb = list_query(range);
        qb.build_query_as::<DieselRecord>().fetch_all(&self.db).await
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(DELETE_RECORD)
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
