/// Idempotent DDL for the records table, run once at startup.
pub const STATEMENTS: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS diesel_records (
        id SERIAL PRIMARY KEY,
        lorry_number TEXT NOT NULL CHECK (btrim(lorry_number) <> ''),
        record_date DATE NOT NULL,
        price DOUBLE PRECISION NOT NULL CHECK (price > 0),
        liters DOUBLE PRECISION NOT NULL CHECK (liters > 0),
        created_at TIMESTAMP NOT NULL DEFAULT (now() AT TIME ZONE 'UTC'::text)
    );
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS diesel_records_record_date_idx
    ON diesel_records (record_date DESC, id DESC);
    "#,
];
