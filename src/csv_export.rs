use crate::model::DieselRecord;

pub const CSV_HEADER: [&str; 6] = [
    "id",
    "lorry_number",
    "record_date",
    "price",
    "liters",
    "created_at",
];

pub const CSV_FILENAME: &str = "diesel-records.csv";

/// Renders records as CSV. The header row is always present, even when there
/// are no records.
pub fn records_to_csv(records: &[DieselRecord]) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.into_inner().map_err(|err| err.into_error().into())
}
