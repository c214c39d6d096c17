use std::num::IntErrorKind;
use std::sync::Arc;

use crate::csv_export::records_to_csv;
use crate::error::ServiceError;
use crate::filter::DateRange;
use crate::model::{DieselRecord, PostDieselRecord};
use crate::store::RecordStore;
use crate::validation::validate_new_record;

/// Stateless operations over a [`RecordStore`].
#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn RecordStore>,
}

impl RecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: &PostDieselRecord) -> Result<DieselRecord, ServiceError> {
        let record = validate_new_record(input).map_err(ServiceError::Validation)?;
        self.store
            .insert(record)
            .await
            .map_err(ServiceError::storage("Failed to create record"))
    }

    pub async fn list(&self, range: &DateRange) -> Result<Vec<DieselRecord>, ServiceError> {
        self.store
            .list(range)
            .await
            .map_err(ServiceError::storage("Failed to fetch records"))
    }

    /// Deletes by the raw path id. Only positive integers reach the store;
    /// ones past the `SERIAL` range cannot exist and are reported missing.
    pub async fn remove(&self, raw_id: &str) -> Result<i32, ServiceError> {
        let trimmed = raw_id.trim();
        let id = match trimmed.parse::<i32>() {
            Ok(id) if id > 0 => id,
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                return Err(ServiceError::NotFound(trimmed.to_string()));
            }
            _ => return Err(ServiceError::InvalidId(raw_id.to_string())),
        };

        let deleted = self
            .store
            .delete(id)
            .await
            .map_err(ServiceError::storage("Failed to delete record"))?;
        if deleted {
            Ok(id)
        } else {
            Err(ServiceError::NotFound(id.to_string()))
        }
    }

    pub async fn export_csv(&self, range: &DateRange) -> Result<Vec<u8>, ServiceError> {
        let records = self
            .store
            .list(range)
            .await
            .map_err(ServiceError::storage("Failed to export CSV"))?;
        Ok(records_to_csv(&records)?)
    }
}
