use chrono::NaiveDate;
use serde_json::Value;

use crate::model::{NewDieselRecord, PostDieselRecord};

/// Why a price or liters value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    Missing,
    NotNumeric,
    NotPositive,
}

/// Parses a numeric field given either as a JSON number or a numeric string,
/// then checks that it is strictly positive.
pub fn parse_amount(value: Option<&Value>) -> Result<f64, AmountError> {
    let amount = match value {
        None | Some(Value::Null) => return Err(AmountError::Missing),
        Some(Value::Number(n)) => n.as_f64().ok_or(AmountError::NotNumeric)?,
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(AmountError::Missing);
            }
            s.parse::<f64>().map_err(|_| AmountError::NotNumeric)?
        }
        Some(_) => return Err(AmountError::NotNumeric),
    };

    if !amount.is_finite() {
        return Err(AmountError::NotNumeric);
    }
    if amount <= 0.0 {
        return Err(AmountError::NotPositive);
    }
    Ok(amount)
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Validates a create payload, collecting every failure in field order.
pub fn validate_new_record(input: &PostDieselRecord) -> Result<NewDieselRecord, Vec<String>> {
    let mut errors = Vec::new();

    let lorry_number = text_field(input.lorry_number.as_ref()).filter(|s| !s.is_empty());
    if lorry_number.is_none() {
        errors.push("lorry_number is required".to_string());
    }

    let record_date = match text_field(input.record_date.as_ref()).filter(|s| !s.is_empty()) {
        None => {
            errors.push("record_date is required (YYYY-MM-DD)".to_string());
            None
        }
        Some(raw) => {
            let parsed = parse_date(&raw);
            if parsed.is_none() {
                errors.push("record_date must be a valid date (YYYY-MM-DD)".to_string());
            }
            parsed
        }
    };

    let price = parse_amount(input.price.as_ref());
    if price.is_err() {
        errors.push("price must be a positive number".to_string());
    }

    let liters = parse_amount(input.liters.as_ref());
    if liters.is_err() {
        errors.push("liters must be a positive number".to_string());
    }

    match (lorry_number, record_date, price, liters) {
        (Some(lorry_number), Some(record_date), Ok(price), Ok(liters)) if errors.is_empty() => {
            Ok(NewDieselRecord {
                lorry_number,
                record_date,
                price,
                liters,
            })
        }
        _ => Err(errors),
    }
}
