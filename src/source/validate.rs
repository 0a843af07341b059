//! Ingestion boundary: wire records to validated pets
//!
//! Each element of a response is decoded on its own, so one record with a
//! missing or mistyped field is rejected without failing its neighbours.

use serde_json::Value;

use crate::core::{Pet, RawPet};
use crate::error::RecordError;

/// Validated pets in input order, plus the records that were rejected
#[derive(Debug, Default)]
pub(crate) struct Validated {
    pub(crate) pets: Vec<Pet>,
    pub(crate) rejected: Vec<RecordError>,
}

fn record_id(value: &Value) -> String {
    match value.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "?".to_string(),
    }
}

/// Decode and check one wire record
pub(crate) fn validate_record(value: Value) -> Result<Pet, RecordError> {
    let id = record_id(&value);
    let raw: RawPet = serde_json::from_value(value).map_err(|e| RecordError::Malformed {
        id,
        reason: e.to_string(),
    })?;
    Pet::try_from(raw)
}

pub(crate) fn validate_records(records: Vec<Value>) -> Validated {
    let mut out = Validated::default();
    for record in records {
        match validate_record(record) {
            Ok(pet) => out.pets.push(pet),
            Err(e) => out.rejected.push(e),
        }
    }
    out
}

/// Warn about rejected records on stderr and keep the valid ones
pub(crate) fn keep_valid(records: Vec<Value>) -> Vec<Pet> {
    let validated = validate_records(records);
    for e in &validated.rejected {
        eprintln!("Warning: skipping invalid record: {e}");
    }
    validated.pets
}
