//! Appointment records that constraints evaluate against.
//!
//! A record promotes the standard appointment fields out of the raw source
//! mapping and keeps the mapping itself alongside them, so unrecognized keys
//! survive loading even though they take no part in matching.

use std::fmt;

use serde_json::{Map, Value};

/// One normalized appointment.
///
/// Promoted fields default to JSON `null` when the source mapping lacks them;
/// `patient_age` defaults to `0`. Records are constructed once at load time
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: Value,
    pub date: Value,
    pub specialty: Value,
    pub doctor_id: Value,
    pub patient_type: Value,
    pub status: Value,
    pub patient_age: i64,
    pub unit: Value,
    /// Full original source mapping, including keys not promoted above.
    pub data: Map<String, Value>,
}

impl Record {
    /// Build a record from a raw key-value mapping.
    ///
    /// A missing or non-integral `patient_age` becomes `0` so that range
    /// constraints always have a number to compare against.
    pub fn from_map(data: Map<String, Value>) -> Self {
        let get = |key: &str| data.get(key).cloned().unwrap_or(Value::Null);
        let patient_age = data.get("patient_age").and_then(Value::as_i64).unwrap_or(0);

        Self {
            id: get("id"),
            date: get("date"),
            specialty: get("specialty"),
            doctor_id: get("doctor_id"),
            patient_type: get("patient_type"),
            status: get("status"),
            patient_age,
            unit: get("unit"),
            data,
        }
    }

    /// Look up a promoted field by name.
    ///
    /// Never fails: missing fields and names outside the promoted set resolve
    /// to `Value::Null`, the absent sentinel. `null` equals no real constraint
    /// value, so a clause against an absent field fails unless its constraint
    /// is itself `null`.
    pub fn field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.clone(),
            "date" => self.date.clone(),
            "specialty" => self.specialty.clone(),
            "doctor_id" => self.doctor_id.clone(),
            "patient_type" => self.patient_type.clone(),
            "status" => self.status.clone(),
            "patient_age" => Value::from(self.patient_age),
            "unit" => self.unit.clone(),
            _ => Value::Null,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Specialty: {} | Doctor: {}",
            display_field(&self.id),
            display_field(&self.specialty),
            display_field(&self.doctor_id)
        )
    }
}

/// Render a field value without JSON quoting; absent fields render as `-`.
fn display_field(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
