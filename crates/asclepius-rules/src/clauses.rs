//! Concrete constraints the condition compiler emits.

use asclepius_common::{AppError, AppResult};
use serde_json::{Map, Value};

use crate::constraint::Constraint;
use crate::record::Record;

/// Exact-match constraint against a single record field.
///
/// Equality is type-sensitive (`1` does not equal `"1"`). A missing field
/// resolves to the `null` sentinel, which equals no real value — so the clause
/// fails unless the constraint value is itself `null`.
pub struct FieldEquals {
    field: String,
    value: Value,
}

impl FieldEquals {
    pub fn new(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }
}

impl Constraint for FieldEquals {
    fn matches(&self, record: &Record) -> bool {
        record.field(&self.field) == self.value
    }

    fn description(&self) -> String {
        format!("{} equals {}", self.field, self.value)
    }
}

/// Inclusive bound constraint on `patient_age`.
///
/// Absent bounds default to negative/positive infinity, so a bare
/// `age_range: {}` accepts every age.
#[derive(Debug)]
pub struct AgeInRange {
    min: f64,
    max: f64,
}

impl AgeInRange {
    /// Parse the nested `age_range` mapping, validating its bounds.
    ///
    /// Unknown keys and non-numeric bounds are configuration errors, caught
    /// here at compile time rather than failing silently during evaluation.
    pub fn from_spec(spec: &Map<String, Value>) -> AppResult<Self> {
        let mut min = f64::NEG_INFINITY;
        let mut max = f64::INFINITY;

        for (key, bound) in spec {
            match key.as_str() {
                "min" => min = numeric_bound(key, bound)?,
                "max" => max = numeric_bound(key, bound)?,
                other => {
                    return Err(AppError::ConfigurationError(format!(
                        "unknown age_range bound '{other}' (expected 'min' or 'max')"
                    )));
                }
            }
        }

        Ok(Self { min, max })
    }
}

fn numeric_bound(key: &str, bound: &Value) -> AppResult<f64> {
    bound.as_f64().ok_or_else(|| {
        AppError::ConfigurationError(format!(
            "age_range bound '{key}' must be numeric, got {bound}"
        ))
    })
}

impl Constraint for AgeInRange {
    fn matches(&self, record: &Record) -> bool {
        let age = record.patient_age as f64;
        self.min <= age && age <= self.max
    }

    fn description(&self) -> String {
        format!("patient_age within [{}, {}]", self.min, self.max)
    }
}
