//! Condition compiler: declarative condition mappings → executable constraints.

use asclepius_common::{AppError, AppResult};
use serde_json::{Map, Value};

use crate::clauses::{AgeInRange, FieldEquals};
use crate::constraint::{AllOf, BoxedConstraint};

/// The reserved condition key carrying a nested range specification.
const AGE_RANGE_KEY: &str = "age_range";

/// Compile a condition description into a single conjunction constraint.
///
/// Every scalar, string, array, or `null` value becomes an exact-match clause
/// on the named field. A nested mapping is only legal under the reserved
/// `age_range` key; any other nested mapping is rejected here, as is an
/// `age_range` value that is not a mapping. An empty description compiles to
/// a constraint that matches every record.
///
/// All validation happens at compile time: a malformed description aborts
/// with `ConfigurationError` before any predicate is produced.
pub fn compile_condition(condition: &Map<String, Value>) -> AppResult<AllOf> {
    let mut clauses: Vec<BoxedConstraint> = Vec::with_capacity(condition.len());

    for (field, value) in condition {
        match value {
            Value::Object(spec) if field == AGE_RANGE_KEY => {
                clauses.push(Box::new(AgeInRange::from_spec(spec)?));
            }
            Value::Object(_) => {
                return Err(AppError::ConfigurationError(format!(
                    "unsupported nested condition key '{field}' (only '{AGE_RANGE_KEY}' takes a mapping)"
                )));
            }
            _ if field == AGE_RANGE_KEY => {
                return Err(AppError::ConfigurationError(format!(
                    "'{AGE_RANGE_KEY}' must be a mapping with optional 'min'/'max' bounds, got {value}"
                )));
            }
            _ => clauses.push(Box::new(FieldEquals::new(field.clone(), value.clone()))),
        }
    }

    Ok(AllOf::new(clauses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Constraint;
    use crate::record::Record;
    use serde_json::json;

    fn condition(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => Record::from_map(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_compiles_mixed_clauses() {
        let compiled = compile_condition(&condition(json!({
            "specialty": "Pediatrics",
            "age_range": { "max": 12 }
        })))
        .unwrap();

        assert_eq!(compiled.len(), 2);
        assert!(compiled.matches(&record(json!({
            "specialty": "Pediatrics",
            "patient_age": 8
        }))));
        assert!(!compiled.matches(&record(json!({
            "specialty": "Pediatrics",
            "patient_age": 15
        }))));
    }

    #[test]
    fn test_empty_condition_matches_everything() {
        let compiled = compile_condition(&Map::new()).unwrap();

        assert!(compiled.is_empty());
        assert!(compiled.matches(&record(json!({ "status": "cancelled" }))));
    }

    #[test]
    fn test_unsupported_nested_key_is_rejected() {
        let err = compile_condition(&condition(json!({
            "date_range": { "min": "2025-01-01" }
        })))
        .unwrap_err();

        assert!(matches!(err, AppError::ConfigurationError(_)));
        assert!(err.to_string().contains("date_range"));
    }

    #[test]
    fn test_scalar_age_range_is_rejected() {
        let err = compile_condition(&condition(json!({ "age_range": 12 }))).unwrap_err();

        assert!(matches!(err, AppError::ConfigurationError(_)));
        assert!(err.to_string().contains("must be a mapping"));
    }

    #[test]
    fn test_malformed_bound_propagates() {
        let err = compile_condition(&condition(json!({
            "age_range": { "min": [] }
        })))
        .unwrap_err();

        assert!(matches!(err, AppError::ConfigurationError(_)));
    }
}
