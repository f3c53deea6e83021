//! Core constraint trait and the conjunction combinator.

use crate::record::Record;

/// A compiled, side-effect-free check against a single record.
///
/// Implementations must be pure: no shared mutable state, no mutation of the
/// record. That purity is what makes evaluation order irrelevant for
/// correctness and parallelization across records safe.
pub trait Constraint: Send + Sync {
    /// Check whether the record satisfies this constraint.
    fn matches(&self, record: &Record) -> bool;

    /// Human-readable description for diagnostics.
    fn description(&self) -> String;
}

/// A boxed constraint for dynamic dispatch.
pub type BoxedConstraint = Box<dyn Constraint>;

/// Conjunction over a list of constraints.
///
/// An empty list is vacuously true. Evaluation short-circuits on the first
/// failing clause; the clauses are independent, so the short-circuit affects
/// only performance.
pub struct AllOf {
    clauses: Vec<BoxedConstraint>,
}

impl AllOf {
    pub fn new(clauses: Vec<BoxedConstraint>) -> Self {
        Self { clauses }
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }
}

impl std::fmt::Debug for AllOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllOf")
            .field("clauses", &self.description())
            .finish()
    }
}

impl Constraint for AllOf {
    fn matches(&self, record: &Record) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }

    fn description(&self) -> String {
        if self.clauses.is_empty() {
            return "matches every record".to_string();
        }
        self.clauses
            .iter()
            .map(|clause| clause.description())
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clauses::FieldEquals;
    use serde_json::{json, Map, Value};

    fn record_with(key: &str, value: Value) -> Record {
        let mut map = Map::new();
        map.insert(key.to_string(), value);
        Record::from_map(map)
    }

    #[test]
    fn test_empty_conjunction_is_vacuously_true() {
        let all = AllOf::new(Vec::new());
        let record = Record::from_map(Map::new());

        assert!(all.matches(&record));
        assert_eq!(all.description(), "matches every record");
    }

    #[test]
    fn test_conjunction_requires_every_clause() {
        let all = AllOf::new(vec![
            Box::new(FieldEquals::new("status", json!("scheduled"))),
            Box::new(FieldEquals::new("unit", json!("north"))),
        ]);

        let mut map = Map::new();
        map.insert("status".to_string(), json!("scheduled"));
        map.insert("unit".to_string(), json!("north"));
        assert!(all.matches(&Record::from_map(map)));

        assert!(!all.matches(&record_with("status", json!("scheduled"))));
    }

    #[test]
    fn test_description_joins_clauses() {
        let all = AllOf::new(vec![
            Box::new(FieldEquals::new("status", json!("scheduled"))),
            Box::new(FieldEquals::new("unit", json!("north"))),
        ]);

        assert_eq!(
            all.description(),
            r#"status equals "scheduled" AND unit equals "north""#
        );
    }
}
