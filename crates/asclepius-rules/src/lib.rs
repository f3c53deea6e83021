//! Declarative rule matching over appointment records.
//!
//! This crate compiles declarative condition descriptions (field → constraint
//! mappings) into executable predicates and applies a prioritized set of them
//! to a batch of records. A record survives filtering only if every active
//! rule's condition holds.
//!
//! # Example
//!
//! ```ignore
//! use asclepius_rules::{RuleDescription, RuleEngine};
//!
//! let descriptions = RuleDescription::parse_many(
//!     r#"[{ "name": "Peds", "priority": 5,
//!           "condition": { "specialty": "Pediatrics", "age_range": { "max": 12 } } }]"#,
//! )?;
//! let engine = RuleEngine::from_configs(descriptions)?;
//! let kept = engine.filter_records(&records);
//! ```

pub mod clauses;
pub mod compiler;
pub mod config;
pub mod constraint;
pub mod engine;
pub mod record;

pub use clauses::{AgeInRange, FieldEquals};
pub use compiler::compile_condition;
pub use config::RuleDescription;
pub use constraint::{AllOf, BoxedConstraint, Constraint};
pub use engine::{Rule, RuleEngine};
pub use record::Record;
