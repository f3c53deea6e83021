//! JSON configuration for declarative rules.
//!
//! Rule descriptions arrive as an external configuration artifact (a JSON
//! array); unknown top-level keys on a description are tolerated, missing
//! required keys are not.

use asclepius_common::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One declarative rule description.
///
/// `name` and `condition` are required; `priority` defaults to 0, higher
/// sorting first once compiled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDescription {
    pub name: String,
    #[serde(default)]
    pub priority: i64,
    pub condition: Map<String, Value>,
}

impl RuleDescription {
    /// Parse a JSON array of rule descriptions.
    ///
    /// Any shape problem — missing `name` or `condition`, a non-array top
    /// level — is a `ConfigurationError`; nothing is partially parsed.
    pub fn parse_many(raw: &str) -> AppResult<Vec<RuleDescription>> {
        serde_json::from_str(raw)
            .map_err(|e| AppError::ConfigurationError(format!("invalid rule configuration: {e}")))
    }
}
