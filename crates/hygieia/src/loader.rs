//! File loaders for rule configurations and appointment record batches.

use std::path::Path;

use asclepius_common::{AppError, AppResult};
use asclepius_rules::{Record, RuleDescription};
use serde_json::{Map, Value};
use tokio::fs;

/// Load rule descriptions from a JSON configuration file.
///
/// An unreadable or unparsable file is a `ConfigurationError`: rule problems
/// abort the run before any engine is built.
pub async fn load_rules(path: &Path) -> AppResult<Vec<RuleDescription>> {
    let raw = fs::read_to_string(path).await.map_err(|e| {
        AppError::ConfigurationError(format!(
            "cannot read rule configuration {}: {e}",
            path.display()
        ))
    })?;

    RuleDescription::parse_many(&raw)
}

/// Load an appointment record batch from a JSON file.
///
/// The file must hold a JSON array of objects; each object becomes one
/// `Record`. Anything else is a `RecordLoadError`.
pub async fn load_records(path: &Path) -> AppResult<Vec<Record>> {
    let raw = fs::read_to_string(path).await.map_err(|e| {
        AppError::RecordLoadError(format!(
            "cannot read record batch {}: {e}",
            path.display()
        ))
    })?;

    let batch: Vec<Map<String, Value>> = serde_json::from_str(&raw).map_err(|e| {
        AppError::RecordLoadError(format!("invalid record batch {}: {e}", path.display()))
    })?;

    Ok(batch.into_iter().map(Record::from_map).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_records_builds_batch() {
        let file = temp_json(
            r#"[{ "id": 1, "specialty": "Pediatrics", "patient_age": 8 },
                { "id": 2, "specialty": "Cardiology" }]"#,
        );

        let records = load_records(file.path()).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, json!(1));
        assert_eq!(records[0].patient_age, 8);
        assert_eq!(records[1].patient_age, 0);
    }

    #[tokio::test]
    async fn test_load_records_rejects_malformed_batch() {
        let file = temp_json(r#"{ "not": "an array" }"#);

        let err = load_records(file.path()).await.unwrap_err();
        assert!(matches!(err, AppError::RecordLoadError(_)));
    }

    #[tokio::test]
    async fn test_load_records_missing_file() {
        let err = load_records(Path::new("/nonexistent/records.json"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::RecordLoadError(_)));
    }

    #[tokio::test]
    async fn test_load_rules_parses_descriptions() {
        let file = temp_json(
            r#"[{ "name": "Peds", "priority": 5,
                  "condition": { "specialty": "Pediatrics", "age_range": { "max": 12 } } }]"#,
        );

        let rules = load_rules(file.path()).await.unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name, "Peds");
    }

    #[tokio::test]
    async fn test_load_rules_rejects_missing_condition() {
        let file = temp_json(r#"[{ "name": "Peds" }]"#);

        let err = load_rules(file.path()).await.unwrap_err();
        assert!(matches!(err, AppError::ConfigurationError(_)));
    }

    #[tokio::test]
    async fn test_load_rules_missing_file() {
        let err = load_rules(Path::new("/nonexistent/rules.json"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ConfigurationError(_)));
    }
}
