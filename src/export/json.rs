//! JSON import/export for review states and scheduler configuration.
//! Lets the command-line tool read a stored state and hand back the next one.

use crate::config::SchedulerConfig;
use crate::error::ConfigError;
use crate::models::ReviewState;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Exports a review state to a JSON file at the specified path.
pub fn export_state_to_path(
    state: &ReviewState,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_string = serde_json::to_string_pretty(state)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Imports a review state from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_state(path: impl AsRef<Path>) -> Result<ReviewState, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let state: ReviewState = serde_json::from_str(&contents)?;

    info!(id = state.id(), path = %path.display(), "imported review state");
    Ok(state)
}

/// Loads and validates a scheduler configuration file.
/// Fields missing from the file keep their defaults.
pub fn import_config(path: impl AsRef<Path>) -> Result<SchedulerConfig, ConfigError> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let config: SchedulerConfig = serde_json::from_str(&contents)?;
    config.validate()?;

    info!(path = %path.display(), policy = ?config.quality_policy, "loaded scheduler config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QualityPolicy;
    use chrono::{TimeZone, Utc};
    use std::fs;

    fn create_test_state() -> ReviewState {
        let completed = Utc.with_ymd_and_hms(2024, 1, 20, 8, 0, 0).unwrap();
        let due = Utc.with_ymd_and_hms(2024, 2, 4, 8, 0, 0).unwrap();
        ReviewState::new(due, 2.25, 15, 3, 4, 12, completed)
    }

    #[test]
    fn test_export_state_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let result = export_state_to_path(&create_test_state(), &path);
        assert!(result.is_ok());
        assert!(fs::metadata(&path).is_ok(), "File should exist");
    }

    #[test]
    fn test_import_state() {
        let json_content = r#"{
  "id": 5,
  "easiness_factor": 2.5,
  "interval_days": 6,
  "repetitions": 2,
  "quality": 5,
  "completed_at": "2024-06-01T12:00:00Z",
  "due_date": "2024-06-07T12:00:00Z"
}"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.json");
        fs::write(&path, json_content).unwrap();

        let state = import_state(&path).unwrap();
        assert_eq!(state.id(), 5);
        assert_eq!(state.interval_days(), 6);
        assert_eq!(state.repetitions(), 2);
        assert_eq!(
            state.due_date(),
            Utc.with_ymd_and_hms(2024, 6, 7, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_exported_state_reads_back() {
        let original = create_test_state();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        export_state_to_path(&original, &path).unwrap();
        let imported = import_state(&path).unwrap();

        assert_eq!(original, imported);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = import_state(dir.path().join("missing.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        assert!(import_state(&path).is_err());
    }

    #[test]
    fn test_import_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "quality_policy": "clamp", "max_easiness_factor": 2.8 }"#).unwrap();

        let config = import_config(&path).unwrap();
        assert_eq!(config.quality_policy, QualityPolicy::Clamp);
        assert_eq!(config.max_easiness_factor, 2.8);
        assert_eq!(config.first_interval_days, 1);
    }

    #[test]
    fn test_import_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "failure_interval_days": 0 }"#).unwrap();

        assert!(matches!(import_config(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_import_config_rejects_zero_easiness_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "min_easiness_factor": 0.0, "max_easiness_factor": 0.0 }"#,
        )
        .unwrap();

        assert!(matches!(import_config(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_import_config_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(import_config(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_import_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = import_config(dir.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
