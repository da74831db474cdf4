use jsonschema::Validator;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

const SCHEMA_JSON: &str = include_str!("../../../assets/sshconfig.schema.json");

/// A validation error with path and message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// JSON path to the error location.
    pub path: String,
    /// Human-readable error description.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Result of settings validation.
#[derive(Debug)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<ValidationError>),
}

/// Error type for parsing the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("validation failed: {}", format_validation_errors(.0))]
    ValidationFailed(Vec<ValidationError>),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Returns the embedded JSON schema as a string.
pub fn schema() -> &'static str {
    SCHEMA_JSON
}

/// Validates a JSON value against the settings schema.
///
/// # Panics
///
/// Panics if the embedded schema is invalid JSON or not a valid JSON Schema.
/// The schema is embedded at compile time and covered by tests.
pub fn validate(value: &Value) -> ValidationResult {
    let schema: Value =
        serde_json::from_str(SCHEMA_JSON).expect("embedded schema should be valid JSON");

    let validator = Validator::new(&schema).expect("embedded schema should be a valid JSON Schema");

    let errors: Vec<ValidationError> = validator
        .iter_errors(value)
        .map(|e| ValidationError {
            path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}
