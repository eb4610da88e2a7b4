//! Validation for the loaded controller configuration.

use super::data::{CONTROLLER_SCHEMA_VERSION, ControllerConfig};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.section, self.message)
    }
}

/// Validate every section of the configuration.
/// Returns a list of validation errors, empty if the configuration is usable.
pub fn validate_config(config: &ControllerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.schema_version != CONTROLLER_SCHEMA_VERSION {
        errors.push(ValidationError {
            section: "root",
            message: format!(
                "unsupported schema_version {} (expected {})",
                config.schema_version, CONTROLLER_SCHEMA_VERSION
            ),
        });
    }

    for problem in config.movement.validate() {
        errors.push(ValidationError {
            section: "movement",
            message: problem.to_string(),
        });
    }

    for problem in config.feedback.validate() {
        errors.push(ValidationError {
            section: "feedback",
            message: problem.to_string(),
        });
    }

    errors
}
