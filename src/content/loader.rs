//! Loader for the RON controller configuration at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::ControllerConfig;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse controller configuration from RON text.
pub fn parse_controller_config(
    contents: &str,
    file_name: &str,
) -> Result<ControllerConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load controller configuration from disk.
/// Returns `Ok(None)` when the file does not exist so callers can fall back
/// to defaults; read and parse failures are errors.
pub fn load_controller_config(path: &Path) -> Result<Option<ControllerConfig>, ContentLoadError> {
    if !path.exists() {
        return Ok(None);
    }

    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_controller_config(&contents, &file_name).map(Some)
}
