//! Content domain: controller configuration loaded from RON at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{CONTROLLER_SCHEMA_VERSION, ControllerConfig};
pub use loader::{ContentLoadError, load_controller_config, parse_controller_config};
pub use validation::{ValidationError, validate_config};

use bevy::prelude::*;
use std::path::Path;

pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/controller.ron";

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentSet {
    Load,
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content.in_set(ContentSet::Load));
    }
}

/// Load and validate the controller configuration, then publish its sections
/// as resources. A broken file stops startup instead of producing bad physics.
fn load_content(mut commands: Commands) -> Result {
    let path = Path::new(CONTROLLER_CONFIG_PATH);

    let config = match load_controller_config(path)? {
        Some(config) => {
            info!("Loaded controller configuration from {}", path.display());
            config
        }
        None => {
            warn!(
                "{} not found, using default controller configuration",
                path.display()
            );
            ControllerConfig::default()
        }
    };

    let errors = validate_config(&config);
    if !errors.is_empty() {
        for error in &errors {
            error!("Content validation error: {}", error);
        }
        return Err(ContentLoadError {
            file: path.display().to_string(),
            message: format!("{} validation error(s)", errors.len()),
        }
        .into());
    }

    debug!("Controller configuration: {:?}", config);
    commands.insert_resource(config.movement);
    commands.insert_resource(config.feedback);
    Ok(())
}
