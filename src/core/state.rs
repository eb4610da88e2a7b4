//! Core domain: top-level application states.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Configuration is loaded and validated here.
    #[default]
    Boot,
    Run,
}
