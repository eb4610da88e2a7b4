//! Debug domain: toggles for dev-tools overlays.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the motion readout is visible
    pub show_info: bool,
    /// Whether to draw the ground probe
    pub show_probe: bool,
    /// Message to display temporarily, with seconds remaining
    pub status_message: Option<(String, f32)>,
    /// Most recent jump, landing or finished clip
    pub last_transition: Option<String>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}
