//! Window configuration
//!
//! Window settings for the primary application window, part of
//! [`super::AppConfig`].

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};
use serde::{Deserialize, Serialize};

/// Configuration for the primary application window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Whether the window should be resizable
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "3D Chess Game".to_string(),
            width: 800,
            height: 600,
            resizable: true,
        }
    }
}

impl WindowConfig {
    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
