//! Simulator rig configuration.
//!
//! Describes the display and the devices attached to the simulated unit.
//! Stored as JSON; every field is optional and falls back to the studio rig.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::menu::DisplayMode;
use crate::source::mock::{MockDevice, MockRegistry};

/// Error types that can occur while loading configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// I/O error while reading the file.
    Io(String),
    /// Malformed JSON or unknown values.
    Parse(String),
    /// Well-formed but unusable settings.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Display and device line-up of a simulated unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Display the menu is drawn on.
    pub display: DisplayMode,
    /// Whether a computer is attached to the upstream USB port.
    pub upstream_usb: bool,
    /// Devices attached to the USB host port, in registration order.
    pub devices: Vec<MockDevice>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let rig = MockRegistry::studio_rig();
        Self {
            display: DisplayMode::default(),
            upstream_usb: rig.upstream_connected(),
            devices: rig.hosted().to_vec(),
        }
    }
}

impl MenuConfig {
    /// Loads and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    /// Parses and validates a config document.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: MenuConfig =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let DisplayMode::Windowed { visible_rows: 0 } = self.display {
            return Err(ConfigError::Invalid(
                "visible_rows must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for device in &self.devices {
            if !seen.insert(device.uid) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate device uid {}",
                    device.uid
                )));
            }
        }
        Ok(())
    }

    /// Builds the registry described by this config.
    pub fn build_registry(&self) -> MockRegistry {
        MockRegistry::from_devices(self.upstream_usb, self.devices.clone())
    }
}
