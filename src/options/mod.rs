//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (light levels, animation time constants, camera,
//! keybindings) are consolidated here. Options serialize to/from TOML for
//! presets, and describe themselves through a JSON Schema for UI panels.

mod animation;
mod camera;
mod keybindings;
mod lighting;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArixError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lighting]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Focused and unfocused light levels.
    pub lighting: LightingOptions,
    /// Damping time constants.
    pub animation: AnimationOptions,
    /// Orbit camera parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`ArixError::OptionsParse`] for malformed TOML and for animation
    /// time constants the frame loop cannot run with.
    pub fn from_toml_str(content: &str) -> Result<Self, ArixError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| ArixError::OptionsParse(e.to_string()))?;
        opts.animation.validate()?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`ArixError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ArixError> {
        let content = std::fs::read_to_string(path).map_err(ArixError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Serialize to pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// [`ArixError::OptionsParse`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ArixError> {
        toml::to_string_pretty(self)
            .map_err(|e| ArixError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`ArixError::Io`] if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ArixError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ArixError::Io)?;
        }
        std::fs::write(path, content).map_err(ArixError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
