use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit camera placement and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Initial camera position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Whether panning is ever allowed.
    #[schemars(title = "Allow Pan")]
    pub enable_pan: bool,
    /// Turntable speed while auto-rotation is allowed.
    #[schemars(title = "Auto-Rotate Speed", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,
    /// Lowest polar angle in radians (0 = straight down from above).
    #[schemars(skip)]
    pub min_polar_angle: f32,
    /// Highest polar angle in radians.
    #[schemars(skip)]
    pub max_polar_angle: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 35.0,
            position: [0.0, 0.0, 35.0],
            enable_pan: false,
            auto_rotate_speed: 0.5,
            min_polar_angle: PI / 4.0,
            max_polar_angle: PI / 1.5,
        }
    }
}
