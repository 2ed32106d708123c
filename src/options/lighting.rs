use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Light levels for the unfocused and focused scene, plus the fixed light
/// placement handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// Key spotlight intensity with nothing focused.
    #[schemars(title = "Spotlight", range(min = 0.0, max = 400.0), extend("step" = 5.0))]
    pub spot_intensity: f32,
    /// Key spotlight intensity while a locket is focused.
    #[schemars(title = "Spotlight (Focused)", range(min = 0.0, max = 400.0), extend("step" = 5.0))]
    pub spot_focused_intensity: f32,
    /// Ambient intensity with nothing focused.
    #[schemars(title = "Ambient", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub ambient_intensity: f32,
    /// Ambient intensity while a locket is focused.
    #[schemars(title = "Ambient (Focused)", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub ambient_focused_intensity: f32,
    /// Rim/fill point light intensity with nothing focused.
    #[schemars(title = "Rim Light", range(min = 0.0, max = 150.0), extend("step" = 1.0))]
    pub rim_intensity: f32,
    /// Rim/fill point light intensity while a locket is focused.
    #[schemars(title = "Rim Light (Focused)", range(min = 0.0, max = 150.0), extend("step" = 1.0))]
    pub rim_focused_intensity: f32,
    /// Environment map multiplier with nothing focused.
    #[schemars(title = "Environment", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub environment_intensity: f32,
    /// Environment map multiplier while a locket is focused.
    #[schemars(title = "Environment (Focused)", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub environment_focused_intensity: f32,
    /// Spotlight color (linear RGB).
    #[schemars(skip)]
    pub spot_color: [f32; 3],
    /// Spotlight world position.
    #[schemars(skip)]
    pub spot_position: [f32; 3],
    /// Spotlight cone half-angle in radians.
    #[schemars(skip)]
    pub spot_angle: f32,
    /// Spotlight edge softness in [0, 1].
    #[schemars(skip)]
    pub spot_penumbra: f32,
    /// Ambient color (linear RGB).
    #[schemars(skip)]
    pub ambient_color: [f32; 3],
    /// Rim light color (linear RGB).
    #[schemars(skip)]
    pub rim_color: [f32; 3],
    /// Rim light world position.
    #[schemars(skip)]
    pub rim_position: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            spot_intensity: 200.0,
            spot_focused_intensity: 140.0,
            ambient_intensity: 0.5,
            ambient_focused_intensity: 0.3,
            rim_intensity: 50.0,
            rim_focused_intensity: 30.0,
            environment_intensity: 1.0,
            environment_focused_intensity: 0.7,
            // #ffd700
            spot_color: [1.0, 0.843, 0.0],
            spot_position: [10.0, 20.0, 10.0],
            spot_angle: 0.2,
            spot_penumbra: 1.0,
            // #042e1f
            ambient_color: [0.016, 0.18, 0.122],
            // #00ffcc
            rim_color: [0.0, 1.0, 0.8],
            rim_position: [-10.0, 0.0, -10.0],
        }
    }
}
