use super::lighting::LightLevels;
use crate::gate::{InteractionFlags, OrbitSettings, ToggleButtonView};
use crate::state::CoordinatorState;
use crate::targets::SceneTargets;

/// Everything the rendering collaborators need for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// State snapshot the frame was resolved against.
    pub state: CoordinatorState,
    /// Store revision of that snapshot.
    pub revision: u64,
    /// Targets the damped parameters are heading to.
    pub targets: SceneTargets,
    /// Current light intensities after this frame's damping step.
    pub lights: LightLevels,
    /// Current formation blend (0 = scattered, 1 = tree).
    pub formation_blend: f32,
    /// Interaction gate flags.
    pub flags: InteractionFlags,
    /// Formation toggle appearance.
    pub toggle_button: ToggleButtonView,
    /// Orbit-control configuration.
    pub orbit: OrbitSettings,
    /// Whether any damped parameter is still in motion.
    pub animating: bool,
}
