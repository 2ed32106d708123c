//! Per-frame targets derived from the coordinator state.
//!
//! Focusing a locket dims the whole scene a little (spot, ambient, rim and
//! environment all drop) so the focused object reads with more contrast.
//! The values are targets only; the damped rig eases toward them.

use crate::options::Options;
use crate::state::{CoordinatorState, FormationMode};

/// Target values for every damped scene parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTargets {
    /// Key spotlight intensity.
    pub spot_intensity: f32,
    /// Ambient light intensity.
    pub ambient_intensity: f32,
    /// Rim/fill light intensity.
    pub rim_intensity: f32,
    /// Environment map multiplier.
    pub environment_intensity: f32,
    /// 0 = scattered, 1 = assembled tree.
    pub formation_blend: f32,
}

/// Blend value a formation mode settles at.
#[must_use]
pub fn formation_blend_target(mode: FormationMode) -> f32 {
    match mode {
        FormationMode::Scattered => 0.0,
        FormationMode::Assembled => 1.0,
    }
}

/// Map the current state to target values. Pure; cheap enough to call every
/// frame.
#[must_use]
pub fn resolve_targets(
    state: &CoordinatorState,
    options: &Options,
) -> SceneTargets {
    let lo = &options.lighting;
    let focused = state.is_focused();
    let pick = |unfocused: f32, when_focused: f32| {
        if focused {
            when_focused
        } else {
            unfocused
        }
    };

    SceneTargets {
        spot_intensity: pick(lo.spot_intensity, lo.spot_focused_intensity),
        ambient_intensity: pick(
            lo.ambient_intensity,
            lo.ambient_focused_intensity,
        ),
        rim_intensity: pick(lo.rim_intensity, lo.rim_focused_intensity),
        environment_intensity: pick(
            lo.environment_intensity,
            lo.environment_focused_intensity,
        ),
        formation_blend: formation_blend_target(state.formation),
    }
}
