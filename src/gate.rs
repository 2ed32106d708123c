//! Interaction gate: which global interactions the current state allows.
//!
//! Focusing a locket is an exclusive mode. While focused the camera stops
//! zooming and auto-rotating and the formation toggle is disabled; all of
//! it comes back once focus is cleared.

use crate::options::CameraOptions;
use crate::state::{CoordinatorState, FormationMode};

/// Label shown on the toggle while scattered.
pub const ASSEMBLE_LABEL: &str = "Assemble Tree";
/// Label shown on the toggle while assembled.
pub const DISPERSE_LABEL: &str = "Disperse Elements";
/// Toggle opacity while disabled.
const DISABLED_OPACITY: f32 = 0.3;

/// Flags derived from the coordinator state, read once per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct InteractionFlags {
    /// Orbit camera may zoom.
    pub camera_zoom_allowed: bool,
    /// Orbit camera may turntable.
    pub camera_auto_rotate_allowed: bool,
    /// The formation toggle accepts presses.
    pub formation_toggle_enabled: bool,
    /// Mode the toggle displays, independent of enablement.
    pub formation_toggle_visual: FormationMode,
    /// The focus caption overlay is shown.
    pub focus_caption_visible: bool,
}

impl InteractionFlags {
    /// Evaluate the gate for `state`.
    #[must_use]
    pub fn from_state(state: &CoordinatorState) -> Self {
        let free = !state.is_focused();
        Self {
            camera_zoom_allowed: free,
            camera_auto_rotate_allowed: free,
            formation_toggle_enabled: free,
            formation_toggle_visual: state.formation,
            focus_caption_visible: !free,
        }
    }
}

/// What the formation toggle button should look like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleButtonView {
    /// Whether presses are accepted.
    pub enabled: bool,
    /// Background fill is shown (tree assembled).
    pub filled: bool,
    /// Button caption.
    pub label: &'static str,
    /// Overall opacity.
    pub opacity: f32,
}

impl ToggleButtonView {
    /// Derive the button view from the gate flags.
    #[must_use]
    pub fn from_flags(flags: &InteractionFlags) -> Self {
        let assembled = flags.formation_toggle_visual.is_assembled();
        Self {
            enabled: flags.formation_toggle_enabled,
            filled: assembled,
            label: if assembled {
                DISPERSE_LABEL
            } else {
                ASSEMBLE_LABEL
            },
            opacity: if flags.formation_toggle_enabled {
                1.0
            } else {
                DISABLED_OPACITY
            },
        }
    }
}

/// Orbit-control configuration for the camera collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    /// Panning allowed.
    pub enable_pan: bool,
    /// Zooming allowed.
    pub enable_zoom: bool,
    /// Turntable rotation enabled.
    pub auto_rotate: bool,
    /// Turntable speed.
    pub auto_rotate_speed: f32,
    /// Lowest polar angle in radians.
    pub min_polar_angle: f32,
    /// Highest polar angle in radians.
    pub max_polar_angle: f32,
}

impl OrbitSettings {
    /// Combine the gate flags with the configured camera limits.
    #[must_use]
    pub fn resolve(flags: &InteractionFlags, camera: &CameraOptions) -> Self {
        Self {
            enable_pan: camera.enable_pan,
            enable_zoom: flags.camera_zoom_allowed,
            auto_rotate: flags.camera_auto_rotate_allowed,
            auto_rotate_speed: camera.auto_rotate_speed,
            min_polar_angle: camera.min_polar_angle,
            max_polar_angle: camera.max_polar_angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused(formation: FormationMode) -> CoordinatorState {
        CoordinatorState {
            formation,
            focus: Some("locket-1".into()),
        }
    }

    #[test]
    fn unfocused_allows_everything() {
        let flags = InteractionFlags::from_state(&CoordinatorState::default());
        assert!(flags.camera_zoom_allowed);
        assert!(flags.camera_auto_rotate_allowed);
        assert!(flags.formation_toggle_enabled);
        assert!(!flags.focus_caption_visible);
        assert_eq!(flags.formation_toggle_visual, FormationMode::Scattered);
    }

    #[test]
    fn focus_suspends_global_interaction() {
        let flags =
            InteractionFlags::from_state(&focused(FormationMode::Assembled));
        assert!(!flags.camera_zoom_allowed);
        assert!(!flags.camera_auto_rotate_allowed);
        assert!(!flags.formation_toggle_enabled);
        assert!(flags.focus_caption_visible);
        // Visual state still tracks the formation.
        assert_eq!(flags.formation_toggle_visual, FormationMode::Assembled);
    }

    #[test]
    fn toggle_view_labels_and_fill() {
        let scattered =
            ToggleButtonView::from_flags(&InteractionFlags::from_state(
                &CoordinatorState::default(),
            ));
        assert_eq!(scattered.label, ASSEMBLE_LABEL);
        assert!(!scattered.filled);
        assert_eq!(scattered.opacity, 1.0);

        let assembled =
            ToggleButtonView::from_flags(&InteractionFlags::from_state(
                &focused(FormationMode::Assembled),
            ));
        assert_eq!(assembled.label, DISPERSE_LABEL);
        assert!(assembled.filled);
        assert!(!assembled.enabled);
        assert_eq!(assembled.opacity, DISABLED_OPACITY);
    }

    #[test]
    fn orbit_settings_follow_flags() {
        let camera = CameraOptions::default();
        let free = OrbitSettings::resolve(
            &InteractionFlags::from_state(&CoordinatorState::default()),
            &camera,
        );
        assert!(free.enable_zoom && free.auto_rotate);
        assert!(!free.enable_pan);
        assert_eq!(free.auto_rotate_speed, 0.5);

        let locked = OrbitSettings::resolve(
            &InteractionFlags::from_state(&focused(FormationMode::Scattered)),
            &camera,
        );
        assert!(!locked.enable_zoom && !locked.auto_rotate);
        assert_eq!(locked.min_polar_angle, camera.min_polar_angle);
    }
}
