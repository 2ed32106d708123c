use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::state::{CoordinatorState, LocketId};

/// One decorative object's two fixed candidate placements.
///
/// Both positions are set at creation and never change; only the blend
/// between them (driven by the formation mode) moves over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualPose {
    /// Stable identifier.
    pub id: LocketId,
    /// Position in the scattered arrangement.
    pub scatter_position: Vec3,
    /// Position in the assembled tree.
    pub tree_position: Vec3,
    /// XYZ Euler rotation in radians.
    pub rotation: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

impl DualPose {
    /// Position for a formation blend in [0, 1] (0 = scattered, 1 = tree).
    /// Out-of-range blends are clamped.
    #[must_use]
    pub fn position_at(&self, blend: f32) -> Vec3 {
        let t = blend.clamp(0.0, 1.0);
        // Weighted sum so both endpoints are reproduced exactly.
        self.scatter_position * (1.0 - t) + self.tree_position * t
    }

    /// Orientation as a quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// A pose paired with whether it is the focused locket.
///
/// `active` is derived from the coordinator state on every read and never
/// stored, so at most one record can be active for a given state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocketRecord<'a> {
    /// The underlying immutable pose.
    pub pose: &'a DualPose,
    /// Whether this locket holds focus.
    pub active: bool,
}

impl<'a> LocketRecord<'a> {
    /// Derive the record for `pose` under `state`.
    #[must_use]
    pub fn derive(pose: &'a DualPose, state: &CoordinatorState) -> Self {
        Self {
            pose,
            active: state.is_focused_on(&pose.id),
        }
    }
}
