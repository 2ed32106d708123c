//! Locket poses and their focus-derived records.
//!
//! Every decorative object is a [`DualPose`]. A [`LocketSet`] owns the
//! poses for the lifetime of the scene and hands out [`LocketRecord`]s whose
//! `active` flag is recomputed from the coordinator state on each read.

pub mod layout;
mod pose;

use glam::Vec3;
pub use pose::{DualPose, LocketRecord};
use rustc_hash::FxHashMap;

use crate::error::ArixError;
use crate::state::{CoordinatorState, LocketId};

/// Immutable collection of locket poses, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct LocketSet {
    poses: Vec<DualPose>,
    /// Id → index into `poses`.
    index: FxHashMap<LocketId, usize>,
}

impl LocketSet {
    /// Build a set from poses.
    ///
    /// # Errors
    ///
    /// [`ArixError::DuplicateLocket`] if two poses share an id; one focus
    /// value must activate at most one locket.
    pub fn from_poses(poses: Vec<DualPose>) -> Result<Self, ArixError> {
        let mut index = FxHashMap::default();
        index.reserve(poses.len());
        for (i, pose) in poses.iter().enumerate() {
            if index.insert(pose.id.clone(), i).is_some() {
                return Err(ArixError::DuplicateLocket(pose.id.clone()));
            }
        }
        Ok(Self { poses, index })
    }

    /// Number of lockets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Check if a locket exists.
    #[must_use]
    pub fn contains(&self, id: &LocketId) -> bool {
        self.index.contains_key(id)
    }

    /// Read access to one pose.
    #[must_use]
    pub fn get(&self, id: &LocketId) -> Option<&DualPose> {
        self.index.get(id).map(|&i| &self.poses[i])
    }

    /// All poses in insertion order.
    #[must_use]
    pub fn poses(&self) -> &[DualPose] {
        &self.poses
    }

    /// Records for every locket with `active` derived from `state`.
    pub fn records<'a>(
        &'a self,
        state: &'a CoordinatorState,
    ) -> impl Iterator<Item = LocketRecord<'a>> + 'a {
        self.poses
            .iter()
            .map(move |pose| LocketRecord::derive(pose, state))
    }

    /// The focused locket's record, if the focus names a known locket.
    #[must_use]
    pub fn active_record<'a>(
        &'a self,
        state: &CoordinatorState,
    ) -> Option<LocketRecord<'a>> {
        let id = state.focus.as_ref()?;
        self.get(id).map(|pose| LocketRecord { pose, active: true })
    }

    /// World position of every locket at the given formation blend.
    #[must_use]
    pub fn positions_at(&self, blend: f32) -> Vec<Vec3> {
        self.poses.iter().map(|p| p.position_at(blend)).collect()
    }
}
