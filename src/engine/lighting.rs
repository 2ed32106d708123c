use crate::animation::DampedParam;
use crate::targets::SceneTargets;

/// Current (damped) intensities handed to the renderer's lights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightLevels {
    /// Key spotlight intensity.
    pub spot: f32,
    /// Ambient light intensity.
    pub ambient: f32,
    /// Rim/fill light intensity.
    pub rim: f32,
    /// Environment map multiplier.
    pub environment: f32,
}

/// The damped light parameters owned by the coordinator.
#[derive(Debug, Clone)]
pub(crate) struct LightingRig {
    spot: DampedParam<f32>,
    ambient: DampedParam<f32>,
    rim: DampedParam<f32>,
    environment: DampedParam<f32>,
}

impl LightingRig {
    /// Rig resting at `targets`.
    pub(crate) fn new(targets: &SceneTargets, smooth_time: f32) -> Self {
        Self {
            spot: DampedParam::new(targets.spot_intensity, smooth_time),
            ambient: DampedParam::new(targets.ambient_intensity, smooth_time),
            rim: DampedParam::new(targets.rim_intensity, smooth_time),
            environment: DampedParam::new(
                targets.environment_intensity,
                smooth_time,
            ),
        }
    }

    fn params_mut(&mut self) -> [&mut DampedParam<f32>; 4] {
        [
            &mut self.spot,
            &mut self.ambient,
            &mut self.rim,
            &mut self.environment,
        ]
    }

    pub(crate) fn set_smooth_time(&mut self, smooth_time: f32) {
        for p in self.params_mut() {
            p.set_smooth_time(smooth_time);
        }
    }

    pub(crate) fn retarget(&mut self, targets: &SceneTargets) {
        self.spot.set_target(targets.spot_intensity);
        self.ambient.set_target(targets.ambient_intensity);
        self.rim.set_target(targets.rim_intensity);
        self.environment.set_target(targets.environment_intensity);
    }

    /// Advance every light. Returns `true` while any is still moving.
    pub(crate) fn advance(&mut self, elapsed: f32, epsilon: f32) -> bool {
        let mut moving = false;
        for p in self.params_mut() {
            moving |= p.advance(elapsed, epsilon);
        }
        moving
    }

    pub(crate) fn levels(&self) -> LightLevels {
        LightLevels {
            spot: self.spot.value(),
            ambient: self.ambient.value(),
            rim: self.rim.value(),
            environment: self.environment.value(),
        }
    }
}
