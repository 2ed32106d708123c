use super::damp::Damp;

/// A value that owns its current state and chases a target over time.
///
/// The caller retargets it whenever the desired value changes and calls
/// [`advance`](Self::advance) once per frame with the elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampedParam<T: Damp> {
    value: T,
    target: T,
    smooth_time: f32,
}

impl<T: Damp> DampedParam<T> {
    /// Create a parameter resting at `value`.
    pub fn new(value: T, smooth_time: f32) -> Self {
        Self {
            value,
            target: value,
            smooth_time,
        }
    }

    /// Current (rendered) value.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// Value being approached.
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Time constant in seconds.
    #[must_use]
    pub fn smooth_time(&self) -> f32 {
        self.smooth_time
    }

    /// Change the time constant without disturbing the current value.
    pub fn set_smooth_time(&mut self, smooth_time: f32) {
        self.smooth_time = smooth_time;
    }

    /// Point the parameter at a new target. The value itself does not jump.
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Jump straight to the target.
    pub fn snap(&mut self) {
        self.value = self.target;
    }

    /// Whether the value has reached its target exactly.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.value.distance_to(self.target) == 0.0
    }

    /// Advance by `elapsed` seconds. Once within `epsilon` of the target the
    /// value snaps onto it.
    ///
    /// Returns `true` while the value is still moving.
    ///
    /// # Panics
    ///
    /// Panics if `elapsed` is negative or NaN.
    pub fn advance(&mut self, elapsed: f32, epsilon: f32) -> bool {
        assert!(
            elapsed >= 0.0,
            "advance: elapsed time must be non-negative, got {elapsed}"
        );
        if self.is_settled() {
            return false;
        }
        if elapsed == 0.0 {
            return true;
        }
        let next =
            self.value.damp_toward(self.target, self.smooth_time, elapsed);
        if next.distance_to(self.target) <= epsilon {
            self.value = self.target;
            return false;
        }
        self.value = next;
        true
    }
}
