use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArixError;

/// Time constants for the damped parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Smooth time (seconds) for light and environment intensities.
    #[schemars(title = "Light Smoothing", range(min = 0.05, max = 3.0), extend("step" = 0.05))]
    pub light_smooth_time: f32,
    /// Smooth time (seconds) for the scattered/tree formation blend.
    #[schemars(title = "Formation Smoothing", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub formation_smooth_time: f32,
    /// Distance below which a damped value snaps onto its target.
    #[schemars(skip)]
    pub settle_epsilon: f32,
    /// Longest elapsed time (seconds) fed to the animator in one frame, so a
    /// stalled frame does not finish a transition in a single jump.
    #[schemars(skip)]
    pub max_frame_time: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            light_smooth_time: 0.5,
            formation_smooth_time: 1.2,
            settle_epsilon: 1e-3,
            max_frame_time: 0.1,
        }
    }
}

impl AnimationOptions {
    /// Reject values the damped parameters cannot run with.
    ///
    /// # Errors
    ///
    /// [`ArixError::OptionsParse`] if a smooth time or `max_frame_time` is
    /// not finite and positive, or `settle_epsilon` is not finite and
    /// non-negative.
    pub fn validate(&self) -> Result<(), ArixError> {
        let positive = [
            ("light_smooth_time", self.light_smooth_time),
            ("formation_smooth_time", self.formation_smooth_time),
            ("max_frame_time", self.max_frame_time),
        ];
        for (name, value) in positive {
            let ok = value.is_finite() && value > 0.0;
            if !ok {
                return Err(invalid(name, value, "positive"));
            }
        }
        let eps = self.settle_epsilon;
        let ok = eps.is_finite() && eps >= 0.0;
        if !ok {
            return Err(invalid("settle_epsilon", eps, "non-negative"));
        }
        Ok(())
    }
}

fn invalid(name: &str, value: f32, expected: &str) -> ArixError {
    ArixError::OptionsParse(format!(
        "animation.{name} must be finite and {expected}, got {value}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AnimationOptions::default().validate().is_ok());
    }

    #[test]
    fn zero_epsilon_is_allowed() {
        let opts = AnimationOptions {
            settle_epsilon: 0.0,
            ..Default::default()
        };
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn non_positive_times_are_rejected() {
        for bad in [0.0, -0.1, f32::NAN, f32::INFINITY] {
            let cases = [
                AnimationOptions {
                    light_smooth_time: bad,
                    ..Default::default()
                },
                AnimationOptions {
                    formation_smooth_time: bad,
                    ..Default::default()
                },
                AnimationOptions {
                    max_frame_time: bad,
                    ..Default::default()
                },
            ];
            for opts in cases {
                let err = opts.validate().unwrap_err();
                assert!(matches!(err, ArixError::OptionsParse(_)), "{bad}");
            }
        }
    }

    #[test]
    fn negative_epsilon_is_rejected() {
        for bad in [-1e-3, f32::NAN] {
            let opts = AnimationOptions {
                settle_epsilon: bad,
                ..Default::default()
            };
            let err = opts.validate().unwrap_err();
            assert!(err.to_string().contains("settle_epsilon"));
        }
    }
}
