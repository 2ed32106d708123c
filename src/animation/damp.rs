//! Frame-rate independent exponential damping.
//!
//! Every frame a damped value closes a fixed fraction of its remaining
//! distance to the target:
//!
//! ```text
//! next = current + (target - current) * (1 - exp(-2 * elapsed / smooth_time))
//! ```
//!
//! Because `exp(-a) * exp(-b) == exp(-(a + b))`, one 32 ms step lands where
//! two 16 ms steps do. The decay rate `2 / smooth_time` is the same omega a
//! critically damped spring with that smooth time uses, so after
//! `smooth_time` seconds roughly 86% of the distance is covered.

use glam::{Vec2, Vec3, Vec4};

/// Lower bound applied to `smooth_time` to keep the decay rate finite.
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Fraction of the remaining distance covered during `elapsed` seconds.
///
/// # Panics
///
/// Panics if `elapsed` is negative or NaN; a backwards clock is a caller bug
/// and must not silently reverse an animation.
#[inline]
#[must_use]
pub fn damp_factor(smooth_time: f32, elapsed: f32) -> f32 {
    assert!(
        elapsed >= 0.0,
        "damp: elapsed time must be non-negative, got {elapsed}"
    );
    if elapsed == 0.0 {
        return 0.0;
    }
    let omega = 2.0 / smooth_time.max(MIN_SMOOTH_TIME);
    1.0 - (-omega * elapsed).exp()
}

/// Advance `current` toward `target` by `elapsed` seconds.
///
/// `smooth_time` is the time constant in seconds (smaller is snappier).
/// Zero elapsed time returns `current` unchanged and a value already at its
/// target stays there. The result never passes `target`.
///
/// # Panics
///
/// Panics if `elapsed` is negative or NaN.
#[inline]
#[must_use]
pub fn damp(current: f32, target: f32, smooth_time: f32, elapsed: f32) -> f32 {
    current.damp_toward(target, smooth_time, elapsed)
}

/// A value that can be damped toward a target of the same type.
///
/// Vector implementations damp each component independently with the
/// scalar law.
pub trait Damp: Copy {
    /// Advance `self` toward `target`; see [`damp`].
    #[must_use]
    fn damp_toward(self, target: Self, smooth_time: f32, elapsed: f32) -> Self;

    /// Largest per-component distance to `other`, used for settling.
    fn distance_to(self, other: Self) -> f32;
}

impl Damp for f32 {
    #[inline]
    fn damp_toward(self, target: f32, smooth_time: f32, elapsed: f32) -> f32 {
        let t = damp_factor(smooth_time, elapsed);
        if t == 0.0 || self == target {
            return self;
        }
        let next = self + (target - self) * t;
        // Rounding must not carry the value past the target.
        next.clamp(self.min(target), self.max(target))
    }

    #[inline]
    fn distance_to(self, other: f32) -> f32 {
        (self - other).abs()
    }
}

macro_rules! impl_damp_for_vec {
    ($($ty:ty),*) => {
        $(
            impl Damp for $ty {
                #[inline]
                fn damp_toward(
                    self,
                    target: $ty,
                    smooth_time: f32,
                    elapsed: f32,
                ) -> $ty {
                    let t = damp_factor(smooth_time, elapsed);
                    if t == 0.0 || self == target {
                        return self;
                    }
                    let next = self + (target - self) * t;
                    next.clamp(self.min(target), self.max(target))
                }

                #[inline]
                fn distance_to(self, other: $ty) -> f32 {
                    (self - other).abs().max_element()
                }
            }
        )*
    };
}

impl_damp_for_vec!(Vec2, Vec3, Vec4);
