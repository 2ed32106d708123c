//! Damped parameter animation.
//!
//! [`damp()`] is the stateless law; [`DampedParam`] wraps a value, its target
//! and time constant for fields that are advanced every frame.

pub mod damp;
mod param;

pub use damp::{damp, damp_factor, Damp, MIN_SMOOTH_TIME};
pub use param::DampedParam;
