//! Shared utilities.

/// Wall-clock frame clock producing per-frame elapsed seconds.
pub mod frame_timing;

pub use frame_timing::FrameClock;
