//! Input handling: event types, click/drag detection, and the input
//! processor that converts raw window events into coordinator commands.

/// Platform-agnostic input events.
pub mod event;
/// Press/drag tracking for click detection.
pub(crate) mod mouse;
/// Converts raw events into coordinator commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyAction};
