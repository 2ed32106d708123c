//! Converts raw platform events into coordinator commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection) and the key-binding map. It is the only thing that sits
//! between raw window events and [`Coordinator::execute`].
//!
//! [`Coordinator::execute`]: crate::engine::Coordinator::execute

use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, InputState};
use crate::engine::Command;
use crate::options::KeybindingOptions;
use crate::state::LocketId;

/// Discrete actions that can be bound to a key.
///
/// Only parameterless commands make sense as key bindings; focusing a
/// specific locket comes from clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Flip between scattered and tree formation.
    ToggleFormation,
    /// Release the focused locket.
    ClearFocus,
}

impl KeyAction {
    /// Convert to the corresponding [`Command`].
    #[must_use]
    pub fn to_command(self) -> Command {
        match self {
            Self::ToggleFormation => Command::ToggleFormation,
            Self::ClearFocus => Command::ClearFocus,
        }
    }
}

/// Converts raw window events into [`Command`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input.handle_event(event, picked.as_ref()) {
///     coordinator.queue(cmd);
/// }
///
/// if let Some(cmd) = input.handle_key_press("Space") {
///     coordinator.queue(cmd);
/// }
/// ```
#[derive(Debug)]
pub struct InputProcessor {
    /// Cursor tracking and click/drag state.
    state: InputState,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            key_bindings: KeybindingOptions::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.state.mouse_pos
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings (e.g. after loading a preset).
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<Command> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// `hovered` is the locket currently under the cursor, as reported by
    /// the renderer's picking.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hovered: Option<&LocketId>,
    ) -> Option<Command> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.state.handle_mouse_position(x, y);
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, hovered)
            }
        }
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        hovered: Option<&LocketId>,
    ) -> Option<Command> {
        if button != MouseButton::Left {
            return None;
        }
        if pressed {
            self.state.handle_mouse_down(hovered);
            return None;
        }
        match self.state.process_mouse_up(hovered) {
            ClickResult::NoAction => None,
            ClickResult::Locket(id) => Some(Command::FocusLocket { id }),
            ClickResult::Background => Some(Command::ClearFocus),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(p: &mut InputProcessor, hovered: Option<&LocketId>) {
        let cmd = p.handle_event(
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
            hovered,
        );
        assert_eq!(cmd, None);
    }

    fn release(
        p: &mut InputProcessor,
        hovered: Option<&LocketId>,
    ) -> Option<Command> {
        p.handle_event(
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            },
            hovered,
        )
    }

    #[test]
    fn clicking_locket_focuses_it() {
        let id = LocketId::from("locket-3");
        let mut p = InputProcessor::new();
        press(&mut p, Some(&id));
        assert_eq!(
            release(&mut p, Some(&id)),
            Some(Command::FocusLocket { id })
        );
    }

    #[test]
    fn clicking_empty_space_clears_focus() {
        let mut p = InputProcessor::new();
        press(&mut p, None);
        assert_eq!(release(&mut p, None), Some(Command::ClearFocus));
    }

    #[test]
    fn orbit_drag_produces_nothing() {
        let mut p = InputProcessor::new();
        let _ =
            p.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 }, None);
        press(&mut p, None);
        let _ =
            p.handle_event(InputEvent::CursorMoved { x: 80.0, y: 30.0 }, None);
        assert!(p.mouse_pressed());
        assert_eq!(release(&mut p, None), None);
        assert!(!p.mouse_pressed());
    }

    #[test]
    fn right_button_is_ignored() {
        let mut p = InputProcessor::new();
        let cmd = p.handle_event(
            InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: false,
            },
            None,
        );
        assert_eq!(cmd, None);
    }

    #[test]
    fn default_key_bindings() {
        let p = InputProcessor::new();
        assert_eq!(p.handle_key_press("Space"), Some(Command::ToggleFormation));
        assert_eq!(p.handle_key_press("Escape"), Some(Command::ClearFocus));
        assert_eq!(p.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn rebinding_changes_lookup() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::ToggleFormation, "Enter");
        let p = InputProcessor::with_key_bindings(bindings);
        assert_eq!(p.handle_key_press("Enter"), Some(Command::ToggleFormation));
        assert_eq!(p.handle_key_press("Space"), None);
    }
}
