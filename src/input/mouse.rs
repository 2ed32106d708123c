use crate::state::LocketId;

/// Squared cursor travel (pixels²) after which a press becomes a drag.
const DRAG_THRESHOLD_SQ: f32 = 9.0;

/// Result of releasing the primary button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClickResult {
    /// Drag (camera orbit) or press/release on different targets.
    NoAction,
    /// Clicked a locket.
    Locket(LocketId),
    /// Clicked empty space.
    Background,
}

/// Tracks cursor position and press/drag state for click detection.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    pub(crate) mouse_pos: (f32, f32),
    /// Position at press time, `None` while released.
    press_pos: Option<(f32, f32)>,
    /// Locket under the cursor at press time.
    press_target: Option<LocketId>,
    is_dragging: bool,
}

impl InputState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Update cursor position, marking a drag once the press has travelled
    /// far enough.
    pub(crate) fn handle_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_pos = (x, y);
        if let Some((px, py)) = self.press_pos {
            let (dx, dy) = (x - px, y - py);
            if dx * dx + dy * dy > DRAG_THRESHOLD_SQ {
                self.is_dragging = true;
            }
        }
    }

    /// Record what is under the cursor at press time.
    pub(crate) fn handle_mouse_down(&mut self, hovered: Option<&LocketId>) {
        self.press_pos = Some(self.mouse_pos);
        self.press_target = hovered.cloned();
        self.is_dragging = false;
    }

    pub(crate) fn is_pressed(&self) -> bool {
        self.press_pos.is_some()
    }

    /// Classify a release. Resets press state.
    pub(crate) fn process_mouse_up(
        &mut self,
        hovered: Option<&LocketId>,
    ) -> ClickResult {
        let was_pressed = self.press_pos.take().is_some();
        let press_target = self.press_target.take();
        let was_dragging = std::mem::take(&mut self.is_dragging);

        if !was_pressed || was_dragging {
            return ClickResult::NoAction;
        }
        match (press_target, hovered) {
            (Some(down), Some(up)) if down == *up => ClickResult::Locket(down),
            (None, None) => ClickResult::Background,
            _ => ClickResult::NoAction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_without_motion_hits_locket() {
        let id = LocketId::from("locket-1");
        let mut state = InputState::new();
        state.handle_mouse_down(Some(&id));
        assert_eq!(state.process_mouse_up(Some(&id)), ClickResult::Locket(id));
    }

    #[test]
    fn small_jitter_is_still_a_click() {
        let mut state = InputState::new();
        state.handle_mouse_position(100.0, 100.0);
        state.handle_mouse_down(None);
        state.handle_mouse_position(101.0, 101.5);
        assert_eq!(state.process_mouse_up(None), ClickResult::Background);
    }

    #[test]
    fn drag_suppresses_click() {
        let mut state = InputState::new();
        state.handle_mouse_position(100.0, 100.0);
        state.handle_mouse_down(None);
        state.handle_mouse_position(140.0, 100.0);
        assert_eq!(state.process_mouse_up(None), ClickResult::NoAction);
        assert!(!state.is_pressed());
    }

    #[test]
    fn release_over_different_target_does_nothing() {
        let mut state = InputState::new();
        state.handle_mouse_down(Some(&"locket-1".into()));
        assert_eq!(state.process_mouse_up(None), ClickResult::NoAction);
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut state = InputState::new();
        assert_eq!(state.process_mouse_up(None), ClickResult::NoAction);
    }
}
