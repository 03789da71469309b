use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::controllers::interactive::events::input::{InputEvent, KeyState};

/// Tracks which pan keys are held between polls and turns zoom keys into
/// discrete events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeldKeys {
    left_held: bool,
    right_held: bool,
    up_held: bool,
    down_held: bool,
    escape_held: bool,
    escape_tapped: bool,
}

impl HeldKeys {
    /// Records a key transition. Zoom keys produce an event on every press,
    /// key repeats included; everything else only updates held state.
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) -> Option<InputEvent> {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::ArrowLeft => self.left_held = pressed,
            KeyCode::ArrowRight => self.right_held = pressed,
            KeyCode::ArrowUp => self.up_held = pressed,
            KeyCode::ArrowDown => self.down_held = pressed,
            KeyCode::Escape => {
                self.escape_held = pressed;
                self.escape_tapped |= pressed;
            }
            KeyCode::KeyW if pressed => return Some(InputEvent::ScrollIn),
            KeyCode::KeyS if pressed => return Some(InputEvent::ScrollOut),
            _ => {}
        }

        None
    }

    /// Held keys at this moment. Escape also reads as held if it was
    /// pressed at any point since the previous snapshot.
    pub fn snapshot(&mut self) -> KeyState {
        let escape = self.escape_held || self.escape_tapped;
        self.escape_tapped = false;

        KeyState {
            left: self.left_held,
            right: self.right_held,
            up: self.up_held,
            down: self.down_held,
            escape,
        }
    }

    /// Forgets held keys, e.g. when the window loses focus and releases
    /// would never arrive.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::HeldKeys;
    use crate::controllers::interactive::events::input::{InputEvent, KeyState};
    use winit::{event::ElementState, keyboard::KeyCode};

    #[test]
    fn test_press_and_release_updates_held_flags() {
        let mut keys = HeldKeys::default();

        for code in [
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
            KeyCode::ArrowUp,
            KeyCode::ArrowDown,
            KeyCode::Escape,
        ] {
            assert_eq!(keys.handle_key_event(code, ElementState::Pressed), None);
        }

        let pressed = keys.snapshot();
        assert!(pressed.left);
        assert!(pressed.right);
        assert!(pressed.up);
        assert!(pressed.down);
        assert!(pressed.escape);

        keys.handle_key_event(KeyCode::ArrowLeft, ElementState::Released);
        keys.handle_key_event(KeyCode::Escape, ElementState::Released);

        let released = keys.snapshot();
        assert!(!released.left);
        assert!(!released.escape);
        assert!(released.right);
    }

    #[test]
    fn test_zoom_keys_emit_events_on_press_only() {
        let mut keys = HeldKeys::default();

        assert_eq!(
            keys.handle_key_event(KeyCode::KeyW, ElementState::Pressed),
            Some(InputEvent::ScrollIn)
        );
        assert_eq!(
            keys.handle_key_event(KeyCode::KeyW, ElementState::Pressed),
            Some(InputEvent::ScrollIn)
        );
        assert_eq!(
            keys.handle_key_event(KeyCode::KeyS, ElementState::Pressed),
            Some(InputEvent::ScrollOut)
        );
        assert_eq!(keys.handle_key_event(KeyCode::KeyW, ElementState::Released), None);
        assert_eq!(keys.snapshot(), KeyState::default());
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let mut keys = HeldKeys::default();

        assert_eq!(keys.handle_key_event(KeyCode::KeyQ, ElementState::Pressed), None);
        assert_eq!(keys, HeldKeys::default());
    }

    #[test]
    fn test_escape_tap_between_snapshots_is_not_lost() {
        let mut keys = HeldKeys::default();

        keys.handle_key_event(KeyCode::Escape, ElementState::Pressed);
        keys.handle_key_event(KeyCode::Escape, ElementState::Released);

        assert!(keys.snapshot().escape);
        assert!(!keys.snapshot().escape);
    }

    #[test]
    fn test_reset_clears_all_state() {
        let mut keys = HeldKeys::default();
        keys.handle_key_event(KeyCode::ArrowUp, ElementState::Pressed);
        keys.handle_key_event(KeyCode::Escape, ElementState::Pressed);

        keys.reset();

        assert_eq!(keys.snapshot(), KeyState::default());
    }
}
