use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::Key;

use crate::controllers::interactive::events::input::InputEvent;
use crate::core::data::point::ScreenPoint;

/// Pixel distance reported for one wheel notch.
const LINE_DELTA_PIXELS: f64 = 100.0;

/// Signed wheel delta where positive means "scroll towards the user".
///
/// winit reports that direction as a negative `y`, so both delta kinds are
/// negated.
#[must_use]
pub fn wheel_delta(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -f64::from(y) * LINE_DELTA_PIXELS,
        MouseScrollDelta::PixelDelta(position) => -position.y,
    }
}

/// Translates winit pointer and keyboard events into [`InputEvent`]s.
///
/// winit does not attach a position to button or wheel events, so the last
/// cursor position (already in canvas space) is tracked here.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WindowInputState {
    cursor: ScreenPoint,
}

impl WindowInputState {
    pub fn handle_cursor_moved(&mut self, canvas_position: ScreenPoint) -> InputEvent {
        self.cursor = canvas_position;
        InputEvent::PointerMove(canvas_position)
    }

    #[must_use]
    pub fn handle_mouse_button(&self, button: MouseButton, state: ElementState) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }

        Some(match state {
            ElementState::Pressed => InputEvent::PointerDown(self.cursor),
            ElementState::Released => InputEvent::PointerUp,
        })
    }

    #[must_use]
    pub fn handle_wheel(&self, delta: MouseScrollDelta) -> InputEvent {
        InputEvent::Wheel {
            delta: wheel_delta(delta),
            position: self.cursor,
        }
    }

    #[must_use]
    pub fn handle_key(&self, key: &Key, state: ElementState) -> Option<InputEvent> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            Key::Character(text) => text.chars().next().map(InputEvent::Key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::keyboard::NamedKey;

    #[test]
    fn character_press_becomes_key_event() {
        let input = WindowInputState::default();

        assert_eq!(
            input.handle_key(&Key::Character("W".into()), ElementState::Pressed),
            Some(InputEvent::Key('W'))
        );
    }

    #[test]
    fn key_release_and_named_keys_are_ignored() {
        let input = WindowInputState::default();

        assert_eq!(
            input.handle_key(&Key::Character("w".into()), ElementState::Released),
            None
        );
        assert_eq!(
            input.handle_key(&Key::Named(NamedKey::Escape), ElementState::Pressed),
            None
        );
    }

    #[test]
    fn buttons_use_last_cursor_position() {
        let mut input = WindowInputState::default();
        let position = ScreenPoint::new(12.0, 34.0);

        assert_eq!(input.handle_cursor_moved(position), InputEvent::PointerMove(position));
        assert_eq!(
            input.handle_mouse_button(MouseButton::Left, ElementState::Pressed),
            Some(InputEvent::PointerDown(position))
        );
        assert_eq!(
            input.handle_mouse_button(MouseButton::Left, ElementState::Released),
            Some(InputEvent::PointerUp)
        );
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        let input = WindowInputState::default();

        assert_eq!(
            input.handle_mouse_button(MouseButton::Right, ElementState::Pressed),
            None
        );
    }

    #[test]
    fn scrolling_up_zooms_in_and_down_zooms_out() {
        assert!(wheel_delta(MouseScrollDelta::LineDelta(0.0, 1.0)) < 0.0);
        assert!(wheel_delta(MouseScrollDelta::LineDelta(0.0, -1.0)) > 0.0);
        assert_eq!(
            wheel_delta(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -42.0))),
            42.0
        );
    }

    #[test]
    fn wheel_event_carries_cursor() {
        let mut input = WindowInputState::default();
        input.handle_cursor_moved(ScreenPoint::new(5.0, 6.0));

        assert_eq!(
            input.handle_wheel(MouseScrollDelta::LineDelta(0.0, 2.0)),
            InputEvent::Wheel {
                delta: -200.0,
                position: ScreenPoint::new(5.0, 6.0),
            }
        );
    }
}
