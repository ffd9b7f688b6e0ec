use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, MouseButton, PressPhase};

/// What is held down right now, plus the pointer position.
///
/// Edges (pressed/released this frame) live in [`InputFrame`]; this struct
/// only answers "is it down".
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Logical-pixel pointer position; `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Folds one event into the held-state and records its edge in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => self.set_focus(f),
            InputEvent::PointerMoved { x, y } => self.pointer_pos = Some((x, y)),
            InputEvent::PointerLeft => self.pointer_pos = None,
            InputEvent::Key { key, phase, repeat } => self.key_edge(frame, key, phase, repeat),
            InputEvent::PointerButton { button, phase, x, y } => {
                self.pointer_pos = Some((x, y));
                self.button_edge(frame, button, phase);
            }
        }
        frame.push_event(ev);
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            // Release events sent to another window would otherwise never
            // reach us, leaving keys stuck down.
            self.keys_down.clear();
            self.buttons_down.clear();
        }
    }

    fn key_edge(&mut self, frame: &mut InputFrame, key: Key, phase: PressPhase, repeat: bool) {
        match phase {
            PressPhase::Pressed => {
                // OS key repeat counts as a fresh press so held arrows keep
                // nudging slider values.
                if self.keys_down.insert(key) || repeat {
                    frame.keys_pressed.insert(key);
                }
            }
            PressPhase::Released => {
                if self.keys_down.remove(&key) {
                    frame.keys_released.insert(key);
                }
            }
        }
    }

    fn button_edge(&mut self, frame: &mut InputFrame, button: MouseButton, phase: PressPhase) {
        match phase {
            PressPhase::Pressed => {
                if self.buttons_down.insert(button) {
                    frame.buttons_pressed.insert(button);
                }
            }
            PressPhase::Released => {
                if self.buttons_down.remove(&button) {
                    frame.buttons_released.insert(button);
                }
            }
        }
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    #[inline]
    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: Key, phase: PressPhase, repeat: bool) -> InputEvent {
        InputEvent::Key { key, phase, repeat }
    }

    #[test]
    fn press_and_release_round_trip() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::Tab, PressPhase::Pressed, false));
        assert!(state.key_down(Key::Tab));
        assert!(frame.key_pressed(Key::Tab));

        frame.clear();
        state.apply_event(&mut frame, key_event(Key::Tab, PressPhase::Released, false));
        assert!(!state.key_down(Key::Tab));
        assert!(frame.keys_released.contains(&Key::Tab));
    }

    #[test]
    fn focus_loss_clears_held_input() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::PointerButton {
                button: MouseButton::Left,
                phase: PressPhase::Pressed,
                x: 5.0,
                y: 5.0,
            },
        );
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn repeat_counts_as_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::ArrowUp, PressPhase::Pressed, false));
        frame.clear();
        state.apply_event(&mut frame, key_event(Key::ArrowUp, PressPhase::Pressed, true));
        assert!(frame.key_pressed(Key::ArrowUp));
    }
}
