use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton};

/// Edges recorded since the last frame was consumed.
///
/// Complements `InputState`: that struct answers "is it down", this one
/// answers "did it go down (or up) this frame". Cleared by the runtime after
/// every `on_frame`.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw event stream in arrival order, for apps that want more than edges.
    pub events: Vec<InputEvent>,

    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,
    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    #[inline]
    pub fn button_pressed(&self, btn: MouseButton) -> bool {
        self.buttons_pressed.contains(&btn)
    }

    #[inline]
    pub fn button_released(&self, btn: MouseButton) -> bool {
        self.buttons_released.contains(&btn)
    }
}
