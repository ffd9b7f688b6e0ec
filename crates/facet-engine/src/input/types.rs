/// Keys the gallery reacts to: page switching, parameter nudging, reset.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Number-row digit, 1 through 9.
    Digit(u8),
    R,
    Unknown(u32),
}

/// Press edge shared by keys and pointer buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PressPhase {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Platform-agnostic input event. Positions are logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Focused(bool),
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
    PointerButton {
        button: MouseButton,
        phase: PressPhase,
        x: f32,
        y: f32,
    },
    Key {
        key: Key,
        phase: PressPhase,
        repeat: bool,
    },
}
