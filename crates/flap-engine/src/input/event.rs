/// Input event types the engine understands.
/// Generic, with no game-specific meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at world coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A key was pressed. `key_code` is the host's numeric key code.
    KeyDown { key_code: u32 },
    /// The window changed size (in pixels).
    Resize { width: f32, height: f32 },
}

/// Common key codes.
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const ENTER: u32 = 13;
}

impl InputEvent {
    /// Whether this is a press of `key_code`.
    pub fn is_key(&self, key_code: u32) -> bool {
        matches!(*self, InputEvent::KeyDown { key_code: k } if k == key_code)
    }
}
