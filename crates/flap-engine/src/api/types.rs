use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// A game event communicated from Rust to the host via the event buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// Event with a single payload value.
    pub fn new(kind: f32, a: f32) -> Self {
        Self { kind, a, b: 0.0, c: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }

    #[test]
    fn new_zeroes_trailing_payload() {
        let ev = GameEvent::new(2.0, 7.0);
        assert_eq!(ev, GameEvent { kind: 2.0, a: 7.0, b: 0.0, c: 0.0 });
    }
}
