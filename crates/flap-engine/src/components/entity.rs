use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::layer::RenderLayer;
use crate::components::sprite::SpriteComponent;

/// Fat Entity: a single struct with optional components.
/// This is what the host draws; game state lives in the game and is copied here.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Center position in world space.
    pub pos: Vec2,
    /// Rotation in radians, counter-clockwise, around `pos`.
    pub rotation: f32,
    /// Rendered width and height in world units.
    pub size: Vec2,
    /// Draw order bucket.
    pub layer: RenderLayer,
    /// Sprite component (entities without one are invisible).
    pub sprite: Option<SpriteComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            size: Vec2::ONE,
            layer: RenderLayer::default(),
            sprite: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    /// Place the entity from a bottom-left corner and size.
    pub fn set_rect(&mut self, min: Vec2, size: Vec2) {
        self.pos = min + size * 0.5;
        self.size = size;
    }
}
