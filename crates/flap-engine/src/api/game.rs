use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::SpriteRegistry;
use crate::components::sprite::SpriteComponent;
use crate::core::scene::Scene;
use crate::core::viewport::Viewport;
use crate::input::event::InputEvent;
use crate::renderer::instance::RenderBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Design-reference width. The viewport scale is measured against it.
    pub world_width: f32,
    /// Design-reference height.
    pub world_height: f32,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 512,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed simulation step (`ctx.dt()` seconds).
    fn update(&mut self, ctx: &mut EngineContext);

    /// A discrete input event, applied as soon as it arrives (between steps).
    /// Resize events reach the game after `ctx.viewport` has been updated.
    fn handle_input(&mut self, ctx: &mut EngineContext, event: InputEvent);

    /// Optional read-only render pass for custom render commands.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to every `Game` hook.
pub struct EngineContext {
    pub scene: Scene,
    pub viewport: Viewport,
    pub sprites: SpriteRegistry,
    pub events: Vec<GameEvent>,
    dt: f32,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Create a context sized for the given config.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            viewport: Viewport::new(config.world_width, config.world_height),
            sprites: SpriteRegistry::new(),
            events: Vec::with_capacity(config.max_events),
            dt: config.fixed_dt,
            next_id: 1,
        }
    }

    /// Generate the next entity ID. IDs wrap after `u32::MAX`, long after
    /// any entity holding an old one is gone.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Duration of one fixed step in seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Named sprite from the loaded manifest, or `fallback` when the manifest
    /// does not define it.
    pub fn sprite_or(&self, name: &str, fallback: SpriteComponent) -> SpriteComponent {
        self.sprites.get(name).cloned().unwrap_or(fallback)
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::AtlasId;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn with_config_sizes_viewport_and_dt() {
        let config = GameConfig {
            fixed_dt: 0.01,
            world_width: 400.0,
            world_height: 600.0,
            ..GameConfig::default()
        };
        let ctx = EngineContext::with_config(&config);
        assert_eq!(ctx.dt(), 0.01);
        assert_eq!(ctx.viewport.width(), 400.0);
        assert_eq!(ctx.viewport.height(), 600.0);
        assert_eq!(ctx.viewport.scale(), 1.0);
    }

    #[test]
    fn take_events_drains() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent::new(1.0, 0.0));
        assert_eq!(ctx.take_events().len(), 1);
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn sprite_or_falls_back_without_manifest() {
        let ctx = EngineContext::new();
        let fallback = SpriteComponent {
            atlas: AtlasId(0),
            col: 3.0,
            ..Default::default()
        };
        let sprite = ctx.sprite_or("bird", fallback);
        assert_eq!(sprite.col, 3.0);
    }
}
