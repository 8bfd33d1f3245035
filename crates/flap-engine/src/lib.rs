pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{SpriteComponent, AtlasId};
pub use core::scene::Scene;
pub use core::schedule::{Scheduler, TaskId};
pub use core::time::FixedTimestep;
pub use core::viewport::Viewport;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use input::event::{InputEvent, keys};
pub use assets::manifest::AssetManifest;
pub use assets::registry::SpriteRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use systems::render::build_render_buffer;
pub use systems::text::{FontConfig, build_text_entities, text_width};

pub use extensions::{approach, lerp};
