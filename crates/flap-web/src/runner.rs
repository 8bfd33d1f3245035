use flap_engine::{
    AssetManifest, EngineContext, FixedTimestep, Game, GameConfig, GameEvent, InputEvent,
    ProtocolLayout, RenderBuffer, RenderContext, SpriteRegistry,
};
use flap_engine::bridge::protocol::{
    HEADER_EVENT_COUNT, HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT,
    HEADER_MAX_EVENTS, HEADER_MAX_INSTANCES, HEADER_PROTOCOL_VERSION, HEADER_WORLD_HEIGHT,
    HEADER_WORLD_WIDTH, PROTOCOL_VERSION,
};
use flap_engine::systems::render::build_render_buffer;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    /// Events published by the last tick, read by the host.
    frame_events: Vec<GameEvent>,
    frame_counter: u64,
    header: [f32; HEADER_FLOATS],
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);

        Self {
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            frame_events: Vec::with_capacity(config.max_events),
            ctx: EngineContext::with_config(&config),
            game,
            timestep,
            layout,
            config,
            initialized: false,
            frame_counter: 0,
            header: [0.0; HEADER_FLOATS],
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.rebuild_render_buffer();
        self.write_header();
    }

    /// Deliver an input event to the game right away.
    /// Resize events update the viewport first.
    pub fn push_input(&mut self, event: InputEvent) {
        if !self.initialized {
            log::warn!("input {:?} before init ignored", event);
            return;
        }
        if let InputEvent::Resize { width, height } = event {
            if width < 0.0 || height < 0.0 {
                log::warn!("negative window size {}x{} clamped to zero", width, height);
            }
            self.ctx.viewport.resize(width, height);
        }
        self.game.handle_input(&mut self.ctx, event);
        self.rebuild_render_buffer();
        self.write_header();
    }

    /// Run one frame: fixed-step updates, render buffer, event hand-off.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx);
        }

        self.rebuild_render_buffer();

        self.frame_events = self.ctx.take_events();
        if self.frame_events.len() > self.layout.max_events {
            log::warn!(
                "{} game events this frame, host buffer holds {}",
                self.frame_events.len(),
                self.layout.max_events
            );
            self.frame_events.truncate(self.layout.max_events);
        }
        self.frame_counter += 1;
        self.write_header();
    }

    /// Replace the sprite registry from a JSON manifest.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let manifest = AssetManifest::from_json(json)?;
        self.ctx.sprites = SpriteRegistry::from_manifest(&manifest);
        log::info!(
            "manifest loaded: {} atlases, {} sprites",
            manifest.atlases.len(),
            self.ctx.sprites.len()
        );
        self.rebuild_render_buffer();
        Ok(())
    }

    fn write_header(&mut self) {
        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        h[HEADER_MAX_INSTANCES] = self.layout.max_instances as f32;
        h[HEADER_INSTANCE_COUNT] = self.render_buffer.instances.len() as f32;
        h[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        h[HEADER_EVENT_COUNT] = self.frame_events.len() as f32;
        h[HEADER_WORLD_WIDTH] = self.ctx.viewport.width();
        h[HEADER_WORLD_HEIGHT] = self.ctx.viewport.height();
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    }

    fn rebuild_render_buffer(&mut self) {
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        // Allow game to add custom render commands
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.game.render(&mut render_ctx);
        }

        // Instances are sorted back to front, so overflow drops the back layers.
        let len = self.render_buffer.instances.len();
        if len > self.layout.max_instances {
            log::warn!(
                "{} render instances, host buffer holds {}",
                len,
                self.layout.max_instances
            );
            self.render_buffer.instances.drain(..len - self.layout.max_instances);
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Mutable access to the game and its context (for game-specific exports).
    pub fn game_and_context(&mut self) -> (&mut G, &mut EngineContext) {
        (&mut self.game, &mut self.ctx)
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn frame_events(&self) -> &[GameEvent] {
        &self.frame_events
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    // ---- Pointer accessors for host reads ----

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.frame_events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.frame_events.len() as u32
    }

    pub fn frame_counter(&self) -> f64 {
        self.frame_counter as f64
    }

    pub fn world_width(&self) -> f32 {
        self.ctx.viewport.width()
    }

    pub fn world_height(&self) -> f32 {
        self.ctx.viewport.height()
    }

    pub fn fixed_dt(&self) -> f32 {
        self.config.fixed_dt
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
