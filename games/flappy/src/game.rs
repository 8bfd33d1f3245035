use flap_engine::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bird::Bird;
use crate::collision::{self, Cause, Verdict};
use crate::config::FlappyConfig;
use crate::pipes::{plan_gap, Orientation, PipeField, PipePair};
use crate::score::Score;
use crate::viewport::ScaleAdapter;

// Game event kinds (Rust → host)
pub const EVENT_STARTED: f32 = 1.0;
pub const EVENT_SCORE: f32 = 2.0;
pub const EVENT_GAME_OVER: f32 = 3.0;

const TAG_BIRD: &str = "bird";
const TAG_PIPE: &str = "pipe";
const TAG_SCORE_BOX: &str = "score_box";
const TAG_SCORE_TEXT: &str = "score_text";
const TAG_GAME_OVER: &str = "game_over";

/// Run phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Over,
}

/// The three periodic activities of a live run.
#[derive(Debug, Clone, Copy)]
struct RunTasks {
    sim: TaskId,
    spawn: TaskId,
    score: TaskId,
}

pub struct FlappyGame<R: Rng = StdRng> {
    cfg: FlappyConfig,
    rng: R,
    state: RunState,
    /// Created by the first run, then reused.
    bird: Option<Bird>,
    pipes: PipeField,
    score: Score,
    /// Score as last drawn. Refreshed by the simulation tick.
    score_text: String,
    game_over_visible: bool,
    scaling: ScaleAdapter,
    scheduler: Scheduler,
    tasks: Option<RunTasks>,
    fired: Vec<TaskId>,
    font: FontConfig,
}

impl FlappyGame {
    pub fn new() -> Self {
        Self::with_rng(FlappyConfig::default(), StdRng::from_entropy())
    }
}

impl<R: Rng> FlappyGame<R> {
    pub fn with_rng(cfg: FlappyConfig, rng: R) -> Self {
        Self {
            scaling: ScaleAdapter::new(1.0, &cfg),
            scheduler: Scheduler::new(cfg.sim_interval),
            rng,
            state: RunState::Idle,
            bird: None,
            pipes: PipeField::new(),
            score: Score::default(),
            score_text: Score::default().text(),
            game_over_visible: false,
            tasks: None,
            fired: Vec::with_capacity(3),
            font: FontConfig::default(),
            cfg,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn score(&self) -> u64 {
        self.score.value()
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn bird(&self) -> Option<&Bird> {
        self.bird.as_ref()
    }

    pub fn pipes(&self) -> &PipeField {
        &self.pipes
    }

    pub fn game_over_visible(&self) -> bool {
        self.game_over_visible
    }

    pub fn scaling(&self) -> &ScaleAdapter {
        &self.scaling
    }

    pub fn settings(&self) -> &FlappyConfig {
        &self.cfg
    }

    /// Swap in new tuning constants. Sizes and gravity follow immediately;
    /// task intervals apply from the next run.
    pub fn configure(&mut self, cfg: FlappyConfig, ctx: &mut EngineContext) {
        let (width, height) = (ctx.viewport.width(), ctx.viewport.height());
        ctx.viewport = Viewport::new(cfg.base_width, cfg.base_height);
        ctx.viewport.resize(width, height);
        self.cfg = cfg;
        self.apply_resize(ctx);
        log::info!("config replaced, scale {:.3}", self.scaling.scale());
    }

    /// Begin a new run from Idle or Over. Also used to restart.
    pub fn start(&mut self, ctx: &mut EngineContext) {
        self.pipes.clear();

        let home = self.scaling.bird_home(&ctx.viewport, &self.cfg);
        let size = self.scaling.bird_size(&self.cfg);
        match self.bird.as_mut() {
            Some(bird) => {
                bird.size = size;
                bird.reset(home);
            }
            None => self.bird = Some(Bird::new(home, size)),
        }

        self.score.reset();
        self.score_text = self.score.text();
        self.game_over_visible = false;

        self.scheduler.clear();
        self.tasks = Some(RunTasks {
            sim: self.scheduler.schedule_interval(self.cfg.sim_interval),
            spawn: self.scheduler.schedule_interval(self.cfg.spawn_interval),
            score: self.scheduler.schedule_interval(self.cfg.score_interval),
        });
        self.state = RunState::Running;

        ctx.emit_event(GameEvent::new(EVENT_STARTED, 0.0));
        log::info!(
            "run started in {}x{} (scale {:.3})",
            ctx.viewport.width(),
            ctx.viewport.height(),
            self.scaling.scale()
        );
    }

    pub fn flap(&mut self) {
        let velocity = self.scaling.flap_velocity(&self.cfg);
        if let Some(bird) = self.bird.as_mut() {
            bird.impulse(velocity);
        }
    }

    /// End the live run. Does nothing unless a run is live.
    pub fn game_over(&mut self, ctx: &mut EngineContext, cause: Cause) {
        if self.state != RunState::Running {
            return;
        }
        if let Some(tasks) = self.tasks.take() {
            for id in [tasks.sim, tasks.spawn, tasks.score] {
                self.scheduler.unschedule(id);
            }
        }
        self.state = RunState::Over;
        self.game_over_visible = true;

        ctx.emit_event(GameEvent::new(EVENT_GAME_OVER, self.score.value() as f32));
        log::info!("game over ({:?}), score {}", cause, self.score.value());
    }

    fn simulate(&mut self, ctx: &mut EngineContext) {
        let Some(bird) = self.bird.as_mut() else {
            return;
        };
        bird.advance(self.scaling.gravity());
        bird.aim(self.cfg.velocity_to_angle, self.cfg.min_angle, self.cfg.max_angle);
        bird.smooth_rotate(self.cfg.rotation_lerp);

        self.pipes.scroll(self.scaling.pipe_speed(&self.cfg));
        let verdict = collision::check(bird, &self.pipes, ctx.viewport.height());
        self.pipes.prune();
        self.score_text = self.score.text();

        if let Verdict::GameOver(cause) = verdict {
            self.game_over(ctx, cause);
        }
    }

    fn spawn_pipes(&mut self, ctx: &mut EngineContext) {
        let height = ctx.viewport.height();
        match plan_gap(height, self.scaling.scale(), &self.cfg, &mut self.rng) {
            Ok(layout) => {
                let x = ctx.viewport.width();
                let width = self.scaling.pipe_width(&self.cfg);
                self.pipes.push(PipePair::place(&layout, x, width, height));
                log::debug!(
                    "pipes at x={} top={} bottom={}",
                    x,
                    layout.top_height,
                    layout.bottom_height
                );
            }
            Err(e) => log::warn!("spawn skipped: {}", e),
        }
    }

    fn score_tick(&mut self, ctx: &mut EngineContext) {
        let value = self.score.tick();
        ctx.emit_event(GameEvent::new(EVENT_SCORE, value as f32));
    }

    /// Re-project state into the (already resized) viewport.
    fn apply_resize(&mut self, ctx: &EngineContext) {
        self.scaling = ScaleAdapter::from_viewport(&ctx.viewport, &self.cfg);
        if let Some(bird) = self.bird.as_mut() {
            self.scaling.reproject(bird, &ctx.viewport, &self.cfg);
        }
    }

    /// Rebuild the scene from game state.
    fn sync_entities(&self, ctx: &mut EngineContext) {
        ctx.scene.clear();

        let pipe_sprite = ctx.sprite_or(TAG_PIPE, SpriteComponent::cell(1.0, 0.0));
        for pipe in self.pipes.iter() {
            let mut entity = Entity::new(ctx.next_id())
                .with_tag(TAG_PIPE)
                .with_layer(RenderLayer::Objects)
                .with_sprite(pipe_sprite.clone().flipped(pipe.orientation == Orientation::Top));
            entity.set_rect(pipe.pos, pipe.size);
            ctx.scene.spawn(entity);
        }

        if let Some(bird) = &self.bird {
            let sprite = ctx.sprite_or(TAG_BIRD, SpriteComponent::cell(0.0, 0.0));
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(TAG_BIRD)
                    .with_layer(RenderLayer::Foreground)
                    .with_pos(bird.center())
                    .with_size(bird.size)
                    .with_rotation(bird.angle.to_radians())
                    .with_sprite(sprite),
            );
        }

        // Score band and label
        let band = self.scaling.score_box(&ctx.viewport, &self.cfg);
        let mut score_box = Entity::new(ctx.next_id())
            .with_tag(TAG_SCORE_BOX)
            .with_layer(RenderLayer::UI)
            .with_sprite(ctx.sprite_or(TAG_SCORE_BOX, SpriteComponent::cell(2.0, 0.0)));
        score_box.set_rect(band.min, band.size);
        ctx.scene.spawn(score_box);

        let origin = self
            .scaling
            .score_label_origin(&self.score_text, &ctx.viewport, &self.cfg, &self.font);
        let mut next_id = || ctx.next_id();
        let glyphs = build_text_entities(
            &self.score_text,
            origin,
            self.cfg.score_font_size,
            &self.font,
            TAG_SCORE_TEXT,
            &mut next_id,
        );
        for glyph in glyphs {
            ctx.scene.spawn(glyph);
        }

        let panel = self.scaling.game_over_rect(&ctx.viewport, &self.cfg);
        let alpha = if self.game_over_visible { 1.0 } else { 0.0 };
        let mut game_over = Entity::new(ctx.next_id())
            .with_tag(TAG_GAME_OVER)
            .with_layer(RenderLayer::UI)
            .with_sprite(
                ctx.sprite_or(TAG_GAME_OVER, SpriteComponent::cell(3.0, 0.0))
                    .with_alpha(alpha),
            );
        game_over.set_rect(panel.min, panel.size);
        ctx.scene.spawn(game_over);
    }
}

impl<R: Rng> Game for FlappyGame<R> {
    fn config(&self) -> GameConfig {
        self.cfg.game_config()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.scheduler = Scheduler::new(ctx.dt());
        self.apply_resize(ctx);
        self.sync_entities(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        let mut fired = std::mem::take(&mut self.fired);
        fired.clear();
        self.scheduler.step_into(&mut fired);

        for &id in &fired {
            // Game over cancels whatever else was due this step.
            let Some(tasks) = self.tasks else {
                break;
            };
            if id == tasks.sim {
                self.simulate(ctx);
            } else if id == tasks.spawn {
                self.spawn_pipes(ctx);
            } else if id == tasks.score {
                self.score_tick(ctx);
            }
        }
        self.fired = fired;

        self.sync_entities(ctx);
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, event: InputEvent) {
        match event {
            InputEvent::PointerDown { .. } | InputEvent::KeyDown { .. } => {
                if self.state != RunState::Running {
                    self.start(ctx);
                }
                // Any key starts a run; only the flap key flaps.
                let flaps = matches!(event, InputEvent::PointerDown { .. })
                    || event.is_key(self.cfg.flap_key);
                if flaps {
                    self.flap();
                }
            }
            InputEvent::Resize { width, height } => {
                self.apply_resize(ctx);
                log::debug!(
                    "resized to {}x{}, scale {:.3}, gravity {:.3}",
                    width,
                    height,
                    self.scaling.scale(),
                    self.scaling.gravity()
                );
            }
        }
        self.sync_entities(ctx);
    }
}
