use flap_engine::GameConfig;
use serde::{Deserialize, Serialize};

use crate::error::FlappyError;

/// Tuning constants. Lengths and speeds are design units at scale 1
/// (a 400×600 window) unless noted otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub base_width: f32,
    pub base_height: f32,

    /// Gravity per tick at scale 1.
    pub gravity: f32,
    /// Upward velocity set by a flap.
    pub flap_velocity: f32,
    pub bird_size: f32,
    pub bird_x: f32,

    /// Fraction of the remaining angle covered each tick.
    pub rotation_lerp: f32,
    /// Degrees of tilt per unit of vertical velocity.
    pub velocity_to_angle: f32,
    pub min_angle: f32,
    pub max_angle: f32,

    pub gap_height: f32,
    pub min_pipe_height: f32,
    pub pipe_width: f32,
    /// Leftward pipe movement per tick.
    pub pipe_speed: f32,

    /// Seconds between simulation ticks.
    pub sim_interval: f32,
    /// Seconds between pipe spawns.
    pub spawn_interval: f32,
    /// Seconds between score increments.
    pub score_interval: f32,

    /// Score band height in pixels (not scaled).
    pub score_box_height: f32,
    /// Score glyph size in pixels (not scaled).
    pub score_font_size: f32,

    pub game_over_width: f32,
    pub game_over_height: f32,

    pub flap_key: u32,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            base_width: 400.0,
            base_height: 600.0,
            gravity: 0.5,
            flap_velocity: 10.0,
            bird_size: 80.0,
            bird_x: 100.0,
            rotation_lerp: 0.2,
            velocity_to_angle: 3.0,
            min_angle: -90.0,
            max_angle: 30.0,
            gap_height: 250.0,
            min_pipe_height: 80.0,
            pipe_width: 150.0,
            pipe_speed: 3.0,
            sim_interval: 1.0 / 60.0,
            spawn_interval: 2.0,
            score_interval: 0.5,
            score_box_height: 50.0,
            score_font_size: 30.0,
            game_over_width: 300.0,
            game_over_height: 100.0,
            flap_key: flap_engine::keys::SPACE,
        }
    }
}

impl FlappyConfig {
    /// Parse a config document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, FlappyError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would make sizes or intervals meaningless.
    pub fn validate(&self) -> Result<(), FlappyError> {
        let positive = [
            ("base_width", self.base_width),
            ("base_height", self.base_height),
            ("bird_size", self.bird_size),
            ("pipe_width", self.pipe_width),
            ("sim_interval", self.sim_interval),
            ("spawn_interval", self.spawn_interval),
            ("score_interval", self.score_interval),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(FlappyError::InvalidValue {
                    field,
                    expected: "positive",
                    value,
                });
            }
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("bird_x", self.bird_x),
            ("gap_height", self.gap_height),
            ("min_pipe_height", self.min_pipe_height),
            ("pipe_speed", self.pipe_speed),
            ("score_box_height", self.score_box_height),
            ("score_font_size", self.score_font_size),
            ("game_over_width", self.game_over_width),
            ("game_over_height", self.game_over_height),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FlappyError::InvalidValue {
                    field,
                    expected: "non-negative",
                    value,
                });
            }
        }

        if !(0.0..=1.0).contains(&self.rotation_lerp) {
            return Err(FlappyError::InvalidValue {
                field: "rotation_lerp",
                expected: "within [0, 1]",
                value: self.rotation_lerp,
            });
        }
        if self.min_angle.is_nan() || self.min_angle > self.max_angle {
            return Err(FlappyError::InvalidValue {
                field: "min_angle",
                expected: "at most max_angle",
                value: self.min_angle,
            });
        }
        Ok(())
    }

    /// Engine settings: one fixed step per simulation tick, world sized to the
    /// design resolution until the host reports the real window.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: self.sim_interval,
            world_width: self.base_width,
            world_height: self.base_height,
            max_instances: 256,
            max_events: 32,
        }
    }
}
