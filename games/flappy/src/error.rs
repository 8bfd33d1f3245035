use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlappyError {
    /// The playfield is too short to fit the gap between two minimum-height
    /// pipes at the current scale.
    #[error("no room for a pipe pair: top height range [{min}, {max}] is empty at playfield height {playfield_height}")]
    InvalidSpawnRange {
        min: f32,
        max: f32,
        playfield_height: f32,
    },

    #[error("invalid config: {field} must be {expected}, got {value}")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
        value: f32,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
