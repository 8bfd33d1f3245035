//! Host buffer layout.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Instances: max_instances × 10 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! The host reads the capacities through the bridge's `get_max_*` exports
//! and derives the offsets from them.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_MAX_INSTANCES: usize = 1;
pub const HEADER_INSTANCE_COUNT: usize = 2;
pub const HEADER_MAX_EVENTS: usize = 3;
pub const HEADER_EVENT_COUNT: usize = 4;
pub const HEADER_WORLD_WIDTH: usize = 5;
pub const HEADER_WORLD_HEIGHT: usize = 6;
pub const HEADER_PROTOCOL_VERSION: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance (fixed wire format).
pub const INSTANCE_FLOATS: usize = 10;

/// Floats per game event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum render instances.
    pub max_instances: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        let instance_data_offset = HEADER_FLOATS;
        let event_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_instances,
            max_events,
            instance_data_offset,
            event_data_offset,
            buffer_total_floats,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }

    /// Total buffer size in bytes.
    pub fn buffer_total_bytes(&self) -> usize {
        self.buffer_total_floats * 4
    }
}
