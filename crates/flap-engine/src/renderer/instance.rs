use bytemuck::{Pod, Zeroable};

/// Per-instance render data read by the host renderer.
/// Must match the host protocol: 10 floats = 40 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Center X in world space.
    pub x: f32,
    /// Center Y in world space.
    pub y: f32,
    /// Rendered width in world units.
    pub width: f32,
    /// Rendered height in world units.
    pub height: f32,
    /// Rotation in radians around the center.
    pub rotation: f32,
    /// Atlas index.
    pub atlas: f32,
    /// Atlas column.
    pub sprite_col: f32,
    /// Atlas row.
    pub atlas_row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// 1.0 when the image is mirrored vertically, else 0.0.
    pub flip_y: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all sprite instances, back-to-front.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
