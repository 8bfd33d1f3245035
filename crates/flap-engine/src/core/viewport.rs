use glam::Vec2;

/// Window-sized playfield measured against a fixed design resolution.
///
/// World units are window pixels; `scale` converts design units into them.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    base_width: f32,
    base_height: f32,
    scale: f32,
}

impl Viewport {
    /// A viewport whose window matches the design resolution (scale 1).
    pub fn new(base_width: f32, base_height: f32) -> Self {
        Self {
            width: base_width,
            height: base_height,
            base_width,
            base_height,
            scale: 1.0,
        }
    }

    /// Resize the window. The scale fits the design area inside the window
    /// without distortion: `min(width / base_width, height / base_height)`.
    pub fn resize(&mut self, width: f32, height: f32) -> f32 {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let horiz_ratio = self.width / self.base_width;
        let vert_ratio = self.height / self.base_height;
        self.scale = horiz_ratio.min(vert_ratio);
        self.scale
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}
