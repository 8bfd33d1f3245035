/// Identifies which texture atlas a sprite belongs to.
/// Index into the AssetManifest's atlas list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

/// Sprite component: how an entity appears on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Which atlas this sprite belongs to.
    pub atlas: AtlasId,
    /// Column in the atlas grid.
    pub col: f32,
    /// Row in the atlas grid.
    pub row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Mirror the image vertically when drawing.
    pub flip_y: bool,
}

impl SpriteComponent {
    /// Sprite at the given cell of atlas 0.
    pub fn cell(col: f32, row: f32) -> Self {
        Self {
            col,
            row,
            ..Default::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn flipped(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            atlas: AtlasId(0),
            col: 0.0,
            row: 0.0,
            alpha: 1.0,
            flip_y: false,
        }
    }
}
