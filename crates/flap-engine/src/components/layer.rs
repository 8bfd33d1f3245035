/// Render layer: controls draw order for entities.
///
/// Layers are drawn back-to-front: Background first, UI last.
/// Within a layer, entities keep their scene order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    #[default]
    Objects = 1,
    Foreground = 2,
    UI = 3,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 4;
}
