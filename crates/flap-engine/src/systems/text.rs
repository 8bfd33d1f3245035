//! Bitmap font text rendering.
//!
//! Text goes through the sprite pipeline: each character becomes an Entity
//! whose sprite points at its glyph in a font atlas laid out in ASCII order
//! (typically 16 columns × 6 rows for printable ASCII 32-127).

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::components::sprite::{AtlasId, SpriteComponent};
use glam::Vec2;

/// Configuration for a bitmap font atlas.
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Which atlas contains the font glyphs.
    pub atlas: AtlasId,
    /// Number of columns in the font atlas grid.
    pub cols: u32,
    /// Number of rows in the font atlas grid.
    pub rows: u32,
    /// First ASCII code in the atlas (typically 32 = space).
    pub start_char: u8,
    /// Horizontal advance as fraction of character size (e.g., 0.55 for tight, 1.0 for monospace).
    pub spacing: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            atlas: AtlasId(1), // Convention: atlas 0 = game sprites, atlas 1 = font
            cols: 16,
            rows: 6,
            start_char: 32,
            spacing: 0.55,
        }
    }
}

/// Convert an ASCII character to grid coordinates (col, row) in the font atlas.
///
/// Returns `None` if the character is outside the valid range for this font.
pub fn char_to_grid(c: char, font: &FontConfig) -> Option<(f32, f32)> {
    let index = (c as u32).checked_sub(font.start_char as u32)?;
    if index >= font.cols * font.rows {
        return None;
    }
    Some(((index % font.cols) as f32, (index / font.cols) as f32))
}

/// Width of `text` in world units when drawn with glyphs of `size`.
pub fn text_width(text: &str, size: f32, font: &FontConfig) -> f32 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    // Every glyph advances by size * spacing except the last, which is full width.
    (n - 1) as f32 * size * font.spacing + size
}

/// Build one UI-layer entity per printable character of `text`.
///
/// `origin` is the bottom-left corner of the first glyph (y-up world).
/// Characters outside the font are skipped but still advance the cursor.
pub fn build_text_entities<F>(
    text: &str,
    origin: Vec2,
    size: f32,
    font: &FontConfig,
    tag: &str,
    id_gen: &mut F,
) -> Vec<Entity>
where
    F: FnMut() -> EntityId,
{
    let mut entities = Vec::with_capacity(text.len());
    let mut cursor_x = origin.x;

    for c in text.chars() {
        if let Some((col, row)) = char_to_grid(c, font) {
            let entity = Entity::new(id_gen())
                .with_tag(tag)
                .with_layer(RenderLayer::UI)
                .with_pos(Vec2::new(cursor_x + size / 2.0, origin.y + size / 2.0))
                .with_size(Vec2::splat(size))
                .with_sprite(SpriteComponent {
                    atlas: font.atlas,
                    col,
                    row,
                    ..Default::default()
                });
            entities.push(entity);
        }
        cursor_x += size * font.spacing;
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> impl FnMut() -> EntityId {
        let mut next = 0u32;
        move || {
            next += 1;
            EntityId(next)
        }
    }

    #[test]
    fn char_to_grid_digits() {
        let font = FontConfig::default();
        // '0' is ASCII 48, index 16 → col 0, row 1
        assert_eq!(char_to_grid('0', &font), Some((0.0, 1.0)));
        // '9' is ASCII 57, index 25 → col 9, row 1
        assert_eq!(char_to_grid('9', &font), Some((9.0, 1.0)));
    }

    #[test]
    fn char_to_grid_out_of_range() {
        let font = FontConfig::default();
        assert!(char_to_grid('\t', &font).is_none());
        assert!(char_to_grid('\u{80}', &font).is_none());
    }

    #[test]
    fn text_width_accounts_for_spacing() {
        let font = FontConfig::default();
        assert_eq!(text_width("", 30.0, &font), 0.0);
        assert_eq!(text_width("7", 30.0, &font), 30.0);
        assert!((text_width("12", 30.0, &font) - (30.0 * 0.55 + 30.0)).abs() < 1e-4);
    }

    #[test]
    fn build_text_places_glyphs_left_to_right() {
        let font = FontConfig::default();
        let mut ids = counter();
        let glyphs = build_text_entities("42", Vec2::new(10.0, 5.0), 30.0, &font, "score", &mut ids);

        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0].tag, "score");
        assert_eq!(glyphs[0].layer, RenderLayer::UI);
        assert_eq!(glyphs[0].pos, Vec2::new(25.0, 20.0));
        assert!(glyphs[1].pos.x > glyphs[0].pos.x);
        assert_eq!(glyphs[1].sprite.as_ref().unwrap().col, 2.0);
    }

    #[test]
    fn build_text_skips_unprintable() {
        let font = FontConfig::default();
        let mut ids = counter();
        let glyphs = build_text_entities("A\tB", Vec2::ZERO, 20.0, &font, "t", &mut ids);
        assert_eq!(glyphs.len(), 2);
        assert!((glyphs[1].pos.x - (2.0 * 20.0 * 0.55 + 10.0)).abs() < 1e-4);
    }

}
