use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Instances are ordered back-to-front by layer; ties keep iteration order.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut visible: Vec<&Entity> = entities
        .filter(|e| e.active && e.sprite.is_some())
        .collect();
    // Stable sort keeps spawn order within a layer.
    visible.sort_by_key(|e| e.layer);

    for entity in visible {
        let Some(sprite) = &entity.sprite else {
            continue;
        };

        buffer.push(RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            width: entity.size.x,
            height: entity.size.y,
            rotation: entity.rotation,
            atlas: sprite.atlas.0 as f32,
            sprite_col: sprite.col,
            atlas_row: sprite.row,
            alpha: sprite.alpha,
            flip_y: if sprite.flip_y { 1.0 } else { 0.0 },
        });
    }
}
