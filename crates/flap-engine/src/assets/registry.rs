use std::collections::HashMap;
use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{AtlasId, SpriteComponent};

/// Registry of named sprites, built from an AssetManifest.
/// Provides convenient name-based sprite lookup for game code.
#[derive(Debug, Clone)]
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteComponent>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut sprites = HashMap::with_capacity(manifest.sprites.len());
        for (name, desc) in &manifest.sprites {
            if desc.atlas as usize >= manifest.atlases.len() {
                log::warn!(
                    "sprite '{}' refers to atlas {} but the manifest has {}",
                    name,
                    desc.atlas,
                    manifest.atlases.len()
                );
            }
            sprites.insert(name.clone(), SpriteComponent {
                atlas: AtlasId(desc.atlas),
                col: desc.col as f32,
                row: desc.row as f32,
                ..Default::default()
            });
        }
        Self { sprites }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&SpriteComponent> {
        self.sprites.get(name)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
