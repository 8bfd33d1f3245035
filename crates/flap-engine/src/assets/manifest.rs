use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing all atlases and named sprites for a game.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// List of texture atlases.
    pub atlases: Vec<AtlasDescriptor>,
    /// Named sprite lookup: name → atlas index + cell coordinates.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Human-readable name (e.g., "sprites").
    pub name: String,
    /// Number of columns in the atlas grid.
    pub cols: u32,
    /// Number of rows in the atlas grid.
    pub rows: u32,
    /// Relative path to the PNG file (e.g., "sprites.png").
    pub path: String,
}

/// Describes a named sprite within an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    /// Column in the atlas grid.
    pub col: u32,
    /// Row in the atlas grid.
    pub row: u32,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "atlases": [
                { "name": "sprites", "cols": 4, "rows": 1, "path": "sprites.png" }
            ],
            "sprites": {
                "bird": { "atlas": 0, "col": 0, "row": 0 },
                "pipe": { "atlas": 0, "col": 1, "row": 0 }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.atlases.len(), 1);
        assert_eq!(manifest.atlases[0].cols, 4);
        assert_eq!(manifest.sprites["pipe"].col, 1);
    }

    #[test]
    fn sprites_are_optional() {
        let manifest = AssetManifest::from_json(r#"{ "atlases": [] }"#).unwrap();
        assert!(manifest.sprites.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AssetManifest::from_json(r#"{ "atlases": 3 }"#).is_err());
    }
}
