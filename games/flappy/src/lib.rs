use wasm_bindgen::prelude::*;
use flap_engine::*;

pub mod bird;
pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod pipes;
pub mod score;
pub mod viewport;

use config::FlappyConfig;
use game::FlappyGame;

flap_web::export_game!(FlappyGame, "flappy");

/// Replace the tuning constants from a JSON document. Missing fields keep
/// their defaults.
#[wasm_bindgen]
pub fn game_configure(json: &str) -> Result<(), JsValue> {
    let cfg = FlappyConfig::from_json(json).map_err(|e| {
        log::error!("flappy: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    with_runner(|r| {
        let (game, ctx) = r.game_and_context();
        game.configure(cfg, ctx);
    });
    Ok(())
}
