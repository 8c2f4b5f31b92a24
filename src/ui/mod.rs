//! Terminal rendering for the arcade. Scenes are read-only over game state.

pub mod cadence_scene;
pub mod flappy_scene;
pub mod game_common;
pub mod lander_scene;
pub mod menu_scene;
pub mod snake_scene;
pub mod whack_scene;

use ratatui::{layout::Rect, Frame};

use crate::games::ActiveGame;

/// Dispatch to the active game's scene.
pub fn render_game(frame: &mut Frame, area: Rect, game: &ActiveGame) {
    match game {
        ActiveGame::Cadence(g) => cadence_scene::render_cadence_scene(frame, area, g),
        ActiveGame::Flappy(g) => flappy_scene::render_flappy_scene(frame, area, g),
        ActiveGame::Snake(g) => snake_scene::render_snake_scene(frame, area, g),
        ActiveGame::Lander(g) => lander_scene::render_lander_scene(frame, area, g),
        ActiveGame::Whack(g) => whack_scene::render_whack_scene(frame, area, g),
    }
}
