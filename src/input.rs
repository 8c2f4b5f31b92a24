//! Keyboard mapping: crossterm key events → per-game input actions.
//!
//! The game logic never sees `KeyCode`; everything is translated here so the
//! logic modules stay terminal-agnostic.

use crossterm::event::KeyCode;
use rand::Rng;

use crate::games::{cadence, flappy, lander, snake, whack, ActiveGame};
use crate::menu::{self, MenuAction, MenuInput, MenuState};

/// Lane/pad keys shared by Cadence and Whack: Left, Down, Right.
fn lane_for(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Left => Some(0),
        KeyCode::Down => Some(1),
        KeyCode::Right => Some(2),
        _ => None,
    }
}

fn cadence_input(code: KeyCode) -> cadence::CadenceInput {
    if let Some(lane) = lane_for(code) {
        return cadence::CadenceInput::Lane(lane);
    }
    match code {
        KeyCode::Char(' ') => cadence::CadenceInput::Start,
        KeyCode::Esc => cadence::CadenceInput::Forfeit,
        _ => cadence::CadenceInput::Other,
    }
}

fn flappy_input(code: KeyCode) -> flappy::FlappyInput {
    match code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => flappy::FlappyInput::Flap,
        KeyCode::Esc => flappy::FlappyInput::Forfeit,
        _ => flappy::FlappyInput::Other,
    }
}

fn snake_input(code: KeyCode) -> snake::SnakeInput {
    match code {
        KeyCode::Up => snake::SnakeInput::Up,
        KeyCode::Down => snake::SnakeInput::Down,
        KeyCode::Left => snake::SnakeInput::Left,
        KeyCode::Right => snake::SnakeInput::Right,
        KeyCode::Char(' ') => snake::SnakeInput::Start,
        KeyCode::Esc => snake::SnakeInput::Forfeit,
        _ => snake::SnakeInput::Other,
    }
}

fn lander_input(code: KeyCode) -> lander::LanderInput {
    match code {
        KeyCode::Char(' ') | KeyCode::Up => lander::LanderInput::ThrustUp,
        KeyCode::Left => lander::LanderInput::ThrustLeft,
        KeyCode::Right => lander::LanderInput::ThrustRight,
        KeyCode::Esc => lander::LanderInput::Forfeit,
        _ => lander::LanderInput::Other,
    }
}

fn whack_input(code: KeyCode) -> whack::WhackInput {
    if let Some(pad) = lane_for(code) {
        return whack::WhackInput::Pad(pad);
    }
    match code {
        KeyCode::Char(' ') => whack::WhackInput::Start,
        KeyCode::Esc => whack::WhackInput::Forfeit,
        _ => whack::WhackInput::Other,
    }
}

/// Route a keypress to the active game.
pub fn handle_game_key<R: Rng>(code: KeyCode, game: &mut ActiveGame, rng: &mut R) {
    match game {
        ActiveGame::Cadence(g) => cadence::process_input(g, cadence_input(code)),
        ActiveGame::Flappy(g) => flappy::process_input(g, flappy_input(code)),
        ActiveGame::Snake(g) => snake::process_input(g, snake_input(code)),
        ActiveGame::Lander(g) => lander::process_input(g, lander_input(code)),
        ActiveGame::Whack(g) => whack::process_input(g, whack_input(code), rng),
    }
}

/// Route a keypress to the menu.
pub fn handle_menu_key(code: KeyCode, menu: &mut MenuState) -> Option<MenuAction> {
    let input = match code {
        KeyCode::Up => MenuInput::Up,
        KeyCode::Down => MenuInput::Down,
        KeyCode::Enter | KeyCode::Char(' ') => MenuInput::Select,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => MenuInput::Back,
        _ => MenuInput::Other,
    };
    menu::process_input(menu, input)
}
