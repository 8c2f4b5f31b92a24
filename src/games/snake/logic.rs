//! Snake game logic: fixed-cadence movement, growth, collision checks.

use rand::Rng;

use super::types::*;

/// UI-agnostic input actions for Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Up,
    Down,
    Left,
    Right,
    /// Start the game (Space).
    Start,
    /// Forfeit (Esc).
    Forfeit,
    /// Any other key (cancels forfeit_pending).
    Other,
}

/// Process player input.
///
/// Direction keys take effect immediately; steering straight back into the
/// neck is a legitimate way to lose.
pub fn process_input(game: &mut SnakeGame, input: SnakeInput) {
    if game.game_result.is_some() {
        return;
    }

    if game.waiting_to_start {
        if matches!(input, SnakeInput::Start) {
            game.waiting_to_start = false;
        }
        return;
    }

    if game.forfeit_pending {
        match input {
            SnakeInput::Forfeit => game.game_result = Some(SnakeResult::Loss),
            _ => game.forfeit_pending = false,
        }
        return;
    }

    match input {
        SnakeInput::Up => game.direction = Direction::Up,
        SnakeInput::Down => game.direction = Direction::Down,
        SnakeInput::Left => game.direction = Direction::Left,
        SnakeInput::Right => game.direction = Direction::Right,
        SnakeInput::Forfeit => game.forfeit_pending = true,
        SnakeInput::Start | SnakeInput::Other => {}
    }
}

/// Advance the snake. Called from the main game loop.
///
/// `dt_ms` is milliseconds since last call; movement happens in fixed
/// `step_interval_ms` steps. Returns true if the game state changed.
pub fn tick_snake<R: Rng>(game: &mut SnakeGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.game_result.is_some() {
        return false;
    }

    if game.waiting_to_start || game.forfeit_pending {
        return false;
    }

    // Clamp dt to 500ms max to avoid a burst of steps after pause/lag
    let dt_ms = dt_ms.min(500);

    game.accumulated_time_ms += dt_ms;
    let mut changed = false;

    while game.accumulated_time_ms >= game.step_interval_ms {
        game.accumulated_time_ms -= game.step_interval_ms;
        step_snake(game, rng);
        changed = true;

        if game.game_result.is_some() {
            break;
        }
    }

    changed
}

/// Single movement step: grow a new head, trim the tail unless an apple was
/// eaten, then check the collisions.
fn step_snake<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    game.tick_count += 1;

    let (dx, dy) = game.direction.delta();
    let head = game.segments[0];
    let new_head = Cell {
        x: head.x + dx,
        y: head.y + dy,
    };
    game.segments.push_front(new_head);

    let ate = new_head == game.apple;
    if !ate {
        game.segments.pop_back();
    }

    if game.hit_the_wall() || game.bit_itself() {
        game.game_result = Some(SnakeResult::Loss);
        return;
    }

    if ate {
        game.score += 1;
        if game.score >= game.target_score {
            game.game_result = Some(SnakeResult::Win);
            return;
        }
        game.apple = spawn_apple(game, rng);
    }
}
