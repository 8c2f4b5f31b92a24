//! Cadence game logic: note scheduling, response scoring, staircase updates.

use rand::Rng;

use super::types::*;

/// UI-agnostic input actions for Cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CadenceInput {
    /// Strike a lane (Left/Down/Right arrows).
    Lane(usize),
    /// Start the round (Space).
    Start,
    /// Forfeit (Esc).
    Forfeit,
    /// Any other key (cancels forfeit_pending).
    Other,
}

/// Process player input.
pub fn process_input(game: &mut CadenceGame, input: CadenceInput) {
    if game.game_result.is_some() {
        return; // Game over — any key dismisses (handled by input.rs)
    }

    // Waiting screen: Space starts the round
    if game.waiting_to_start {
        if matches!(input, CadenceInput::Start) {
            game.waiting_to_start = false;
        }
        return;
    }

    match input {
        CadenceInput::Lane(lane) => {
            if game.forfeit_pending {
                game.forfeit_pending = false;
            } else if lane < LANES {
                respond(game, lane);
            }
        }
        CadenceInput::Start => {
            if game.forfeit_pending {
                game.forfeit_pending = false;
            }
        }
        CadenceInput::Forfeit => {
            if game.forfeit_pending {
                game.game_result = Some(CadenceResult::Loss); // Confirm forfeit
            } else {
                game.forfeit_pending = true;
            }
        }
        CadenceInput::Other => {
            if game.forfeit_pending {
                game.forfeit_pending = false;
            }
        }
    }
}

/// Judge a lane response: first live, un-scored note in that lane inside the
/// scoring band wins. Returns the points awarded (0 on a miss).
///
/// Every response moves the staircase, and the new speed is written back to
/// all live notes immediately.
pub fn respond(game: &mut CadenceGame, lane: usize) -> u32 {
    let mut awarded = 0;
    // Front-to-back scan: the front is the oldest note, closest to the line.
    for target in game.targets.iter_mut() {
        if target.lane != lane {
            continue;
        }
        if let Some(points) = target.check_hit(game.finish_row) {
            awarded = points;
            break;
        }
    }

    let correct = awarded > 0;
    if correct {
        game.hits += 1;
        game.score += awarded;
    } else {
        game.misses += 1;
    }

    let multiplier = game.staircase.record(correct);
    let speed = game.base_speed * multiplier;
    for target in game.targets.iter_mut() {
        target.speed = speed;
    }

    game.last_judgment = Some(Judgment {
        lane,
        points: awarded,
    });
    game.judgment_ticks = FEEDBACK_TICKS;

    if game.score >= game.target_score {
        game.game_result = Some(CadenceResult::Win);
    }

    awarded
}

/// Advance the Cadence round. Called from the main game loop.
///
/// `dt_ms` is milliseconds since last call. Internally steps physics in
/// 16ms increments (~60 FPS). Returns true if the game state changed.
pub fn tick_cadence<R: Rng>(game: &mut CadenceGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.game_result.is_some() {
        return false;
    }

    // Pause physics while waiting to start or during forfeit
    if game.waiting_to_start || game.forfeit_pending {
        return false;
    }

    // Clamp dt to 100ms max to prevent physics explosion after pause/lag
    let dt_ms = dt_ms.min(100);

    game.accumulated_time_ms += dt_ms;
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step_round(game, rng);
        changed = true;

        if game.game_result.is_some() {
            break;
        }
    }

    changed
}

/// Single physics step (16ms tick).
fn step_round<R: Rng>(game: &mut CadenceGame, rng: &mut R) {
    game.tick_count += 1;
    let dt = PHYSICS_TICK_MS as f64 / 1000.0;

    // Advance every live note
    for target in game.targets.iter_mut() {
        target.advance(dt);
    }

    // Retire fallen notes from the front. The front is always the oldest
    // and therefore the lowest, so trimming the prefix is sufficient — but
    // it must loop: several notes can leave the field in one tick.
    while game.targets.front().map_or(false, |t| t.is_offscreen()) {
        game.targets.pop_front();
    }

    // Spawn countdown
    game.spawn_countdown_ms = game.spawn_countdown_ms.saturating_sub(PHYSICS_TICK_MS);
    if game.spawn_countdown_ms == 0 {
        let lane = game.lane_bag.draw(rng);
        game.targets.push_back(Target::new(lane, game.current_speed()));
        game.spawn_countdown_ms = super::generators::draw_spawn_gap(game.spawn_range_ms, rng);
    }

    // Judgment flash decay
    if game.judgment_ticks > 0 {
        game.judgment_ticks -= 1;
        if game.judgment_ticks == 0 {
            game.last_judgment = None;
        }
    }

    // Round clock
    game.round_remaining_ms = game.round_remaining_ms.saturating_sub(PHYSICS_TICK_MS);
    if game.round_remaining_ms == 0 {
        game.game_result = Some(if game.score >= game.target_score {
            CadenceResult::Win
        } else {
            CadenceResult::Loss
        });
    }
}
