//! Whack game logic: trial scheduling and strike judgment.

use rand::Rng;

use super::types::*;

/// UI-agnostic input actions for Whack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhackInput {
    /// Strike a pad (Left/Down/Right arrows).
    Pad(usize),
    /// Start the round (Space).
    Start,
    /// Forfeit (Esc).
    Forfeit,
    /// Any other key (cancels forfeit_pending).
    Other,
}

/// Process player input.
///
/// A pad strike is only judged while a mole is up; the first strike consumes
/// the trial either way, matching the one-response-per-trial original.
pub fn process_input<R: Rng>(game: &mut WhackGame, input: WhackInput, rng: &mut R) {
    if game.game_result.is_some() {
        return;
    }

    if game.waiting_to_start {
        if matches!(input, WhackInput::Start) {
            game.waiting_to_start = false;
        }
        return;
    }

    if game.forfeit_pending {
        match input {
            WhackInput::Forfeit => game.game_result = Some(WhackResult::Loss),
            _ => game.forfeit_pending = false,
        }
        return;
    }

    match input {
        WhackInput::Pad(struck) => {
            if let WhackPhase::Mole { pad, .. } = game.phase {
                if struck == pad {
                    game.score += 1;
                    game.phase = WhackPhase::Feedback {
                        pad,
                        remaining_ms: game.feedback_ms,
                    };
                } else if struck < PADS {
                    advance_trial(game, rng);
                }
            }
        }
        WhackInput::Forfeit => game.forfeit_pending = true,
        WhackInput::Start | WhackInput::Other => {}
    }
}

/// Advance the trial clock. Called from the main game loop.
///
/// `dt_ms` is milliseconds since last call. Returns true if the game state
/// changed.
pub fn tick_whack<R: Rng>(game: &mut WhackGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.game_result.is_some() {
        return false;
    }

    if game.waiting_to_start || game.forfeit_pending {
        return false;
    }

    // Clamp dt to 100ms max so a lag spike cannot swallow a whole trial
    let dt_ms = dt_ms.min(100);

    game.accumulated_time_ms += dt_ms;
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step_trial(game, rng);
        changed = true;

        if game.game_result.is_some() {
            break;
        }
    }

    changed
}

/// Single clock step (16ms tick).
fn step_trial<R: Rng>(game: &mut WhackGame, rng: &mut R) {
    game.tick_count += 1;

    match &mut game.phase {
        WhackPhase::Blank { remaining_ms } => {
            *remaining_ms = remaining_ms.saturating_sub(PHYSICS_TICK_MS);
            if *remaining_ms == 0 {
                let pad = rng.gen_range(0..PADS);
                let (min, max) = game.presentation_range_ms;
                game.phase = WhackPhase::Mole {
                    pad,
                    remaining_ms: rng.gen_range(min..=max),
                };
            }
        }
        WhackPhase::Mole { remaining_ms, .. } => {
            *remaining_ms = remaining_ms.saturating_sub(PHYSICS_TICK_MS);
            if *remaining_ms == 0 {
                // The window lapsed: a silent miss
                advance_trial(game, rng);
            }
        }
        WhackPhase::Feedback { remaining_ms, .. } => {
            *remaining_ms = remaining_ms.saturating_sub(PHYSICS_TICK_MS);
            if *remaining_ms == 0 {
                advance_trial(game, rng);
            }
        }
    }
}

/// Close the current trial and either finish the round or set up the next
/// blank interval.
fn advance_trial<R: Rng>(game: &mut WhackGame, rng: &mut R) {
    game.trials_done += 1;
    if game.trials_done >= game.trials_total {
        game.game_result = Some(if game.score >= game.target_score {
            WhackResult::Win
        } else {
            WhackResult::Loss
        });
        return;
    }
    let (min, max) = game.blank_range_ms;
    game.phase = WhackPhase::Blank {
        remaining_ms: rng.gen_range(min..=max),
    };
}
