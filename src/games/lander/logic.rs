//! Lander game logic: thrust, fuel, gravity, touchdown judgment.

use super::types::*;

/// UI-agnostic input actions for Lander.
///
/// Terminals only deliver key presses, so thrusters use impulse flags that
/// the tick function decays after `INPUT_HOLD_TICKS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanderInput {
    /// Main engine (Space/Up).
    ThrustUp,
    /// Left thruster, pushes the ship left (Left arrow).
    ThrustLeft,
    /// Right thruster, pushes the ship right (Right arrow).
    ThrustRight,
    /// Forfeit (Esc).
    Forfeit,
    /// Any other key (cancels forfeit_pending).
    Other,
}

/// Process player input.
pub fn process_input(game: &mut LanderGame, input: LanderInput) {
    if game.game_result.is_some() {
        return;
    }

    // Waiting screen: the main engine starts the descent
    if game.waiting_to_start {
        if matches!(input, LanderInput::ThrustUp) {
            game.waiting_to_start = false;
        }
        return;
    }

    if game.forfeit_pending {
        match input {
            LanderInput::Forfeit => game.game_result = Some(LanderResult::Loss),
            _ => game.forfeit_pending = false,
        }
        return;
    }

    match input {
        LanderInput::ThrustUp => {
            game.thrust_up = true;
            game.up_hold_ticks = INPUT_HOLD_TICKS;
        }
        LanderInput::ThrustLeft => {
            game.thrust_left = true;
            game.left_hold_ticks = INPUT_HOLD_TICKS;
        }
        LanderInput::ThrustRight => {
            game.thrust_right = true;
            game.right_hold_ticks = INPUT_HOLD_TICKS;
        }
        LanderInput::Forfeit => game.forfeit_pending = true,
        LanderInput::Other => {}
    }
}

/// Advance the descent. Called from the main game loop.
///
/// `dt_ms` is milliseconds since last call. Internally steps physics in
/// 16ms increments (~60 FPS). Returns true if the game state changed.
pub fn tick_lander(game: &mut LanderGame, dt_ms: u64) -> bool {
    if game.game_result.is_some() {
        return false;
    }

    if game.waiting_to_start || game.forfeit_pending {
        return false;
    }

    // Clamp dt to 100ms max to prevent physics explosion after pause/lag
    let dt_ms = dt_ms.min(100);

    game.accumulated_time_ms += dt_ms;
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step_descent(game);
        changed = true;

        if game.game_result.is_some() {
            break;
        }
    }

    changed
}

/// Single physics step (16ms tick).
fn step_descent(game: &mut LanderGame) {
    game.tick_count += 1;
    let dt = PHYSICS_TICK_MS as f64 / 1000.0;

    // Thrusters, while fuel remains
    let mut burning = 0u32;
    if game.fuel > 0.0 {
        if game.thrust_up {
            game.vy -= game.up_thrust() * dt;
            burning += 1;
        }
        if game.thrust_left {
            game.vx -= SIDE_THRUST * dt;
            burning += 1;
        }
        if game.thrust_right {
            game.vx += SIDE_THRUST * dt;
            burning += 1;
        }
    }
    if burning > 0 {
        game.fuel -= FUEL_BURN_RATE * dt * burning as f64;
        if game.fuel < 0.0 {
            game.fuel = 0.0;
        }
        game.flame_ticks = FLAME_ANIM_TICKS;
    }

    if game.flame_ticks > 0 {
        game.flame_ticks -= 1;
    }

    // Decay hold timers, dropping the flags when they run out
    if game.up_hold_ticks > 0 {
        game.up_hold_ticks -= 1;
        if game.up_hold_ticks == 0 {
            game.thrust_up = false;
        }
    }
    if game.left_hold_ticks > 0 {
        game.left_hold_ticks -= 1;
        if game.left_hold_ticks == 0 {
            game.thrust_left = false;
        }
    }
    if game.right_hold_ticks > 0 {
        game.right_hold_ticks -= 1;
        if game.right_hold_ticks == 0 {
            game.thrust_right = false;
        }
    }

    // Gravity, then integrate
    game.vy += game.gravity * dt;
    game.x += game.vx * dt;
    game.y += game.vy * dt;

    // Side walls stop the ship
    if game.x < SHIP_HALF {
        game.x = SHIP_HALF;
        game.vx = 0.0;
    } else if game.x > FIELD_COLS - SHIP_HALF {
        game.x = FIELD_COLS - SHIP_HALF;
        game.vx = 0.0;
    }

    // Ceiling clamp
    if game.y < SHIP_HALF {
        game.y = SHIP_HALF;
        game.vy = 0.0;
    }

    // Touchdown
    if game.y + SHIP_HALF >= GROUND_ROW {
        let gentle = game.vy <= game.safe_vy && game.vx.abs() <= game.safe_vx;
        game.game_result = Some(if game.over_pad() && gentle {
            LanderResult::Win
        } else {
            LanderResult::Loss
        });
        game.y = GROUND_ROW - SHIP_HALF;
        game.vx = 0.0;
        game.vy = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn started_game(difficulty: LanderDifficulty) -> LanderGame {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut game = LanderGame::new(difficulty, &mut rng);
        game.waiting_to_start = false;
        game
    }

    /// Park the ship just above the pad center with the given velocities.
    fn on_final_approach(game: &mut LanderGame, vx: f64, vy: f64) {
        game.x = (game.pad_left + game.pad_right) / 2.0;
        game.y = GROUND_ROW - SHIP_HALF - 0.01;
        game.vx = vx;
        game.vy = vy;
    }

    #[test]
    fn test_waiting_to_start_gates() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut game = LanderGame::new(LanderDifficulty::Novice, &mut rng);

        process_input(&mut game, LanderInput::ThrustLeft);
        assert!(game.waiting_to_start);
        assert!(!tick_lander(&mut game, 1000));

        process_input(&mut game, LanderInput::ThrustUp);
        assert!(!game.waiting_to_start);
    }

    #[test]
    fn test_gravity_accelerates_descent() {
        let mut game = started_game(LanderDifficulty::Novice);
        let y0 = game.y;

        tick_lander(&mut game, 200);

        assert!(game.vy > 0.0);
        assert!(game.y > y0);
    }

    #[test]
    fn test_main_engine_counters_gravity() {
        let mut game = started_game(LanderDifficulty::Novice);
        process_input(&mut game, LanderInput::ThrustUp);

        for _ in 0..10 {
            tick_lander(&mut game, PHYSICS_TICK_MS);
            if game.game_result.is_some() {
                break;
            }
        }

        // Up thrust is 2x gravity, so the net velocity goes negative
        assert!(game.vy < 0.0, "full burn should climb, vy={}", game.vy);
    }

    #[test]
    fn test_side_thrusters_push_sideways() {
        let mut game = started_game(LanderDifficulty::Novice);
        process_input(&mut game, LanderInput::ThrustLeft);
        tick_lander(&mut game, PHYSICS_TICK_MS);
        assert!(game.vx < 0.0);

        let mut game = started_game(LanderDifficulty::Novice);
        process_input(&mut game, LanderInput::ThrustRight);
        tick_lander(&mut game, PHYSICS_TICK_MS);
        assert!(game.vx > 0.0);
    }

    #[test]
    fn test_thrust_consumes_fuel() {
        let mut game = started_game(LanderDifficulty::Novice);
        let fuel0 = game.fuel;
        process_input(&mut game, LanderInput::ThrustUp);

        tick_lander(&mut game, PHYSICS_TICK_MS);

        assert!(game.fuel < fuel0);
    }

    #[test]
    fn test_two_thrusters_burn_double() {
        let mut one = started_game(LanderDifficulty::Novice);
        one.thrust_up = true;
        one.up_hold_ticks = INPUT_HOLD_TICKS;
        tick_lander(&mut one, PHYSICS_TICK_MS);
        let single_burn = one.max_fuel - one.fuel;

        let mut two = started_game(LanderDifficulty::Novice);
        two.thrust_up = true;
        two.up_hold_ticks = INPUT_HOLD_TICKS;
        two.thrust_left = true;
        two.left_hold_ticks = INPUT_HOLD_TICKS;
        tick_lander(&mut two, PHYSICS_TICK_MS);
        let double_burn = two.max_fuel - two.fuel;

        assert!((double_burn - 2.0 * single_burn).abs() < 1e-9);
    }

    #[test]
    fn test_empty_tank_leaves_gravity_only() {
        let mut game = started_game(LanderDifficulty::Novice);
        game.fuel = 0.0;
        game.thrust_up = true;
        game.up_hold_ticks = INPUT_HOLD_TICKS;
        game.vy = 0.0;

        tick_lander(&mut game, PHYSICS_TICK_MS);

        let dt = PHYSICS_TICK_MS as f64 / 1000.0;
        assert!(
            (game.vy - game.gravity * dt).abs() < 1e-9,
            "no fuel, no thrust: vy={}",
            game.vy
        );
    }

    #[test]
    fn test_fuel_never_negative() {
        let mut game = started_game(LanderDifficulty::Novice);
        game.fuel = 0.05;
        game.thrust_up = true;
        game.up_hold_ticks = 100;

        for _ in 0..20 {
            tick_lander(&mut game, PHYSICS_TICK_MS);
            if game.game_result.is_some() {
                break;
            }
        }

        assert!(game.fuel >= 0.0);
    }

    #[test]
    fn test_hold_ticks_decay_clears_thrust() {
        let mut game = started_game(LanderDifficulty::Novice);
        process_input(&mut game, LanderInput::ThrustUp);
        assert!(game.thrust_up);

        tick_lander(&mut game, INPUT_HOLD_TICKS as u64 * PHYSICS_TICK_MS);

        assert!(!game.thrust_up);
    }

    #[test]
    fn test_side_walls_stop_the_ship() {
        let mut game = started_game(LanderDifficulty::Novice);
        game.x = SHIP_HALF + 0.01;
        game.vx = -20.0;

        tick_lander(&mut game, PHYSICS_TICK_MS);

        assert!(game.x >= SHIP_HALF);
        assert!((game.vx - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gentle_touchdown_on_pad_wins() {
        let mut game = started_game(LanderDifficulty::Novice);
        on_final_approach(&mut game, 0.0, 1.0);

        tick_lander(&mut game, PHYSICS_TICK_MS);

        assert_eq!(game.game_result, Some(LanderResult::Win));
        assert!((game.vy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fast_touchdown_crashes() {
        let mut game = started_game(LanderDifficulty::Novice);
        let vy = game.safe_vy + 1.0;
        on_final_approach(&mut game, 0.0, vy);

        tick_lander(&mut game, PHYSICS_TICK_MS);

        assert_eq!(game.game_result, Some(LanderResult::Loss));
    }

    #[test]
    fn test_sideways_drift_crashes() {
        let mut game = started_game(LanderDifficulty::Novice);
        let drift = game.safe_vx + 1.0;
        on_final_approach(&mut game, drift, 1.0);

        tick_lander(&mut game, PHYSICS_TICK_MS);

        assert_eq!(game.game_result, Some(LanderResult::Loss));
    }

    #[test]
    fn test_touchdown_off_pad_crashes() {
        let mut game = started_game(LanderDifficulty::Novice);
        on_final_approach(&mut game, 0.0, 0.5);
        // Move off the pad, staying inside the walls
        game.x = if game.pad_left > FIELD_COLS / 2.0 {
            game.pad_left - 2.0
        } else {
            game.pad_right + 2.0
        };

        tick_lander(&mut game, PHYSICS_TICK_MS);

        assert_eq!(game.game_result, Some(LanderResult::Loss));
    }

    #[test]
    fn test_forfeit_flow() {
        let mut game = started_game(LanderDifficulty::Novice);

        process_input(&mut game, LanderInput::Forfeit);
        assert!(game.forfeit_pending);
        assert!(!tick_lander(&mut game, 1000));

        process_input(&mut game, LanderInput::Forfeit);
        assert_eq!(game.game_result, Some(LanderResult::Loss));
    }

    #[test]
    fn test_forfeit_cancelled_without_thrusting() {
        let mut game = started_game(LanderDifficulty::Novice);

        process_input(&mut game, LanderInput::Forfeit);
        process_input(&mut game, LanderInput::ThrustUp);

        assert!(!game.forfeit_pending);
        assert!(!game.thrust_up, "the cancelling key must not fire the engine");
    }

    #[test]
    fn test_input_ignored_when_game_over() {
        let mut game = started_game(LanderDifficulty::Novice);
        game.game_result = Some(LanderResult::Win);

        process_input(&mut game, LanderInput::ThrustUp);
        assert!(!game.thrust_up);
    }

    #[test]
    fn test_dt_clamped() {
        let mut game = started_game(LanderDifficulty::Novice);

        tick_lander(&mut game, 30_000);

        assert!(game.tick_count <= 7);
    }

    #[test]
    fn test_flame_animation_follows_burn() {
        let mut game = started_game(LanderDifficulty::Novice);
        game.thrust_up = true;
        game.up_hold_ticks = INPUT_HOLD_TICKS;

        tick_lander(&mut game, PHYSICS_TICK_MS);

        assert_eq!(game.flame_ticks, FLAME_ANIM_TICKS - 1);
    }
}
