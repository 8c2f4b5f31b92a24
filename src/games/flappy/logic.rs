//! Flappy game logic: gravity, gate scrolling, collision, scoring.

use rand::Rng;

use super::types::*;

/// UI-agnostic input actions for Flappy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Flap (Space/Up/Enter).
    Flap,
    /// Forfeit (Esc).
    Forfeit,
    /// Any other key (cancels forfeit_pending).
    Other,
}

/// Process player input.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) {
    if game.game_result.is_some() {
        return;
    }

    match input {
        FlappyInput::Flap => {
            if game.forfeit_pending {
                game.forfeit_pending = false;
                return;
            }
            // The first flap doubles as the start signal.
            game.waiting_to_start = false;
            game.bird_vel = game.flap_speed;
            game.flap_ticks = FLAP_ANIM_TICKS;
        }
        FlappyInput::Forfeit => {
            if game.forfeit_pending {
                game.game_result = Some(FlappyResult::Loss);
            } else {
                game.forfeit_pending = true;
            }
        }
        FlappyInput::Other => {
            if game.forfeit_pending {
                game.forfeit_pending = false;
            }
        }
    }
}

/// Advance the flight. Called from the main game loop.
///
/// `dt_ms` is milliseconds since last call. Internally steps physics in
/// 16ms increments (~60 FPS). Returns true if the game state changed.
pub fn tick_flappy<R: Rng>(game: &mut FlappyGame, dt_ms: u64, rng: &mut R) -> bool {
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
        step_flight(game, rng);
        changed = true;

        if game.game_result.is_some() {
            break;
        }
    }

    changed
}

/// Single physics step (16ms tick).
fn step_flight<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    game.tick_count += 1;
    let dt = PHYSICS_TICK_MS as f64 / 1000.0;

    // Bird kinematics
    game.bird_vel += game.gravity * dt;
    if game.bird_vel > game.terminal_velocity {
        game.bird_vel = game.terminal_velocity;
    }
    game.bird_row += game.bird_vel * dt;

    // Ceiling is a clamp, not a crash
    if game.bird_row < BIRD_HALF {
        game.bird_row = BIRD_HALF;
        game.bird_vel = 0.0;
    }

    // The ground is fatal
    if game.bird_row >= FIELD_ROWS - BIRD_HALF {
        game.game_result = Some(FlappyResult::Loss);
        return;
    }

    if game.flap_ticks > 0 {
        game.flap_ticks -= 1;
    }

    // Scroll gates left
    for gate in game.gates.iter_mut() {
        gate.x -= game.scroll_speed * dt;
    }

    // Retire gates past the left edge. The front is the oldest and
    // left-most, so a looped prefix-trim is sufficient.
    while game.gates.front().map_or(false, |g| g.is_offscreen()) {
        game.gates.pop_front();
    }

    // A gate scores once its trailing edge clears the bird
    for gate in game.gates.iter_mut() {
        if !gate.scored && gate.x + GATE_HALF_COLS < BIRD_COL - BIRD_HALF {
            gate.scored = true;
            game.score += 1;
        }
    }

    if game.score >= game.target_score {
        game.game_result = Some(FlappyResult::Win);
        return;
    }

    // Spawn countdown
    game.spawn_countdown_ms = game.spawn_countdown_ms.saturating_sub(PHYSICS_TICK_MS);
    if game.spawn_countdown_ms == 0 {
        game.gates.push_back(spawn_gate(game.difficulty, rng));
        game.spawn_countdown_ms = rng.gen_range(game.spawn_range_ms.0..=game.spawn_range_ms.1);
    }

    check_collisions(game);
}

/// Kill the bird if it overlaps a gate wall.
fn check_collisions(game: &mut FlappyGame) {
    for gate in &game.gates {
        if (gate.x - BIRD_COL).abs() >= GATE_HALF_COLS + BIRD_HALF {
            continue;
        }
        let above_opening = game.bird_row - BIRD_HALF < gate.opening_top;
        let below_opening = game.bird_row + BIRD_HALF > gate.opening_bottom;
        if above_opening || below_opening {
            game.game_result = Some(FlappyResult::Loss);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(31)
    }

    fn started_game(difficulty: FlappyDifficulty) -> FlappyGame {
        let mut rng = rng();
        let mut game = FlappyGame::new(difficulty, &mut rng);
        game.waiting_to_start = false;
        // Push the pre-spawned gate out of the way for bird-only tests
        game.gates.clear();
        game.spawn_countdown_ms = 60_000;
        game
    }

    /// A gate centered on the bird column whose opening surrounds `row`.
    fn gate_at_bird(row: f64) -> Gate {
        Gate {
            x: BIRD_COL,
            opening_top: row - 3.0,
            opening_bottom: row + 3.0,
            scored: false,
        }
    }

    #[test]
    fn test_first_flap_starts_the_game() {
        let mut rng = rng();
        let mut game = FlappyGame::new(FlappyDifficulty::Novice, &mut rng);
        assert!(game.waiting_to_start);

        process_input(&mut game, FlappyInput::Flap);

        assert!(!game.waiting_to_start);
        assert!(game.bird_vel < 0.0, "flap throws the bird upward");
        assert_eq!(game.flap_ticks, FLAP_ANIM_TICKS);
    }

    #[test]
    fn test_waiting_blocks_physics() {
        let mut rng = rng();
        let mut game = FlappyGame::new(FlappyDifficulty::Novice, &mut rng);
        let row = game.bird_row;

        assert!(!tick_flappy(&mut game, 1000, &mut rng));
        assert!((game.bird_row - row).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gravity_pulls_bird_down() {
        let mut game = started_game(FlappyDifficulty::Novice);
        let row = game.bird_row;
        let mut rng = rng();

        tick_flappy(&mut game, 200, &mut rng);

        assert!(game.bird_row > row);
        assert!(game.bird_vel > 0.0);
    }

    #[test]
    fn test_terminal_velocity_cap() {
        let mut game = started_game(FlappyDifficulty::Novice);
        game.bird_vel = 100.0;
        let mut rng = rng();

        tick_flappy(&mut game, PHYSICS_TICK_MS, &mut rng);

        assert!(game.bird_vel <= game.terminal_velocity + 1e-9);
    }

    #[test]
    fn test_ceiling_clamps_without_killing() {
        let mut game = started_game(FlappyDifficulty::Novice);
        game.bird_row = BIRD_HALF + 0.1;
        game.bird_vel = -50.0;
        let mut rng = rng();

        tick_flappy(&mut game, PHYSICS_TICK_MS, &mut rng);

        assert!(game.bird_row >= BIRD_HALF);
        assert!(game.game_result.is_none());
    }

    #[test]
    fn test_ground_kills() {
        let mut game = started_game(FlappyDifficulty::Novice);
        game.bird_row = FIELD_ROWS - BIRD_HALF - 0.05;
        game.bird_vel = 10.0;
        let mut rng = rng();

        tick_flappy(&mut game, PHYSICS_TICK_MS, &mut rng);

        assert_eq!(game.game_result, Some(FlappyResult::Loss));
    }

    #[test]
    fn test_gates_scroll_left() {
        let mut game = started_game(FlappyDifficulty::Novice);
        game.gates.push_back(Gate {
            x: 40.0,
            opening_top: 8.0,
            opening_bottom: 16.0,
            scored: false,
        });
        let mut rng = rng();

        tick_flappy(&mut game, 100, &mut rng);

        assert!(game.gates[0].x < 40.0);
    }

    #[test]
    fn test_prefix_trim_removes_all_leading_offscreen_gates() {
        let mut game = started_game(FlappyDifficulty::Novice);
        for _ in 0..3 {
            game.gates.push_back(Gate {
                x: -GATE_HALF_COLS - 1.0,
                opening_top: 8.0,
                opening_bottom: 16.0,
                scored: true,
            });
        }
        game.gates.push_back(Gate {
            x: 30.0,
            opening_top: 8.0,
            opening_bottom: 16.0,
            scored: false,
        });
        let mut rng = rng();

        tick_flappy(&mut game, PHYSICS_TICK_MS, &mut rng);

        assert_eq!(game.gates.len(), 1);
        assert!(game.gates[0].x > 0.0);
    }

    #[test]
    fn test_gate_scores_once() {
        let mut game = started_game(FlappyDifficulty::Novice);
        game.bird_row = 12.0;
        game.gates.push_back(Gate {
            x: BIRD_COL - GATE_HALF_COLS - BIRD_HALF - 0.1,
            opening_top: 8.0,
            opening_bottom: 16.0,
            scored: false,
        });
        let mut rng = rng();

        tick_flappy(&mut game, PHYSICS_TICK_MS, &mut rng);
        assert_eq!(game.score, 1);
        assert!(game.gates[0].scored);

        tick_flappy(&mut game, PHYSICS_TICK_MS, &mut rng);
        assert_eq!(game.score, 1, "a gate never scores twice");
    }

    #[test]
    fn test_win_at_target_score() {
        let mut game = started_game(FlappyDifficulty::Novice);
        game.bird_row = 12.0;
        game.score = game.target_score - 1;
        game.gates.push_back(Gate {
            x: BIRD_COL - GATE_HALF_COLS - BIRD_HALF - 0.1,
            opening_top: 8.0,
            opening_bottom: 16.0,
            scored: false,
        });
        let mut rng = rng();

        tick_flappy(&mut game, PHYSICS_TICK_MS, &mut rng);

        assert_eq!(game.game_result, Some(FlappyResult::Win));
    }

    #[test]
    fn test_collision_with_wall_kills() {
        let mut game = started_game(FlappyDifficulty::Novice);
        game.bird_row = 3.0;
        let mut gate = gate_at_bird(12.0); // opening 9..15, bird at 3 hits the top wall
        gate.x = BIRD_COL;
        game.gates.push_back(gate);
        let mut rng = rng();

        tick_flappy(&mut game, PHYSICS_TICK_MS, &mut rng);

        assert_eq!(game.game_result, Some(FlappyResult::Loss));
    }

    #[test]
    fn test_no_collision_inside_opening() {
        let mut game = started_game(FlappyDifficulty::Novice);
        game.bird_row = 12.0;
        game.bird_vel = 0.0;
        game.gates.push_back(gate_at_bird(12.0));
        let mut rng = rng();

        tick_flappy(&mut game, PHYSICS_TICK_MS, &mut rng);

        assert!(game.game_result.is_none());
    }

    #[test]
    fn test_spawn_countdown_resets_within_range() {
        let mut game = started_game(FlappyDifficulty::Novice);
        game.bird_row = 5.0;
        game.spawn_countdown_ms = PHYSICS_TICK_MS;
        let mut rng = rng();

        tick_flappy(&mut game, PHYSICS_TICK_MS, &mut rng);

        assert_eq!(game.gates.len(), 1);
        let (min, max) = game.spawn_range_ms;
        assert!((min..=max).contains(&game.spawn_countdown_ms));
    }

    #[test]
    fn test_forfeit_flow() {
        let mut game = started_game(FlappyDifficulty::Novice);

        process_input(&mut game, FlappyInput::Forfeit);
        assert!(game.forfeit_pending);
        assert!(game.game_result.is_none());

        process_input(&mut game, FlappyInput::Forfeit);
        assert_eq!(game.game_result, Some(FlappyResult::Loss));
    }

    #[test]
    fn test_forfeit_cancelled_by_flap_without_flapping() {
        let mut game = started_game(FlappyDifficulty::Novice);
        game.bird_vel = 1.0;

        process_input(&mut game, FlappyInput::Forfeit);
        process_input(&mut game, FlappyInput::Flap);

        assert!(!game.forfeit_pending);
        assert!(
            (game.bird_vel - 1.0).abs() < f64::EPSILON,
            "cancelling forfeit must not flap"
        );
    }

    #[test]
    fn test_input_ignored_when_game_over() {
        let mut game = started_game(FlappyDifficulty::Novice);
        game.game_result = Some(FlappyResult::Loss);
        game.bird_vel = 0.0;

        process_input(&mut game, FlappyInput::Flap);
        assert!((game.bird_vel - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dt_clamped() {
        let mut game = started_game(FlappyDifficulty::Novice);
        let mut rng = rng();

        tick_flappy(&mut game, 30_000, &mut rng);

        assert!(game.tick_count <= 7);
    }
}
