//! Falling-note timed-response task ("Cadence") data structures.
//!
//! Notes fall down three lanes toward a finish line; the player strikes a
//! lane key as a note crosses the line. Accuracy is scored by distance from
//! the line, and a 3-up/1-down staircase adapts the fall speed.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::generators::{draw_spawn_gap, LaneBag};
use super::staircase::Staircase;
use crate::config::CadenceSettings;

/// Number of response lanes.
pub const LANES: usize = 3;

/// Height of the playing field in rows.
pub const FIELD_ROWS: f64 = 24.0;

/// Half-height of a note in rows; also the half-width of the scoring band.
pub const TARGET_HALF_ROWS: f64 = 1.5;

/// Physics tick interval in milliseconds (~60 FPS).
pub const PHYSICS_TICK_MS: u64 = 16;

/// Physics ticks a hit/miss judgment stays on screen (~300ms).
pub const FEEDBACK_TICKS: u32 = 18;

/// Difficulty levels for Cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CadenceDifficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

difficulty_enum_impl!(CadenceDifficulty);

impl CadenceDifficulty {
    /// Factor applied to the configured base fall speed.
    pub fn speed_scale(&self) -> f64 {
        match self {
            Self::Novice => 1.0,
            Self::Apprentice => 1.3,
            Self::Journeyman => 1.6,
            Self::Master => 2.0,
        }
    }

    /// Factor applied to the configured spawn-gap range (smaller = denser).
    pub fn spawn_scale(&self) -> f64 {
        match self {
            Self::Novice => 1.0,
            Self::Apprentice => 0.85,
            Self::Journeyman => 0.7,
            Self::Master => 0.55,
        }
    }

    /// Round length in milliseconds.
    pub fn round_ms(&self) -> u64 {
        match self {
            Self::Novice => 60_000,
            Self::Apprentice => 75_000,
            Self::Journeyman => 90_000,
            Self::Master => 90_000,
        }
    }

    /// Points needed to win the round.
    pub fn target_score(&self) -> u32 {
        match self {
            Self::Novice => 120,
            Self::Apprentice => 200,
            Self::Journeyman => 320,
            Self::Master => 450,
        }
    }
}

/// Game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CadenceResult {
    Win,
    Loss,
}

/// A single falling note tied to a lane.
#[derive(Debug, Clone)]
pub struct Target {
    /// Lane index in `0..LANES`.
    pub lane: usize,
    /// Center row; grows as the note falls. Starts just above the field.
    pub y: f64,
    /// Fall speed in rows per second; rewritten whenever the staircase moves.
    pub speed: f64,
    /// Set once the note has been scored; a note scores at most once.
    pub scored: bool,
}

impl Target {
    /// Spawn a note at the top of the given lane.
    pub fn new(lane: usize, speed: f64) -> Self {
        Self {
            lane,
            y: -TARGET_HALF_ROWS,
            speed,
            scored: false,
        }
    }

    /// Move the note down by `speed * dt` (dt in seconds).
    pub fn advance(&mut self, dt: f64) {
        self.y += self.speed * dt;
    }

    /// Top edge has fallen below the field.
    pub fn is_offscreen(&self) -> bool {
        self.y - TARGET_HALF_ROWS > FIELD_ROWS
    }

    /// Score the note against the finish line.
    ///
    /// The score is `floor(10 - 10 * |y - finish_row| / half_height)`; a hit
    /// needs at least 1 point, so the scoring band spans 90% of the note's
    /// half-height on each side of the line and an exact crossing scores 10.
    /// The first hit flips `scored`; every later call returns `None`.
    pub fn check_hit(&mut self, finish_row: f64) -> Option<u32> {
        if self.scored {
            return None;
        }
        let score = (10.0 - 10.0 * (self.y - finish_row).abs() / TARGET_HALF_ROWS).floor();
        if score > 0.0 {
            self.scored = true;
            Some(score as u32)
        } else {
            None
        }
    }
}

/// Judgment feedback for the most recent response.
#[derive(Debug, Clone, Copy)]
pub struct Judgment {
    pub lane: usize,
    /// Points awarded; 0 means the response missed.
    pub points: u32,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct CadenceGame {
    pub difficulty: CadenceDifficulty,
    pub game_result: Option<CadenceResult>,
    pub forfeit_pending: bool,
    /// True until the player presses Space to begin. Physics paused while waiting.
    pub waiting_to_start: bool,

    // Live notes. Oldest at the front, which is also the lowest on screen
    // since every note falls at the same staircase-driven speed.
    pub targets: VecDeque<Target>,
    pub lane_bag: LaneBag,
    pub staircase: Staircase,

    /// Fall speed in rows per second at multiplier 1.0.
    pub base_speed: f64,
    /// `[min, max]` milliseconds between spawns, difficulty-scaled.
    pub spawn_range_ms: (u64, u64),
    /// Milliseconds until the next spawn.
    pub spawn_countdown_ms: u64,
    /// Row of the finish line.
    pub finish_row: f64,

    // Scoring
    pub score: u32,
    pub target_score: u32,
    pub hits: u32,
    pub misses: u32,

    // Judgment flash for the UI
    pub last_judgment: Option<Judgment>,
    pub judgment_ticks: u32,

    // Timing
    /// Milliseconds left in the round.
    pub round_remaining_ms: u64,
    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total physics ticks elapsed.
    pub tick_count: u64,
}

impl CadenceGame {
    /// Create a new round from the difficulty and the configured tuning.
    pub fn new<R: Rng>(
        difficulty: CadenceDifficulty,
        settings: &CadenceSettings,
        rng: &mut R,
    ) -> Self {
        let scale = difficulty.spawn_scale();
        let spawn_min = ((settings.spawn_time_ms[0] as f64 * scale) as u64).max(100);
        let spawn_max = ((settings.spawn_time_ms[1] as f64 * scale) as u64).max(spawn_min);
        let spawn_range_ms = (spawn_min, spawn_max);

        let spawn_countdown_ms = draw_spawn_gap(spawn_range_ms, rng);

        Self {
            difficulty,
            game_result: None,
            forfeit_pending: false,
            waiting_to_start: true,

            targets: VecDeque::new(),
            lane_bag: LaneBag::new(settings.shuffle_repetitions),
            staircase: Staircase::new(
                settings.staircase_step,
                settings.multiplier_floor,
                settings.multiplier_ceiling,
            ),

            base_speed: settings.base_speed * difficulty.speed_scale(),
            spawn_range_ms,
            spawn_countdown_ms,
            finish_row: settings.finish_row,

            score: 0,
            target_score: difficulty.target_score(),
            hits: 0,
            misses: 0,

            last_judgment: None,
            judgment_ticks: 0,

            round_remaining_ms: difficulty.round_ms(),
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    /// Current staircase-driven fall speed in rows per second.
    pub fn current_speed(&self) -> f64 {
        self.base_speed * self.staircase.multiplier()
    }
}
