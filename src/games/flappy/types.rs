//! Flappy-bird clone data structures.
//!
//! The bird holds a fixed column while gate obstacles scroll in from the
//! right; each gate is a top/bottom wall pair around a randomly placed
//! opening. Clearing a gate scores one point.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Playing field size.
pub const FIELD_COLS: f64 = 56.0;
pub const FIELD_ROWS: f64 = 22.0;

/// Column the bird occupies.
pub const BIRD_COL: f64 = 10.0;

/// Half-extent of the bird in rows/columns.
pub const BIRD_HALF: f64 = 0.5;

/// Half-width of a gate in columns.
pub const GATE_HALF_COLS: f64 = 1.5;

/// Rows at the bottom/top of the field a gate opening never touches.
pub const LOWER_MARGIN: f64 = 2.0;
pub const UPPER_MARGIN: f64 = 2.0;

/// Physics tick interval in milliseconds (~60 FPS).
pub const PHYSICS_TICK_MS: u64 = 16;

/// Physics ticks the flap animation stays visible.
pub const FLAP_ANIM_TICKS: u32 = 6;

/// Difficulty levels for Flappy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlappyDifficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

difficulty_enum_impl!(FlappyDifficulty);

impl FlappyDifficulty {
    /// Gravity in rows per second squared.
    pub fn gravity(&self) -> f64 {
        match self {
            Self::Novice => 26.0,
            Self::Apprentice => 30.0,
            Self::Journeyman => 34.0,
            Self::Master => 38.0,
        }
    }

    /// Flap impulse: vertical velocity is SET to this (negative = upward).
    pub fn flap_speed(&self) -> f64 {
        match self {
            Self::Novice => -11.0,
            Self::Apprentice => -12.0,
            Self::Journeyman => -13.0,
            Self::Master => -14.0,
        }
    }

    /// Maximum downward velocity in rows per second.
    pub fn terminal_velocity(&self) -> f64 {
        16.0
    }

    /// Gate scroll speed in columns per second.
    pub fn scroll_speed(&self) -> f64 {
        match self {
            Self::Novice => 9.0,
            Self::Apprentice => 11.0,
            Self::Journeyman => 13.0,
            Self::Master => 15.0,
        }
    }

    /// `[min, max]` opening height in rows.
    pub fn opening_rows(&self) -> (f64, f64) {
        match self {
            Self::Novice => (7.0, 9.0),
            Self::Apprentice => (6.0, 8.0),
            Self::Journeyman => (5.0, 7.0),
            Self::Master => (4.0, 6.0),
        }
    }

    /// `[min, max]` milliseconds between gate spawns.
    pub fn spawn_ms(&self) -> (u64, u64) {
        match self {
            Self::Novice => (1500, 2400),
            Self::Apprentice => (1300, 2100),
            Self::Journeyman => (1100, 1800),
            Self::Master => (900, 1500),
        }
    }

    /// Gates to clear to win.
    pub fn target_score(&self) -> u32 {
        match self {
            Self::Novice => 10,
            Self::Apprentice => 15,
            Self::Journeyman => 20,
            Self::Master => 30,
        }
    }
}

/// Game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyResult {
    Win,
    Loss,
}

/// A gate: two wall rectangles with an opening between them.
#[derive(Debug, Clone)]
pub struct Gate {
    /// Center column (float for smooth scrolling).
    pub x: f64,
    /// Top edge of the opening (row, smaller value is higher up).
    pub opening_top: f64,
    /// Bottom edge of the opening.
    pub opening_bottom: f64,
    /// Whether this gate has already been scored.
    pub scored: bool,
}

impl Gate {
    /// Trailing edge has left the field.
    pub fn is_offscreen(&self) -> bool {
        self.x + GATE_HALF_COLS < 0.0
    }
}

/// Spawn a gate just past the right edge with a random opening.
pub fn spawn_gate<R: Rng>(difficulty: FlappyDifficulty, rng: &mut R) -> Gate {
    let (min_open, max_open) = difficulty.opening_rows();
    let opening = rng.gen_range(min_open..=max_open);

    // Place the opening anywhere in the space left after the margins.
    let available = FIELD_ROWS - LOWER_MARGIN - UPPER_MARGIN - opening;
    let center = UPPER_MARGIN + opening / 2.0 + available * rng.gen::<f64>();

    Gate {
        x: FIELD_COLS + GATE_HALF_COLS,
        opening_top: center - opening / 2.0,
        opening_bottom: center + opening / 2.0,
        scored: false,
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub difficulty: FlappyDifficulty,
    pub game_result: Option<FlappyResult>,
    pub forfeit_pending: bool,
    /// True until the first flap. Physics paused while waiting.
    pub waiting_to_start: bool,

    // Bird
    /// Center row (float for smooth physics).
    pub bird_row: f64,
    /// Vertical velocity in rows per second (positive = downward).
    pub bird_vel: f64,
    /// Ticks remaining to show the flap animation.
    pub flap_ticks: u32,

    // Gates. Oldest at the front, which is also the left-most.
    pub gates: VecDeque<Gate>,
    pub spawn_range_ms: (u64, u64),
    pub spawn_countdown_ms: u64,

    // Scoring
    pub score: u32,
    pub target_score: u32,

    // Timing
    pub accumulated_time_ms: u64,
    pub tick_count: u64,

    // Cached difficulty parameters
    pub gravity: f64,
    pub flap_speed: f64,
    pub terminal_velocity: f64,
    pub scroll_speed: f64,
}

impl FlappyGame {
    /// Create a new game; the first gate is already on its way in.
    pub fn new<R: Rng>(difficulty: FlappyDifficulty, rng: &mut R) -> Self {
        let spawn_range_ms = difficulty.spawn_ms();
        let mut gates = VecDeque::new();
        gates.push_back(spawn_gate(difficulty, rng));
        let spawn_countdown_ms = rng.gen_range(spawn_range_ms.0..=spawn_range_ms.1);

        Self {
            difficulty,
            game_result: None,
            forfeit_pending: false,
            waiting_to_start: true,

            bird_row: FIELD_ROWS / 2.0,
            bird_vel: 0.0,
            flap_ticks: 0,

            gates,
            spawn_range_ms,
            spawn_countdown_ms,

            score: 0,
            target_score: difficulty.target_score(),

            accumulated_time_ms: 0,
            tick_count: 0,

            gravity: difficulty.gravity(),
            flap_speed: difficulty.flap_speed(),
            terminal_velocity: difficulty.terminal_velocity(),
            scroll_speed: difficulty.scroll_speed(),
        }
    }
}
