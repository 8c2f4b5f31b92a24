//! Moonlander data structures.
//!
//! The ship falls under constant gravity over a flat lunar surface with a
//! marked landing pad. Three thrusters (up/left/right) burn a shared fuel
//! tank; touching down on the pad gently enough wins.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Playing field size.
pub const FIELD_COLS: f64 = 60.0;
pub const FIELD_ROWS: f64 = 26.0;

/// Row of the lunar surface.
pub const GROUND_ROW: f64 = 24.0;

/// Half-extent of the ship in rows/columns.
pub const SHIP_HALF: f64 = 0.5;

/// Physics tick interval in milliseconds (~60 FPS).
pub const PHYSICS_TICK_MS: u64 = 16;

/// Sideways thruster acceleration in columns per second squared.
pub const SIDE_THRUST: f64 = 6.0;

/// Fuel units burned per second per firing thruster.
pub const FUEL_BURN_RATE: f64 = 12.0;

/// Physics ticks an input flag stays set after a key press (~200ms).
/// Terminal key-repeat gaps are bridged so holding a key feels continuous.
pub const INPUT_HOLD_TICKS: u32 = 12;

/// Physics ticks the thrust flame stays visible.
pub const FLAME_ANIM_TICKS: u32 = 4;

/// Columns kept clear between the pad and the field edges.
pub const PAD_MARGIN: f64 = 4.0;

/// Difficulty levels for Lander.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanderDifficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

difficulty_enum_impl!(LanderDifficulty);

impl LanderDifficulty {
    /// Gravity in rows per second squared.
    pub fn gravity(&self) -> f64 {
        match self {
            Self::Novice => 3.0,
            Self::Apprentice => 4.0,
            Self::Journeyman => 5.0,
            Self::Master => 6.0,
        }
    }

    /// Starting fuel units.
    pub fn starting_fuel(&self) -> f64 {
        match self {
            Self::Novice => 100.0,
            Self::Apprentice => 80.0,
            Self::Journeyman => 60.0,
            Self::Master => 50.0,
        }
    }

    /// Landing pad width in columns.
    pub fn pad_cols(&self) -> f64 {
        match self {
            Self::Novice => 14.0,
            Self::Apprentice => 10.0,
            Self::Journeyman => 7.0,
            Self::Master => 5.0,
        }
    }

    /// Maximum safe downward speed at touchdown, rows per second.
    pub fn safe_vy(&self) -> f64 {
        match self {
            Self::Novice => 3.0,
            Self::Apprentice => 2.5,
            Self::Journeyman => 2.0,
            Self::Master => 1.8,
        }
    }

    /// Maximum safe sideways speed at touchdown, columns per second.
    pub fn safe_vx(&self) -> f64 {
        match self {
            Self::Novice => 2.0,
            Self::Apprentice => 1.8,
            Self::Journeyman => 1.5,
            Self::Master => 1.2,
        }
    }
}

/// Game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanderResult {
    Win,
    Loss,
}

/// Fuel gauge zones, split at 2/3 and 1/3 of the tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelZone {
    Green,
    Amber,
    Red,
}

impl FuelZone {
    /// Classify a fuel fraction in `0.0..=1.0`.
    pub fn of(fraction: f64) -> Self {
        if fraction > 2.0 / 3.0 {
            Self::Green
        } else if fraction > 1.0 / 3.0 {
            Self::Amber
        } else {
            Self::Red
        }
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct LanderGame {
    pub difficulty: LanderDifficulty,
    pub game_result: Option<LanderResult>,
    pub forfeit_pending: bool,
    /// True until the player presses Space to begin. Physics paused while waiting.
    pub waiting_to_start: bool,

    // Ship kinematics
    /// Center column.
    pub x: f64,
    /// Center row; grows downward.
    pub y: f64,
    /// Sideways velocity, columns per second (positive = rightward).
    pub vx: f64,
    /// Vertical velocity, rows per second (positive = downward).
    pub vy: f64,

    // Fuel
    pub fuel: f64,
    pub max_fuel: f64,

    // Thruster input (impulse flags held for INPUT_HOLD_TICKS)
    pub thrust_up: bool,
    pub thrust_left: bool,
    pub thrust_right: bool,
    pub up_hold_ticks: u32,
    pub left_hold_ticks: u32,
    pub right_hold_ticks: u32,
    pub flame_ticks: u32,

    // Landing pad, inclusive column span on the ground row
    pub pad_left: f64,
    pub pad_right: f64,

    // Timing
    pub accumulated_time_ms: u64,
    pub tick_count: u64,

    // Cached difficulty parameters
    pub gravity: f64,
    pub safe_vy: f64,
    pub safe_vx: f64,
}

impl LanderGame {
    /// Create a new descent: random drop point, random pad position.
    pub fn new<R: Rng>(difficulty: LanderDifficulty, rng: &mut R) -> Self {
        let fuel = difficulty.starting_fuel();
        let pad_cols = difficulty.pad_cols();
        let pad_left = rng.gen_range(PAD_MARGIN..=(FIELD_COLS - PAD_MARGIN - pad_cols));

        Self {
            difficulty,
            game_result: None,
            forfeit_pending: false,
            waiting_to_start: true,

            // Drop somewhere over the middle half of the field, near the top
            x: rng.gen_range(FIELD_COLS * 0.25..=FIELD_COLS * 0.75),
            y: 2.0,
            vx: 0.0,
            vy: 0.0,

            fuel,
            max_fuel: fuel,

            thrust_up: false,
            thrust_left: false,
            thrust_right: false,
            up_hold_ticks: 0,
            left_hold_ticks: 0,
            right_hold_ticks: 0,
            flame_ticks: 0,

            pad_left,
            pad_right: pad_left + pad_cols,

            accumulated_time_ms: 0,
            tick_count: 0,

            gravity: difficulty.gravity(),
            safe_vy: difficulty.safe_vy(),
            safe_vx: difficulty.safe_vx(),
        }
    }

    /// Upward thruster acceleration: twice gravity, so full burn climbs at
    /// the rate free fall drops.
    pub fn up_thrust(&self) -> f64 {
        self.gravity * 2.0
    }

    /// Distance from the ship's underside to the ground.
    pub fn altitude(&self) -> f64 {
        (GROUND_ROW - (self.y + SHIP_HALF)).max(0.0)
    }

    /// Whether the ship is horizontally over the pad.
    pub fn over_pad(&self) -> bool {
        self.x >= self.pad_left && self.x <= self.pad_right
    }

    /// Current fuel gauge zone.
    pub fn fuel_zone(&self) -> FuelZone {
        FuelZone::of(self.fuel / self.max_fuel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let game = LanderGame::new(LanderDifficulty::Novice, &mut rng);
        assert!(game.game_result.is_none());
        assert!(game.waiting_to_start);
        assert!((game.vx - 0.0).abs() < f64::EPSILON);
        assert!((game.vy - 0.0).abs() < f64::EPSILON);
        assert!((game.fuel - 100.0).abs() < f64::EPSILON);
        assert!(!game.thrust_up && !game.thrust_left && !game.thrust_right);
    }

    #[test]
    fn test_drop_point_and_pad_within_field() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for difficulty in LanderDifficulty::ALL {
            for _ in 0..50 {
                let game = LanderGame::new(difficulty, &mut rng);
                assert!(game.x >= FIELD_COLS * 0.25 && game.x <= FIELD_COLS * 0.75);
                assert!(game.pad_left >= PAD_MARGIN);
                assert!(game.pad_right <= FIELD_COLS - PAD_MARGIN);
                assert!(
                    (game.pad_right - game.pad_left - difficulty.pad_cols()).abs() < 1e-9
                );
            }
        }
    }

    #[test]
    fn test_difficulty_parameters_scale() {
        let novice = LanderDifficulty::Novice;
        let master = LanderDifficulty::Master;
        assert!(master.gravity() > novice.gravity());
        assert!(master.starting_fuel() < novice.starting_fuel());
        assert!(master.pad_cols() < novice.pad_cols());
        assert!(master.safe_vy() < novice.safe_vy());
        assert!(master.safe_vx() < novice.safe_vx());
    }

    #[test]
    fn test_difficulty_from_index() {
        assert_eq!(LanderDifficulty::from_index(0), LanderDifficulty::Novice);
        assert_eq!(LanderDifficulty::from_index(3), LanderDifficulty::Master);
        assert_eq!(LanderDifficulty::from_index(99), LanderDifficulty::Novice);
    }

    #[test]
    fn test_fuel_zones() {
        assert_eq!(FuelZone::of(1.0), FuelZone::Green);
        assert_eq!(FuelZone::of(0.7), FuelZone::Green);
        assert_eq!(FuelZone::of(0.5), FuelZone::Amber);
        assert_eq!(FuelZone::of(0.34), FuelZone::Amber);
        assert_eq!(FuelZone::of(0.2), FuelZone::Red);
        assert_eq!(FuelZone::of(0.0), FuelZone::Red);
    }

    #[test]
    fn test_altitude() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut game = LanderGame::new(LanderDifficulty::Novice, &mut rng);
        game.y = GROUND_ROW - SHIP_HALF - 5.0;
        assert!((game.altitude() - 5.0).abs() < 1e-9);

        game.y = GROUND_ROW;
        assert!((game.altitude() - 0.0).abs() < 1e-9, "altitude never negative");
    }

    #[test]
    fn test_over_pad() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut game = LanderGame::new(LanderDifficulty::Novice, &mut rng);
        game.x = (game.pad_left + game.pad_right) / 2.0;
        assert!(game.over_pad());
        game.x = game.pad_left - 1.0;
        assert!(!game.over_pad());
    }

    #[test]
    fn test_up_thrust_doubles_gravity() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for difficulty in LanderDifficulty::ALL {
            let game = LanderGame::new(difficulty, &mut rng);
            assert!((game.up_thrust() - 2.0 * game.gravity).abs() < 1e-12);
        }
    }
}
