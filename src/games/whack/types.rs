//! Whack-a-mole reaction task data structures.
//!
//! Each trial shows a blank field for a random interval, then pops a mole up
//! on one of three pads for a limited window. Striking the right pad in time
//! scores a hit and flashes feedback; everything else is a miss.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WhackSettings;

/// Number of mole pads.
pub const PADS: usize = 3;

/// Physics tick interval in milliseconds (~60 FPS).
pub const PHYSICS_TICK_MS: u64 = 16;

/// Difficulty levels for Whack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhackDifficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

difficulty_enum_impl!(WhackDifficulty);

impl WhackDifficulty {
    /// Trials per round.
    pub fn trials(&self) -> u32 {
        match self {
            Self::Novice => 10,
            Self::Apprentice => 14,
            Self::Journeyman => 18,
            Self::Master => 22,
        }
    }

    /// Factor applied to the configured presentation window (smaller = snappier).
    pub fn presentation_scale(&self) -> f64 {
        match self {
            Self::Novice => 1.0,
            Self::Apprentice => 0.85,
            Self::Journeyman => 0.7,
            Self::Master => 0.55,
        }
    }

    /// Hits needed to win the round.
    pub fn target_score(&self) -> u32 {
        match self {
            Self::Novice => 6,
            Self::Apprentice => 9,
            Self::Journeyman => 13,
            Self::Master => 17,
        }
    }
}

/// Game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhackResult {
    Win,
    Loss,
}

/// Where the current trial stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhackPhase {
    /// Empty field before the next mole.
    Blank { remaining_ms: u64 },
    /// A mole is up and can be struck.
    Mole { pad: usize, remaining_ms: u64 },
    /// Hit flash; the struck mole stays lit briefly.
    Feedback { pad: usize, remaining_ms: u64 },
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct WhackGame {
    pub difficulty: WhackDifficulty,
    pub game_result: Option<WhackResult>,
    pub forfeit_pending: bool,
    /// True until the player presses Space to begin. Trials paused while waiting.
    pub waiting_to_start: bool,

    pub phase: WhackPhase,
    pub trials_done: u32,
    pub trials_total: u32,

    // Scoring (one point per hit)
    pub score: u32,
    pub target_score: u32,

    // Trial windows, milliseconds
    pub blank_range_ms: (u64, u64),
    pub presentation_range_ms: (u64, u64),
    pub feedback_ms: u64,

    // Timing
    pub accumulated_time_ms: u64,
    pub tick_count: u64,
}

impl WhackGame {
    /// Create a new round from the difficulty and the configured windows.
    pub fn new<R: Rng>(difficulty: WhackDifficulty, settings: &WhackSettings, rng: &mut R) -> Self {
        let scale = difficulty.presentation_scale();
        let pres_min = ((settings.presentation_ms[0] as f64 * scale) as u64).max(100);
        let pres_max = ((settings.presentation_ms[1] as f64 * scale) as u64).max(pres_min);

        let blank_range_ms = (settings.blank_ms[0], settings.blank_ms[1]);
        let first_blank = rng.gen_range(blank_range_ms.0..=blank_range_ms.1);

        Self {
            difficulty,
            game_result: None,
            forfeit_pending: false,
            waiting_to_start: true,

            phase: WhackPhase::Blank {
                remaining_ms: first_blank,
            },
            trials_done: 0,
            trials_total: difficulty.trials(),

            score: 0,
            target_score: difficulty.target_score(),

            blank_range_ms,
            presentation_range_ms: (pres_min, pres_max),
            feedback_ms: settings.feedback_ms,

            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_game(difficulty: WhackDifficulty) -> WhackGame {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        WhackGame::new(difficulty, &WhackSettings::default(), &mut rng)
    }

    #[test]
    fn test_new_game_defaults() {
        let game = new_game(WhackDifficulty::Novice);
        assert!(game.game_result.is_none());
        assert!(game.waiting_to_start);
        assert_eq!(game.trials_done, 0);
        assert_eq!(game.trials_total, 10);
        assert_eq!(game.score, 0);
        assert_eq!(game.target_score, 6);
        assert!(matches!(game.phase, WhackPhase::Blank { .. }));
    }

    #[test]
    fn test_first_blank_within_configured_range() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let game = WhackGame::new(WhackDifficulty::Novice, &WhackSettings::default(), &mut rng);
            let WhackPhase::Blank { remaining_ms } = game.phase else {
                panic!("round must open on a blank");
            };
            let (min, max) = game.blank_range_ms;
            assert!((min..=max).contains(&remaining_ms));
        }
    }

    #[test]
    fn test_presentation_window_shrinks_with_difficulty() {
        let novice = new_game(WhackDifficulty::Novice);
        let master = new_game(WhackDifficulty::Master);
        assert!(master.presentation_range_ms.0 < novice.presentation_range_ms.0);
        assert!(master.presentation_range_ms.1 < novice.presentation_range_ms.1);
    }

    #[test]
    fn test_difficulty_parameters_scale() {
        assert!(WhackDifficulty::Master.trials() > WhackDifficulty::Novice.trials());
        assert!(
            WhackDifficulty::Master.target_score() > WhackDifficulty::Novice.target_score()
        );
        for difficulty in WhackDifficulty::ALL {
            assert!(
                difficulty.target_score() <= difficulty.trials(),
                "{:?} target must be reachable",
                difficulty
            );
        }
    }

    #[test]
    fn test_difficulty_from_index() {
        assert_eq!(WhackDifficulty::from_index(0), WhackDifficulty::Novice);
        assert_eq!(WhackDifficulty::from_index(3), WhackDifficulty::Master);
        assert_eq!(WhackDifficulty::from_index(99), WhackDifficulty::Novice);
    }
}
