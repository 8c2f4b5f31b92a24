//! The arcade's games: Cadence, Flappy, Snake, Lander, Whack.
//!
//! Every game follows the same shape: a `types` module with the state and a
//! four-variant difficulty enum, and a `logic` module with UI-agnostic
//! `process_input`/`tick_*` functions that take any `rand::Rng` so behavior
//! is reproducible under a seeded generator.

/// Generate the standard `ALL`, `from_index()`, and `name()` methods shared
/// by the four-variant difficulty enums (Novice / Apprentice / Journeyman /
/// Master).
macro_rules! difficulty_enum_impl {
    ($name:ident) => {
        impl $name {
            pub const ALL: [$name; 4] = [
                $name::Novice,
                $name::Apprentice,
                $name::Journeyman,
                $name::Master,
            ];

            pub fn from_index(index: usize) -> Self {
                Self::ALL.get(index).copied().unwrap_or($name::Novice)
            }

            pub fn name(&self) -> &'static str {
                match self {
                    Self::Novice => "Novice",
                    Self::Apprentice => "Apprentice",
                    Self::Journeyman => "Journeyman",
                    Self::Master => "Master",
                }
            }

            pub fn slug(&self) -> &'static str {
                match self {
                    Self::Novice => "novice",
                    Self::Apprentice => "apprentice",
                    Self::Journeyman => "journeyman",
                    Self::Master => "master",
                }
            }
        }
    };
}

pub mod cadence;
pub mod flappy;
pub mod lander;
pub mod snake;
pub mod whack;

use rand::Rng;

use crate::config::Settings;
use cadence::{CadenceGame, CadenceResult};
use flappy::{FlappyGame, FlappyResult};
use lander::{LanderGame, LanderResult};
use snake::{SnakeGame, SnakeResult};
use whack::{WhackGame, WhackResult};

/// Every game in the arcade, for the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Cadence,
    Flappy,
    Snake,
    Lander,
    Whack,
}

impl GameKind {
    pub const ALL: [GameKind; 5] = [
        GameKind::Cadence,
        GameKind::Flappy,
        GameKind::Snake,
        GameKind::Lander,
        GameKind::Whack,
    ];

    /// Display title for the menu.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Cadence => "Cadence",
            Self::Flappy => "Skybound",
            Self::Snake => "Orchard Serpent",
            Self::Lander => "Mare Tranquillitatis",
            Self::Whack => "Mole Patrol",
        }
    }

    /// One-line pitch shown under the title.
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Cadence => "Strike falling notes as they cross the line.",
            Self::Flappy => "Flap through the gaps in the oncoming gates.",
            Self::Snake => "Eat apples, grow long, bite nothing.",
            Self::Lander => "Feather the engines and kiss the pad.",
            Self::Whack => "Three pads, one mole, no mercy.",
        }
    }

    /// Menu icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Cadence => "♪",
            Self::Flappy => ">",
            Self::Snake => "~",
            Self::Lander => "^",
            Self::Whack => "●",
        }
    }

    /// Stable identifier used in the results log.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Cadence => "cadence",
            Self::Flappy => "flappy",
            Self::Snake => "snake",
            Self::Lander => "lander",
            Self::Whack => "whack",
        }
    }

    /// Short description of a difficulty preset, for the picker.
    pub fn difficulty_blurb(&self, index: usize) -> String {
        match self {
            Self::Cadence => {
                let d = cadence::CadenceDifficulty::from_index(index);
                format!("{}s round, {} pts", d.round_ms() / 1000, d.target_score())
            }
            Self::Flappy => {
                let d = flappy::FlappyDifficulty::from_index(index);
                format!("{} gates to clear", d.target_score())
            }
            Self::Snake => {
                let d = snake::SnakeDifficulty::from_index(index);
                format!("{} apples, {}ms step", d.target_score(), d.step_interval_ms())
            }
            Self::Lander => {
                let d = lander::LanderDifficulty::from_index(index);
                format!("{:.0} fuel, {:.0}-wide pad", d.starting_fuel(), d.pad_cols())
            }
            Self::Whack => {
                let d = whack::WhackDifficulty::from_index(index);
                format!("{} of {} moles", d.target_score(), d.trials())
            }
        }
    }
}

/// The one game running right now.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Cadence(CadenceGame),
    Flappy(FlappyGame),
    Snake(SnakeGame),
    Lander(Box<LanderGame>),
    Whack(WhackGame),
}

/// What a finished session writes to the results log.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub game: &'static str,
    pub difficulty: &'static str,
    pub score: u32,
    pub won: bool,
}

impl ActiveGame {
    /// Launch a game at the difficulty picked in the menu.
    pub fn start<R: Rng>(
        kind: GameKind,
        difficulty_index: usize,
        settings: &Settings,
        rng: &mut R,
    ) -> Self {
        match kind {
            GameKind::Cadence => ActiveGame::Cadence(CadenceGame::new(
                cadence::CadenceDifficulty::from_index(difficulty_index),
                &settings.cadence,
                rng,
            )),
            GameKind::Flappy => ActiveGame::Flappy(FlappyGame::new(
                flappy::FlappyDifficulty::from_index(difficulty_index),
                rng,
            )),
            GameKind::Snake => ActiveGame::Snake(SnakeGame::new(
                snake::SnakeDifficulty::from_index(difficulty_index),
                rng,
            )),
            GameKind::Lander => ActiveGame::Lander(Box::new(LanderGame::new(
                lander::LanderDifficulty::from_index(difficulty_index),
                rng,
            ))),
            GameKind::Whack => ActiveGame::Whack(WhackGame::new(
                whack::WhackDifficulty::from_index(difficulty_index),
                &settings.whack,
                rng,
            )),
        }
    }

    /// Which game this is.
    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Cadence(_) => GameKind::Cadence,
            ActiveGame::Flappy(_) => GameKind::Flappy,
            ActiveGame::Snake(_) => GameKind::Snake,
            ActiveGame::Lander(_) => GameKind::Lander,
            ActiveGame::Whack(_) => GameKind::Whack,
        }
    }

    /// Advance the active game by `dt_ms` milliseconds of wall-clock time.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        match self {
            ActiveGame::Cadence(game) => cadence::tick_cadence(game, dt_ms, rng),
            ActiveGame::Flappy(game) => flappy::tick_flappy(game, dt_ms, rng),
            ActiveGame::Snake(game) => snake::tick_snake(game, dt_ms, rng),
            ActiveGame::Lander(game) => lander::tick_lander(game, dt_ms),
            ActiveGame::Whack(game) => whack::tick_whack(game, dt_ms, rng),
        }
    }

    /// Whether the game has reached a result.
    pub fn is_over(&self) -> bool {
        match self {
            ActiveGame::Cadence(game) => game.game_result.is_some(),
            ActiveGame::Flappy(game) => game.game_result.is_some(),
            ActiveGame::Snake(game) => game.game_result.is_some(),
            ActiveGame::Lander(game) => game.game_result.is_some(),
            ActiveGame::Whack(game) => game.game_result.is_some(),
        }
    }

    /// Summary for the results log; `None` while the game is still running.
    pub fn summary(&self) -> Option<SessionSummary> {
        match self {
            ActiveGame::Cadence(game) => game.game_result.map(|r| SessionSummary {
                game: GameKind::Cadence.slug(),
                difficulty: game.difficulty.slug(),
                score: game.score,
                won: r == CadenceResult::Win,
            }),
            ActiveGame::Flappy(game) => game.game_result.map(|r| SessionSummary {
                game: GameKind::Flappy.slug(),
                difficulty: game.difficulty.slug(),
                score: game.score,
                won: r == FlappyResult::Win,
            }),
            ActiveGame::Snake(game) => game.game_result.map(|r| SessionSummary {
                game: GameKind::Snake.slug(),
                difficulty: game.difficulty.slug(),
                score: game.score,
                won: r == SnakeResult::Win,
            }),
            ActiveGame::Lander(game) => game.game_result.map(|r| SessionSummary {
                game: GameKind::Lander.slug(),
                difficulty: game.difficulty.slug(),
                // Remaining fuel is the lander's score
                score: game.fuel.round() as u32,
                won: r == LanderResult::Win,
            }),
            ActiveGame::Whack(game) => game.game_result.map(|r| SessionSummary {
                game: GameKind::Whack.slug(),
                difficulty: game.difficulty.slug(),
                score: game.score,
                won: r == WhackResult::Win,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn start(kind: GameKind) -> ActiveGame {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        ActiveGame::start(kind, 0, &Settings::default(), &mut rng)
    }

    #[test]
    fn test_start_dispatches_to_every_game() {
        assert!(matches!(start(GameKind::Cadence), ActiveGame::Cadence(_)));
        assert!(matches!(start(GameKind::Flappy), ActiveGame::Flappy(_)));
        assert!(matches!(start(GameKind::Snake), ActiveGame::Snake(_)));
        assert!(matches!(start(GameKind::Lander), ActiveGame::Lander(_)));
        assert!(matches!(start(GameKind::Whack), ActiveGame::Whack(_)));
    }

    #[test]
    fn test_kind_round_trips() {
        for kind in GameKind::ALL {
            assert_eq!(start(kind).kind(), kind);
        }
    }

    #[test]
    fn test_fresh_games_are_not_over() {
        for kind in GameKind::ALL {
            let game = start(kind);
            assert!(!game.is_over());
            assert!(game.summary().is_none());
        }
    }

    #[test]
    fn test_summary_after_result() {
        let mut game = start(GameKind::Snake);
        if let ActiveGame::Snake(ref mut snake) = game {
            snake.score = 7;
            snake.game_result = Some(snake::SnakeResult::Loss);
        }

        let summary = game.summary().unwrap();
        assert_eq!(summary.game, "snake");
        assert_eq!(summary.difficulty, "novice");
        assert_eq!(summary.score, 7);
        assert!(!summary.won);
    }

    #[test]
    fn test_metadata_is_distinct_and_nonempty() {
        for kind in GameKind::ALL {
            assert!(!kind.title().is_empty());
            assert!(!kind.tagline().is_empty());
            assert!(!kind.icon().is_empty());
            assert!(!kind.slug().is_empty());
            for index in 0..4 {
                assert!(!kind.difficulty_blurb(index).is_empty());
            }
        }
        for (i, a) in GameKind::ALL.iter().enumerate() {
            for b in GameKind::ALL.iter().skip(i + 1) {
                assert_ne!(a.slug(), b.slug());
                assert_ne!(a.title(), b.title());
            }
        }
    }

    #[test]
    fn test_waiting_games_do_not_tick() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for kind in GameKind::ALL {
            let mut game = start(kind);
            assert!(!game.tick(1000, &mut rng), "{:?} must wait for start", kind);
        }
    }
}
