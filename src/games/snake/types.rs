//! Snake data structures.
//!
//! The snake lives on a square grid and steps on a fixed cadence. Eating an
//! apple grows it by one segment; running into a wall or its own body ends
//! the game.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Physics/movement bookkeeping works in whole grid squares.
pub const GRID_COLS: i16 = 24;
pub const GRID_ROWS: i16 = 24;

/// Difficulty levels for Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeDifficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

difficulty_enum_impl!(SnakeDifficulty);

impl SnakeDifficulty {
    /// Milliseconds between movement steps (lower = faster).
    pub fn step_interval_ms(&self) -> u64 {
        match self {
            Self::Novice => 220,
            Self::Apprentice => 170,
            Self::Journeyman => 130,
            Self::Master => 100,
        }
    }

    /// Apples to eat to win.
    pub fn target_score(&self) -> u32 {
        match self {
            Self::Novice => 10,
            Self::Apprentice => 15,
            Self::Journeyman => 20,
            Self::Master => 25,
        }
    }
}

/// Game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeResult {
    Win,
    Loss,
}

/// Movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (dx, dy) grid delta for one step.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub difficulty: SnakeDifficulty,
    pub game_result: Option<SnakeResult>,
    pub forfeit_pending: bool,
    /// True until the player presses Space to begin. Movement paused while waiting.
    pub waiting_to_start: bool,

    /// Body segments, head at the front. Starts as a single segment.
    pub segments: VecDeque<Cell>,
    pub direction: Direction,

    pub apple: Cell,

    // Scoring
    pub score: u32,
    pub target_score: u32,

    // Timing
    pub step_interval_ms: u64,
    pub accumulated_time_ms: u64,
    pub tick_count: u64,
}

impl SnakeGame {
    /// Create a new game: one segment in the center, heading right.
    pub fn new<R: Rng>(difficulty: SnakeDifficulty, rng: &mut R) -> Self {
        let mut segments = VecDeque::new();
        segments.push_back(Cell {
            x: GRID_COLS / 2,
            y: GRID_ROWS / 2,
        });

        let mut game = Self {
            difficulty,
            game_result: None,
            forfeit_pending: false,
            waiting_to_start: true,

            segments,
            direction: Direction::Right,

            // Placeholder, replaced by spawn_apple below
            apple: Cell { x: 0, y: 0 },

            score: 0,
            target_score: difficulty.target_score(),

            step_interval_ms: difficulty.step_interval_ms(),
            accumulated_time_ms: 0,
            tick_count: 0,
        };
        game.apple = spawn_apple(&game, rng);
        game
    }

    /// Whether the given cell lies inside the snake.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Head left the grid.
    pub fn hit_the_wall(&self) -> bool {
        let head = self.segments[0];
        head.x < 0 || head.y < 0 || head.x >= GRID_COLS || head.y >= GRID_ROWS
    }

    /// Head landed on a body segment.
    pub fn bit_itself(&self) -> bool {
        let head = self.segments[0];
        self.segments.iter().skip(1).any(|&seg| seg == head)
    }
}

/// Pick a random free cell for the apple (never inside the snake).
pub fn spawn_apple<R: Rng>(game: &SnakeGame, rng: &mut R) -> Cell {
    loop {
        let cell = Cell {
            x: rng.gen_range(0..GRID_COLS),
            y: rng.gen_range(0..GRID_ROWS),
        };
        if !game.occupies(cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let game = SnakeGame::new(SnakeDifficulty::Novice, &mut rng);
        assert!(game.game_result.is_none());
        assert!(game.waiting_to_start);
        assert_eq!(game.segments.len(), 1, "the snake starts as a single segment");
        assert_eq!(game.segments[0], Cell { x: 12, y: 12 });
        assert_eq!(game.direction, Direction::Right);
        assert_eq!(game.score, 0);
        assert_eq!(game.target_score, 10);
    }

    #[test]
    fn test_apple_not_on_snake() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..50 {
            let game = SnakeGame::new(SnakeDifficulty::Novice, &mut rng);
            assert!(!game.occupies(game.apple));
            assert!(game.apple.x >= 0 && game.apple.x < GRID_COLS);
            assert!(game.apple.y >= 0 && game.apple.y < GRID_ROWS);
        }
    }

    #[test]
    fn test_spawn_apple_avoids_long_snake() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut game = SnakeGame::new(SnakeDifficulty::Novice, &mut rng);
        // Fill a whole row with snake
        game.segments.clear();
        for x in 0..GRID_COLS {
            game.segments.push_back(Cell { x, y: 5 });
        }
        for _ in 0..100 {
            let apple = spawn_apple(&game, &mut rng);
            assert_ne!(apple.y, 5);
        }
    }

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_wall_detection() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut game = SnakeGame::new(SnakeDifficulty::Novice, &mut rng);
        assert!(!game.hit_the_wall());

        game.segments[0] = Cell { x: -1, y: 5 };
        assert!(game.hit_the_wall());
        game.segments[0] = Cell { x: GRID_COLS, y: 5 };
        assert!(game.hit_the_wall());
        game.segments[0] = Cell { x: 5, y: GRID_ROWS };
        assert!(game.hit_the_wall());
    }

    #[test]
    fn test_self_bite_detection() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut game = SnakeGame::new(SnakeDifficulty::Novice, &mut rng);
        assert!(!game.bit_itself(), "a single segment cannot bite itself");

        game.segments.push_back(Cell { x: 12, y: 12 });
        assert!(game.bit_itself(), "head sharing a body cell is a bite");
    }

    #[test]
    fn test_difficulty_parameters() {
        assert!(
            SnakeDifficulty::Master.step_interval_ms()
                < SnakeDifficulty::Novice.step_interval_ms()
        );
        assert!(
            SnakeDifficulty::Master.target_score() > SnakeDifficulty::Novice.target_score()
        );
    }

    #[test]
    fn test_difficulty_from_index() {
        assert_eq!(SnakeDifficulty::from_index(0), SnakeDifficulty::Novice);
        assert_eq!(SnakeDifficulty::from_index(3), SnakeDifficulty::Master);
        assert_eq!(SnakeDifficulty::from_index(99), SnakeDifficulty::Novice);
    }
}
