//! Arcade menu: pick a game, then a difficulty.

use crate::games::GameKind;

/// UI-agnostic input actions for the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    /// Enter/Space — open the difficulty picker, or launch.
    Select,
    /// Esc — back out of the picker, or quit the arcade.
    Back,
    Other,
}

/// What the main loop should do after a menu keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Launch(GameKind, usize),
    Quit,
}

/// Menu navigation state.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub selected_game: usize,
    /// True while the difficulty picker for the selected game is open.
    pub picking_difficulty: bool,
    pub selected_difficulty: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The game the cursor is on.
    pub fn current_game(&self) -> GameKind {
        GameKind::ALL[self.selected_game.min(GameKind::ALL.len() - 1)]
    }

    fn navigate(&mut self, delta: i32) {
        if self.picking_difficulty {
            let max = 3;
            self.selected_difficulty = step_index(self.selected_difficulty, delta, max);
        } else {
            let max = GameKind::ALL.len() - 1;
            self.selected_game = step_index(self.selected_game, delta, max);
        }
    }
}

fn step_index(index: usize, delta: i32, max: usize) -> usize {
    if delta < 0 {
        index.saturating_sub(1)
    } else {
        (index + 1).min(max)
    }
}

/// Process a menu input. Returns an action when the keypress resolves one.
pub fn process_input(menu: &mut MenuState, input: MenuInput) -> Option<MenuAction> {
    match input {
        MenuInput::Up => {
            menu.navigate(-1);
            None
        }
        MenuInput::Down => {
            menu.navigate(1);
            None
        }
        MenuInput::Select => {
            if menu.picking_difficulty {
                Some(MenuAction::Launch(
                    menu.current_game(),
                    menu.selected_difficulty,
                ))
            } else {
                menu.picking_difficulty = true;
                menu.selected_difficulty = 0;
                None
            }
        }
        MenuInput::Back => {
            if menu.picking_difficulty {
                menu.picking_difficulty = false;
                None
            } else {
                Some(MenuAction::Quit)
            }
        }
        MenuInput::Other => None,
    }
}
