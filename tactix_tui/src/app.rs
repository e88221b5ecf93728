//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use strum::IntoEnumIterator;
use tactix_engine::{Difficulty, Game, Status, choose_move};
use tracing::{debug, info, warn};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Difficulty and mode selection.
    Menu,
    /// A game is underway.
    Playing,
    /// The game finished; waiting for replay or quit.
    GameOver,
}

/// Who supplies the moves for O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Human X against the computer.
    VsComputer,
    /// Two humans sharing the keyboard.
    TwoPlayer,
}

impl Mode {
    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::VsComputer => "Human vs Computer",
            Mode::TwoPlayer => "Two Players",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Mode::VsComputer => Mode::TwoPlayer,
            Mode::TwoPlayer => Mode::VsComputer,
        }
    }
}

/// Main application state.
pub struct App {
    game: Game,
    mode: Mode,
    difficulty: Difficulty,
    rng: SmallRng,
    screen: Screen,
    status_line: String,
    should_quit: bool,
}

impl App {
    /// Creates the application on the menu screen.
    pub fn new(mode: Mode, difficulty: Difficulty, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            game: Game::new(),
            mode,
            difficulty,
            rng,
            screen: Screen::Menu,
            status_line: String::from("Press Enter to start"),
            should_quit: false,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the selected difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the status line shown under the board.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes a key press to the active screen.
    pub fn on_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => self.on_menu_key(key.code),
            Screen::Playing => self.on_playing_key(key.code),
            Screen::GameOver => self.on_game_over_key(key.code),
        }
    }

    fn on_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Up => self.cycle_difficulty(false),
            KeyCode::Right | KeyCode::Down => self.cycle_difficulty(true),
            KeyCode::Tab => {
                self.mode = self.mode.toggled();
            }
            KeyCode::Enter => self.start_game(),
            _ => {}
        }
    }

    fn on_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.start_game(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.human_move(index);
            }
            _ => {}
        }
    }

    fn on_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Enter => self.start_game(),
            _ => {}
        }
    }

    fn cycle_difficulty(&mut self, forward: bool) {
        let tiers: Vec<Difficulty> = Difficulty::iter().collect();
        let current = tiers
            .iter()
            .position(|&d| d == self.difficulty)
            .expect("selected difficulty is a known tier");
        let next = if forward {
            (current + 1) % tiers.len()
        } else {
            (current + tiers.len() - 1) % tiers.len()
        };
        self.difficulty = tiers[next];
    }

    fn start_game(&mut self) {
        info!(mode = ?self.mode, difficulty = %self.difficulty, "starting game");
        self.game = Game::new();
        self.screen = Screen::Playing;
        self.status_line = format!("Player {} to move", self.game.to_move());
    }

    fn human_move(&mut self, index: usize) {
        match self.game.play(index) {
            Ok(status) => {
                debug!(index, ?status, "human move accepted");
                self.after_move(status);
                if self.screen == Screen::Playing && self.mode == Mode::VsComputer {
                    self.computer_move();
                }
            }
            Err(err) => {
                warn!(index, %err, "move rejected");
                self.status_line = format!("{err}. Try again.");
            }
        }
    }

    fn computer_move(&mut self) {
        let ai = self.game.to_move();
        let index = match choose_move(self.game.board(), ai, self.difficulty, &mut self.rng) {
            Ok(index) => index,
            Err(err) => {
                warn!(%err, "computer has no move");
                self.status_line = err.to_string();
                return;
            }
        };

        match self.game.play(index) {
            Ok(status) => {
                debug!(index, ?status, board = %self.game.board(), "computer move applied");
                self.after_move(status);
            }
            Err(err) => {
                warn!(index, %err, "computer move rejected");
                self.status_line = format!("Computer error: {err}");
            }
        }
    }

    fn after_move(&mut self, status: Status) {
        match status {
            Status::InProgress => {
                self.status_line = format!("Player {} to move", self.game.to_move());
            }
            Status::Won(player) => {
                info!(%player, "game won");
                self.screen = Screen::GameOver;
                self.status_line = format!("Player {player} wins! Play again?");
            }
            Status::Draw => {
                info!("game drawn");
                self.screen = Screen::GameOver;
                self.status_line = String::from("It's a draw! Play again?");
            }
        }
    }
}
