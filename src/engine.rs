//! The game state machine

use tracing::{debug, info, trace, warn};

use std::fmt;

use crate::{
    config::GameConfig,
    error::EngineError,
    grid::{Cell, Grid, Position},
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    fn win(self) -> Outcome {
        match self {
            Player::One => Outcome::PlayerOneWin,
            Player::Two => Outcome::PlayerTwoWin,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// The state of a game; every state but `InProgress` is terminal
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    InProgress,
    PlayerOneWin,
    PlayerTwoWin,
    Tie,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWin => Some(Player::One),
            Outcome::PlayerTwoWin => Some(Player::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::PlayerOneWin => write!(f, "player 1 won"),
            Outcome::PlayerTwoWin => write!(f, "player 2 won"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// Where a dropped piece ended up
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Placement {
    Placed(Position),
    /// The column was full, nothing changed
    Rejected,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DropResult {
    pub placement: Placement,
    /// The outcome after the drop
    pub outcome: Outcome,
}

/// Owns the grid, turn and outcome of a single game
///
/// # Notes
/// Wins are found by rescanning the whole board after every move, using
/// each cell as the anchor of a line in each of the four directions. Boards
/// are small, so this is cheap enough.
///
/// The engine is not synchronised, drops must be made one at a time.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    current_player: Player,
    outcome: Outcome,
    moves: Vec<usize>,
}

impl GameEngine {
    /// Creates a game on an empty `height` x `width` board
    pub fn new(height: usize, width: usize) -> Result<Self, EngineError> {
        Ok(Self::with_config(GameConfig::new(height, width)?))
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            grid: Grid::new(config),
            current_player: Player::One,
            outcome: Outcome::InProgress,
            moves: Vec::new(),
        }
    }

    /// Starts over on an empty board of the same size
    pub fn reset(&mut self) {
        info!(
            height = self.config.height(),
            width = self.config.width(),
            "starting new game"
        );
        *self = Self::with_config(self.config);
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// The columns played so far this game, in order
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the lowest empty row of `column`, or `None` if it is full
    pub fn find_landing_row(&self, column: usize) -> Result<Option<usize>, EngineError> {
        if column >= self.grid.width() {
            return Err(EngineError::OutOfRange {
                column,
                width: self.grid.width(),
            });
        }
        Ok(self.grid.landing_row(column))
    }

    /// Drops a piece for the current player into `column`
    ///
    /// A full column is rejected without changing anything. Otherwise the
    /// piece is placed, the board is checked for a win and then for a tie,
    /// and the turn passes to the other player if the game goes on.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropResult, EngineError> {
        if self.outcome.is_terminal() {
            warn!(column, outcome = %self.outcome, "drop attempted after the game ended");
            return Err(EngineError::GameOver {
                outcome: self.outcome,
            });
        }

        let row = match self.find_landing_row(column)? {
            Some(row) => row,
            None => {
                trace!(column, "column full, drop rejected");
                return Ok(DropResult {
                    placement: Placement::Rejected,
                    outcome: self.outcome,
                });
            }
        };

        let position = Position { row, column };
        self.grid.place(position, self.current_player.cell());
        self.moves.push(column);
        debug!(player = self.current_player.number(), row, column, "piece placed");

        // a full board with a line on it is a win, so the win check goes first
        if self.check_for_win() {
            self.outcome = self.current_player.win();
        } else if self.check_for_tie() {
            self.outcome = Outcome::Tie;
        } else {
            self.current_player = self.current_player.other();
        }

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, moves = self.moves.len(), "game over");
        }

        Ok(DropResult {
            placement: Placement::Placed(position),
            outcome: self.outcome,
        })
    }

    /// Whether the current player has four in a row anywhere on the board
    pub fn check_for_win(&self) -> bool {
        self.grid.has_line(self.current_player.cell())
    }

    /// Whether the board is full and nobody has four in a row
    pub fn check_for_tie(&self) -> bool {
        self.grid.is_full()
            && !self.grid.has_line(Cell::PlayerOne)
            && !self.grid.has_line(Cell::PlayerTwo)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}
