//! Game state and rules
//!
//! `GameState` owns the board, the turn counter, and the round outcome.
//! Win detection is split into a pure line scan (`line_winner`) and
//! explicit outcome mutators, so the search engine can probe candidate
//! boards without ever touching shared terminal state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{position_to_index, Board, Mark, BOARD_CELLS, LINES};
use crate::config::{GameConfig, TurnOrder};

/// Round outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

/// Errors from driving a round past its end
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("the round is already over")]
    GameOver,
}

/// Game state (board, turn counter, outcome, session configuration)
#[derive(Clone, Debug)]
pub struct GameState {
    cells: Board,
    turn: u32,
    outcome: Outcome,
    config: GameConfig,
}

impl GameState {
    /// Start a fresh round with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            cells: [None; BOARD_CELLS],
            turn: 0,
            outcome: Outcome::InProgress,
            config,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Raw cell contents, for rendering
    pub fn cells(&self) -> &Board {
        &self.cells
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Mark whose turn it is, from turn parity and the configured order
    pub fn active_mark(&self) -> Mark {
        let human_parity = match self.config.order {
            TurnOrder::HumanFirst => 0,
            TurnOrder::HumanSecond => 1,
        };
        if self.turn % 2 == human_parity {
            self.config.human_mark
        } else {
            self.config.computer_mark()
        }
    }

    // ========================================================================
    // RULES
    // ========================================================================

    /// A position is legal iff it is on the board and the cell is empty.
    /// Out-of-range positions are illegal, not an error.
    pub fn is_legal_move(&self, position: u8) -> bool {
        match position_to_index(position) {
            Some(index) => self.cells[index].is_none(),
            None => false,
        }
    }

    /// Place a mark (the active mark unless one is given) at a 1-based
    /// position. Returns false on an illegal move, leaving the board
    /// untouched.
    pub fn apply_move(&mut self, position: u8, mark: Option<Mark>) -> bool {
        let mark = mark.unwrap_or_else(|| self.active_mark());
        match position_to_index(position) {
            Some(index) if self.cells[index].is_none() => {
                self.cells[index] = Some(mark);
                true
            }
            _ => false,
        }
    }

    /// Pure line scan: the mark owning a complete line, if any
    pub fn line_winner(&self) -> Option<Mark> {
        for line in &LINES {
            if let Some(mark) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(mark) && self.cells[line[2]] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// True iff `mark` (default: the active mark) owns a complete line.
    /// Records the win as the round outcome when it does.
    pub fn has_winner(&mut self, mark: Option<Mark>) -> bool {
        let mark = mark.unwrap_or_else(|| self.active_mark());
        if self.line_winner() == Some(mark) {
            self.outcome = Outcome::Win(mark);
            true
        } else {
            false
        }
    }

    /// No empty cell left
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    // ========================================================================
    // OUTCOME AND TURN MUTATORS
    // ========================================================================

    /// Overwrite the round outcome
    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    /// Back to `InProgress`, e.g. after a `has_winner` probe the caller
    /// does not want to commit
    pub fn clear_outcome(&mut self) {
        self.outcome = Outcome::InProgress;
    }

    /// Advance the turn counter. The session loop calls this only after a
    /// move that did not end the round.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
    }

    /// Fresh board and counter for a new round; configuration is retained
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_CELLS];
        self.turn = 0;
        self.outcome = Outcome::InProgress;
    }

    // ========================================================================
    // SPECULATION
    // ========================================================================

    /// Run `f` with `mark` speculatively placed in the (empty) cell at
    /// `index`, restoring the cell before returning. Restoration happens
    /// on every exit path, which keeps sibling branches of a search from
    /// seeing each other's probes.
    pub(crate) fn with_speculative<T>(
        &mut self,
        index: usize,
        mark: Mark,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        debug_assert!(self.cells[index].is_none());
        self.cells[index] = Some(mark);
        let result = f(self);
        self.cells[index] = None;
        result
    }
}
