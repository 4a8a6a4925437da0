//! TACTIX Core - Game engine and AI
//!
//! This crate provides the core game logic for TACTIX:
//! - 3x3 board primitives and the eight winning lines
//! - Session configuration (mode, difficulty, marks, turn order)
//! - Game state, rules, and outcome tracking
//! - Terminal scoring for the adversarial search
//! - Alpha-beta minimax search and the three bot tiers

pub mod board;
pub mod config;
pub mod game;
pub mod eval;
pub mod ai;

// Re-exports for convenient access
pub use board::{index_to_position, position_to_index, Board, Mark, BOARD_CELLS, LINES, MAX_POSITION, MIN_POSITION};
pub use config::{ConfigError, Difficulty, GameConfig, GameMode, TurnOrder};
pub use game::{GameError, GameState, Outcome};
pub use eval::{evaluate_terminal, DRAW_SCORE, WIN_SCORE};
pub use ai::{search, Bot};
