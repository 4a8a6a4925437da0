//! Bot move policies and the alpha-beta search
//!
//! Three strength tiers: Easy samples random legal positions, Normal runs
//! a one-ply win-then-block scan, Hard plays the exhaustive minimax value
//! with alpha-beta pruning and cannot be beaten.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::{index_to_position, Mark, BOARD_CELLS, MAX_POSITION, MIN_POSITION};
use crate::config::Difficulty;
use crate::eval::evaluate_terminal;
use crate::game::{GameError, GameState, Outcome};

// ============================================================================
// BOT
// ============================================================================

/// Computer player: a strength tier plus its own RNG
pub struct Bot {
    pub difficulty: Difficulty,
    rng: ChaCha8Rng,
}

impl Bot {
    /// Bot with a fixed seed (deterministic move sequences)
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Bot seeded from the OS entropy pool
    pub fn from_entropy(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Pick a move for the side whose turn it is, apply it, and return its
    /// 1-based position. Fails if the round is already decided or the
    /// board has no room left.
    pub fn choose_move(&mut self, state: &mut GameState) -> Result<u8, GameError> {
        if state.outcome() != Outcome::InProgress || state.is_full() {
            return Err(GameError::GameOver);
        }

        let mark = state.active_mark();
        let position = match self.difficulty {
            Difficulty::Easy => random_move(state, mark, &mut self.rng),
            Difficulty::Normal => heuristic_move(state, mark, &mut self.rng),
            Difficulty::Hard => optimal_move(state, mark),
        };
        Ok(position)
    }
}

// ============================================================================
// POLICIES
// ============================================================================

/// Easy: uniform random sampling with rejection until a legal cell turns
/// up. Terminates whenever at least one cell is empty.
fn random_move(state: &mut GameState, mark: Mark, rng: &mut ChaCha8Rng) -> u8 {
    loop {
        let position = rng.gen_range(MIN_POSITION..=MAX_POSITION);
        if state.apply_move(position, Some(mark)) {
            return position;
        }
    }
}

/// Normal: take an immediate win, else block the opponent's immediate
/// win, else play random. One ply only, so a fork set up two moves ahead
/// goes unseen.
fn heuristic_move(state: &mut GameState, mark: Mark, rng: &mut ChaCha8Rng) -> u8 {
    let opponent = mark.opponent();

    // Can we win right now?
    for index in 0..BOARD_CELLS {
        if state.cells()[index].is_some() {
            continue;
        }
        let wins = state.with_speculative(index, mark, |s| s.line_winner() == Some(mark));
        if wins {
            let position = index_to_position(index);
            state.apply_move(position, Some(mark));
            return position;
        }
    }

    // Would the opponent win there next turn? Take the square instead.
    for index in 0..BOARD_CELLS {
        if state.cells()[index].is_some() {
            continue;
        }
        let threatened =
            state.with_speculative(index, opponent, |s| s.line_winner() == Some(opponent));
        if threatened {
            let position = index_to_position(index);
            state.apply_move(position, Some(mark));
            return position;
        }
    }

    random_move(state, mark, rng)
}

/// Hard: full search, then commit the principal move
fn optimal_move(state: &mut GameState, mark: Mark) -> u8 {
    let (_, best) = search(state, mark, 0, true, i32::MIN, i32::MAX);
    let Some(position) = best else {
        // The caller already ruled out terminal boards, and the search
        // enumerates every open cell before giving up.
        unreachable!("search returned no move for a live board");
    };
    state.apply_move(position, Some(mark));
    position
}

// ============================================================================
// MINIMAX WITH ALPHA-BETA
// ============================================================================

/// Exhaustive minimax with alpha-beta pruning.
///
/// `max_mark` is the side the search plays for; `maximizing` says whose
/// turn the current node is and flips on every recursive call. Returns
/// the node value and the best 1-based position; terminal nodes carry no
/// position. Candidate cells are tried in ascending order, so equal-value
/// moves tie-break to the lowest position. The board is restored to its
/// exact pre-call state before returning, at every depth.
pub fn search(
    state: &mut GameState,
    max_mark: Mark,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<u8>) {
    if let Some(score) = evaluate_terminal(state, max_mark, depth) {
        return (score, None);
    }

    let mover = if maximizing { max_mark } else { max_mark.opponent() };
    let mut best_position = None;

    if maximizing {
        let mut best_score = i32::MIN;
        for index in 0..BOARD_CELLS {
            if state.cells()[index].is_some() {
                continue;
            }
            let (score, _) = state.with_speculative(index, mover, |s| {
                search(s, max_mark, depth + 1, false, alpha, beta)
            });

            if score > best_score {
                best_score = score;
                best_position = Some(index_to_position(index));
            }
            alpha = alpha.max(best_score);
            if alpha >= beta {
                break; // remaining siblings cannot raise the value
            }
        }
        (best_score, best_position)
    } else {
        let mut best_score = i32::MAX;
        for index in 0..BOARD_CELLS {
            if state.cells()[index].is_some() {
                continue;
            }
            let (score, _) = state.with_speculative(index, mover, |s| {
                search(s, max_mark, depth + 1, true, alpha, beta)
            });

            if score < best_score {
                best_score = score;
                best_position = Some(index_to_position(index));
            }
            beta = beta.min(best_score);
            if alpha >= beta {
                break;
            }
        }
        (best_score, best_position)
    }
}

// ============================================================================
// TESTS
// ============================================================================
