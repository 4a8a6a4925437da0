//! Terminal scoring for the adversarial search

use crate::board::Mark;
use crate::game::GameState;

/// Value of a win at the root, decaying by one per ply of delay
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn board
pub const DRAW_SCORE: i32 = 0;

/// Score a finished board from `max_mark`'s perspective, or `None` while
/// play can continue. A completed line for `max_mark` scores
/// `WIN_SCORE - depth` (faster wins are worth more); a completed line for
/// the adversary scores `depth - WIN_SCORE` (slower losses hurt less,
/// which makes the search drag out an unavoidable defeat); a full board
/// is a draw.
pub fn evaluate_terminal(state: &GameState, max_mark: Mark, depth: i32) -> Option<i32> {
    match state.line_winner() {
        Some(mark) if mark == max_mark => Some(WIN_SCORE - depth),
        Some(_) => Some(depth - WIN_SCORE),
        None if state.is_full() => Some(DRAW_SCORE),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn state_with(marks: &[(u8, Mark)]) -> GameState {
        let mut state = GameState::new(GameConfig::default());
        for &(position, mark) in marks {
            assert!(state.apply_move(position, Some(mark)));
        }
        state
    }

    #[test]
    fn test_win_rewards_speed() {
        let state = state_with(&[(1, Mark::X), (2, Mark::X), (3, Mark::X), (5, Mark::O)]);
        assert_eq!(evaluate_terminal(&state, Mark::X, 1), Some(9));
        assert_eq!(evaluate_terminal(&state, Mark::X, 5), Some(5));
    }

    #[test]
    fn test_loss_rewards_delay() {
        let state = state_with(&[(1, Mark::O), (2, Mark::O), (3, Mark::O), (5, Mark::X)]);
        assert_eq!(evaluate_terminal(&state, Mark::X, 1), Some(-9));
        assert_eq!(evaluate_terminal(&state, Mark::X, 5), Some(-5));
    }

    #[test]
    fn test_full_board_is_a_draw() {
        let state = state_with(&[
            (1, Mark::X), (2, Mark::O), (3, Mark::X),
            (4, Mark::X), (5, Mark::O), (6, Mark::O),
            (7, Mark::O), (8, Mark::X), (9, Mark::X),
        ]);
        assert_eq!(evaluate_terminal(&state, Mark::X, 4), Some(DRAW_SCORE));
        assert_eq!(evaluate_terminal(&state, Mark::O, 4), Some(DRAW_SCORE));
    }

    #[test]
    fn test_open_board_is_not_terminal() {
        let state = state_with(&[(1, Mark::X), (5, Mark::O)]);
        assert_eq!(evaluate_terminal(&state, Mark::X, 2), None);
    }
}
