//! Canned outcome announcements

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Victory lines; `{}` takes the winner's name
pub const VICTORY: [&str; 5] = [
    "Well played, {}! You won this round.",
    "Victory is yours, {}!",
    "Nice moves, {} - you're the winner!",
    "You crushed it, {}!",
    "Unstoppable! That was a clean win, {}.",
];

pub const DEFEAT: [&str; 5] = [
    "Oh no! The computer outsmarted you.",
    "You lost. The machine wins this time.",
    "Better luck next time!",
    "Game over. The computer takes the win.",
    "That was tough. The computer wins this round.",
];

pub const DRAW: [&str; 4] = [
    "It's a draw! Great minds think alike.",
    "No winners this time - it's a tie.",
    "Stalemate! Try again for a win.",
    "Even match! Good game.",
];

/// Pick one line from a pool
pub fn pick<'a>(pool: &[&'a str], rng: &mut ChaCha8Rng) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_pick_stays_in_the_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let line = pick(&DRAW, &mut rng);
            assert!(DRAW.contains(&line));
        }
    }

    #[test]
    fn test_victory_lines_take_a_name() {
        for line in VICTORY {
            assert!(line.contains("{}"));
        }
    }
}
