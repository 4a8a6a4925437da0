//! Match command - play a series of games between two bots
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: parse_bots(), play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tactix_core::{
    Bot, Difficulty, GameConfig, GameMode, GameState, Mark, Outcome, TurnOrder,
};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Difficulty of the bot playing X (easy, normal or hard)
    #[arg(long, default_value = "hard")]
    pub x_bot: String,

    /// Difficulty of the bot playing O (easy, normal or hard)
    #[arg(long, default_value = "easy")]
    pub o_bot: String,

    /// Number of games to play (the opening move alternates between sides)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    outcome: Outcome,
    moves: u32,
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    avg_moves: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run the match command:
/// 1. Parse both bot tiers
/// 2. Play the series
/// 3. Report results
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    let (x_difficulty, o_difficulty) = parse_bots(&args)?;

    tracing::info!(
        "Starting match: {:?} (X) vs {:?} (O), {} games",
        x_difficulty,
        o_difficulty,
        args.games
    );

    let results = play_match(x_difficulty, o_difficulty, &args, seed);

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Parse the difficulty tier for each side
fn parse_bots(args: &MatchArgs) -> Result<(Difficulty, Difficulty)> {
    let x = args
        .x_bot
        .parse()
        .map_err(|e| anyhow::anyhow!("--x-bot: {e}"))?;
    let o = args
        .o_bot
        .parse()
        .map_err(|e| anyhow::anyhow!("--o-bot: {e}"))?;
    Ok((x, o))
}

/// Play all games in the series
fn play_match(
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    args: &MatchArgs,
    seed: Option<u64>,
) -> MatchResults {
    let mut rng = create_rng(seed);
    let mut games = Vec::with_capacity(args.games);

    for game_number in 1..=args.games {
        // Alternate the opening side for fairness
        let order = if game_number % 2 == 1 {
            TurnOrder::HumanFirst
        } else {
            TurnOrder::HumanSecond
        };

        let record = play_single_game(game_number, x_difficulty, o_difficulty, order, &mut rng);

        tracing::info!(
            "Game {}: {:?} in {} moves",
            record.game_number,
            record.outcome,
            record.moves
        );

        games.push(record);
    }

    compute_match_statistics(games)
}

/// Report match results
fn report_results(results: &MatchResults, args: &MatchArgs) {
    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play a single game between the two bots. The X bot sits in the
/// configuration's "human" seat, so the order flag decides who opens.
fn play_single_game(
    game_number: usize,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    order: TurnOrder,
    rng: &mut ChaCha8Rng,
) -> GameRecord {
    let config = GameConfig::new(GameMode::PlayerVsComputer, o_difficulty, Mark::X, order);
    let mut state = GameState::new(config);
    let mut bot_x = Bot::new(x_difficulty, rng.gen());
    let mut bot_o = Bot::new(o_difficulty, rng.gen());
    let mut moves = 0u32;

    loop {
        let bot = if state.active_mark() == Mark::X {
            &mut bot_x
        } else {
            &mut bot_o
        };
        if bot.choose_move(&mut state).is_err() {
            break;
        }
        moves += 1;

        if state.has_winner(None) {
            break;
        }
        if state.is_full() {
            state.set_outcome(Outcome::Draw);
            break;
        }
        state.advance_turn();
    }

    GameRecord {
        game_number,
        outcome: state.outcome(),
        moves,
    }
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let x_wins = games
        .iter()
        .filter(|g| g.outcome == Outcome::Win(Mark::X))
        .count();
    let o_wins = games
        .iter()
        .filter(|g| g.outcome == Outcome::Win(Mark::O))
        .count();
    let draws = games
        .iter()
        .filter(|g| g.outcome == Outcome::Draw)
        .count();

    let total_moves: u32 = games.iter().map(|g| g.moves).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    MatchResults {
        games,
        x_wins,
        o_wins,
        draws,
        avg_moves,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or entropy
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        outcome: String,
        moves: u32,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        x_wins: usize,
        o_wins: usize,
        draws: usize,
        avg_moves: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        x_wins: results.x_wins,
        o_wins: results.o_wins,
        draws: results.draws,
        avg_moves: results.avg_moves,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                outcome: format!("{:?}", g.outcome),
                moves: g.moves,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();
    let percent = |n: usize| {
        if total > 0 {
            n as f32 / total as f32 * 100.0
        } else {
            0.0
        }
    };

    println!("\n=== Match Results ===");
    println!("Total games: {}", total);
    println!("X wins:      {} ({:.1}%)", results.x_wins, percent(results.x_wins));
    println!("O wins:      {} ({:.1}%)", results.o_wins, percent(results.o_wins));
    println!("Draws:       {} ({:.1}%)", results.draws, percent(results.draws));
    println!("Avg moves:   {:.1}", results.avg_moves);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: {:?} in {} moves",
            game.game_number, game.outcome, game.moves
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_match_statistics_empty() {
        let results = compute_match_statistics(vec![]);
        assert_eq!(results.x_wins, 0);
        assert_eq!(results.o_wins, 0);
        assert_eq!(results.draws, 0);
        assert_eq!(results.avg_moves, 0.0);
    }

    #[test]
    fn test_compute_match_statistics() {
        let games = vec![
            GameRecord {
                game_number: 1,
                outcome: Outcome::Win(Mark::X),
                moves: 5,
            },
            GameRecord {
                game_number: 2,
                outcome: Outcome::Draw,
                moves: 9,
            },
            GameRecord {
                game_number: 3,
                outcome: Outcome::Win(Mark::X),
                moves: 7,
            },
        ];

        let results = compute_match_statistics(games);
        assert_eq!(results.x_wins, 2);
        assert_eq!(results.o_wins, 0);
        assert_eq!(results.draws, 1);
        assert_eq!(results.avg_moves, 7.0);
    }

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(Some(42));
        let mut rng2 = create_rng(Some(42));
        assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
    }

    #[test]
    fn test_hard_vs_hard_series_is_all_draws() {
        let args = MatchArgs {
            x_bot: "hard".into(),
            o_bot: "hard".into(),
            games: 2,
            json: false,
        };
        let results = play_match(Difficulty::Hard, Difficulty::Hard, &args, Some(9));
        assert_eq!(results.draws, 2);
        assert_eq!(results.x_wins, 0);
        assert_eq!(results.o_wins, 0);
    }

    #[test]
    fn test_parse_bots_rejects_unknown_tier() {
        let args = MatchArgs {
            x_bot: "grandmaster".into(),
            o_bot: "easy".into(),
            games: 1,
            json: false,
        };
        assert!(parse_bots(&args).is_err());
    }
}
