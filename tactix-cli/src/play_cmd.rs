//! Play command - interactive rounds
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: collect_config(), play_round(), ask_replay()
//! - Level 3: prompt helpers, turn handling
//! - Level 4: rendering and naming utilities

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tactix_core::{
    Bot, Difficulty, GameConfig, GameMode, GameState, Mark, Outcome, TurnOrder,
};

use crate::messages;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Load the session configuration from a JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Game mode (pvc or pvp); prompted for when omitted
    #[arg(long)]
    pub mode: Option<String>,

    /// Bot strength (easy, normal or hard)
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Your mark (X or O)
    #[arg(long)]
    pub mark: Option<String>,

    /// Move first or second
    #[arg(long)]
    pub order: Option<String>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run the interactive session: collect a configuration, then play rounds
/// until the player declines a rematch.
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("=== TACTIX ===\n");
    let config = collect_config(&args, &mut input)?;

    let mut bot = match config.mode {
        GameMode::PlayerVsComputer => Some(match seed {
            Some(seed) => Bot::new(config.difficulty, seed),
            None => Bot::from_entropy(config.difficulty),
        }),
        GameMode::PlayerVsPlayer => None,
    };
    let mut msg_rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut state = GameState::new(config);
    loop {
        play_round(&mut state, &mut bot, &mut input, &mut msg_rng)?;
        if !ask_replay(&mut input)? {
            println!("Thanks for playing!");
            return Ok(());
        }
        state.reset();
    }
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build the session configuration from a file, flags, or prompts
fn collect_config(args: &PlayArgs, input: &mut impl BufRead) -> Result<GameConfig> {
    if let Some(path) = &args.config {
        return GameConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()));
    }

    let mode = resolve(
        args.mode.as_deref(),
        input,
        "Select game mode, pvc or pvp (1 or 2): ",
    )?;

    match mode {
        GameMode::PlayerVsPlayer => {
            println!("Player 1 uses X and plays first; player 2 uses O\n");
            Ok(GameConfig::new(
                GameMode::PlayerVsPlayer,
                Difficulty::Easy,
                Mark::X,
                TurnOrder::HumanFirst,
            ))
        }
        GameMode::PlayerVsComputer => {
            let difficulty: Difficulty = resolve(
                args.difficulty.as_deref(),
                input,
                "Select difficulty, easy, normal or hard: ",
            )?;
            let mark: Mark = resolve(args.mark.as_deref(), input, "Wanna be X or O? ")?;
            let order: TurnOrder = resolve(
                args.order.as_deref(),
                input,
                "Who plays first, you or the computer (1 or 2)? ",
            )?;

            println!(
                "You play {} against the {:?} computer ({})\n",
                mark,
                difficulty,
                match order {
                    TurnOrder::HumanFirst => "you open",
                    TurnOrder::HumanSecond => "the computer opens",
                }
            );
            Ok(GameConfig::new(mode, difficulty, mark, order))
        }
    }
}

/// Drive one round from an empty board to a terminal state
fn play_round(
    state: &mut GameState,
    bot: &mut Option<Bot>,
    input: &mut impl BufRead,
    msg_rng: &mut ChaCha8Rng,
) -> Result<()> {
    println!("Positions are numbered 1-9. Good luck!");
    println!("{}", render_board(state, true));

    loop {
        match bot.as_mut() {
            Some(bot) if state.active_mark() == state.config().computer_mark() => {
                let position = bot.choose_move(state)?;
                println!("Computer chose {position}");
            }
            _ => {
                println!("{}'s turn", turn_label(state));
                prompt_move(input, state)?;
            }
        }

        println!("{}", render_board(state, false));

        if state.has_winner(None) {
            announce_outcome(state, msg_rng);
            return Ok(());
        }
        if state.is_full() {
            state.set_outcome(Outcome::Draw);
            announce_outcome(state, msg_rng);
            return Ok(());
        }
        state.advance_turn();
    }
}

/// Ask whether to play another round
fn ask_replay(input: &mut impl BufRead) -> Result<bool> {
    loop {
        print!("\nDo you want to play again? ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Invalid input. Please enter yes or no"),
        }
    }
}

// ============================================================================
// LEVEL 3 - PROMPTS
// ============================================================================

/// Use the flag value when given, otherwise prompt until a parse succeeds
fn resolve<T>(flag: Option<&str>, input: &mut impl BufRead, prompt: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match flag {
        Some(raw) => raw
            .parse()
            .map_err(|e: T::Err| anyhow::anyhow!("{e}: {raw:?}")),
        None => prompt_parse(input, prompt),
    }
}

/// Prompt, parse, and re-prompt on errors until the input parses
fn prompt_parse<T>(input: &mut impl BufRead, prompt: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game was configured");
        }
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(e) => println!("Error: {e}"),
        }
    }
}

/// Prompt for a move until a legal one is applied
fn prompt_move(input: &mut impl BufRead, state: &mut GameState) -> Result<u8> {
    loop {
        print!("Please enter an available position: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed mid-round");
        }
        match line.trim().parse::<u8>() {
            Ok(position) if state.apply_move(position, None) => return Ok(position),
            Ok(_) => println!("Invalid position. Try again!"),
            Err(_) => println!("Please enter a number!"),
        }
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Render the board; empty cells show their position digit when asked
fn render_board(state: &GameState, show_positions: bool) -> String {
    let cell = |index: usize| match state.cells()[index] {
        Some(mark) => mark.as_char(),
        None if show_positions => (b'1' + index as u8) as char,
        None => ' ',
    };
    format!(
        " {} | {} | {} \n-----------\n {} | {} | {} \n-----------\n {} | {} | {} \n",
        cell(0), cell(1), cell(2),
        cell(3), cell(4), cell(5),
        cell(6), cell(7), cell(8),
    )
}

/// "Player 1"/"Player 2" for the side holding the given mark
fn player_name(config: &GameConfig, mark: Mark) -> String {
    let first_mark = match config.mode {
        GameMode::PlayerVsPlayer => Mark::X,
        GameMode::PlayerVsComputer => match config.order {
            TurnOrder::HumanFirst => config.human_mark,
            TurnOrder::HumanSecond => config.computer_mark(),
        },
    };
    if mark == first_mark {
        "Player 1".to_string()
    } else {
        "Player 2".to_string()
    }
}

/// Label for the side about to move
fn turn_label(state: &GameState) -> String {
    player_name(state.config(), state.active_mark())
}

/// Print the end-of-round announcement
fn announce_outcome(state: &GameState, rng: &mut ChaCha8Rng) {
    let config = state.config();
    match state.outcome() {
        Outcome::Win(mark) => {
            let computer_won =
                config.mode == GameMode::PlayerVsComputer && mark == config.computer_mark();
            if computer_won {
                println!("{}", messages::pick(&messages::DEFEAT, rng));
            } else {
                let name = player_name(config, mark);
                println!(
                    "{}",
                    messages::pick(&messages::VICTORY, rng).replace("{}", &name)
                );
            }
        }
        Outcome::Draw => println!("{}", messages::pick(&messages::DRAW, rng)),
        Outcome::InProgress => {}
    }
}

// ============================================================================
// TESTS
// ============================================================================
