//! Session configuration
//!
//! A `GameConfig` is built whole from its independent fields; the
//! computer's mark is always derived from the human's, so the pair can
//! never drift apart. Invalid text input fails at the `FromStr` boundary
//! with a `ConfigError`, and a game never starts from an invalid
//! configuration.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Mark;

/// Game mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    PlayerVsComputer,
    PlayerVsPlayer,
}

/// Bot strength tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

/// Who takes the first turn of a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOrder {
    HumanFirst,
    HumanSecond,
}

/// Configuration parse/validation errors
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("game mode must be 1 (player vs computer) or 2 (player vs player)")]
    InvalidMode,
    #[error("difficulty must be easy, normal or hard")]
    InvalidDifficulty,
    #[error("mark must be X or O")]
    InvalidMark,
    #[error("turn order must be 1 (first) or 2 (second)")]
    InvalidOrder,
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "pvc" => Ok(GameMode::PlayerVsComputer),
            "2" | "pvp" => Ok(GameMode::PlayerVsPlayer),
            _ => Err(ConfigError::InvalidMode),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::InvalidDifficulty),
        }
    }
}

impl FromStr for Mark {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" => Ok(Mark::X),
            "o" => Ok(Mark::O),
            _ => Err(ConfigError::InvalidMark),
        }
    }
}

impl FromStr for TurnOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "first" => Ok(TurnOrder::HumanFirst),
            "2" | "second" => Ok(TurnOrder::HumanSecond),
            _ => Err(ConfigError::InvalidOrder),
        }
    }
}

/// Validated session configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Bot strength; meaningful only for `PlayerVsComputer`
    pub difficulty: Difficulty,
    pub human_mark: Mark,
    pub order: TurnOrder,
}

impl GameConfig {
    pub fn new(mode: GameMode, difficulty: Difficulty, human_mark: Mark, order: TurnOrder) -> Self {
        Self {
            mode,
            difficulty,
            human_mark,
            order,
        }
    }

    /// The computer's mark, always complementary to the human's
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsComputer,
            difficulty: Difficulty::Easy,
            human_mark: Mark::X,
            order: TurnOrder::HumanFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("1".parse::<GameMode>(), Ok(GameMode::PlayerVsComputer));
        assert_eq!("PvP".parse::<GameMode>(), Ok(GameMode::PlayerVsPlayer));
        assert_eq!("3".parse::<GameMode>(), Err(ConfigError::InvalidMode));
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "impossible".parse::<Difficulty>(),
            Err(ConfigError::InvalidDifficulty)
        );
    }

    #[test]
    fn test_parse_mark() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::X));
        assert_eq!("O".parse::<Mark>(), Ok(Mark::O));
        assert_eq!("z".parse::<Mark>(), Err(ConfigError::InvalidMark));
    }

    #[test]
    fn test_parse_order() {
        assert_eq!("1".parse::<TurnOrder>(), Ok(TurnOrder::HumanFirst));
        assert_eq!("second".parse::<TurnOrder>(), Ok(TurnOrder::HumanSecond));
        assert_eq!("0".parse::<TurnOrder>(), Err(ConfigError::InvalidOrder));
    }

    #[test]
    fn test_computer_mark_is_complementary() {
        let config = GameConfig {
            human_mark: Mark::X,
            ..GameConfig::default()
        };
        assert_eq!(config.computer_mark(), Mark::O);

        let config = GameConfig {
            human_mark: Mark::O,
            ..GameConfig::default()
        };
        assert_eq!(config.computer_mark(), Mark::X);
    }

    #[test]
    fn test_deserialize_config() {
        let json = r#"{
            "mode": "PlayerVsComputer",
            "difficulty": "Hard",
            "human_mark": "O",
            "order": "HumanSecond"
        }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.human_mark, Mark::O);
        assert_eq!(config.computer_mark(), Mark::X);
    }

    #[test]
    fn test_deserialize_rejects_unknown_values() {
        let json = r#"{
            "mode": "PlayerVsComputer",
            "difficulty": "Impossible",
            "human_mark": "X",
            "order": "HumanFirst"
        }"#;
        assert!(serde_json::from_str::<GameConfig>(json).is_err());
    }
}
