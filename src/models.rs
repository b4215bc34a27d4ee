use core::fmt;
use std::str::FromStr;

use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/*
    Start-up options
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameOptions {
    pub secret_word: String,
    pub trials: i64,
}

impl GameOptions {
    pub fn new(secret_word: impl Into<String>, trials: i64) -> Self {
        GameOptions {
            secret_word: secret_word.into(),
            trials,
        }
    }

    pub fn schema() -> String {
        serde_json::to_string_pretty(&schema_for!(GameOptions)).unwrap_or_default()
    }
}

/*
    End of start-up options
*/

/// A single guessed letter, always in `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Letter(char);

impl Letter {
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl TryFrom<&str> for Letter {
    type Error = GameError;

    fn try_from(value: &str) -> Result<Letter, GameError> {
        let mut chars = value.chars();
        let letter = match (chars.next(), chars.next()) {
            // Whole words are never accepted
            (Some(_), Some(_)) => return Err(GameError::MultipleLettersNotAllowed),
            (Some(c), None) => c,
            (None, _) => return Err(GameError::InvalidCharacter),
        };
        // Confirm that the character is exclusively a lowercase letter
        if !letter.is_ascii_lowercase() {
            return Err(GameError::InvalidCharacter);
        }

        Ok(Letter(letter))
    }
}

impl TryFrom<String> for Letter {
    type Error = GameError;

    fn try_from(value: String) -> Result<Letter, GameError> {
        Letter::try_from(value.as_str())
    }
}

impl FromStr for Letter {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Letter::try_from(s)
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.0.to_string()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of the game as seen after the latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum GameResult {
    PlayerWins,
    PlayerLoses,
    Ongoing,
    CorrectLetterJustGuessed,
}

impl GameResult {
    fn to_str(&self) -> &str {
        match self {
            GameResult::PlayerWins => "Congratulations, you won!",
            GameResult::PlayerLoses => "Sorry, you lost",
            GameResult::Ongoing => "Keep trying",
            GameResult::CorrectLetterJustGuessed => "Correct letter, keep it up",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Read-only view of a game, safe to hand to a client.
/// The secret word is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameSnapshot {
    pub revealed_secret: String,
    pub available_trials: u64,
    pub trials_used: u64,
    pub is_over: bool,
    pub is_misconfigured: bool,
    pub result: GameResult,
    pub problem: Option<GameError>,
}

impl GameSnapshot {
    pub fn schema() -> String {
        serde_json::to_string_pretty(&schema_for!(GameSnapshot)).unwrap_or_default()
    }
}
