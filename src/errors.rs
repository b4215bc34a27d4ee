use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/*
    GAME ERRORS
*/
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum GameError {
    // Configuration errors, fixed for the life of the game
    #[error("The number of trials must be positive")]
    TrialsMustBePositive,
    #[error("The secret word must have at least one letter")]
    SecretWordMustHaveAtLeastOneLetter,

    // Guess errors, cleared by the next accepted guess
    #[error("Multiple letters can't be guessed at once")]
    MultipleLettersNotAllowed,
    #[error("Invalid character, the guess must be a letter from a to z")]
    InvalidCharacter,
}

impl GameError {
    /// Whether the error comes from the options the game was started with
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GameError::TrialsMustBePositive | GameError::SecretWordMustHaveAtLeastOneLetter
        )
    }
}
