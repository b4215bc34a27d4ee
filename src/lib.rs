//! Rules engine for a single-player game of hangman.
//!
//! Start a game with [`start_game`] (or a [`HangmanFactory`]), submit one
//! letter at a time through [`Game::submit_guess`] and read back the
//! revealed word and outcome until [`Game::is_over`] says it's done.
//! Bad input never panics or returns an error: it's recorded and exposed
//! through [`Game::problem`].

mod errors;
mod game;
mod hangman;
mod models;

pub use errors::GameError;
pub use game::Game;
pub use hangman::{start_game, Hangman, HangmanFactory, PLACEHOLDER};
pub use models::{GameOptions, GameResult, GameSnapshot, Letter};
