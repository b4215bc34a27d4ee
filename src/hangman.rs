use tracing::{debug, info, instrument, warn};

use crate::{
    errors::GameError,
    game::Game,
    models::{GameOptions, GameResult, GameSnapshot, Letter},
};

/// Shown in place of letters that haven't been guessed yet
pub const PLACEHOLDER: char = '_';

/// What the most recent accepted guess did.
/// Rejected guesses reset it to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LastGuess {
    #[default]
    None,
    Correct,
    Incorrect,
}

/// Represents one round of hangman.\
/// `secret_word`: The word to uncover\
/// `trials`: The total number of guesses allowed\
/// `trials_used`: Accepted guesses so far, right or wrong\
/// `revealed`: One slot per letter of the secret, filled once guessed
#[derive(Debug, Clone)]
pub struct Hangman {
    secret_word: Vec<char>,
    trials: i64,
    trials_used: u64,
    revealed: Vec<Option<char>>,
    last_guess: LastGuess,
    problem: Option<GameError>,
}

impl Hangman {
    /// Create a new game\
    /// ### Parameters
    /// `secret_word`: The word to guess. An empty word misconfigures the game\
    /// `trials`: How many guesses the player has. Zero or less misconfigures the game
    ///
    /// Only letters `a` to `z` can be guessed, so a secret holding anything
    /// else (`"Cat"`, `"_"`) is never fully revealed and that game can only
    /// end by running out of trials.
    #[instrument(skip(secret_word))]
    pub fn new(secret_word: &str, trials: i64) -> Self {
        let secret_word: Vec<char> = secret_word.chars().collect();
        let problem = Hangman::configuration_problem(&secret_word, trials);
        if let Some(problem) = problem.filter(GameError::is_configuration) {
            warn!(%problem, "Starting a misconfigured game");
        }

        Hangman {
            revealed: vec![None; secret_word.len()],
            secret_word,
            trials,
            trials_used: 0,
            last_guess: LastGuess::None,
            problem,
        }
    }

    /// The empty word check comes first, so it wins when both options are wrong
    fn configuration_problem(secret_word: &[char], trials: i64) -> Option<GameError> {
        if secret_word.is_empty() {
            Some(GameError::SecretWordMustHaveAtLeastOneLetter)
        } else if trials <= 0 {
            Some(GameError::TrialsMustBePositive)
        } else {
            None
        }
    }

    pub fn is_misconfigured(&self) -> bool {
        self.secret_word.is_empty() || self.trials <= 0
    }

    /// The trial budget, zero when it isn't positive
    fn budget(&self) -> u64 {
        u64::try_from(self.trials).unwrap_or(0)
    }

    fn is_revealed(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    pub fn trials_used(&self) -> u64 {
        self.trials_used
    }

    /// The secret word with unguessed letters replaced by `_`
    pub fn revealed_secret(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER))
            .collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            revealed_secret: self.revealed_secret(),
            available_trials: self.available_trials(),
            trials_used: self.trials_used,
            is_over: self.is_over(),
            is_misconfigured: self.is_misconfigured(),
            result: self.result(),
            problem: self.problem,
        }
    }

    /// Reveal every position holding `letter`. Returns whether any did.
    fn reveal(&mut self, letter: char) -> bool {
        let mut found = false;
        for (slot, c) in self.revealed.iter_mut().zip(&self.secret_word) {
            if *c == letter {
                *slot = Some(letter);
                found = true;
            }
        }
        found
    }
}

impl Game for Hangman {
    type Guess = Letter;
    type Outcome = GameResult;
    type Problem = GameError;

    #[instrument(skip(self))]
    fn submit_guess(&mut self, guess: &str) -> &mut Self {
        if self.is_over() {
            debug!("Game is already over, ignoring guess");
            return self;
        }

        match Letter::try_from(guess) {
            Ok(letter) => self.guess(letter),
            Err(problem) => {
                debug!(%problem, "Rejected guess");
                self.problem = Some(problem);
                self.last_guess = LastGuess::None;
                self
            }
        }
    }

    fn guess(&mut self, guess: Letter) -> &mut Self {
        if self.is_over() {
            return self;
        }

        self.problem = None;
        self.trials_used = self.trials_used.saturating_add(1);
        let correct = self.reveal(guess.as_char());
        self.last_guess = if correct {
            LastGuess::Correct
        } else {
            LastGuess::Incorrect
        };
        debug!(
            letter = %guess,
            correct,
            trials_used = self.trials_used,
            "Accepted guess"
        );

        if self.is_over() {
            info!(result = ?self.result(), "Game over");
        }
        self
    }

    fn is_over(&self) -> bool {
        self.is_misconfigured()
            || self.is_revealed()
            || self.trials_used >= self.budget()
    }

    fn result(&self) -> GameResult {
        match (self.last_guess, self.is_over()) {
            (LastGuess::Correct, true) => GameResult::PlayerWins,
            (LastGuess::Correct, false) => GameResult::CorrectLetterJustGuessed,
            (_, true) => GameResult::PlayerLoses,
            (_, false) => GameResult::Ongoing,
        }
    }

    fn available_trials(&self) -> u64 {
        if self.is_over() {
            return 0;
        }
        self.budget().saturating_sub(self.trials_used)
    }

    fn problem(&self) -> Option<GameError> {
        self.problem
    }
}

/// Starts new games from the player's options
#[derive(Debug, Clone, Copy, Default)]
pub struct HangmanFactory;

impl HangmanFactory {
    pub fn new() -> Self {
        HangmanFactory
    }

    /// Never fails: invalid options give a game that is already over
    pub fn start_game(&self, secret_word: &str, trials: i64) -> Hangman {
        Hangman::new(secret_word, trials)
    }

    pub fn start_with(&self, options: GameOptions) -> Hangman {
        self.start_game(&options.secret_word, options.trials)
    }
}

pub fn start_game(secret_word: &str, trials: i64) -> Hangman {
    HangmanFactory::new().start_game(secret_word, trials)
}
