pub trait Game {
    type Guess;
    type Outcome;
    type Problem;

    /// Submit raw player input. Invalid input is recorded as a problem
    /// instead of being returned as an error.
    fn submit_guess(&mut self, guess: &str) -> &mut Self;
    /// Play an already validated guess
    fn guess(&mut self, guess: Self::Guess) -> &mut Self;
    fn is_over(&self) -> bool;
    fn result(&self) -> Self::Outcome;
    fn available_trials(&self) -> u64;
    fn problem(&self) -> Option<Self::Problem>;
}
