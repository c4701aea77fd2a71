//! Human-vs-computer battle
//!
//! Both sides race to find the same secret, taking turns and seeing each
//! other's feedback. Each side has its own attempt budget.

use super::round::{attempt_budget, pick_secret, validate_guess};
use super::GameError;
use crate::core::{Pattern, Word};
use crate::wordlists::Corpus;
use log::{debug, info};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Invalid inputs in a row that forfeit the battle
pub const MAX_STRIKES: usize = 3;

/// One of the two battling players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// The opposing side
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }

    /// Either side with equal probability
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random::<bool>() {
            Self::Player
        } else {
            Self::Computer
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Player => 0,
            Self::Computer => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("You"),
            Self::Computer => f.write_str("Computer"),
        }
    }
}

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// This side guessed the secret
    Winner(Side),
    /// The player ran out of strikes
    Forfeit,
    /// Neither side found the secret
    Draw,
}

impl BattleOutcome {
    /// The winning side, if any
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::Winner(side) => Some(side),
            Self::Forfeit => Some(Side::Computer),
            Self::Draw => None,
        }
    }
}

/// An accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub side: Side,
    pub guess: Word,
    pub pattern: Pattern,
}

/// State of one battle
#[derive(Debug, Clone)]
pub struct Battle<'a> {
    corpus: &'a Corpus,
    secret: &'a Word,
    to_move: Side,
    remaining: [usize; 2],
    strikes: usize,
    guessed: FxHashSet<String>,
    history: Vec<Turn>,
    outcome: Option<BattleOutcome>,
}

impl<'a> Battle<'a> {
    /// Start a battle over a random secret of `length` letters
    ///
    /// # Errors
    ///
    /// Returns `EmptyCorpus`, `LengthUnavailable` or `NoWordsOfLength` when no
    /// secret of that length can be drawn.
    pub fn start<R: Rng + ?Sized>(
        corpus: &'a Corpus,
        length: usize,
        first: Side,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let secret = pick_secret(corpus, length, rng)?;
        Ok(Self::with_secret(corpus, secret, first))
    }

    /// Start a battle over a chosen secret
    #[must_use]
    pub fn with_secret(corpus: &'a Corpus, secret: &'a Word, first: Side) -> Self {
        let budget = attempt_budget(secret.length());
        info!(
            "Battle started: {} letters, {budget} attempts each, {first:?} first",
            secret.length()
        );
        debug!("Secret: {secret}");

        Self {
            corpus,
            secret,
            to_move: first,
            remaining: [budget; 2],
            strikes: 0,
            guessed: FxHashSet::default(),
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Play a guess for the side to move
    ///
    /// # Errors
    ///
    /// Returns `RoundNotActive` once the battle is over and `AlreadyGuessed`
    /// for a word either side has played. `WrongLength` and `UnknownWord` from
    /// the player count as strikes; the third strike in a row forfeits.
    pub fn submit(&mut self, guess: &str) -> Result<Turn, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::RoundNotActive);
        }

        let normalized = guess.trim().to_ascii_uppercase();
        if self.guessed.contains(&normalized) {
            return Err(GameError::AlreadyGuessed(normalized));
        }

        let word = match validate_guess(self.corpus, self.secret.length(), &normalized) {
            Ok(word) => word,
            Err(err) => {
                if self.to_move == Side::Player && err.is_strike() {
                    self.strike();
                }
                return Err(err);
            }
        };

        let side = self.to_move;
        if side == Side::Player {
            self.strikes = 0;
        }

        let pattern = Pattern::calculate(word, self.secret);
        self.remaining[side.index()] -= 1;
        self.guessed.insert(word.text().to_string());
        debug!("{side:?} guessed {word}: {pattern}");

        if pattern.is_perfect() {
            self.finish(BattleOutcome::Winner(side));
        } else if self.remaining[side.other().index()] > 0 {
            self.to_move = side.other();
        } else if self.remaining[side.index()] == 0 {
            self.finish(BattleOutcome::Draw);
        }

        let turn = Turn {
            side,
            guess: word.clone(),
            pattern,
        };
        self.history.push(turn.clone());
        Ok(turn)
    }

    fn strike(&mut self) {
        self.strikes += 1;
        debug!("Invalid input {}/{MAX_STRIKES}", self.strikes);
        if self.strikes >= MAX_STRIKES {
            self.finish(BattleOutcome::Forfeit);
        }
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        info!("Battle over: {outcome:?}");
        self.outcome = Some(outcome);
    }

    /// Side whose turn it is
    #[must_use]
    pub const fn to_move(&self) -> Side {
        self.to_move
    }

    /// Attempts `side` has left
    #[must_use]
    pub const fn remaining(&self, side: Side) -> usize {
        self.remaining[side.index()]
    }

    /// Invalid player inputs since the last accepted guess
    #[must_use]
    pub const fn strikes(&self) -> usize {
        self.strikes
    }

    /// Result, once the battle is over
    #[must_use]
    pub const fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    /// True once an outcome is decided
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The word both sides are guessing
    #[must_use]
    pub const fn secret(&self) -> &'a Word {
        self.secret
    }

    /// Letters in the secret
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.length()
    }

    /// Accepted guesses from both sides in order
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }
}
