//! Shuffle, deal and evaluate until a hand is worth showing.

use crate::deck::{Deck, DeckError, DOUBLE_DECK_LEN};
use crate::evaluator::{find_best_combinations_with, EvalConfig, SelectionResult};
use crate::hand::Hand;
use log::{info, warn};
use rand::Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("hand size must be between 1 and {max}, got {got}")]
    HandSize { got: usize, max: usize },
    #[error("max attempts must be at least 1")]
    NoAttempts,
    #[error("no satisfying hand after {attempts} deals")]
    Exhausted { attempts: u32 },
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// How hands are dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealConfig {
    pub hand_size: usize,
    /// Deals tried before giving up on a satisfying hand.
    pub max_attempts: u32,
    /// Keep re-dealing until the hand has a straight and a set.
    pub require_satisfying: bool,
    /// Base seed; attempt `n` shuffles with `seed + n`. `None` uses the thread RNG.
    pub seed: Option<u64>,
    pub eval: EvalConfig,
}

impl DealConfig {
    pub const DEFAULT_HAND_SIZE: usize = 21;
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

    pub fn validate(&self) -> Result<(), DealError> {
        if self.hand_size == 0 || self.hand_size > DOUBLE_DECK_LEN {
            return Err(DealError::HandSize { got: self.hand_size, max: DOUBLE_DECK_LEN });
        }
        if self.max_attempts == 0 {
            return Err(DealError::NoAttempts);
        }
        Ok(())
    }
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            hand_size: Self::DEFAULT_HAND_SIZE,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            require_satisfying: true,
            seed: None,
            eval: EvalConfig::default(),
        }
    }
}

/// A dealt hand with its evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hand: Hand,
    pub result: SelectionResult,
    /// Number of deals it took, starting at 1.
    pub attempts: u32,
}

/// Runs the shuffle, deal, evaluate, check loop.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    config: DealConfig,
}

impl Dealer {
    pub fn new(config: DealConfig) -> Result<Self, DealError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DealConfig {
        &self.config
    }

    /// Deal one hand from a fresh double deck shuffled by `shuffle`.
    fn deal_once<F>(&self, shuffle: F) -> Result<(Hand, SelectionResult), DealError>
    where
        F: FnOnce(&mut Deck),
    {
        let mut deck = Deck::double();
        shuffle(&mut deck);
        let hand = deck.deal(self.config.hand_size)?;
        let result = find_best_combinations_with(&hand, &self.config.eval);
        Ok((hand, result))
    }

    /// Deal until the hand passes the gate or the attempt budget runs out.
    ///
    /// ```
    /// use rummy_rs::dealer::{DealConfig, Dealer};
    ///
    /// let dealer = Dealer::new(DealConfig { seed: Some(7), ..DealConfig::default() }).unwrap();
    /// let deal = dealer.deal().unwrap();
    /// assert_eq!(deal.hand.len(), 21);
    /// assert!(deal.result.is_satisfying());
    /// ```
    pub fn deal(&self) -> Result<Deal, DealError> {
        match self.config.seed {
            Some(seed) => self.deal_loop(|attempt, deck| {
                deck.shuffle_seeded(seed.wrapping_add(u64::from(attempt)))
            }),
            None => {
                let mut rng = rand::rng();
                self.deal_loop(|_, deck| deck.shuffle_with(&mut rng))
            }
        }
    }

    /// [`Dealer::deal`] drawing shuffles from the given RNG.
    pub fn deal_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Deal, DealError> {
        self.deal_loop(|_, deck| deck.shuffle_with(&mut *rng))
    }

    fn deal_loop<F>(&self, mut shuffle: F) -> Result<Deal, DealError>
    where
        F: FnMut(u32, &mut Deck),
    {
        for attempt in 1..=self.config.max_attempts {
            let (hand, result) = self.deal_once(|deck| shuffle(attempt, deck))?;
            if !self.config.require_satisfying || result.is_satisfying() {
                info!(
                    "dealt {} cards after {attempt} attempt(s), total score {}",
                    hand.len(),
                    result.total_score()
                );
                return Ok(Deal { hand, result, attempts: attempt });
            }
        }
        warn!("no satisfying hand after {} deals", self.config.max_attempts);
        Err(DealError::Exhausted { attempts: self.config.max_attempts })
    }
}
