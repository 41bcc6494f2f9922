use crate::cards::{Card, Color, Rank};
use crate::hand::Hand;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Copies of every (color, rank) pair in a double deck.
pub const COPIES: usize = 2;

/// Size of a double deck: 4 colors x 13 ranks x 2 copies.
pub const DOUBLE_DECK_LEN: usize = Color::ALL.len() * Rank::ALL.len() * COPIES;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("not enough cards: wanted {wanted}, {left} left")]
    NotEnoughCards { wanted: usize, left: usize },
}

/// A deck holding two copies of every colored rank.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use rummy_rs::deck::Deck;
    ///
    /// let deck = Deck::double();
    /// assert_eq!(deck.len(), 104);
    /// ```
    pub fn double() -> Self {
        let mut cards = Vec::with_capacity(DOUBLE_DECK_LEN);
        for color in Color::ALL {
            for rank in Rank::ALL {
                for _ in 0..COPIES {
                    cards.push(Card::new(color, rank));
                }
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Deal the top `n` cards, in deck order, as a hand.
    pub fn deal(&mut self, n: usize) -> Result<Hand, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards { wanted: n, left: self.cards.len() });
        }
        let cards: Vec<Card> = std::iter::from_fn(|| self.draw()).take(n).collect();
        Ok(Hand::new(cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn double_deck_has_two_of_each() {
        let d = Deck::double();
        assert_eq!(d.len(), DOUBLE_DECK_LEN);
        let mut counts: HashMap<Card, usize> = HashMap::new();
        for c in d.as_slice() {
            *counts.entry(*c).or_default() += 1;
        }
        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|&n| n == COPIES));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::double();
        let mut d2 = Deck::double();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deal_takes_top_cards_in_order() {
        let mut d = Deck::double();
        d.shuffle_seeded(7);
        let top: Vec<Card> = d.as_slice()[..21].to_vec();
        let hand = d.deal(21).unwrap();
        assert_eq!(hand.as_slice(), top.as_slice());
        assert_eq!(d.len(), DOUBLE_DECK_LEN - 21);
        let first = d.as_slice()[0];
        assert_eq!(d.draw(), Some(first));
    }

    #[test]
    fn drawing_empties_the_deck() {
        let mut d = Deck::double();
        let drawn: Vec<Card> = std::iter::from_fn(|| d.draw()).collect();
        assert_eq!(drawn.len(), DOUBLE_DECK_LEN);
        assert!(d.is_empty());
        assert_eq!(d.draw(), None);
        assert!(d.deal(0).unwrap().is_empty());
    }

    #[test]
    fn deal_fails_when_short() {
        let mut d = Deck::double();
        let _ = d.deal(100).unwrap();
        assert_eq!(d.deal(5), Err(DeckError::NotEnoughCards { wanted: 5, left: 4 }));
        assert_eq!(d.len(), 4);
    }
}
