use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Position of a card within a [`Hand`].
///
/// Two copies of every (color, rank) exist, so card values alone cannot say
/// which physical card a combination uses; slots can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(usize);

impl Slot {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The ordered cards dealt for one evaluation.
///
/// ```
/// use rummy_rs::hand::Hand;
///
/// let hand: Hand = "R1 R2 R3 Y7".parse().unwrap();
/// assert_eq!(hand.len(), 4);
/// assert_eq!(hand.slots().nth(3).unwrap().0.index(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
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

    pub fn get(&self, slot: Slot) -> Option<Card> {
        self.cards.get(slot.0).copied()
    }

    /// Cards paired with their slots, in hand order.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, Card)> + '_ {
        self.cards.iter().enumerate().map(|(i, c)| (Slot(i), *c))
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Ok(Hand::new(cards))
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand::new(cards)
    }
}
