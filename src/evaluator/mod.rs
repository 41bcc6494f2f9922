//! Combination discovery and greedy selection.
//!
//! A hand is split by color to find straights (runs of consecutive ranks in
//! one color) and by rank to find sets (three or four cards of one rank).
//! Candidates are then ranked by score and picked first-fit without sharing
//! a slot. The selection is a greedy heuristic: it is deterministic but not
//! guaranteed to be the best possible partition of the hand.

pub(crate) mod color_groups;
pub(crate) mod selector;
pub(crate) mod sets;
pub(crate) mod straights;

pub use color_groups::{group_by_color, ColorGroups};
pub use sets::{find_sets, SET_MAX_LEN, SET_MIN_LEN};
pub use straights::{find_straights, MIN_STRAIGHT_LEN};

use crate::cards::Card;
use crate::hand::{Hand, Slot};
use std::fmt;

/// What a combination is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Kind {
    /// Consecutive ranks, one color.
    Straight,
    /// One rank, three or four cards.
    Set,
    /// Leftover cards, reported for display only.
    Remainder,
}

impl Kind {
    pub const fn label(self) -> &'static str {
        match self {
            Kind::Straight => "Straight",
            Kind::Set => "Set",
            Kind::Remainder => "Unused",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scored group of slotted cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    kind: Kind,
    members: Vec<(Slot, Card)>,
    score: u32,
}

fn rank_sum(members: &[(Slot, Card)]) -> u32 {
    members.iter().map(|(_, c)| u32::from(c.rank().value())).sum()
}

impl Combination {
    pub(crate) fn straight(members: Vec<(Slot, Card)>) -> Self {
        let score = rank_sum(&members);
        Self { kind: Kind::Straight, members, score }
    }

    /// Set score is `size * rank`; callers pass at least one member.
    pub(crate) fn set(members: Vec<(Slot, Card)>) -> Self {
        let rank = members.first().map(|(_, c)| u32::from(c.rank().value())).unwrap_or(0);
        let score = members.len() as u32 * rank;
        Self { kind: Kind::Set, members, score }
    }

    pub(crate) fn remainder(members: Vec<(Slot, Card)>) -> Self {
        let score = rank_sum(&members);
        Self { kind: Kind::Remainder, members, score }
    }

    pub const fn kind(&self) -> Kind {
        self.kind
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member cards with the hand slots they occupy.
    pub fn members(&self) -> &[(Slot, Card)] {
        &self.members
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.members.iter().map(|(_, c)| *c)
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.members.iter().map(|(s, _)| *s)
    }

    /// Check the shape rules for this combination's kind.
    ///
    /// Straights need three or more cards of one color with each rank one
    /// above the previous. Sets need three or four cards of one rank, and a
    /// four-card set must use every color once.
    pub fn is_valid(&self) -> bool {
        let cards: Vec<Card> = self.cards().collect();
        match self.kind {
            Kind::Straight => {
                cards.len() >= MIN_STRAIGHT_LEN
                    && cards.windows(2).all(|w| {
                        w[0].color() == w[1].color() && w[0].rank().succ() == Some(w[1].rank())
                    })
            }
            Kind::Set => {
                (SET_MIN_LEN..=SET_MAX_LEN).contains(&cards.len())
                    && cards.windows(2).all(|w| w[0].rank() == w[1].rank())
                    && (cards.len() < SET_MAX_LEN || sets::colors_distinct(&self.members))
            }
            Kind::Remainder => !cards.is_empty(),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.kind)?;
        for (i, c) in self.cards().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "] = {}", self.score)
    }
}

/// Outcome of one evaluation.
///
/// Every slot of the evaluated hand appears exactly once, either in one of
/// `combinations` or in `unused`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionResult {
    combinations: Vec<Combination>,
    unused: Vec<(Slot, Card)>,
    total_score: u32,
}

impl SelectionResult {
    pub(crate) fn new(combinations: Vec<Combination>, unused: Vec<(Slot, Card)>) -> Self {
        let total_score = combinations.iter().map(Combination::score).sum();
        Self { combinations, unused, total_score }
    }

    /// Accepted straights and sets, highest score first.
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Leftover slots in hand order.
    pub fn unused(&self) -> &[(Slot, Card)] {
        &self.unused
    }

    pub fn unused_cards(&self) -> Vec<Card> {
        self.unused.iter().map(|(_, c)| *c).collect()
    }

    /// Sum of the accepted combination scores. Unused cards never count.
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Leftover cards wrapped as a [`Kind::Remainder`] combination, scored
    /// as the sum of their ranks. `None` when every card was used.
    pub fn remainder(&self) -> Option<Combination> {
        if self.unused.is_empty() {
            None
        } else {
            Some(Combination::remainder(self.unused.clone()))
        }
    }

    pub fn is_satisfying(&self) -> bool {
        is_satisfying(&self.combinations)
    }
}

/// Evaluation knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Upper bound on set candidates offered to the selector.
    pub max_set_candidates: usize,
}

impl EvalConfig {
    pub const DEFAULT_MAX_SET_CANDIDATES: usize = 4;
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_set_candidates: Self::DEFAULT_MAX_SET_CANDIDATES }
    }
}

/// Find a high-scoring set of non-overlapping straights and sets.
///
/// ```
/// use rummy_rs::evaluator::{find_best_combinations, Kind};
/// use rummy_rs::hand::Hand;
///
/// let hand: Hand = "R1 R2 R3 R5 R6 R7".parse().unwrap();
/// let result = find_best_combinations(&hand);
/// assert_eq!(result.combinations().len(), 2);
/// assert!(result.combinations().iter().all(|c| c.kind() == Kind::Straight));
/// assert_eq!(result.total_score(), 24);
/// assert!(result.unused().is_empty());
/// ```
pub fn find_best_combinations(hand: &Hand) -> SelectionResult {
    find_best_combinations_with(hand, &EvalConfig::default())
}

/// [`find_best_combinations`] with explicit configuration.
pub fn find_best_combinations_with(hand: &Hand, config: &EvalConfig) -> SelectionResult {
    let groups = group_by_color(hand);
    let mut candidates = Vec::new();
    for (_, cards) in groups.iter() {
        candidates.extend(find_straights(cards));
    }
    candidates.extend(find_sets(hand, config.max_set_candidates));
    selector::select(hand, candidates)
}

/// True when the combinations hold at least one straight and one set.
///
/// ```
/// use rummy_rs::evaluator::{find_best_combinations, is_satisfying};
/// use rummy_rs::hand::Hand;
///
/// let hand: Hand = "R1 R2 R3 Y9 B9 K9".parse().unwrap();
/// assert!(is_satisfying(find_best_combinations(&hand).combinations()));
/// ```
pub fn is_satisfying(combinations: &[Combination]) -> bool {
    let has_straight = combinations.iter().any(|c| c.kind() == Kind::Straight);
    let has_set = combinations.iter().any(|c| c.kind() == Kind::Set);
    has_straight && has_set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo(kind: Kind, s: &str) -> Combination {
        let hand: Hand = s.parse().unwrap();
        let members: Vec<(Slot, Card)> = hand.slots().collect();
        match kind {
            Kind::Straight => Combination::straight(members),
            Kind::Set => Combination::set(members),
            Kind::Remainder => Combination::remainder(members),
        }
    }

    #[test]
    fn scores_follow_kind() {
        assert_eq!(combo(Kind::Straight, "R5 R6 R7").score(), 18);
        assert_eq!(combo(Kind::Set, "R7 Y7 B7 K7").score(), 28);
        assert_eq!(combo(Kind::Remainder, "R1 Y13").score(), 14);
    }

    #[test]
    fn validity_rules() {
        assert!(combo(Kind::Straight, "B11 B12 B13").is_valid());
        assert!(!combo(Kind::Straight, "B11 B12").is_valid());
        assert!(!combo(Kind::Straight, "B11 R12 B13").is_valid());
        assert!(!combo(Kind::Straight, "B11 B11 B12").is_valid());
        assert!(combo(Kind::Set, "R5 R5 Y5").is_valid());
        assert!(!combo(Kind::Set, "R5 R5 Y5 B5").is_valid());
        assert!(!combo(Kind::Set, "R5 Y5 B6").is_valid());
        assert!(!combo(Kind::Set, "R5 Y5").is_valid());
    }

    #[test]
    fn display_lists_cards_and_score() {
        assert_eq!(combo(Kind::Straight, "R1 R2 R3").to_string(), "Straight [R1 R2 R3] = 6");
    }

    #[test]
    fn gate_needs_both_kinds() {
        let st = combo(Kind::Straight, "R1 R2 R3");
        let set = combo(Kind::Set, "R9 Y9 B9");
        assert!(!is_satisfying(&[]));
        assert!(!is_satisfying(&[st.clone()]));
        assert!(!is_satisfying(&[set.clone()]));
        assert!(is_satisfying(&[set, st]));
    }

    #[test]
    fn remainder_is_derived_from_unused() {
        let hand: Hand = "R1 Y5".parse().unwrap();
        let result = find_best_combinations(&hand);
        let rem = result.remainder().unwrap();
        assert_eq!(rem.kind(), Kind::Remainder);
        assert_eq!(rem.score(), 6);
        assert_eq!(result.total_score(), 0);
    }

    #[test]
    fn empty_hand_yields_empty_result() {
        let result = find_best_combinations(&Hand::default());
        assert!(result.combinations().is_empty());
        assert!(result.unused().is_empty());
        assert_eq!(result.total_score(), 0);
        assert!(result.remainder().is_none());
    }
}
