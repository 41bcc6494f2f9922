use super::Combination;
use crate::cards::Card;
use crate::hand::Slot;

/// Shortest run that counts as a straight.
pub const MIN_STRAIGHT_LEN: usize = 3;

/// Find every maximal straight in a rank-sorted, single-color sequence.
///
/// Only whole runs are emitted, never their sub-runs, so straights of one
/// color never overlap. A repeated rank breaks the run.
pub fn find_straights(cards: &[(Slot, Card)]) -> Vec<Combination> {
    debug_assert!(cards.windows(2).all(|w| w[0].1.color() == w[1].1.color()));
    debug_assert!(cards.windows(2).all(|w| w[0].1.rank() <= w[1].1.rank()));

    let mut straights = Vec::new();
    let mut start = 0;
    for i in 1..=cards.len() {
        let breaks = i == cards.len() || cards[i - 1].1.rank().succ() != Some(cards[i].1.rank());
        if breaks {
            if i - start >= MIN_STRAIGHT_LEN {
                straights.push(Combination::straight(cards[start..i].to_vec()));
            }
            start = i;
        }
    }
    straights
}
