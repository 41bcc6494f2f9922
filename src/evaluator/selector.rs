use super::{Combination, SelectionResult};
use crate::hand::{Hand, Slot};
use log::debug;

/// Which hand slots are already taken by an accepted combination.
#[derive(Debug, Clone)]
struct UsedSlots {
    used: Vec<bool>,
}

impl UsedSlots {
    fn new(len: usize) -> Self {
        Self { used: vec![false; len] }
    }

    fn is_used(&self, slot: Slot) -> bool {
        self.used[slot.index()]
    }

    fn all_free(&self, combo: &Combination) -> bool {
        combo.slots().all(|s| !self.is_used(s))
    }

    /// Mark every slot of `combo` as used. A slot taken twice is a bug in
    /// candidate generation, never a recoverable condition.
    fn claim(&mut self, combo: &Combination) {
        for slot in combo.slots() {
            assert!(!self.is_used(slot), "slot {slot} claimed twice by {combo}");
            self.used[slot.index()] = true;
        }
    }
}

/// Greedy first-fit selection over score-ranked candidates.
///
/// Candidates are stably sorted by score, highest first, so ties keep their
/// generation order. Each candidate whose slots are all free is accepted.
pub(crate) fn select(hand: &Hand, mut candidates: Vec<Combination>) -> SelectionResult {
    candidates.sort_by(|a, b| b.score().cmp(&a.score()));

    let mut used = UsedSlots::new(hand.len());
    let mut accepted = Vec::new();
    for combo in candidates {
        if used.all_free(&combo) {
            used.claim(&combo);
            debug!("accepted {combo}");
            accepted.push(combo);
        }
    }

    let unused = hand.slots().filter(|(s, _)| !used.is_used(*s)).collect();
    SelectionResult::new(accepted, unused)
}
