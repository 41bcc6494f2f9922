use super::Combination;
use crate::cards::{Card, Color, Rank};
use crate::hand::{Hand, Slot};
use log::debug;

/// Smallest same-rank group that counts as a set.
pub const SET_MIN_LEN: usize = 3;
/// Largest set; a set of this size must use every color once.
pub const SET_MAX_LEN: usize = 4;

const RANK_BUCKETS: usize = Rank::MAX as usize + 1;

/// True when no two members share a color.
pub(crate) fn colors_distinct(members: &[(Slot, Card)]) -> bool {
    let mut seen = [false; Color::ALL.len()];
    for (_, card) in members {
        let i = card.color().index();
        if seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

/// Find same-rank set candidates in a hand.
///
/// Ranks are visited from 1 to 13. While a rank has three or more cards
/// left, the next set takes one card of each color when four or more cards
/// remain and every color is among them, otherwise the first three cards in
/// hand order. Set sizes therefore do not depend on the order of the hand.
/// At most `max_candidates` sets are returned; later ranks are not offered
/// once the cap is hit.
pub fn find_sets(hand: &Hand, max_candidates: usize) -> Vec<Combination> {
    let mut by_rank: [Vec<(Slot, Card)>; RANK_BUCKETS] = std::array::from_fn(|_| Vec::new());
    for (slot, card) in hand.slots() {
        by_rank[card.rank().value() as usize].push((slot, card));
    }

    let mut sets = Vec::new();
    'ranks: for rank in Rank::ALL {
        let mut rest = std::mem::take(&mut by_rank[rank.value() as usize]);
        while rest.len() >= SET_MIN_LEN {
            if sets.len() >= max_candidates {
                debug!("set candidate cap {max_candidates} reached at rank {rank}");
                break 'ranks;
            }
            let members = take_set(&mut rest);
            if members.len() == SET_MAX_LEN && !colors_distinct(&members) {
                debug!("dropping 4-card set of rank {rank}: repeated color");
                continue;
            }
            if members.len() < SET_MAX_LEN && rest.len() + members.len() >= SET_MAX_LEN {
                debug!("rank {rank} lacks a color for a 4-card set, taking three");
            }
            sets.push(Combination::set(members));
        }
    }
    sets
}

/// Remove the next set from `rest`, keeping hand order in both halves.
fn take_set(rest: &mut Vec<(Slot, Card)>) -> Vec<(Slot, Card)> {
    let mut first_of_color: [Option<usize>; Color::ALL.len()] = [None; Color::ALL.len()];
    for (i, (_, card)) in rest.iter().enumerate() {
        let first = &mut first_of_color[card.color().index()];
        if first.is_none() {
            *first = Some(i);
        }
    }

    let every_color = first_of_color.iter().all(Option::is_some);
    let picked: Vec<usize> = if rest.len() >= SET_MAX_LEN && every_color {
        first_of_color.iter().flatten().copied().collect()
    } else {
        (0..SET_MIN_LEN).collect()
    };

    let (members, kept): (Vec<_>, Vec<_>) =
        rest.drain(..).enumerate().partition(|(i, _)| picked.contains(i));
    *rest = kept.into_iter().map(|(_, m)| m).collect();
    members.into_iter().map(|(_, m)| m).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{EvalConfig, Kind};

    fn sets_of(s: &str) -> Vec<Combination> {
        let hand: Hand = s.parse().unwrap();
        find_sets(&hand, EvalConfig::DEFAULT_MAX_SET_CANDIDATES)
    }

    #[test]
    fn four_distinct_colors() {
        let sets = sets_of("R7 Y7 B7 K7");
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].kind(), Kind::Set);
        assert_eq!(sets[0].score(), 28);
    }

    #[test]
    fn three_with_repeated_color_is_fine() {
        let sets = sets_of("R5 R5 Y5");
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].score(), 15);
    }

    #[test]
    fn four_without_every_color_gives_three() {
        let sets = sets_of("R5 R5 Y5 B5");
        assert_eq!(sets.len(), 1);
        let cards: Vec<String> = sets[0].cards().map(|c| c.to_string()).collect();
        assert_eq!(cards, vec!["R5", "R5", "Y5"]);
        assert_eq!(sets[0].score(), 15);
    }

    #[test]
    fn four_card_set_takes_one_of_each_color() {
        // The duplicate red sits in front of the other colors.
        let sets = sets_of("R5 R5 Y5 B5 K5");
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].len(), 4);
        assert!(colors_distinct(sets[0].members()));
        let slots: Vec<usize> = sets[0].slots().map(|s| s.index()).collect();
        assert_eq!(slots, vec![0, 2, 3, 4]);
    }

    #[test]
    fn set_sizes_ignore_hand_order() {
        let orders = [
            "R5 Y5 B5 K5 R5",
            "R5 R5 Y5 B5 K5",
            "K5 R5 R5 B5 Y5",
            "R8 R8 Y8 Y8 B8 K8 B8",
            "B8 K8 R8 Y8 R8 Y8 B8",
            "Y8 Y8 R8 R8 B8 B8 K8",
        ];
        let scores: Vec<Vec<u32>> = orders
            .iter()
            .map(|s| sets_of(s).iter().map(Combination::score).collect())
            .collect();
        assert_eq!(scores[0], vec![20]);
        assert_eq!(scores[1], scores[0]);
        assert_eq!(scores[2], scores[0]);
        assert_eq!(scores[3], vec![32, 24]);
        assert_eq!(scores[4], scores[3]);
        assert_eq!(scores[5], scores[3]);
    }

    #[test]
    fn both_copies_of_every_color_make_two_full_sets() {
        let sets = sets_of("R6 Y6 B6 K6 R6 Y6 B6 K6");
        let sizes: Vec<usize> = sets.iter().map(Combination::len).collect();
        assert_eq!(sizes, vec![4, 4]);
        assert!(sets.iter().all(|s| colors_distinct(s.members())));
    }

    #[test]
    fn large_group_is_chunked() {
        // Seven cards of rank 2: a four-card chunk then a three-card chunk.
        let sets = sets_of("R2 Y2 B2 K2 R2 Y2 B2");
        let sizes: Vec<usize> = sets.iter().map(Combination::len).collect();
        assert_eq!(sizes, vec![4, 3]);
        assert_eq!(sets[0].score(), 8);
        assert_eq!(sets[1].score(), 6);

        // Five cards: one chunk of four, one left over.
        assert_eq!(sets_of("R3 Y3 B3 K3 R3").len(), 1);
    }

    #[test]
    fn pairs_are_not_sets() {
        assert!(sets_of("R1 Y1 B2 K2").is_empty());
    }

    #[test]
    fn ranks_visited_ascending() {
        let sets = sets_of("R9 Y9 B9 R2 Y2 B2");
        let ranks: Vec<u8> =
            sets.iter().map(|s| s.cards().next().unwrap().rank().value()).collect();
        assert_eq!(ranks, vec![2, 9]);
    }

    #[test]
    fn cap_limits_candidates() {
        let hand: Hand = "R1 Y1 B1 R2 Y2 B2 R3 Y3 B3 R4 Y4 B4 R5 Y5 B5".parse().unwrap();
        let sets = find_sets(&hand, 4);
        assert_eq!(sets.len(), 4);
        assert!(sets.iter().all(|s| s.cards().all(|c| c.rank().value() <= 4)));
        assert!(find_sets(&hand, 0).is_empty());
        assert_eq!(find_sets(&hand, 10).len(), 5);
    }
}
