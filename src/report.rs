//! Plain-text rendering of a deal, used when stdout is not a terminal.

use crate::cards::{Card, Rank};
use crate::dealer::Deal;
use crate::evaluator::SelectionResult;
use crate::hand::Hand;
use std::fmt::Write;

/// Hand cards bucketed by rank, lowest rank first, empty ranks skipped.
pub fn rank_rows(hand: &Hand) -> Vec<(Rank, Vec<Card>)> {
    Rank::ALL
        .iter()
        .filter_map(|&rank| {
            let cards: Vec<Card> =
                hand.as_slice().iter().copied().filter(|c| c.rank() == rank).collect();
            (!cards.is_empty()).then_some((rank, cards))
        })
        .collect()
}

fn join(cards: impl IntoIterator<Item = Card>) -> String {
    cards.into_iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

/// Render the combinations, leftovers and total of one evaluation.
pub fn render_result(result: &SelectionResult) -> String {
    let mut out = String::new();
    for combo in result.combinations() {
        let _ = writeln!(out, "{combo}");
    }
    if let Some(rest) = result.remainder() {
        let _ = writeln!(out, "Unused: {}", join(rest.cards()));
    }
    let _ = writeln!(out, "Total score: {}", result.total_score());
    out
}

/// ```
/// use rummy_rs::dealer::{DealConfig, Dealer};
/// use rummy_rs::report::render_plain;
///
/// let deal = Dealer::new(DealConfig { seed: Some(1), ..DealConfig::default() })
///     .unwrap()
///     .deal()
///     .unwrap();
/// let text = render_plain(&deal);
/// assert!(text.contains("Total score:"));
/// ```
pub fn render_plain(deal: &Deal) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Hand ({} cards, {} deal(s)):", deal.hand.len(), deal.attempts);
    for (rank, cards) in rank_rows(&deal.hand) {
        let _ = writeln!(out, "  {rank:>2}: {}", join(cards));
    }
    let _ = writeln!(out, "Combinations:");
    out.push_str(&render_result(&deal.result));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::find_best_combinations;

    #[test]
    fn rows_skip_missing_ranks() {
        let hand: Hand = "R3 Y1 B3".parse().unwrap();
        let rows = rank_rows(&hand);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0.value(), 1);
        assert_eq!(join(rows[1].1.clone()), "R3 B3");
    }

    #[test]
    fn result_lists_unused_and_total() {
        let hand: Hand = "R1 R2 R3 K9".parse().unwrap();
        let text = render_result(&find_best_combinations(&hand));
        assert_eq!(text, "Straight [R1 R2 R3] = 6\nUnused: K9\nTotal score: 6\n");
    }
}
