//! rummy-rs: colored-card hand evaluation
//!
//! Cards come in four colors with ranks 1 to 13, and a double deck holds two
//! copies of each. A dealt hand is split into non-overlapping *straights*
//! (three or more consecutive ranks of one color) and *sets* (three or four
//! cards of one rank) by a greedy, score-first selector. Leftover cards are
//! reported separately.
//!
//! ## Quick start: evaluate a hand
//! ```
//! use rummy_rs::evaluator::{find_best_combinations, Kind};
//! use rummy_rs::hand::Hand;
//!
//! let hand: Hand = "R5 R6 R7 Y9 B9 K9 Y1".parse().unwrap();
//! let result = find_best_combinations(&hand);
//!
//! assert_eq!(result.combinations()[0].kind(), Kind::Set);
//! assert_eq!(result.combinations()[1].kind(), Kind::Straight);
//! assert_eq!(result.total_score(), 27 + 18);
//! assert_eq!(result.unused_cards().len(), 1);
//! assert!(result.is_satisfying());
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin rummy-rs
//! ```

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod report;
pub mod tui;
