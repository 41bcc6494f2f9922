use crate::cards::{Card, Color};
use crate::hand::{Hand, Slot};

/// Cards of a hand split by color, each group sorted by rank ascending.
///
/// Equal ranks keep their hand order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGroups {
    groups: [Vec<(Slot, Card)>; 4],
}

impl ColorGroups {
    pub fn from_hand(hand: &Hand) -> Self {
        let mut groups: [Vec<(Slot, Card)>; 4] = std::array::from_fn(|_| Vec::new());
        for (slot, card) in hand.slots() {
            groups[card.color().index()].push((slot, card));
        }
        for group in &mut groups {
            group.sort_by_key(|(_, c)| c.rank());
        }
        Self { groups }
    }

    pub fn get(&self, color: Color) -> &[(Slot, Card)] {
        &self.groups[color.index()]
    }

    /// Groups in [`Color::ALL`] order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &[(Slot, Card)])> + '_ {
        Color::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// ```
/// use rummy_rs::cards::Color;
/// use rummy_rs::evaluator::group_by_color;
/// use rummy_rs::hand::Hand;
///
/// let hand: Hand = "B9 R3 B2 R1".parse().unwrap();
/// let groups = group_by_color(&hand);
/// let blue: Vec<String> = groups.get(Color::Blue).iter().map(|(_, c)| c.to_string()).collect();
/// assert_eq!(blue, ["B2", "B9"]);
/// assert!(groups.get(Color::Black).is_empty());
/// ```
pub fn group_by_color(hand: &Hand) -> ColorGroups {
    ColorGroups::from_hand(hand)
}
