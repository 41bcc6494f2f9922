use std::fmt;
use std::str::FromStr;

/// Card rank, a number from 1 to 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 13;

    pub const ALL: [Rank; 13] = [
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
        Rank(9),
        Rank(10),
        Rank(11),
        Rank(12),
        Rank(13),
    ];

    /// ```
    /// use rummy_rs::cards::Rank;
    ///
    /// assert_eq!(Rank::new(7).unwrap().value(), 7);
    /// assert!(Rank::new(0).is_err());
    /// assert!(Rank::new(14).is_err());
    /// ```
    pub const fn new(value: u8) -> Result<Self, RankParseError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Rank(value))
        } else {
            Err(RankParseError::OutOfRange(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// The rank directly above this one, `None` for 13.
    pub const fn succ(self) -> Option<Rank> {
        if self.0 < Self::MAX {
            Some(Rank(self.0 + 1))
        } else {
            None
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
    #[error("rank {0} out of range 1..=13")]
    OutOfRange(u8),
}

impl TryFrom<u8> for Rank {
    type Error = RankParseError;
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Rank::new(v)
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v = s.trim().parse::<u8>().map_err(|_| RankParseError::Invalid(s.to_string()))?;
        Rank::new(v)
    }
}

/// The four card colors, in deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Black,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Blue, Color::Black];

    /// Dense index in `0..4`, following `ALL`.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::Black => 'K',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorParseError {
    #[error("invalid color: '{0}'")]
    Invalid(String),
}

impl FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Color::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "black" => Ok(Color::Black),
            _ => Err(ColorParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Color {
    type Error = ColorParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'R' => Ok(Color::Red),
            'Y' => Ok(Color::Yellow),
            'B' => Ok(Color::Blue),
            'K' => Ok(Color::Black),
            _ => Err(ColorParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: color + rank.
///
/// Two physically distinct cards can compare equal; hands tell them apart
/// by slot, see [`crate::hand::Slot`].
///
/// ```
/// use rummy_rs::cards::{Card, Color, Rank};
///
/// let card = Card::new(Color::Black, Rank::new(12).unwrap());
/// assert_eq!(card.to_string(), "K12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    color: Color,
    rank: Rank,
}

impl Card {
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    pub const fn color(self) -> Color {
        self.color
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, self.rank)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // color letters or name first, rank digits last: "R7", "k13", "blue10"
        let split = t.find(|c: char| c.is_ascii_digit()).unwrap_or(t.len());
        if split == 0 || split == t.len() {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let color = Color::from_str(&t[..split])?;
        let rank = Rank::from_str(&t[split..])?;
        Ok(Card::new(color, rank))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use rummy_rs::cards::{parse_cards, Card, Color, Rank};
///
/// let cards = parse_cards("R1, y13 black7").unwrap();
/// assert_eq!(cards[0], Card::new(Color::Red, Rank::new(1).unwrap()));
/// assert_eq!(cards[1], Card::new(Color::Yellow, Rank::new(13).unwrap()));
/// assert_eq!(cards[2], Card::new(Color::Black, Rank::new(7).unwrap()));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(v: u8) -> Rank {
        Rank::new(v).unwrap()
    }

    #[test]
    fn rank_bounds_and_from_str() {
        assert_eq!(Rank::from_str("13").unwrap(), rank(13));
        assert_eq!(Rank::from_str(" 1 ").unwrap(), rank(1));
        assert!(matches!(Rank::from_str("0"), Err(RankParseError::OutOfRange(0))));
        assert!(matches!(Rank::from_str("J"), Err(RankParseError::Invalid(_))));
        assert_eq!(Rank::ALL.len(), 13);
        assert_eq!(Rank::ALL[12].succ(), None);
        assert_eq!(rank(4).succ(), Some(rank(5)));
    }

    #[test]
    fn color_display_and_from_str() {
        assert_eq!(Color::Black.to_string(), "K");
        assert_eq!(Color::from_str("y").unwrap(), Color::Yellow);
        assert_eq!(Color::from_str("Blue").unwrap(), Color::Blue);
        assert!(Color::from_str("g").is_err());
        assert!(Color::from_str("green").is_err());
    }

    #[test]
    fn color_index_follows_all() {
        for (i, c) in Color::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn card_display_and_from_str() {
        let c = Card::new(Color::Red, rank(10));
        assert_eq!(c.to_string(), "R10");
        assert_eq!(Card::from_str("r10").unwrap(), c);
        assert_eq!(Card::from_str("red10").unwrap(), c);
        assert!(Card::from_str("R").is_err());
        assert!(Card::from_str("10").is_err());
        assert!(matches!(Card::from_str("R14"), Err(CardParseError::Rank(_))));
        assert!(matches!(Card::from_str("G3"), Err(CardParseError::Color(_))));
    }

    #[test]
    fn equal_values_compare_equal() {
        assert_eq!(Card::new(Color::Blue, rank(3)), Card::new(Color::Blue, rank(3)));
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("R1 R2,R3").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[2], Card::new(Color::Red, rank(3)));
    }
}
