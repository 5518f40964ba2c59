//! Card identity and trump semantics.
//!
//! A `Card` is a plain `{suit, rank}` value. Everything trump-related is
//! derived from one rule, [`effective_suit`]: the Jack of the suit sharing
//! trump's colour (the left bower) counts as trump.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card suit.
///
/// Declaration order is the order suits appear in the action table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// All suits in action-table order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Position in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The other suit of the same colour (S↔C, H↔D).
    #[must_use]
    pub const fn same_color(self) -> Suit {
        match self {
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
            Suit::Spades => Suit::Clubs,
            Suit::Clubs => Suit::Spades,
        }
    }

    /// Single-character code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }

    /// Parse a single-character code.
    #[must_use]
    pub const fn from_code(c: char) -> Option<Suit> {
        match c {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'S' => Some(Suit::Spades),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Card rank, ordered as for a non-trump suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 6] = [
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Single-character code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Parse a single-character code.
    #[must_use]
    pub const fn from_code(c: char) -> Option<Rank> {
        match c {
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A card. Equality is by (suit, rank).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Number of distinct cards in a Euchre deck.
    pub const COUNT: usize = 24;

    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Position in the action table: suits H, D, S, C and, within a suit,
    /// ranks from Ace down to Nine.
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit.index() * 6 + (5 - self.rank as usize)
    }

    /// Inverse of [`Card::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Card> {
        if index >= Self::COUNT {
            return None;
        }
        let suit = Suit::ALL[index / 6];
        let rank = Rank::ALL[5 - index % 6];
        Some(Card::new(suit, rank))
    }

    /// Check whether this card is the Jack of trump.
    #[must_use]
    pub fn is_right_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump
    }

    /// Check whether this card is the Jack of trump's colour partner.
    #[must_use]
    pub fn is_left_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump.same_color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.code(), self.rank.code())
    }
}

/// Error parsing a two-character card code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed card code `{0}`")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(suit), Some(rank), None) => Suit::from_code(suit)
                .zip(Rank::from_code(rank))
                .map(|(suit, rank)| Card::new(suit, rank))
                .ok_or_else(|| ParseCardError(s.to_string())),
            _ => Err(ParseCardError(s.to_string())),
        }
    }
}

/// The suit a card counts as once `trump` is known.
///
/// The left bower belongs to trump; every other card keeps its printed suit.
#[must_use]
pub fn effective_suit(card: Card, trump: Suit) -> Suit {
    if card.is_left_bower(trump) {
        trump
    } else {
        card.suit
    }
}

/// Rank of a trump card: 9 < 10 < Q < K < A < left bower < right bower.
///
/// Returns `None` for cards that are not trump.
#[must_use]
pub fn trump_rank(card: Card, trump: Suit) -> Option<u8> {
    if card.is_right_bower(trump) {
        return Some(6);
    }
    if card.is_left_bower(trump) {
        return Some(5);
    }
    if card.suit != trump {
        return None;
    }
    Some(match card.rank {
        Rank::Nine => 0,
        Rank::Ten => 1,
        Rank::Queen => 2,
        Rank::King => 3,
        Rank::Ace => 4,
        Rank::Jack => unreachable!("jack of trump is the right bower"),
    })
}

/// How strongly a card competes for a trick.
///
/// Trump scores 7..=13, the led suit 1..=6, anything else 0 (it cannot win).
#[must_use]
pub fn trick_strength(card: Card, trump: Suit, lead: Suit) -> u8 {
    if let Some(rank) = trump_rank(card, trump) {
        7 + rank
    } else if effective_suit(card, trump) == lead {
        1 + card.rank as u8
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let c = card("HJ");
        assert_eq!(c, Card::new(Suit::Hearts, Rank::Jack));
        assert_eq!(c.to_string(), "HJ");
        assert_eq!(card("DT").rank, Rank::Ten);
    }

    #[test]
    fn test_parse_rejects_malformed_codes() {
        for bad in ["", "H", "H10", "X9", "H1", "hj", "XX"] {
            assert!(bad.parse::<Card>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_index_round_trip_covers_deck() {
        for index in 0..Card::COUNT {
            let c = Card::from_index(index).unwrap();
            assert_eq!(c.index(), index);
        }
        assert_eq!(card("HA").index(), 0);
        assert_eq!(card("H9").index(), 5);
        assert_eq!(card("C9").index(), 23);
        assert!(Card::from_index(24).is_none());
    }

    #[test]
    fn test_same_color_pairs() {
        assert_eq!(Suit::Spades.same_color(), Suit::Clubs);
        assert_eq!(Suit::Clubs.same_color(), Suit::Spades);
        assert_eq!(Suit::Hearts.same_color(), Suit::Diamonds);
        assert_eq!(Suit::Diamonds.same_color(), Suit::Hearts);
    }

    #[test]
    fn test_left_bower_takes_trump_suit() {
        assert_eq!(effective_suit(card("DJ"), Suit::Hearts), Suit::Hearts);
        assert_eq!(effective_suit(card("HJ"), Suit::Hearts), Suit::Hearts);
        assert_eq!(effective_suit(card("SJ"), Suit::Hearts), Suit::Spades);
        assert_eq!(effective_suit(card("DA"), Suit::Hearts), Suit::Diamonds);
    }

    #[test]
    fn test_trump_ranking() {
        let trump = Suit::Clubs;
        let order = ["C9", "CT", "CQ", "CK", "CA", "SJ", "CJ"];
        let ranks: Vec<_> = order
            .iter()
            .map(|c| trump_rank(card(c), trump).unwrap())
            .collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(trump_rank(card("HJ"), trump), None);
    }

    #[test]
    fn test_trick_strength() {
        let trump = Suit::Spades;
        let lead = Suit::Hearts;
        assert_eq!(trick_strength(card("S9"), trump, lead), 7);
        assert_eq!(trick_strength(card("SJ"), trump, lead), 13);
        assert_eq!(trick_strength(card("CJ"), trump, lead), 12);
        assert_eq!(trick_strength(card("HA"), trump, lead), 6);
        assert_eq!(trick_strength(card("H9"), trump, lead), 1);
        assert_eq!(trick_strength(card("DA"), trump, lead), 0);
    }

    #[test]
    fn test_left_bower_does_not_follow_its_printed_suit() {
        // With hearts trump and diamonds led, the jack of diamonds is trump.
        assert_eq!(trick_strength(card("DJ"), Suit::Hearts, Suit::Diamonds), 12);
        assert_eq!(trick_strength(card("DQ"), Suit::Hearts, Suit::Diamonds), 4);
    }
}
