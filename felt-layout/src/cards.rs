use bevy_reflect::Reflect;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Suits in declaration order define the canonical deck order
/// (see [deck](crate::decks::deck)).
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, Serialize, Deserialize, Reflect)]
pub enum Suit {
    Hearts,
    Spades,
    Clubs,
    Diamonds,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, Serialize, Deserialize, Reflect)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Reflect)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Stable identifier like `"hearts-A"` or `"spades-10"`; position maps
    /// are keyed by this string.
    pub fn id(&self) -> String {
        String::from(self.suit_name()) + "-" + self.rank_str()
    }

    fn rank_str(&self) -> &'static str {
        match self.rank {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn suit_name(&self) -> &'static str {
        match self.suit {
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
        }
    }

    fn suit_str(&self) -> &'static str {
        match self.suit {
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
        }
    }

    pub fn short_str(&self) -> String {
        String::from(self.rank_str()) + self.suit_str()
    }

    fn rank_unicode_offset(&self) -> u8 {
        match self.rank {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 13,
            Rank::King => 14,
        }
    }

    pub fn unicode(&self) -> char {
        char::from_u32(match self.suit {
            Suit::Spades => 0x1f0a0u32,
            Suit::Hearts => 0x1f0b0u32,
            Suit::Diamonds => 0x1f0c0u32,
            Suit::Clubs => 0x1f0d0u32,
        } + u32::from(self.rank_unicode_offset()))
        .unwrap()
    }
}

/// card back glyph, used for face down cards
pub const CARD_BACK: char = '\u{1f0a0}';

/// Single row of card glyphs, face down cards rendered as [CARD_BACK].
pub fn unicode_row<'a>(cards: impl IntoIterator<Item = (&'a Card, bool)>) -> String {
    String::from_iter(itertools::intersperse(
        cards
            .into_iter()
            .map(|(card, face_up)| if face_up { card.unicode() } else { CARD_BACK }),
        ' ',
    ))
}

#[cfg(test)]
mod tests {
    use super::{unicode_row, Card, Rank, Suit};

    #[test]
    fn test_card_str() {
        let card = Card::new(Suit::Hearts, Rank::King);
        assert_eq!(card.short_str(), "K♥");
    }

    #[test]
    fn test_card_id() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Ace).id(), "hearts-A");
        assert_eq!(Card::new(Suit::Spades, Rank::Ten).id(), "spades-10");
        assert_eq!(Card::new(Suit::Diamonds, Rank::Queen).id(), "diamonds-Q");
    }

    #[test]
    fn test_card_unicode() {
        let card = Card {
            suit: Suit::Hearts,
            rank: Rank::King,
        };
        assert_eq!(card.unicode(), '🂾');
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).unicode(), '🂡');
    }

    #[test]
    fn test_unicode_row() {
        let cards = [
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::King),
        ];
        assert_eq!(
            unicode_row(cards.iter().map(|card| (card, true))),
            "🂡 🂾"
        );
        assert_eq!(
            unicode_row(cards.iter().map(|card| (card, false))),
            "🂠 🂠"
        );
    }
}
