use strum::IntoEnumIterator;

use crate::cards::{Card, Rank, Suit};

/// Returns a full deck of cards (all [suits](Suit), all [ranks](Rank), in
/// order).  Currently, this always produces exactly 4*13 = 52 cards, see
/// [Rank] and [Suit] enums.
///
/// The order is part of the layout contract: the card's index in this deck
/// decides which seat it is dealt to and its place in the stacking order, so
/// this function is deterministic and never shuffles.
pub fn deck() -> Vec<Card> {
    let mut result = Vec::new();
    for suit in Suit::iter() {
        for rank in Rank::iter() {
            result.push(Card::new(suit, rank))
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{deck, Card};

    #[test]
    fn test_deck() {
        let deck52 = deck();
        assert_eq!(deck52.len(), 52);

        // quick check that deck is not shuffled
        let first = deck52.first().unwrap();
        assert_eq!(first.suit, crate::Suit::Hearts);
        assert_eq!(first.rank, crate::Rank::Ace);
        assert_eq!(deck52[13].id(), "spades-A");
        assert_eq!(deck52[51].id(), "diamonds-K");
    }

    #[test]
    fn test_deck_ids_unique() {
        let ids: HashSet<String> = deck().iter().map(Card::id).collect();
        assert_eq!(ids.len(), 52);
    }

    #[test]
    fn test_deck_deterministic() {
        assert_eq!(deck(), deck());
    }
}
