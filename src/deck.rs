use crate::cards::Card;

/// A fresh standard 52-card deck in canonical order (Aces first, Twos last).
///
/// Each call returns a new vector, so callers may shuffle or consume it freely.
///
/// ```
/// use poker_eval::deck::new_deck;
///
/// let deck = new_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0].to_string(), "As");
/// assert_eq!(deck[51].to_string(), "2c");
/// ```
pub fn new_deck() -> Vec<Card> {
    Card::canonical().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = new_deck();
        assert_eq!(d.len(), 52);
        let unique: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn deck_is_in_ordinal_order() {
        let d = new_deck();
        for (i, card) in d.iter().enumerate() {
            assert_eq!(card.ordinal() as usize, i);
        }
    }

    #[test]
    fn decks_are_independent() {
        let mut d1 = new_deck();
        let d2 = new_deck();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        d1.shuffle(&mut rng);
        d1.truncate(10);
        assert_eq!(d2, new_deck());
        assert_eq!(d1.len(), 10);
    }
}
