use crate::cards::{Card, CardError};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// An ordered sequence of cards, displayed as `[Ah,Kd,2c]`.
///
/// ```
/// use poker_eval::card_list::CardList;
///
/// let cards: CardList = "[Ah, Kd 2c]".parse().unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards.to_string(), "[Ah,Kd,2c]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CardList(Vec<Card>);

impl CardList {
    pub fn new() -> Self {
        CardList(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        CardList(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Card> {
        self.0
    }
}

impl Deref for CardList {
    type Target = [Card];
    fn deref(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for CardList {
    fn from(cards: Vec<Card>) -> Self {
        CardList(cards)
    }
}

impl From<CardList> for Vec<Card> {
    fn from(list: CardList) -> Self {
        list.0
    }
}

impl FromIterator<Card> for CardList {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        CardList(iter.into_iter().collect())
    }
}

impl Extend<Card> for CardList {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for CardList {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CardList {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CardList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// Parse cards separated by commas and/or whitespace, optionally wrapped in
/// square brackets: `"[Ah,Kh]"`, `"Ah Kh"` and `"Ah, Kh"` are equivalent.
impl FromStr for CardList {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let inner = t.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')).unwrap_or(t);
        let cards = inner
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        log::trace!("parsed {} cards from {:?}", cards.len(), s);
        Ok(CardList(cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn parse_bracketed_list() {
        let xs: CardList = "[Ah,Kh,Qh,Jh,Th]".parse().unwrap();
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[0], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(xs[4], Card::new(Rank::Ten, Suit::Hearts));
    }

    #[test]
    fn parse_loose_separators() {
        let xs: CardList = "  As, Kd   2c ".parse().unwrap();
        assert_eq!(xs.as_slice(), &[
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Clubs),
        ]);
    }

    #[test]
    fn parse_preserves_input_order_and_duplicates() {
        let xs: CardList = "[2c,Ah,2c]".parse().unwrap();
        assert_eq!(xs.to_string(), "[2c,Ah,2c]");
    }

    #[test]
    fn empty_lists() {
        assert!("[]".parse::<CardList>().unwrap().is_empty());
        assert!("".parse::<CardList>().unwrap().is_empty());
        assert_eq!(CardList::new().to_string(), "[]");
    }

    #[test]
    fn bad_token_is_reported() {
        let err = "[Ah,Zz,Kh]".parse::<CardList>().unwrap_err();
        assert_eq!(err, CardError::InvalidFormat("Zz".to_string()));
        assert!("[Ah,10h]".parse::<CardList>().is_err());
    }
}
