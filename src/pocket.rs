use crate::card_list::CardList;
use crate::cards::{Card, CardError};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PocketError {
    #[error("a pocket needs two cards, got {0}")]
    InsufficientCards(usize),
    #[error(transparent)]
    Card(#[from] CardError),
}

/// A player's two private cards, stored highest rank first.
///
/// ```
/// use poker_eval::pocket::Pocket;
///
/// let pocket: Pocket = "Kh Ah".parse().unwrap();
/// assert_eq!(pocket.to_string(), "AKs");
/// assert!(pocket.is_connected());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pocket {
    high: Card,
    low: Card,
}

impl Pocket {
    pub fn new(a: Card, b: Card) -> Self {
        if a.rank() < b.rank() {
            Self { high: b, low: a }
        } else {
            Self { high: a, low: b }
        }
    }

    /// Build from the first two cards of a slice.
    pub fn from_slice(cards: &[Card]) -> Result<Self, PocketError> {
        match cards {
            [a, b, ..] => Ok(Self::new(*a, *b)),
            _ => {
                log::debug!("rejecting pocket built from {} cards", cards.len());
                Err(PocketError::InsufficientCards(cards.len()))
            }
        }
    }

    pub fn high(&self) -> Card {
        self.high
    }

    pub fn low(&self) -> Card {
        self.low
    }

    pub fn is_pair(&self) -> bool {
        self.high.rank() == self.low.rank()
    }

    pub fn is_suited(&self) -> bool {
        self.high.suit() == self.low.suit()
    }

    /// Rank distance between the two cards; 0 for a pair.
    pub fn gap(&self) -> u8 {
        self.high.rank().value() - self.low.rank().value()
    }

    pub fn is_connected(&self) -> bool {
        self.gap() == 1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.high, self.low]
    }

    pub fn to_list(&self) -> CardList {
        CardList::from(self.as_array().to_vec())
    }
}

impl TryFrom<&[Card]> for Pocket {
    type Error = PocketError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Pocket::from_slice(cards)
    }
}

impl FromStr for Pocket {
    type Err = PocketError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards: CardList = s.parse()?;
        Pocket::from_slice(&cards)
    }
}

/// Shorthand notation: `AK`, `AKs` when suited, `QQ` for a pair.
impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high.rank(), self.low.rank())?;
        if self.is_suited() {
            f.write_str("s")?;
        }
        Ok(())
    }
}
