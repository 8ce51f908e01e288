use crate::card_list::CardList;
use crate::cards::Card;
use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};

/// Bits 0..52, one per card ordinal.
pub(crate) const FULL_MASK: u64 = (1u64 << 52) - 1;

/// An unordered set of cards packed into a single `u64`.
///
/// Bit `n` is set when the card with ordinal `n` is a member; bits 52..64 are
/// always clear. Members iterate in ascending ordinal order, i.e. from the
/// Aces down to the Twos.
///
/// ```
/// use poker_eval::card_set::CardSet;
/// use poker_eval::cards::Card;
///
/// let mut set: CardSet = ["2c", "Ah", "Kd"].iter().map(|s| s.parse::<Card>().unwrap()).collect();
/// set.add("Ah".parse().unwrap());
/// assert_eq!(set.size(), 3);
/// assert_eq!(set.to_string(), "[Ah,Kd,2c]");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardSet(u64);

impl CardSet {
    pub const fn new() -> Self {
        CardSet(0)
    }

    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut set = CardSet::new();
        set.add_all(cards);
        set
    }

    pub(crate) const fn from_bits(bits: u64) -> Self {
        CardSet(bits & FULL_MASK)
    }

    pub(crate) const fn bits(self) -> u64 {
        self.0
    }

    pub fn add(&mut self, card: Card) {
        self.0 |= card.bit();
    }

    pub fn add_all<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            self.add(card);
        }
    }

    pub fn remove(&mut self, card: Card) {
        self.0 &= !card.bit();
    }

    pub const fn contains(&self, card: Card) -> bool {
        self.0 & card.bit() != 0
    }

    pub fn union(&mut self, other: &CardSet) {
        self.0 |= other.0;
    }

    pub fn intersect(&mut self, other: &CardSet) {
        self.0 &= other.0;
    }

    /// Remove every member of `other`; cards absent from `self` are ignored.
    pub fn subtract(&mut self, other: &CardSet) {
        self.0 &= !other.0;
    }

    pub const fn size(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> Iter {
        Iter(self.0)
    }

    /// All members, strongest rank first.
    pub fn to_list(&self) -> CardList {
        self.iter().collect()
    }

    /// The first `max` members in canonical order: the best available cards.
    pub fn sub_list(&self, max: usize) -> CardList {
        self.iter().take(max).collect()
    }
}

/// Iterator over the members of a [`CardSet`], lowest ordinal first.
#[derive(Debug, Clone)]
pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let ordinal = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Card::from_ordinal_unchecked(ordinal))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = Iter;
    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl IntoIterator for &CardSet {
    type Item = Card;
    type IntoIter = Iter;
    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        CardSet::from_cards(iter)
    }
}

impl<'a> FromIterator<&'a Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = &'a Card>>(iter: I) -> Self {
        CardSet::from_cards(iter.into_iter().copied())
    }
}

impl Extend<Card> for CardSet {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl From<&[Card]> for CardSet {
    fn from(cards: &[Card]) -> Self {
        cards.iter().collect()
    }
}

impl From<Card> for CardSet {
    fn from(card: Card) -> Self {
        CardSet(card.bit())
    }
}

impl BitOr for CardSet {
    type Output = CardSet;
    fn bitor(self, rhs: CardSet) -> CardSet {
        CardSet(self.0 | rhs.0)
    }
}

impl BitAnd for CardSet {
    type Output = CardSet;
    fn bitand(self, rhs: CardSet) -> CardSet {
        CardSet(self.0 & rhs.0)
    }
}

impl Sub for CardSet {
    type Output = CardSet;
    fn sub(self, rhs: CardSet) -> CardSet {
        CardSet(self.0 & !rhs.0)
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
