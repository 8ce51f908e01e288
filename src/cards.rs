use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

/// Ranks indexed by rank slot: Ace first, Two last.
const RANKS_BY_SLOT: [Rank; 13] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
    Rank::Nine,
    Rank::Eight,
    Rank::Seven,
    Rank::Six,
    Rank::Five,
    Rank::Four,
    Rank::Three,
    Rank::Two,
];

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric strength, 2..=14.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Position of this rank's 4-bit group in a card set: 0 for Ace up to 12 for Two.
    pub const fn slot(self) -> u8 {
        Rank::Ace.value() - self.value()
    }

    pub const fn from_slot(slot: u8) -> Option<Rank> {
        if slot < 13 {
            Some(RANKS_BY_SLOT[slot as usize])
        } else {
            None
        }
    }

    pub const fn from_value(value: u8) -> Option<Rank> {
        if value >= 2 && value <= 14 {
            Rank::from_slot(Rank::Ace.value() - value)
        } else {
            None
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(CardError::InvalidFormat(c.to_string())),
        }
    }
}

/// Four suits. Suits never rank against each other; the discriminant is the
/// fixed slot of the suit inside a rank group (spades first, clubs last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

const SUITS_BY_SLOT: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

impl Suit {
    pub const ALL: [Suit; 4] = SUITS_BY_SLOT;

    pub const fn slot(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            's' => Ok(Suit::Spades),
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            _ => Err(CardError::InvalidFormat(c.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("invalid card: '{0}'")]
    InvalidFormat(String),
    #[error("card ordinal out of range: {0} (expected 0..=51)")]
    OutOfRange(usize),
}

/// Number of distinct cards.
pub const DECK_SIZE: usize = 52;

/// A playing card, identified by its ordinal `rank_slot * 4 + suit_slot`.
///
/// Ordinals run from the Aces (0..=3) down to the Twos (48..=51), so ordering
/// cards by ordinal lists the strongest rank first. Use [`Card::rank`] when
/// comparing strength; the `Ord` impl only fixes a canonical iteration order.
///
/// ```
/// use poker_eval::cards::{Card, Rank, Suit};
///
/// let card: Card = "Ah".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Ace, Suit::Hearts));
/// assert_eq!(card.ordinal(), 1);
/// assert_eq!(card.to_string(), "Ah");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

/// The canonical card table, indexed by ordinal.
static CANONICAL: [Card; DECK_SIZE] = {
    let mut cards = [Card(0); DECK_SIZE];
    let mut i = 0;
    while i < DECK_SIZE {
        cards[i] = Card(i as u8);
        i += 1;
    }
    cards
};

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card(rank.slot() * 4 + suit.slot())
    }

    /// Look up the card with the given ordinal.
    pub fn from_ordinal(ordinal: usize) -> Result<Self, CardError> {
        CANONICAL.get(ordinal).copied().ok_or(CardError::OutOfRange(ordinal))
    }

    /// Callers guarantee `ordinal < 52`.
    pub(crate) const fn from_ordinal_unchecked(ordinal: u8) -> Self {
        debug_assert!((ordinal as usize) < DECK_SIZE);
        Card(ordinal)
    }

    pub fn from_chars(rank: char, suit: char) -> Result<Self, CardError> {
        Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    pub const fn rank(self) -> Rank {
        RANKS_BY_SLOT[(self.0 >> 2) as usize]
    }

    pub const fn suit(self) -> Suit {
        SUITS_BY_SLOT[(self.0 & 3) as usize]
    }

    pub const fn ordinal(self) -> u8 {
        self.0
    }

    /// Single-bit mask of this card inside a card set.
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    pub const fn to_tuple(self) -> (Rank, Suit) {
        (self.rank(), self.suit())
    }

    pub(crate) fn canonical() -> &'static [Card; DECK_SIZE] {
        &CANONICAL
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                Card::from_chars(rank, suit).map_err(|_| CardError::InvalidFormat(s.to_string()))
            }
            _ => Err(CardError::InvalidFormat(s.to_string())),
        }
    }
}

impl TryFrom<usize> for Card {
    type Error = CardError;
    fn try_from(ordinal: usize) -> Result<Self, Self::Error> {
        Card::from_ordinal(ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_slots_run_from_ace_to_two() {
        assert_eq!(Rank::Ace.slot(), 0);
        assert_eq!(Rank::King.slot(), 1);
        assert_eq!(Rank::Two.slot(), 12);
        for rank in Rank::ALL {
            assert_eq!(Rank::from_slot(rank.slot()), Some(rank));
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
        assert_eq!(Rank::from_slot(13), None);
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn rank_and_suit_chars() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::try_from('T').unwrap(), Rank::Ten);
        assert!(Rank::try_from('1').is_err());
        assert!(Rank::try_from('t').is_err());
        assert_eq!(Suit::Spades.to_string(), "s");
        assert_eq!(Suit::try_from('d').unwrap(), Suit::Diamonds);
        assert!(Suit::try_from('x').is_err());
    }

    #[test]
    fn ordinal_layout() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).ordinal(), 0);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).ordinal(), 3);
        assert_eq!(Card::new(Rank::King, Suit::Spades).ordinal(), 4);
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).ordinal(), 51);
        assert_eq!(Card::new(Rank::Five, Suit::Hearts).bit(), 1u64 << 37);
    }

    #[test]
    fn from_ordinal_checks_range() {
        for i in 0..DECK_SIZE {
            let card = Card::from_ordinal(i).unwrap();
            assert_eq!(card.ordinal() as usize, i);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
        }
        assert_eq!(Card::from_ordinal(52), Err(CardError::OutOfRange(52)));
        assert!(Card::try_from(1000usize).is_err());
    }

    #[test]
    fn card_display_and_from_str() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(a.to_string(), "As");
        assert_eq!(Card::from_str("As").unwrap(), a);
        assert_eq!(Card::from_str("Td").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(Card::from_chars('2', 'c').unwrap(), Card::new(Rank::Two, Suit::Clubs));
    }

    #[test]
    fn malformed_cards_are_invalid_format() {
        for bad in ["", "A", "Ahh", "10d", "Ax", "1h", "ah", " Ah"] {
            assert_eq!(Card::from_str(bad), Err(CardError::InvalidFormat(bad.to_string())), "{bad}");
        }
    }

    #[test]
    fn ordering_puts_aces_first() {
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let ac = Card::new(Rank::Ace, Suit::Clubs);
        let ks = Card::new(Rank::King, Suit::Spades);
        let two = Card::new(Rank::Two, Suit::Spades);
        assert!(as_ < ac);
        assert!(ac < ks);
        assert!(ks < two);
    }
}
