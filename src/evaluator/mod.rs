pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub mod reference;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use reference::{evaluate_best_of_subsets, evaluate_five};

use crate::card_list::CardList;
use crate::card_set::CardSet;
use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Category> {
        if (ordinal as usize) < Category::ALL.len() {
            Some(Category::ALL[ordinal as usize])
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compact, comparable hand strength. Higher is better.
///
/// Layout (most significant -> least), 4 bits per field:
/// `[ category | r0 | r1 | r2 | r3 | r4 ]` where `r0..r4` are the rank values
/// of the output cards in order, zero for missing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

const FIELD_BITS: u32 = 4;
const CATEGORY_SHIFT: u32 = FIELD_BITS * 5;

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Pack a category and up to five rank fields, most significant first.
    /// Ranks beyond the fifth are ignored.
    pub fn from_parts(category: Category, ranks: &[Rank]) -> Self {
        let mut v = u32::from(category.ordinal());
        for i in 0..5 {
            let field = ranks.get(i).map_or(0, |r| u32::from(r.value()));
            v = (v << FIELD_BITS) | field;
        }
        HandValue(v)
    }

    pub fn category(self) -> Category {
        // Every packed value starts from a valid category ordinal.
        Category::from_ordinal((self.0 >> CATEGORY_SHIFT) as u8).unwrap_or(Category::HighCard)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Evaluation result: the category, the cards that make it (most significant
/// group first, kickers last) and the packed value that drives ordering.
///
/// Two hands compare equal when their values are equal, even if the cards
/// differ by suit.
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    category: Category,
    cards: [Card; 5],
    len: u8,
    value: HandValue,
}

impl Hand {
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The (at most five) cards forming the hand, in value order.
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.len as usize]
    }

    pub fn to_list(&self) -> CardList {
        self.cards().iter().copied().collect()
    }

    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.category, self.to_list(), self.value)
    }
}

/// Accumulates up to five output cards in order, then packs them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HandBuilder {
    cards: [Card; 5],
    len: usize,
}

impl HandBuilder {
    pub(crate) const fn new() -> Self {
        Self { cards: [Card::from_ordinal_unchecked(0); 5], len: 0 }
    }

    pub(crate) fn push(&mut self, card: Card) {
        if self.len < self.cards.len() {
            self.cards[self.len] = card;
            self.len += 1;
        }
    }

    /// Append the best `max` members of `set`.
    pub(crate) fn push_best(&mut self, set: CardSet, max: usize) {
        for card in set.iter().take(max) {
            self.push(card);
        }
    }

    /// Move the leading card to the back; an ace-low straight plays its Ace last.
    pub(crate) fn ace_low(&mut self) {
        self.cards[..self.len].rotate_left(1);
    }

    pub(crate) fn finish(self, category: Category) -> Hand {
        let mut ranks = [Rank::Two; 5];
        for (slot, card) in ranks.iter_mut().zip(&self.cards[..self.len]) {
            *slot = card.rank();
        }
        let value = HandValue::from_parts(category, &ranks[..self.len]);
        Hand { category, cards: self.cards, len: self.len as u8, value }
    }
}

/// Evaluate a set of cards, returning the best five-card hand it contains.
///
/// Works for any number of cards; with fewer than five the missing kicker
/// fields pack as zero.
///
/// ```
/// use poker_eval::card_list::CardList;
/// use poker_eval::card_set::CardSet;
/// use poker_eval::evaluator::{evaluate, Category};
///
/// let cards: CardList = "[Ah,2d,3h,4s,5c,9d,Kc]".parse().unwrap();
/// let hand = evaluate(&cards.iter().collect::<CardSet>());
/// assert_eq!(hand.category(), Category::Straight);
/// assert_eq!(hand.to_list().to_string(), "[5c,4s,3h,2d,Ah]");
/// ```
pub fn evaluate(set: &CardSet) -> Hand {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    // Build analysis once (suit planes and rank groups)
    let analysis = HandAnalysis::new(set);

    // Check categories in priority order (highest to lowest); high card always matches
    DETECTORS
        .iter()
        .find_map(|detector| detector.find(&analysis))
        .unwrap_or_else(|| HandBuilder::new().finish(Category::HighCard))
}

/// Evaluate the union of a player's hole cards and the board.
///
/// ```
/// use poker_eval::card_list::CardList;
/// use poker_eval::evaluator::{evaluate_with_board, Category};
///
/// let hole: CardList = "[As,Ah]".parse().unwrap();
/// let board: CardList = "[Kc,Qd,Jh,3s,2c]".parse().unwrap();
/// let hand = evaluate_with_board(hole.iter().copied(), board.iter().copied());
/// assert_eq!(hand.category(), Category::Pair);
/// ```
pub fn evaluate_with_board<H, B>(hole: H, board: B) -> Hand
where
    H: IntoIterator<Item = Card>,
    B: IntoIterator<Item = Card>,
{
    let mut set = CardSet::from_cards(hole);
    set.add_all(board);
    evaluate(&set)
}

/// Evaluate any collection of cards. Duplicates collapse into one card.
pub fn evaluate_cards<I>(cards: I) -> Hand
where
    I: IntoIterator<Item = Card>,
{
    evaluate(&CardSet::from_cards(cards))
}
