//! Straightforward per-rank counting evaluator.
//!
//! Much slower than [`evaluate`](super::evaluate) but shares none of its bit
//! tricks, so it serves as an oracle: the best of every five-card subset must
//! match the bitwise result exactly.

use super::combinations::ChooseFive;
use super::{Category, Hand, HandBuilder};
use crate::card_set::CardSet;
use crate::cards::Card;

/// Evaluate exactly five cards by counting ranks and suits.
///
/// ```
/// use poker_eval::card_list::CardList;
/// use poker_eval::evaluator::{evaluate_five, Category};
///
/// let cards: CardList = "[2c,2d,6d,6s,4h]".parse().unwrap();
/// let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
/// let hand = evaluate_five(&five);
/// assert_eq!(hand.category(), Category::TwoPair);
/// assert_eq!(hand.to_list().to_string(), "[6s,6d,2d,2c,4h]");
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> Hand {
    // Ordinal order: rank descending, then canonical suit
    let mut sorted = *cards;
    sorted.sort();

    let mut counts = [0u8; 15]; // 2..14 used
    for card in &sorted {
        counts[card.rank().value() as usize] += 1;
    }
    let count = |c: &Card| counts[c.rank().value() as usize];

    // Largest groups first, higher rank first within equal size
    let mut ordered = sorted;
    ordered.sort_by(|a, b| count(b).cmp(&count(a)).then(a.cmp(b)));

    let mut group_sizes: Vec<u8> = counts.iter().copied().filter(|&n| n > 0).collect();
    group_sizes.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = sorted.iter().all(|c| c.suit() == sorted[0].suit());
    let high = sorted[0].rank().value();
    let low = sorted[4].rank().value();
    let distinct = group_sizes.len() == 5;
    let is_wheel = distinct && high == 14 && sorted[1].rank().value() == 5;
    let is_straight = distinct && (high - low == 4 || is_wheel);

    let category = match group_sizes.as_slice() {
        _ if is_straight && is_flush => Category::StraightFlush,
        [4, ..] => Category::FourOfAKind,
        [3, 2] => Category::FullHouse,
        _ if is_flush => Category::Flush,
        _ if is_straight => Category::Straight,
        [3, ..] => Category::ThreeOfAKind,
        [2, 2, ..] => Category::TwoPair,
        [2, ..] => Category::Pair,
        _ => Category::HighCard,
    };

    let mut hand = HandBuilder::new();
    for card in ordered {
        hand.push(card);
    }
    if is_wheel {
        hand.ace_low();
    }
    hand.finish(category)
}

/// Best hand over every five-card subset of `set`, or `None` for fewer than five cards.
pub fn evaluate_best_of_subsets(set: &CardSet) -> Option<Hand> {
    let cards = set.to_list();
    ChooseFive::new(cards.len())
        .map(|idx| evaluate_five(&[cards[idx[0]], cards[idx[1]], cards[idx[2]], cards[idx[3]], cards[idx[4]]]))
        .max()
}
