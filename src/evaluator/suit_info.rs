use super::hand_analysis::{HandAnalysis, SUIT_MASK};
use crate::card_set::CardSet;
use crate::cards::Suit;

/// A flush: its suit and the five highest cards of that suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Suit,
    pub cards: CardSet,
}

/// Keep the `n` lowest set bits of `bits`.
fn lowest_n(mut bits: u64, n: usize) -> u64 {
    let mut kept = 0u64;
    for _ in 0..n {
        if bits == 0 {
            break;
        }
        let bit = bits & bits.wrapping_neg();
        kept |= bit;
        bits ^= bit;
    }
    kept
}

impl SuitInfo {
    /// Detect a suit holding five or more cards.
    ///
    /// Seven cards hold at most one flush. Larger sets may hold several, and
    /// the one whose top five ranks compare highest wins.
    pub fn detect(analysis: &HandAnalysis) -> Option<Self> {
        let mut best: Option<(u64, Suit)> = None;
        for suit in Suit::ALL {
            let plane = analysis.planes[suit.slot() as usize];
            if plane.count_ones() < 5 {
                continue;
            }
            let top = lowest_n(plane, 5);
            // Slot bits: reversing puts the strongest rank in the most significant position
            let key = top.reverse_bits();
            if best.map_or(true, |(k, _)| key > k) {
                best = Some((key, suit));
            }
        }
        best.map(|(key, suit)| {
            let slots = key.reverse_bits();
            let cards = CardSet::from_bits((slots << suit.slot()) & (SUIT_MASK << suit.slot()));
            SuitInfo { flush_suit: suit, cards }
        })
    }
}
