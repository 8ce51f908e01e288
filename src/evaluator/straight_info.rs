use super::hand_analysis::{HandAnalysis, RANK_MASK};
use crate::card_set::CardSet;

/// Five consecutive rank slots of the spade plane.
const STRAIGHT_FLUSH_MASK: u64 = 0x11111;
/// Ace, Five, Four, Three and Two of spades; in slot-bit form, the wheel ranks.
const ACE_LOW_STRAIGHT_FLUSH_MASK: u64 = 0x1_1110_0000_0001;

/// A straight found in a card set: the five cards and whether the Ace plays low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub cards: CardSet,
    pub ace_low: bool,
}

/// Slot bits where a run of five occupied slots starts.
const fn runs_of_five(slots: u64) -> u64 {
    slots & (slots >> 4) & (slots >> 8) & (slots >> 12) & (slots >> 16)
}

impl StraightInfo {
    /// Highest straight flush in any suit; an ace-low one only when no higher exists.
    pub fn straight_flush(analysis: &HandAnalysis) -> Option<Self> {
        let mut best: Option<u64> = None;
        for (suit, plane) in analysis.planes.iter().enumerate() {
            let runs = runs_of_five(*plane);
            if runs != 0 {
                let mask = STRAIGHT_FLUSH_MASK << (runs.trailing_zeros() as usize + suit);
                // Lower offset means higher straight
                if best.map_or(true, |b| mask < b) {
                    best = Some(mask);
                }
            }
        }
        if let Some(mask) = best {
            return Some(Self { cards: CardSet::from_bits(mask), ace_low: false });
        }

        (0..4)
            .map(|suit| ACE_LOW_STRAIGHT_FLUSH_MASK << suit)
            .find(|mask| analysis.bits & mask == *mask)
            .map(|mask| Self { cards: CardSet::from_bits(mask), ace_low: true })
    }

    /// Highest run of five ranks regardless of suit, falling back to the wheel.
    /// Each rank contributes its first card in canonical suit order.
    pub fn straight(analysis: &HandAnalysis) -> Option<Self> {
        let occupied = analysis.occupied();
        let runs = runs_of_five(occupied);
        let (slots, ace_low) = if runs != 0 {
            (STRAIGHT_FLUSH_MASK << runs.trailing_zeros(), false)
        } else if occupied & ACE_LOW_STRAIGHT_FLUSH_MASK == ACE_LOW_STRAIGHT_FLUSH_MASK {
            (ACE_LOW_STRAIGHT_FLUSH_MASK, true)
        } else {
            return None;
        };

        let mut bits = 0u64;
        let mut rest = slots;
        while rest != 0 {
            let shift = rest.trailing_zeros();
            let group = analysis.bits & (RANK_MASK << shift);
            bits |= group & group.wrapping_neg();
            rest &= rest - 1;
        }
        Some(Self { cards: CardSet::from_bits(bits), ace_low })
    }
}
