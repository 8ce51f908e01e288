use super::rank_groups::RankGroups;
use crate::card_set::CardSet;
use crate::cards::Suit;

/// One bit per rank slot (bit `4 * slot`), used to pull a suit plane out of a card set.
pub(crate) const SUIT_MASK: u64 = 0x1_1111_1111_1111;
/// The four cards of the Ace group; shift by `4 * slot` for other ranks.
pub(crate) const RANK_MASK: u64 = 0xF;

/// Pre-computed bitwise view of a card set.
/// Built once per evaluation and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub set: CardSet,
    pub bits: u64,
    /// Suit planes indexed by suit slot, each shifted down to the spade position.
    pub planes: [u64; 4],
    pub rank_groups: RankGroups,
}

impl HandAnalysis {
    pub fn new(set: &CardSet) -> Self {
        let bits = set.bits();
        let planes = Suit::ALL.map(|suit| (bits >> suit.slot()) & SUIT_MASK);
        let rank_groups = RankGroups::from_planes(&planes);
        Self { set: *set, bits, planes, rank_groups }
    }

    /// Rank slots holding at least one card, one bit per slot.
    pub fn occupied(&self) -> u64 {
        self.planes[0] | self.planes[1] | self.planes[2] | self.planes[3]
    }

    /// The members of `set` that belong to the rank groups marked in `slots`.
    pub fn cards_of(&self, slots: u64) -> CardSet {
        CardSet::from_bits(self.bits & spread(slots))
    }
}

/// Widen slot bits (bit `4 * slot`) to full rank groups.
pub(crate) const fn spread(slots: u64) -> u64 {
    slots * RANK_MASK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_list::CardList;

    fn analyze(s: &str) -> HandAnalysis {
        let cards: CardList = s.parse().expect("valid cards");
        HandAnalysis::new(&cards.iter().collect())
    }

    #[test]
    fn planes_split_by_suit() {
        let a = analyze("[As,Kh,Kd,2c]");
        assert_eq!(a.planes[0], 0x1);
        assert_eq!(a.planes[1], 0x10);
        assert_eq!(a.planes[2], 0x10);
        assert_eq!(a.planes[3], 1 << 48);
        assert_eq!(a.occupied(), 0x1_0000_0000_0011);
    }

    #[test]
    fn spread_widens_slots() {
        assert_eq!(spread(0x1), 0xF);
        assert_eq!(spread(0x101), 0xF0F);
        assert_eq!(spread(SUIT_MASK), crate::card_set::FULL_MASK);
    }

    #[test]
    fn cards_of_selects_rank_groups() {
        let a = analyze("[As,Kh,Kd,2c]");
        let kings = a.cards_of(0x10);
        assert_eq!(kings.to_string(), "[Kh,Kd]");
    }
}
