/// Quad, triple and pair candidates of a card set, found by combining suit planes.
///
/// Every field holds slot bits (bit `4 * slot`), so the lowest set bit is
/// always the strongest rank. `triple`, `top_pair` and `second_pair` hold at
/// most one bit each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroups {
    pub quads: u64,
    pub triple: u64,
    pub top_pair: u64,
    pub second_pair: u64,
}

/// Isolate the lowest set bit (the best rank), or 0.
const fn lowest(bits: u64) -> u64 {
    bits & bits.wrapping_neg()
}

impl RankGroups {
    /// Build candidates from the four suit planes.
    ///
    /// The best rank held at least three times becomes the triple. Pair
    /// candidates are ranks held at least twice other than that triple, so a
    /// second triple can still fill the pair of a full house.
    pub fn from_planes(planes: &[u64; 4]) -> Self {
        let [s, h, d, c] = *planes;
        let quads = s & h & d & c;
        let triples = (s & h & d) | (s & h & c) | (s & d & c) | (h & d & c);
        let mut pairs = (s & h) | (s & d) | (s & c) | (h & d) | (h & c) | (d & c);

        let triple = lowest(triples);
        pairs &= !triple;
        let top_pair = lowest(pairs);
        pairs &= !top_pair;
        let second_pair = lowest(pairs);

        Self { quads, triple, top_pair, second_pair }
    }

    /// Returns the best four-of-a-kind rank, if present.
    pub fn quad(&self) -> Option<u64> {
        (self.quads != 0).then(|| lowest(self.quads))
    }

    pub fn trips(&self) -> Option<u64> {
        (self.triple != 0).then_some(self.triple)
    }

    pub fn pair(&self) -> Option<u64> {
        (self.top_pair != 0).then_some(self.top_pair)
    }

    /// Returns both pair ranks when at least two exist, best first.
    pub fn two_pair(&self) -> Option<(u64, u64)> {
        (self.second_pair != 0).then_some((self.top_pair, self.second_pair))
    }

    /// Returns true if the hand has both trips and a pair (full house).
    pub fn has_full_house(&self) -> bool {
        self.triple != 0 && self.top_pair != 0
    }
}
