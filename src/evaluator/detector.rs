use super::hand_analysis::HandAnalysis;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::evaluator::{Category, Hand, HandBuilder};

/// Strategy pattern: each detector looks for its category and, on a match,
/// builds the hand with cards ordered by significance.
pub trait CategoryDetector {
    fn find(&self, analysis: &HandAnalysis) -> Option<Hand>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

fn straight_hand(category: Category, straight: StraightInfo) -> Hand {
    let mut hand = HandBuilder::new();
    hand.push_best(straight.cards, 5);
    if straight.ace_low {
        hand.ace_low();
    }
    hand.finish(category)
}

/// Straight Flush: five consecutive ranks in one suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn find(&self, analysis: &HandAnalysis) -> Option<Hand> {
        StraightInfo::straight_flush(analysis).map(|s| straight_hand(Category::StraightFlush, s))
    }
}

/// Four of a Kind: all four suits of one rank, plus the best remaining card
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn find(&self, analysis: &HandAnalysis) -> Option<Hand> {
        let quad = analysis.cards_of(analysis.rank_groups.quad()?);
        let mut hand = HandBuilder::new();
        hand.push_best(quad, 4);
        hand.push_best(analysis.set - quad, 1);
        Some(hand.finish(Category::FourOfAKind))
    }
}

/// Full House: three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn find(&self, analysis: &HandAnalysis) -> Option<Hand> {
        let groups = &analysis.rank_groups;
        if !groups.has_full_house() {
            return None;
        }
        let mut hand = HandBuilder::new();
        hand.push_best(analysis.cards_of(groups.triple), 3);
        // The pair rank may itself hold three cards
        hand.push_best(analysis.cards_of(groups.top_pair), 2);
        Some(hand.finish(Category::FullHouse))
    }
}

/// Flush: five cards of one suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn find(&self, analysis: &HandAnalysis) -> Option<Hand> {
        let flush = SuitInfo::detect(analysis)?;
        let mut hand = HandBuilder::new();
        hand.push_best(flush.cards, 5);
        Some(hand.finish(Category::Flush))
    }
}

/// Straight: five consecutive ranks, any suits
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn find(&self, analysis: &HandAnalysis) -> Option<Hand> {
        StraightInfo::straight(analysis).map(|s| straight_hand(Category::Straight, s))
    }
}

/// Three of a Kind: the triple plus the two best remaining cards
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn find(&self, analysis: &HandAnalysis) -> Option<Hand> {
        let trips = analysis.cards_of(analysis.rank_groups.trips()?);
        let mut hand = HandBuilder::new();
        hand.push_best(trips, 3);
        hand.push_best(analysis.set - trips, 2);
        Some(hand.finish(Category::ThreeOfAKind))
    }
}

/// Two Pair: the two best pairs plus the best remaining card
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn find(&self, analysis: &HandAnalysis) -> Option<Hand> {
        let (top, second) = analysis.rank_groups.two_pair()?;
        let top = analysis.cards_of(top);
        let second = analysis.cards_of(second);
        let mut hand = HandBuilder::new();
        hand.push_best(top, 2);
        hand.push_best(second, 2);
        hand.push_best(analysis.set - top - second, 1);
        Some(hand.finish(Category::TwoPair))
    }
}

/// One Pair: the pair plus the three best remaining cards
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn find(&self, analysis: &HandAnalysis) -> Option<Hand> {
        let pair = analysis.cards_of(analysis.rank_groups.pair()?);
        let mut hand = HandBuilder::new();
        hand.push_best(pair, 2);
        hand.push_best(analysis.set - pair, 3);
        Some(hand.finish(Category::Pair))
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn find(&self, analysis: &HandAnalysis) -> Option<Hand> {
        // Always matches as fallback
        let mut hand = HandBuilder::new();
        hand.push_best(analysis.set, 5);
        Some(hand.finish(Category::HighCard))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_list::CardList;

    fn analyze(s: &str) -> HandAnalysis {
        let cards: CardList = s.parse().expect("valid cards");
        HandAnalysis::new(&cards.iter().collect())
    }

    fn found(detector: &dyn CategoryDetector, s: &str) -> Option<Category> {
        detector.find(&analyze(s)).map(|h| h.category())
    }

    #[test]
    fn test_straight_flush_detector() {
        assert_eq!(found(&StraightFlushDetector, "[9h,8h,7h,6h,5h]"), Some(Category::StraightFlush));
        assert_eq!(found(&StraightFlushDetector, "[9h,8h,7h,6h,5d]"), None);
    }

    #[test]
    fn test_four_of_a_kind_detector() {
        assert_eq!(found(&FourOfAKindDetector, "[As,Ah,Ad,Ac,Ks]"), Some(Category::FourOfAKind));
        assert_eq!(found(&FourOfAKindDetector, "[As,Ah,Ad,Ks,Kc]"), None);
    }

    #[test]
    fn test_full_house_detector() {
        assert_eq!(found(&FullHouseDetector, "[Ks,Kh,Kd,Qc,Qs]"), Some(Category::FullHouse));
        assert_eq!(found(&FullHouseDetector, "[Ks,Kh,Kd,Qc,Js]"), None);
    }

    #[test]
    fn test_flush_detector() {
        assert_eq!(found(&FlushDetector, "[Ad,Jd,9d,5d,2d]"), Some(Category::Flush));
        assert_eq!(found(&FlushDetector, "[Ad,Jd,9d,5d,2s]"), None);
    }

    #[test]
    fn test_straight_detector() {
        assert_eq!(found(&StraightDetector, "[9s,8h,7d,6c,5s]"), Some(Category::Straight));
        assert_eq!(found(&StraightDetector, "[9s,8h,7d,6c,4s]"), None);
    }

    #[test]
    fn test_three_of_a_kind_detector() {
        assert_eq!(found(&ThreeOfAKindDetector, "[Js,Jh,Jd,9c,7s]"), Some(Category::ThreeOfAKind));
    }

    #[test]
    fn test_two_pair_detector() {
        assert_eq!(found(&TwoPairDetector, "[As,Ah,Kd,Kc,Qs]"), Some(Category::TwoPair));
        assert_eq!(found(&TwoPairDetector, "[As,Ah,Kd,Jc,Qs]"), None);
    }

    #[test]
    fn test_one_pair_detector() {
        assert_eq!(found(&OnePairDetector, "[Js,Jh,9d,7c,3s]"), Some(Category::Pair));
        assert_eq!(found(&OnePairDetector, "[Js,Th,9d,7c,3s]"), None);
    }

    #[test]
    fn test_high_card_detector() {
        assert_eq!(found(&HighCardDetector, "[As,Kh,Jd,9c,7s]"), Some(Category::HighCard));
        assert_eq!(found(&HighCardDetector, "[]"), Some(Category::HighCard));
    }

    #[test]
    fn test_detector_priority_straight_flush_over_flush() {
        let analysis = analyze("[9h,8h,7h,6h,5h]");

        // Straight flush, flush and straight all match; the list order decides
        assert!(StraightFlushDetector.find(&analysis).is_some());
        assert!(FlushDetector.find(&analysis).is_some());
        assert!(StraightDetector.find(&analysis).is_some());
        let first = DETECTORS.iter().find_map(|d| d.find(&analysis)).unwrap();
        assert_eq!(first.category(), Category::StraightFlush);
    }
}
