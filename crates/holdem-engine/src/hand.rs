//! Five-card hand ranking with the total order showdowns compare by.

use std::fmt;

use crate::card::{Card, ACE};
use crate::combo::for_each_combination;

/// Hand categories from weakest to strongest. The derived order is the
/// showdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandCategory {
    pub const COUNT: usize = 10;

    /// All categories, weakest first.
    pub const ALL: [HandCategory; HandCategory::COUNT] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// Position in the category order, 0 through 9.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ranked hand.
///
/// The derived order compares category, then `ranks`, then `kickers`, which
/// settles every tie-break the same way comparing the raw hands would.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank {
    pub category: HandCategory,
    /// Values of the defining combination, strongest first: the pair value,
    /// both two-pair values, trips then pair for a full house, straight high.
    pub ranks: Vec<u8>,
    /// Remaining card values, strongest first. Flushes and high cards carry
    /// all five here.
    pub kickers: Vec<u8>,
}

impl HandRank {
    fn new(category: HandCategory, ranks: Vec<u8>, kickers: Vec<u8>) -> HandRank {
        HandRank {
            category,
            ranks,
            kickers,
        }
    }

    fn nothing() -> HandRank {
        HandRank::new(HandCategory::HighCard, Vec::new(), Vec::new())
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// Rank exactly five cards.
pub fn rank_five(cards: &[Card; 5]) -> HandRank {
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&values);

    let mut counts = [0u8; 15];
    for &v in &values {
        counts[v as usize] += 1;
    }
    let mut singles = Vec::new();
    let mut pairs = Vec::new();
    let mut trips = Vec::new();
    let mut quads = Vec::new();
    for v in (2..=ACE).rev() {
        match counts[v as usize] {
            1 => singles.push(v),
            2 => pairs.push(v),
            3 => trips.push(v),
            4 => quads.push(v),
            _ => {}
        }
    }

    if is_flush {
        if let Some(high) = straight {
            return if high == ACE {
                HandRank::new(HandCategory::RoyalFlush, vec![ACE], Vec::new())
            } else {
                HandRank::new(HandCategory::StraightFlush, vec![high], Vec::new())
            };
        }
    }
    if let Some(&quad) = quads.first() {
        return HandRank::new(HandCategory::FourOfAKind, vec![quad], singles);
    }
    if let (Some(&three), Some(&pair)) = (trips.first(), pairs.first()) {
        return HandRank::new(HandCategory::FullHouse, vec![three, pair], Vec::new());
    }
    if is_flush {
        return HandRank::new(HandCategory::Flush, Vec::new(), values);
    }
    if let Some(high) = straight {
        return HandRank::new(HandCategory::Straight, vec![high], Vec::new());
    }
    if let Some(&three) = trips.first() {
        return HandRank::new(HandCategory::ThreeOfAKind, vec![three], singles);
    }
    if pairs.len() == 2 {
        return HandRank::new(HandCategory::TwoPair, pairs, singles);
    }
    if let Some(&pair) = pairs.first() {
        return HandRank::new(HandCategory::Pair, vec![pair], singles);
    }
    HandRank::new(HandCategory::HighCard, Vec::new(), values)
}

/// Best rank from any number of cards.
///
/// Five or more cards rank the strongest five-card combination. Fewer rank
/// what is already made (pairs, trips, high cards) so a hand can be shown
/// before the board completes.
pub fn evaluate(cards: &[Card]) -> HandRank {
    if cards.len() >= 5 {
        best_five(cards)
    } else {
        partial(cards)
    }
}

fn best_five(cards: &[Card]) -> HandRank {
    let mut best = HandRank::nothing();
    for_each_combination(cards.len(), 5, |idx| {
        let five = [
            cards[idx[0]],
            cards[idx[1]],
            cards[idx[2]],
            cards[idx[3]],
            cards[idx[4]],
        ];
        let rank = rank_five(&five);
        if rank > best {
            best = rank;
        }
    });
    best
}

/// Made combinations in an incomplete hand. Kickers are not tracked; nothing
/// can outdraw inside the same category before the board is out.
fn partial(cards: &[Card]) -> HandRank {
    let mut counts = [0u8; 15];
    for c in cards {
        counts[c.rank as usize] += 1;
    }
    let mut pairs = Vec::new();
    let mut trips = Vec::new();
    for v in (2..=ACE).rev() {
        match counts[v as usize] {
            2 => pairs.push(v),
            c if c >= 3 => trips.push(v),
            _ => {}
        }
    }

    if let Some(&three) = trips.first() {
        return HandRank::new(HandCategory::ThreeOfAKind, vec![three], Vec::new());
    }
    if pairs.len() >= 2 {
        return HandRank::new(HandCategory::TwoPair, vec![pairs[0], pairs[1]], Vec::new());
    }
    if let Some(&pair) = pairs.first() {
        return HandRank::new(HandCategory::Pair, vec![pair], Vec::new());
    }
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    HandRank::new(HandCategory::HighCard, Vec::new(), values)
}

/// Straight high card for five descending values, if they form one. The
/// wheel A-2-3-4-5 ranks as 5 high.
fn straight_high(values: &[u8]) -> Option<u8> {
    if values == [ACE, 5, 4, 3, 2] {
        return Some(5);
    }
    if values.windows(2).all(|w| w[0] == w[1] + 1) {
        Some(values[0])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{parse_cards, JACK, KING, QUEEN};

    fn ranked(hand: &str) -> HandRank {
        let cards = parse_cards(hand).unwrap();
        let five: [Card; 5] = cards.try_into().unwrap();
        rank_five(&five)
    }

    fn partial_of(hand: &str) -> HandRank {
        evaluate(&parse_cards(hand).unwrap())
    }

    #[test]
    fn test_category_ladder() {
        let ladder = [
            ("AS KH QD JC 9H", HandCategory::HighCard),
            ("AS AH KD QC 5H", HandCategory::Pair),
            ("AS AH KD KC 5H", HandCategory::TwoPair),
            ("QS QH QD AC KH", HandCategory::ThreeOfAKind),
            ("9H 8D 7C 6S 5H", HandCategory::Straight),
            ("AH KH 10H 7H 3H", HandCategory::Flush),
            ("KS KH KD 5C 5H", HandCategory::FullHouse),
            ("AS AH AD AC KH", HandCategory::FourOfAKind),
            ("9H 8H 7H 6H 5H", HandCategory::StraightFlush),
            ("AH KH QH JH 10H", HandCategory::RoyalFlush),
        ];
        for window in ladder.windows(2) {
            let (weak, weak_cat) = (&window[0].0, window[0].1);
            let (strong, strong_cat) = (&window[1].0, window[1].1);
            assert_eq!(ranked(weak).category, weak_cat, "{weak}");
            assert_eq!(ranked(strong).category, strong_cat, "{strong}");
            assert!(ranked(strong) > ranked(weak), "{strong} should beat {weak}");
        }
    }

    #[test]
    fn test_straight_flush_tie_breaks() {
        assert!(ranked("9H 8H 7H 6H 5H") > ranked("8H 7H 6H 5H 4H"));
        // the wheel is the lowest straight flush
        assert!(ranked("6H 5H 4H 3H 2H") > ranked("AH 2H 3H 4H 5H"));
        assert_eq!(ranked("AH 2H 3H 4H 5H").ranks, vec![5]);
    }

    #[test]
    fn test_four_of_a_kind_tie_breaks() {
        assert!(ranked("AS AH AD AC KH") > ranked("KS KH KD KC AH"));
        assert!(ranked("AS AH AD AC KH") > ranked("AS AH AD AC QH"));
    }

    #[test]
    fn test_full_house_tie_breaks() {
        assert!(ranked("AS AH AD KC KH") > ranked("KS KH KD AC AH"));
        assert!(ranked("AS AH AD KC KH") > ranked("AS AH AD QC QH"));
        assert_eq!(ranked("AS AH AD KC KH").ranks, vec![ACE, KING]);
    }

    #[test]
    fn test_flush_tie_breaks() {
        assert!(ranked("AH KH 10H 7H 3H") > ranked("KH QH JH 9H 8H"));
        assert!(ranked("AH KH 10H 7H 3H") > ranked("AH QH JH 10H 9H"));
        assert!(ranked("AH KH QH 7H 5H") > ranked("AH KH QH 7H 4H"));
    }

    #[test]
    fn test_straight_tie_breaks() {
        assert!(ranked("9H 8D 7C 6S 5H") > ranked("8H 7D 6C 5S 4H"));
        assert!(ranked("6H 5D 4C 3S 2H") > ranked("AH 2D 3C 4S 5H"));
        assert_eq!(ranked("9H 8D 7C 6S 5H"), ranked("9C 8H 7D 6C 5S"));
    }

    #[test]
    fn test_three_of_a_kind_tie_breaks() {
        assert!(ranked("AS AH AD KC 5H") > ranked("KS KH KD AC QH"));
        assert!(ranked("AS AH AD KC 5H") > ranked("AS AH AD QC JH"));
        assert!(ranked("AS AH AD KC 7H") > ranked("AS AH AD KC 6H"));
    }

    #[test]
    fn test_two_pair_tie_breaks() {
        assert!(ranked("AS AH KD KC 5H") > ranked("KS KH QD QC AH"));
        assert!(ranked("AS AH KD KC 5H") > ranked("AS AH QD QC KH"));
        assert!(ranked("AS AH KD KC QH") > ranked("AS AH KD KC JH"));
    }

    #[test]
    fn test_one_pair_tie_breaks() {
        assert!(ranked("AS AH KD QC 5H") > ranked("KS KH AD QC JH"));
        assert!(ranked("AS AH KD QC 5H") > ranked("AS AH QD JC 10H"));
        assert!(ranked("AS AH KD QC 5H") > ranked("AS AH KD JC 10H"));
        assert!(ranked("AS AH KD QC 7H") > ranked("AS AH KD QC 6H"));
    }

    #[test]
    fn test_high_card_tie_breaks() {
        // K-Q-J-10-9 is a straight, not a high card, and beats the ace high
        let sneaky = ranked("KS QH JD 10C 9H");
        assert_eq!(sneaky.category, HandCategory::Straight);
        assert!(sneaky > ranked("AS KH QD JC 9H"));

        assert!(ranked("AS KH QD JC 9H") > ranked("AS QH JD 10C 9H"));
        assert!(ranked("AS KH QD JC 9H") > ranked("AS KH QD JC 8H"));
        assert_eq!(ranked("AS KH QD JC 9H"), ranked("AS KH QD JC 9S"));
    }

    #[test]
    fn test_royal_flush_is_its_own_category() {
        let royal = ranked("AH KH QH JH 10H");
        assert_eq!(royal.category, HandCategory::RoyalFlush);
        assert!(royal > ranked("KH QH JH 10H 9H"));
    }

    #[test]
    fn test_best_of_seven() {
        let cards = parse_cards("AH KH QH JH 10H 2C 2D").unwrap();
        assert_eq!(evaluate(&cards).category, HandCategory::RoyalFlush);

        let cards = parse_cards("AS AH 2C 7D 9H JS QD").unwrap();
        let best = evaluate(&cards);
        assert_eq!(best.category, HandCategory::Pair);
        assert_eq!(best.ranks, vec![ACE]);
        assert_eq!(best.kickers, vec![QUEEN, JACK, 9]);
    }

    #[test]
    fn test_evaluate_five_matches_rank_five() {
        let cards = parse_cards("KS KH KD 5C 5H").unwrap();
        assert_eq!(evaluate(&cards), ranked("KS KH KD 5C 5H"));
    }

    #[test]
    fn test_partial_hands() {
        assert_eq!(partial_of("AS AH KD").category, HandCategory::Pair);
        assert_eq!(partial_of("AS AH KD").ranks, vec![ACE]);

        let two_pair = partial_of("AS AH KD KC");
        assert_eq!(two_pair.category, HandCategory::TwoPair);
        assert_eq!(two_pair.ranks, vec![ACE, KING]);

        assert_eq!(partial_of("7S 7H 7D 2C").category, HandCategory::ThreeOfAKind);

        let high = partial_of("AS KH 9D 2C");
        assert_eq!(high.category, HandCategory::HighCard);
        assert_eq!(high.kickers, vec![ACE, KING, 9, 2]);

        assert_eq!(evaluate(&[]), HandRank::nothing());
    }
}
