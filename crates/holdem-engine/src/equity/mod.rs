//! Win-probability estimation for a dealt table.
//!
//! A [`Deal`] fixes the visible community cards and every pocket hand. The
//! two estimators walk future boards, score each showdown once for all seats
//! and split ties 1/n: [`exhaustive`] visits every completion of the board,
//! [`monte_carlo`] samples them.

mod exhaustive;
mod monte_carlo;

use std::collections::HashSet;
use std::fmt;

use crate::card::{deck, Card};
use crate::hand::{evaluate, HandCategory, HandRank};
use crate::{Error, Result};

pub use exhaustive::exhaustive;
pub use monte_carlo::{monte_carlo, monte_carlo_with_rng, BALANCED_SAMPLES, FAST_SAMPLES};

/// Betting street implied by the number of community cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::PreFlop => "PRE-FLOP",
            Stage::Flop => "FLOP",
            Stage::Turn => "TURN",
            Stage::River => "RIVER",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which estimator produced a [`Prediction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Exhaustive,
    MonteCarlo,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::Exhaustive => "Exhaustive",
            Method::MonteCarlo => "Monte Carlo",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trade-off knob for [`auto`] on streets where both estimators are viable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedPreference {
    /// Monte Carlo with [`FAST_SAMPLES`].
    Fast,
    /// Monte Carlo with [`BALANCED_SAMPLES`].
    #[default]
    Balanced,
    /// Always exhaustive.
    Accurate,
}

/// A validated table: community cards plus one pocket hand per seat, all
/// distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    community: Vec<Card>,
    pockets: Vec<[Card; 2]>,
}

impl Deal {
    /// Community must hold 0, 3, 4 or 5 cards; at least one pocket; no card
    /// dealt twice.
    pub fn new(community: Vec<Card>, pockets: Vec<[Card; 2]>) -> Result<Deal> {
        if pockets.is_empty() {
            return Err(Error::InvalidDeal(
                "at least one pocket hand is required".into(),
            ));
        }
        if !matches!(community.len(), 0 | 3 | 4 | 5) {
            return Err(Error::InvalidDeal(format!(
                "community must hold 0, 3, 4 or 5 cards, got {}",
                community.len()
            )));
        }
        let mut seen = HashSet::new();
        for card in community.iter().chain(pockets.iter().flatten()) {
            if !seen.insert(*card) {
                return Err(Error::DuplicateCard(*card));
            }
        }
        Ok(Deal { community, pockets })
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn pockets(&self) -> &[[Card; 2]] {
        &self.pockets
    }

    pub fn stage(&self) -> Stage {
        match self.community.len() {
            0 => Stage::PreFlop,
            3 => Stage::Flop,
            4 => Stage::Turn,
            _ => Stage::River,
        }
    }

    /// Community cards still to be dealt.
    pub fn cards_to_come(&self) -> usize {
        5 - self.community.len()
    }

    /// Every card not dealt to the board or a pocket, in deck order.
    pub fn remaining_deck(&self) -> Vec<Card> {
        let used: HashSet<Card> = self
            .community
            .iter()
            .chain(self.pockets.iter().flatten())
            .copied()
            .collect();
        deck().into_iter().filter(|c| !used.contains(c)).collect()
    }
}

/// One seat's estimate, as rendered in reports.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOutlook {
    /// 1-based seat number.
    pub seat: usize,
    pub pocket: [Card; 2],
    /// Share of scenarios won, as a percentage. Ties contribute 1/n.
    pub win_probability: f64,
    /// Scenarios evaluated (board completions or samples).
    pub scenarios: u64,
    /// Best hand already made with the visible board. None pre-flop.
    pub current_hand: Option<HandRank>,
    /// Most frequent final hand category and its share. Monte Carlo only.
    pub most_likely: Option<(HandCategory, f64)>,
    /// Top final hand categories by share, at most three. Monte Carlo only.
    pub breakdown: Vec<(HandCategory, f64)>,
}

/// Estimates for every seat, strongest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub method: Method,
    pub outlooks: Vec<PlayerOutlook>,
}

/// Pick an estimator for the deal's street.
///
/// Turn and river are exhaustive (at most 46 completions). The flop goes by
/// `speed`. Pre-flop analysis is skipped entirely; starting hands are chart
/// territory, not simulation territory.
pub fn auto(deal: &Deal, speed: SpeedPreference) -> Option<Prediction> {
    match deal.cards_to_come() {
        0 | 1 => Some(exhaustive(deal)),
        2 => Some(match speed {
            SpeedPreference::Fast => monte_carlo(deal, FAST_SAMPLES),
            SpeedPreference::Balanced => monte_carlo(deal, BALANCED_SAMPLES),
            SpeedPreference::Accurate => exhaustive(deal),
        }),
        _ => None,
    }
}

/// Rank every seat's seven cards for one completed board.
fn showdown_ranks(pockets: &[[Card; 2]], board: &[Card], ranks: &mut Vec<HandRank>) {
    ranks.clear();
    let mut cards = Vec::with_capacity(2 + board.len());
    for pocket in pockets {
        cards.clear();
        cards.extend_from_slice(pocket);
        cards.extend_from_slice(board);
        ranks.push(evaluate(&cards));
    }
}

/// Award one scenario's pot: winners split evenly.
fn award_split(ranks: &[HandRank], wins: &mut [f64]) {
    if let Some(best) = ranks.iter().max() {
        let winners = ranks.iter().filter(|r| *r == best).count();
        let share = 1.0 / winners as f64;
        for (rank, win) in ranks.iter().zip(wins.iter_mut()) {
            if rank == best {
                *win += share;
            }
        }
    }
}

/// Assemble sorted outlooks from accumulated wins. `category_counts` is
/// per-seat when the estimator tracked final hand categories.
fn build_prediction(
    deal: &Deal,
    wins: &[f64],
    scenarios: u64,
    method: Method,
    category_counts: Option<&[[u64; HandCategory::COUNT]]>,
) -> Prediction {
    let mut outlooks = Vec::with_capacity(deal.pockets().len());
    for (i, pocket) in deal.pockets().iter().enumerate() {
        let current_hand = if deal.community().is_empty() {
            None
        } else {
            let mut cards = Vec::with_capacity(2 + deal.community().len());
            cards.extend_from_slice(pocket);
            cards.extend_from_slice(deal.community());
            Some(evaluate(&cards))
        };

        let (most_likely, breakdown) = match category_counts {
            Some(counts) => summarize_categories(&counts[i], scenarios),
            None => (None, Vec::new()),
        };

        let win_probability = if scenarios == 0 {
            0.0
        } else {
            wins[i] / scenarios as f64 * 100.0
        };

        outlooks.push(PlayerOutlook {
            seat: i + 1,
            pocket: *pocket,
            win_probability,
            scenarios,
            current_hand,
            most_likely,
            breakdown,
        });
    }
    outlooks.sort_by(|a, b| b.win_probability.total_cmp(&a.win_probability));
    Prediction { method, outlooks }
}

fn summarize_categories(
    counts: &[u64; HandCategory::COUNT],
    scenarios: u64,
) -> (Option<(HandCategory, f64)>, Vec<(HandCategory, f64)>) {
    if scenarios == 0 {
        return (None, Vec::new());
    }
    let mut seen: Vec<(HandCategory, u64)> = HandCategory::ALL
        .iter()
        .map(|&c| (c, counts[c.index()]))
        .filter(|&(_, n)| n > 0)
        .collect();
    seen.sort_by(|a, b| b.1.cmp(&a.1));

    let share = |n: u64| n as f64 / scenarios as f64 * 100.0;
    let most_likely = seen.first().map(|&(c, n)| (c, share(n)));
    let breakdown = seen.iter().take(3).map(|&(c, n)| (c, share(n))).collect();
    (most_likely, breakdown)
}
