//! Monte Carlo board sampling.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::hand::{HandCategory, HandRank};

use super::{award_split, build_prediction, showdown_ranks, Deal, Method, Prediction};

/// Sample count for the fast speed preference.
pub const FAST_SAMPLES: u64 = 10_000;
/// Default sample count; lands within a fraction of a percent of exhaustive
/// on flop boards.
pub const BALANCED_SAMPLES: u64 = 25_000;

/// Estimate by sampling `samples` random board completions.
pub fn monte_carlo(deal: &Deal, samples: u64) -> Prediction {
    monte_carlo_with_rng(deal, samples, &mut rand::thread_rng())
}

/// [`monte_carlo`] with a caller-supplied RNG, deterministic under a seeded
/// one.
///
/// Every seat is scored on the same sampled boards, so win shares sum to
/// 100% and the per-seat final hand categories are tracked for the
/// most-likely-hand breakdown.
pub fn monte_carlo_with_rng<R: Rng>(deal: &Deal, samples: u64, rng: &mut R) -> Prediction {
    let remaining = deal.remaining_deck();
    let need = deal.cards_to_come();
    let pockets = deal.pockets();

    let mut wins = vec![0.0f64; pockets.len()];
    let mut counts = vec![[0u64; HandCategory::COUNT]; pockets.len()];
    let mut board = Vec::with_capacity(5);
    let mut ranks: Vec<HandRank> = Vec::with_capacity(pockets.len());

    for _ in 0..samples {
        board.clear();
        board.extend_from_slice(deal.community());
        board.extend(remaining.choose_multiple(rng, need).copied());
        showdown_ranks(pockets, &board, &mut ranks);
        award_split(&ranks, &mut wins);
        for (rank, seat_counts) in ranks.iter().zip(counts.iter_mut()) {
            seat_counts[rank.category.index()] += 1;
        }
    }

    build_prediction(deal, &wins, samples, Method::MonteCarlo, Some(&counts))
}
