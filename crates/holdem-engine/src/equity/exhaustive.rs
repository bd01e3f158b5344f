//! Exhaustive board enumeration.

use crate::combo::for_each_combination;
use crate::hand::HandRank;

use super::{award_split, build_prediction, showdown_ranks, Deal, Method, Prediction};

/// Visit every completion of the board and score each showdown.
///
/// Cost is C(remaining, cards to come) scenarios: at most 46 on the turn or
/// river, 666 for a full six-seat flop. A completed board is the degenerate
/// case of one scenario.
pub fn exhaustive(deal: &Deal) -> Prediction {
    let remaining = deal.remaining_deck();
    let need = deal.cards_to_come();
    let pockets = deal.pockets();

    let mut wins = vec![0.0f64; pockets.len()];
    let mut scenarios: u64 = 0;
    let mut board = Vec::with_capacity(5);
    let mut ranks: Vec<HandRank> = Vec::with_capacity(pockets.len());

    for_each_combination(remaining.len(), need, |idx| {
        board.clear();
        board.extend_from_slice(deal.community());
        for &i in idx {
            board.push(remaining[i]);
        }
        showdown_ranks(pockets, &board, &mut ranks);
        award_split(&ranks, &mut wins);
        scenarios += 1;
    });

    build_prediction(deal, &wins, scenarios, Method::Exhaustive, None)
}
