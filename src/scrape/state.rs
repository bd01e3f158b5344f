//! Live table state, decoded from one scrape pass.

use serde::Deserialize;

use crate::scrape::cards::{self, RawCard};
use crate::Result;
use holdem_engine::{Card, Deal};

/// Everything scraped from the table in one pass, still undecoded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTable {
    /// Card elements under each seat, in seat order.
    #[serde(default)]
    pub seats: Vec<Vec<RawCard>>,
    /// Card elements in the community area, in deal order.
    #[serde(default)]
    pub community: Vec<RawCard>,
}

/// Decoded table state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    /// Pocket cards per seat. None while a seat's cards are not readable.
    pub pockets: Vec<Option<[Card; 2]>>,
    /// Community cards dealt so far.
    pub community: Vec<Card>,
}

impl TableState {
    /// Decode a raw scrape. A seat needs both cards readable to count;
    /// unreadable community cards are dropped.
    pub fn from_raw(raw: &RawTable) -> TableState {
        let pockets = raw
            .seats
            .iter()
            .map(|cards| match cards.as_slice() {
                [first, second] => match (cards::decode(first), cards::decode(second)) {
                    (Some(first), Some(second)) => Some([first, second]),
                    _ => None,
                },
                _ => None,
            })
            .collect();
        let community = raw.community.iter().filter_map(cards::decode).collect();
        TableState { pockets, community }
    }

    /// Seats whose pockets read cleanly.
    pub fn seated(&self) -> usize {
        self.pockets.iter().filter(|p| p.is_some()).count()
    }

    /// The flop, once three community cards are out.
    pub fn flop(&self) -> Option<&[Card]> {
        if self.community.len() >= 3 {
            Some(&self.community[..3])
        } else {
            None
        }
    }

    /// The turn card, once it is out.
    pub fn turn(&self) -> Option<Card> {
        self.community.get(3).copied()
    }

    /// Whether every seat shows a pocket and the board has reached the turn.
    /// That is the earliest point a full prediction pass makes sense.
    pub fn is_ready(&self) -> bool {
        !self.pockets.is_empty()
            && self.pockets.iter().all(|p| p.is_some())
            && self.community.len() >= 4
    }

    /// Build a deal from the readable pockets and the first `board`
    /// community cards.
    pub fn deal(&self, board: usize) -> Result<Deal> {
        let pockets: Vec<[Card; 2]> = self.pockets.iter().flatten().copied().collect();
        let community = self.community.iter().take(board).copied().collect();
        Ok(Deal::new(community, pockets)?)
    }
}
