//! Decoding scraped DOM data into cards and table state.

mod cards;
mod state;

pub use cards::RawCard;
pub use state::{RawTable, TableState};

/// Raw text lists pulled from the table page, each in DOM order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableSnapshot {
    /// Card face texts.
    pub cards: Vec<String>,
    /// Odds and win-probability texts.
    pub odds: Vec<String>,
    /// Player labels.
    pub players: Vec<String>,
}
