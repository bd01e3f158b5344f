//! # holdem-engine
//!
//! Texas Hold'em hand evaluation and win-probability estimation.
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::{equity, parse_cards, parse_pocket, Deal, SpeedPreference};
//!
//! # fn main() -> holdem_engine::Result<()> {
//! let deal = Deal::new(
//!     parse_cards("AH KH QH 2C")?,
//!     vec![parse_pocket("JH 10H")?, parse_pocket("AS AC")?],
//! )?;
//! if let Some(prediction) = equity::auto(&deal, SpeedPreference::Balanced) {
//!     for outlook in &prediction.outlooks {
//!         println!("Player {}: {:.2}%", outlook.seat, outlook.win_probability);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod card;
mod combo;
pub mod equity;
mod hand;

pub use card::{deck, parse_cards, parse_pocket, Card, Suit, ACE, JACK, KING, QUEEN};
pub use equity::{Deal, Method, PlayerOutlook, Prediction, SpeedPreference, Stage};
pub use hand::{evaluate, rank_five, HandCategory, HandRank};

/// Result type for holdem-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from card parsing and deal validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("card '{0}' is too short, need a rank and a suit")]
    CardTooShort(String),

    #[error("invalid suit '{0}', must be one of H, D, C, S")]
    InvalidSuit(char),

    #[error("invalid rank '{0}', must be 2-10, J, Q, K or A")]
    InvalidRank(String),

    #[error("{0} has already been dealt")]
    DuplicateCard(Card),

    #[error("invalid deal: {0}")]
    InvalidDeal(String),
}
