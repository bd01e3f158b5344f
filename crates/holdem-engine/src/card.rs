//! Playing cards: notation parsing, display, deck construction.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Jack rank value.
pub const JACK: u8 = 11;
/// Queen rank value.
pub const QUEEN: u8 = 12;
/// King rank value.
pub const KING: u8 = 13;
/// Ace rank value. Aces rank high; the wheel straight is handled in hand ranking.
pub const ACE: u8 = 14;

/// One of the four French suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Single-letter notation (`H`, `D`, `C`, `S`).
    pub fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    /// Parse the single-letter notation, case-insensitive.
    pub fn from_letter(c: char) -> Result<Suit> {
        match c.to_ascii_uppercase() {
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            'S' => Ok(Suit::Spades),
            other => Err(Error::InvalidSuit(other)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single playing card.
///
/// Ranks run 2 through 14 (ace). Construction through [`Card::from_str`] or
/// [`deck`] always yields a valid rank; [`Card::new`] trusts the caller the
/// same way the notation parser is trusted by everything downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: u8, suit: Suit) -> Card {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            JACK => write!(f, "J{}", self.suit),
            QUEEN => write!(f, "Q{}", self.suit),
            KING => write!(f, "K{}", self.suit),
            ACE => write!(f, "A{}", self.suit),
            n => write!(f, "{}{}", n, self.suit),
        }
    }
}

impl FromStr for Card {
    type Err = Error;

    /// Parse notation like `AH`, `10D` or `js` (case-insensitive). The last
    /// character is the suit, everything before it the rank.
    fn from_str(s: &str) -> Result<Card> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() < 2 {
            return Err(Error::CardTooShort(s.trim().to_string()));
        }

        let suit = Suit::from_letter(chars[chars.len() - 1])?;
        let rank_part: String = chars[..chars.len() - 1]
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let rank = match rank_part.as_str() {
            "A" => ACE,
            "K" => KING,
            "Q" => QUEEN,
            "J" => JACK,
            other => {
                let n: u8 = other
                    .parse()
                    .map_err(|_| Error::InvalidRank(other.to_string()))?;
                if !(2..=10).contains(&n) {
                    return Err(Error::InvalidRank(other.to_string()));
                }
                n
            }
        };

        Ok(Card::new(rank, suit))
    }
}

/// The full 52-card deck.
pub fn deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for rank in 2..=ACE {
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Parse a whitespace-separated card list like `"AS KC 10H"`.
pub fn parse_cards(input: &str) -> Result<Vec<Card>> {
    input.split_whitespace().map(str::parse).collect()
}

/// Parse a two-card pocket hand like `"AS KC"`.
pub fn parse_pocket(input: &str) -> Result<[Card; 2]> {
    let cards = parse_cards(input)?;
    match cards.as_slice() {
        [a, b] => Ok([*a, *b]),
        other => Err(Error::InvalidDeal(format!(
            "a pocket hand needs exactly 2 cards, got {}",
            other.len()
        ))),
    }
}
