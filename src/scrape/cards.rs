//! Card decoding for the live table.
//!
//! The table draws suits as inline SVGs with no usable class or label, so
//! suits are recognized by path fragments that are stable across deals. Ranks
//! come from a text span; some skins show faces as numbers (1, 11, 12, 13).

use holdem_engine::{Card, Suit, ACE, JACK, KING, QUEEN};
use serde::Deserialize;

// Path fragments that identify each suit's SVG.
const SPADE: &str = "21.9595 11.8046";
const CLUB_A: &str = "17.9999 9.94949";
const CLUB_B: &str = "17.9999 6.27562";
const HEART: &str = "17.9952 1";
const DIAMOND: &str = "8.36742 6.82911";

/// One card element as scraped from the page, before decoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCard {
    /// Text of the rank span.
    #[serde(default)]
    pub rank: String,
    /// d attribute of the suit SVG path.
    #[serde(default)]
    pub path: String,
    /// fill-rule attribute of the suit SVG path.
    #[serde(default)]
    pub fill_rule: String,
}

/// Decode one scraped card, if both its rank and suit read cleanly.
pub(crate) fn decode(raw: &RawCard) -> Option<Card> {
    let rank = rank_from_label(&raw.rank)?;
    let suit = suit_from_svg(&raw.path, &raw.fill_rule)?;
    Some(Card::new(rank, suit))
}

/// Identify a suit from its SVG path data. Hearts and diamonds share
/// fill-rule="evenodd" and are told apart by their paths.
pub(crate) fn suit_from_svg(path: &str, fill_rule: &str) -> Option<Suit> {
    if path.contains(SPADE) {
        return Some(Suit::Spades);
    }
    if path.contains(CLUB_A) && path.contains(CLUB_B) {
        return Some(Suit::Clubs);
    }
    if fill_rule == "evenodd" {
        if path.contains(HEART) {
            return Some(Suit::Hearts);
        }
        if path.contains(DIAMOND) {
            return Some(Suit::Diamonds);
        }
    }
    None
}

/// Normalize a rank label to a card value.
pub(crate) fn rank_from_label(label: &str) -> Option<u8> {
    match label.trim().to_uppercase().as_str() {
        "1" | "A" => Some(ACE),
        "13" | "K" => Some(KING),
        "12" | "Q" => Some(QUEEN),
        "11" | "J" => Some(JACK),
        other => other.parse().ok().filter(|r| (2..=10).contains(r)),
    }
}
