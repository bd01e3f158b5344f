//! Terminal rendering for table states and predictions.
//!
//! Everything renders to a `String` so the exact layout is testable; the
//! watch loop and the CLI just print the result.

use std::fmt::Write;

use crate::scrape::TableState;
use holdem_engine::{Card, Deal, Prediction, Stage};

/// Banner width for the simple (flop) layout.
pub const WIDTH: usize = 70;
/// Banner width for the full (turn and river) layout.
const WIDE: usize = 90;

/// The scraped-data block the watch loop prints per deal.
pub fn scraped(state: &TableState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nScraped Data:");
    let _ = writeln!(out, "{}", "-".repeat(WIDTH));
    for (i, pocket) in state.pockets.iter().enumerate() {
        match pocket {
            Some([first, second]) => {
                let _ = writeln!(out, "Player {}: {} {}", i + 1, first, second);
            }
            None => {
                let _ = writeln!(out, "Player {}: Not visible", i + 1);
            }
        }
    }
    let _ = writeln!(out, "\nCommunity Cards: {}", cards(&state.community));
    let _ = writeln!(out, "Flop: {}", state.flop().map(cards).unwrap_or_else(|| "-".into()));
    let _ = writeln!(
        out,
        "Turn: {}",
        state.turn().map(|c| c.to_string()).unwrap_or_else(|| "-".into())
    );
    let _ = writeln!(out, "{}", "-".repeat(WIDTH));
    out
}

/// A prediction table for the deal's street.
///
/// The flop gets the simple layout; turn and river add the most likely
/// final hand and the per-player outcome breakdown.
pub fn prediction(deal: &Deal, prediction: &Prediction) -> String {
    match deal.stage() {
        Stage::Turn | Stage::River => full_layout(deal, prediction),
        _ => simple_layout(deal, prediction),
    }
}

fn simple_layout(deal: &Deal, prediction: &Prediction) -> String {
    let mut out = String::new();
    stage_header(&mut out, WIDTH, deal);
    let _ = writeln!(
        out,
        "{:<8} {:<12} {:<18} {:<10}",
        "Player", "Pocket", "Current Hand", "Win %"
    );
    let _ = writeln!(out, "{}", "-".repeat(WIDTH));

    for outlook in &prediction.outlooks {
        let _ = writeln!(
            out,
            "Player {:<2} {:<12} {:<18} {:<10}",
            outlook.seat,
            pocket(&outlook.pocket),
            current_hand(outlook),
            format!("{:.2}%", outlook.win_probability)
        );
    }

    let _ = writeln!(out, "\nSimulations: {}", thousands(scenarios(prediction)));
    top_winners(&mut out, WIDTH, prediction, false);
    let _ = writeln!(out, "{}\n", "=".repeat(WIDTH));
    out
}

fn full_layout(deal: &Deal, prediction: &Prediction) -> String {
    let mut out = String::new();
    stage_header(&mut out, WIDE, deal);
    let _ = writeln!(
        out,
        "{:<8} {:<12} {:<18} {:<18} {:<8} {:<10}",
        "Player", "Pocket", "Current", "Most Likely", "%", "Win %"
    );
    let _ = writeln!(out, "{}", "-".repeat(WIDE));

    for outlook in &prediction.outlooks {
        let (likely, likely_pct) = match &outlook.most_likely {
            Some((category, pct)) => (category.name().to_string(), format!("{:.1}%", pct)),
            None => ("N/A".to_string(), "0%".to_string()),
        };
        let _ = writeln!(
            out,
            "Player {:<2} {:<12} {:<18} {:<18} {:<8} {:<10}",
            outlook.seat,
            pocket(&outlook.pocket),
            current_hand(outlook),
            likely,
            likely_pct,
            format!("{:.2}%", outlook.win_probability)
        );
    }

    if prediction.outlooks.iter().any(|o| !o.breakdown.is_empty()) {
        let _ = writeln!(out, "\n{}", "-".repeat(WIDE));
        let _ = writeln!(out, "RIVER POSSIBILITIES (Top 3 outcomes per player):");
        let _ = writeln!(out, "{}", "-".repeat(WIDE));
        for outlook in &prediction.outlooks {
            if outlook.breakdown.is_empty() {
                continue;
            }
            let breakdown = outlook
                .breakdown
                .iter()
                .map(|(category, pct)| format!("{}: {:.1}%", category.name(), pct))
                .collect::<Vec<_>>()
                .join(" | ");
            let _ = writeln!(out, "Player {}: {}", outlook.seat, breakdown);
        }
    }

    let _ = writeln!(out, "\nSimulations: {}", thousands(scenarios(prediction)));
    top_winners(&mut out, WIDE, prediction, true);
    let _ = writeln!(out, "{}\n", "=".repeat(WIDE));
    out
}

fn stage_header(out: &mut String, width: usize, deal: &Deal) {
    let _ = writeln!(out, "\n{}", "=".repeat(width));
    let _ = writeln!(out, "Stage: {}", deal.stage());
    let _ = writeln!(out, "Community Cards: {}", cards(deal.community()));
    let _ = writeln!(out, "{}", "=".repeat(width));
}

fn top_winners(out: &mut String, width: usize, prediction: &Prediction, detailed: bool) {
    let _ = writeln!(out, "\n{}", "-".repeat(width));
    let _ = writeln!(out, "TOP 3 MOST LIKELY WINNERS:");
    let _ = writeln!(out, "{}", "-".repeat(width));
    for (i, outlook) in prediction.outlooks.iter().take(3).enumerate() {
        if detailed {
            let likely = outlook
                .most_likely
                .as_ref()
                .map(|(category, _)| category.name())
                .unwrap_or("N/A");
            let _ = writeln!(
                out,
                "{}. Player {} ({}) - {:.2}% | Current: {} → Likely: {}",
                i + 1,
                outlook.seat,
                pocket(&outlook.pocket),
                outlook.win_probability,
                current_hand(outlook),
                likely
            );
        } else {
            let _ = writeln!(
                out,
                "{}. Player {} ({}) - {:.2}%",
                i + 1,
                outlook.seat,
                pocket(&outlook.pocket),
                outlook.win_probability
            );
        }
    }
}

fn cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".into();
    }
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn pocket(pocket: &[Card; 2]) -> String {
    format!("{} {}", pocket[0], pocket[1])
}

fn current_hand(outlook: &holdem_engine::PlayerOutlook) -> &'static str {
    outlook
        .current_hand
        .as_ref()
        .map(|h| h.category.name())
        .unwrap_or("TBD")
}

fn scenarios(prediction: &Prediction) -> u64 {
    prediction.outlooks.first().map(|o| o.scenarios).unwrap_or(0)
}

/// Format with thousands separators, e.g. 25000 as "25,000".
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
