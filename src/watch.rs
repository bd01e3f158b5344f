//! Continuous table monitoring: wait for deals, scrape them, predict them.

use std::time::Duration;

use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::report;
use crate::scout::Scout;
use crate::scrape::TableState;
use crate::Result;

/// Watch the table and predict every complete deal. Runs until `max_games`
/// complete deals have been predicted, or forever when it is None.
///
/// With `watch.pause_for_login` set, navigation stops at the configured URL
/// and scraping starts only after the user confirms; they are expected to
/// log in and bring the table on screen themselves. Otherwise the table is
/// opened through the lobby like a snapshot.
pub async fn watch(scout: &Scout, config: &Config, max_games: Option<u32>) -> Result<()> {
    if config.watch.pause_for_login {
        info!("Navigating to: {}", config.table.url);
        scout.page().goto(&config.table.url).await?;

        println!("\nLog in if the site asks for it and bring the poker table on screen.");
        println!("Press Enter to start watching...");
        let mut line = String::new();
        BufReader::new(io::stdin()).read_line(&mut line).await?;
    } else {
        scout.open_table(&config.table).await?;
    }

    println!("\n✓ Watching for deals (Ctrl-C to stop)");
    let mut games = 0u32;
    loop {
        match next_state(scout, config).await {
            Ok(state) if state.is_ready() => {
                games += 1;
                println!("\n{}", "=".repeat(report::WIDTH));
                println!("GAME #{}", games);
                println!("{}", "=".repeat(report::WIDTH));
                print!("{}", report::scraped(&state));

                if let Err(e) = predict(config, &state) {
                    warn!("Prediction failed: {}", e);
                    println!("✗ Prediction failed: {}", e);
                }

                if let Some(limit) = max_games {
                    if games >= limit {
                        info!("Watched {} games, stopping", games);
                        return Ok(());
                    }
                }
                println!("Waiting {}s for the next deal...", config.watch.next_deal_ms / 1000);
                sleep(Duration::from_millis(config.watch.next_deal_ms)).await;
            }
            Ok(state) => {
                println!(
                    "⏳ Deal in progress ({}/{} pockets, {} community cards)...",
                    state.seated(),
                    state.pockets.len(),
                    state.community.len()
                );
                sleep(Duration::from_millis(config.watch.poll_ms)).await;
            }
            Err(e) => {
                warn!("Scrape failed: {}", e);
                println!(
                    "✗ Scrape failed: {} (retrying in {}s)",
                    e,
                    config.watch.retry_ms / 1000
                );
                if let Some(ref path) = config.watch.failure_screenshot {
                    if let Err(e) = scout.save_screenshot(path).await {
                        warn!("Failed to save screenshot: {}", e);
                    }
                }
                sleep(Duration::from_millis(config.watch.retry_ms)).await;
            }
        }
    }
}

/// Wait out the next deal and scrape the table once it settles.
async fn next_state(scout: &Scout, config: &Config) -> Result<TableState> {
    scout
        .wait_for_deal(&config.selectors.live, config.watch.deal_timeout_ms)
        .await?;
    scout.page().wait(config.watch.settle_ms).await;
    let state = scout.table_state(&config.selectors.live).await?;
    debug!(
        "Scraped {}/{} pockets, {} community cards",
        state.seated(),
        state.pockets.len(),
        state.community.len()
    );
    Ok(state)
}

/// Predict the deal at the flop and again at the turn, printing both.
fn predict(config: &Config, state: &TableState) -> Result<()> {
    for board in [3, 4] {
        let deal = state.deal(board)?;
        if let Some(prediction) = config.prediction.predict(&deal) {
            print!("{}", report::prediction(&deal, &prediction));
        }
    }
    Ok(())
}
