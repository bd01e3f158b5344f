//! # holdem-scout
//!
//! Scrape live video poker tables from the browser and predict each seat's
//! win odds.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use holdem_scout::{Config, Scout};
//!
//! # #[tokio::main]
//! # async fn main() -> holdem_scout::Result<()> {
//! let config = Config::load("scout.yaml")?;
//! let scout = Scout::launch(&config.browser).await?;
//! scout.open_table(&config.table).await?;
//! let snapshot = scout.snapshot(&config.selectors).await?;
//! println!("Cards: {:?}", snapshot.cards);
//! scout.close().await?;
//! # Ok(())
//! # }
//! ```

mod config;
pub mod report;
mod scout;
mod scrape;
mod watch;

pub use config::{
    BrowserConfig, Config, LiveSelectors, PredictionConfig, Selectors, Speed, TableConfig,
    Viewport, WatchConfig,
};
pub use scout::Scout;
pub use scrape::{RawCard, RawTable, TableSnapshot, TableState};
pub use watch::watch;

/// Result type for holdem-scout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scouting a table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("browser error: {0}")]
    Browser(#[from] eoka::Error),

    #[error("deal error: {0}")]
    Deal(#[from] holdem_engine::Error),

    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("scrape error: {0}")]
    Scrape(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.table.url, "https://www.sportybet.com/gh/games");
        assert_eq!(config.table.tab_text, "Poker");
        assert_eq!(config.table.tab_timeout_ms, 15000);
        assert_eq!(config.table.settle_ms, 5000);
        assert!(!config.browser.headless);
        assert_eq!(config.selectors.cards, ".card");
        assert_eq!(config.selectors.odds, ".odds, .win-prob");
        assert_eq!(config.selectors.players, ".player, .table-player");
        assert_eq!(config.selectors.live.seat_prefix, "button-screen-odd-");
        assert_eq!(config.selectors.live.first_seat, 446);
        assert_eq!(config.selectors.live.seats, 6);
        assert_eq!(config.watch.deal_timeout_ms, 60000);
        assert_eq!(config.watch.next_deal_ms, 20000);
        assert_eq!(config.prediction.speed, Speed::Balanced);
        assert_eq!(config.prediction.samples, None);
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
browser:
  headless: true
"#;
        let config = Config::parse(yaml).unwrap();
        assert!(config.browser.headless);
        assert_eq!(config.table.tab_text, "Poker");
        assert_eq!(config.selectors.cards, ".card");
    }

    #[test]
    fn test_parse_browser_config() {
        let yaml = r#"
browser:
  headless: true
  proxy: "http://localhost:8080"
  user_agent: "Custom UA"
  viewport:
    width: 1280
    height: 720
"#;
        let config = Config::parse(yaml).unwrap();
        assert!(config.browser.headless);
        assert_eq!(config.browser.proxy, Some("http://localhost:8080".into()));
        assert_eq!(config.browser.user_agent, Some("Custom UA".into()));
        let viewport = config.browser.viewport.unwrap();
        assert_eq!(viewport.width, 1280);
        assert_eq!(viewport.height, 720);
    }

    #[test]
    fn test_parse_table_overrides() {
        let yaml = r#"
table:
  url: "https://example.com/lobby"
  tab_text: "Hold'em"
  tab_timeout_ms: 30000
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.table.url, "https://example.com/lobby");
        assert_eq!(config.table.tab_text, "Hold'em");
        assert_eq!(config.table.tab_timeout_ms, 30000);
        // untouched keys keep their defaults
        assert_eq!(config.table.settle_ms, 5000);
    }

    #[test]
    fn test_parse_selector_overrides() {
        let yaml = r#"
selectors:
  cards: ".playing-card"
  live:
    first_seat: 100
    seats: 4
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.selectors.cards, ".playing-card");
        assert_eq!(config.selectors.odds, ".odds, .win-prob");
        assert_eq!(config.selectors.live.first_seat, 100);
        assert_eq!(config.selectors.live.seats, 4);
        assert_eq!(config.selectors.live.community, "area-table-cards");
    }

    #[test]
    fn test_parse_watch_config() {
        let yaml = r#"
watch:
  deal_timeout_ms: 90000
  poll_ms: 1000
  pause_for_login: true
  failure_screenshot: "fail-{timestamp}.png"
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.watch.deal_timeout_ms, 90000);
        assert_eq!(config.watch.poll_ms, 1000);
        assert!(config.watch.pause_for_login);
        assert_eq!(
            config.watch.failure_screenshot,
            Some("fail-{timestamp}.png".into())
        );
        assert_eq!(config.watch.settle_ms, 3000);
        assert_eq!(config.watch.retry_ms, 5000);
    }

    #[test]
    fn test_parse_prediction_config() {
        let yaml = r#"
prediction:
  speed: fast
  samples: 50000
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.prediction.speed, Speed::Fast);
        assert_eq!(config.prediction.samples, Some(50000));

        let config = Config::parse("prediction:\n  speed: accurate\n").unwrap();
        assert_eq!(config.prediction.speed, Speed::Accurate);
    }

    #[test]
    fn test_parse_unknown_speed() {
        let result = Config::parse("prediction:\n  speed: warp\n");
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_validation_empty_url() {
        let result = Config::parse("table:\n  url: \"\"\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("table.url"));
    }

    #[test]
    fn test_validation_empty_tab_text() {
        let result = Config::parse("table:\n  tab_text: \"\"\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("tab_text"));
    }

    #[test]
    fn test_validation_seat_count() {
        let result = Config::parse("selectors:\n  live:\n    seats: 1\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("seats"));

        let result = Config::parse("selectors:\n  live:\n    seats: 30\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_zero_samples() {
        let result = Config::parse("prediction:\n  samples: 0\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("samples"));
    }

    #[test]
    fn test_load_example_config() {
        let config = Config::load("configs/example.yaml").unwrap();
        assert_eq!(config.table.url, "https://www.sportybet.com/gh/games");
        assert!(config.watch.pause_for_login);
        assert_eq!(
            config.watch.failure_screenshot,
            Some("scrape-failure-{timestamp}.png".into())
        );
    }

    #[test]
    fn test_prediction_routing() {
        use holdem_engine::{parse_cards, parse_pocket, Deal, Method};

        let deal = |community: &str| {
            Deal::new(
                parse_cards(community).unwrap(),
                vec![
                    parse_pocket("AS AH").unwrap(),
                    parse_pocket("KD KC").unwrap(),
                ],
            )
            .unwrap()
        };

        let prediction = PredictionConfig {
            speed: Speed::Balanced,
            samples: Some(200),
        };
        // explicit sample count forces Monte Carlo on the flop
        let p = prediction.predict(&deal("2C 3C 4C")).unwrap();
        assert_eq!(p.method, Method::MonteCarlo);
        assert_eq!(p.outlooks[0].scenarios, 200);

        // the turn stays exhaustive regardless
        let p = prediction.predict(&deal("2C 3C 4C 9D")).unwrap();
        assert_eq!(p.method, Method::Exhaustive);

        // pre-flop is skipped
        assert!(prediction.predict(&deal("")).is_none());
    }
}
