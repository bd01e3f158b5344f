use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use holdem_engine::{equity, parse_cards, parse_pocket, Deal};
use holdem_scout::{report, Config, Scout, Speed};

#[derive(Parser)]
#[command(name = "holdem-scout")]
#[command(about = "Scrape live poker tables and predict win odds")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (only errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Open the table and print one raw scrape of it
    Snapshot {
        /// Config file (built-in defaults when omitted)
        config: Option<PathBuf>,

        /// Run in headless mode (overrides config)
        #[arg(long)]
        headless: bool,
    },

    /// Watch the table and predict every complete deal
    Watch {
        /// Config file (built-in defaults when omitted)
        config: Option<PathBuf>,

        /// Run in headless mode (overrides config)
        #[arg(long)]
        headless: bool,

        /// Stop after this many complete deals
        #[arg(long)]
        games: Option<u32>,
    },

    /// Predict win odds for hands given on the command line
    Odds {
        /// A pocket hand, e.g. -p "AH KH" (repeat per player)
        #[arg(short = 'p', long = "pocket", required = true)]
        pockets: Vec<String>,

        /// Community cards, e.g. "2C 7D 9S"
        #[arg(short, long)]
        board: Option<String>,

        /// Estimator to use
        #[arg(long, value_enum, default_value_t = MethodArg::Auto)]
        method: MethodArg,

        /// Speed preference when the method is auto
        #[arg(long, value_enum, default_value_t = SpeedArg::Balanced)]
        speed: SpeedArg,

        /// Monte Carlo sample count
        #[arg(long)]
        samples: Option<u64>,
    },

    /// Validate a config file
    Check {
        /// Config file to validate
        config: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    Auto,
    Exhaustive,
    MonteCarlo,
}

#[derive(Clone, Copy, ValueEnum)]
enum SpeedArg {
    Fast,
    Balanced,
    Accurate,
}

impl From<SpeedArg> for Speed {
    fn from(speed: SpeedArg) -> Speed {
        match speed {
            SpeedArg::Fast => Speed::Fast,
            SpeedArg::Balanced => Speed::Balanced,
            SpeedArg::Accurate => Speed::Accurate,
        }
    }
}

#[tokio::main]
async fn main() -> holdem_scout::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    match cli.command {
        Command::Snapshot { config, headless } => snapshot(config, headless).await,
        Command::Watch {
            config,
            headless,
            games,
        } => watch(config, headless, games).await,
        Command::Odds {
            pockets,
            board,
            method,
            speed,
            samples,
        } => odds(&pockets, board.as_deref(), method, speed, samples),
        Command::Check { config } => check(&config),
    }
}

fn load_config(path: Option<&Path>, headless: bool) -> holdem_scout::Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if headless {
        config.browser.headless = true;
    }
    Ok(config)
}

async fn snapshot(path: Option<PathBuf>, headless: bool) -> holdem_scout::Result<()> {
    let config = load_config(path.as_deref(), headless)?;

    println!("Opening table: {}", config.table.url);
    let scout = Scout::launch(&config.browser).await?;
    let result = match scout.open_table(&config.table).await {
        Ok(()) => scout.snapshot(&config.selectors).await,
        Err(e) => Err(e),
    };
    if let Err(e) = scout.close().await {
        warn!("Browser close failed: {}", e);
    }

    let snapshot = result?;
    println!();
    println!("✓ Scraped");
    println!("  Cards ({}): {:?}", snapshot.cards.len(), snapshot.cards);
    println!("  Odds ({}): {:?}", snapshot.odds.len(), snapshot.odds);
    println!(
        "  Players ({}): {:?}",
        snapshot.players.len(),
        snapshot.players
    );
    Ok(())
}

async fn watch(
    path: Option<PathBuf>,
    headless: bool,
    games: Option<u32>,
) -> holdem_scout::Result<()> {
    let config = load_config(path.as_deref(), headless)?;

    let scout = Scout::launch(&config.browser).await?;
    let result = holdem_scout::watch(&scout, &config, games).await;
    if let Err(e) = scout.close().await {
        warn!("Browser close failed: {}", e);
    }
    result
}

fn odds(
    pockets: &[String],
    board: Option<&str>,
    method: MethodArg,
    speed: SpeedArg,
    samples: Option<u64>,
) -> holdem_scout::Result<()> {
    let community = match board {
        Some(board) => parse_cards(board)?,
        None => Vec::new(),
    };
    let pockets = pockets
        .iter()
        .map(|p| parse_pocket(p))
        .collect::<Result<Vec<_>, _>>()?;
    let deal = Deal::new(community, pockets)?;

    let prediction = match method {
        MethodArg::Exhaustive => Some(equity::exhaustive(&deal)),
        MethodArg::MonteCarlo => Some(equity::monte_carlo(
            &deal,
            samples.unwrap_or(equity::BALANCED_SAMPLES),
        )),
        MethodArg::Auto => {
            let prediction = holdem_scout::PredictionConfig {
                speed: speed.into(),
                samples,
            };
            prediction.predict(&deal)
        }
    };

    match prediction {
        Some(p) => {
            println!("Method: {}", p.method);
            print!("{}", report::prediction(&deal, &p));
            Ok(())
        }
        None => {
            println!("✗ Pre-flop odds are not simulated; deal at least a flop");
            std::process::exit(1);
        }
    }
}

fn check(path: &Path) -> holdem_scout::Result<()> {
    let config = Config::load(path)?;
    println!("Config valid");
    println!("  Table: {}", config.table.url);
    println!("  Tab text: {}", config.table.tab_text);
    println!("  Seats: {}", config.selectors.live.seats);
    println!(
        "  Prediction: {:?}{}",
        config.prediction.speed,
        config
            .prediction
            .samples
            .map(|n| format!(", {} samples", n))
            .unwrap_or_default()
    );
    Ok(())
}
