use anyhow::Context;
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use slots_core::{GameConfig, Machine, Session, SessionRng};

#[derive(Parser, Debug)]
#[command(name = "slots", about = "Terminal slot machine")]
struct Cli {
    /// Fixed RNG seed; a random one is drawn when omitted
    #[arg(long, env = "SLOTS_SEED")]
    seed: Option<u64>,
    /// Starting balance in dollars
    #[arg(long, env = "SLOTS_BALANCE", default_value_t = slots_core::engine::STARTING_BALANCE)]
    balance: u64,
    /// Visible rows per spin
    #[arg(long, env = "SLOTS_ROWS", default_value_t = 3)]
    rows: usize,
    /// Reels (columns) per spin
    #[arg(long, env = "SLOTS_COLS", default_value_t = 3)]
    cols: usize,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "SLOTS_LOG", default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            starting_balance: self.balance,
            ..GameConfig::default_3x3()
        }
    }
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // stdout belongs to the game
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let machine = Machine::new(cli.game_config()).context("invalid machine configuration")?;
    let rng = SessionRng::seeded_or_random(cli.seed);
    info!(seed = rng.seed, rows = cli.rows, cols = cli.cols, "machine ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&machine, stdin.lock(), stdout.lock(), rng)
        .run()
        .context("session aborted")?;
    Ok(())
}
