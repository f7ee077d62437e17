use std::io::{self, Write};

use anyhow::{ensure, Context};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use als_board::render::{format_card, print_board, render_hand};
use als_board::{Card, GameState, MiddleTheater, RowOrder, SetupConfig};

/// Sample card shown before the board: face-up Land 1.
const SAMPLE_CARD: u8 = 0b0010_1001;

/// Set up an Air/Land/Sea board and print it.
#[derive(Debug, Parser)]
#[command(name = "als-board", author, version, about = "Air/Land/Sea board viewer")]
struct Cli {
    /// Middle-theater designator as two binary digits (00, 01 or 10).
    #[arg(short, long, value_name = "BITS", default_value = "10")]
    middle: MiddleTheater,

    /// RNG seed for the deal. Omit to seed from system entropy.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Card row column order: board (Air/Land/Sea) or display (title order).
    #[arg(long, value_name = "ORDER", default_value = "board")]
    row_order: RowOrder,

    /// Log level when RUST_LOG is not set.
    #[arg(long, value_name = "LEVEL", default_value_t = Level::WARN)]
    log_level: Level,

    /// Also encode the state as a snapshot and check it decodes back.
    #[arg(long)]
    snapshot: bool,
}

fn init_logging(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let mut config = SetupConfig::default().with_row_order(cli.row_order);
    config.middle_theater = cli.middle;
    config.seed = cli.seed;

    let state = GameState::from_config(&config);
    info!(middle = %state.middle_theater, cards = state.hand.count(), "board set up");

    if cli.snapshot {
        let bytes = state.to_snapshot().context("encoding snapshot")?;
        let restored = GameState::from_snapshot(&bytes).context("decoding snapshot")?;
        ensure!(restored == state, "snapshot did not round-trip");
        info!(bytes = bytes.len(), "snapshot verified");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", format_card(Card::from_bits_unchecked(SAMPLE_CARD)))?;
    print_board(&state, config.row_order, &mut out)?;
    writeln!(out, "{}", render_hand(state.hand))?;
    writeln!(out, "{}", state.middle_theater)?;
    Ok(())
}
