//! Interactive Lines of Action shell.
//!
//! Reads the game-control protocol from standard input: administrative
//! commands (`start`, `clear`, `manual`, `auto`, `seed`, `set`, `dump`,
//! `help`, `quit`) and moves in `c0r0-c1r1` form. Black starts on the
//! keyboard, white as the machine; `manual`/`auto` reassign either seat.

mod session;

use anyhow::Result;
use clap::Parser;
use session::Session;
use tracing_subscriber::EnvFilter;

/// Lines of Action: interactive game shell
#[derive(Parser)]
#[command(name = "loa", version, about, long_about = None)]
struct Cli {
    /// Seed for the machine players' random source
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    Session::new(cli.seed).run()
}
