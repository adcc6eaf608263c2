use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use plyboard::chess::Position;
use plyboard::turn_loop::{LoopOptions, TurnLoop};

/// Play chess moves in coordinate notation (e.g. `e2e4`); type `end` to quit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Log filter directive, overridden by RUST_LOG when set.
    #[arg(long, default_value = "warn")]
    log: String,

    /// Start from this FEN instead of the standard position.
    #[arg(long)]
    fen: Option<String>,

    /// Print all fifteen bitboards after every move.
    #[arg(long)]
    show_bitboards: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let position = match cli.fen.as_deref().map(Position::from_fen) {
        None => Position::new(),
        Some(Ok(position)) => position,
        Some(Err(e)) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let options = LoopOptions {
        show_bitboards: cli.show_bitboards,
    };
    let mut game = TurnLoop::new(position, options);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = game.run(stdin.lock(), &mut stdout) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
