use clap::Parser;

use rulegen::{
    board::Board,
    draw::{self, App, Rect},
};

/// Animate an elementary cellular automaton in the terminal.
///
/// Quit with q, pause with p, change speed with j/k.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Wolfram rule number (0-255), e.g. 30, 110 or 250
    rule: u8,

    /// Tick interval in milliseconds
    #[arg(long, default_value_t = 100)]
    period: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let size = Rect::term_size()?;
    let board = Board::generate(size.w() as usize, size.h() as usize, args.rule)?;
    draw::run(App::new(board, args.rule, args.period))?;
    Ok(())
}
