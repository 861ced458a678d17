use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_engine::ai::{Agent, MinimaxAgent, RandomAgent, Searcher};
use connect_four_engine::config::EngineConfig;
use connect_four_engine::game::{winner, Board, Player};

/// Analyze a Connect Four position or play a demonstration game.
#[derive(Parser)]
#[command(name = "connect-four-engine", about = "Connect Four minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "engine.toml")]
    config: PathBuf,

    /// Moves played so far, as space-separated columns ("3 3 4"), Red first
    #[arg(long, default_value = "")]
    moves: String,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Fixed RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Play one demonstration game, minimax (Red) vs random (Yellow)
    #[arg(long)]
    selfplay: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(seed) = cli.seed {
        config.search.seed = Some(seed);
    }
    config.validate().context("invalid configuration")?;

    if cli.selfplay {
        run_selfplay(&config)
    } else {
        analyze(&config, &cli.moves)
    }
}

/// Replay a space-separated move list onto `board`, Red first, and return
/// the side to move afterwards. Rejects malformed tokens, illegal drops,
/// and moves that continue past a decided game.
fn replay(board: &mut Board, moves: &str) -> Result<Player> {
    let mut mover = Player::Red;
    for token in moves.split_whitespace() {
        if let Some(side) = winner(board) {
            bail!("move '{token}' comes after {} has already won", side.name());
        }
        let column: usize = token
            .parse()
            .with_context(|| format!("invalid column '{token}' in move list"))?;
        board
            .drop_piece(column, mover)
            .with_context(|| format!("cannot play column {column} for {}", mover.name()))?;
        mover = mover.other();
    }
    Ok(mover)
}

/// Replay a move list onto an empty board, then report the position: the
/// winner if the game is over, otherwise the searched move for the side to
/// move.
fn analyze(config: &EngineConfig, moves: &str) -> Result<()> {
    let mut board = Board::new(config.board.rows, config.board.cols);
    let mover = replay(&mut board, moves)?;

    print!("{board}");

    if let Some(side) = winner(&board) {
        println!("{} has already won", side.name());
        return Ok(());
    }
    if board.is_full() {
        println!("draw, the board is full");
        return Ok(());
    }

    let mut searcher = match config.search.seed {
        Some(seed) => Searcher::seeded(seed),
        None => Searcher::new(),
    };
    let result = searcher.best_move(&board, mover, config.search.depth);
    let column = result
        .column
        .context("search returned no move for a live position")?;
    println!(
        "{} should play column {column} (score {:.0}, depth {})",
        mover.name(),
        result.score,
        config.search.depth,
    );
    Ok(())
}

/// One demonstration game: minimax as Red against a random Yellow.
fn run_selfplay(config: &EngineConfig) -> Result<()> {
    let depth = config.search.depth;
    let mut minimax: Box<dyn Agent> = match config.search.seed {
        Some(seed) => Box::new(MinimaxAgent::seeded(depth, seed)),
        None => Box::new(MinimaxAgent::new(depth)),
    };
    let mut random: Box<dyn Agent> = match config.search.seed {
        Some(seed) => Box::new(RandomAgent::seeded(seed.wrapping_add(1))),
        None => Box::new(RandomAgent::new()),
    };

    let mut board = Board::new(config.board.rows, config.board.cols);
    let mut mover = Player::Red;
    let mut turn = 0;

    println!(
        "{} (Red, depth {depth}) vs {} (Yellow)",
        minimax.name(),
        random.name(),
    );

    while winner(&board).is_none() && !board.is_full() {
        let column = if turn % 2 == 0 {
            minimax.select_move(&board, mover)
        } else {
            random.select_move(&board, mover)
        };
        board.drop_piece(column, mover)?;
        println!("turn {turn:2}: {} plays column {column}", mover.name());
        mover = mover.other();
        turn += 1;
    }

    print!("{board}");
    match winner(&board) {
        Some(side) => println!("{} wins after {turn} moves", side.name()),
        None => println!("draw after {turn} moves"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_returns_the_side_to_move() {
        let mut board = Board::default();
        let mover = replay(&mut board, "3 3 4").unwrap();
        assert_eq!(mover, Player::Yellow);
        assert_eq!(board.empty_cells(), 39);
    }

    #[test]
    fn replay_accepts_a_list_ending_on_the_winning_move() {
        let mut board = Board::default();
        replay(&mut board, "0 4 1 4 2 4 3").unwrap();
        assert_eq!(winner(&board), Some(Player::Red));
    }

    #[test]
    fn replay_rejects_moves_after_a_win() {
        let mut board = Board::default();
        let err = replay(&mut board, "0 4 1 4 2 4 3 5").unwrap_err();
        assert!(err.to_string().contains("already won"), "{err}");
    }

    #[test]
    fn replay_rejects_malformed_tokens() {
        let mut board = Board::default();
        let err = replay(&mut board, "3 x").unwrap_err();
        assert!(err.to_string().contains("invalid column"), "{err}");
    }
}
