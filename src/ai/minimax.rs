use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{winner, Board, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, SectionHeuristic};

/// Search depth used when callers do not pick one.
pub const DEFAULT_DEPTH: usize = 3;

/// Outcome of one search call: the minimax score and the chosen column.
/// Pure terminal evaluations carry no column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub column: Option<usize>,
}

/// Depth-limited minimax searcher with alpha-beta pruning.
///
/// The searcher owns its randomness: winning terminals carry a small score
/// jitter and every recursion level seeds its fallback column from a uniform
/// draw, so two searchers with the same seed replay identically.
pub struct Searcher {
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher {
            heuristic: Box::new(SectionHeuristic),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Searcher with a fixed RNG seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Searcher {
            heuristic: Box::new(SectionHeuristic),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        Searcher {
            heuristic,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Best move for `player` from this position, searching `depth` plies
    /// with a full pruning window.
    pub fn best_move(&mut self, board: &Board, player: Player, depth: usize) -> SearchResult {
        self.search(board, depth, player, true, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Minimax over `board` from `player`'s perspective.
    ///
    /// `maximizing` says whose turn it is: `true` means `player` moves next,
    /// `false` means the opponent does. Scoring a position for the second
    /// player while Red is about to move is the minimizing entry (`player` =
    /// [`Player::Yellow`], `maximizing = false`); `best_move` wraps the
    /// maximizing entry for the side picking a move.
    ///
    /// Terminals are checked in strict order: a win for either side, then a
    /// full board (draw, score 0), then the depth limit (heuristic leaf).
    /// Wins score `1000 + depth * 100` plus jitter in `[0, 100)`, rounded,
    /// so faster wins always dominate slower ones and every win dominates
    /// any heuristic leaf.
    ///
    /// Ties between columns keep the first one seen; a later column must
    /// strictly beat the running best to replace it.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        player: Player,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> SearchResult {
        if let Some(won) = winner(board) {
            let jitter: f64 = self.rng.random_range(0.0..100.0);
            let magnitude = (1000.0 + depth as f64 * 100.0 + jitter).round();
            let score = if won == player { magnitude } else { -magnitude };
            return SearchResult {
                score,
                column: None,
            };
        }
        if board.empty_cells() == 0 {
            return SearchResult {
                score: 0.0,
                column: None,
            };
        }
        if depth == 0 {
            return SearchResult {
                score: self.heuristic.evaluate(board, player) as f64,
                column: None,
            };
        }

        let legal = board.legal_moves();
        // Legal fallback column so a move is always returned; any scored
        // child supersedes it.
        let mut best_column = legal[self.rng.random_range(0..legal.len())];

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for &column in &legal {
                let mut child = board.clone();
                child.drop_piece(column, player).unwrap();
                let value = self
                    .search(&child, depth - 1, player, false, alpha, beta)
                    .score;
                if value > best {
                    best = value;
                    best_column = column;
                }
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            SearchResult {
                score: best,
                column: Some(best_column),
            }
        } else {
            let mut best = f64::INFINITY;
            for &column in &legal {
                let mut child = board.clone();
                child.drop_piece(column, player.other()).unwrap();
                let value = self
                    .search(&child, depth - 1, player, true, alpha, beta)
                    .score;
                if value < best {
                    best = value;
                    best_column = column;
                }
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            SearchResult {
                score: best,
                column: Some(best_column),
            }
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Agent wrapping the searcher at a fixed depth, maximizing at the root.
pub struct MinimaxAgent {
    depth: usize,
    searcher: Searcher,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        assert!(depth >= 1, "agent needs at least one ply of search");
        MinimaxAgent {
            depth,
            searcher: Searcher::new(),
        }
    }

    /// Agent with a fixed RNG seed, for reproducible games.
    pub fn seeded(depth: usize, seed: u64) -> Self {
        assert!(depth >= 1, "agent needs at least one ply of search");
        MinimaxAgent {
            depth,
            searcher: Searcher::seeded(seed),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> usize {
        assert!(!board.legal_moves().is_empty(), "no legal moves available");
        assert!(winner(board).is_none(), "position is already decided");

        let result = self.searcher.best_move(board, player, self.depth);
        result.column.expect("live position always yields a move")
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
