//! Alpha-Beta search
//!
//! Depth-limited minimax with alpha-beta pruning. X maximizes, O minimizes.
//! Moves are tried in ascending (board, cell) order and every child is a
//! fresh `BoardState` value, so sibling branches never share state.
//!
//! # Example
//!
//! ```
//! use uttt::board::BoardState;
//! use uttt::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let state = BoardState::new();
//!
//! let result = searcher.best_move(&state, 3);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: board {}, cell {}", best_move.board, best_move.cell);
//! }
//! ```

use tracing::debug;

use crate::board::{BoardState, Mark, Move};
use crate::eval::{evaluate, WIN_SCORE};
use crate::rules::{is_terminal, valid_moves, Rules};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = WIN_SCORE + 1;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including leaves
    pub nodes: u64,
    /// Positions scored by the static evaluation
    pub leaves: u64,
    /// Total cutoffs (`beta <= alpha`)
    pub beta_cutoffs: u64,
    /// Cutoffs on the first move tried
    pub first_move_cutoffs: u64,
}

impl SearchStats {
    /// Share of cutoffs produced by the first move, in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move for the side to move; `None` at depth 0 or in a decided game
    pub best_move: Option<Move>,
    /// Minimax value of the position
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
///
/// Holds only the rule variant and the statistics of the last search.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    rules: Rules,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher using strict routing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a searcher for a specific rule variant
    #[must_use]
    pub fn with_rules(rules: Rules) -> Self {
        Self {
            rules,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Statistics of the most recent search
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Minimax value of `state` searched to `depth` inside `(alpha, beta)`.
    ///
    /// With the full window `(-INF, INF)` the result equals plain minimax.
    pub fn search(
        &mut self,
        state: &BoardState,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats = SearchStats::default();
        self.alpha_beta(state, depth, alpha, beta, maximizing)
    }

    /// Score of `state` searched to `depth`, positive when X is ahead.
    ///
    /// The sign does not depend on the side to move. A decided game returns
    /// `±WIN_SCORE` without searching.
    pub fn get_evaluation(&mut self, state: &BoardState, depth: u8) -> i32 {
        match state.winner() {
            Some(Mark::X) => return WIN_SCORE,
            Some(Mark::O) => return -WIN_SCORE,
            None => {}
        }

        let maximizing = state.to_move == Mark::X;
        let score = self.search(state, depth, -INF, INF, maximizing);
        debug!(
            depth,
            score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.beta_cutoffs,
            "evaluation finished"
        );
        score
    }

    /// Search every root move and report the best one.
    ///
    /// Ties keep the first move in generation order. The score equals
    /// `get_evaluation` at the same depth.
    pub fn best_move(&mut self, state: &BoardState, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();
        let maximizing = state.to_move == Mark::X;

        let mut best_move = None;
        let mut best_score = if maximizing { -INF } else { INF };

        if depth > 0 && !is_terminal(state) {
            self.stats.nodes += 1;
            let mut alpha = -INF;
            let mut beta = INF;

            for mv in valid_moves(state) {
                let Ok(outcome) = self.rules.apply_move_at(state, mv) else {
                    continue;
                };
                let score = self.alpha_beta(&outcome.state, depth - 1, alpha, beta, !maximizing);

                if maximizing {
                    if score > best_score {
                        best_score = score;
                        best_move = Some(mv);
                    }
                    alpha = alpha.max(score);
                } else {
                    if score < best_score {
                        best_score = score;
                        best_move = Some(mv);
                    }
                    beta = beta.min(score);
                }
            }
        }

        if best_move.is_none() {
            best_score = self.alpha_beta(state, 0, -INF, INF, maximizing);
        }

        debug!(
            depth,
            score = best_score,
            best = ?best_move,
            nodes = self.stats.nodes,
            "best move search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.stats.nodes,
            stats: self.stats.clone(),
        }
    }

    fn alpha_beta(
        &mut self,
        state: &BoardState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || is_terminal(state) {
            self.stats.leaves += 1;
            return evaluate(state);
        }

        let mut best = if maximizing { -INF } else { INF };
        let mut searched = 0u32;

        for mv in valid_moves(state) {
            let Ok(outcome) = self.rules.apply_move_at(state, mv) else {
                continue;
            };
            let score = self.alpha_beta(&outcome.state, depth - 1, alpha, beta, !maximizing);
            searched += 1;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                if searched == 1 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        // No legal move in an undecided position: score it statically
        if searched == 0 {
            self.stats.leaves += 1;
            return evaluate(state);
        }

        best
    }
}

/// Pruning-free minimax over the same tree as `Searcher::search`.
///
/// Exponentially slower; kept as the reference the pruned search must match.
pub fn minimax(state: &BoardState, depth: u8, maximizing: bool, rules: &Rules) -> i32 {
    if depth == 0 || is_terminal(state) {
        return evaluate(state);
    }

    let scores = valid_moves(state).filter_map(|mv| {
        rules
            .apply_move_at(state, mv)
            .ok()
            .map(|outcome| minimax(&outcome.state, depth - 1, !maximizing, rules))
    });
    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or_else(|| evaluate(state))
}
