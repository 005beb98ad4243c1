use crate::engine::config::EngineConfig;
use crate::engine::eval::{Role, ScoreTable};
use crate::engine::{Evaluator, SearchStats, Searcher};
use crate::logic::board::{Board, BoardCoordinate, Move};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

const TRACE_TARGET: &str = "tictactoe_core::search";

/// Exhaustive minimax with alpha-beta pruning over a shared board.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    config: Arc<EngineConfig>,
    scores: ScoreTable,
    nodes_searched: u32,
    cutoffs: u32,
}

impl AlphaBetaEngine {
    #[must_use]
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            scores: ScoreTable::from_players(&config.players),
            config,
            nodes_searched: 0,
            cutoffs: 0,
        }
    }

    #[must_use]
    pub const fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        if self.config.debug {
            log::debug!(target: TRACE_TARGET, "{args}");
        }
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        role: Role,
    ) -> i32 {
        self.nodes_searched = self.nodes_searched.saturating_add(1);

        if let Some(score) = self.scores.evaluate(board, role, depth) {
            self.trace(format_args!(
                "depth: {depth}, score: {score}, role: {role:?}"
            ));
            return score;
        }

        let depth = depth + 1;
        let label = self.scores.side(role).label;
        let mut best_score = role.worst_score();

        let candidates: Vec<BoardCoordinate> = board.empty_cells().collect();
        for coord in candidates {
            let previous = board.place(Move::played(coord.row, coord.col, label));
            self.trace(format_args!(
                "{role:?} -> row: {}, col: {}",
                coord.row, coord.col
            ));
            let score = self.alpha_beta(board, depth, alpha, beta, role.opposite());
            board.restore(previous);

            match role {
                Role::Maximizing => {
                    best_score = best_score.max(score);
                    alpha = alpha.max(score);
                }
                Role::Minimizing => {
                    best_score = best_score.min(score);
                    beta = beta.min(score);
                }
            }

            if beta <= alpha {
                self.cutoffs = self.cutoffs.saturating_add(1);
                return best_score;
            }
        }

        best_score
    }
}

impl Searcher for AlphaBetaEngine {
    fn search(&mut self, board: &mut Board, to_move: Role) -> Option<(Move, SearchStats)> {
        self.nodes_searched = 0;
        self.cutoffs = 0;
        let start = Instant::now();

        let label = self.scores.side(to_move).label;
        let mut best: Option<(Move, i32)> = None;

        // Each root candidate gets a fresh full window so its score is exact.
        let candidates: Vec<BoardCoordinate> = board.empty_cells().collect();
        for coord in candidates {
            let candidate = Move::played(coord.row, coord.col, label);
            let previous = board.place(candidate);
            self.trace(format_args!(
                "PARENT -> row: {}, col: {}",
                coord.row, coord.col
            ));
            let score = self.alpha_beta(board, 0, i32::MIN, i32::MAX, to_move.opposite());
            board.restore(previous);

            let improves = match best {
                None => true,
                Some((_, best_score)) => to_move.prefers(score, best_score),
            };
            if improves {
                best = Some((candidate, score));
            }
        }

        let elapsed = start.elapsed();
        best.map(|(mv, score)| {
            let stats = SearchStats {
                nodes: self.nodes_searched,
                cutoffs: self.cutoffs,
                score,
                time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            };
            log::debug!(
                "'{label}' plays ({}, {}) score {score}, {} nodes, {} cutoffs",
                mv.row,
                mv.col,
                stats.nodes,
                stats.cutoffs
            );
            (mv, stats)
        })
    }
}
