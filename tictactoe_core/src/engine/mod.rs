use crate::logic::board::{Board, Move};
use serde::{Deserialize, Serialize};

pub mod config;
pub mod eval;
pub mod search;


pub use eval::{Role, ScoreTable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes: u32,
    pub cutoffs: u32,
    pub score: i32,
    pub time_ms: u64,
}

pub trait Evaluator {
    /// Score of a terminal position, or `None` while the game is still open.
    fn evaluate(&self, board: &Board, to_move: Role, depth: i32) -> Option<i32>;
}

pub trait Searcher {
    /// Picks a move for the side playing `to_move`. The board is used as
    /// scratch space and is restored before returning.
    fn search(&mut self, board: &mut Board, to_move: Role) -> Option<(Move, SearchStats)>;
}
