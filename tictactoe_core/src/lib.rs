//! Tic-tac-toe rules and a minimax opponent with alpha-beta pruning.
//!
//! `logic` holds the board, players, move validation and the [`GameEngine`]
//! that a presentation layer drives. `engine` holds the search and its
//! configuration.

pub mod engine;
pub mod logic;

pub use engine::config::{ConfigError, EngineConfig};
pub use engine::SearchStats;
pub use logic::board::{Board, BoardCoordinate, Move};
pub use logic::game::{GameEngine, GameStatus};
pub use logic::player::Player;
pub use logic::rules::MoveError;
