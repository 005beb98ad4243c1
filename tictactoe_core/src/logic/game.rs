use crate::engine::config::{ConfigError, EngineConfig};
use crate::engine::search::AlphaBetaEngine;
use crate::engine::{SearchStats, Searcher};
use crate::logic::board::{Board, BoardCoordinate, Move, WinningLine};
use crate::logic::player::{Player, PlayerRotation};
use crate::logic::rules::{validate_label, validate_move, validate_position, MoveError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ready,
    InProgress,
    Won(char), // Winner's label
    Tied,
}

/// One game of tic-tac-toe: the board, whose turn it is, and the automated
/// opponent.
///
/// Turn order is left to the caller: `apply_move` and `select_computer_move`
/// never rotate players, so the caller can inspect the outcome before calling
/// `toggle_player`.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: Arc<EngineConfig>,
    board: Board,
    rotation: PlayerRotation,
    winning_combination: Option<WinningLine>,
    searcher: AlphaBetaEngine,
    last_search: Option<SearchStats>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::build(Arc::new(EngineConfig::default()))
    }
}

impl GameEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(Arc::new(config)))
    }

    fn build(config: Arc<EngineConfig>) -> Self {
        Self {
            board: Board::new(config.board_size),
            rotation: PlayerRotation::new(config.players.clone(), config.human_first),
            winning_combination: None,
            searcher: AlphaBetaEngine::new(config.clone()),
            last_search: None,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        self.rotation.players()
    }

    #[must_use]
    pub const fn current_player(&self) -> &Player {
        self.rotation.current()
    }

    /// The line that ended the game, for highlighting.
    #[must_use]
    pub fn winning_combination(&self) -> Option<&[BoardCoordinate]> {
        self.winning_combination.as_deref()
    }

    #[must_use]
    pub const fn last_search_stats(&self) -> Option<SearchStats> {
        self.last_search
    }

    #[must_use]
    pub const fn has_winner(&self) -> bool {
        self.winning_combination.is_some()
    }

    #[must_use]
    pub fn is_tied(&self) -> bool {
        !self.has_winner() && self.board.is_full()
    }

    fn winning_label(&self) -> Option<char> {
        let first = *self.winning_combination.as_ref()?.first()?;
        self.board.label_at(first)
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winning_label()
            .and_then(|label| self.rotation.find(label))
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.winning_label().map_or_else(
            || {
                if self.board.is_full() {
                    GameStatus::Tied
                } else if self.board.is_blank() {
                    GameStatus::Ready
                } else {
                    GameStatus::InProgress
                }
            },
            GameStatus::Won,
        )
    }

    /// True when the game is undecided and the target cell is empty.
    /// Out-of-range coordinates are reported as invalid.
    #[must_use]
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        validate_move(&self.board, self.has_winner(), mv).is_ok()
    }

    /// Writes `mv` into the grid and updates the terminal state. Does not
    /// advance the turn.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        validate_move(&self.board, self.has_winner(), &mv)?;
        validate_label(&self.rotation, &mv)?;
        self.commit(mv);
        Ok(())
    }

    fn commit(&mut self, mv: Move) {
        self.board.place(mv);
        log::trace!("applied {mv:?}");
        self.update_terminal_state();
    }

    fn update_terminal_state(&mut self) {
        self.winning_combination = self.board.check_winner().map(<[BoardCoordinate]>::to_vec);
        if let Some(line) = &self.winning_combination {
            log::debug!("winning line {line:?}");
        }
    }

    pub const fn toggle_player(&mut self) {
        self.rotation.toggle();
    }

    /// Searches for the current player's best move and plays it.
    ///
    /// Candidates are tried in row-major order; among equally scored moves
    /// the first one wins.
    pub fn select_computer_move(&mut self) -> Result<Move, MoveError> {
        if self.has_winner() || self.board.is_full() {
            return Err(MoveError::GameOver);
        }

        let label = self.rotation.current().label;
        let role = self
            .searcher
            .scores()
            .role_of(label)
            .ok_or(MoveError::UnknownPlayer(label))?;

        let (mv, stats) = self
            .searcher
            .search(&mut self.board, role)
            .ok_or(MoveError::GameOver)?;
        self.last_search = Some(stats);
        self.commit(mv);
        Ok(mv)
    }

    /// Clears every cell and the terminal state. The turn order is kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.winning_combination = None;
        self.last_search = None;
        log::debug!("game reset");
    }

    /// Like [`reset`](Self::reset) but also chooses who moves first.
    pub fn reset_with(&mut self, human_first: bool) {
        self.rotation.reset_order(human_first);
        self.reset();
    }

    pub fn new_game_human_first(&mut self) {
        self.reset_with(true);
    }

    pub fn new_game_computer_first(&mut self) {
        self.reset_with(false);
    }

    /// Replaces the grid with an arbitrary position and recomputes the
    /// terminal state from it.
    pub fn load_board(&mut self, board: Board) -> Result<(), MoveError> {
        validate_position(&board, self.config.board_size, &self.rotation)?;
        self.board = board;
        self.last_search = None;
        self.update_terminal_state();
        Ok(())
    }
}
