use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardCoordinate {
    pub row: usize,
    pub col: usize,
}

impl BoardCoordinate {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A cell record. `label == None` marks a cell nobody has played yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub label: Option<char>,
}

impl Move {
    #[must_use]
    pub const fn unplayed(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            label: None,
        }
    }

    #[must_use]
    pub const fn played(row: usize, col: usize, label: char) -> Self {
        Self {
            row,
            col,
            label: Some(label),
        }
    }

    #[must_use]
    pub const fn coordinate(&self) -> BoardCoordinate {
        BoardCoordinate::new(self.row, self.col)
    }

    #[must_use]
    pub const fn is_played(&self) -> bool {
        self.label.is_some()
    }
}

pub type WinningLine = Vec<BoardCoordinate>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("board text has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Square grid of cell records, stored row-major.
///
/// The winning lines depend only on the size, so they are computed once in
/// [`Board::new`] and survive [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Move>,
    winning_lines: Vec<WinningLine>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl Board {
    #[must_use]
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Move::unplayed(row, col)))
            .collect();
        Self {
            size,
            cells,
            winning_lines: Self::compute_winning_lines(size),
        }
    }

    /// Parses one string per row. `.`, `_` and space are empty cells, any
    /// other character is taken as a player label.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParseBoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(ParseBoardError::Empty);
        }

        let mut board = Self::new(size);
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.as_ref().chars().collect();
            if symbols.len() != size {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    expected: size,
                    found: symbols.len(),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                if !is_empty_symbol(symbol) {
                    board.place(Move::played(row, col, symbol));
                }
            }
        }
        Ok(board)
    }

    // Rows first, then columns, then the main and anti diagonal. check_winner
    // relies on this order for its tie-break.
    fn compute_winning_lines(size: usize) -> Vec<WinningLine> {
        let mut lines: Vec<WinningLine> = Vec::with_capacity(2 * size + 2);
        lines.extend(
            (0..size).map(|row| (0..size).map(|col| BoardCoordinate::new(row, col)).collect()),
        );
        lines.extend(
            (0..size).map(|col| (0..size).map(|row| BoardCoordinate::new(row, col)).collect()),
        );
        lines.push((0..size).map(|i| BoardCoordinate::new(i, i)).collect());
        lines.push(
            (0..size)
                .map(|i| BoardCoordinate::new(i, size - 1 - i))
                .collect(),
        );
        lines
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn cells(&self) -> &[Move] {
        &self.cells
    }

    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Non-panicking lookup.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Move> {
        if self.contains(row, col) {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is outside the {size}x{size} board",
            size = self.size
        );
        row * self.size + col
    }

    /// # Panics
    /// If the coordinate is outside the board.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn label_at(&self, coord: BoardCoordinate) -> Option<char> {
        self.cells[self.index_of(coord.row, coord.col)].label
    }

    /// # Panics
    /// If the coordinate is outside the board.
    #[must_use]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.label_at(BoardCoordinate::new(row, col)).is_none()
    }

    #[must_use]
    pub fn winning_combinations(&self) -> &[WinningLine] {
        &self.winning_lines
    }

    /// First line whose cells all carry the same label.
    #[must_use]
    pub fn check_winner(&self) -> Option<&[BoardCoordinate]> {
        self.winning_lines
            .iter()
            .find(|line| self.is_complete(line))
            .map(Vec::as_slice)
    }

    fn is_complete(&self, line: &[BoardCoordinate]) -> bool {
        let mut labels = line.iter().map(|&coord| self.label_at(coord));
        match labels.next() {
            Some(Some(first)) => labels.all(|label| label == Some(first)),
            _ => false,
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Move::is_played)
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.cells.iter().any(Move::is_played)
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = BoardCoordinate> + '_ {
        self.cells
            .iter()
            .filter(|cell| !cell.is_played())
            .map(Move::coordinate)
    }

    /// Writes `mv` over the record at its coordinate and hands back the
    /// record it replaced, so the caller can [`restore`](Self::restore) it.
    ///
    /// # Panics
    /// If the coordinate is outside the board.
    #[allow(clippy::indexing_slicing)]
    pub fn place(&mut self, mv: Move) -> Move {
        let idx = self.index_of(mv.row, mv.col);
        std::mem::replace(&mut self.cells[idx], mv)
    }

    pub fn restore(&mut self, previous: Move) {
        self.place(previous);
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Move::unplayed(cell.row, cell.col);
        }
    }
}

const fn is_empty_symbol(symbol: char) -> bool {
    matches!(symbol, '.' | '_' | ' ')
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Rows separated by `/` or newlines, e.g. `"XOX/.O./OXX"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.label.unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}
