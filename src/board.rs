use crate::{board_index, bonus_layout, Bonus, Coordinate, PlacedTile, BOARD_LEN};
use std::fmt;

/// One square of the board: the [bonus](Bonus) printed on it and the [tile](PlacedTile)
/// covering it, if any.
///
/// The bonus is never cleared when a tile is placed. Whether it still counts is decided by
/// comparing the board before and after a move in [score_word](crate::score_word).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Cell {
    tile: Option<PlacedTile>,
    bonus: Bonus,
}

impl Cell {
    /// # Returns
    ///
    /// The [tile](PlacedTile) covering the cell or [`None`] if the cell is empty.
    #[inline]
    pub fn tile(&self) -> Option<PlacedTile> {
        self.tile
    }

    /// # Returns
    ///
    /// The [bonus](Bonus) printed on the cell.
    #[inline]
    pub fn bonus(&self) -> Bonus {
        self.bonus
    }

    /// # Returns
    ///
    /// Whether a [tile](PlacedTile) covers the cell.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.tile.is_some()
    }
}

/// Describes the reason why a [tile](PlacedTile) could not be [placed](Board::place).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlaceError {
    /// Attempting to place a [tile](PlacedTile) outside the board.
    OutOfBounds,
    /// Attempting to place a [tile](PlacedTile) on a cell which is already covered.
    AlreadyOccupied,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::OutOfBounds => write!(f, "the cell is outside the board"),
            PlaceError::AlreadyOccupied => write!(f, "the cell already holds a tile"),
        }
    }
}

/// A [`BOARD_LEN`] by [`BOARD_LEN`] grid of [cells](Cell) with the fixed
/// [bonus layout](bonus_layout).
///
/// Tiles are only ever added with [`Board::place`]. Cloning gives an independent scratch board.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_LEN]; BOARD_LEN],
}

impl Board {
    /// # Returns
    ///
    /// An empty board with every [bonus](Bonus) of the [layout](bonus_layout) set.
    pub fn new() -> Board {
        let mut board = Board {
            cells: [[Cell::default(); BOARD_LEN]; BOARD_LEN],
        };
        for (coordinate, bonus) in bonus_layout() {
            board.set_bonus(coordinate, bonus);
        }
        board
    }

    /// Only called while the board is constructed. Coordinates outside the board are ignored.
    fn set_bonus(&mut self, coordinate: Coordinate, bonus: Bonus) {
        if let Some(cell) = self.cell_mut(coordinate) {
            cell.bonus = bonus;
        }
    }

    /// Covers the cell at `coordinate` with `tile`. The board is unchanged on error.
    ///
    /// # Errors
    ///
    /// * [`PlaceError::OutOfBounds`] When `coordinate` is outside the board.
    /// * [`PlaceError::AlreadyOccupied`] When the cell is already covered.
    pub fn place(&mut self, coordinate: Coordinate, tile: PlacedTile) -> Result<(), PlaceError> {
        let cell = self.cell_mut(coordinate).ok_or(PlaceError::OutOfBounds)?;
        if cell.is_occupied() {
            return Err(PlaceError::AlreadyOccupied);
        }
        cell.tile = Some(tile);
        Ok(())
    }

    /// # Returns
    ///
    /// The [cell](Cell) at `coordinate` or [`None`] when `coordinate` is outside the board.
    #[inline]
    pub fn cell(&self, coordinate: Coordinate) -> Option<&Cell> {
        board_index(coordinate).map(|(x, y)| &self.cells[x][y])
    }

    fn cell_mut(&mut self, coordinate: Coordinate) -> Option<&mut Cell> {
        board_index(coordinate).map(|(x, y)| &mut self.cells[x][y])
    }

    /// # Returns
    ///
    /// The [tile](PlacedTile) at `coordinate` or [`None`] when the cell is empty or
    /// outside the board.
    #[inline]
    pub fn tile(&self, coordinate: Coordinate) -> Option<PlacedTile> {
        self.cell(coordinate).and_then(Cell::tile)
    }

    /// # Returns
    ///
    /// Whether `coordinate` is inside the board and covered by a [tile](PlacedTile).
    #[inline]
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.tile(coordinate).is_some()
    }

    /// # Returns
    ///
    /// Whether no cell is covered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// # Returns
    ///
    /// The number of covered cells.
    pub fn len(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_occupied())
            .count()
    }

    /// # Returns
    ///
    /// Every covered cell in row then column order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coordinate, PlacedTile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(y, cell)| cell.tile.map(|tile| ((x as isize, y as isize), tile)))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
