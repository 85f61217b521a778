use crate::BOARD_LEN;

/// A tuple with two integer components for the row and the column of a cell on the board.
///
/// Components are signed so that a [move](crate::Move) running off any edge of the board
/// can still be described and then rejected.
///
/// # See Also
///
/// * [Move](crate::Move)
/// * [Board](crate::Board)
/// * [MoveError::OutOfBounds](crate::MoveError::OutOfBounds)
pub type Coordinate = (isize, isize);

/// Describes the axis along which the letters of a [move](crate::Move) are placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Direction {
    /// Letters are placed left to right where the column increases.
    Horizontal,
    /// Letters are placed top to bottom where the row increases.
    Vertical,
}

impl Direction {
    /// # Returns
    ///
    /// The change in row and column between two consecutive cells in this direction.
    #[inline]
    pub fn step(self) -> Coordinate {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    /// # Returns
    ///
    /// The other [direction](Direction).
    #[inline]
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Moves `steps` cells away from `coordinate` in this direction. Negative `steps` move
    /// backwards.
    ///
    /// # Returns
    ///
    /// The [coordinate](Coordinate) `steps` cells away.
    #[inline]
    pub fn advance(self, (x, y): Coordinate, steps: isize) -> Coordinate {
        let (dx, dy) = self.step();
        (x + dx * steps, y + dy * steps)
    }
}

/// # Returns
///
/// Whether both components of the [coordinate](Coordinate) are in the range
/// `0..`[BOARD_LEN].
#[inline]
pub fn is_inside_board(coordinate: Coordinate) -> bool {
    board_index(coordinate).is_some()
}

/// Converts a [coordinate](Coordinate) into row and column indexes of the board.
///
/// # Returns
///
/// [`None`] when the [coordinate](Coordinate) is not [inside the board](is_inside_board).
#[inline]
pub fn board_index((x, y): Coordinate) -> Option<(usize, usize)> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    (x < BOARD_LEN && y < BOARD_LEN).then_some((x, y))
}

/// Finds the adjacent [coordinates](Coordinate) from the argument [coordinate](Coordinate)
/// where adjacent is 4 directional and not diagonal. Some adjacent
/// [coordinates](Coordinate) may be outside the board.
///
/// # Arguments
///
/// * `x`: The row component
/// * `y`: The column component
///
/// # See Also
///
/// * [validate](crate::validate())
///
/// # Returns
///
/// An array of 4 [coordinates](Coordinate) in natural lexicographic order.
pub fn adjacent_coordinates((x, y): Coordinate) -> [Coordinate; 4] {
    [(x - 1, y), (x, y - 1), (x, y + 1), (x + 1, y)]
}
