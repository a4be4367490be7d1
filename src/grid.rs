//! Grid storage, cell kinds and dimension validation.
//!
//! This module contains the `Grid` type holding the maze cells, the `Dimensions` type that
//! guarantees a grid is shaped the way the generator expects, and the fixed four-way adjacency
//! policy shared by generation and solving.

use std::fmt;

use thiserror::Error;

/// Smallest accepted extent along either axis.
///
/// A three-by-three grid holds a single room surrounded by the border, which is the smallest
/// shape the generator can carve an entrance and an exit into.
pub const MIN_DIMENSION: usize = 3;

/// Position of a cell in the grid as a `(row, col)` pair.
pub type Coord = (usize, usize);

/// Kind of a single grid cell.
///
/// The distinction is kept abstract here; the character used to paint each variant is a concern
/// of whoever renders the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Solid cell that cannot be walked through.
    #[default]
    Wall,
    /// Open cell that belongs to the maze's passages.
    Passage,
}

impl Cell {
    /// Returns the character used when dumping a grid as plain text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Passage => ' ',
        }
    }
}

/// Grid axis, used to report which dimension failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal extent, counted in columns.
    Width,
    /// Vertical extent, counted in rows.
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => formatter.write_str("width"),
            Self::Height => formatter.write_str("height"),
        }
    }
}

/// Errors raised when a maze is requested with an unusable shape.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// The extent is below [`MIN_DIMENSION`].
    #[error("maze {axis} must be at least {min}, got {value}", min = MIN_DIMENSION)]
    TooSmall {
        /// Offending axis.
        axis: Axis,
        /// Rejected extent.
        value: usize,
    },
    /// The extent is even, which leaves no room for the outer border on one side.
    #[error("maze {axis} must be odd, got {value}")]
    EvenDimension {
        /// Offending axis.
        axis: Axis,
        /// Rejected extent.
        value: usize,
    },
}

/// Checks a single extent against the shape rules of the generator.
///
/// # Errors
///
/// - [`MazeError::TooSmall`] if `value` is below [`MIN_DIMENSION`]
/// - [`MazeError::EvenDimension`] if `value` is even
pub const fn validate_axis(axis: Axis, value: usize) -> Result<usize, MazeError> {
    if value < MIN_DIMENSION {
        Err(MazeError::TooSmall { axis, value })
    } else if value % 2 == 0 {
        Err(MazeError::EvenDimension { axis, value })
    } else {
        Ok(value)
    }
}

/// Validated maze extent.
///
/// Both extents are odd and at least [`MIN_DIMENSION`], so rooms sit at odd coordinates and the
/// walls between them at even ones, with a one cell border all around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
}

impl Dimensions {
    /// Validates a `width × height` pair.
    ///
    /// # Errors
    ///
    /// Returns the [`MazeError`] of the first axis that breaks the shape rules, width first.
    pub const fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if let Err(err) = validate_axis(Axis::Width, width) {
            return Err(err);
        }
        if let Err(err) = validate_axis(Axis::Height, height) {
            return Err(err);
        }

        Ok(Self { width, height })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Opening in the top border, right of the top-left corner.
    #[must_use]
    pub const fn entrance(self) -> Coord {
        (0, 1)
    }

    /// Opening in the bottom border, left of the bottom-right corner.
    #[must_use]
    pub const fn exit(self) -> Coord {
        (self.height - 1, self.width - 2)
    }
}

/// One of the four cardinal moves of the adjacency policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards row zero.
    North,
    /// Towards the last column.
    East,
    /// Towards the last row.
    South,
    /// Towards column zero.
    West,
}

impl Direction {
    /// Every direction, in the order neighbours are inspected by both generation and search.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Moves `distance` cells from `from`.
    ///
    /// Returns [`None`] when the move would leave the non-negative quadrant; the result is not
    /// checked against any grid.
    #[must_use]
    pub const fn step(self, from: Coord, distance: usize) -> Option<Coord> {
        let (row, col) = from;
        match self {
            Self::North => match row.checked_sub(distance) {
                Some(row) => Some((row, col)),
                None => None,
            },
            Self::East => match col.checked_add(distance) {
                Some(col) => Some((row, col)),
                None => None,
            },
            Self::South => match row.checked_add(distance) {
                Some(row) => Some((row, col)),
                None => None,
            },
            Self::West => match col.checked_sub(distance) {
                Some(col) => Some((row, col)),
                None => None,
            },
        }
    }
}

/// Row-major two dimensional array of [`Cell`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Cells, `width` per row.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid of the given shape with every cell set to `cell`.
    #[must_use]
    pub fn filled(dimensions: Dimensions, cell: Cell) -> Self {
        Self {
            width: dimensions.width(),
            height: dimensions.height(),
            cells: vec![cell; dimensions.width() * dimensions.height()],
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells at all, as before the first generation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `coord` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.height && coord.1 < self.width
    }

    /// Flat index of `coord` into the cell storage, if it lies inside the grid.
    pub(crate) const fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.0 * self.width + coord.1)
        } else {
            None
        }
    }

    /// Cell at `coord`, or [`None`] outside the grid.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Overwrites the cell at `coord`. Coordinates outside the grid are ignored.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        if let Some(slot) = self
            .index(coord)
            .and_then(|index| self.cells.get_mut(index))
        {
            *slot = cell;
        }
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of [`Cell::Passage`] cells.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Passage)
            .count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(formatter, "{}", cell.symbol())?;
            }
            writeln!(formatter)?;
        }

        Ok(())
    }
}
