//! Perfect maze generation.
//!
//! This module contains the randomized depth-first backtracker that carves a spanning tree of
//! passages into a grid of walls.

use log::trace;
use rand::Rng;

use crate::grid::{Cell, Coord, Dimensions, Direction, Grid};

/// Distance between neighbouring rooms on the carving lattice.
///
/// Rooms live on odd coordinates; the cell halfway between two rooms is the wall that gets
/// knocked down to join them.
pub const ROOM_STRIDE: usize = 2;

/// Top-left room, where carving starts.
pub const ORIGIN_ROOM: Coord = (1, 1);

/// Carves a perfect maze of the given shape.
///
/// Starting from [`ORIGIN_ROOM`], the carver keeps a stack of rooms. It repeatedly looks at the
/// room on top of the stack, gathers the neighbouring rooms that are still walled in, and either
/// backtracks when there are none or knocks down the wall towards one of them picked uniformly at
/// random. Once every room is reached, the entrance and the exit in the outer border are opened.
///
/// The resulting passages form a tree, so there is exactly one simple path between any two of
/// them. The same generator state always produces the same grid.
pub fn carve<R: Rng>(dimensions: Dimensions, rng: &mut R) -> Grid {
    let mut grid = Grid::filled(dimensions, Cell::Wall);
    grid.set(ORIGIN_ROOM, Cell::Passage);

    let mut stack = vec![ORIGIN_ROOM];
    while let Some(&room) = stack.last() {
        let candidates = walled_neighbours(&grid, room);

        if candidates.is_empty() {
            let _ = stack.pop();
            continue;
        }

        let pick = rng.random_range(0..candidates.len());
        if let Some(&(wall, next)) = candidates.get(pick) {
            grid.set(wall, Cell::Passage);
            grid.set(next, Cell::Passage);
            stack.push(next);
        }
    }

    grid.set(dimensions.entrance(), Cell::Passage);
    grid.set(dimensions.exit(), Cell::Passage);

    trace!(
        "carved {}x{} maze with {} passage cells",
        dimensions.width(),
        dimensions.height(),
        grid.passage_count()
    );

    grid
}

/// Collects the rooms around `room` that have not been carved yet.
///
/// Each entry pairs the wall cell in between with the room itself. Rooms on the outer border are
/// never candidates.
fn walled_neighbours(grid: &Grid, room: Coord) -> Vec<(Coord, Coord)> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| {
            let next = direction.step(room, ROOM_STRIDE)?;
            let inside = next.0 > 0
                && next.0 < grid.height() - 1
                && next.1 > 0
                && next.1 < grid.width() - 1;

            if !inside || grid.get(next) != Some(Cell::Wall) {
                return None;
            }

            let wall = direction.step(room, ROOM_STRIDE / 2)?;
            Some((wall, next))
        })
        .collect()
}
