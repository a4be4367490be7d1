//! Maze session state.
//!
//! This module contains the `Maze` structure, which owns the grid, the seed it was carved from,
//! and the solving animation. It is the single entry point the terminal front end talks to.

use log::{debug, trace};
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    clock::{Clock, SystemClock},
    generator,
    grid::{Cell, Coord, Dimensions, Grid, MazeError},
    pathfinding::{AnimationManager, Phase, Reveal},
};

/// A generated maze together with its solving animation.
///
/// Regenerating discards any animation in progress, so the grid and the paths painted on top of
/// it always belong to the same maze.
#[derive(Debug)]
pub struct Maze<C: Clock = SystemClock> {
    /// Cells of the current maze. Empty until the first generation.
    grid: Grid,
    /// Shape of the current maze, if one has been generated.
    dimensions: Option<Dimensions>,
    /// Seed the current maze was carved from.
    seed: Option<u64>,
    /// Solving animation for the current maze.
    animation: AnimationManager<C>,
}

impl Default for Maze {
    fn default() -> Self {
        Self::new()
    }
}

impl Maze {
    /// Creates an empty maze paced by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Maze<C> {
    /// Creates an empty maze whose animation is paced by `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            grid: Grid::default(),
            dimensions: None,
            seed: None,
            animation: AnimationManager::new(clock),
        }
    }

    /// Carves a new `width × height` maze from `seed`.
    ///
    /// Any solving animation is discarded. The same seed and shape always produce the same grid.
    ///
    /// # Errors
    ///
    /// Returns a [`MazeError`] if either extent is below three or even. The current maze is left
    /// untouched in that case.
    pub fn generate(&mut self, width: usize, height: usize, seed: u64) -> Result<(), MazeError> {
        let dimensions = Dimensions::new(width, height)?;
        let mut rng = StdRng::seed_from_u64(seed);

        self.animation.reset();
        self.grid = generator::carve(dimensions, &mut rng);
        self.dimensions = Some(dimensions);
        self.seed = Some(seed);

        debug!("generated {width}x{height} maze from seed {seed}");

        Ok(())
    }

    /// Starts the solving animation from the entrance to the exit.
    ///
    /// Does nothing while an animation is already running or before a maze has been generated.
    pub fn start_solving(&mut self) {
        if let Some(dimensions) = self.dimensions {
            self.animation
                .start(&self.grid, dimensions.entrance(), dimensions.exit());
        }
    }

    /// Advances the solving animation by at most one step.
    ///
    /// Returns whether the animation is still in progress.
    pub fn solve_step(&mut self) -> bool {
        self.animation.update()
    }

    /// Whether a solving animation is in progress.
    pub fn is_solving(&self) -> bool {
        self.animation.is_animating()
    }

    /// Current phase of the solving animation.
    pub const fn phase(&self) -> Phase {
        self.animation.phase()
    }

    /// Number of cells revealed so far in the path being animated.
    pub const fn solving_step(&self) -> usize {
        self.animation.step()
    }

    /// Cells of the current maze.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every cell explored by the last solve, in the order the search reached them.
    pub fn exploration_path(&self) -> &[Coord] {
        self.animation.exploration()
    }

    /// The path from entrance to exit found by the last solve.
    pub fn solution_path(&self) -> &[Coord] {
        self.animation.solution()
    }

    /// The explored and solution cells that should be painted right now.
    pub fn revealed(&self) -> Reveal<'_> {
        self.animation.revealed()
    }

    /// Number of columns; zero before the first generation.
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows; zero before the first generation.
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Seed of the current maze.
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Entrance of the current maze.
    pub fn entrance(&self) -> Option<Coord> {
        self.dimensions.map(Dimensions::entrance)
    }

    /// Exit of the current maze.
    pub fn exit(&self) -> Option<Coord> {
        self.dimensions.map(Dimensions::exit)
    }

    /// Overwrites a single cell. Coordinates outside the grid are ignored.
    pub fn update_cell(&mut self, row: usize, col: usize, cell: Cell) {
        if self.grid.contains((row, col)) {
            self.grid.set((row, col), cell);
        } else {
            trace!("ignoring update of out-of-range cell ({row}, {col})");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{clock::ManualClock, pathfinding::ANIMATION_FRAME_DELAY_MS};

    fn manual_maze() -> (Maze<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Maze::with_clock(clock.clone()), clock)
    }

    /// Ticks the animation until it stops, returning the number of accepted ticks.
    fn drain(maze: &mut Maze<ManualClock>, clock: &ManualClock) -> usize {
        let mut ticks = 0;
        loop {
            clock.advance(Duration::from_millis(ANIMATION_FRAME_DELAY_MS));
            ticks += 1;
            if !maze.solve_step() {
                return ticks;
            }
            assert!(ticks < 10_000, "animation never finished");
        }
    }

    fn is_chain(path: &[Coord]) -> bool {
        path.windows(2).all(|pair| match pair {
            [(row_a, col_a), (row_b, col_b)] => row_a.abs_diff(*row_b) + col_a.abs_diff(*col_b) == 1,
            _ => false,
        })
    }

    #[test_log::test]
    fn test_small_maze_scenario() {
        let (mut maze, clock) = manual_maze();
        maze.generate(5, 5, 1).expect("5x5 is a valid maze");
        maze.start_solving();

        assert!(maze.is_solving());
        let _ = drain(&mut maze, &clock);

        assert!(!maze.is_solving());
        assert_eq!(maze.solution_path().first(), Some(&(0, 1)));
        assert_eq!(maze.solution_path().last(), Some(&(4, 3)));
    }

    #[test_log::test]
    fn test_solution_is_a_chain_through_explored_cells() {
        let (mut maze, _clock) = manual_maze();
        maze.generate(41, 21, 2024).expect("41x21 is a valid maze");
        maze.start_solving();

        let solution = maze.solution_path();
        let exploration = maze.exploration_path();

        assert_eq!(solution.first(), Some(&(0, 1)));
        assert_eq!(solution.last(), Some(&(20, 39)));
        assert!(is_chain(solution), "consecutive cells must be adjacent");
        assert!(solution.iter().all(|cell| exploration.contains(cell)));
        assert!(exploration.len() <= maze.grid().passage_count());
    }

    #[test]
    fn test_exploration_has_no_duplicates() {
        let (mut maze, _clock) = manual_maze();
        maze.generate(31, 15, 5).expect("31x15 is a valid maze");
        maze.start_solving();

        let mut cells = maze.exploration_path().to_vec();
        let len = cells.len();
        cells.sort_unstable();
        cells.dedup();

        assert_eq!(cells.len(), len);
    }

    #[test]
    fn test_phases_progress_once() {
        let (mut maze, clock) = manual_maze();
        maze.generate(11, 9, 8).expect("11x9 is a valid maze");
        maze.start_solving();

        let mut phases = vec![maze.phase()];
        let mut last_step = maze.solving_step();
        loop {
            clock.advance(Duration::from_millis(ANIMATION_FRAME_DELAY_MS));
            let running = maze.solve_step();
            let phase = maze.phase();
            let limit = match phase {
                Phase::Exploring => maze.exploration_path().len(),
                Phase::RevealingSolution | Phase::Idle => maze.solution_path().len(),
            };

            assert!(maze.solving_step() <= limit, "step must stay within the path");
            if phases.last() == Some(&phase) {
                assert!(maze.solving_step() >= last_step, "step must not go backwards");
            } else {
                phases.push(phase);
            }
            last_step = maze.solving_step();

            if !running {
                break;
            }
        }

        assert_eq!(
            phases,
            vec![Phase::Exploring, Phase::RevealingSolution, Phase::Idle]
        );
    }

    #[test]
    fn test_drain_takes_one_tick_per_cell() {
        let (mut maze, clock) = manual_maze();
        maze.generate(9, 7, 42).expect("9x7 is a valid maze");
        maze.start_solving();

        let ticks = drain(&mut maze, &clock);

        assert_eq!(
            ticks,
            maze.exploration_path().len() + maze.solution_path().len() + 2
        );
    }

    #[test]
    fn test_generate_during_solve_resets_state() {
        let (mut maze, clock) = manual_maze();
        maze.generate(21, 11, 3).expect("21x11 is a valid maze");
        maze.start_solving();
        for _ in 0..5 {
            clock.advance(Duration::from_millis(ANIMATION_FRAME_DELAY_MS));
            let _ = maze.solve_step();
        }

        maze.generate(21, 11, 4).expect("21x11 is a valid maze");

        assert!(!maze.is_solving());
        assert_eq!(maze.phase(), Phase::Idle);
        assert_eq!(maze.solving_step(), 0);
        assert!(maze.exploration_path().is_empty());
        assert!(maze.solution_path().is_empty());
        assert!(!maze.solve_step());
    }

    #[test]
    fn test_generate_while_revealing_solution_resets_state() {
        let (mut maze, clock) = manual_maze();
        maze.generate(5, 5, 1).expect("5x5 is a valid maze");
        maze.start_solving();
        for _ in 0..=maze.exploration_path().len() + 1 {
            clock.advance(Duration::from_millis(ANIMATION_FRAME_DELAY_MS));
            assert!(maze.solve_step());
        }
        assert_eq!(maze.phase(), Phase::RevealingSolution);
        assert_eq!(maze.solving_step(), 1);

        maze.start_solving();
        assert_eq!(maze.phase(), Phase::RevealingSolution);
        assert_eq!(maze.solving_step(), 1);

        maze.generate(5, 5, 2).expect("5x5 is a valid maze");

        assert_eq!(maze.phase(), Phase::Idle);
        assert_eq!(maze.solving_step(), 0);
        assert!(maze.exploration_path().is_empty());
        assert!(maze.solution_path().is_empty());
        assert!(maze.revealed().explored.is_empty());
        assert!(maze.revealed().solution.is_empty());
    }

    #[test]
    fn test_invalid_dimensions_keep_previous_maze() {
        let (mut maze, _clock) = manual_maze();
        maze.generate(7, 7, 9).expect("7x7 is a valid maze");
        let before = maze.grid().clone();

        assert!(maze.generate(8, 7, 10).is_err());
        assert!(maze.generate(7, 1, 10).is_err());

        assert_eq!(maze.grid(), &before);
        assert_eq!(maze.seed(), Some(9));
        assert_eq!(maze.width(), 7);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let (mut first, _) = manual_maze();
        let (mut second, _) = manual_maze();
        first.generate(25, 13, 77).expect("25x13 is a valid maze");
        second.generate(25, 13, 77).expect("25x13 is a valid maze");

        assert_eq!(first.grid(), second.grid());
    }

    #[test]
    fn test_update_cell_out_of_range_is_ignored() {
        let (mut maze, _clock) = manual_maze();
        maze.generate(5, 5, 1).expect("5x5 is a valid maze");
        let before = maze.grid().clone();

        maze.update_cell(5, 2, Cell::Wall);
        maze.update_cell(2, 5, Cell::Passage);
        maze.update_cell(usize::MAX, 0, Cell::Passage);

        assert_eq!(maze.grid(), &before);
    }

    #[test]
    fn test_update_cell_in_range() {
        let (mut maze, _clock) = manual_maze();
        maze.generate(5, 5, 1).expect("5x5 is a valid maze");

        maze.update_cell(2, 2, Cell::Passage);

        assert_eq!(maze.grid().get((2, 2)), Some(Cell::Passage));
    }

    #[test]
    fn test_walled_entrance_has_no_solution() {
        let (mut maze, _clock) = manual_maze();
        maze.generate(9, 9, 6).expect("9x9 is a valid maze");
        maze.update_cell(0, 1, Cell::Wall);

        maze.start_solving();

        assert!(!maze.is_solving());
        assert!(maze.solution_path().is_empty());
    }

    #[test]
    fn test_solving_before_generation_is_a_no_op() {
        let (mut maze, _clock) = manual_maze();

        maze.start_solving();

        assert!(!maze.is_solving());
        assert_eq!(maze.width(), 0);
        assert_eq!(maze.entrance(), None);
    }
}
