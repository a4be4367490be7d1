//! Pathfinding algorithm and animation module.
//!
//! This module contains the breadth-first search used to solve mazes and the animation state
//! machine that replays its exploration and its solution one step per tick.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use log::debug;

use crate::{
    clock::Clock,
    grid::{Cell, Coord, Direction, Grid},
};

/// Animation frame delay in milliseconds.
///
/// This constant is the minimum time between two animation steps. Ticks that arrive sooner are
/// accepted but leave the animation where it is.
pub const ANIMATION_FRAME_DELAY_MS: u64 = 20;

/// Result of a breadth-first search over the passages of a grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTrace {
    /// Cells in the order they were taken off the queue.
    ///
    /// Every passage reachable from the start appears at most once, and the list stops at the
    /// goal when the goal is reached.
    pub exploration: Vec<Coord>,
    /// Cells from the start to the goal, both included. Empty when the goal is unreachable.
    pub solution: Vec<Coord>,
}

/// Searches the passages of `grid` from `start` towards `goal`.
///
/// Neighbours are visited in [`Direction::ALL`] order and marked as visited when enqueued, so no
/// cell is queued twice. When the goal is dequeued the solution is rebuilt by following parent
/// links back to the start. A start that is not a passage yields an empty trace.
#[must_use]
pub fn breadth_first_search(grid: &Grid, start: Coord, goal: Coord) -> SearchTrace {
    let mut trace = SearchTrace::default();
    if grid.get(start) != Some(Cell::Passage) {
        return trace;
    }

    let mut visited = vec![false; grid.len()];
    let mut parents: Vec<Option<Coord>> = vec![None; grid.len()];
    if let Some(seen) = grid.index(start).and_then(|index| visited.get_mut(index)) {
        *seen = true;
    }

    let mut queue = VecDeque::from([start]);
    let mut found = false;
    while let Some(current) = queue.pop_front() {
        trace.exploration.push(current);

        if current == goal {
            found = true;
            break;
        }

        for direction in Direction::ALL {
            let Some(next) = direction.step(current, 1) else {
                continue;
            };
            if grid.get(next) != Some(Cell::Passage) {
                continue;
            }
            let Some(index) = grid.index(next) else {
                continue;
            };
            let Some(seen) = visited.get_mut(index) else {
                continue;
            };
            if *seen {
                continue;
            }

            *seen = true;
            if let Some(parent) = parents.get_mut(index) {
                *parent = Some(current);
            }
            queue.push_back(next);
        }
    }

    if found {
        trace.solution = walk_back(grid, &parents, start, goal);
    }

    trace
}

/// Rebuilds the path from `start` to `goal` out of the parent links left by the search.
fn walk_back(grid: &Grid, parents: &[Option<Coord>], start: Coord, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        let Some(parent) = grid
            .index(current)
            .and_then(|index| parents.get(index))
            .copied()
            .flatten()
        else {
            return Vec::new();
        };

        path.push(parent);
        current = parent;
    }

    path.reverse();
    path
}

/// Phase of the solving animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing is animating.
    #[default]
    Idle,
    /// The search frontier is being replayed cell by cell.
    Exploring,
    /// The exploration is shown in full and the solution is being traced.
    RevealingSolution,
}

/// Portion of the search that should currently be painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal<'path> {
    /// Explored cells to paint as visited.
    pub explored: &'path [Coord],
    /// Solution cells to paint as the path.
    pub solution: &'path [Coord],
}

/// Animation state manager for pathfinding visualization.
///
/// This structure manages the animation state including timing, the current step, and both paths
/// produced by the search. The search itself runs eagerly in [`start`](AnimationManager::start);
/// only its playback is paced.
#[derive(Debug)]
pub struct AnimationManager<C> {
    /// Source of time readings used for pacing.
    clock: C,
    /// Current phase of the animation.
    phase: Phase,
    /// Number of cells of the active path that have been revealed.
    step: usize,
    /// Timestamp of the last animation frame update.
    last_update_time: Instant,
    /// Cells explored by the last search, in queue order.
    exploration: Vec<Coord>,
    /// Solution found by the last search, from entrance to exit.
    solution: Vec<Coord>,
}

impl<C: Clock> AnimationManager<C> {
    /// Creates an idle animation manager paced by `clock`.
    pub fn new(clock: C) -> Self {
        let last_update_time = clock.now();

        Self {
            clock,
            phase: Phase::Idle,
            step: 0,
            last_update_time,
            exploration: Vec::new(),
            solution: Vec::new(),
        }
    }

    /// Drops both paths and returns to [`Phase::Idle`].
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.step = 0;
        self.exploration.clear();
        self.solution.clear();
        self.last_update_time = self.clock.now();
    }

    /// Solves `grid` from `start` to `goal` and begins the animation.
    ///
    /// Does nothing unless the manager is idle. If the goal cannot be reached, the manager ends up
    /// idle again with an empty solution and whatever was explored.
    pub fn start(&mut self, grid: &Grid, start: Coord, goal: Coord) {
        if self.phase != Phase::Idle {
            return;
        }

        self.reset();
        self.phase = Phase::Exploring;

        let trace = breadth_first_search(grid, start, goal);
        self.exploration = trace.exploration;
        self.solution = trace.solution;

        if self.solution.is_empty() {
            debug!(
                "no path from {start:?} to {goal:?} after exploring {} cells",
                self.exploration.len()
            );
            self.phase = Phase::Idle;
        } else {
            debug!(
                "explored {} cells, solution is {} cells long",
                self.exploration.len(),
                self.solution.len()
            );
        }
    }

    /// Advances the animation by at most one step.
    ///
    /// Ticks that arrive before [`ANIMATION_FRAME_DELAY_MS`] has passed since the last accepted one
    /// change nothing. Returns whether the animation is still in progress.
    pub fn update(&mut self) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }

        let now = self.clock.now();
        if now.saturating_duration_since(self.last_update_time)
            < Duration::from_millis(ANIMATION_FRAME_DELAY_MS)
        {
            return true;
        }
        self.last_update_time = now;

        match self.phase {
            Phase::Exploring if self.step < self.exploration.len() => {
                self.step += 1;
                true
            }
            Phase::Exploring => {
                self.phase = Phase::RevealingSolution;
                self.step = 0;
                true
            }
            Phase::RevealingSolution if self.step < self.solution.len() => {
                self.step += 1;
                true
            }
            Phase::RevealingSolution | Phase::Idle => {
                self.phase = Phase::Idle;
                false
            }
        }
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of cells revealed so far in the active path.
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Whether an animation is in progress.
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Every cell explored by the last search.
    pub fn exploration(&self) -> &[Coord] {
        &self.exploration
    }

    /// The full solution found by the last search.
    pub fn solution(&self) -> &[Coord] {
        &self.solution
    }

    /// The cells a renderer should paint right now.
    ///
    /// While exploring, only the first [`step`](AnimationManager::step) explored cells are shown.
    /// While revealing, the exploration is shown in full together with the first `step` solution
    /// cells. Once a successful animation is over both paths stay visible; otherwise nothing is.
    pub fn revealed(&self) -> Reveal<'_> {
        match self.phase {
            Phase::Exploring => Reveal {
                explored: self.exploration.get(..self.step).unwrap_or_default(),
                solution: &[],
            },
            Phase::RevealingSolution => Reveal {
                explored: &self.exploration,
                solution: self.solution.get(..self.step).unwrap_or_default(),
            },
            Phase::Idle if !self.solution.is_empty() => Reveal {
                explored: &self.exploration,
                solution: &self.solution,
            },
            Phase::Idle => Reveal {
                explored: &[],
                solution: &[],
            },
        }
    }
}
