//! Terminal maze generator with an animated breadth-first solver.
//!
//! The engine lives in [`maze`]: a [`Maze`] carves a perfect maze with a randomized depth-first
//! backtracker ([`generator`]) and solves it with a breadth-first search whose exploration and
//! solution are replayed one step per tick ([`pathfinding`]). Pacing reads an injected
//! [`Clock`](clock::Clock), so the animation can be driven without waiting on real time.
//!
//! The [`App`] type wraps the engine in a ratatui front end.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
pub mod cli;
pub mod clock;
mod events;
pub mod generator;
pub mod grid;
pub mod logging;
pub mod markup;
pub mod maze;
pub mod pathfinding;
mod ui;

pub use app::App;
pub use maze::Maze;
