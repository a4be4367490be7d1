//! Core application state and main loop for the terminal front end.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::{debug, info};
use ratatui::{backend::Backend, Terminal};

use crate::{cli::Cli, events, maze::Maze, ui};

/// Application state container for the maze viewer.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the maze and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// asks to quit and starts off `false`.
    pub(crate) exit: bool,
    /// Maze being displayed and solved.
    pub(crate) maze: Maze,
    /// Width used whenever a new maze is generated.
    pub(crate) width: usize,
    /// Height used whenever a new maze is generated.
    pub(crate) height: usize,
    /// How long to wait for input on each frame.
    ///
    /// This doubles as the frame pacing of the main loop, since every iteration draws once and
    /// polls once.
    pub(crate) frame_delay: Duration,
    /// Horizontal pan applied to the maze, in terminal columns.
    pub(crate) offset_x: i32,
    /// Vertical pan applied to the maze, in terminal rows.
    pub(crate) offset_y: i32,
}

impl App {
    /// Creates the application and carves its first maze.
    ///
    /// The maze uses the seed from the command line, or a random one when none was given.
    ///
    /// # Errors
    ///
    /// This function may return errors if the configured dimensions are not a valid maze shape.
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut maze = Maze::new();
        maze.generate(cli.width, cli.height, cli.seed.unwrap_or_else(rand::random))?;

        Ok(Self {
            exit: false,
            maze,
            width: cli.width,
            height: cli.height,
            frame_delay: Duration::from_millis(cli.frame_ms),
            offset_x: 0,
            offset_y: 0,
        })
    }

    /// Runs the main loop of the application.
    ///
    /// Each iteration draws a frame, handles at most one input event, and advances the solving
    /// animation. The loop continues until the exit flag is set, after which the function returns
    /// to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!(
            "starting with a {}x{} maze, seed {:?}",
            self.width,
            self.height,
            self.maze.seed()
        );

        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;

            if self.maze.is_solving() && !self.maze.solve_step() {
                debug!("solve animation finished");
            }
        }

        info!("exiting");

        Ok(())
    }

    /// Replaces the maze with a freshly seeded one of the configured size.
    ///
    /// # Errors
    ///
    /// This function may return errors if the configured dimensions are not a valid maze shape.
    pub(crate) fn regenerate(&mut self) -> Result<()> {
        self.maze.generate(self.width, self.height, rand::random())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::Phase;

    fn create_test_cli() -> Cli {
        Cli {
            width: 11,
            height: 7,
            seed: Some(5),
            frame_ms: 1,
            log_file: None,
        }
    }

    #[test]
    fn test_new_uses_cli_settings() {
        let app = App::new(&create_test_cli()).expect("test settings are valid");

        assert!(!app.exit);
        assert_eq!(app.maze.width(), 11);
        assert_eq!(app.maze.height(), 7);
        assert_eq!(app.maze.seed(), Some(5));
        assert_eq!(app.frame_delay, Duration::from_millis(1));
        assert_eq!((app.offset_x, app.offset_y), (0, 0));
    }

    #[test]
    fn test_new_draws_a_seed_when_missing() {
        let cli = Cli {
            seed: None,
            ..create_test_cli()
        };
        let app = App::new(&cli).expect("test settings are valid");

        assert!(app.maze.seed().is_some());
    }

    #[test]
    fn test_new_rejects_invalid_dimensions() {
        let cli = Cli {
            width: 10,
            ..create_test_cli()
        };

        assert!(App::new(&cli).is_err());
    }

    #[test]
    fn test_regenerate_resets_solving() {
        let mut app = App::new(&create_test_cli()).expect("test settings are valid");
        app.maze.start_solving();
        assert!(app.maze.is_solving());

        app.regenerate().expect("regeneration should succeed");

        assert_eq!(app.maze.phase(), Phase::Idle);
        assert!(app.maze.exploration_path().is_empty());
        assert_eq!(app.maze.width(), 11);
    }
}
