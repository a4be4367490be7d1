//! User interface rendering for the maze screen.

use color_eyre::eyre::Result;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Clear, Widget},
    Frame,
};

use crate::{clock::Clock, markup, maze::Maze, App};

/// Title shown on the top row.
const TITLE: &str = "/gray/Maze Generator/white/";

/// Key reference shown on the bottom row.
const KEY_HINTS: &str = concat!(
    "/red/\u{2191}\u{2192}\u{2193}\u{2190}/white/ - /gray/Move  ",
    "/red/S/white/ - /gray/Solve  ",
    "/red/R/white/ - /gray/Regenerate  ",
    "/red/Q/white/ - /gray/Quit",
);

/// Updates the application UI based on the persistent state.
///
/// This function clears the frame and paints the maze, centered and shifted by the current pan,
/// followed by the title, the seed, the key reference and, when the maze has been panned out of
/// view, arrows pointing back towards it.
///
/// # Errors
///
/// This function may return errors from coordinate conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let area = frame.area();
    let origin = maze_origin(area, &app.maze, (app.offset_x, app.offset_y))?;
    frame.render_widget(MazeView::new(&app.maze, origin), area);

    if let Some(row) = row_area(area, 0) {
        frame.render_widget(markup::parse(TITLE).centered(), row);
    }
    if let Some(row) = area.height.checked_sub(3).and_then(|row| row_area(area, row)) {
        let seed = format!(
            "/green/seed/white/: /white/[/gray/{}/white/]",
            format_seed(app.maze.seed())
        );
        frame.render_widget(markup::parse(&seed).centered(), row);
    }
    if let Some(row) = area.height.checked_sub(1).and_then(|row| row_area(area, row)) {
        frame.render_widget(markup::parse(KEY_HINTS).centered(), row);
    }

    let size = (
        i32::try_from(app.maze.width())?,
        i32::try_from(app.maze.height())?,
    );
    let buffer = frame.buffer_mut();
    // Arrows point towards the maze.
    for hint in offscreen_hints(area, origin, size) {
        if let Some(cell) = buffer.cell_mut(Position::new(area.x + hint.x, area.y + hint.y)) {
            let _ = cell
                .set_symbol(hint.symbol)
                .set_style(Style::default().fg(Color::Red));
        }
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Single row of `area`, if `row` lies inside it.
fn row_area(area: Rect, row: u16) -> Option<Rect> {
    (row < area.height).then(|| Rect::new(area.x, area.y + row, area.width, 1))
}

/// Formats a seed as four groups of hexadecimal digits.
pub(crate) fn format_seed(seed: Option<u64>) -> String {
    seed.map_or_else(
        || "----".to_owned(),
        |seed| {
            format!(
                "{:04X}-{:04X}-{:04X}-{:04X}",
                seed >> 48,
                (seed >> 32) & 0xFFFF,
                (seed >> 16) & 0xFFFF,
                seed & 0xFFFF
            )
        },
    )
}

/// Position of the maze's top-left cell relative to the top-left corner of `area`.
///
/// The maze is centered in the area and then shifted by `offset`, so the result may lie outside
/// the area or be negative.
///
/// # Errors
///
/// This function may return errors if the maze is too large to be placed on a terminal.
pub(crate) fn maze_origin<C: Clock>(
    area: Rect,
    maze: &Maze<C>,
    offset: (i32, i32),
) -> Result<(i32, i32)> {
    let x = rounded_div::i32(area.width.into(), 2)
        - rounded_div::i32(i32::try_from(maze.width())?, 2)
        + offset.0;
    let y = rounded_div::i32(area.height.into(), 2)
        - rounded_div::i32(i32::try_from(maze.height())?, 2)
        + offset.1;

    Ok((x, y))
}

/// How a grid cell should be painted on top of its wall or passage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    /// Reached by the search.
    Explored,
    /// Part of the solution.
    Solution,
}

/// Widget painting a maze and its revealed search state.
pub(crate) struct MazeView<'maze, C: Clock> {
    /// Maze to paint.
    maze: &'maze Maze<C>,
    /// Top-left cell of the maze relative to the render area, as given by [`maze_origin`].
    origin: (i32, i32),
}

impl<'maze, C: Clock> MazeView<'maze, C> {
    /// Creates a view of `maze` with its top-left cell at `origin`.
    pub(crate) const fn new(maze: &'maze Maze<C>, origin: (i32, i32)) -> Self {
        Self { maze, origin }
    }

    /// Marks for every grid cell, indexed like the grid's storage.
    fn marks(&self) -> Vec<Option<Mark>> {
        let grid = self.maze.grid();
        let reveal = self.maze.revealed();
        let mut marks = vec![None; grid.len()];

        for (cells, mark) in [
            (reveal.explored, Mark::Explored),
            (reveal.solution, Mark::Solution),
        ] {
            for &coord in cells {
                if let Some(slot) = grid.index(coord).and_then(|index| marks.get_mut(index)) {
                    *slot = Some(mark);
                }
            }
        }

        marks
    }

    /// Screen position of grid cell `(row, col)`, if it falls inside `area`.
    fn screen_position(&self, area: Rect, row: usize, col: usize) -> Option<Position> {
        let x = i32::from(area.x) + self.origin.0 + i32::try_from(col).ok()?;
        let y = i32::from(area.y) + self.origin.1 + i32::try_from(row).ok()?;
        let position = Position::new(u16::try_from(x).ok()?, u16::try_from(y).ok()?);

        area.contains(position).then_some(position)
    }
}

impl<C: Clock> Widget for MazeView<'_, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let marks = self.marks();
        let mut marks = marks.iter();

        for (row, cells) in self.maze.grid().rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let mark = marks.next().copied().flatten();
                let Some(position) = self.screen_position(area, row, col) else {
                    continue;
                };

                let (symbol, style) = match mark {
                    Some(Mark::Solution) => ('.', Style::default().fg(Color::Green)),
                    Some(Mark::Explored) => ('*', Style::default().fg(Color::DarkGray)),
                    None => (cell.symbol(), Style::default()),
                };
                if let Some(target) = buf.cell_mut(position) {
                    let _ = target.set_char(symbol).set_style(style);
                }
            }
        }
    }
}

/// Arrow drawn on the edge of the screen towards a maze that is out of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Hint {
    /// Column relative to the render area.
    pub(crate) x: u16,
    /// Row relative to the render area.
    pub(crate) y: u16,
    /// Arrow glyph.
    pub(crate) symbol: &'static str,
}

/// Computes the arrows pointing towards a maze lying completely outside `area`.
///
/// Edge arrows follow the maze's center along the edge; corner arrows are added when the maze is
/// off screen along both axes.
pub(crate) fn offscreen_hints(area: Rect, origin: (i32, i32), size: (i32, i32)) -> Vec<Hint> {
    let mut hints = Vec::new();
    if area.is_empty() {
        return hints;
    }

    let last_x = i32::from(area.width) - 1;
    let last_y = i32::from(area.height) - 1;
    let below = origin.1 > last_y;
    let above = origin.1 + size.1 - 1 < 0;
    let right = origin.0 > last_x;
    let left = origin.0 + size.0 - 1 < 0;

    let center_x = (origin.0 + size.0 / 2).clamp(0, last_x);
    let center_y = (origin.1 + size.1 / 2).clamp(0, last_y);

    // Each arrow sits on the edge nearest the maze and points towards it.
    let candidates = [
        (below, center_x, last_y, "\u{2193}"),
        (above, center_x, 0, "\u{2191}"),
        (right, last_x, center_y, "\u{2192}"),
        (left, 0, center_y, "\u{2190}"),
        (below && right, last_x, last_y, "\u{2198}"),
        (below && left, 0, last_y, "\u{2199}"),
        (above && right, last_x, 0, "\u{2197}"),
        (above && left, 0, 0, "\u{2196}"),
    ];
    for (active, x, y, symbol) in candidates {
        if !active {
            continue;
        }
        if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
            hints.push(Hint { x, y, symbol });
        }
    }

    hints
}
