//! Color-tag text markup.
//!
//! Status lines are written as plain strings with inline color switches, such as
//! `"/red/Q/white/ - /gray/Quit"`. A name enclosed in slashes changes the foreground color of the
//! text that follows it.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Maps a tag name to the color it selects.
fn tag_color(name: &str) -> Option<Color> {
    match name {
        "white" => Some(Color::White),
        "green" => Some(Color::Green),
        "gray" => Some(Color::DarkGray),
        "red" => Some(Color::Red),
        "blue" => Some(Color::Blue),
        _ => None,
    }
}

/// Parses a marked-up string into a styled [`Line`].
///
/// A `/name/` pair is always consumed as a tag; names without a color are dropped. A slash with
/// no closing slash after it is kept as literal text. Text before the first tag is unstyled.
#[must_use]
pub fn parse(input: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut style = Style::default();
    let mut text = String::new();
    let mut rest = input;

    while let Some(open) = rest.find('/') {
        let (before, tagged) = rest.split_at(open);
        text.push_str(before);

        let after_open = tagged.get(1..).unwrap_or_default();
        let Some(close) = after_open.find('/') else {
            text.push_str(tagged);
            rest = "";
            break;
        };

        if !text.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut text), style));
        }
        if let Some(color) = after_open.get(..close).and_then(tag_color) {
            style = Style::default().fg(color);
        }
        rest = after_open.get(close + 1..).unwrap_or_default();
    }

    text.push_str(rest);
    if !text.is_empty() {
        spans.push(Span::styled(text, style));
    }

    Line::from(spans)
}
