//! Screen Projector
//!
//! Produces the exact row of display cells for the fixed-width screen. Output is abstract:
//! renderers decide how a [`DisplayCell`] looks (see [`MarkerGlyphs`] for the classic
//! one-character-per-cell rendering).

use crate::layout::RenderLayout;
use crate::window::ScrollWindow;
use std::fmt;

/// One screen column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayCell {
    /// A rendered unit of content.
    Glyph(char),
    /// The blinking cursor.
    Cursor,
    /// Content is hidden before the window.
    TruncatedLeft,
    /// Content is hidden after the window.
    TruncatedRight,
    /// Past the end of content.
    Pad,
}

/// Characters used to draw the non-glyph cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerGlyphs {
    /// Cursor cell.
    pub cursor: char,
    /// Left truncation cell.
    pub truncated_left: char,
    /// Right truncation cell.
    pub truncated_right: char,
    /// Pad cell.
    pub pad: char,
}

impl Default for MarkerGlyphs {
    fn default() -> Self {
        Self {
            cursor: '_',
            truncated_left: '.',
            truncated_right: '.',
            pad: '$',
        }
    }
}

impl DisplayCell {
    /// Character drawn for this cell using `markers`.
    pub fn to_char(self, markers: &MarkerGlyphs) -> char {
        match self {
            DisplayCell::Glyph(ch) => ch,
            DisplayCell::Cursor => markers.cursor,
            DisplayCell::TruncatedLeft => markers.truncated_left,
            DisplayCell::TruncatedRight => markers.truncated_right,
            DisplayCell::Pad => markers.pad,
        }
    }
}

/// Screen contents for one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    /// Exactly `window_size` cells, left to right.
    pub cells: Vec<DisplayCell>,
    /// Screen column of the cursor.
    pub cursor_column: usize,
    /// Render position shown in column 0.
    pub window_start: usize,
}

impl ScreenSnapshot {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Draw the row as text using `markers`.
    pub fn to_text(&self, markers: &MarkerGlyphs) -> String {
        self.cells.iter().map(|cell| cell.to_char(markers)).collect()
    }
}

impl fmt::Display for ScreenSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&MarkerGlyphs::default()))
    }
}

/// Project the visible slice of `layout` onto screen cells.
///
/// Rules per column `s` (render index `i = start + s`), first match wins: cursor, pad past
/// content, left truncation at column 0 unless `i == 0`, right truncation at the last
/// column unless `i` is the last content unit, otherwise the glyph.
pub fn project(
    layout: &RenderLayout,
    window: &ScrollWindow,
    cursor_render_pos: usize,
) -> Vec<DisplayCell> {
    let units = layout.units();
    let render_len = units.len();
    let last_column = window.size() - 1;

    (0..window.size())
        .map(|column| {
            let i = window.start() + column;
            if i == cursor_render_pos {
                DisplayCell::Cursor
            } else if i >= render_len {
                DisplayCell::Pad
            } else if column == 0 && i != 0 {
                DisplayCell::TruncatedLeft
            } else if column == last_column && i != render_len - 1 {
                DisplayCell::TruncatedRight
            } else {
                DisplayCell::Glyph(units[i])
            }
        })
        .collect()
}

/// Build a [`ScreenSnapshot`] for the given state.
pub fn screen_snapshot(
    layout: &RenderLayout,
    window: &ScrollWindow,
    cursor_render_pos: usize,
) -> ScreenSnapshot {
    ScreenSnapshot {
        cells: project(layout, window, cursor_render_pos),
        cursor_column: window.screen_column(cursor_render_pos),
        window_start: window.start(),
    }
}
