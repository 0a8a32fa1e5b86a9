//! Window Scroller
//!
//! Keeps a fixed-width window `[start, end)` over the render sequence positioned so the
//! cursor stays visible, moving it only when the cursor reaches an edge.
//!
//! When the window has to move it keeps one unit of context beyond the cursor where
//! content exists. That context cell is what lets the screen projector tell "hidden content
//! continues here" apart from "this is the real edge" without looking past the window:
//!
//! - Left: `start = cursor - 1`, or `0` when the cursor is at render position 0.
//! - Right: `end = cursor + 2`, or `cursor + 1` when the cursor is parked at the
//!   end-of-content slot (nothing exists after it).

/// Smallest usable window width.
pub const MIN_WINDOW_SIZE: usize = 2;

/// How a window update moved the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Cursor was strictly inside the window.
    Unchanged,
    /// Cursor was at or before `start`.
    ScrolledLeft,
    /// Cursor was at or past `end - 1`.
    ScrolledRight,
}

/// Half-open window `[start, start + size)` over the render sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    start: usize,
    size: usize,
}

impl ScrollWindow {
    /// Create a window of `size` cells anchored at render position 0.
    ///
    /// `size` below [`MIN_WINDOW_SIZE`] is a contract violation.
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= MIN_WINDOW_SIZE, "window size {size} < {MIN_WINDOW_SIZE}");
        Self { start: 0, size }
    }

    /// First visible render position.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last visible render position.
    pub fn end(&self) -> usize {
        self.start + self.size
    }

    /// Window width in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `render_pos` is inside the window.
    pub fn contains(&self, render_pos: usize) -> bool {
        (self.start..self.end()).contains(&render_pos)
    }

    /// Screen column of `render_pos`, which must be inside the window.
    pub fn screen_column(&self, render_pos: usize) -> usize {
        debug_assert!(self.contains(render_pos));
        render_pos - self.start
    }

    /// Reposition the window for a cursor at `cursor_render_pos` in a render sequence of
    /// `render_len` units.
    pub fn update(&mut self, cursor_render_pos: usize, render_len: usize) -> ScrollOutcome {
        let outcome = if cursor_render_pos <= self.start {
            self.start = cursor_render_pos.saturating_sub(1);
            ScrollOutcome::ScrolledLeft
        } else if cursor_render_pos >= self.end() - 1 {
            let end = if cursor_render_pos == render_len {
                cursor_render_pos + 1
            } else {
                cursor_render_pos + 2
            };
            // end >= size whenever this branch is reachable from a valid window.
            self.start = end.saturating_sub(self.size);
            ScrollOutcome::ScrolledRight
        } else {
            ScrollOutcome::Unchanged
        };

        debug_assert!(self.contains(cursor_render_pos));
        outcome
    }
}
