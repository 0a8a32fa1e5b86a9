//! Edit Buffer
//!
//! Holds the characters typed by the user and the logical cursor.
//!
//! The cursor is an insertion point in `[0, len]`: position `len` sits after the last
//! character. Every operation here is total; the only failure is inserting into a full
//! buffer, which leaves both content and cursor untouched.

use crate::commands::CapacityExceeded;

/// Bounded, single-line input buffer with a logical cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    chars: Vec<char>,
    cursor: usize,
    capacity: usize,
}

impl InputBuffer {
    /// Create an empty buffer that can hold at most `capacity` characters.
    pub fn new(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    /// Create a buffer pre-filled with `text`, cursor parked at the end.
    ///
    /// Characters beyond `capacity` are dropped.
    pub fn with_text(text: &str, capacity: usize) -> Self {
        let mut chars = Vec::with_capacity(capacity);
        chars.extend(text.chars().take(capacity));
        let cursor = chars.len();
        Self {
            chars,
            cursor,
            capacity,
        }
    }

    /// Buffer contents as a `String`.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Buffer contents as characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Maximum number of characters.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if another insert would fail.
    pub fn is_full(&self) -> bool {
        self.chars.len() >= self.capacity
    }

    /// Logical cursor position in `[0, len]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Place the cursor at `position`, clamped to `[0, len]`.
    pub fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.chars.len());
    }

    /// Move one character left. Returns `true` if the cursor moved.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move one character right. Returns `true` if the cursor moved.
    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move to the start of the buffer. Returns `true` if the cursor moved.
    pub fn move_home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    /// Move past the last character. Returns `true` if the cursor moved.
    pub fn move_end(&mut self) -> bool {
        let end = self.chars.len();
        let moved = self.cursor != end;
        self.cursor = end;
        moved
    }

    /// Backspace: remove the character before the cursor.
    ///
    /// Returns the removed character, or `None` at position 0.
    pub fn delete_before_cursor(&mut self) -> Option<char> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.chars.remove(self.cursor))
    }

    /// Insert `ch` at the cursor and advance past it.
    pub fn insert(&mut self, ch: char) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            return Err(CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle_shifts_tail() {
        let mut buffer = InputBuffer::with_text("ac", 10);
        buffer.set_cursor(1);
        buffer.insert('b').unwrap();
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn test_delete_before_cursor_at_start_is_noop() {
        let mut buffer = InputBuffer::with_text("abc", 10);
        buffer.set_cursor(0);
        assert_eq!(buffer.delete_before_cursor(), None);
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_delete_before_cursor_in_middle() {
        let mut buffer = InputBuffer::with_text("abc", 10);
        buffer.set_cursor(2);
        assert_eq!(buffer.delete_before_cursor(), Some('b'));
        assert_eq!(buffer.text(), "ac");
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn test_insert_into_full_buffer_fails() {
        let mut buffer = InputBuffer::with_text("abc", 3);
        buffer.set_cursor(1);
        let before = buffer.clone();
        assert_eq!(buffer.insert('x'), Err(CapacityExceeded { capacity: 3 }));
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_with_text_truncates_to_capacity() {
        let buffer = InputBuffer::with_text("abcdef", 4);
        assert_eq!(buffer.text(), "abcd");
        assert_eq!(buffer.cursor(), 4);
        assert!(buffer.is_full());
    }

    #[test]
    fn test_moves_report_change() {
        let mut buffer = InputBuffer::with_text("ab", 10);
        assert!(!buffer.move_right());
        assert!(!buffer.move_end());
        assert!(buffer.move_left());
        assert!(buffer.move_home());
        assert!(!buffer.move_left());
        assert!(!buffer.move_home());
        assert_eq!(buffer.cursor(), 0);
    }
}
