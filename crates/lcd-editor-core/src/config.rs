//! Session configuration.

use crate::window::MIN_WINDOW_SIZE;
use thiserror::Error;

/// Default display width in cells.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Default maximum number of characters in the edit buffer.
pub const DEFAULT_MAX_BUFFER_LENGTH: usize = 41;

/// Errors detected when a session is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("window size {window_size} is smaller than {min}", min = MIN_WINDOW_SIZE)]
    /// The display is too narrow to hold the cursor and one cell of context.
    WindowTooSmall {
        /// Requested window size.
        window_size: usize,
    },

    #[error("initial cursor {cursor} is outside 0..={len}")]
    /// The initial cursor does not address a position in the initial text.
    CursorOutOfRange {
        /// Requested cursor position.
        cursor: usize,
        /// Length of the (possibly truncated) initial text.
        len: usize,
    },
}

/// Configuration fixed for the lifetime of an editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Display width in cells (>= 2).
    pub window_size: usize,
    /// Maximum number of characters in the edit buffer.
    pub max_buffer_length: usize,
    /// Buffer contents at start-up.
    pub initial_text: String,
    /// Logical cursor at start-up; `None` parks it after the last character.
    pub initial_cursor: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            max_buffer_length: DEFAULT_MAX_BUFFER_LENGTH,
            initial_text: String::new(),
            initial_cursor: None,
        }
    }
}

impl EditorConfig {
    /// Default configuration with a custom window size.
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    /// Set the window size.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the buffer capacity.
    pub fn with_max_buffer_length(mut self, max_buffer_length: usize) -> Self {
        self.max_buffer_length = max_buffer_length;
        self
    }

    /// Set the initial buffer contents.
    pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }

    /// Set the initial logical cursor.
    pub fn with_initial_cursor(mut self, cursor: usize) -> Self {
        self.initial_cursor = Some(cursor);
        self
    }

    /// Length of the initial text after truncation to the buffer capacity.
    pub fn initial_len(&self) -> usize {
        self.initial_text.chars().count().min(self.max_buffer_length)
    }

    /// Check the session preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size < MIN_WINDOW_SIZE {
            return Err(ConfigError::WindowTooSmall {
                window_size: self.window_size,
            });
        }
        if let Some(cursor) = self.initial_cursor {
            let len = self.initial_len();
            if cursor > len {
                return Err(ConfigError::CursorOutOfRange { cursor, len });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EditorConfig::default();
        assert_eq!(config.window_size, DEFAULT_WINDOW_SIZE);
        assert_eq!(config.max_buffer_length, DEFAULT_MAX_BUFFER_LENGTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_window_too_small() {
        let err = EditorConfig::new(1).validate().unwrap_err();
        assert_eq!(err, ConfigError::WindowTooSmall { window_size: 1 });
        assert_eq!(err.to_string(), "window size 1 is smaller than 2");
    }

    #[test]
    fn test_cursor_checked_against_truncated_text() {
        let config = EditorConfig::new(5)
            .with_max_buffer_length(3)
            .with_initial_text("abcdef")
            .with_initial_cursor(4);
        assert_eq!(
            config.validate(),
            Err(ConfigError::CursorOutOfRange { cursor: 4, len: 3 })
        );
    }
}
