//! Session snapshots.
//!
//! A session is fully described by its buffer contents, logical cursor and sizes. The render
//! sequence, index map and window are derived on restore.

use crate::config::EditorConfig;

/// Minimal state needed to rebuild an [`EditorCore`](crate::EditorCore).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    /// Buffer contents.
    pub text: String,
    /// Logical cursor position.
    pub cursor: usize,
    /// Display width in cells.
    pub window_size: usize,
    /// Buffer capacity.
    pub max_buffer_length: usize,
}

impl SessionSnapshot {
    /// Configuration that recreates this session.
    pub fn to_config(&self) -> EditorConfig {
        EditorConfig {
            window_size: self.window_size,
            max_buffer_length: self.max_buffer_length,
            initial_text: self.text.clone(),
            initial_cursor: Some(self.cursor),
        }
    }
}
