//! Editor State Interface
//!
//! Exposes the session state to the display layer in a structured, immutable form, with
//! version tracking and change notifications.
//!
//! # Example
//!
//! ```rust
//! use lcd_editor_core::{Command, EditCommand, EditorConfig, EditorStateManager};
//!
//! let mut manager = EditorStateManager::new(EditorConfig::new(5)).unwrap();
//!
//! manager.subscribe(|change| {
//!     println!("Version {} -> {}: {:?}",
//!         change.old_version, change.new_version, change.change_type);
//! });
//!
//! manager.execute(Command::Edit(EditCommand::Insert { ch: 'x' })).unwrap();
//!
//! let buffer = manager.get_buffer_state();
//! assert_eq!(buffer.text, "x");
//! assert_eq!(buffer.version, 1);
//! ```

use crate::config::{ConfigError, EditorConfig};
use crate::{Command, CommandError, CommandExecutor, CommandResult, EditorCore};

/// Buffer state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferState {
    /// Buffer contents
    pub text: String,
    /// Number of characters
    pub len: usize,
    /// Buffer capacity
    pub capacity: usize,
    /// Length of the render sequence
    pub render_len: usize,
    /// State version number (incremented after each change)
    pub version: u64,
}

/// Cursor state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    /// Logical position in the edit buffer
    pub logical: usize,
    /// Position in the render sequence
    pub render: usize,
    /// Column on the screen
    pub screen: usize,
}

/// Window state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    /// First visible render position
    pub start: usize,
    /// One past the last visible render position
    pub end: usize,
    /// Window width in cells
    pub size: usize,
}

/// Complete editor state snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// Buffer state
    pub buffer: BufferState,
    /// Cursor state
    pub cursor: CursorState,
    /// Window state
    pub window: WindowState,
}

/// State change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeType {
    /// Buffer content modified
    BufferModified,
    /// Logical cursor moved
    CursorMoved,
    /// Window scrolled
    WindowScrolled,
}

/// State change record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    /// Change type
    pub change_type: StateChangeType,
    /// Old version number
    pub old_version: u64,
    /// New version number
    pub new_version: u64,
}

/// State change callback function type
pub type StateChangeCallback = Box<dyn FnMut(&StateChange) + Send>;

/// Editor state manager
///
/// Wraps a [`CommandExecutor`] and notifies subscribers of each kind of change a command
/// caused. Commands that change nothing (a move at a boundary, a rejected insert, a screen
/// query) leave the version alone and notify no one.
pub struct EditorStateManager {
    executor: CommandExecutor,
    state_version: u64,
    callbacks: Vec<StateChangeCallback>,
}

impl std::fmt::Debug for EditorStateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorStateManager")
            .field("executor", &self.executor)
            .field("state_version", &self.state_version)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl EditorStateManager {
    /// Create a new state manager
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_executor(CommandExecutor::new(config)?))
    }

    /// Wrap an existing executor.
    pub fn from_executor(executor: CommandExecutor) -> Self {
        Self {
            executor,
            state_version: 0,
            callbacks: Vec::new(),
        }
    }

    /// Get a reference to the session
    pub fn editor(&self) -> &EditorCore {
        self.executor.editor()
    }

    /// Get a reference to the command executor
    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// Current state version
    pub fn version(&self) -> u64 {
        self.state_version
    }

    /// Subscribe to state changes
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Execute a command and notify subscribers of what changed.
    ///
    /// The version increases by one per state-changing command. A command that changes
    /// several things reports each of them, in the order buffer, cursor, window, all carrying
    /// the same version pair.
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        let text_before = self.editor().text();
        let cursor_before = self.editor().cursor();
        let window_before = self.editor().window();

        let result = self.executor.execute(command)?;

        let mut changes = Vec::new();
        if self.editor().text() != text_before {
            changes.push(StateChangeType::BufferModified);
        }
        if self.editor().cursor() != cursor_before {
            changes.push(StateChangeType::CursorMoved);
        }
        if self.editor().window() != window_before {
            changes.push(StateChangeType::WindowScrolled);
        }
        self.mark_modified(&changes);

        Ok(result)
    }

    /// Get buffer state
    pub fn get_buffer_state(&self) -> BufferState {
        let editor = self.editor();
        BufferState {
            text: editor.text(),
            len: editor.len(),
            capacity: editor.capacity(),
            render_len: editor.render_len(),
            version: self.state_version,
        }
    }

    /// Get cursor state
    pub fn get_cursor_state(&self) -> CursorState {
        let editor = self.editor();
        CursorState {
            logical: editor.cursor(),
            render: editor.cursor_render_pos(),
            screen: editor.cursor_screen_pos(),
        }
    }

    /// Get window state
    pub fn get_window_state(&self) -> WindowState {
        let window = self.editor().window();
        WindowState {
            start: window.start(),
            end: window.end(),
            size: window.size(),
        }
    }

    /// Get complete state
    pub fn get_state(&self) -> EditorState {
        EditorState {
            buffer: self.get_buffer_state(),
            cursor: self.get_cursor_state(),
            window: self.get_window_state(),
        }
    }

    fn mark_modified(&mut self, changes: &[StateChangeType]) {
        if changes.is_empty() {
            return;
        }
        let old_version = self.state_version;
        self.state_version += 1;

        for &change_type in changes {
            let change = StateChange {
                change_type,
                old_version,
                new_version: self.state_version,
            };
            for callback in &mut self.callbacks {
                callback(&change);
            }
        }
    }
}
