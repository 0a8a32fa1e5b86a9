//! Command Interface Layer
//!
//! [`EditorCore`] is the editing session: it owns the edit buffer, the render layout and
//! the scroll window, and keeps the three consistent after every operation.
//! [`CommandExecutor`] wraps it in a command pattern for input loops that dispatch key
//! events.
//!
//! # Example
//!
//! ```rust
//! use lcd_editor_core::{Command, CommandExecutor, EditCommand, EditorConfig};
//!
//! let mut executor = CommandExecutor::new(EditorConfig::new(5)).unwrap();
//!
//! for ch in "Hello".chars() {
//!     executor.execute(Command::Edit(EditCommand::Insert { ch })).unwrap();
//! }
//!
//! // "H" renders as two units, so the cursor sits at render position 6.
//! assert_eq!(executor.editor().cursor_render_pos(), 6);
//! assert_eq!(executor.editor().screen_snapshot().to_string(), ".llo_");
//! ```

use crate::buffer::InputBuffer;
use crate::config::{ConfigError, EditorConfig};
use crate::layout::{ExpansionRule, RenderLayout, UppercaseExpansion};
use crate::session::SessionSnapshot;
use crate::snapshot::{DisplayCell, ScreenSnapshot, project, screen_snapshot};
use crate::window::ScrollWindow;
use thiserror::Error;

/// Insert into a buffer that is already at capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("buffer is full ({capacity} characters)")]
pub struct CapacityExceeded {
    /// Buffer capacity in characters.
    pub capacity: usize,
}

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    /// The edit buffer is full; nothing was changed.
    CapacityExceeded(#[from] CapacityExceeded),
}

/// Content-changing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert a character at the cursor.
    Insert {
        /// Character to insert.
        ch: char,
    },
    /// Delete the character before the cursor.
    Backspace,
}

/// Cursor movement commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCommand {
    /// One character left.
    Left,
    /// One character right.
    Right,
    /// Start of the buffer.
    Home,
    /// After the last character.
    End,
}

/// Query commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Project the current screen.
    GetScreen,
}

/// Unified command enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Content-changing commands
    Edit(EditCommand),
    /// Cursor movement commands
    Cursor(CursorCommand),
    /// Query commands
    View(ViewCommand),
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Success, no return value
    Success,
    /// Success, returns the projected screen
    Screen(ScreenSnapshot),
}

/// Single-line editing session for a fixed-width display.
#[derive(Debug)]
pub struct EditorCore {
    buffer: InputBuffer,
    rule: Box<dyn ExpansionRule>,
    layout: RenderLayout,
    window: ScrollWindow,
}

impl EditorCore {
    /// Create a session with the default expansion rule (uppercase letters double).
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        Self::with_rule(config, Box::new(UppercaseExpansion))
    }

    /// Create an empty session with default capacity.
    pub fn empty(window_size: usize) -> Result<Self, ConfigError> {
        Self::new(EditorConfig::new(window_size))
    }

    /// Create a session with a custom expansion rule.
    pub fn with_rule(
        config: EditorConfig,
        rule: Box<dyn ExpansionRule>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let text_len = config.initial_text.chars().count();
        if text_len > config.max_buffer_length {
            log::warn!(
                "initial text truncated from {} to {} characters",
                text_len,
                config.max_buffer_length
            );
        }

        let mut buffer = InputBuffer::with_text(&config.initial_text, config.max_buffer_length);
        if let Some(cursor) = config.initial_cursor {
            buffer.set_cursor(cursor);
        }
        let layout = RenderLayout::build(buffer.chars(), rule.as_ref());

        let mut core = Self {
            buffer,
            rule,
            layout,
            window: ScrollWindow::new(config.window_size),
        };
        core.update_window();
        Ok(core)
    }

    /// Rebuild a session from a snapshot, using the default expansion rule.
    pub fn restore(snapshot: &SessionSnapshot) -> Result<Self, ConfigError> {
        Self::new(snapshot.to_config())
    }

    /// Capture the state needed to rebuild this session.
    pub fn session_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            text: self.buffer.text(),
            cursor: self.buffer.cursor(),
            window_size: self.window.size(),
            max_buffer_length: self.buffer.capacity(),
        }
    }

    /// Insert `ch` at the cursor.
    ///
    /// On a full buffer nothing changes (content, cursor, layout and window).
    pub fn insert(&mut self, ch: char) -> Result<(), CapacityExceeded> {
        if let Err(err) = self.buffer.insert(ch) {
            log::debug!("insert {:?} rejected: {}", ch, err);
            return Err(err);
        }
        self.relayout();
        self.update_window();
        Ok(())
    }

    /// Delete the character before the cursor. No-op at position 0.
    pub fn delete_before_cursor(&mut self) {
        if self.buffer.delete_before_cursor().is_some() {
            self.relayout();
            self.update_window();
        }
    }

    /// Move the cursor one character left. No-op at position 0.
    pub fn move_left(&mut self) {
        if self.buffer.move_left() {
            self.update_window();
        }
    }

    /// Move the cursor one character right. No-op at the end of the buffer.
    pub fn move_right(&mut self) {
        if self.buffer.move_right() {
            self.update_window();
        }
    }

    /// Move the cursor to the start of the buffer.
    pub fn move_home(&mut self) {
        if self.buffer.move_home() {
            self.update_window();
        }
    }

    /// Move the cursor after the last character.
    pub fn move_end(&mut self) {
        if self.buffer.move_end() {
            self.update_window();
        }
    }

    /// Display cells for the current state (exactly `window_size` of them).
    pub fn current_screen(&self) -> Vec<DisplayCell> {
        project(&self.layout, &self.window, self.cursor_render_pos())
    }

    /// Current screen with cursor column and window offset.
    pub fn screen_snapshot(&self) -> ScreenSnapshot {
        screen_snapshot(&self.layout, &self.window, self.cursor_render_pos())
    }

    /// Buffer contents.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Buffer capacity.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Logical cursor position.
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Render sequence as text.
    pub fn render_text(&self) -> String {
        self.layout.render_text()
    }

    /// Length of the render sequence.
    pub fn render_len(&self) -> usize {
        self.layout.render_len()
    }

    /// Logical -> render index map.
    pub fn index_map(&self) -> &[usize] {
        self.layout.index_map()
    }

    /// Render layout.
    pub fn layout(&self) -> &RenderLayout {
        &self.layout
    }

    /// Cursor position in the render sequence.
    pub fn cursor_render_pos(&self) -> usize {
        self.layout.render_pos(self.buffer.cursor())
    }

    /// Cursor column on the screen.
    pub fn cursor_screen_pos(&self) -> usize {
        self.window.screen_column(self.cursor_render_pos())
    }

    /// Scroll window.
    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    /// Expansion rule in use.
    pub fn rule(&self) -> &dyn ExpansionRule {
        self.rule.as_ref()
    }

    fn relayout(&mut self) {
        self.layout.rebuild(self.buffer.chars(), self.rule.as_ref());
    }

    fn update_window(&mut self) {
        let cursor_render_pos = self.cursor_render_pos();
        let outcome = self.window.update(cursor_render_pos, self.layout.render_len());
        log::debug!(
            "{:?}: cursor_input_pos={}; cursor_screen_pos={}; window_start={}; window_end={}",
            outcome,
            self.buffer.cursor(),
            self.window.screen_column(cursor_render_pos),
            self.window.start(),
            self.window.end()
        );
    }
}

/// Command executor
///
/// Dispatches [`Command`]s to an [`EditorCore`] and records them.
#[derive(Debug)]
pub struct CommandExecutor {
    editor: EditorCore,
    command_history: Vec<Command>,
}

impl CommandExecutor {
    /// Create a new command executor
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_editor(EditorCore::new(config)?))
    }

    /// Wrap an existing session.
    pub fn from_editor(editor: EditorCore) -> Self {
        Self {
            editor,
            command_history: Vec::new(),
        }
    }

    /// Execute command
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        self.command_history.push(command);

        match command {
            Command::Edit(edit_cmd) => self.execute_edit(edit_cmd),
            Command::Cursor(cursor_cmd) => {
                self.execute_cursor(cursor_cmd);
                Ok(CommandResult::Success)
            }
            Command::View(ViewCommand::GetScreen) => {
                Ok(CommandResult::Screen(self.editor.screen_snapshot()))
            }
        }
    }

    /// Execute commands in order, stopping at the first error.
    pub fn execute_batch(
        &mut self,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<Vec<CommandResult>, CommandError> {
        commands
            .into_iter()
            .map(|command| self.execute(command))
            .collect()
    }

    /// Get command history
    pub fn get_command_history(&self) -> &[Command] {
        &self.command_history
    }

    /// Get a reference to the session
    pub fn editor(&self) -> &EditorCore {
        &self.editor
    }

    /// Get a mutable reference to the session
    pub fn editor_mut(&mut self) -> &mut EditorCore {
        &mut self.editor
    }

    fn execute_edit(&mut self, command: EditCommand) -> Result<CommandResult, CommandError> {
        match command {
            EditCommand::Insert { ch } => self.editor.insert(ch)?,
            EditCommand::Backspace => self.editor.delete_before_cursor(),
        }
        Ok(CommandResult::Success)
    }

    fn execute_cursor(&mut self, command: CursorCommand) {
        match command {
            CursorCommand::Left => self.editor.move_left(),
            CursorCommand::Right => self.editor.move_right(),
            CursorCommand::Home => self.editor.move_home(),
            CursorCommand::End => self.editor.move_end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_insert() {
        let mut executor = CommandExecutor::new(EditorConfig::new(5)).unwrap();
        let result = executor.execute(Command::Edit(EditCommand::Insert { ch: 'a' }));
        assert_eq!(result, Ok(CommandResult::Success));
        assert_eq!(executor.editor().text(), "a");
        assert_eq!(executor.get_command_history().len(), 1);
    }

    #[test]
    fn test_insert_full_buffer_reports_error() {
        let config = EditorConfig::new(5)
            .with_max_buffer_length(2)
            .with_initial_text("ab");
        let mut executor = CommandExecutor::new(config).unwrap();
        let err = executor
            .execute(Command::Edit(EditCommand::Insert { ch: 'c' }))
            .unwrap_err();
        assert_eq!(
            err,
            CommandError::CapacityExceeded(CapacityExceeded { capacity: 2 })
        );
        assert_eq!(err.to_string(), "buffer is full (2 characters)");
    }

    #[test]
    fn test_batch_stops_at_first_error() {
        let config = EditorConfig::new(5).with_max_buffer_length(1);
        let mut executor = CommandExecutor::new(config).unwrap();
        let result = executor.execute_batch([
            Command::Edit(EditCommand::Insert { ch: 'a' }),
            Command::Edit(EditCommand::Insert { ch: 'b' }),
            Command::Cursor(CursorCommand::Home),
        ]);
        assert!(result.is_err());
        assert_eq!(executor.editor().cursor(), 1);
        assert_eq!(executor.get_command_history().len(), 2);
    }

    #[test]
    fn test_get_screen() {
        let config = EditorConfig::new(4).with_initial_text("ab");
        let mut executor = CommandExecutor::new(config).unwrap();
        let result = executor
            .execute(Command::View(ViewCommand::GetScreen))
            .unwrap();
        let CommandResult::Screen(screen) = result else {
            panic!("expected a screen, got {result:?}");
        };
        assert_eq!(screen.to_string(), "ab_$");
        assert_eq!(screen.cursor_column, 2);
    }
}
