#![warn(missing_docs)]
//! LCD Editor Core - Single-Line Editing Kernel for Fixed-Width Displays
//!
//! # Overview
//!
//! `lcd-editor-core` implements the cursor and scrolling logic of a single-line editor shown
//! on a small character display, such as a calculator's LCD. Users edit a logical input
//! buffer; the display shows a fixed-width slice of a wider *rendered* form of that buffer,
//! where some characters occupy two cells. The core keeps logical and rendered positions
//! consistent and scrolls the visible window so the cursor never leaves the screen.
//!
//! It does not read keys or draw anything: callers feed it commands and receive an abstract
//! row of [`DisplayCell`]s.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Interface & State Management       │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Screen Projector (DisplayCell row)         │  ← Rendering Data
//! ├─────────────────────────────────────────────┤
//! │  Window Scroller                            │  ← Cursor Visibility
//! ├─────────────────────────────────────────────┤
//! │  Render Transformer (expansion, index map)  │  ← Logical -> Render
//! ├─────────────────────────────────────────────┤
//! │  Edit Buffer                                │  ← Text Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Content edits regenerate the render layout and then update the window; pure cursor moves
//! go straight to the window.
//!
//! # Quick Start
//!
//! ```rust
//! use lcd_editor_core::{EditorConfig, EditorCore};
//!
//! let config = EditorConfig::new(4).with_initial_text("abcdefghij");
//! let mut editor = EditorCore::new(config).unwrap();
//!
//! // Cursor starts after the last character.
//! assert_eq!(editor.screen_snapshot().to_string(), ".ij_");
//!
//! editor.move_home();
//! assert_eq!(editor.screen_snapshot().to_string(), "_bc.");
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - Bounded edit buffer with logical cursor
//! - [`layout`] - Render transformer and logical -> render index map
//! - [`window`] - Window scrolling
//! - [`snapshot`] - Screen projection
//! - [`config`] - Session configuration
//! - [`commands`] - Editing session and command interface
//! - [`state`] - State queries and change notifications
//! - [`session`] - Session snapshots

pub mod buffer;
pub mod commands;
pub mod config;
pub mod layout;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod window;

pub use buffer::InputBuffer;
pub use commands::{
    CapacityExceeded, Command, CommandError, CommandExecutor, CommandResult, CursorCommand,
    EditCommand, EditorCore, ViewCommand,
};
pub use config::{ConfigError, DEFAULT_MAX_BUFFER_LENGTH, DEFAULT_WINDOW_SIZE, EditorConfig};
pub use layout::{ExpansionRule, NoExpansion, RenderLayout, UppercaseExpansion};
pub use session::SessionSnapshot;
pub use snapshot::{DisplayCell, MarkerGlyphs, ScreenSnapshot};
pub use state::{
    BufferState, CursorState, EditorState, EditorStateManager, StateChange, StateChangeCallback,
    StateChangeType, WindowState,
};
pub use window::{MIN_WINDOW_SIZE, ScrollOutcome, ScrollWindow};
