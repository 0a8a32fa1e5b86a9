//! LCD editor demo
//!
//! Terminal front end for `lcd-editor-core`: shows the fixed-width display row the core
//! projects, together with the full render sequence and the window/cursor state.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p lcd-editor -- "Hello World" --window-size 8
//! # line-oriented mode, vi-style commands read from stdin
//! cargo run -p lcd-editor -- "Hello World" --repl
//! ```
//!
//! Set `RUST_LOG=debug` to log every window update to stderr.

mod app;
mod repl;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lcd_editor_core::{
    DEFAULT_MAX_BUFFER_LENGTH, DEFAULT_WINDOW_SIZE, EditorConfig, EditorStateManager,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::error::Error;
use std::io::{self, stdout};

/// Single-line editor on a simulated fixed-width display.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Initial buffer contents (cursor starts after the last character).
    #[arg(default_value = "")]
    text: String,

    /// Display width in cells.
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
    window_size: usize,

    /// Maximum number of characters in the buffer.
    #[arg(short, long, default_value_t = DEFAULT_MAX_BUFFER_LENGTH)]
    max_len: usize,

    /// Read vi-style commands from stdin instead of running the TUI.
    #[arg(long)]
    repl: bool,

    /// In REPL mode, print the state as JSON.
    #[arg(long, requires = "repl")]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = EditorConfig::new(args.window_size)
        .with_max_buffer_length(args.max_len)
        .with_initial_text(args.text);
    let manager = EditorStateManager::new(config)?;

    if args.repl {
        let stdin = io::stdin();
        repl::run(manager, stdin.lock(), stdout().lock(), args.json)?;
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::App::new(manager);
    let result = app::run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}
