//! Line-oriented command loop.
//!
//! Commands (vi-style, any number per line): `h` left, `l` right, `0` home, `$` end,
//! `X` delete before cursor, `i{c}` insert `c`. Other characters are ignored. After each
//! line the render sequence and the display row are printed.

use lcd_editor_core::{Command, CursorCommand, EditCommand, EditorStateManager, MarkerGlyphs};
use serde_json::json;
use std::io::{self, BufRead, Write};

pub fn run<R: BufRead, W: Write>(
    mut manager: EditorStateManager,
    input: R,
    mut output: W,
    as_json: bool,
) -> io::Result<()> {
    print_state(&manager, &mut output, as_json)?;

    for line in input.lines() {
        let line = line?;
        for command in parse_line(&line) {
            if let Err(err) = manager.execute(command) {
                log::warn!("{err}");
                writeln!(output, "error: {err}")?;
            }
        }
        print_state(&manager, &mut output, as_json)?;
    }

    Ok(())
}

fn parse_line(line: &str) -> Vec<Command> {
    let mut commands = Vec::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        let command = match c {
            'h' => Command::Cursor(CursorCommand::Left),
            'l' => Command::Cursor(CursorCommand::Right),
            '0' => Command::Cursor(CursorCommand::Home),
            '$' => Command::Cursor(CursorCommand::End),
            'X' => Command::Edit(EditCommand::Backspace),
            // `i` at end of line has nothing to insert.
            'i' => match chars.next() {
                Some(ch) => Command::Edit(EditCommand::Insert { ch }),
                None => break,
            },
            _ => continue,
        };
        commands.push(command);
    }
    commands
}

fn print_state<W: Write>(
    manager: &EditorStateManager,
    output: &mut W,
    as_json: bool,
) -> io::Result<()> {
    let editor = manager.editor();
    let screen = editor.screen_snapshot();

    if as_json {
        let state = manager.get_state();
        let value = json!({
            "session": editor.session_snapshot(),
            "render": editor.render_text(),
            "index_map": editor.index_map(),
            "cursor": {
                "input": state.cursor.logical,
                "render": state.cursor.render,
                "screen": state.cursor.screen,
            },
            "window": { "start": state.window.start, "end": state.window.end },
            "screen": screen.to_text(&MarkerGlyphs::default()),
            "version": state.buffer.version,
        });
        writeln!(output, "{value}")
    } else {
        writeln!(output, "{}", editor.render_text())?;
        writeln!(output, "{}", screen.to_text(&MarkerGlyphs::default()))
    }
}
