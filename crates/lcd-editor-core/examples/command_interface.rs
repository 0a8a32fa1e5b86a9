//! Command interface example
//!
//! Demonstrates driving `CommandExecutor` the way a keypad input loop would.

use lcd_editor_core::{
    Command, CommandExecutor, CommandResult, CursorCommand, EditCommand, EditorConfig,
    MarkerGlyphs, ViewCommand,
};

fn print_screen(executor: &mut CommandExecutor, label: &str) {
    let result = executor
        .execute(Command::View(ViewCommand::GetScreen))
        .unwrap();
    if let CommandResult::Screen(screen) = result {
        let editor = executor.editor();
        println!(
            "  {label:<16} [{}]  render='{}' cursor={} window=[{}, {})",
            screen.to_text(&MarkerGlyphs::default()),
            editor.render_text(),
            editor.cursor(),
            editor.window().start(),
            editor.window().end(),
        );
    }
}

fn main() {
    println!("=== LCD editor command interface ===\n");

    let config = EditorConfig::new(8).with_max_buffer_length(16);
    let mut executor = CommandExecutor::new(config).unwrap();

    println!("1. Typing:");
    for ch in "Sin(X)+Cos(Y)".chars() {
        executor
            .execute(Command::Edit(EditCommand::Insert { ch }))
            .unwrap();
    }
    print_screen(&mut executor, "after typing");

    println!("\n2. Cursor movement:");
    executor
        .execute(Command::Cursor(CursorCommand::Home))
        .unwrap();
    print_screen(&mut executor, "home");
    for _ in 0..4 {
        executor
            .execute(Command::Cursor(CursorCommand::Right))
            .unwrap();
    }
    print_screen(&mut executor, "right x4");

    println!("\n3. Backspace:");
    executor
        .execute(Command::Edit(EditCommand::Backspace))
        .unwrap();
    print_screen(&mut executor, "backspace");

    println!("\n4. Capacity:");
    executor.execute(Command::Cursor(CursorCommand::End)).unwrap();
    loop {
        match executor.execute(Command::Edit(EditCommand::Insert { ch: '9' })) {
            Ok(_) => {}
            Err(err) => {
                println!("  insert rejected: {err}");
                break;
            }
        }
    }
    print_screen(&mut executor, "full buffer");
}
