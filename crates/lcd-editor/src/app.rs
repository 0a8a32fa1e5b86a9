use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lcd_editor_core::{Command, CursorCommand, DisplayCell, EditCommand, EditorStateManager};
use ratatui::{
    Frame, Terminal,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

pub struct App {
    manager: EditorStateManager,
    status_message: String,
    should_quit: bool,
}

impl App {
    pub fn new(manager: EditorStateManager) -> Self {
        Self {
            manager,
            status_message: String::new(),
            should_quit: false,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let command = match (key.modifiers, key.code) {
            (_, KeyCode::Esc) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.should_quit = true;
                return;
            }
            (_, KeyCode::Left) => Command::Cursor(CursorCommand::Left),
            (_, KeyCode::Right) => Command::Cursor(CursorCommand::Right),
            (_, KeyCode::Home) => Command::Cursor(CursorCommand::Home),
            (_, KeyCode::End) => Command::Cursor(CursorCommand::End),
            (_, KeyCode::Backspace) => Command::Edit(EditCommand::Backspace),
            (mods, KeyCode::Char(ch)) if !mods.contains(KeyModifiers::CONTROL) => {
                Command::Edit(EditCommand::Insert { ch })
            }
            _ => return,
        };

        self.status_message = match self.manager.execute(command) {
            Ok(_) => String::new(),
            Err(err) => err.to_string(),
        };
    }

    fn render(&self, f: &mut Frame) {
        let window_size = self.manager.editor().window().size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(f.area());

        let lcd_width = u16::try_from(window_size + 2).unwrap_or(u16::MAX);
        let lcd_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(lcd_width), Constraint::Min(0)])
            .split(chunks[0])[0];
        let lcd = Paragraph::new(self.lcd_line())
            .block(Block::default().borders(Borders::ALL).title("LCD"));
        f.render_widget(lcd, lcd_area);

        let state = self.manager.get_state();
        let editor = self.manager.editor();
        let details = vec![
            Line::from(format!("input:  {}", state.buffer.text)),
            Line::from(format!("render: {}", editor.render_text())),
            Line::from(format!(
                "cursor: input={} render={} screen={}",
                state.cursor.logical, state.cursor.render, state.cursor.screen
            )),
            Line::from(format!(
                "window: [{}, {})  len={}/{}  version={}",
                state.window.start,
                state.window.end,
                state.buffer.len,
                state.buffer.capacity,
                state.buffer.version
            )),
        ];
        let details =
            Paragraph::new(details).block(Block::default().borders(Borders::ALL).title("State"));
        f.render_widget(details, chunks[1]);

        let status = if self.status_message.is_empty() {
            "←/→ move  Home/End jump  Backspace delete  Esc quit".to_string()
        } else {
            self.status_message.clone()
        };
        f.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::Yellow)),
            chunks[2],
        );
    }

    fn lcd_line(&self) -> Line<'static> {
        let spans: Vec<Span<'static>> = self
            .manager
            .editor()
            .current_screen()
            .into_iter()
            .map(|cell| match cell {
                DisplayCell::Glyph(ch) => Span::raw(ch.to_string()),
                DisplayCell::Cursor => Span::styled(
                    "_",
                    Style::default().add_modifier(Modifier::SLOW_BLINK | Modifier::BOLD),
                ),
                DisplayCell::TruncatedLeft => {
                    Span::styled("◂", Style::default().fg(Color::DarkGray))
                }
                DisplayCell::TruncatedRight => {
                    Span::styled("▸", Style::default().fg(Color::DarkGray))
                }
                DisplayCell::Pad => Span::raw(" "),
            })
            .collect();
        Line::from(spans)
    }
}

pub fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key);
            }
        }
    }

    Ok(())
}
