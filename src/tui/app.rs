//! Main TUI application

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Margin},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::Result;

use super::input::menu_event;
use super::menu::{Menu, MenuCommand};
use super::theme::Theme;

/// Outer margin around the menu text
const MARGIN: Margin = Margin {
    vertical: 1,
    horizontal: 2,
};

const KEY_HINTS: [(&str, &str); 4] = [
    ("↑/k", "up"),
    ("↓/j", "down"),
    ("enter", "select"),
    ("q", "quit"),
];

/// Application state
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    menu: Menu,
}

impl App {
    /// Switch the terminal to raw mode on the alternate screen.
    ///
    /// The terminal is restored when the `App` is dropped.
    pub fn new(menu: Menu) -> Result<Self> {
        enable_raw_mode()?;
        let terminal = enter_terminal(io::stdout(), || {
            let _ = disable_raw_mode();
        })?;

        Ok(Self { terminal, menu })
    }

    /// Run the main event loop until a quit key is pressed.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let menu = &self.menu;
            self.terminal.draw(|f| draw_menu(f, menu))?;

            // Blocks until the next event; resizes fall through to a redraw.
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(menu_event) = menu_event(key) else {
                continue;
            };

            let (menu, command) = self.menu.clone().update(menu_event);
            self.menu = menu;
            if let Some(MenuCommand::Quit) = command {
                return Ok(());
            }
        }
    }
}

/// Enter the alternate screen on `out` and build the terminal.
///
/// `restore` runs if any step fails, so raw mode never outlives a failed setup.
fn enter_terminal<W: Write>(
    mut out: W,
    restore: impl FnMut(),
) -> Result<Terminal<CrosstermBackend<W>>> {
    let guard = RestoreGuard::new(restore);
    execute!(out, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(out))?;
    guard.disarm();
    Ok(terminal)
}

/// Runs its closure on drop unless disarmed.
struct RestoreGuard<F: FnMut()> {
    restore: Option<F>,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    fn disarm(mut self) {
        self.restore = None;
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            restore();
        }
    }
}

/// Draw the menu text inside the outer margin with a key-hint footer.
pub fn draw_menu(f: &mut Frame, menu: &Menu) {
    let area = f.area().inner(MARGIN);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let cursor_row = menu.cursor_line();
    let view = menu.render();
    let lines: Vec<Line> = view
        .lines()
        .enumerate()
        .map(|(i, row)| {
            if i == cursor_row {
                Line::styled(row.to_string(), Theme::accent())
            } else {
                Line::styled(row.to_string(), Theme::text())
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), chunks[0]);
    f.render_widget(Paragraph::new(help_line()), chunks[1]);
}

fn help_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Theme::muted()));
        }
        spans.push(Span::styled(*key, Theme::key()));
        spans.push(Span::styled(format!(" {}", desc), Theme::muted()));
    }
    Line::from(spans)
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::menu::MenuEvent;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use std::cell::Cell;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_failed_terminal_setup_restores() {
        let restored = Cell::new(false);
        let result = enter_terminal(FailingWriter, || restored.set(true));
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_disarmed_guard_does_not_restore() {
        let restored = Cell::new(false);
        let guard = RestoreGuard::new(|| restored.set(true));
        guard.disarm();
        assert!(!restored.get());

        drop(RestoreGuard::new(|| restored.set(true)));
        assert!(restored.get());
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn draw(menu: &Menu, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_menu(f, menu)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_draw_respects_margin() {
        let buf = draw(&Menu::new(), 40, 10);
        // Margin row, header row, blank row, then the first choice
        assert_eq!(row_text(&buf, 0), "");
        assert_eq!(row_text(&buf, 3), "  > Create New Alias");
        assert_eq!(row_text(&buf, 4), "    Delete Aliases");
        assert_eq!(row_text(&buf, 5), "    View Current Aliases");
        assert_eq!(row_text(&buf, 6), "    Exit");
    }

    #[test]
    fn test_draw_highlights_cursor_row() {
        let menu = Menu::new().update(MenuEvent::Down).0;
        let buf = draw(&menu, 40, 10);
        assert_eq!(row_text(&buf, 4), "  > Delete Aliases");
        assert_eq!(buf[(2, 4)].fg, Theme::CYAN);
        assert_ne!(buf[(2, 3)].fg, Theme::CYAN);
    }

    #[test]
    fn test_draw_key_hints_on_last_inner_row() {
        let buf = draw(&Menu::new(), 60, 10);
        let footer = row_text(&buf, 8);
        assert!(footer.starts_with("  ↑/k up"));
        assert!(footer.contains("q quit"));
    }
}
