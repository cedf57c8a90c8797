//! Main menu state machine
//!
//! The menu is a single composite state: a header, a fixed list of choices
//! and a cursor. Transitions are pure; the terminal runtime in `app.rs`
//! feeds events in and draws whatever `render` returns.

/// Labels shown in the main menu, top to bottom
pub const MENU_CHOICES: [&str; 4] = [
    "Create New Alias",
    "Delete Aliases",
    "View Current Aliases",
    "Exit",
];

/// Input events the menu understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Stop the program
    Quit,
    /// Move the cursor up one row
    Up,
    /// Move the cursor down one row
    Down,
    /// Activate the highlighted choice
    Select,
    /// Anything without a binding
    Other,
}

/// Follow-up instruction for the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Quit,
}

/// Menu state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    header: String,
    choices: &'static [&'static str],
    /// Always a valid index into `choices`
    cursor: usize,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    /// Starting state: empty header, cursor on the first choice.
    pub fn new() -> Self {
        Self {
            header: String::new(),
            choices: &MENU_CHOICES,
            cursor: 0,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn choices(&self) -> &[&'static str] {
        self.choices
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The choice under the cursor
    pub fn selected(&self) -> &'static str {
        self.choices[self.cursor]
    }

    /// Index of the cursor's row within the `render` output.
    pub fn cursor_line(&self) -> usize {
        // Header lines plus the blank separator line
        self.header.split('\n').count() + 1 + self.cursor
    }

    /// Apply one event and return the new state.
    ///
    /// Only `Quit` produces a command. The cursor clamps at both ends.
    pub fn update(mut self, event: MenuEvent) -> (Self, Option<MenuCommand>) {
        match event {
            MenuEvent::Quit => return (self, Some(MenuCommand::Quit)),
            MenuEvent::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            MenuEvent::Down => {
                if self.cursor < self.choices.len() - 1 {
                    self.cursor += 1;
                }
            }
            // None of the actions are wired up yet, "Exit" included.
            MenuEvent::Select => {}
            MenuEvent::Other => {}
        }
        (self, None)
    }

    /// Header line, a blank line, then one row per choice with `>` marking
    /// the cursor and a space otherwise.
    pub fn render(&self) -> String {
        let mut s = format!("{}\n\n", self.header);
        for (i, choice) in self.choices.iter().enumerate() {
            let marker = if i == self.cursor { ">" } else { " " };
            s.push_str(&format!("{} {}\n", marker, choice));
        }
        s
    }
}
