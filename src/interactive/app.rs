//! TUI application state and logic

use crate::session::{Session, WordStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages retained in the notification log
pub(crate) const MESSAGE_CAP: usize = 5;

/// Application state
pub struct App<'a, S: WordStore> {
    pub session: Session<'a, S>,
    pub display_order: Vec<char>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: WordStore> App<'a, S> {
    #[must_use]
    pub fn new(session: Session<'a, S>) -> Self {
        let display_order = session
            .puzzle()
            .display_order(&random_display_seed())
            .unwrap_or_else(|_| session.puzzle().letters().letters().to_vec());

        let mut app = Self {
            session,
            display_order,
            messages: Vec::new(),
            should_quit: false,
        };

        app.add_message(
            "Welcome! Type letters, Enter to submit, Space to shuffle.",
            MessageStyle::Info,
        );
        app
    }

    /// Rearrange the letter display; the puzzle itself is untouched
    pub fn reshuffle(&mut self) {
        if let Ok(order) = self.session.puzzle().display_order(&random_display_seed()) {
            self.display_order = order;
        }
    }

    pub fn push_letter(&mut self, letter: char) {
        self.session.push_letter(letter);
    }

    pub fn backspace(&mut self) {
        self.session.backspace();
    }

    pub fn clear(&mut self) {
        self.session.clear();
    }

    pub fn submit(&mut self) {
        let outcome = self.session.submit();
        let style = if outcome.is_accepted() {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(&outcome.message(), style);

        if outcome.is_accepted()
            && self.session.found().len() == self.session.puzzle().word_count()
        {
            self.add_message("You found every word!", MessageStyle::Success);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the newest messages
        if self.messages.len() > MESSAGE_CAP {
            self.messages.remove(0);
        }
    }
}

fn random_display_seed() -> String {
    // Throwaway seed; only the arrangement needs to change
    rand::random::<f64>().to_string()
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<'_, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordStore,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Enter => {
                    app.submit();
                }
                KeyCode::Backspace => {
                    app.backspace();
                }
                KeyCode::Tab => {
                    app.clear();
                }
                KeyCode::Char(' ') => {
                    app.reshuffle();
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    app.push_letter(c);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use crate::core::scoring::{find_words, score_words};
    use crate::dictionary::Dictionary;
    use crate::puzzle::Puzzle;
    use crate::session::MemoryStore;

    fn app(dictionary: &Dictionary) -> App<'_, MemoryStore> {
        let letters = LetterSet::from_pangram("notable").unwrap();
        let valid = find_words(dictionary, &letters, 'b');
        let max = score_words(&valid);
        let puzzle =
            Puzzle::new("test".to_string(), "notable".to_string(), letters, 'b', valid, max);
        App::new(Session::new(dictionary, puzzle, MemoryStore::new()))
    }

    #[test]
    fn message_log_keeps_only_the_newest() {
        let dict = Dictionary::new(vec!["notable".to_string()]);
        let mut app = app(&dict);

        for n in 0..10 {
            app.add_message(&format!("message {n}"), MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), MESSAGE_CAP);
        assert_eq!(app.messages.first().unwrap().text, "message 5");
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
