//! TUI application state and logic

use crate::commands::Session;
use crate::core::Letter;
use crate::puzzle::{Outcome, PressEvent};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub colorblind: bool,
    pub should_quit: bool,
    pub last_press: Option<PressEvent>,
    pub modules_solved: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            colorblind: false,
            should_quit: false,
            last_press: None,
            modules_solved: 0,
        };
        app.add_message(
            "Press the letter keys of the buttons whose rules apply.",
            MessageStyle::Info,
        );
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_module(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_colorblind(),
            KeyCode::Char(ch) if !ctrl => {
                if let Ok(letter) = Letter::from_char(ch) {
                    self.press(letter);
                }
            }
            _ => {}
        }
    }

    pub fn press(&mut self, letter: Letter) {
        let event = self.session.press_label(letter);
        self.last_press = Some(event);

        match event.outcome {
            Outcome::Incorrect => self.add_message(
                &format!("{letter} was not a correct button. Strike!"),
                MessageStyle::Error,
            ),
            _ if event.repeat => {
                self.add_message(&format!("{letter} is already pressed."), MessageStyle::Info);
            }
            Outcome::Correct => {
                let pressed = self.session.puzzle().state().pressed_count();
                let total = self.session.puzzle().solution().count();
                self.add_message(
                    &format!("{letter} is correct ({pressed}/{total})."),
                    MessageStyle::Success,
                );
            }
            Outcome::CorrectAndSolved => {
                self.modules_solved += 1;
                self.add_message(
                    "🎉 Module disarmed! Ctrl-N for a new one.",
                    MessageStyle::Success,
                );
            }
        }
    }

    pub fn new_module(&mut self) {
        self.session.new_puzzle();
        self.last_press = None;
        self.messages.clear();
        self.add_message(
            &format!("New module {} armed.", self.session.puzzle().id()),
            MessageStyle::Info,
        );
    }

    pub fn toggle_colorblind(&mut self) {
        self.colorblind = !self.colorblind;
        let state = if self.colorblind { "on" } else { "off" };
        self.add_message(&format!("Colorblind labels {state}."), MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
