//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (quiz, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Icon loader thread: spawned per result screen when the icon is enabled
//!
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::assets::IconSource;
use crate::quiz::{Action, Quiz, Screen};
use crate::types::Category;

use super::state::{App, AppEvent, Command, Effect};
use super::update::{handle_background_event, handle_command};
use super::view::render;

/// Icon source shared with loader threads.
pub type SharedIcons = Arc<dyn IconSource + Send + Sync>;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a command for the current app state.
///
/// Returns None for keys that mean nothing on this screen.
pub fn map_key(key: KeyEvent, app: &App) -> Option<Command> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    // A notice blocks everything else
    if app.notice.is_some() {
        return Some(Command::Dismiss);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Command::Quit),
        _ => {}
    }

    let action = match app.quiz.screen() {
        Screen::Intro => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Start),
            _ => None,
        },
        Screen::InProgress { .. } => match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                let index = (c as u8 - b'1') as usize;
                Some(Action::Select(Category::ALL[index]))
            }
            KeyCode::Char(c) => Category::from_letter(c).map(Action::Select).or(match c {
                'n' => Some(Action::Next),
                'p' => Some(Action::Previous),
                _ => None,
            }),
            KeyCode::Enter | KeyCode::Right => Some(Action::Next),
            KeyCode::Left | KeyCode::Backspace => Some(Action::Previous),
            _ => None,
        },
        Screen::Result { .. } => match key.code {
            KeyCode::Char('r') => Some(Action::Retake),
            _ => None,
        },
    };

    action.map(Command::Quiz)
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key presses.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                // Windows reports releases too
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, releases
                Err(_) => break,
            }
        }
    });
}

/// Spawn a thread that loads one result icon and reports the outcome.
fn spawn_icon_loader(icons: SharedIcons, category: Category, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let event = match icons.load(category) {
            Ok(icon) => {
                tracing::info!(%category, rows = icon.rows.len(), "result icon loaded");
                AppEvent::IconLoaded(icon)
            }
            Err(e) => AppEvent::IconFailed {
                category,
                reason: e.to_string(),
            },
        };
        // The TUI may already be gone
        let _ = tx.send(event);
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive quiz until the user quits.
pub fn run(quiz: Quiz, icons: SharedIcons) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(quiz);

    tracing::info!(
        questions = app.quiz.questions().len(),
        config = ?app.quiz.config(),
        "tui started"
    );

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(command) = map_key(key, &app) {
                    if let Some(effect) = handle_command(&mut app, command) {
                        handle_effect(effect, &icons, &tx);
                    }
                }
            }
            background_event => {
                handle_background_event(&mut app, background_event);
            }
        }
    }

    restore_terminal()?;
    tracing::info!("tui stopped");
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Execute a side effect requested by a pure transition.
fn handle_effect(effect: Effect, icons: &SharedIcons, tx: &mpsc::Sender<AppEvent>) {
    match effect {
        Effect::LoadIcon(category) => {
            spawn_icon_loader(Arc::clone(icons), category, tx.clone());
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn started() -> App {
        let mut app = App::new(Quiz::default());
        app.quiz.start().unwrap();
        app
    }

    fn on_result() -> App {
        let mut app = started();
        for _ in 0..14 {
            app.quiz.select_answer(Category::Visual).unwrap();
            app.quiz.next().unwrap();
        }
        app
    }

    #[test]
    fn ctrl_c_maps_to_quit_even_with_notice() {
        let mut app = started();
        app.notice = Some("blocked".to_string());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, &app), Some(Command::Quit));
    }

    #[test]
    fn any_key_dismisses_notice() {
        let mut app = started();
        app.notice = Some("blocked".to_string());
        assert_eq!(map_key(key(KeyCode::Char('a')), &app), Some(Command::Dismiss));
        assert_eq!(map_key(key(KeyCode::Enter), &app), Some(Command::Dismiss));
    }

    #[test]
    fn q_and_esc_quit() {
        let app = started();
        assert_eq!(map_key(key(KeyCode::Char('q')), &app), Some(Command::Quit));
        assert_eq!(map_key(key(KeyCode::Esc), &app), Some(Command::Quit));
    }

    #[test]
    fn enter_starts_from_intro() {
        let app = App::new(Quiz::default());
        assert_eq!(
            map_key(key(KeyCode::Enter), &app),
            Some(Command::Quiz(Action::Start))
        );
        assert_eq!(map_key(key(KeyCode::Char('a')), &app), None);
    }

    #[test]
    fn letters_and_digits_select() {
        let app = started();
        assert_eq!(
            map_key(key(KeyCode::Char('b')), &app),
            Some(Command::Quiz(Action::Select(Category::Auditory)))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('3')), &app),
            Some(Command::Quiz(Action::Select(Category::Tactile)))
        );
    }

    #[test]
    fn arrows_navigate_mid_quiz() {
        let app = started();
        assert_eq!(
            map_key(key(KeyCode::Right), &app),
            Some(Command::Quiz(Action::Next))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), &app),
            Some(Command::Quiz(Action::Next))
        );
        assert_eq!(
            map_key(key(KeyCode::Left), &app),
            Some(Command::Quiz(Action::Previous))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('p')), &app),
            Some(Command::Quiz(Action::Previous))
        );
    }

    #[test]
    fn r_retakes_only_on_result() {
        assert_eq!(
            map_key(key(KeyCode::Char('r')), &on_result()),
            Some(Command::Quiz(Action::Retake))
        );
        assert_eq!(map_key(key(KeyCode::Char('r')), &started()), None);
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(key(KeyCode::Char('z')), &started()), None);
        assert_eq!(map_key(key(KeyCode::Enter), &on_result()), None);
    }
}
