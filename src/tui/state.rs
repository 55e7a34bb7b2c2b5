//! TUI state algebra: pure types, zero effects.
//!
//! The quiz session itself lives in [`Quiz`]. The TUI only adds what a
//! host needs around it: a modal notice, the loaded result icon and the
//! quit flag.

use crossterm::event::KeyEvent;

use crate::assets::Icon;
use crate::quiz::{Action, Quiz};
use crate::types::Category;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - An icon loader thread (result icon enabled only) sends the outcome
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The result icon finished loading.
    IconLoaded(Icon),
    /// The result icon could not be loaded.
    IconFailed { category: Category, reason: String },
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The quiz session.
    pub quiz: Quiz,

    /// Blocking notice. While set, the next key only dismisses it.
    pub notice: Option<String>,

    /// Icon drawn over the result chart, once loaded.
    pub icon: Option<Icon>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    pub fn new(quiz: Quiz) -> Self {
        App {
            quiz,
            notice: None,
            icon: None,
            should_quit: false,
        }
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

/// What a key press means, after considering the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the quiz controller.
    Quiz(Action),
    /// Close the notice.
    Dismiss,
    /// Quit the application.
    Quit,
}

/// Side effect requested by a command. The effects layer executes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Load the result icon for a category in the background.
    LoadIcon(Category),
}

// ============================================================================
// TESTS
// ============================================================================
