//! Quiz state algebra: pure types, zero effects.
//!
//! The position cursor and the answer set only exist inside
//! [`Screen::InProgress`], so an in-progress session is the only state
//! that can carry them. The tally only exists on [`Screen::Result`].

use crate::types::{AnswerSet, Category, Tally};

use super::QuizError;

// ============================================================================
// SCREENS
// ============================================================================

/// The three-state quiz machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    /// Before the first question.
    #[default]
    Intro,

    /// Answering questions.
    InProgress {
        /// Zero-based index of the displayed question.
        position: usize,
        /// Selections so far, keyed by question index.
        answers: AnswerSet,
    },

    /// Submitted. The tally is derived once at submission.
    Result { tally: Tally },
}

impl Screen {
    /// A fresh session at question 0 with nothing answered.
    pub fn in_progress() -> Self {
        Screen::InProgress {
            position: 0,
            answers: AnswerSet::new(),
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Intro => "intro",
            Screen::InProgress { .. } => "in_progress",
            Screen::Result { .. } => "result",
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from whatever input produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the intro and show question 0.
    Start,
    /// Record an answer for the current question without advancing.
    Select(Category),
    /// Advance, or submit on the last question.
    Next,
    /// Go back one question.
    Previous,
    /// Clear everything and start over from the result screen.
    Retake,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Show this screen (may be unchanged).
    Screen(Screen),
    /// The action was refused. The screen is returned untouched together
    /// with the user-facing reason.
    Rejected { screen: Screen, error: QuizError },
}

// ============================================================================
// TESTS
// ============================================================================
