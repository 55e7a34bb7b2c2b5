//! Pure state transitions: (Screen, Action) → Transition.
//!
//! Fully testable without any rendering surface. Each screen defines which
//! actions it accepts; anything else returns the screen unchanged.

use crate::bank::QuestionSet;
use crate::types::{AnswerSet, Category, Tally};

use super::QuizError;
use super::state::{Action, Screen, Transition};

/// Pure state transition function.
pub fn update(screen: Screen, action: &Action, questions: &QuestionSet) -> Transition {
    match screen {
        Screen::Intro => update_intro(action),
        Screen::InProgress { position, answers } => {
            update_in_progress(position, answers, action, questions)
        }
        Screen::Result { tally } => update_result(tally, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Intro: only Start does anything.
fn update_intro(action: &Action) -> Transition {
    match action {
        Action::Start => Transition::Screen(Screen::in_progress()),
        _ => Transition::Screen(Screen::Intro),
    }
}

/// InProgress: select, navigate, submit.
fn update_in_progress(
    position: usize,
    mut answers: AnswerSet,
    action: &Action,
    questions: &QuestionSet,
) -> Transition {
    match action {
        Action::Select(category) => {
            if offers(questions, position, *category) {
                answers.record(position, *category);
            }
            Transition::Screen(Screen::InProgress { position, answers })
        }
        Action::Next => {
            if answers.get(position).is_none() {
                return Transition::Rejected {
                    screen: Screen::InProgress { position, answers },
                    error: QuizError::SelectionRequired,
                };
            }
            if position >= questions.last_index() {
                Transition::Screen(Screen::Result {
                    tally: answers.tally(),
                })
            } else {
                Transition::Screen(Screen::InProgress {
                    position: position + 1,
                    answers,
                })
            }
        }
        Action::Previous => Transition::Screen(Screen::InProgress {
            position: position.saturating_sub(1),
            answers,
        }),
        Action::Start | Action::Retake => {
            Transition::Screen(Screen::InProgress { position, answers })
        }
    }
}

/// Result: Retake starts a fresh session.
fn update_result(tally: Tally, action: &Action) -> Transition {
    match action {
        Action::Retake => Transition::Screen(Screen::in_progress()),
        _ => Transition::Screen(Screen::Result { tally }),
    }
}

/// Whether the question at `position` has an option for `category`.
fn offers(questions: &QuestionSet, position: usize, category: Category) -> bool {
    questions
        .get(position)
        .is_some_and(|q| q.options.iter().any(|o| o.category == category))
}

// ============================================================================
// TESTS
// ============================================================================
