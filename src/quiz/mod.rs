//! Quiz controller.
//!
//! Organized like the terminal host:
//! - `state`: pure data types (Screen, Action, Transition)
//! - `update`: pure transitions
//! - `render`: pure view models handed to whatever host draws them
//!
//! [`Quiz`] owns one session and applies transitions to it. Independent
//! instances share nothing.

pub mod render;
pub mod state;
pub mod update;

use thiserror::Error;

use crate::bank::QuestionSet;
use crate::types::{AnswerSet, Category, QuizConfig, Tally};

pub use render::{Advance, OptionView, QuestionView, Render, ResultView};
pub use state::{Action, Screen, Transition};
pub use update::update;

/// Errors emitted by the quiz controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Advancing without an answer for the current question.
    #[error("Please select an option before proceeding.")]
    SelectionRequired,
    #[error("question set is empty")]
    EmptyQuestionSet,
    #[error("question {index} has no options")]
    NoOptions { index: usize },
}

/// One quiz session with an explicit lifecycle: `new`, `start`, `reset`.
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: QuestionSet,
    config: QuizConfig,
    screen: Screen,
}

impl Quiz {
    /// Create a controller on the intro screen.
    pub fn new(questions: QuestionSet, config: QuizConfig) -> Self {
        Self {
            questions,
            config,
            screen: Screen::Intro,
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Current position, only while answering.
    pub fn position(&self) -> Option<usize> {
        match &self.screen {
            Screen::InProgress { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Current answers, only while answering.
    pub fn answers(&self) -> Option<&AnswerSet> {
        match &self.screen {
            Screen::InProgress { answers, .. } => Some(answers),
            _ => None,
        }
    }

    /// Final tally, only on the result screen.
    pub fn tally(&self) -> Option<Tally> {
        match &self.screen {
            Screen::Result { tally } => Some(*tally),
            _ => None,
        }
    }

    /// Apply one action and return what to draw next.
    ///
    /// A rejected action leaves the session exactly as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<Render, QuizError> {
        let before = self.screen.name();
        let screen = std::mem::take(&mut self.screen);

        match update(screen, &action, &self.questions) {
            Transition::Screen(next) => {
                if next.name() != before {
                    tracing::info!(from = before, to = next.name(), "screen transition");
                }
                if let Screen::Result { tally } = &next {
                    if before != "result" {
                        tracing::info!(
                            visual = tally.visual,
                            auditory = tally.auditory,
                            tactile = tally.tactile,
                            "quiz submitted"
                        );
                    }
                }
                self.screen = next;
                Ok(self.render())
            }
            Transition::Rejected { screen, error } => {
                tracing::debug!(?action, %error, "action rejected");
                self.screen = screen;
                Err(error)
            }
        }
    }

    pub fn start(&mut self) -> Result<Render, QuizError> {
        self.dispatch(Action::Start)
    }

    pub fn select_answer(&mut self, category: Category) -> Result<Render, QuizError> {
        self.dispatch(Action::Select(category))
    }

    pub fn next(&mut self) -> Result<Render, QuizError> {
        self.dispatch(Action::Next)
    }

    pub fn previous(&mut self) -> Result<Render, QuizError> {
        self.dispatch(Action::Previous)
    }

    pub fn retake(&mut self) -> Result<Render, QuizError> {
        self.dispatch(Action::Retake)
    }

    /// Back to the freshly created state.
    pub fn reset(&mut self) {
        self.screen = Screen::Intro;
    }

    /// Render instruction for the current screen.
    pub fn render(&self) -> Render {
        render::render(&self.screen, &self.questions, &self.config)
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(QuestionSet::learning_style(), QuizConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
