//! Render instructions: host-independent view models derived from a Screen.
//!
//! A host adapter (the terminal UI, a test, anything else) draws these.
//! Nothing here knows how pixels or cells are produced.

use crate::bank::QuestionSet;
use crate::types::{AnswerSet, Category, QuizConfig, Tally};

use super::state::Screen;

/// Label of the advance control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Continuation: another question follows.
    Next,
    /// Terminal: this is the last question.
    Submit,
}

impl Advance {
    pub fn label(self) -> &'static str {
        match self {
            Advance::Next => "Next",
            Advance::Submit => "Submit",
        }
    }
}

/// One option as it should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub letter: char,
    pub label: String,
    pub selected: bool,
}

/// Everything needed to draw the question screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// Zero-based position.
    pub index: usize,
    pub count: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    /// Previously saved selection for this question, if any.
    pub selected: Option<Category>,
    /// Back is disabled exactly at position 0.
    pub back_enabled: bool,
    pub advance: Advance,
    /// 0-100, only when the progress indicator is enabled.
    pub progress: Option<u16>,
}

/// Everything needed to draw the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultView {
    pub tally: Tally,
    /// Predominant style, only when the style label is enabled.
    pub style_label: Option<Category>,
    /// Icon to overlay, only when the result icon is enabled.
    pub icon: Option<Category>,
}

/// The render instruction returned by every controller operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    Intro { question_count: usize },
    Question(QuestionView),
    Result(ResultView),
}

/// Derive the render instruction for a screen.
pub fn render(screen: &Screen, questions: &QuestionSet, config: &QuizConfig) -> Render {
    match screen {
        Screen::Intro => Render::Intro {
            question_count: questions.len(),
        },
        Screen::InProgress { position, answers } => {
            Render::Question(question_view(*position, answers, questions, config))
        }
        Screen::Result { tally } => Render::Result(result_view(*tally, config)),
    }
}

/// Progress on a 0-100 scale for the question at `position`.
pub fn progress_percent(position: usize, count: usize) -> u16 {
    if count == 0 {
        return 0;
    }
    let ratio = (position + 1) as f64 / count as f64;
    (ratio * 100.0).round().min(100.0) as u16
}

fn question_view(
    position: usize,
    answers: &AnswerSet,
    questions: &QuestionSet,
    config: &QuizConfig,
) -> QuestionView {
    let last = questions.last_index();
    let index = position.min(last);
    let selected = answers.get(index);

    let (prompt, options) = match questions.get(index) {
        Some(question) => (
            question.prompt.clone(),
            question
                .options
                .iter()
                .map(|o| OptionView {
                    letter: o.letter(),
                    label: o.label.clone(),
                    selected: selected == Some(o.category),
                })
                .collect(),
        ),
        None => (String::new(), Vec::new()),
    };

    QuestionView {
        index,
        count: questions.len(),
        prompt,
        options,
        selected,
        back_enabled: index > 0,
        advance: if index == last {
            Advance::Submit
        } else {
            Advance::Next
        },
        progress: config
            .show_progress
            .then(|| progress_percent(index, questions.len())),
    }
}

fn result_view(tally: Tally, config: &QuizConfig) -> ResultView {
    let predominant = tally.predominant();
    ResultView {
        tally,
        style_label: config.show_style_label.then_some(predominant),
        icon: config.show_result_icon.then_some(predominant),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn question_at(position: usize, answers: AnswerSet, config: QuizConfig) -> QuestionView {
        let screen = Screen::InProgress { position, answers };
        match render(&screen, &QuestionSet::learning_style(), &config) {
            Render::Question(view) => view,
            other => panic!("Expected Question, got {:?}", other),
        }
    }

    #[test]
    fn intro_reports_question_count() {
        let render = render(
            &Screen::Intro,
            &QuestionSet::learning_style(),
            &QuizConfig::default(),
        );
        assert_eq!(render, Render::Intro { question_count: 14 });
    }

    #[test]
    fn first_question_disables_back_and_says_next() {
        let view = question_at(0, AnswerSet::new(), QuizConfig::default());
        assert!(!view.back_enabled);
        assert_eq!(view.advance, Advance::Next);
        assert_eq!(view.options.len(), 3);
        assert!(view.options.iter().all(|o| !o.selected));
    }

    #[test]
    fn last_question_says_submit() {
        let view = question_at(13, AnswerSet::new(), QuizConfig::default());
        assert!(view.back_enabled);
        assert_eq!(view.advance, Advance::Submit);
        assert_eq!(view.advance.label(), "Submit");
    }

    #[test]
    fn middle_question_enables_back_and_says_next() {
        let view = question_at(6, AnswerSet::new(), QuizConfig::default());
        assert!(view.back_enabled);
        assert_eq!(view.advance.label(), "Next");
    }

    #[test]
    fn saved_selection_is_marked() {
        let mut answers = AnswerSet::new();
        answers.record(5, Category::Auditory);
        let view = question_at(5, answers, QuizConfig::default());
        assert_eq!(view.selected, Some(Category::Auditory));
        let marked: Vec<char> = view
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.letter)
            .collect();
        assert_eq!(marked, vec!['b']);
    }

    #[test]
    fn progress_tracks_position() {
        assert_eq!(progress_percent(0, 14), 7);
        assert_eq!(progress_percent(6, 14), 50);
        assert_eq!(progress_percent(13, 14), 100);
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn progress_absent_when_disabled() {
        let config = QuizConfig {
            show_progress: false,
            ..QuizConfig::default()
        };
        assert_eq!(question_at(3, AnswerSet::new(), config).progress, None);
        assert_eq!(
            question_at(13, AnswerSet::new(), QuizConfig::default()).progress,
            Some(100)
        );
    }

    #[test]
    fn result_features_follow_config() {
        let screen = Screen::Result {
            tally: Tally::new(2, 9, 3),
        };
        let questions = QuestionSet::learning_style();

        let plain = render(&screen, &questions, &QuizConfig::default());
        assert_eq!(
            plain,
            Render::Result(ResultView {
                tally: Tally::new(2, 9, 3),
                style_label: None,
                icon: None,
            })
        );

        let all = QuizConfig {
            show_progress: true,
            show_result_icon: true,
            show_style_label: true,
        };
        match render(&screen, &questions, &all) {
            Render::Result(view) => {
                assert_eq!(view.style_label, Some(Category::Auditory));
                assert_eq!(view.icon, Some(Category::Auditory));
            }
            other => panic!("Expected Result, got {:?}", other),
        }
    }
}
