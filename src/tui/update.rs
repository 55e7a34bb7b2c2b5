//! App-level transitions around the quiz controller.
//!
//! The quiz decides what each action means. This layer adds what the host
//! owns: turning a rejection into a notice, asking for the result icon,
//! and folding background events back into the model. No I/O here; the
//! effects layer executes whatever [`Effect`] is returned.

use crate::assets::unavailable_notice;
use crate::quiz::{Render, Screen};
use crate::types::Category;

use super::state::{App, AppEvent, Command, Effect};

/// Apply a command to the app. Returns an effect for the caller to run.
pub fn handle_command(app: &mut App, command: Command) -> Option<Effect> {
    match command {
        Command::Quit => {
            app.should_quit = true;
            None
        }
        Command::Dismiss => {
            app.notice = None;
            None
        }
        Command::Quiz(action) => {
            let was_result = matches!(app.quiz.screen(), Screen::Result { .. });
            match app.quiz.dispatch(action) {
                Ok(Render::Result(view)) if !was_result => {
                    app.icon = None;
                    view.icon.map(Effect::LoadIcon)
                }
                Ok(_) => {
                    if was_result && !matches!(app.quiz.screen(), Screen::Result { .. }) {
                        app.icon = None;
                    }
                    None
                }
                Err(error) => {
                    app.notice = Some(error.to_string());
                    None
                }
            }
        }
    }
}

/// Handle events from background producers.
pub fn handle_background_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::IconLoaded(icon) => {
            // A retake may have happened while loading
            if awaited_icon(app) == Some(icon.category) {
                app.icon = Some(icon);
            }
        }
        AppEvent::IconFailed { category, reason } => {
            tracing::error!(%category, %reason, "result icon failed to load");
            if awaited_icon(app) == Some(category) {
                app.notice = Some(unavailable_notice(category));
            }
        }
        // Keys are routed through map_key before reaching here
        AppEvent::Key(_) => {}
    }
}

/// The icon the current result screen asked for, if any.
fn awaited_icon(app: &App) -> Option<Category> {
    match app.quiz.render() {
        Render::Result(view) => view.icon,
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Icon;
    use crate::bank::QuestionSet;
    use crate::quiz::{Action, Quiz};
    use crate::types::QuizConfig;

    fn app_with(config: QuizConfig) -> App {
        App::new(Quiz::new(QuestionSet::learning_style(), config))
    }

    fn answer_all_but_last(app: &mut App) {
        handle_command(app, Command::Quiz(Action::Start));
        for _ in 0..13 {
            handle_command(app, Command::Quiz(Action::Select(Category::Tactile)));
            handle_command(app, Command::Quiz(Action::Next));
        }
        handle_command(app, Command::Quiz(Action::Select(Category::Tactile)));
    }

    fn icon() -> Icon {
        icon_for(Category::Tactile)
    }

    fn icon_for(category: Category) -> Icon {
        Icon {
            category,
            rows: vec!["[]".to_string()],
        }
    }

    fn with_icon() -> QuizConfig {
        QuizConfig {
            show_result_icon: true,
            ..QuizConfig::default()
        }
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app_with(QuizConfig::default());
        assert_eq!(handle_command(&mut app, Command::Quit), None);
        assert!(app.should_quit);
    }

    #[test]
    fn rejected_next_raises_notice() {
        let mut app = app_with(QuizConfig::default());
        handle_command(&mut app, Command::Quiz(Action::Start));
        handle_command(&mut app, Command::Quiz(Action::Next));
        assert_eq!(
            app.notice.as_deref(),
            Some("Please select an option before proceeding.")
        );
        assert_eq!(app.quiz.position(), Some(0));
    }

    #[test]
    fn dismiss_clears_notice() {
        let mut app = app_with(QuizConfig::default());
        app.notice = Some("hello".to_string());
        handle_command(&mut app, Command::Dismiss);
        assert!(app.notice.is_none());
    }

    #[test]
    fn submit_requests_icon_when_enabled() {
        let mut app = app_with(with_icon());
        answer_all_but_last(&mut app);
        let effect = handle_command(&mut app, Command::Quiz(Action::Next));
        assert_eq!(effect, Some(Effect::LoadIcon(Category::Tactile)));
    }

    #[test]
    fn submit_requests_nothing_when_icon_disabled() {
        let mut app = app_with(QuizConfig::default());
        answer_all_but_last(&mut app);
        assert_eq!(handle_command(&mut app, Command::Quiz(Action::Next)), None);
        assert!(matches!(app.quiz.screen(), Screen::Result { .. }));
    }

    #[test]
    fn staying_on_result_does_not_reload_icon() {
        let mut app = app_with(with_icon());
        answer_all_but_last(&mut app);
        handle_command(&mut app, Command::Quiz(Action::Next));
        app.icon = Some(icon());
        assert_eq!(handle_command(&mut app, Command::Quiz(Action::Next)), None);
        assert!(app.icon.is_some());
    }

    #[test]
    fn retake_drops_icon() {
        let mut app = app_with(with_icon());
        answer_all_but_last(&mut app);
        handle_command(&mut app, Command::Quiz(Action::Next));
        handle_background_event(&mut app, AppEvent::IconLoaded(icon()));
        assert!(app.icon.is_some());

        handle_command(&mut app, Command::Quiz(Action::Retake));
        assert!(app.icon.is_none());
        assert_eq!(app.quiz.position(), Some(0));
    }

    #[test]
    fn late_icon_after_retake_is_ignored() {
        let mut app = app_with(QuizConfig::default());
        handle_command(&mut app, Command::Quiz(Action::Start));
        handle_background_event(&mut app, AppEvent::IconLoaded(icon()));
        assert!(app.icon.is_none());
    }

    #[test]
    fn icon_failure_shows_notice_on_result() {
        let mut app = app_with(with_icon());
        answer_all_but_last(&mut app);
        handle_command(&mut app, Command::Quiz(Action::Next));
        handle_background_event(
            &mut app,
            AppEvent::IconFailed {
                category: Category::Tactile,
                reason: "missing".to_string(),
            },
        );
        assert_eq!(
            app.notice.as_deref(),
            Some("Error: Could not load image for Tactile processing style.")
        );
        assert!(matches!(app.quiz.screen(), Screen::Result { .. }));
    }

    #[test]
    fn icon_for_another_style_is_dropped() {
        let mut app = app_with(with_icon());
        answer_all_but_last(&mut app);
        let effect = handle_command(&mut app, Command::Quiz(Action::Next));
        assert_eq!(effect, Some(Effect::LoadIcon(Category::Tactile)));

        handle_background_event(&mut app, AppEvent::IconLoaded(icon_for(Category::Visual)));
        assert!(app.icon.is_none());

        handle_background_event(&mut app, AppEvent::IconLoaded(icon()));
        assert_eq!(app.icon.map(|i| i.category), Some(Category::Tactile));
    }

    #[test]
    fn failure_for_another_style_raises_no_notice() {
        let mut app = app_with(with_icon());
        answer_all_but_last(&mut app);
        handle_command(&mut app, Command::Quiz(Action::Next));
        handle_background_event(
            &mut app,
            AppEvent::IconFailed {
                category: Category::Auditory,
                reason: "missing".to_string(),
            },
        );
        assert!(app.notice.is_none());
    }

    #[test]
    fn icon_is_dropped_when_disabled() {
        let mut app = app_with(QuizConfig::default());
        answer_all_but_last(&mut app);
        handle_command(&mut app, Command::Quiz(Action::Next));
        handle_background_event(&mut app, AppEvent::IconLoaded(icon()));
        assert!(app.icon.is_none());
    }
}
