//! Pure rendering: map App state to ratatui widget trees.
//!
//! The quiz hands us a [`Render`] instruction; each variant has a dedicated
//! render function. Widget-building is pure (state in, widgets out); the
//! only effect is Frame::render_widget() writing to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Gauge, Paragraph, Wrap};

use crate::assets::Icon;
use crate::chart::{BarChart, draw_icon};
use crate::quiz::{QuestionView, Render, ResultView};

use super::canvas::{ChartCanvas, surface_for};
use super::state::App;
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    let instruction = app.quiz.render();

    frame.render_widget(render_title(&instruction), chunks[0]);
    frame.render_widget(render_help(&instruction), chunks[2]);

    let content_area = chunks[1];
    match &instruction {
        Render::Intro { question_count } => render_intro(*question_count, frame, content_area),
        Render::Question(view) => render_question(view, frame, content_area),
        Render::Result(view) => render_result(view, app.icon.as_ref(), frame, content_area),
    }

    if let Some(notice) = &app.notice {
        render_notice(notice, frame, area);
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name and screen-specific context.
fn render_title(instruction: &Render) -> Paragraph<'static> {
    let title_text = match instruction {
        Render::Intro { .. } => "Learning Style Quiz".to_string(),
        Render::Question(view) => format!("Question {} of {}", view.index + 1, view.count),
        Render::Result(_) => "Your Results".to_string(),
    };

    Paragraph::new(Line::from(vec![Span::styled(title_text, theme::STYLE_TITLE)]))
}

/// Help line showing available keybindings for the current screen.
fn render_help(instruction: &Render) -> Paragraph<'static> {
    let help_text = match instruction {
        Render::Intro { .. } => "[Enter] begin  [q] quit",
        Render::Question(_) => "[a/b/c] choose  [Enter/→] next  [←] back  [q] quit",
        Render::Result(_) => "[r] retake  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

/// Modal notice centered over everything else.
fn render_notice(notice: &str, frame: &mut Frame, area: Rect) {
    let popup = centered(area, 56, 5);
    let text = vec![
        Line::from(Span::styled(notice.to_string(), theme::STYLE_WARNING)),
        Line::from(""),
        Line::from(Span::styled("Press any key to continue", theme::STYLE_HELP)),
    ];
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(" Notice "));

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// A `width × height` rectangle centered in `area`, clipped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

// ============================================================================
// SCREEN: INTRO
// ============================================================================

fn render_intro(question_count: usize, frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  What kind of learner are you?",
            theme::STYLE_IMPORTANT,
        )),
        Line::from(""),
        Line::from(format!(
            "  {} questions. For each one, pick the answer that fits you best.",
            question_count
        )),
        Line::from("  Your answers are tallied as Visual, Auditory or Tactile."),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Press "),
            Span::styled("[Enter]", theme::STYLE_INTERACTIVE),
            Span::raw(" to begin."),
        ]),
    ];

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: QUESTION
// ============================================================================

fn render_question(view: &QuestionView, frame: &mut Frame, area: Rect) {
    let progress_height = if view.progress.is_some() { 1 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(progress_height), // progress
        Constraint::Min(0),                  // question card
        Constraint::Length(1),               // navigation
    ])
    .split(area);

    if let Some(percent) = view.progress {
        let gauge = Gauge::default()
            .gauge_style(theme::STYLE_PROGRESS)
            .percent(percent.min(100))
            .label(format!("{}%", percent));
        frame.render_widget(gauge, chunks[0]);
    }

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", view.prompt),
            theme::STYLE_IMPORTANT,
        )),
        Line::from(""),
    ];

    for option in &view.options {
        let (marker, style) = if option.selected {
            ("(•)", theme::STYLE_CHOSEN)
        } else {
            ("( )", theme::STYLE_UNCHOSEN)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{} ", marker), style),
            Span::styled(format!("{}. ", option.letter), theme::STYLE_INTERACTIVE),
            Span::styled(option.label.clone(), style),
        ]));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(card, chunks[1]);

    frame.render_widget(render_navigation(view), chunks[2]);
}

/// Back and advance controls. Back is dimmed when disabled.
fn render_navigation(view: &QuestionView) -> Paragraph<'static> {
    let back_style = if view.back_enabled {
        theme::STYLE_BUTTON
    } else {
        theme::STYLE_DIM
    };

    Paragraph::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(" ← Back ", back_style),
        Span::raw("   "),
        Span::styled(format!(" {} → ", view.advance.label()), theme::STYLE_BUTTON),
    ]))
}

// ============================================================================
// SCREEN: RESULT
// ============================================================================

fn render_result(view: &ResultView, icon: Option<&Icon>, frame: &mut Frame, area: Rect) {
    let label_height = if view.style_label.is_some() { 2 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(label_height), // predominant style
        Constraint::Min(0),               // chart
    ])
    .split(area);

    if let Some(style) = view.style_label {
        let line = Line::from(vec![
            Span::raw("  Your predominant style: "),
            Span::styled(style.name(), theme::STYLE_IMPORTANT),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[0]);
    }

    let block = Block::bordered().title(format!(
        " Visual {} · Auditory {} · Tactile {} ",
        view.tally.visual, view.tally.auditory, view.tally.tactile
    ));
    let chart_area = chunks[1];

    let config = theme::chart_config();
    let mut surface = surface_for(block.inner(chart_area), &config);
    BarChart::new(config).render_tally(&mut surface, &view.tally);
    // Drawn after the chart, so it sits on top
    if let Some(icon) = icon {
        draw_icon(&mut surface, icon);
    }

    frame.render_widget(ChartCanvas::new(&surface).block(block), chart_area);
}

// ============================================================================
// TESTS
// ============================================================================
