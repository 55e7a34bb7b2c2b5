//! Terminal drawing surface for the result chart.
//!
//! The chart renders into a [`DrawList`] sized in chart units; this widget
//! replays it onto a ratatui braille canvas scaled to the target area.
//! Chart coordinates grow downward, canvas coordinates upward, so every
//! y is flipped on the way through.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Widget};

use crate::chart::{ChartConfig, DrawCommand, DrawList, Point, Rgba, Surface};

use super::theme;

/// A draw list whose text metrics match one terminal cell in `area`.
pub fn surface_for(area: Rect, config: &ChartConfig) -> DrawList {
    let cols = f64::from(area.width.max(1));
    let rows = f64::from(area.height.max(1));
    DrawList::with_metrics(
        config.width,
        config.height,
        config.width / cols,
        config.height / rows,
    )
}

/// Replays a recorded chart onto the terminal.
pub struct ChartCanvas<'a> {
    commands: &'a DrawList,
    block: Option<Block<'a>>,
}

impl<'a> ChartCanvas<'a> {
    pub fn new(commands: &'a DrawList) -> Self {
        Self {
            commands,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for ChartCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.commands.size();
        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };
        // Two braille dot columns per cell; oversample so none is skipped
        let fill_step = width / (f64::from(inner.width.max(1)) * 4.0);
        let line_height = self.commands.line_height();
        let commands = self.commands.commands();

        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for command in commands {
                    replay(ctx, command, height, fill_step, line_height);
                }
            });
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}

fn replay(ctx: &mut Context, command: &DrawCommand, height: f64, fill_step: f64, line_height: f64) {
    let flip = |p: &Point| (p.x, height - p.y);

    match command {
        DrawCommand::Line { from, to, stroke } => {
            let (x1, y1) = flip(from);
            let (x2, y2) = flip(to);
            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, theme::to_color(stroke.color)));
        }
        DrawCommand::Rect {
            origin,
            width,
            height: rect_height,
            color,
        } => {
            if *rect_height <= 0.0 || *width <= 0.0 {
                return;
            }
            let (left, top) = flip(origin);
            let bottom = top - rect_height;
            let color = theme::to_color(*color);
            let mut x = left;
            while x <= left + width {
                ctx.draw(&CanvasLine::new(x, bottom, x, top, color));
                x += fill_step;
            }
        }
        DrawCommand::Text { text, at, color } => {
            let (x, y) = flip(at);
            ctx.print(x, y, Span::styled(text.clone(), text_style(*color)));
        }
        DrawCommand::Image { icon, at } => {
            for (i, row) in icon.rows.iter().enumerate() {
                let baseline = at.y + (i as f64 + 1.0) * line_height;
                let (x, y) = flip(&Point::new(at.x, baseline));
                ctx.print(x, y, Span::styled(row.clone(), theme::STYLE_IMPORTANT));
            }
        }
    }
}

fn text_style(color: Rgba) -> Style {
    Style::new().fg(theme::to_color(color))
}

// ============================================================================
// TESTS
// ============================================================================
