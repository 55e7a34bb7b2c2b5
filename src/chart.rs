//! Bar chart renderer.
//!
//! Draws three labeled bars, a numeric Y axis with gridlines and the axis
//! lines onto a [`Surface`]: an immediate-mode 2D drawing API the host
//! provides. Coordinates are surface units with the origin top-left and y
//! growing downward.
//!
//! Geometry is computed by the pure [`layout`] function; [`BarChart::render`]
//! only turns a layout into draw calls.

use crate::assets::Icon;
use crate::types::{Category, Tally};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// An sRGB color with 8-bit alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Line color and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

// ============================================================================
// SURFACE
// ============================================================================

/// Host-provided 2D drawing surface of a fixed size.
pub trait Surface {
    /// Width and height in surface units.
    fn size(&self) -> (f64, f64);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Rgba);

    /// Advance width of `text` in surface units.
    fn measure_text(&self, text: &str) -> f64;

    /// Height of one text line in surface units.
    fn line_height(&self) -> f64;

    /// Draw `text` with its baseline-left corner at `at`.
    fn fill_text(&mut self, text: &str, at: Point, color: Rgba);

    /// Draw an icon with its top-left corner at `at`.
    fn draw_image(&mut self, icon: &Icon, at: Point);

    /// Size of an icon as drawn on this surface.
    fn image_size(&self, icon: &Icon) -> (f64, f64) {
        let width = icon
            .rows
            .iter()
            .map(|row| self.measure_text(row))
            .fold(0.0, f64::max);
        (width, icon.rows.len() as f64 * self.line_height())
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        color: Rgba,
    },
    Text {
        text: String,
        at: Point,
        color: Rgba,
    },
    Image {
        icon: Icon,
        at: Point,
    },
}

/// A surface that records draw calls instead of producing pixels.
///
/// Text metrics are monospace: every character advances `glyph_width`.
/// Hosts replay the commands onto their real surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    width: f64,
    height: f64,
    glyph_width: f64,
    line_height: f64,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl DrawList {
    /// Glyph advance approximating a 12px proportional font.
    pub const DEFAULT_GLYPH_WIDTH: f64 = 7.0;
    pub const DEFAULT_LINE_HEIGHT: f64 = 14.0;

    pub fn new(width: f64, height: f64) -> Self {
        Self::with_metrics(
            width,
            height,
            Self::DEFAULT_GLYPH_WIDTH,
            Self::DEFAULT_LINE_HEIGHT,
        )
    }

    pub fn with_metrics(width: f64, height: f64, glyph_width: f64, line_height: f64) -> Self {
        Self {
            width,
            height,
            glyph_width,
            line_height,
            commands: Vec::new(),
            clears: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many times the surface was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Filled rectangles in draw order.
    pub fn rects(&self) -> impl Iterator<Item = (&Point, f64, f64, &Rgba)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect {
                origin,
                width,
                height,
                color,
            } => Some((origin, *width, *height, color)),
            _ => None,
        })
    }

    /// Text strings in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Rgba) {
        self.commands.push(DrawCommand::Rect {
            origin,
            width,
            height,
            color,
        });
    }

    fn measure_text(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.glyph_width
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }

    fn fill_text(&mut self, text: &str, at: Point, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            color,
        });
    }

    fn draw_image(&mut self, icon: &Icon, at: Point) {
        self.commands.push(DrawCommand::Image {
            icon: icon.clone(),
            at,
        });
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Fixed chart constants. Nothing here is computed from the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub bar_width: f64,
    pub bar_gap: f64,
    /// Distance from the left edge to the Y axis.
    pub y_axis_margin: f64,
    /// Distance from the bottom edge to the X axis (category labels live here).
    pub bottom_margin: f64,
    /// Distance from the top edge to the top of the Y axis line.
    pub top_margin: f64,
    /// Distance from the right edge to the end of the X axis and gridlines.
    pub right_margin: f64,
    /// Number of gridline intervals on the Y axis.
    pub intervals: u32,
    /// Scale ceiling as a multiple of the largest count.
    pub headroom: f64,
    pub axis_width: f64,
    /// Axis and text color.
    pub ink: Rgba,
    pub grid: Rgba,
    /// One color per category, in chart order.
    pub bar_colors: [Rgba; 3],
}

impl ChartConfig {
    pub const DEFAULT_WIDTH: f64 = 500.0;
    pub const DEFAULT_HEIGHT: f64 = 300.0;

    /// Y coordinate of the X axis.
    pub fn baseline(&self) -> f64 {
        self.height - self.bottom_margin
    }

    /// Vertical space the bars may occupy.
    pub fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.bottom_margin).max(0.0)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            bar_width: 60.0,
            bar_gap: 50.0,
            y_axis_margin: 50.0,
            bottom_margin: 50.0,
            top_margin: 20.0,
            right_margin: 20.0,
            intervals: 5,
            headroom: 1.2,
            axis_width: 2.0,
            ink: Rgba::BLACK,
            grid: Rgba::rgba(200, 200, 200, 128),
            bar_colors: [
                Rgba::rgb(0xe7, 0x4c, 0x3c),
                Rgba::rgb(0x9b, 0x59, 0xb6),
                Rgba::rgb(0x34, 0x98, 0xdb),
            ],
        }
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Placement of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub category: Category,
    pub count: u32,
    /// Left edge.
    pub x: f64,
    /// Top edge (equals the baseline for a zero-height bar).
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One horizontal gridline and its axis label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gridline {
    pub y: f64,
    pub value: f64,
}

/// Everything [`BarChart::render`] draws, computed up front.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub baseline: f64,
    pub plot_height: f64,
    /// Value at the top gridline: `headroom × max(largest count, 1)`.
    pub scale_max: f64,
    /// Surface units per count.
    pub scale: f64,
    pub bars: [BarGeometry; 3],
    /// Bottom to top, `intervals + 1` entries.
    pub gridlines: Vec<Gridline>,
}

/// Compute bar, gridline and scale geometry for the given counts.
///
/// All-zero counts scale as if the largest count were 1.
pub fn layout(config: &ChartConfig, counts: [u32; 3]) -> ChartLayout {
    let baseline = config.baseline();
    let plot_height = config.plot_height();

    let largest = counts.iter().copied().max().unwrap_or(0).max(1);
    let scale_max = f64::from(largest) * config.headroom;
    let scale = plot_height / scale_max;

    let group_width = 3.0 * config.bar_width + 2.0 * config.bar_gap;
    let start_x = (config.width - group_width) / 2.0;

    let bars = Category::ALL.map(|category| {
        let i = category.index();
        let count = counts[i];
        let height = f64::from(count) * scale;
        BarGeometry {
            category,
            count,
            x: start_x + i as f64 * (config.bar_width + config.bar_gap),
            y: baseline - height,
            width: config.bar_width,
            height,
        }
    });

    let intervals = config.intervals.max(1);
    let gridlines = (0..=intervals)
        .map(|i| {
            let step = f64::from(i) / f64::from(intervals);
            Gridline {
                y: baseline - plot_height * step,
                value: scale_max * step,
            }
        })
        .collect();

    ChartLayout {
        baseline,
        plot_height,
        scale_max,
        scale,
        bars,
        gridlines,
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// The result bar chart.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BarChart {
    pub config: ChartConfig,
}

impl BarChart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Render a tally (Visual, Auditory, Tactile).
    pub fn render_tally<S: Surface + ?Sized>(&self, surface: &mut S, tally: &Tally) {
        self.render(surface, tally.counts());
    }

    /// Clear the surface and draw the full chart. Repeated calls replace
    /// the previous output entirely.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, counts: [u32; 3]) {
        let c = &self.config;
        let geometry = layout(c, counts);
        let baseline = geometry.baseline;
        let axis_end = c.width - c.right_margin;

        surface.clear();

        // Axes
        let axis = Stroke {
            color: c.ink,
            width: c.axis_width,
        };
        surface.stroke_line(
            Point::new(c.y_axis_margin, baseline),
            Point::new(axis_end, baseline),
            axis,
        );
        surface.stroke_line(
            Point::new(c.y_axis_margin, baseline),
            Point::new(c.y_axis_margin, c.top_margin),
            axis,
        );

        // Y labels and gridlines
        let grid = Stroke {
            color: c.grid,
            width: 1.0,
        };
        for line in &geometry.gridlines {
            surface.fill_text(
                &format!("{:.0}", line.value),
                Point::new(c.y_axis_margin - 30.0, line.y + 5.0),
                c.ink,
            );
            surface.stroke_line(
                Point::new(c.y_axis_margin, line.y),
                Point::new(axis_end, line.y),
                grid,
            );
        }

        // Bars with their category labels underneath
        for bar in &geometry.bars {
            surface.fill_rect(
                Point::new(bar.x, bar.y),
                bar.width,
                bar.height,
                c.bar_colors[bar.category.index()],
            );

            let label = bar.category.name();
            let label_x = bar.x + bar.width / 2.0 - surface.measure_text(label) / 2.0;
            surface.fill_text(label, Point::new(label_x, c.height - 30.0), c.ink);
        }
    }
}

/// Draw an icon centered on the surface, over whatever is already there.
pub fn draw_icon<S: Surface + ?Sized>(surface: &mut S, icon: &Icon) {
    let (width, height) = surface.size();
    let (icon_width, icon_height) = surface.image_size(icon);
    let at = Point::new((width - icon_width) / 2.0, (height - icon_height) / 2.0);
    surface.draw_image(icon, at);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(counts: [u32; 3]) -> DrawList {
        let chart = BarChart::default();
        let mut surface = DrawList::new(ChartConfig::DEFAULT_WIDTH, ChartConfig::DEFAULT_HEIGHT);
        chart.render(&mut surface, counts);
        surface
    }

    fn bar_heights(surface: &DrawList) -> Vec<f64> {
        surface.rects().map(|(_, _, h, _)| h).collect()
    }

    #[test]
    fn all_zero_counts_draw_three_flat_bars() {
        let surface = draw([0, 0, 0]);
        let heights = bar_heights(&surface);
        assert_eq!(heights, vec![0.0, 0.0, 0.0]);
        assert!(surface.rects().all(|(origin, _, _, _)| origin.y.is_finite()));
    }

    #[test]
    fn zero_counts_use_unit_scale() {
        let geometry = layout(&ChartConfig::default(), [0, 0, 0]);
        assert!(geometry.scale.is_finite());
        assert!((geometry.scale_max - 1.2).abs() < 1e-9);
    }

    #[test]
    fn single_category_fills_plot_below_headroom() {
        let config = ChartConfig::default();
        let surface = draw([14, 0, 0]);
        let heights = bar_heights(&surface);
        let full = config.plot_height() / config.headroom;
        assert!((heights[0] - full).abs() < 1e-9);
        assert_eq!(heights[1], 0.0);
        assert_eq!(heights[2], 0.0);
        assert!(heights[0] < config.plot_height());
    }

    #[test]
    fn bars_are_proportional() {
        let geometry = layout(&ChartConfig::default(), [5, 5, 4]);
        let [a, b, c] = geometry.bars;
        assert_eq!(a.height, b.height);
        assert!((c.height / a.height - 0.8).abs() < 1e-9);
    }

    #[test]
    fn bars_sit_on_the_baseline() {
        let config = ChartConfig::default();
        let geometry = layout(&config, [3, 8, 1]);
        for bar in geometry.bars {
            assert!((bar.y + bar.height - config.baseline()).abs() < 1e-9);
        }
    }

    #[test]
    fn bar_group_is_centered() {
        let config = ChartConfig::default();
        let geometry = layout(&config, [1, 2, 3]);
        let left = geometry.bars[0].x;
        let right = geometry.bars[2].x + geometry.bars[2].width;
        assert!((left - (config.width - right)).abs() < 1e-9);
        assert_eq!(geometry.bars[1].x - geometry.bars[0].x, 110.0);
    }

    #[test]
    fn six_gridlines_evenly_spaced_up_to_scale_max() {
        let config = ChartConfig::default();
        let geometry = layout(&config, [10, 0, 0]);
        assert_eq!(geometry.gridlines.len(), 6);
        assert_eq!(geometry.gridlines[0].y, config.baseline());
        assert_eq!(geometry.gridlines[0].value, 0.0);
        let top = geometry.gridlines[5];
        assert!((top.y - (config.baseline() - config.plot_height())).abs() < 1e-9);
        assert!((top.value - 12.0).abs() < 1e-9);
    }

    #[test]
    fn axis_labels_are_whole_numbers() {
        let surface = draw([10, 0, 0]);
        let labels: Vec<&str> = surface.texts().take(6).collect();
        assert_eq!(labels, vec!["0", "2", "5", "7", "10", "12"]);
    }

    #[test]
    fn category_labels_follow_bars() {
        let surface = draw([1, 1, 1]);
        let texts: Vec<&str> = surface.texts().collect();
        assert!(texts.ends_with(&["Visual", "Auditory", "Tactile"]));
    }

    #[test]
    fn category_label_is_centered_under_bar() {
        let config = ChartConfig::default();
        let surface = draw([1, 2, 3]);
        let geometry = layout(&config, [1, 2, 3]);
        let visual_at = surface
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { text, at, .. } if text == "Visual" => Some(*at),
                _ => None,
            })
            .unwrap();
        let bar = geometry.bars[0];
        let label_width = 6.0 * DrawList::DEFAULT_GLYPH_WIDTH;
        assert!((visual_at.x + label_width / 2.0 - (bar.x + bar.width / 2.0)).abs() < 1e-9);
        assert_eq!(visual_at.y, config.height - 30.0);
    }

    #[test]
    fn bars_use_category_colors() {
        let config = ChartConfig::default();
        let surface = draw([1, 2, 3]);
        let colors: Vec<Rgba> = surface.rects().map(|(_, _, _, c)| *c).collect();
        assert_eq!(colors, config.bar_colors.to_vec());
    }

    #[test]
    fn rerender_replaces_previous_output() {
        let chart = BarChart::default();
        let mut surface = DrawList::new(500.0, 300.0);
        chart.render(&mut surface, [9, 2, 3]);
        let once = surface.commands().len();
        chart.render(&mut surface, [1, 2, 3]);
        assert_eq!(surface.commands().len(), once);
        assert_eq!(surface.clears(), 2);
        assert_eq!(surface, draw([1, 2, 3]).with_clears(2));
    }

    #[test]
    fn render_tally_uses_chart_order() {
        let chart = BarChart::default();
        let mut surface = DrawList::new(500.0, 300.0);
        chart.render_tally(&mut surface, &Tally::new(0, 0, 7));
        let heights = bar_heights(&surface);
        assert_eq!(heights[0], 0.0);
        assert_eq!(heights[1], 0.0);
        assert!(heights[2] > 0.0);
    }

    #[test]
    fn icon_is_centered() {
        let mut surface = DrawList::new(500.0, 300.0);
        let icon = Icon {
            category: Category::Visual,
            rows: vec!["(o)(o)".to_string(), "  ^^  ".to_string()],
        };
        draw_icon(&mut surface, &icon);
        match &surface.commands()[0] {
            DrawCommand::Image { at, .. } => {
                assert_eq!(at.x, (500.0 - 6.0 * 7.0) / 2.0);
                assert_eq!(at.y, (300.0 - 2.0 * 14.0) / 2.0);
            }
            other => panic!("Expected Image, got {:?}", other),
        }
    }

    impl DrawList {
        fn with_clears(mut self, clears: usize) -> Self {
            self.clears = clears;
            self
        }
    }
}
