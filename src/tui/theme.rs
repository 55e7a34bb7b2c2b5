//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer.
//!
//! Color semantics:
//! - Green: the chosen option
//! - Yellow: notices that need acknowledging
//! - Cyan: interactive elements (keybinding hints, progress)
//! - Dim: disabled controls and de-emphasized text
//! - Bold: the question prompt and result counts

use ratatui::style::{Color, Modifier, Style};

use crate::chart::{ChartConfig, Rgba};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Warning / attention needed: yellow.
pub const STYLE_WARNING: Style = Style::new().fg(Color::Yellow);

/// Interactive element / keybinding hint: cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text and disabled controls: dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text: bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Option the user picked.
pub const STYLE_CHOSEN: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Option not picked.
pub const STYLE_UNCHOSEN: Style = Style::new();

/// Enabled navigation control.
pub const STYLE_BUTTON: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Progress bar fill.
pub const STYLE_PROGRESS: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// CHART
// ============================================================================

/// Chart constants for a dark terminal: light ink, dim gridlines.
pub fn chart_config() -> ChartConfig {
    ChartConfig {
        ink: Rgba::WHITE,
        grid: Rgba::rgb(90, 90, 90),
        ..ChartConfig::default()
    }
}

/// Map a chart color to a terminal color. Alpha is dropped.
pub fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

// ============================================================================
// TESTS
// ============================================================================
