//! style-quiz: Learning-style self-assessment quiz with a bar chart of the results.

pub mod assets;
pub mod bank;
pub mod chart;
pub mod quiz;
pub mod report;
pub mod score;
pub mod tui;
pub mod types;
