//! TUI module for the interactive quiz.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, AppEvent, Command, Effect)
//! - `update`: Pure transitions around the quiz controller
//! - `view`: Pure rendering of the quiz render instructions
//! - `canvas`: Chart surface replayed onto a braille canvas
//! - `theme`: Styles and chart colors
//! - `run`: Effects (terminal, threads, event loop)

pub mod canvas;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
