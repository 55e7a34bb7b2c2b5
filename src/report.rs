//! Report formatting for quiz results and the question set.
//!
//! Pure functions: (data, OutputFormat) → String. No I/O.

use serde::Serialize;

use crate::bank::QuestionSet;
use crate::types::{Category, OutputFormat, Tally};

/// Width of the longest text bar in the human report.
const BAR_COLUMNS: u32 = 40;

/// A finished session, ready to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultReport {
    pub tally: Tally,
    pub total: u32,
    /// Present only when the style label is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predominant: Option<Category>,
}

impl ResultReport {
    pub fn new(tally: Tally, show_style_label: bool) -> Self {
        Self {
            tally,
            total: tally.total(),
            predominant: show_style_label.then(|| tally.predominant()),
        }
    }
}

/// Format a result report for output.
pub fn format_report(report: &ResultReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => to_json(report),
    }
}

/// Format the question set for output.
pub fn format_questions(questions: &QuestionSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => {
            let mut out = String::new();
            for (i, question) in questions.iter().enumerate() {
                out.push_str(&format!("{:>2}. {}\n", i + 1, question.prompt));
                for option in &question.options {
                    out.push_str(&format!("    {}. {}\n", option.letter(), option.label));
                }
                out.push('\n');
            }
            out
        }
        OutputFormat::Json => to_json(questions),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(report: &ResultReport) -> String {
    let mut out = String::new();

    out.push_str("=== Results ===\n");
    let largest = report.tally.counts().into_iter().max().unwrap_or(0).max(1);
    for category in Category::ALL {
        let count = report.tally.count(category);
        let columns = (count * BAR_COLUMNS / largest) as usize;
        out.push_str(&format!(
            "{:<9} {:>2} {}\n",
            category.name(),
            count,
            "█".repeat(columns)
        ));
    }
    out.push('\n');

    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Questions answered: {}\n", report.total));
    if let Some(style) = report.predominant {
        out.push_str(&format!("Predominant style:  {}\n", style));
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // Our types always serialize; fail loudly if that ever changes
        panic!("Failed to serialize to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
