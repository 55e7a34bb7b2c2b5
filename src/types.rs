//! Domain types for style-quiz.
//!
//! Questions, answers, tallies and the configuration flags that switch the
//! optional result features on and off.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORIES
// ============================================================================

/// The learning-style classification every answer option maps to.
///
/// Declaration order is significant: it is the chart's bar order and the
/// tie-break order for the predominant style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Letter `a`.
    Visual,
    /// Letter `b`.
    Auditory,
    /// Letter `c`.
    Tactile,
}

impl Category {
    /// All categories in chart order.
    pub const ALL: [Category; 3] = [Category::Visual, Category::Auditory, Category::Tactile];

    /// The option letter that selects this category.
    pub fn letter(self) -> char {
        match self {
            Category::Visual => 'a',
            Category::Auditory => 'b',
            Category::Tactile => 'c',
        }
    }

    /// Parse an option letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<Category> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Category::Visual),
            'b' => Some(Category::Auditory),
            'c' => Some(Category::Tactile),
            _ => None,
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Visual => 0,
            Category::Auditory => 1,
            Category::Tactile => 2,
        }
    }

    /// Display name used for chart labels and the style label.
    pub fn name(self) -> &'static str {
        match self {
            Category::Visual => "Visual",
            Category::Auditory => "Auditory",
            Category::Tactile => "Tactile",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// QUESTIONS
// ============================================================================

/// One labeled answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    /// Category selected by this option; its letter is the option letter.
    pub category: Category,
    /// Label text shown next to the letter.
    pub label: String,
}

impl QuizOption {
    pub fn new(category: Category, label: impl Into<String>) -> Self {
        Self {
            category,
            label: label.into(),
        }
    }

    pub fn letter(&self) -> char {
        self.category.letter()
    }
}

/// An immutable multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: String,
    /// Ordered options.
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
        }
    }
}

// ============================================================================
// ANSWERS AND TALLY
// ============================================================================

/// Selected category per question index. Sparse until fully answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet(BTreeMap<usize, Category>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the answer for a question.
    pub fn record(&mut self, index: usize, category: Category) {
        self.0.insert(index, category);
    }

    pub fn get(&self, index: usize) -> Option<Category> {
        self.0.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count answers per category.
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for category in self.0.values() {
            tally.add(*category);
        }
        tally
    }
}

/// Answer counts per category, in chart order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub visual: u32,
    pub auditory: u32,
    pub tactile: u32,
}

impl Tally {
    pub fn new(visual: u32, auditory: u32, tactile: u32) -> Self {
        Self {
            visual,
            auditory,
            tactile,
        }
    }

    fn add(&mut self, category: Category) {
        match category {
            Category::Visual => self.visual += 1,
            Category::Auditory => self.auditory += 1,
            Category::Tactile => self.tactile += 1,
        }
    }

    pub fn count(&self, category: Category) -> u32 {
        match category {
            Category::Visual => self.visual,
            Category::Auditory => self.auditory,
            Category::Tactile => self.tactile,
        }
    }

    /// Counts in chart order.
    pub fn counts(&self) -> [u32; 3] {
        [self.visual, self.auditory, self.tactile]
    }

    pub fn total(&self) -> u32 {
        self.visual + self.auditory + self.tactile
    }

    /// Category with the highest count. Ties go to the earlier category.
    pub fn predominant(&self) -> Category {
        let mut best = Category::Visual;
        for category in Category::ALL {
            if self.count(category) > self.count(best) {
                best = category;
            }
        }
        best
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Optional result features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    /// Show a 0-100 progress indicator on every question.
    pub show_progress: bool,
    /// Load and overlay a per-category icon on the result chart.
    pub show_result_icon: bool,
    /// Name the predominant style on the result screen.
    pub show_style_label: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            show_result_icon: false,
            show_style_label: false,
        }
    }
}

/// Output format for non-interactive reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
