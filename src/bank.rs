//! The fixed question set.
//!
//! Questions are built once at startup and never mutated. Every option
//! letter maps to a [`Category`]: `a` Visual, `b` Auditory, `c` Tactile.

use serde::Serialize;

use crate::quiz::QuizError;
use crate::types::{Category, Question, QuizOption};

/// Prompt and the three option labels (a, b, c) of each question.
const LEARNING_STYLE: [(&str, [&str; 3]); 14] = [
    (
        "If I have to learn how to do something, I learn best when I:",
        [
            "Watch someone show me how.",
            "Hear someone tell me how.",
            "Try to do it myself.",
        ],
    ),
    (
        "When I read, I often find that I:",
        [
            "Visualize what I am reading in my mind's eye.",
            "Read out loud or hear the words inside my head.",
            "Fidget and try to 'feel' the content.",
        ],
    ),
    (
        "When asked to give directions, I:",
        [
            "See the actual places in my mind as I say them or prefer to draw them.",
            "Have no difficulty in giving them verbally.",
            "Have to point or move my body as I give them.",
        ],
    ),
    (
        "If I am unsure how to write something, I:",
        [
            "Write it in order to determine if it looks right.",
            "Spell it out loud in order to determine if it sounds right.",
            "Write it in order to determine if it feels right.",
        ],
    ),
    (
        "When I write I:",
        [
            "Am concerned with how neat and well-spaced my letters and words appear.",
            "Often say the letters and words to myself.",
            "Push hard on my pen or pencil and can feel the flow of the words.",
        ],
    ),
    (
        "If I had to remember a list of items, I would remember it best if:",
        [
            "Wrote them down.",
            "Said them over and over to myself.",
            "Move around and used my fingers to name each item.",
        ],
    ),
    (
        "I prefer teachers who:",
        [
            "Use a board or overhead projector while they lecture.",
            "Talk with lots of expression.",
            "Use hands-on activities.",
        ],
    ),
    (
        "When trying to concentrate, I have a difficult time when:",
        [
            "There is a lot of clutter or movement in the room.",
            "There is a lot of noise in the room.",
            "I have to sit still for any length of time.",
        ],
    ),
    (
        "When solving a problem, I:",
        [
            "Write or draw diagrams to see it.",
            "Talk myself through it.",
            "Use my entire body or move objects to help me think.",
        ],
    ),
    (
        "When given written instructions on how to build something, I:",
        [
            "Read them silently and try to visualize how the parts will fit together.",
            "Read them out loud and talk to myself as I put the part together.",
            "Try to put the parts together first and read later.",
        ],
    ),
    (
        "To keep occupied while waiting, I:",
        [
            "Look around, stare, or read.",
            "Talk or listen to others.",
            "Walk around, manipulate things with my hands, or move/shake my feet as I sit.",
        ],
    ),
    (
        "If I had to verbally describe something to another person, I would:",
        [
            "Be brief because I do not like to talk at length.",
            "Go into great detail because I like to talk.",
            "Gesture and move around while talking.",
        ],
    ),
    (
        "If someone were verbally describing something to another person, I would:",
        [
            "Try to visualize what he/she was saying.",
            "Enjoy listening but want to interrupt and talk myself.",
            "Become bored if her/his description got too long and detailed.",
        ],
    ),
    (
        "When trying to recall names, I remember:",
        [
            "Faces but forget names.",
            "Names but forget faces.",
            "The situation where I met the person rather than the person's name or face.",
        ],
    ),
];

/// A non-empty, ordered sequence of questions, each with at least one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet(Vec<Question>);

impl QuestionSet {
    /// Validate and wrap a question list.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        if let Some(index) = questions.iter().position(|q| q.options.is_empty()) {
            return Err(QuizError::NoOptions { index });
        }
        Ok(Self(questions))
    }

    /// The 14-question learning-style assessment.
    pub fn learning_style() -> Self {
        let questions = LEARNING_STYLE
            .iter()
            .map(|(prompt, labels)| {
                let options = Category::ALL
                    .iter()
                    .zip(labels.iter())
                    .map(|(category, label)| QuizOption::new(*category, *label))
                    .collect();
                Question::new(*prompt, options)
            })
            .collect();
        Self(questions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.0.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.0.iter()
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::learning_style()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learning_style_has_fourteen_questions() {
        let set = QuestionSet::learning_style();
        assert_eq!(set.len(), 14);
        assert!(!set.is_empty());
        assert_eq!(set.last_index(), 13);
    }

    #[test]
    fn every_question_offers_one_option_per_category_in_order() {
        for question in QuestionSet::learning_style().iter() {
            let letters: Vec<char> = question.options.iter().map(|o| o.letter()).collect();
            assert_eq!(letters, vec!['a', 'b', 'c']);
        }
    }

    #[test]
    fn first_question_matches_bank() {
        let set = QuestionSet::learning_style();
        let first = set.get(0).unwrap();
        assert!(first.prompt.starts_with("If I have to learn"));
        assert_eq!(first.options[2].label, "Try to do it myself.");
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(QuestionSet::new(vec![]), Err(QuizError::EmptyQuestionSet));
    }

    #[test]
    fn question_without_options_is_rejected() {
        let questions = vec![
            Question::new("ok", vec![QuizOption::new(Category::Visual, "x")]),
            Question::new("broken", vec![]),
        ];
        assert_eq!(
            QuestionSet::new(questions),
            Err(QuizError::NoOptions { index: 1 })
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_value(QuestionSet::learning_style()).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 14);
        assert_eq!(array[0]["options"][0]["category"], "visual");
    }
}
