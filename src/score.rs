//! Non-interactive scoring: run a whole answer string through a session.

use thiserror::Error;

use crate::quiz::{Quiz, QuizError};
use crate::types::{Category, Tally};

/// Errors emitted when scoring an answer string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("expected {expected} answers, got {found}")]
    Length { expected: usize, found: usize },
    #[error("answer {index} is '{letter}', expected one of a, b, c")]
    InvalidLetter { index: usize, letter: char },
    #[error("answers ended on the {screen} screen instead of the result")]
    Unfinished { screen: &'static str },
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Parse one letter per question, ignoring whitespace and commas, so
/// `abcab`, `a b c a b` and `a,b,c,a,b` are equivalent.
pub fn parse_answers(input: &str) -> Result<Vec<Category>, ScoreError> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .enumerate()
        .map(|(index, letter)| {
            Category::from_letter(letter).ok_or(ScoreError::InvalidLetter {
                index: index + 1,
                letter,
            })
        })
        .collect()
}

/// Answer every question of a fresh session in order and submit.
///
/// The quiz is reset first and left on the result screen.
pub fn score(quiz: &mut Quiz, input: &str) -> Result<Tally, ScoreError> {
    let answers = parse_answers(input)?;
    let expected = quiz.questions().len();
    if answers.len() != expected {
        return Err(ScoreError::Length {
            expected,
            found: answers.len(),
        });
    }

    quiz.reset();
    quiz.start()?;
    for category in answers {
        quiz.select_answer(category)?;
        quiz.next()?;
    }

    quiz.tally().ok_or(ScoreError::Unfinished {
        screen: quiz.screen().name(),
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionSet;
    use crate::types::{Question, QuizConfig, QuizOption};

    #[test]
    fn parses_separated_letters() {
        let plain = parse_answers("abc").unwrap();
        assert_eq!(plain, parse_answers("a, b, c").unwrap());
        assert_eq!(plain, parse_answers("A B C").unwrap());
    }

    #[test]
    fn rejects_unknown_letter_with_position() {
        assert_eq!(
            parse_answers("abx"),
            Err(ScoreError::InvalidLetter {
                index: 3,
                letter: 'x'
            })
        );
    }

    #[test]
    fn scores_cyclic_answers() {
        let mut quiz = Quiz::default();
        let tally = score(&mut quiz, "abcabcabcabcab").unwrap();
        assert_eq!(tally, Tally::new(5, 5, 4));
    }

    #[test]
    fn scores_uniform_answers() {
        let mut quiz = Quiz::default();
        assert_eq!(score(&mut quiz, &"a".repeat(14)).unwrap(), Tally::new(14, 0, 0));
    }

    #[test]
    fn rejects_wrong_length() {
        let mut quiz = Quiz::default();
        assert_eq!(
            score(&mut quiz, "abc"),
            Err(ScoreError::Length {
                expected: 14,
                found: 3
            })
        );
    }

    #[test]
    fn rescoring_the_same_quiz_starts_over() {
        let mut quiz = Quiz::default();
        score(&mut quiz, &"c".repeat(14)).unwrap();
        let tally = score(&mut quiz, &"b".repeat(14)).unwrap();
        assert_eq!(tally, Tally::new(0, 14, 0));
    }

    #[test]
    fn answer_missing_from_question_is_an_error() {
        let questions = QuestionSet::new(vec![Question::new(
            "Only one way:",
            vec![QuizOption::new(Category::Visual, "Look.")],
        )])
        .unwrap();
        let mut quiz = Quiz::new(questions, QuizConfig::default());
        assert_eq!(
            score(&mut quiz, "b"),
            Err(ScoreError::Quiz(QuizError::SelectionRequired))
        );
        assert_eq!(quiz.tally(), None);
    }
}
