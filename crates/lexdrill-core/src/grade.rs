//! Answer evaluation.
//!
//! Grading is a pure, total function: every well-formed item and any
//! response produce a verdict, and no comparison ever fails. The
//! caller forwards the score delta to the mastery tracker.

use serde::{Deserialize, Serialize};

use crate::model::{ExerciseItem, QuestionForm};

/// Mastery points awarded for a correct answer.
pub const CORRECT_DELTA: i32 = 10;
/// Mastery points deducted for an incorrect answer.
pub const INCORRECT_DELTA: i32 = -5;

/// A learner's submitted response to one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// The id of the chosen option (choice-based forms).
    Selected(String),
    /// Free text (typed and written forms).
    Typed(String),
}

/// The outcome of grading one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    /// Flat reward: +10 correct, −5 incorrect, 0 for review cards.
    pub score_delta: i32,
}

/// Grade `response` against `item`.
///
/// A response variant that does not match the item's form (a typed
/// answer to a multiple-choice question, say) counts as incorrect.
/// Review cards are never graded and always come back correct with a
/// zero delta.
pub fn evaluate(item: &ExerciseItem, response: &Response) -> Verdict {
    if item.form == QuestionForm::Review {
        return Verdict {
            correct: true,
            score_delta: 0,
        };
    }

    let correct = match (item.form, response) {
        (
            QuestionForm::ImageToWord | QuestionForm::WordToImage | QuestionForm::ClozeChoice,
            Response::Selected(id),
        ) => *id == item.correct.id,
        (QuestionForm::ClozeTyped | QuestionForm::ComposeSentence, Response::Typed(text)) => {
            contains_whole_word(text, &item.correct.term)
        }
        (QuestionForm::TermToDefinition, Response::Typed(text)) => {
            normalize(text) == normalize(&item.correct.term)
        }
        (QuestionForm::DefinitionToTerm, Response::Typed(text)) => {
            normalize(text) == normalize(&item.correct.definition)
        }
        _ => false,
    };

    Verdict {
        correct,
        score_delta: if correct { CORRECT_DELTA } else { INCORRECT_DELTA },
    }
}

/// The expected answer text for typed forms, for feedback display.
pub fn expected_answer(item: &ExerciseItem) -> &str {
    match item.form {
        QuestionForm::DefinitionToTerm => &item.correct.definition,
        _ => &item.correct.term,
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Whole-word containment: `word` must appear in `text` as a
/// delimited token, not as a substring of a longer word. Both sides
/// are lowercased and trimmed first. Multi-word terms match across
/// token boundaries ("por favor" inside "di por favor").
pub fn contains_whole_word(text: &str, word: &str) -> bool {
    let text = normalize(text);
    let word = normalize(word);
    if word.is_empty() {
        return false;
    }

    let text_chars: Vec<char> = text.chars().collect();
    let word_chars: Vec<char> = word.chars().collect();
    let n = text_chars.len();
    let m = word_chars.len();
    if m > n {
        return false;
    }

    for start in 0..=(n - m) {
        if text_chars[start..start + m] != word_chars[..] {
            continue;
        }
        let before_ok = start == 0 || !text_chars[start - 1].is_alphanumeric();
        let after_ok = start + m == n || !text_chars[start + m].is_alphanumeric();
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExerciseMode, WordEntry};

    fn entry(id: &str, term: &str, definition: &str) -> WordEntry {
        WordEntry {
            id: id.into(),
            term: term.into(),
            definition: definition.into(),
            example: None,
            sentence: None,
            image: None,
            mastery: 0,
        }
    }

    fn item(form: QuestionForm, correct: WordEntry) -> ExerciseItem {
        let mode = match form {
            QuestionForm::ImageToWord | QuestionForm::WordToImage => ExerciseMode::Association,
            QuestionForm::ClozeChoice => ExerciseMode::Context,
            QuestionForm::ClozeTyped => ExerciseMode::ContextHard,
            QuestionForm::TermToDefinition | QuestionForm::DefinitionToTerm => {
                ExerciseMode::TranslationHard
            }
            QuestionForm::ComposeSentence => ExerciseMode::WritingHard,
            QuestionForm::Review => ExerciseMode::SimpleReview,
        };
        ExerciseItem {
            mode,
            form,
            correct,
            distractors: Vec::new(),
            options: Vec::new(),
        }
    }

    #[test]
    fn choice_grading_is_exact_id_match() {
        let it = item(QuestionForm::ImageToWord, entry("3", "Casa", "House"));
        let right = evaluate(&it, &Response::Selected("3".into()));
        assert!(right.correct);
        assert_eq!(right.score_delta, 10);

        let wrong = evaluate(&it, &Response::Selected("4".into()));
        assert!(!wrong.correct);
        assert_eq!(wrong.score_delta, -5);
    }

    #[test]
    fn typed_term_match_ignores_case_and_whitespace() {
        let it = item(QuestionForm::TermToDefinition, entry("3", "Casa", "House"));
        for answer in ["casa", " Casa ", "CASA"] {
            assert!(
                evaluate(&it, &Response::Typed(answer.into())).correct,
                "answer {answer:?} should pass"
            );
        }
        assert!(!evaluate(&it, &Response::Typed("Cas".into())).correct);
    }

    #[test]
    fn definition_direction_grades_against_definition() {
        let it = item(QuestionForm::DefinitionToTerm, entry("3", "Casa", "House"));
        assert!(evaluate(&it, &Response::Typed("house".into())).correct);
        assert!(!evaluate(&it, &Response::Typed("casa".into())).correct);
    }

    #[test]
    fn whole_word_containment_rejects_substrings() {
        assert!(!contains_whole_word("El Solar es grande", "Sol"));
        assert!(contains_whole_word("Me gusta el Sol hoy", "Sol"));
        assert!(contains_whole_word("sol", "Sol"));
        assert!(!contains_whole_word("girasol", "Sol"));
        assert!(contains_whole_word("¿Brilla el sol?", "sol"));
    }

    #[test]
    fn whole_word_containment_handles_multi_word_terms() {
        assert!(contains_whole_word("Dime por favor la hora", "Por favor"));
        assert!(!contains_whole_word("porfavor", "por favor"));
    }

    #[test]
    fn cloze_typed_accepts_word_in_context() {
        let it = item(QuestionForm::ClozeTyped, entry("3", "Casa", "House"));
        assert!(evaluate(&it, &Response::Typed("casa".into())).correct);
        assert!(evaluate(&it, &Response::Typed("una casa grande".into())).correct);
        assert!(!evaluate(&it, &Response::Typed("casas".into())).correct);
    }

    #[test]
    fn compose_sentence_requires_the_target_word() {
        let it = item(QuestionForm::ComposeSentence, entry("4", "Sol", "Sun"));
        assert!(evaluate(&it, &Response::Typed("Me gusta el Sol hoy".into())).correct);
        assert!(!evaluate(&it, &Response::Typed("El Solar es grande".into())).correct);
    }

    #[test]
    fn review_cards_are_ungraded() {
        let it = item(QuestionForm::Review, entry("1", "Hola", "Hello"));
        let verdict = evaluate(&it, &Response::Typed("anything".into()));
        assert!(verdict.correct);
        assert_eq!(verdict.score_delta, 0);
    }

    #[test]
    fn mismatched_response_variant_is_incorrect() {
        let choice = item(QuestionForm::WordToImage, entry("1", "Hola", "Hello"));
        assert!(!evaluate(&choice, &Response::Typed("Hola".into())).correct);

        let typed = item(QuestionForm::TermToDefinition, entry("1", "Hola", "Hello"));
        assert!(!evaluate(&typed, &Response::Selected("1".into())).correct);
    }

    #[test]
    fn delta_is_flat_across_forms() {
        let forms = [
            QuestionForm::ImageToWord,
            QuestionForm::ClozeChoice,
            QuestionForm::ClozeTyped,
            QuestionForm::TermToDefinition,
            QuestionForm::ComposeSentence,
        ];
        for form in forms {
            let it = item(form, entry("1", "Agua", "Water"));
            let wrong = evaluate(&it, &Response::Typed("xyzzy".into()));
            assert_eq!(wrong.score_delta, INCORRECT_DELTA, "form {form}");
        }
    }

    #[test]
    fn expected_answer_follows_question_direction() {
        let term_side = item(QuestionForm::TermToDefinition, entry("1", "Agua", "Water"));
        assert_eq!(expected_answer(&term_side), "Agua");
        let def_side = item(QuestionForm::DefinitionToTerm, entry("1", "Agua", "Water"));
        assert_eq!(expected_answer(&def_side), "Water");
    }
}
