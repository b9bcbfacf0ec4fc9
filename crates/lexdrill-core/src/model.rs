//! Core data model types for lexdrill.
//!
//! These are the fundamental types the entire lexdrill system uses to
//! represent dictionary words, exercise items, and practice sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// A single vocabulary entry, the atomic learning unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Unique stable identifier, immutable.
    pub id: String,
    /// The vocabulary item in the target language.
    pub term: String,
    /// The meaning/translation in the learner's base language.
    pub definition: String,
    /// Usage sentence containing `term` verbatim.
    #[serde(default)]
    pub example: Option<String>,
    /// Cloze sentence with a single `___` blank that `term` fills.
    #[serde(default)]
    pub sentence: Option<String>,
    /// Opaque reference to an illustrative image (URL or data blob).
    #[serde(default)]
    pub image: Option<String>,
    /// Mastery score in [0,100], owned by the mastery tracker.
    /// The engine reads it but never mutates it.
    #[serde(default)]
    pub mastery: u8,
}

/// The cloze blank placeholder expected in `WordEntry::sentence`.
pub const BLANK_TOKEN: &str = "___";

/// A named collection of words for one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    /// Unique identifier for this dictionary.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Target language (e.g. "Spanish").
    pub language: String,
    /// Optional flag emoji shown in listings.
    #[serde(default)]
    pub flag: Option<String>,
    /// The words in this dictionary.
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

/// Summary of a dictionary (without the full word list).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionarySummary {
    pub id: String,
    pub name: String,
    pub language: String,
    pub word_count: usize,
}

impl Dictionary {
    pub fn summary(&self) -> DictionarySummary {
        DictionarySummary {
            id: self.id.clone(),
            name: self.name.clone(),
            language: self.language.clone(),
            word_count: self.words.len(),
        }
    }
}

/// The practice formats a set can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseMode {
    /// Match words to images, four options per item.
    Association,
    /// Fill a cloze sentence by picking from four options.
    Context,
    /// Fill a cloze sentence by typing the word.
    ContextHard,
    /// Type the translation of a term or definition.
    TranslationHard,
    /// Write a free sentence using the target word.
    WritingHard,
    /// Flip through cards one by one; not graded.
    SimpleReview,
}

impl ExerciseMode {
    /// Minimum distinct pool entries this mode needs.
    pub fn min_pool_size(self) -> usize {
        match self {
            ExerciseMode::Association | ExerciseMode::Context => 4,
            _ => 1,
        }
    }

    /// Whether items carry a shuffled multiple-choice option list.
    pub fn is_choice_based(self) -> bool {
        matches!(self, ExerciseMode::Association | ExerciseMode::Context)
    }

    /// Whether items require a cloze sentence on every selected word.
    pub fn requires_sentence(self) -> bool {
        matches!(self, ExerciseMode::Context | ExerciseMode::ContextHard)
    }
}

impl fmt::Display for ExerciseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseMode::Association => write!(f, "association"),
            ExerciseMode::Context => write!(f, "context"),
            ExerciseMode::ContextHard => write!(f, "context-hard"),
            ExerciseMode::TranslationHard => write!(f, "translation-hard"),
            ExerciseMode::WritingHard => write!(f, "writing-hard"),
            ExerciseMode::SimpleReview => write!(f, "simple-review"),
        }
    }
}

impl FromStr for ExerciseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "association" => Ok(ExerciseMode::Association),
            "context" => Ok(ExerciseMode::Context),
            "context-hard" => Ok(ExerciseMode::ContextHard),
            "translation-hard" => Ok(ExerciseMode::TranslationHard),
            "writing-hard" => Ok(ExerciseMode::WritingHard),
            "simple-review" | "review" => Ok(ExerciseMode::SimpleReview),
            other => Err(format!("unknown exercise mode: {other}")),
        }
    }
}

/// How one item is asked. Association and translation modes alternate
/// between their two forms by item index parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionForm {
    /// Show the image, pick the word.
    ImageToWord,
    /// Show the word, pick the image.
    WordToImage,
    /// Show a cloze sentence, pick the word from options.
    ClozeChoice,
    /// Show a cloze sentence, type the word.
    ClozeTyped,
    /// Show the definition, type the term.
    TermToDefinition,
    /// Show the term, type the definition.
    DefinitionToTerm,
    /// Show term and definition, write a sentence using the term.
    ComposeSentence,
    /// Pure display card, ungraded.
    Review,
}

impl fmt::Display for QuestionForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionForm::ImageToWord => write!(f, "image-to-word"),
            QuestionForm::WordToImage => write!(f, "word-to-image"),
            QuestionForm::ClozeChoice => write!(f, "cloze-choice"),
            QuestionForm::ClozeTyped => write!(f, "cloze-typed"),
            QuestionForm::TermToDefinition => write!(f, "term-to-definition"),
            QuestionForm::DefinitionToTerm => write!(f, "definition-to-term"),
            QuestionForm::ComposeSentence => write!(f, "compose-sentence"),
            QuestionForm::Review => write!(f, "review"),
        }
    }
}

/// One question instance.
///
/// `correct` and `distractors` are snapshots taken by value from the
/// pool at generation time: later edits to the word store are not
/// reflected in an in-progress set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseItem {
    /// The mode this item was generated for.
    pub mode: ExerciseMode,
    /// How the question is asked.
    pub form: QuestionForm,
    /// The entry a correct response must match.
    pub correct: WordEntry,
    /// Wrong options, disjoint from `correct` and from each other.
    /// Empty for typed and review forms.
    pub distractors: Vec<WordEntry>,
    /// Shuffled display order of `correct` plus `distractors`.
    /// Empty for typed and review forms.
    pub options: Vec<WordEntry>,
}

impl ExerciseItem {
    /// The cloze sentence with the blank left in place, if the item
    /// has one.
    pub fn cloze_sentence(&self) -> Option<&str> {
        self.correct.sentence.as_deref()
    }
}

/// An ordered, finite sequence of items for one practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Unique identifier for this generated set.
    pub id: Uuid,
    /// The mode every item was generated for.
    pub mode: ExerciseMode,
    /// The items, in presentation order.
    pub items: Vec<ExerciseItem>,
}

impl ExerciseSet {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
