//! Mode-keyed exercise set generation.
//!
//! One generator serves every practice screen; the per-mode behavior
//! differs only in how words are selected, whether items carry
//! options, and how question forms alternate.

use rand::Rng;
use uuid::Uuid;

use crate::error::EngineError;
use crate::model::{
    ExerciseItem, ExerciseMode, ExerciseSet, QuestionForm, WordEntry, BLANK_TOKEN,
};
use crate::shuffle::{sample_prefix, shuffle};

/// Configuration for the exercise engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Set length for sampled modes (context and the typed modes).
    pub typed_set_size: usize,
    /// Options per choice-based item, correct entry included.
    pub option_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            typed_set_size: 10,
            option_count: 4,
        }
    }
}

/// The exercise generator. Holds no session state; each call takes a
/// pool snapshot and returns a fresh set.
#[derive(Debug, Clone, Default)]
pub struct ExerciseEngine {
    config: EngineConfig,
}

impl ExerciseEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Build a randomized set of exercise items for `mode`.
    ///
    /// Fails with [`EngineError::InsufficientPool`] when the pool is
    /// smaller than the mode's minimum, and with
    /// [`EngineError::MalformedEntry`] when any pool entry would
    /// produce an unanswerable item, rather than rendering a broken
    /// question later.
    pub fn generate_set<R: Rng + ?Sized>(
        &self,
        pool: &[WordEntry],
        mode: ExerciseMode,
        rng: &mut R,
    ) -> Result<ExerciseSet, EngineError> {
        let required = mode.min_pool_size();
        if pool.len() < required {
            return Err(EngineError::InsufficientPool {
                mode,
                required,
                actual: pool.len(),
            });
        }
        check_pool(pool, mode)?;

        let items = match mode {
            ExerciseMode::Association => self.association_items(pool, rng),
            ExerciseMode::Context => self.context_items(pool, rng),
            ExerciseMode::ContextHard => {
                self.typed_items(pool, mode, rng, |_| QuestionForm::ClozeTyped)
            }
            ExerciseMode::WritingHard => {
                self.typed_items(pool, mode, rng, |_| QuestionForm::ComposeSentence)
            }
            ExerciseMode::TranslationHard => self.typed_items(pool, mode, rng, |index| {
                if index % 2 == 0 {
                    QuestionForm::TermToDefinition
                } else {
                    QuestionForm::DefinitionToTerm
                }
            }),
            ExerciseMode::SimpleReview => pool
                .iter()
                .map(|word| plain_item(mode, QuestionForm::Review, word))
                .collect(),
        };

        let set = ExerciseSet {
            id: Uuid::new_v4(),
            mode,
            items,
        };
        tracing::debug!(mode = %mode, items = set.len(), "generated exercise set");
        Ok(set)
    }

    /// Every pool word once, forms alternating by pre-shuffle index
    /// parity, the whole list shuffled last.
    fn association_items<R: Rng + ?Sized>(
        &self,
        pool: &[WordEntry],
        rng: &mut R,
    ) -> Vec<ExerciseItem> {
        let mut items: Vec<ExerciseItem> = pool
            .iter()
            .enumerate()
            .map(|(index, word)| {
                let form = if index % 2 == 0 {
                    QuestionForm::ImageToWord
                } else {
                    QuestionForm::WordToImage
                };
                self.choice_item(pool, ExerciseMode::Association, form, word, rng)
            })
            .collect();
        shuffle(&mut items, rng);
        items
    }

    /// A random sample of words, one cloze-choice item each. The item
    /// order keeps the sampling order; there is no final shuffle.
    fn context_items<R: Rng + ?Sized>(&self, pool: &[WordEntry], rng: &mut R) -> Vec<ExerciseItem> {
        sample_prefix(pool, self.config.typed_set_size, rng)
            .iter()
            .map(|word| {
                self.choice_item(pool, ExerciseMode::Context, QuestionForm::ClozeChoice, word, rng)
            })
            .collect()
    }

    /// A random sample of words with no distractors; `form_for` keys
    /// the question form off the item index.
    fn typed_items<R: Rng + ?Sized>(
        &self,
        pool: &[WordEntry],
        mode: ExerciseMode,
        rng: &mut R,
        form_for: impl Fn(usize) -> QuestionForm,
    ) -> Vec<ExerciseItem> {
        sample_prefix(pool, self.config.typed_set_size, rng)
            .into_iter()
            .enumerate()
            .map(|(index, word)| plain_item(mode, form_for(index), &word))
            .collect()
    }

    /// One choice item: distractors are a shuffled prefix of the rest
    /// of the pool, the option list is shuffled independently.
    fn choice_item<R: Rng + ?Sized>(
        &self,
        pool: &[WordEntry],
        mode: ExerciseMode,
        form: QuestionForm,
        word: &WordEntry,
        rng: &mut R,
    ) -> ExerciseItem {
        let others: Vec<WordEntry> = pool.iter().filter(|w| w.id != word.id).cloned().collect();
        let distractors = sample_prefix(&others, self.config.option_count - 1, rng);

        let mut options = Vec::with_capacity(distractors.len() + 1);
        options.push(word.clone());
        options.extend(distractors.iter().cloned());
        shuffle(&mut options, rng);

        ExerciseItem {
            mode,
            form,
            correct: word.clone(),
            distractors,
            options,
        }
    }
}

fn plain_item(mode: ExerciseMode, form: QuestionForm, word: &WordEntry) -> ExerciseItem {
    ExerciseItem {
        mode,
        form,
        correct: word.clone(),
        distractors: Vec::new(),
        options: Vec::new(),
    }
}

/// Reject entries that would produce unanswerable items for `mode`.
/// Runs over the whole pool because any entry can be drawn as the
/// correct answer or shown as an option.
fn check_pool(pool: &[WordEntry], mode: ExerciseMode) -> Result<(), EngineError> {
    if mode == ExerciseMode::SimpleReview {
        return Ok(());
    }
    for word in pool {
        if word.term.trim().is_empty() {
            return Err(EngineError::malformed(&word.id, "term is empty"));
        }
        if word.definition.trim().is_empty() {
            return Err(EngineError::malformed(&word.id, "definition is empty"));
        }
        if mode.requires_sentence() {
            match &word.sentence {
                None => {
                    return Err(EngineError::malformed(&word.id, "no cloze sentence"));
                }
                Some(sentence) if !sentence.contains(BLANK_TOKEN) => {
                    return Err(EngineError::malformed(
                        &word.id,
                        format!("cloze sentence has no '{BLANK_TOKEN}' blank"),
                    ));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn word(id: &str, term: &str, definition: &str) -> WordEntry {
        WordEntry {
            id: id.into(),
            term: term.into(),
            definition: definition.into(),
            example: None,
            sentence: Some("Una frase con ___ dentro.".to_string()),
            image: Some(format!("https://img.example/{id}.jpg")),
            mastery: 0,
        }
    }

    fn pool(n: usize) -> Vec<WordEntry> {
        (0..n)
            .map(|i| word(&format!("w{i}"), &format!("term{i}"), &format!("def{i}")))
            .collect()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn association_uses_every_word_once() {
        let engine = ExerciseEngine::default();
        let pool = pool(12);
        let set = engine
            .generate_set(&pool, ExerciseMode::Association, &mut rng())
            .unwrap();
        assert_eq!(set.len(), 12);
        let mut ids: Vec<&str> = set.items.iter().map(|i| i.correct.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn association_alternates_forms_evenly() {
        let engine = ExerciseEngine::default();
        let pool = pool(9);
        let set = engine
            .generate_set(&pool, ExerciseMode::Association, &mut rng())
            .unwrap();
        let image_first = set
            .items
            .iter()
            .filter(|i| i.form == QuestionForm::ImageToWord)
            .count();
        // 9 words: indices 0,2,4,6,8 take the image-to-word form.
        assert_eq!(image_first, 5);
    }

    #[test]
    fn sampled_modes_cap_at_ten() {
        let engine = ExerciseEngine::default();
        let pool = pool(30);
        for mode in [
            ExerciseMode::Context,
            ExerciseMode::ContextHard,
            ExerciseMode::TranslationHard,
            ExerciseMode::WritingHard,
        ] {
            let set = engine.generate_set(&pool, mode, &mut rng()).unwrap();
            assert_eq!(set.len(), 10, "mode {mode}");
        }
    }

    #[test]
    fn sampled_modes_use_whole_pool_when_small() {
        let engine = ExerciseEngine::default();
        let pool = pool(6);
        let set = engine
            .generate_set(&pool, ExerciseMode::WritingHard, &mut rng())
            .unwrap();
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn sampled_items_are_distinct_words() {
        let engine = ExerciseEngine::default();
        let pool = pool(30);
        let set = engine
            .generate_set(&pool, ExerciseMode::ContextHard, &mut rng())
            .unwrap();
        let mut ids: Vec<&str> = set.items.iter().map(|i| i.correct.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), set.len());
    }

    #[test]
    fn distractors_are_disjoint_from_correct_and_each_other() {
        let engine = ExerciseEngine::default();
        let pool = pool(8);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let set = engine
                .generate_set(&pool, ExerciseMode::Association, &mut rng)
                .unwrap();
            for item in &set.items {
                assert_eq!(item.distractors.len(), 3);
                let mut ids: Vec<&str> =
                    item.distractors.iter().map(|d| d.id.as_str()).collect();
                assert!(!ids.contains(&item.correct.id.as_str()));
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), 3, "duplicate distractor at seed {seed}");
            }
        }
    }

    #[test]
    fn options_contain_correct_and_all_distractors() {
        let engine = ExerciseEngine::default();
        let pool = pool(5);
        let set = engine
            .generate_set(&pool, ExerciseMode::Context, &mut rng())
            .unwrap();
        for item in &set.items {
            assert_eq!(item.options.len(), 4);
            assert!(item.options.iter().any(|o| o.id == item.correct.id));
            for d in &item.distractors {
                assert!(item.options.iter().any(|o| o.id == d.id));
            }
        }
    }

    #[test]
    fn tolerates_minimum_choice_pool() {
        // A 4-word pool leaves exactly 3 distractor candidates.
        let engine = ExerciseEngine::default();
        let pool = pool(4);
        let set = engine
            .generate_set(&pool, ExerciseMode::Association, &mut rng())
            .unwrap();
        for item in &set.items {
            assert_eq!(item.distractors.len(), 3);
        }
    }

    #[test]
    fn translation_forms_alternate_by_index() {
        let engine = ExerciseEngine::default();
        let pool = pool(10);
        let set = engine
            .generate_set(&pool, ExerciseMode::TranslationHard, &mut rng())
            .unwrap();
        for (index, item) in set.items.iter().enumerate() {
            let expected = if index % 2 == 0 {
                QuestionForm::TermToDefinition
            } else {
                QuestionForm::DefinitionToTerm
            };
            assert_eq!(item.form, expected);
        }
    }

    #[test]
    fn simple_review_keeps_pool_order() {
        let engine = ExerciseEngine::default();
        let pool = pool(5);
        let set = engine
            .generate_set(&pool, ExerciseMode::SimpleReview, &mut rng())
            .unwrap();
        let ids: Vec<&str> = set.items.iter().map(|i| i.correct.id.as_str()).collect();
        assert_eq!(ids, vec!["w0", "w1", "w2", "w3", "w4"]);
        assert!(set.items.iter().all(|i| i.options.is_empty()));
    }

    #[test]
    fn insufficient_pool_is_rejected() {
        let engine = ExerciseEngine::default();
        let pool = pool(3);
        let err = engine
            .generate_set(&pool, ExerciseMode::Association, &mut rng())
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InsufficientPool { required: 4, actual: 3, .. }
        ));

        let empty: Vec<WordEntry> = vec![];
        let err = engine
            .generate_set(&empty, ExerciseMode::WritingHard, &mut rng())
            .unwrap_err();
        assert!(matches!(err, EngineError::InsufficientPool { required: 1, .. }));
    }

    #[test]
    fn empty_term_is_rejected_for_graded_modes() {
        let engine = ExerciseEngine::default();
        let mut pool = pool(4);
        pool[2].term = "   ".into();
        let err = engine
            .generate_set(&pool, ExerciseMode::Association, &mut rng())
            .unwrap_err();
        match err {
            EngineError::MalformedEntry { id, .. } => assert_eq!(id, "w2"),
            other => panic!("expected MalformedEntry, got {other}"),
        }
    }

    #[test]
    fn missing_blank_is_rejected_for_context_modes() {
        let engine = ExerciseEngine::default();
        let mut pool = pool(4);
        pool[1].sentence = Some("No blank here.".into());
        let err = engine
            .generate_set(&pool, ExerciseMode::Context, &mut rng())
            .unwrap_err();
        match err {
            EngineError::MalformedEntry { id, reason } => {
                assert_eq!(id, "w1");
                assert!(reason.contains("blank"));
            }
            other => panic!("expected MalformedEntry, got {other}"),
        }
        // The same entry is fine in modes that never show the sentence.
        assert!(engine
            .generate_set(&pool, ExerciseMode::TranslationHard, &mut rng())
            .is_ok());
    }

    #[test]
    fn successive_sets_are_independent_draws() {
        let engine = ExerciseEngine::default();
        let pool = pool(30);
        let mut rng = rng();
        let first = engine
            .generate_set(&pool, ExerciseMode::Association, &mut rng)
            .unwrap();
        let second = engine
            .generate_set(&pool, ExerciseMode::Association, &mut rng)
            .unwrap();
        let order = |set: &ExerciseSet| -> Vec<String> {
            set.items.iter().map(|i| i.correct.id.clone()).collect()
        };
        // With 30! orderings, identical consecutive draws mean the
        // randomness was cached.
        assert_ne!(order(&first), order(&second));
        assert_ne!(first.id, second.id);
    }
}
