//! Aggregate statistics over graded session outcomes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::session::ItemOutcome;

/// Accuracy rollup for one question form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormStats {
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
}

/// Statistics for one completed (or abandoned) session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Graded items.
    pub total: usize,
    pub correct: usize,
    /// correct / total, 0.0 for an empty session.
    pub accuracy: f64,
    /// Rollup keyed by question form.
    pub per_form: HashMap<String, FormStats>,
    /// Sum of all score deltas: the net mastery movement the tracker
    /// will see.
    pub net_delta: i32,
}

/// Per-word accuracy across outcomes, used for report comparison.
pub fn per_word_accuracy(outcomes: &[ItemOutcome]) -> HashMap<String, f64> {
    let mut grouped: HashMap<&str, (usize, usize)> = HashMap::new();
    for o in outcomes {
        let entry = grouped.entry(&o.word_id).or_default();
        entry.0 += 1;
        if o.correct {
            entry.1 += 1;
        }
    }
    grouped
        .into_iter()
        .map(|(id, (total, correct))| (id.to_string(), correct as f64 / total as f64))
        .collect()
}

/// Compute aggregate statistics for one session's outcomes.
pub fn compute_session_stats(outcomes: &[ItemOutcome]) -> SessionStats {
    let total = outcomes.len();
    let correct = outcomes.iter().filter(|o| o.correct).count();
    let net_delta = outcomes.iter().map(|o| o.score_delta).sum();

    let mut form_groups: HashMap<String, (usize, usize)> = HashMap::new();
    for o in outcomes {
        let entry = form_groups.entry(o.form.clone()).or_default();
        entry.0 += 1;
        if o.correct {
            entry.1 += 1;
        }
    }

    let per_form = form_groups
        .into_iter()
        .map(|(form, (total, correct))| {
            (
                form,
                FormStats {
                    total,
                    correct,
                    accuracy: correct as f64 / total.max(1) as f64,
                },
            )
        })
        .collect();

    SessionStats {
        total,
        correct,
        accuracy: if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        },
        per_form,
        net_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::Response;

    fn outcome(word_id: &str, form: &str, correct: bool) -> ItemOutcome {
        ItemOutcome {
            word_id: word_id.into(),
            term: word_id.to_uppercase(),
            form: form.into(),
            response: Response::Typed("x".into()),
            correct,
            score_delta: if correct { 10 } else { -5 },
        }
    }

    #[test]
    fn stats_over_mixed_outcomes() {
        let outcomes = vec![
            outcome("1", "term-to-definition", true),
            outcome("2", "definition-to-term", false),
            outcome("3", "term-to-definition", true),
            outcome("4", "definition-to-term", true),
        ];
        let stats = compute_session_stats(&outcomes);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.correct, 3);
        assert!((stats.accuracy - 0.75).abs() < f64::EPSILON);
        assert_eq!(stats.net_delta, 25);
        assert_eq!(stats.per_form["term-to-definition"].correct, 2);
        assert!((stats.per_form["definition-to-term"].accuracy - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_over_empty_session() {
        let stats = compute_session_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.accuracy, 0.0);
        assert_eq!(stats.net_delta, 0);
        assert!(stats.per_form.is_empty());
    }

    #[test]
    fn per_word_accuracy_groups_repeats() {
        let outcomes = vec![
            outcome("1", "cloze-typed", true),
            outcome("1", "cloze-typed", false),
            outcome("2", "cloze-typed", true),
        ];
        let acc = per_word_accuracy(&outcomes);
        assert!((acc["1"] - 0.5).abs() < f64::EPSILON);
        assert!((acc["2"] - 1.0).abs() < f64::EPSILON);
    }
}
