//! Session report types with JSON persistence and progress comparison.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{DictionarySummary, ExerciseMode};
use crate::session::ItemOutcome;
use crate::statistics::{per_word_accuracy, SessionStats};

/// A complete record of one practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the session finished.
    pub created_at: DateTime<Utc>,
    /// The dictionary practiced.
    pub dictionary: DictionarySummary,
    /// The exercise mode.
    pub mode: ExerciseMode,
    /// Per-item grading records, in answer order.
    pub outcomes: Vec<ItemOutcome>,
    /// Aggregate statistics.
    pub stats: SessionStats,
    /// Wall-clock session duration in milliseconds.
    pub duration_ms: u64,
}

impl SessionReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this session against a baseline session on per-word
    /// accuracy. `threshold` is the minimum accuracy movement that
    /// counts as a change.
    pub fn compare(&self, baseline: &SessionReport, threshold: f64) -> ProgressReport {
        let baseline_acc = per_word_accuracy(&baseline.outcomes);
        let current_acc = per_word_accuracy(&self.outcomes);

        let term_of = |word_id: &str| -> String {
            self.outcomes
                .iter()
                .chain(baseline.outcomes.iter())
                .find(|o| o.word_id == word_id)
                .map(|o| o.term.clone())
                .unwrap_or_default()
        };

        let mut slips = Vec::new();
        let mut improvements = Vec::new();
        let mut unchanged = 0usize;
        let mut new_words = 0usize;

        for (word_id, &current) in &current_acc {
            if let Some(&baseline_val) = baseline_acc.get(word_id) {
                let delta = current - baseline_val;
                let change = WordChange {
                    word_id: word_id.clone(),
                    term: term_of(word_id),
                    baseline_accuracy: baseline_val,
                    current_accuracy: current,
                    delta,
                };
                if delta < -threshold {
                    slips.push(change);
                } else if delta > threshold {
                    improvements.push(change);
                } else {
                    unchanged += 1;
                }
            } else {
                new_words += 1;
            }
        }

        let removed_words = baseline_acc
            .keys()
            .filter(|k| !current_acc.contains_key(*k))
            .count();

        ProgressReport {
            slips,
            improvements,
            unchanged,
            new_words,
            removed_words,
        }
    }
}

/// Result of comparing two session reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Words whose accuracy went down.
    pub slips: Vec<WordChange>,
    /// Words whose accuracy went up.
    pub improvements: Vec<WordChange>,
    /// Words with no significant change.
    pub unchanged: usize,
    /// Words practiced now but not in the baseline.
    pub new_words: usize,
    /// Words in the baseline but not practiced now.
    pub removed_words: usize,
}

/// A per-word accuracy movement between two sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordChange {
    pub word_id: String,
    pub term: String,
    pub baseline_accuracy: f64,
    pub current_accuracy: f64,
    pub delta: f64,
}

impl ProgressReport {
    /// Format the progress report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} slipped, {} improved, {} unchanged\n\n",
            self.slips.len(),
            self.improvements.len(),
            self.unchanged
        ));

        if !self.slips.is_empty() {
            md.push_str("### Slipped\n\n");
            md.push_str("| Word | Baseline | Current | Delta |\n");
            md.push_str("|------|----------|---------|-------|\n");
            for c in &self.slips {
                md.push_str(&format!(
                    "| {} | {:.0}% | {:.0}% | {:.0}% |\n",
                    c.term,
                    c.baseline_accuracy * 100.0,
                    c.current_accuracy * 100.0,
                    c.delta * 100.0
                ));
            }
            md.push('\n');
        }

        if !self.improvements.is_empty() {
            md.push_str("### Improved\n\n");
            md.push_str("| Word | Baseline | Current | Delta |\n");
            md.push_str("|------|----------|---------|-------|\n");
            for c in &self.improvements {
                md.push_str(&format!(
                    "| {} | {:.0}% | {:.0}% | +{:.0}% |\n",
                    c.term,
                    c.baseline_accuracy * 100.0,
                    c.current_accuracy * 100.0,
                    c.delta * 100.0
                ));
            }
        }

        md
    }

    /// Returns true if any word slipped.
    pub fn has_slips(&self) -> bool {
        !self.slips.is_empty()
    }
}
