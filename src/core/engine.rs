use crate::core::category::{categorize_breakdowns, CategoryTable};
use crate::core::frequency::{breakdowns, Frequency};
use log::debug;
use serde::{Deserialize, Serialize};

/// Everything derived from one piece of corrected text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub frequency: Frequency,
    pub categories: CategoryTable,
}

/// The analysis engine. It holds no state between calls: every report is
/// recomputed from the text alone, so one engine can serve any number of
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str) -> AnalysisReport {
        // 1. Segment each distinct word once, in first-seen order
        let words = breakdowns(text);

        // 2. Bucket before sorting so buckets list words as first seen
        let categories = categorize_breakdowns(&words);

        // 3. Totals, then order words by descending frequency
        let frequency = Frequency::from_breakdowns(words);

        debug!(
            "analyzed {} distinct words, {} letters, {} matras",
            frequency.words.len(),
            frequency.characters.total(),
            frequency.matras.total()
        );
        AnalysisReport { frequency, categories }
    }
}
