// src/core/category.rs
use crate::core::classifier::is_anusvara_or_visarga;
use crate::core::frequency::{breakdowns, WordBreakdown};
use log::debug;
use serde::{Deserialize, Serialize};

pub const MIN_AKSHARAS: usize = 2;
pub const MAX_AKSHARAS: usize = 6;

/// Label of the bucket for words holding ం or ః, alongside their primary one.
pub const ANUSVARA_VISARGA_LABEL: &str = "anusvara/visarga";

pub fn bucket_label(aksharas: usize, matras: usize) -> String {
    format!("{} aksharas, {} matras", aksharas, matras)
}

/// The closed bucket list: 2..=6 aksharas, 0..=n matras, then the
/// anusvara/visarga bucket.
pub fn bucket_labels() -> Vec<String> {
    let mut labels: Vec<String> = (MIN_AKSHARAS..=MAX_AKSHARAS)
        .flat_map(|n| (0..=n).map(move |m| bucket_label(n, m)))
        .collect();
    labels.push(ANUSVARA_VISARGA_LABEL.to_string());
    labels
}

/// Words grouped by bucket, in the fixed bucket order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    rows: Vec<(String, Vec<String>)>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self { rows: bucket_labels().into_iter().map(|l| (l, Vec::new())).collect() }
    }
}

impl CategoryTable {
    /// Adds `word` to `label`. Returns false when no such bucket exists.
    fn insert(&mut self, label: &str, word: &str) -> bool {
        match self.rows.iter_mut().find(|(l, _)| l == label) {
            Some((_, words)) => {
                if !words.iter().any(|w| w == word) {
                    words.push(word.to_string());
                }
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &[(String, Vec<String>)] {
        &self.rows
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.rows.iter().find(|(l, _)| l == label).map(|(_, w)| w.as_slice())
    }

    /// True when no bucket holds a word.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|(_, w)| w.is_empty())
    }
}

/// Buckets breakdowns given in first-seen order. Pairs outside the closed
/// list are skipped, not reported as errors.
pub fn categorize_breakdowns(words: &[WordBreakdown]) -> CategoryTable {
    let mut table = CategoryTable::default();
    for w in words {
        let seg = &w.segmentation;
        let label = bucket_label(seg.akshara_count(), seg.matras);
        if !table.insert(&label, &w.word) {
            debug!("no bucket for {:?} ({})", w.word, label);
        }
        if w.word.chars().any(is_anusvara_or_visarga) {
            table.insert(ANUSVARA_VISARGA_LABEL, &w.word);
        }
    }
    table
}

pub fn categorize(text: &str) -> CategoryTable {
    categorize_breakdowns(&breakdowns(text))
}
