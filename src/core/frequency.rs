// src/core/frequency.rs
use crate::core::classifier::{classify, is_telugu, letter_order, DEPENDENT_SIGNS};
use crate::core::segmenter::segment;
use crate::core::types::{CodepointClass, Segmentation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Counts over a fixed, ordered set of characters. Every row is always
/// present, zero or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    rows: Vec<(char, u64)>,
}

impl FrequencyTable {
    fn zeroed(order: impl Iterator<Item = char>) -> Self {
        Self { rows: order.map(|c| (c, 0)).collect() }
    }

    /// Independent vowels then consonants.
    pub fn letters() -> Self {
        Self::zeroed(letter_order())
    }

    pub fn matras() -> Self {
        Self::zeroed(DEPENDENT_SIGNS.iter().copied())
    }

    fn add(&mut self, c: char, n: u64) {
        if let Some(row) = self.rows.iter_mut().find(|(k, _)| *k == c) {
            row.1 += n;
        }
    }

    fn merge_scaled(&mut self, other: &FrequencyTable, factor: u64) {
        for (row, (_, n)) in self.rows.iter_mut().zip(&other.rows) {
            row.1 += n * factor;
        }
    }

    pub fn get(&self, c: char) -> u64 {
        self.rows.iter().find(|(k, _)| *k == c).map_or(0, |&(_, n)| n)
    }

    pub fn total(&self) -> u64 {
        self.rows.iter().map(|&(_, n)| n).sum()
    }

    pub fn rows(&self) -> &[(char, u64)] {
        &self.rows
    }

    /// Rows with a non-zero count, in table order.
    pub fn non_zero(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.rows.iter().copied().filter(|&(_, n)| n > 0)
    }
}

/// One distinct word, its frequency, and counts already weighted by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBreakdown {
    pub word: String,
    pub frequency: u64,
    pub segmentation: Segmentation,
    pub letters: FrequencyTable,
    pub matras: FrequencyTable,
    pub implicit_vowels: u64,
    pub conjunct_markers: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    pub characters: FrequencyTable,
    pub matras: FrequencyTable,
    pub conjunct_markers: u64,
    pub implicit_vowels: u64,
    /// Sorted by descending frequency, ties in first-seen order.
    pub words: Vec<WordBreakdown>,
}

impl Default for Frequency {
    fn default() -> Self {
        Self {
            characters: FrequencyTable::letters(),
            matras: FrequencyTable::matras(),
            conjunct_markers: 0,
            implicit_vowels: 0,
            words: Vec::new(),
        }
    }
}

impl Frequency {
    /// Totals the (already weighted) breakdowns and sorts them for display.
    pub fn from_breakdowns(mut words: Vec<WordBreakdown>) -> Self {
        let mut freq = Self::default();
        for w in &words {
            freq.characters.merge_scaled(&w.letters, 1);
            freq.matras.merge_scaled(&w.matras, 1);
            freq.conjunct_markers += w.conjunct_markers;
            freq.implicit_vowels += w.implicit_vowels;
        }
        words.sort_by_key(|w| std::cmp::Reverse(w.frequency));
        freq.words = words;
        freq
    }
}

/// Maximal runs of Telugu-block codepoints. Whitespace and every other
/// codepoint act as delimiters. Runs with nothing the classifier knows,
/// such as Telugu digits or avagraha, are not words.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_telugu(c))
        .filter(|w| w.chars().any(|c| classify(c) != CodepointClass::Other))
}

/// Distinct words with their occurrence counts, in first-seen order.
pub fn count_words(text: &str) -> Vec<(&str, u64)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u64)> = Vec::new();
    for word in words(text) {
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }
    counts
}

/// Segments `word` once and scales its counts by `frequency`.
pub fn breakdown(word: &str, frequency: u64) -> WordBreakdown {
    let mut letters = FrequencyTable::letters();
    let mut matras = FrequencyTable::matras();
    for c in word.chars() {
        match classify(c) {
            CodepointClass::IndependentVowel | CodepointClass::Consonant => letters.add(c, 1),
            CodepointClass::DependentVowelSign => matras.add(c, 1),
            CodepointClass::ConjunctMarker | CodepointClass::Other => {}
        }
    }
    let segmentation = segment(word);

    let mut weighted_letters = FrequencyTable::letters();
    weighted_letters.merge_scaled(&letters, frequency);
    let mut weighted_matras = FrequencyTable::matras();
    weighted_matras.merge_scaled(&matras, frequency);

    WordBreakdown {
        word: word.to_string(),
        frequency,
        implicit_vowels: segmentation.implicit_vowels as u64 * frequency,
        conjunct_markers: segmentation.conjunct_markers as u64 * frequency,
        letters: weighted_letters,
        matras: weighted_matras,
        segmentation,
    }
}

/// Breakdowns for every distinct word, in first-seen order.
pub fn breakdowns(text: &str) -> Vec<WordBreakdown> {
    count_words(text).into_iter().map(|(w, n)| breakdown(w, n)).collect()
}

pub fn aggregate(text: &str) -> Frequency {
    Frequency::from_breakdowns(breakdowns(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_splits_on_anything_outside_the_block() {
        let got: Vec<&str> = words("రాముడు, సీత!\thello\nపుస్తకం").collect();
        assert_eq!(got, vec!["రాముడు", "సీత", "పుస్తకం"]);
    }

    #[test]
    fn digits_and_avagraha_are_not_words() {
        let got: Vec<&str> = words("౧౨ ఽ సీత ౩").collect();
        assert_eq!(got, vec!["సీత"]);

        let freq = aggregate("౧౨ ౧౨ ఽ");
        assert!(freq.words.is_empty());
        assert_eq!(freq.characters.total() + freq.matras.total(), 0);
    }

    #[test]
    fn count_words_keeps_first_seen_order() {
        let counts = count_words("బ అ బ బ అ క");
        assert_eq!(counts, vec![("బ", 3), ("అ", 2), ("క", 1)]);
    }

    #[test]
    fn repeated_word_is_weighted() {
        let once = aggregate("పుస్తకం");
        let twice = aggregate("పుస్తకం పుస్తకం");
        assert_eq!(twice.words.len(), 1);
        assert_eq!(twice.words[0].frequency, 2);
        assert_eq!(twice.characters.get('స'), 2 * once.characters.get('స'));
        assert_eq!(twice.matras.get('ం'), 2);
        assert_eq!(twice.words[0].implicit_vowels, 2);
        assert_eq!(twice.conjunct_markers, 2);
    }

    #[test]
    fn tables_are_zero_filled_and_ordered() {
        let freq = aggregate("");
        assert_eq!(freq.characters.rows().len(), 16 + 39);
        assert_eq!(freq.matras.rows().len(), 16);
        assert_eq!(freq.characters.rows()[0], ('అ', 0));
        assert_eq!(freq.characters.rows()[16], ('క', 0));
        assert_eq!(freq.matras.rows()[0], ('ా', 0));
        assert_eq!(freq.characters.total() + freq.matras.total(), 0);
        assert!(freq.words.is_empty());
    }

    #[test]
    fn words_sorted_by_descending_frequency_stably() {
        let freq = aggregate("క గ గ చ చ ట");
        let order: Vec<&str> = freq.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, vec!["గ", "చ", "క", "ట"]);
    }

    #[test]
    fn virama_is_not_a_matra() {
        let freq = aggregate("ఉన్");
        assert_eq!(freq.matras.total(), 0);
        assert_eq!(freq.conjunct_markers, 1);
        assert_eq!(freq.characters.get('ఉ'), 1);
        assert_eq!(freq.characters.get('న'), 1);
    }
}
