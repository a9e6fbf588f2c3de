// src/core/types.rs
use serde::{Deserialize, Serialize};

/// The role a single codepoint plays when building aksharas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodepointClass {
    IndependentVowel,
    Consonant,
    /// A matra. Anusvara, visarga and candrabindu are included here.
    DependentVowelSign,
    /// The virama (్), which joins consonants into conjuncts.
    ConjunctMarker,
    /// Whitespace, punctuation, digits and anything outside the tables.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AksharaKind {
    /// A standalone independent vowel.
    Vowel,
    /// One consonant, or several joined by viramas, with an optional sign.
    Consonant,
}

/// An orthographic syllable.
///
/// A consonant akshara holds at most one vowel sign proper. The
/// one-dependent-sign limit is relaxed for the nasal and aspirate modifiers
/// (ఁ ం ః): they may trail an akshara that is already closed, so `రాం` is a
/// single akshara carrying two dependent-sign codepoints. A virama inside
/// the text is always followed by another consonant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Akshara {
    pub text: String,
    pub kind: AksharaKind,
    /// True when the final consonant kept its inherent vowel (✓(అ)).
    pub implicit_vowel: bool,
}

impl Akshara {
    pub fn is_conjunct(&self) -> bool {
        self.text.contains(crate::core::classifier::VIRAMA)
    }
}

impl AsRef<str> for Akshara {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Result of segmenting one word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    pub aksharas: Vec<Akshara>,
    /// Dependent sign codepoints consumed. The inherent vowel is not a matra.
    pub matras: usize,
    /// Consonant aksharas that closed without any dependent sign.
    pub implicit_vowels: usize,
    /// Virama codepoints seen, joined or dangling.
    pub conjunct_markers: usize,
}

impl Segmentation {
    pub fn akshara_count(&self) -> usize {
        self.aksharas.len()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.aksharas.iter().map(|a| a.text.as_str()).collect()
    }
}
