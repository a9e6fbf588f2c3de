// src/core/segmenter.rs
use crate::core::classifier::{classify, is_modifier};
use crate::core::types::{Akshara, AksharaKind, CodepointClass, Segmentation};
use std::mem;

/// Where the akshara currently being built stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Empty,
    StandaloneVowel,
    /// A single consonant that has not yet received a sign. Its inherent
    /// vowel is only tentative until the akshara is flushed.
    BuildingConsonant,
    /// Consonants joined by viramas, still without a sign.
    BuildingConjunct,
    ClosedWithVowelSign,
}

struct AksharaBuilder {
    state: State,
    current: String,
    out: Segmentation,
}

impl AksharaBuilder {
    fn new() -> Self {
        Self { state: State::Empty, current: String::new(), out: Segmentation::default() }
    }

    fn is_building(&self) -> bool {
        matches!(self.state, State::BuildingConsonant | State::BuildingConjunct)
    }

    fn open_vowel(&mut self, c: char) {
        self.flush();
        self.current.push(c);
        self.state = State::StandaloneVowel;
    }

    fn open_consonant(&mut self, c: char) {
        self.flush();
        self.current.push(c);
        self.state = State::BuildingConsonant;
    }

    fn join(&mut self, virama: char, consonant: char) {
        self.current.push(virama);
        self.current.push(consonant);
        self.state = State::BuildingConjunct;
    }

    fn sign(&mut self, c: char) {
        // Every consumed sign is a matra, even when no akshara can take it.
        self.out.matras += 1;
        match self.state {
            State::BuildingConsonant | State::BuildingConjunct => {
                self.current.push(c);
                self.state = State::ClosedWithVowelSign;
            }
            State::ClosedWithVowelSign | State::StandaloneVowel if is_modifier(c) => {
                self.current.push(c);
            }
            _ => {}
        }
    }

    /// Emits the pending akshara. This is where a tentative inherent vowel
    /// is confirmed: only aksharas still building reach here without a sign.
    fn flush(&mut self) {
        let (kind, implicit_vowel) = match self.state {
            State::Empty => return,
            State::StandaloneVowel => (AksharaKind::Vowel, false),
            State::BuildingConsonant | State::BuildingConjunct => (AksharaKind::Consonant, true),
            State::ClosedWithVowelSign => (AksharaKind::Consonant, false),
        };
        if implicit_vowel {
            self.out.implicit_vowels += 1;
        }
        self.out.aksharas.push(Akshara {
            text: mem::take(&mut self.current),
            kind,
            implicit_vowel,
        });
        self.state = State::Empty;
    }

    fn finish(mut self) -> Segmentation {
        self.flush();
        self.out
    }
}

/// Splits a word into aksharas with a single left-to-right scan.
///
/// Total over any input: codepoints outside the tables close the current
/// akshara and are dropped, and a virama that cannot join two consonants
/// closes the akshara without becoming part of it.
pub fn segment(word: &str) -> Segmentation {
    let mut builder = AksharaBuilder::new();
    let mut chars = word.chars().peekable();

    while let Some(c) = chars.next() {
        match classify(c) {
            CodepointClass::IndependentVowel => builder.open_vowel(c),
            CodepointClass::Consonant => builder.open_consonant(c),
            CodepointClass::ConjunctMarker => {
                builder.out.conjunct_markers += 1;
                let joinable = |&n: &char| {
                    builder.is_building() && classify(n) == CodepointClass::Consonant
                };
                match chars.next_if(joinable) {
                    Some(consonant) => builder.join(c, consonant),
                    None => builder.flush(),
                }
            }
            CodepointClass::DependentVowelSign => builder.sign(c),
            CodepointClass::Other => builder.flush(),
        }
    }

    builder.finish()
}
