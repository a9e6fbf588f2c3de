// src/core/classifier.rs
use crate::core::types::CodepointClass;

pub const VIRAMA: char = '\u{0c4d}';
pub const ANUSVARA: char = '\u{0c02}';
pub const VISARGA: char = '\u{0c03}';
pub const CANDRABINDU: char = '\u{0c01}';

/// Independent vowels in traditional order.
pub const INDEPENDENT_VOWELS: [char; 16] = [
    'అ', 'ఆ', 'ఇ', 'ఈ', 'ఉ', 'ఊ', 'ఋ', 'ౠ', 'ఌ', 'ౡ', 'ఎ', 'ఏ', 'ఐ', 'ఒ', 'ఓ', 'ఔ',
];

/// The 36 canonical consonants followed by the 3 extended ones (ౘ ౙ ౚ).
pub const CONSONANTS: [char; 39] = [
    'క', 'ఖ', 'గ', 'ఘ', 'ఙ', 'చ', 'ఛ', 'జ', 'ఝ', 'ఞ', 'ట', 'ఠ', 'డ', 'ఢ', 'ణ',
    'త', 'థ', 'ద', 'ధ', 'న', 'ప', 'ఫ', 'బ', 'భ', 'మ', 'య', 'ర', 'ఱ', 'ల', 'ళ',
    'ఴ', 'వ', 'శ', 'ష', 'స', 'హ', 'ౘ', 'ౙ', 'ౚ',
];

/// Dependent vowel signs, then candrabindu, anusvara and visarga.
pub const DEPENDENT_SIGNS: [char; 16] = [
    'ా', 'ి', 'ీ', 'ు', 'ూ', 'ృ', 'ౄ', 'ె', 'ే', 'ై', 'ొ', 'ో', 'ౌ', 'ఁ', 'ం', 'ః',
];

/// True for any codepoint in the Telugu block (U+0C00..=U+0C7F).
pub fn is_telugu(c: char) -> bool {
    ('\u{0c00}'..='\u{0c7f}').contains(&c)
}

/// Total classification of a codepoint. Never fails; unknown input is `Other`.
pub fn classify(c: char) -> CodepointClass {
    match c {
        '\u{0c05}'..='\u{0c0c}' | '\u{0c0e}'..='\u{0c10}' | '\u{0c12}'..='\u{0c14}'
        | '\u{0c60}' | '\u{0c61}' => CodepointClass::IndependentVowel,
        '\u{0c15}'..='\u{0c28}' | '\u{0c2a}'..='\u{0c39}' | '\u{0c58}'..='\u{0c5a}' => {
            CodepointClass::Consonant
        }
        '\u{0c3e}'..='\u{0c44}' | '\u{0c46}'..='\u{0c48}' | '\u{0c4a}'..='\u{0c4c}'
        | CANDRABINDU | ANUSVARA | VISARGA => CodepointClass::DependentVowelSign,
        VIRAMA => CodepointClass::ConjunctMarker,
        _ => CodepointClass::Other,
    }
}

/// Signs that may trail an already closed akshara.
pub fn is_modifier(c: char) -> bool {
    matches!(c, CANDRABINDU | ANUSVARA | VISARGA)
}

pub fn is_anusvara_or_visarga(c: char) -> bool {
    matches!(c, ANUSVARA | VISARGA)
}

/// Vowels and consonants, in the order the character table is printed.
pub fn letter_order() -> impl Iterator<Item = char> {
    INDEPENDENT_VOWELS.iter().chain(CONSONANTS.iter()).copied()
}
