use akshara_core::core::classifier::{classify, is_anusvara_or_visarga};
use akshara_core::core::category::{bucket_label, categorize, ANUSVARA_VISARGA_LABEL};
use akshara_core::core::frequency::aggregate;
use akshara_core::core::segmenter::segment;
use akshara_core::core::types::CodepointClass;
use akshara_core::ocr::{OcrEngine, OcrError};
use akshara_core::{extract_and_analyze, AnalysisEngine, Error};

const PASSAGE: &str = "రాముడు అడవికి వెళ్ళాడు. సీత, లక్ష్మణుడు రాముడు వెంట వెళ్ళారు!\n\
                       నమస్కారం 123 hello పుస్తకం దుఃఖం శ్రీ";

fn classified(text: &str, class: CodepointClass) -> u64 {
    text.chars().filter(|&c| classify(c) == class).count() as u64
}

#[test]
fn frequency_tables_conserve_codepoints() {
    let freq = aggregate(PASSAGE);
    assert_eq!(
        freq.characters.total(),
        classified(PASSAGE, CodepointClass::IndependentVowel)
            + classified(PASSAGE, CodepointClass::Consonant)
    );
    assert_eq!(freq.matras.total(), classified(PASSAGE, CodepointClass::DependentVowelSign));
    assert_eq!(freq.conjunct_markers, classified(PASSAGE, CodepointClass::ConjunctMarker));
}

#[test]
fn repetition_scales_every_count() {
    let k = 5;
    let single = aggregate("లక్ష్మణుడు");
    let repeated = aggregate(&vec!["లక్ష్మణుడు"; k].join(" "));
    let k = k as u64;

    assert_eq!(repeated.words[0].frequency, k);
    for (one, many) in single.characters.rows().iter().zip(repeated.characters.rows()) {
        assert_eq!(many.1, one.1 * k, "{}", one.0);
    }
    for (one, many) in single.matras.rows().iter().zip(repeated.matras.rows()) {
        assert_eq!(many.1, one.1 * k, "{}", one.0);
    }
    assert_eq!(repeated.implicit_vowels, single.implicit_vowels * k);
}

#[test]
fn worked_examples() {
    let seg = segment("రాముడు");
    assert_eq!(seg.texts(), vec!["రా", "ము", "డు"]);
    assert_eq!((seg.akshara_count(), seg.matras, seg.implicit_vowels), (3, 3, 0));

    let seg = segment("నమస్కారం");
    assert!(seg.texts().contains(&"స్కా"));
    let table = categorize("నమస్కారం");
    let primary = bucket_label(seg.akshara_count(), seg.matras);
    assert_eq!(table.get(&primary).map(|w| w.len()), Some(1));
    assert_eq!(table.get(ANUSVARA_VISARGA_LABEL).map(|w| w.len()), Some(1));

    let once = aggregate("పుస్తకం");
    let twice = aggregate("పుస్తకం పుస్తకం");
    assert_eq!(twice.words[0].frequency, 2);
    assert_eq!(twice.words[0].letters.total(), 2 * once.words[0].letters.total());
    assert_eq!(twice.words[0].matras.total(), 2 * once.words[0].matras.total());
}

#[test]
fn each_word_has_at_most_one_primary_bucket() {
    let table = categorize(PASSAGE);
    let engine = AnalysisEngine::new();
    let report = engine.analyze(PASSAGE);
    for w in &report.frequency.words {
        let hits = table
            .rows()
            .iter()
            .filter(|(label, words)| label != ANUSVARA_VISARGA_LABEL && words.contains(&w.word))
            .count();
        assert!(hits <= 1, "{} in {} buckets", w.word, hits);
        let special = table.get(ANUSVARA_VISARGA_LABEL).unwrap_or_default();
        assert_eq!(special.contains(&w.word), w.word.chars().any(is_anusvara_or_visarga));
    }
}

#[test]
fn total_over_arbitrary_input() {
    let engine = AnalysisEngine::new();
    for text in ["", "   \n\t", "hello, world", "్్్", "ాిీ", "\u{0c29}\u{0c3d}౧౨", "క్\u{200c}ష"] {
        let report = engine.analyze(text);
        assert!(report.categories.is_empty(), "{text:?}");
    }
    let report = engine.analyze("");
    assert_eq!(report.frequency.characters.total(), 0);
    assert_eq!(report.frequency.matras.total(), 0);
    assert!(report.frequency.words.is_empty());
}

struct Recorded(&'static str);

impl OcrEngine for Recorded {
    fn recognize(&self, _image: &[u8]) -> Result<String, OcrError> {
        Ok(self.0.to_string())
    }
}

struct Broken;

impl OcrEngine for Broken {
    fn recognize(&self, _image: &[u8]) -> Result<String, OcrError> {
        Err(OcrError::EngineFailed {
            status: "exit status: 1".into(),
            stderr: "Failed loading language 'tel'".into(),
        })
    }
}

#[test]
fn pipeline_analyzes_the_corrected_text() {
    let (text, report) =
        extract_and_analyze(&Recorded("రాముడు రాముడ"), b"png", |t| format!("{}ు", t)).unwrap();
    assert_eq!(text, "రాముడు రాముడు");
    assert_eq!(report.frequency.words.len(), 1);
    assert_eq!(report.frequency.words[0].frequency, 2);
}

#[test]
fn degraded_ocr_output_still_analyzes() {
    let (_, report) = extract_and_analyze(&Recorded(""), b"", |t| t).unwrap();
    assert!(report.frequency.words.is_empty());

    let err = extract_and_analyze(&Broken, b"", |t| t).unwrap_err();
    assert!(matches!(err, Error::Ocr(OcrError::EngineFailed { .. })));
}
