// File: src/report.rs
//! Renderers for the three tables of an [`AnalysisReport`].

use crate::config::OutputFormat;
use crate::core::classifier::VIRAMA;
use crate::core::engine::AnalysisReport;
use crate::core::frequency::WordBreakdown;
use crate::error::Result;
use serde::Serialize;

/// Shown in the matras column for consonants that kept their inherent vowel.
pub const IMPLICIT_VOWEL_MARK: &str = "✓(అ)";

/// The full character table: letters, dependent signs, then the virama.
pub fn character_rows(report: &AnalysisReport) -> Vec<(char, u64)> {
    let freq = &report.frequency;
    freq.characters
        .rows()
        .iter()
        .chain(freq.matras.rows())
        .copied()
        .chain(std::iter::once((VIRAMA, freq.conjunct_markers)))
        .collect()
}

/// One character per line, in table order, ready to paste as a column.
pub fn characters_column(report: &AnalysisReport) -> String {
    character_rows(report).iter().map(|(c, _)| c.to_string()).collect::<Vec<_>>().join("\n")
}

/// One count per line, aligned with [`characters_column`].
pub fn counts_column(report: &AnalysisReport) -> String {
    character_rows(report).iter().map(|(_, n)| n.to_string()).collect::<Vec<_>>().join("\n")
}

fn symbol_counts(rows: impl Iterator<Item = (String, u64)>) -> String {
    rows.map(|(s, n)| format!("{}-{}", s, n)).collect::<Vec<_>>().join(", ")
}

fn letters_cell(word: &WordBreakdown) -> String {
    symbol_counts(word.letters.non_zero().map(|(c, n)| (c.to_string(), n)))
}

fn matras_cell(word: &WordBreakdown) -> String {
    let implicit = (word.implicit_vowels > 0)
        .then(|| (IMPLICIT_VOWEL_MARK.to_string(), word.implicit_vowels));
    symbol_counts(word.matras.non_zero().map(|(c, n)| (c.to_string(), n)).chain(implicit))
}

pub trait ReportFormatter {
    fn character_table(&self, report: &AnalysisReport) -> Result<String>;
    fn word_table(&self, report: &AnalysisReport) -> Result<String>;
    fn category_table(&self, report: &AnalysisReport) -> Result<String>;

    /// All three tables, separated by blank lines.
    fn render(&self, report: &AnalysisReport) -> Result<String> {
        Ok([
            self.character_table(report)?,
            self.word_table(report)?,
            self.category_table(report)?,
        ]
        .join("\n\n"))
    }
}

/// Tab-separated rows, one table row per line.
pub struct TsvFormatter;

impl ReportFormatter for TsvFormatter {
    fn character_table(&self, report: &AnalysisReport) -> Result<String> {
        Ok(character_rows(report)
            .iter()
            .map(|(c, n)| format!("{}\t{}", c, n))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn word_table(&self, report: &AnalysisReport) -> Result<String> {
        Ok(report
            .frequency
            .words
            .iter()
            .map(|w| format!("{}\t{}\t{}\t{}", w.word, w.frequency, letters_cell(w), matras_cell(w)))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn category_table(&self, report: &AnalysisReport) -> Result<String> {
        Ok(report
            .categories
            .rows()
            .iter()
            .map(|(label, words)| format!("{}\t{}", label, words.join(", ")))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[derive(Serialize)]
struct CharacterRow {
    character: char,
    count: u64,
}

#[derive(Serialize)]
struct WordRow<'a> {
    word: &'a str,
    frequency: u64,
    aksharas: Vec<&'a str>,
    letters: Vec<(char, u64)>,
    matras: Vec<(char, u64)>,
    implicit_vowels: u64,
}

#[derive(Serialize)]
struct CategoryRow<'a> {
    category: &'a str,
    words: &'a [String],
}

/// Pretty-printed JSON arrays, one per table.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn character_table(&self, report: &AnalysisReport) -> Result<String> {
        let rows: Vec<CharacterRow> = character_rows(report)
            .into_iter()
            .map(|(character, count)| CharacterRow { character, count })
            .collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }

    fn word_table(&self, report: &AnalysisReport) -> Result<String> {
        let rows: Vec<WordRow> = report
            .frequency
            .words
            .iter()
            .map(|w| WordRow {
                word: &w.word,
                frequency: w.frequency,
                aksharas: w.segmentation.texts(),
                letters: w.letters.non_zero().collect(),
                matras: w.matras.non_zero().collect(),
                implicit_vowels: w.implicit_vowels,
            })
            .collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }

    fn category_table(&self, report: &AnalysisReport) -> Result<String> {
        let rows: Vec<CategoryRow> = report
            .categories
            .rows()
            .iter()
            .map(|(category, words)| CategoryRow { category, words })
            .collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }
}

pub fn formatter_for(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Tsv => Box::new(TsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
