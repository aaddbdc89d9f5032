/*! Text normalization.

- [comparison_key] is the deduplication key: case-folded, punctuation-stripped, whitespace-collapsed.
- [clean_for_translation] prepares a transcription for the translation provider.
- [clean_scraped_sentence] removes wiki noise from a scraped sentence fragment.
!*/
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use unic_ucd::GeneralCategory;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// "Akarorero:" (example) and "Uturorero:" (examples) leading labels.
    static ref EXAMPLE_PREFIX: Regex =
        Regex::new(r"(?i)^\s*(?:akarorero|uturorero)\s*:\s*").unwrap();
    /// Parenthesized etymology notes, e.g. "(iri jambo ni ingereka)".
    static ref LOANWORD_NOTE: Regex = Regex::new(r"(?i)\([^)]*ni ingereka[^)]*\)").unwrap();
    /// Reference markers like "[1]" or "[citation]".
    static ref REFERENCE: Regex = Regex::new(r"\[.*?\]").unwrap();
}

const DOUBLE_QUOTES: &[char] = &['"', '\u{201C}', '\u{201D}', '\u{201E}', '\u{00AB}', '\u{00BB}'];

/// Comparison key used for deduplication and duplicate checks.
///
/// ```
/// use kirundi_dataset::normalize::comparison_key;
/// assert_eq!(comparison_key("Amahoro, Amahoro!"), "amahoro amahoro");
/// ```
pub fn comparison_key(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !GeneralCategory::of(*c).is_punctuation())
        .collect::<String>()
        .split_whitespace()
        .join(" ")
}

/// Removes accents and other combining marks (`ā` -> `a`, `ĭ` -> `i`).
pub fn strip_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !GeneralCategory::of(*c).is_mark())
        .nfc()
        .collect()
}

/// Prepares a transcription for the translation provider:
/// accents are removed, double quotes dropped and surrounding whitespace trimmed.
///
/// Apostrophes are kept since they mark elision in Kirundi (`n'intumwa`).
pub fn clean_for_translation(text: &str) -> String {
    strip_diacritics(text)
        .chars()
        .filter(|c| !DOUBLE_QUOTES.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Cleans a sentence fragment extracted from a wiki page.
pub fn clean_scraped_sentence(text: &str) -> String {
    let text = strip_diacritics(text);
    let text = EXAMPLE_PREFIX.replace(&text, "");
    let text = LOANWORD_NOTE.replace_all(&text, "");
    let text: String = text.chars().filter(|c| !['^', '*', ':'].contains(c)).collect();
    let text = REFERENCE.replace_all(&text, "");

    text.trim()
        .trim_matches(|c| c == '(' || c == ')' || c == '"')
        .trim()
        .to_string()
}
