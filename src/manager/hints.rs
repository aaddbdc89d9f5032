/*! Machine translation hints

Two distinct jobs, see [HintKind]:

- [HintKind::FrenchSuggestion] translates the transcription to French into `machine_suggestion`,
  leaving `french_translation` for a human.
- [HintKind::EnglishBackfill] translates the (human) French translation into `english_translation`.

Targets are computed before any record is modified.
Provider calls are spaced by [ManagerConfig::delay], across jobs run by the same [HintGenerator].
A failed request is logged and recorded in [HintOutcome::failures], and the run goes on.
!*/
use std::cell::Cell;
use std::fmt;
use std::time::Instant;

use log::{debug, info, warn};

use crate::config::ManagerConfig;
use crate::error::Error;
use crate::normalize::clean_for_translation;
use crate::record::{Field, Record};
use crate::table::{Checkpoint, Table};
use crate::translate::{TranslateError, Translator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    FrenchSuggestion,
    EnglishBackfill,
}

impl HintKind {
    /// field the text to translate is read from
    pub fn source(&self) -> Field {
        match self {
            HintKind::FrenchSuggestion => Field::KirundiTranscription,
            HintKind::EnglishBackfill => Field::FrenchTranslation,
        }
    }

    /// field the translation is written to
    pub fn destination(&self) -> Field {
        match self {
            HintKind::FrenchSuggestion => Field::MachineSuggestion,
            HintKind::EnglishBackfill => Field::EnglishTranslation,
        }
    }

    /// `true` if the record needs this job.
    pub fn selects(&self, record: &Record) -> bool {
        match self {
            HintKind::FrenchSuggestion => {
                record.has(Field::KirundiTranscription) && !record.has_french() && !record.has_hint()
            }
            HintKind::EnglishBackfill => record.has_french() && !record.has_english(),
        }
    }

    /// (source, target) language codes
    fn languages<'a>(&self, config: &'a ManagerConfig) -> (&'a str, &'a str) {
        match self {
            HintKind::FrenchSuggestion => (config.source_lang.as_str(), config.french_lang.as_str()),
            HintKind::EnglishBackfill => (config.french_lang.as_str(), config.english_lang.as_str()),
        }
    }
}

impl fmt::Display for HintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintKind::FrenchSuggestion => write!(f, "french suggestions"),
            HintKind::EnglishBackfill => write!(f, "english backfill"),
        }
    }
}

/// Something that went wrong during a hint run, without stopping it.
#[derive(Debug)]
pub enum HintFailure {
    Translation {
        /// position of the record in the table at the time of the run
        row: usize,
        text: String,
        error: TranslateError,
    },
    Checkpoint(Error),
}

impl fmt::Display for HintFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintFailure::Translation { row, text, error } => {
                write!(f, "row {} ({:?}): {}", row, text, error)
            }
            HintFailure::Checkpoint(e) => write!(f, "checkpoint: {}", e),
        }
    }
}

#[derive(Debug, Default)]
pub struct HintOutcome {
    /// records selected for translation
    pub selected: usize,
    /// records whose translation was stored
    pub translated: usize,
    pub failures: Vec<HintFailure>,
}

fn preview(text: &str) -> String {
    text.chars().take(30).collect()
}

/// Indices of the records `kind` applies to.
pub fn select(table: &Table, kind: HintKind) -> Vec<usize> {
    table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| kind.selects(r))
        .map(|(idx, _)| idx)
        .collect()
}

pub struct HintGenerator<'a, T> {
    translator: T,
    config: &'a ManagerConfig,
    /// end of the previous provider call
    last_call: Cell<Option<Instant>>,
}

impl<'a, T: Translator> HintGenerator<'a, T> {
    pub fn new(translator: T, config: &'a ManagerConfig) -> Self {
        Self {
            translator,
            config,
            last_call: Cell::new(None),
        }
    }

    /// Waits until [ManagerConfig::delay] has passed since the previous call.
    fn wait_turn(&self) {
        if let Some(last) = self.last_call.get() {
            let elapsed = last.elapsed();
            if elapsed < self.config.delay {
                std::thread::sleep(self.config.delay - elapsed);
            }
        }
    }

    /// Runs `kind` over the table.
    ///
    /// Every [ManagerConfig::checkpoint_every] stored translations, the table is handed to `checkpoint`.
    pub fn generate<C: Checkpoint>(
        &self,
        kind: HintKind,
        table: &mut Table,
        checkpoint: &mut C,
    ) -> HintOutcome {
        let targets = select(table, kind);
        let mut outcome = HintOutcome {
            selected: targets.len(),
            ..Default::default()
        };

        if targets.is_empty() {
            info!("{}: nothing to translate", kind);
            return outcome;
        }
        info!("{}: {} records to translate", kind, targets.len());

        let (source_lang, target_lang) = kind.languages(self.config);

        for idx in targets {
            let text = clean_for_translation(table.records()[idx].get(kind.source()));
            if text.is_empty() {
                debug!("row {}: nothing left to translate after cleaning", idx);
                continue;
            }

            self.wait_turn();
            let translated = self.translator.translate(&text, source_lang, target_lang);
            self.last_call.set(Some(Instant::now()));

            match translated {
                Ok(translation) => {
                    info!(
                        "[{}] {}... -> {}...",
                        outcome.translated + 1,
                        preview(&text),
                        preview(&translation)
                    );
                    *table.records_mut()[idx].get_mut(kind.destination()) = translation;
                    outcome.translated += 1;

                    if self.config.checkpoint_every > 0
                        && outcome.translated % self.config.checkpoint_every == 0
                    {
                        if let Err(e) = checkpoint.checkpoint(table) {
                            warn!("checkpoint failed: {}", e);
                            outcome.failures.push(HintFailure::Checkpoint(e));
                        }
                    }
                }
                Err(error) => {
                    warn!("row {}: translation failed: {}", idx, error);
                    outcome.failures.push(HintFailure::Translation {
                        row: idx,
                        text,
                        error,
                    });
                }
            }
        }

        info!(
            "{}: {} translated, {} failures",
            kind,
            outcome.translated,
            outcome.failures.len()
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;
    use crate::table::NoCheckpoint;

    /// Answers from a fixed dictionary, fails on anything else.
    #[derive(Default)]
    struct Dictionary {
        entries: HashMap<String, String>,
        calls: RefCell<Vec<(String, String, String)>>,
    }

    impl Dictionary {
        fn with(entries: &[(&str, &str)]) -> Self {
            Self {
                entries: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                ..Default::default()
            }
        }
    }

    impl Translator for Dictionary {
        fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError> {
            self.calls
                .borrow_mut()
                .push((text.to_string(), source.to_string(), target.to_string()));
            self.entries
                .get(text)
                .cloned()
                .ok_or_else(|| TranslateError::Parse(format!("unknown text {:?}", text)))
        }
    }

    #[derive(Default)]
    struct Counter {
        saves: Vec<usize>,
    }

    impl Checkpoint for Counter {
        fn checkpoint(&mut self, table: &Table) -> Result<(), Error> {
            let done = table.records().iter().filter(|r| r.has_hint()).count();
            self.saves.push(done);
            Ok(())
        }
    }

    struct Broken;

    impl Checkpoint for Broken {
        fn checkpoint(&mut self, _table: &Table) -> Result<(), Error> {
            Err(Error::Custom("file is locked".to_string()))
        }
    }

    fn config() -> ManagerConfig {
        ManagerConfig {
            delay: Duration::ZERO,
            ..Default::default()
        }
    }

    #[test]
    fn french_suggestion_goes_to_hint_field() {
        let mut t = Table::with_canonical_header();
        t.push(Record::from_transcription("Ego"));

        let config = config();
        let dict = Dictionary::with(&[("Ego", "Oui")]);
        let generator = HintGenerator::new(&dict, &config);
        let outcome = generator.generate(HintKind::FrenchSuggestion, &mut t, &mut NoCheckpoint);

        assert_eq!(outcome.selected, 1);
        assert_eq!(outcome.translated, 1);
        assert_eq!(t.records()[0].machine_suggestion, "Oui");
        assert_eq!(t.records()[0].french_translation, "");
        assert_eq!(
            dict.calls.borrow()[0],
            ("Ego".to_string(), "rn".to_string(), "fr".to_string())
        );
    }

    #[test]
    fn selection() {
        let kind = HintKind::FrenchSuggestion;
        assert!(kind.selects(&Record::from_transcription("Ego")));
        assert!(!kind.selects(&Record::from_transcription("  ")));
        assert!(!kind.selects(&Record {
            kirundi_transcription: "Ego".into(),
            machine_suggestion: "Oui".into(),
            ..Default::default()
        }));
        assert!(!kind.selects(&Record {
            kirundi_transcription: "Ego".into(),
            french_translation: "Oui".into(),
            ..Default::default()
        }));

        let kind = HintKind::EnglishBackfill;
        assert!(kind.selects(&Record {
            kirundi_transcription: "Ego".into(),
            french_translation: "Oui".into(),
            ..Default::default()
        }));
        assert!(!kind.selects(&Record {
            french_translation: "Oui".into(),
            english_translation: "Yes".into(),
            ..Default::default()
        }));
        assert!(!kind.selects(&Record::from_transcription("Ego")));
    }

    #[test]
    fn english_backfill_writes_translation() {
        let mut t = Table::with_canonical_header();
        t.push(Record {
            kirundi_transcription: "Ego".into(),
            french_translation: "« Oui »".into(),
            ..Default::default()
        });

        let config = config();
        let dict = Dictionary::with(&[("Oui", "Yes")]);
        let outcome = HintGenerator::new(&dict, &config).generate(
            HintKind::EnglishBackfill,
            &mut t,
            &mut NoCheckpoint,
        );

        assert_eq!(outcome.translated, 1);
        let r = &t.records()[0];
        assert_eq!(r.english_translation, "Yes");
        assert_eq!(r.machine_suggestion, "");
        assert_eq!(r.french_translation, "« Oui »");
        assert_eq!(dict.calls.borrow()[0].1, "fr");
        assert_eq!(dict.calls.borrow()[0].2, "en");
    }

    #[test]
    fn failures_are_collected() {
        let mut t = Table::with_canonical_header();
        t.push(Record::from_transcription("Ego"));
        t.push(Record::from_transcription("Ijambo ritazwi"));
        t.push(Record::from_transcription("Oya"));

        let config = config();
        let dict = Dictionary::with(&[("Ego", "Oui"), ("Oya", "Non")]);
        let outcome = HintGenerator::new(&dict, &config).generate(
            HintKind::FrenchSuggestion,
            &mut t,
            &mut NoCheckpoint,
        );

        assert_eq!(outcome.translated, 2);
        assert_eq!(outcome.failures.len(), 1);
        match &outcome.failures[0] {
            HintFailure::Translation { row, text, .. } => {
                assert_eq!(*row, 1);
                assert_eq!(text, "Ijambo ritazwi");
            }
            other => panic!("unexpected failure {:?}", other),
        }
        assert_eq!(t.records()[1].machine_suggestion, "");
        assert_eq!(t.records()[2].machine_suggestion, "Non");
    }

    #[test]
    fn text_is_cleaned_before_translation() {
        let mut t = Table::with_canonical_header();
        t.push(Record::from_transcription(" \"Umwāna\" "));
        t.push(Record::from_transcription("\"\""));

        let config = config();
        let dict = Dictionary::with(&[("Umwana", "L'enfant")]);
        let outcome = HintGenerator::new(&dict, &config).generate(
            HintKind::FrenchSuggestion,
            &mut t,
            &mut NoCheckpoint,
        );

        assert_eq!(outcome.selected, 2);
        assert_eq!(outcome.translated, 1);
        // the quotes-only record is never sent
        assert_eq!(dict.calls.borrow().len(), 1);
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn checkpoint_every_n() {
        let mut t = Table::with_canonical_header();
        let words = ["a", "b", "c", "d", "e", "f", "g"];
        for w in words {
            t.push(Record::from_transcription(w));
        }

        let config = ManagerConfig {
            checkpoint_every: 3,
            ..config()
        };
        let entries: Vec<(&str, &str)> = words.iter().map(|w| (*w, *w)).collect();
        let dict = Dictionary::with(&entries);
        let mut counter = Counter::default();
        let outcome =
            HintGenerator::new(&dict, &config).generate(HintKind::FrenchSuggestion, &mut t, &mut counter);

        assert_eq!(outcome.translated, 7);
        assert_eq!(counter.saves, vec![3, 6]);
    }

    /// Records when each request arrives.
    #[derive(Default)]
    struct Clock {
        calls: RefCell<Vec<Instant>>,
    }

    impl Translator for Clock {
        fn translate(&self, text: &str, _: &str, _: &str) -> Result<String, TranslateError> {
            self.calls.borrow_mut().push(Instant::now());
            Ok(text.to_string())
        }
    }

    #[test]
    fn delay_between_jobs() {
        let mut t = Table::with_canonical_header();
        t.push(Record::from_transcription("Ego"));
        t.push(Record {
            kirundi_transcription: "Oya".into(),
            french_translation: "Non".into(),
            ..Default::default()
        });

        let config = ManagerConfig {
            delay: Duration::from_millis(100),
            ..config()
        };
        let clock = Clock::default();
        let generator = HintGenerator::new(&clock, &config);
        generator.generate(HintKind::FrenchSuggestion, &mut t, &mut NoCheckpoint);
        generator.generate(HintKind::EnglishBackfill, &mut t, &mut NoCheckpoint);

        let calls = clock.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls[1] - calls[0] >= config.delay);
    }

    #[test]
    fn first_call_is_not_delayed() {
        let mut t = Table::with_canonical_header();
        t.push(Record::from_transcription("Ego"));

        let config = ManagerConfig {
            delay: Duration::from_secs(5),
            ..config()
        };
        let clock = Clock::default();
        let start = Instant::now();
        HintGenerator::new(&clock, &config).generate(
            HintKind::FrenchSuggestion,
            &mut t,
            &mut NoCheckpoint,
        );
        assert!(clock.calls.borrow()[0] - start < config.delay);
    }

    #[test]
    fn failing_checkpoint_does_not_stop_the_run() {
        let mut t = Table::with_canonical_header();
        t.push(Record::from_transcription("Ego"));
        t.push(Record::from_transcription("Oya"));

        let config = ManagerConfig {
            checkpoint_every: 1,
            ..config()
        };
        let dict = Dictionary::with(&[("Ego", "Oui"), ("Oya", "Non")]);
        let outcome =
            HintGenerator::new(&dict, &config).generate(HintKind::FrenchSuggestion, &mut t, &mut Broken);

        assert_eq!(outcome.translated, 2);
        assert_eq!(outcome.failures.len(), 2);
        assert!(matches!(outcome.failures[0], HintFailure::Checkpoint(_)));
    }
}
