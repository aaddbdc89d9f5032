/*! Dataset manager

One pass over the master table:

1. cleanup of machine suggestions made obsolete by a human translation ([cleanup])
2. french suggestions for untranslated records ([hints])
3. english backfill from the french translation ([hints])
4. default domain ([backfill])
5. completeness sort ([sort])
6. save, then report ([report])

Per-record failures are collected in the returned [RunSummary]; load and save failures abort the run.
!*/
pub mod backfill;
pub mod cleanup;
pub mod hints;
pub mod report;
pub mod sort;

use log::info;

use crate::config::ManagerConfig;
use crate::error::Error;
use crate::record::Field;
use crate::table::TableStore;
use crate::translate::Translator;

pub use backfill::backfill_domain;
pub use cleanup::cleanup_completed_hints;
pub use hints::{HintFailure, HintGenerator, HintKind, HintOutcome};
pub use report::Report;
pub use sort::{sort_by_completeness, Ranking, Status};

/// Columns the manager cannot run without.
pub const REQUIRED: &[Field] = &[Field::KirundiTranscription, Field::FrenchTranslation];

#[derive(Debug)]
pub struct RunSummary {
    pub cleaned: usize,
    pub french: HintOutcome,
    pub english: Option<HintOutcome>,
    pub domains_filled: usize,
    pub report: Report,
}

impl RunSummary {
    /// Every non-fatal failure of the run.
    pub fn failures(&self) -> impl Iterator<Item = &HintFailure> {
        self.french
            .failures
            .iter()
            .chain(self.english.iter().flat_map(|e| e.failures.iter()))
    }
}

pub struct Manager<'a, T> {
    config: &'a ManagerConfig,
    translator: T,
}

impl<'a, T: Translator> Manager<'a, T> {
    pub fn new(config: &'a ManagerConfig, translator: T) -> Self {
        Self { config, translator }
    }

    pub fn run(&self, store: &TableStore) -> Result<RunSummary, Error> {
        let mut table = store.load(REQUIRED)?;
        table.ensure_column(Field::MachineSuggestion);
        table.ensure_column(Field::Domain);
        if self.config.english_backfill {
            table.ensure_column(Field::EnglishTranslation);
        }

        let cleaned = cleanup_completed_hints(&mut table);

        let generator = HintGenerator::new(&self.translator, self.config);
        let mut checkpoint = store.clone();
        let french = generator.generate(HintKind::FrenchSuggestion, &mut table, &mut checkpoint);
        let english = if self.config.english_backfill {
            Some(generator.generate(HintKind::EnglishBackfill, &mut table, &mut checkpoint))
        } else {
            None
        };

        let domains_filled = backfill_domain(&mut table, &self.config.default_domain);

        sort_by_completeness(&mut table, self.config.ranking);

        store.save(&table)?;
        info!("{:?} updated and saved", store.path());

        Ok(RunSummary {
            cleaned,
            french,
            english,
            domains_filled,
            report: Report::from_table(&table, self.config.ranking),
        })
    }
}
