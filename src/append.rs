/*! Appending scraped sentences

Merges the scraped-sentences file into the master table.

A sentence is added only if its [comparison_key](crate::normalize::comparison_key) matches neither an existing
transcription (malformed rows included) nor an earlier sentence of the same batch.
Once the table is saved, the scraped file is truncated: the batch is consumed.
!*/
use std::fs::{self, File};
use std::io::{BufRead, BufReader};

use log::info;

use crate::config::Paths;
use crate::error::Error;
use crate::filtering::{FilterMut, Unseen};
use crate::record::{Field, Record};
use crate::table::{Table, TableStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppendOutcome {
    /// distinct transcriptions already in the table
    pub existing: usize,
    pub added: usize,
    /// duplicates and blank lines
    pub skipped: usize,
}

/// Adds `sentences` to `table`, skipping duplicates.
pub fn append_sentences<'a>(
    table: &mut Table,
    sentences: impl IntoIterator<Item = &'a str>,
) -> AppendOutcome {
    let set_aside = table.malformed_values(Field::KirundiTranscription);
    let mut seen = Unseen::with_known(
        table
            .records()
            .iter()
            .map(|r| r.kirundi_transcription.as_str())
            .chain(set_aside.iter().map(String::as_str)),
    );
    let mut outcome = AppendOutcome {
        existing: seen.len(),
        ..Default::default()
    };

    for sentence in sentences {
        let sentence = sentence.trim();
        if seen.detect_mut(sentence) {
            table.push(Record::from_transcription(sentence));
            outcome.added += 1;
        } else {
            outcome.skipped += 1;
        }
    }
    outcome
}

/// Reads the scraped sentences, appends the new ones to the master table, then clears the scraped file.
///
/// Nothing is written if either file is missing or unreadable.
pub fn append_scraped(paths: &Paths) -> Result<AppendOutcome, Error> {
    let store = TableStore::new(&paths.table);
    let mut table = store.load(&[Field::KirundiTranscription])?;

    if !paths.scraped.exists() {
        return Err(Error::MissingFile(paths.scraped.clone()));
    }
    let lines = BufReader::new(File::open(&paths.scraped)?)
        .lines()
        .collect::<Result<Vec<String>, _>>()?;

    let outcome = append_sentences(&mut table, lines.iter().map(String::as_str));
    info!(
        "{} existing sentences, {} new, {} skipped",
        outcome.existing, outcome.added, outcome.skipped
    );

    if outcome.added == 0 {
        info!("no new sentences found, {:?} is already up to date", paths.table);
    } else {
        store.save(&table)?;
        info!("added {} new sentences to {:?}", outcome.added, paths.table);
    }

    fs::write(&paths.scraped, "")?;
    Ok(outcome)
}
