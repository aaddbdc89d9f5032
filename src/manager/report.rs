//! Progress report.
use std::fmt;

use super::sort::{Ranking, Status};
use crate::table::Table;

/// Completion counts of a table.
///
/// Every record is counted in exactly one of `complete`, `needs_english` and `needs_french`.
/// With [Ranking::TwoLevel], `needs_english` is always 0 and `complete` counts every translated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    pub ranking: Ranking,
    pub total: usize,
    pub complete: usize,
    pub needs_english: usize,
    pub needs_french: usize,
}

impl Report {
    pub fn from_table(table: &Table, ranking: Ranking) -> Self {
        let mut report = Report {
            ranking,
            total: table.len(),
            ..Default::default()
        };
        for record in table.records() {
            match (ranking, Status::of(&record.completeness())) {
                (_, Status::NeedsFrench) => report.needs_french += 1,
                (Ranking::TwoLevel, _) | (Ranking::ThreeLevel, Status::Complete) => {
                    report.complete += 1
                }
                (Ranking::ThreeLevel, Status::NeedsEnglish) => report.needs_english += 1,
            }
        }
        report
    }

    pub fn incomplete(&self) -> usize {
        self.total - self.complete
    }

    /// Share of complete records, in percent. 0 for an empty table.
    pub fn percent_complete(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.complete as f64 * 100.0 / self.total as f64
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(40);
        writeln!(f, "{}", rule)?;
        writeln!(f, "FINAL DATASET REPORT")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Total phrases:          {}", self.total)?;
        match self.ranking {
            Ranking::ThreeLevel => {
                writeln!(
                    f,
                    "Complete:               {} ({:.1}%)",
                    self.complete,
                    self.percent_complete()
                )?;
                writeln!(f, "Needs English/metadata: {}", self.needs_english)?;
                writeln!(f, "Needs French:           {}", self.needs_french)?;
                writeln!(f, "Incomplete:             {}", self.incomplete())?;
            }
            Ranking::TwoLevel => {
                writeln!(
                    f,
                    "Translated (human):     {} ({:.1}%)",
                    self.complete,
                    self.percent_complete()
                )?;
                writeln!(f, "Missing translation:    {}", self.needs_french)?;
            }
        }
        write!(f, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn table() -> Table {
        let mut t = Table::with_canonical_header();
        let full = Record {
            kirundi_transcription: "Ego".into(),
            french_translation: "Oui".into(),
            english_translation: "Yes".into(),
            domain: "General".into(),
            ..Default::default()
        };
        let no_english = Record {
            english_translation: String::new(),
            ..full.clone()
        };
        let no_domain = Record {
            domain: " ".into(),
            ..full.clone()
        };
        t.push(full);
        t.push(no_english);
        t.push(no_domain);
        t.push(Record::from_transcription("Oya"));
        t
    }

    #[test]
    fn counts_sum_to_total() {
        let t = table();
        let r = Report::from_table(&t, Ranking::ThreeLevel);
        assert_eq!((r.total, r.complete, r.needs_english, r.needs_french), (4, 1, 2, 1));
        assert_eq!(r.complete + r.needs_english + r.needs_french, r.total);
        assert_eq!(r.incomplete(), 3);
        assert_eq!(r.percent_complete(), 25.0);

        let r = Report::from_table(&t, Ranking::TwoLevel);
        assert_eq!((r.total, r.complete, r.needs_english, r.needs_french), (4, 3, 0, 1));
        assert_eq!(r.complete + r.needs_english + r.needs_french, r.total);
    }

    #[test]
    fn empty_table() {
        let r = Report::from_table(&Table::with_canonical_header(), Ranking::ThreeLevel);
        assert_eq!(r.total, 0);
        assert_eq!(r.percent_complete(), 0.0);
    }

    #[test]
    fn display() {
        let out = Report::from_table(&table(), Ranking::ThreeLevel).to_string();
        assert!(out.contains("Total phrases:          4"));
        assert!(out.contains("Complete:               1 (25.0%)"));
        assert!(out.contains("Needs English/metadata: 2"));
        assert!(out.contains("Needs French:           1"));

        let out = Report::from_table(&table(), Ranking::TwoLevel).to_string();
        assert!(out.contains("Translated (human):     3 (75.0%)"));
        assert!(out.contains("Missing translation:    1"));
    }
}
