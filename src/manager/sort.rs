//! Completeness classification and sorting.
//!
//! Records are ordered by rank (most complete first), then by transcription.
//! The tie-break compares the raw transcription by Unicode code point, so it is total and stable
//! across runs regardless of how the text is normalized.
use std::cmp::Ordering;

use crate::record::{Completeness, Record};
use crate::table::Table;

/// How much work a record still needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// french, english and domain are filled
    Complete = 0,
    /// french is filled, english or domain is missing
    NeedsEnglish = 1,
    /// french is missing
    NeedsFrench = 2,
}

impl Status {
    pub fn of(c: &Completeness) -> Self {
        match (c.french, c.english && c.domain) {
            (true, true) => Status::Complete,
            (true, false) => Status::NeedsEnglish,
            (false, _) => Status::NeedsFrench,
        }
    }
}

/// Ranking rule used to sort the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ranking {
    /// complete / needs english or metadata / needs french
    #[default]
    ThreeLevel,
    /// translated / not translated. Only french is tracked.
    TwoLevel,
}

impl Ranking {
    /// Lower is more complete.
    pub fn rank(&self, record: &Record) -> u8 {
        match self {
            Ranking::ThreeLevel => Status::of(&record.completeness()) as u8,
            Ranking::TwoLevel => {
                if record.has_french() {
                    0
                } else {
                    1
                }
            }
        }
    }

    /// Sort order: rank, then transcription.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.rank(a)
            .cmp(&self.rank(b))
            .then_with(|| a.kirundi_transcription.cmp(&b.kirundi_transcription))
    }
}

/// Stable sort of the table records by `ranking`.
pub fn sort_by_completeness(table: &mut Table, ranking: Ranking) {
    table.records_mut().sort_by(|a, b| ranking.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, french: bool, english: bool, domain: bool) -> Record {
        let fill = |b: bool, v: &str| if b { v.to_string() } else { String::new() };
        Record {
            kirundi_transcription: text.to_string(),
            french_translation: fill(french, "fr"),
            english_translation: fill(english, "en"),
            domain: fill(domain, "General"),
            ..Default::default()
        }
    }

    fn all_combinations() -> Vec<Record> {
        let mut v = Vec::new();
        for bits in 0..8u8 {
            v.push(record(
                &format!("r{}", bits),
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
            ));
        }
        v
    }

    #[test]
    fn three_level_rule() {
        let r = Ranking::ThreeLevel;
        assert_eq!(r.rank(&record("a", true, true, true)), 0);
        assert_eq!(r.rank(&record("a", true, false, true)), 1);
        assert_eq!(r.rank(&record("a", true, true, false)), 1);
        assert_eq!(r.rank(&record("a", true, false, false)), 1);
        assert_eq!(r.rank(&record("a", false, true, true)), 2);
        assert_eq!(r.rank(&record("a", false, false, false)), 2);
    }

    #[test]
    fn two_level_rule() {
        let r = Ranking::TwoLevel;
        assert_eq!(r.rank(&record("a", true, false, false)), 0);
        assert_eq!(r.rank(&record("a", true, true, true)), 0);
        assert_eq!(r.rank(&record("a", false, true, true)), 1);
    }

    #[test]
    fn rank_is_monotone_in_completeness() {
        // a record satisfying a superset of another's predicates never ranks after it
        let records = all_combinations();
        let r = Ranking::ThreeLevel;
        for a in &records {
            for b in &records {
                let (ca, cb) = (a.completeness(), b.completeness());
                let a_implies_b = (!cb.french || ca.french)
                    && (!cb.english || ca.english)
                    && (!cb.domain || ca.domain);
                if a_implies_b {
                    assert!(
                        r.rank(a) <= r.rank(b),
                        "{:?} ranked after {:?}",
                        ca,
                        cb
                    );
                }
            }
        }
    }

    #[test]
    fn sort_groups_then_alphabetical() {
        let mut table = Table::with_canonical_header();
        for r in [
            record("Zina", false, false, false),
            record("Amahoro", false, false, false),
            record("Umwana", true, false, true),
            record("Ego", true, true, true),
            record("Abana", true, true, true),
            record("Inka", true, true, false),
        ] {
            table.push(r);
        }

        sort_by_completeness(&mut table, Ranking::ThreeLevel);
        let order: Vec<&str> = table
            .records()
            .iter()
            .map(|r| r.kirundi_transcription.as_str())
            .collect();
        assert_eq!(order, vec!["Abana", "Ego", "Inka", "Umwana", "Amahoro", "Zina"]);

        sort_by_completeness(&mut table, Ranking::TwoLevel);
        let order: Vec<&str> = table
            .records()
            .iter()
            .map(|r| r.kirundi_transcription.as_str())
            .collect();
        assert_eq!(order, vec!["Abana", "Ego", "Inka", "Umwana", "Amahoro", "Zina"]);
    }

    #[test]
    fn tie_break_is_code_point_order() {
        let mut table = Table::with_canonical_header();
        for t in ["abana", "Umwana", "Abana", ""] {
            table.push(record(t, false, false, false));
        }
        sort_by_completeness(&mut table, Ranking::ThreeLevel);
        let order: Vec<&str> = table
            .records()
            .iter()
            .map(|r| r.kirundi_transcription.as_str())
            .collect();
        assert_eq!(order, vec!["", "Abana", "Umwana", "abana"]);
    }
}
