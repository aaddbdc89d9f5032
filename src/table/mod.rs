/*! Master table

In-memory representation of `metadata.csv`.

The header layout is kept as read (original spellings, original column order, unknown columns included),
so that a load/save cycle only changes what the tools changed.
Rows that do not have as many fields as the header, or that are not valid UTF-8, are kept aside byte for byte
and written back at the end of the file.

- [reader] parses a table from any [std::io::Read].
- [writer] serializes it back.
- [store] binds a table to a file and provides checkpoints.
!*/
pub mod reader;
pub mod store;
pub mod writer;

use log::info;

use crate::record::{Field, Record};

pub use store::{Checkpoint, NoCheckpoint, TableStore};

/// What a column of the file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Known(Field),
    /// index into [Record::extra]
    Extra(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    header: Vec<String>,
    columns: Vec<Column>,
    records: Vec<Record>,
    malformed: Vec<csv::ByteRecord>,
}

impl Table {
    /// Empty table with the canonical header.
    pub fn with_canonical_header() -> Self {
        Self {
            header: Field::ALL.iter().map(|f| f.header().to_string()).collect(),
            columns: Field::ALL.iter().map(|f| Column::Known(*f)).collect(),
            ..Default::default()
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows left out of processing at read time, as they were read.
    pub fn malformed(&self) -> &[csv::ByteRecord] {
        &self.malformed
    }

    /// Values of `field` in the malformed rows long enough to have one, lossily decoded.
    pub fn malformed_values(&self, field: Field) -> Vec<String> {
        let idx = match self.columns.iter().position(|c| *c == Column::Known(field)) {
            Some(idx) => idx,
            None => return Vec::new(),
        };
        self.malformed
            .iter()
            .filter_map(|row| row.get(idx))
            .map(|value| String::from_utf8_lossy(value).into_owned())
            .collect()
    }

    pub fn has_column(&self, field: Field) -> bool {
        self.columns.contains(&Column::Known(field))
    }

    /// Adds `field` as the last column if the file did not have it.
    ///
    /// Returns `true` if the column was created.
    pub fn ensure_column(&mut self, field: Field) -> bool {
        if self.has_column(field) {
            return false;
        }
        info!("created new '{}' column", field.header());
        self.header.push(field.header().to_string());
        self.columns.push(Column::Known(field));
        true
    }

    /// Values of a record in column order.
    pub fn row_of<'a>(&self, record: &'a Record) -> Vec<&'a str> {
        self.columns
            .iter()
            .map(|column| match column {
                Column::Known(field) => record.get(*field),
                Column::Extra(idx) => record.extra.get(*idx).map(String::as_str).unwrap_or(""),
            })
            .collect()
    }
}
