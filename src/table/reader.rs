//! Table parsing.
use std::io::Read;

use csv::StringRecord;
use log::{debug, warn};

use super::{Column, Table};
use crate::error::Error;
use crate::record::{Field, Record};

const BOM: char = '\u{feff}';

/// Maps raw header names to columns.
///
/// Names are trimmed and lowercased before lookup, and a leading BOM is ignored.
/// When a known column appears twice, the first one wins and the other is kept as an extra column.
fn layout(raw: &[String]) -> (Vec<String>, Vec<Column>) {
    let normalized: Vec<String> = raw
        .iter()
        .map(|h| h.trim_start_matches(BOM).trim().to_lowercase())
        .collect();

    let mut columns = Vec::with_capacity(raw.len());
    let mut nb_extra = 0;
    for name in &normalized {
        match Field::from_key(name) {
            Some(field) if !columns.contains(&Column::Known(field)) => {
                columns.push(Column::Known(field))
            }
            _ => {
                columns.push(Column::Extra(nb_extra));
                nb_extra += 1;
            }
        }
    }
    (normalized, columns)
}

fn to_record(columns: &[Column], row: &StringRecord) -> Record {
    let mut record = Record::default();
    for (column, value) in columns.iter().zip(row.iter()) {
        match column {
            Column::Known(field) => *record.get_mut(*field) = value.to_string(),
            Column::Extra(_) => record.extra.push(value.to_string()),
        }
    }
    record
}

/// Reads a table from CSV data.
///
/// Fails if there is no header, if the header is not valid UTF-8, if one of `required` is not a column,
/// or if the data cannot be read at all.
/// Rows with a wrong field count or invalid UTF-8 are logged and set aside, byte for byte.
pub fn read<R: Read>(src: R, required: &[Field]) -> Result<Table, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(src);
    let mut rows = rdr.byte_records();

    let raw_header: Vec<String> = match rows.next() {
        Some(header) => StringRecord::from_byte_record(header?)
            .map_err(|e| Error::Custom(format!("header: {}", e)))?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches(BOM).to_string()
                } else {
                    h.to_string()
                }
            })
            .collect(),
        None => return Err(Error::EmptyTable(Default::default())),
    };

    let (normalized, columns) = layout(&raw_header);
    debug!("header layout: {:?}", columns);

    for field in required {
        if !columns.contains(&Column::Known(*field)) {
            return Err(Error::MissingColumn {
                column: field.key(),
                raw: raw_header,
                normalized,
            });
        }
    }

    let mut table = Table {
        header: raw_header,
        columns,
        ..Default::default()
    };

    for (line, row) in rows.enumerate() {
        // header is line 1
        let line = line + 2;
        let row = row?;

        if row.len() != table.columns.len() {
            warn!(
                "line {}: expected {} fields, got {}. Row is kept as is and left out of processing",
                line,
                table.columns.len(),
                row.len()
            );
            table.malformed.push(row);
            continue;
        }

        match StringRecord::from_byte_record(row) {
            Ok(row) => table.records.push(to_record(&table.columns, &row)),
            Err(e) => {
                warn!(
                    "line {}: {}. Row is kept as is and left out of processing",
                    line,
                    e.utf8_error()
                );
                table.malformed.push(e.into_byte_record());
            }
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\u{feff}File_Path, Kirundi_Transcription ,French_Translation,English_Translation,Domain,Speaker_id,Age,Gender\n\
a.wav,Umwana ni mwiza,L'enfant est beau,,Family,s1,20,F\n\
b.wav,Gira amahoro,,,,,,\n";

    #[test]
    fn bom_and_case_insensitive_header() {
        let t = read(CSV.as_bytes(), &[Field::KirundiTranscription]).unwrap();
        assert_eq!(t.header()[0], "File_Path");
        assert!(t.has_column(Field::FilePath));
        assert!(t.has_column(Field::KirundiTranscription));
        assert!(!t.has_column(Field::MachineSuggestion));
        assert_eq!(t.len(), 2);

        let first = &t.records()[0];
        assert_eq!(first.file_path, "a.wav");
        assert_eq!(first.kirundi_transcription, "Umwana ni mwiza");
        assert_eq!(first.french_translation, "L'enfant est beau");
        assert_eq!(first.domain, "Family");
        assert_eq!(first.gender, "F");
    }

    #[test]
    fn missing_column() {
        let data = "Kirundi Transcription,French_Translation\nEgo,Oui\n";
        match read(data.as_bytes(), &[Field::KirundiTranscription]) {
            Err(Error::MissingColumn {
                column,
                raw,
                normalized,
            }) => {
                assert_eq!(column, "kirundi_transcription");
                assert_eq!(raw[0], "Kirundi Transcription");
                assert_eq!(normalized[0], "kirundi transcription");
            }
            other => panic!("expected missing column, got {:?}", other),
        }
    }

    #[test]
    fn empty_input() {
        assert!(matches!(
            read("".as_bytes(), &[]),
            Err(Error::EmptyTable(_))
        ));
    }

    #[test]
    fn malformed_rows_set_aside() {
        let data = "kirundi_transcription,french_translation\nEgo,Oui\nOya,Non,extra\nNeza,Bien\n";
        let t = read(data.as_bytes(), &[Field::KirundiTranscription]).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.malformed(), &[vec!["Oya", "Non", "extra"]]);
        assert_eq!(t.records()[1].kirundi_transcription, "Neza");
    }

    #[test]
    fn invalid_utf8_row_set_aside() {
        let data = b"kirundi_transcription,french_translation\nUmwana,L'enfant \xe9l\xe8ve\nEgo,Oui\n";
        let t = read(&data[..], &[Field::KirundiTranscription]).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.records()[0].kirundi_transcription, "Ego");
        assert_eq!(
            t.malformed(),
            &[vec![&b"Umwana"[..], &b"L'enfant \xe9l\xe8ve"[..]]]
        );
    }

    #[test]
    fn invalid_utf8_header() {
        let data = b"kirundi_transcription,fran\xe7ais\nEgo,Oui\n";
        assert!(matches!(
            read(&data[..], &[Field::KirundiTranscription]),
            Err(Error::Custom(_))
        ));
    }

    #[test]
    fn unknown_columns_kept() {
        let data = "notes,kirundi_transcription,notes2,domain,DOMAIN\nx,Ego,y,General,dup\n";
        let t = read(data.as_bytes(), &[]).unwrap();
        let r = &t.records()[0];
        assert_eq!(r.extra, vec!["x", "y", "dup"]);
        assert_eq!(r.domain, "General");
        assert_eq!(t.row_of(r), vec!["x", "Ego", "y", "General", "dup"]);
    }
}
