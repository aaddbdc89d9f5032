//! Table serialization.
use std::io::Write;

use super::Table;
use crate::error::Error;

/// UTF-8 byte order mark, written first so that spreadsheet editors detect the encoding.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `table` as CSV: BOM, header, records, then the malformed rows as they were read.
pub fn write<W: Write>(mut dst: W, table: &Table) -> Result<(), Error> {
    dst.write_all(BOM)?;

    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(dst);
    wtr.write_record(table.header())?;
    for record in table.records() {
        wtr.write_record(table.row_of(record))?;
    }
    for row in table.malformed() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
