//! Default metadata.
use log::info;

use crate::table::Table;

/// Sets every blank `domain` to `default`. Returns the number of records changed.
pub fn backfill_domain(table: &mut Table, default: &str) -> usize {
    let mut filled = 0;
    for record in table.records_mut().iter_mut().filter(|r| !r.has_domain()) {
        record.domain = default.to_string();
        filled += 1;
    }
    info!("backfill: set domain '{}' on {} records", default, filled);
    filled
}
