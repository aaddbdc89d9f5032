//! Removal of machine suggestions made obsolete by a human translation.
use log::info;

use crate::table::Table;

/// Clears `machine_suggestion` on every record that has a `french_translation`.
///
/// Returns the number of suggestions removed.
pub fn cleanup_completed_hints(table: &mut Table) -> usize {
    let mut cleaned = 0;
    for record in table.records_mut() {
        if record.has_french() && !record.machine_suggestion.is_empty() {
            record.machine_suggestion.clear();
            cleaned += 1;
        }
    }
    info!("cleanup: removed {} obsolete machine suggestions", cleaned);
    cleaned
}
