use crate::format;
use crate::types::{Entry, SortOrder};
use comfy_table::{Table, presets};
use std::cmp::Reverse;

/// Order entries by byte size. The sort is stable, so entries of equal
/// size keep their enumeration order.
pub fn sort_entries(entries: &mut [Entry], order: SortOrder) {
    match order {
        SortOrder::Ascending => entries.sort_by_key(|entry| entry.size),
        SortOrder::Descending => entries.sort_by_key(|entry| Reverse(entry.size)),
    }
}

/// Render entries as two aligned columns: name, then formatted size.
/// Entries whose size has no rendering (zero bytes, a terabyte and above)
/// produce no line. An empty listing renders as an empty string.
pub fn render(entries: &[Entry]) -> String {
    let rows: Vec<(String, String)> = entries
        .iter()
        .filter_map(|entry| {
            format::human_size(entry.size).map(|size| (entry.name.clone(), size))
        })
        .collect();

    if rows.is_empty() {
        return String::new();
    }

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    for (name, size) in rows {
        table.add_row(vec![name, size]);
    }

    let mut columns = table.column_iter_mut();
    if let Some(name_column) = columns.next() {
        name_column.set_padding((0, 2));
    }
    if let Some(size_column) = columns.next() {
        size_column.set_padding((0, 0));
    }

    table.to_string()
}
