//! Lookup table loader: CSV of (dstport, protocol) → tag mappings.
//!
//! The table is user-supplied classification data. Keys are normalized
//! (trimmed, lowercased) at load time so the processor can do exact-match
//! lookups against normalized record fields.

use std::path::Path;

use indexmap::IndexMap;

use crate::config::MAX_LOOKUP_ENTRIES;
use crate::error::AppError;

/// (destination port, protocol name), both lowercase and trimmed.
pub type LookupKey = (String, String);

/// Mapping from (port, protocol) to classification tag. Insertion-ordered;
/// a later row with the same key overwrites the earlier one.
pub type LookupTable = IndexMap<LookupKey, String>;

/// Column headers the lookup file must provide.
const REQUIRED_COLUMNS: [&str; 3] = ["dstport", "protocol", "tag"];

/// Load the lookup table from a CSV file with header columns
/// `dstport`, `protocol`, `tag`.
///
/// Fails with [`AppError::MissingLookupColumn`] if a required header is
/// absent and [`AppError::InputTooLarge`] if the table exceeds
/// [`MAX_LOOKUP_ENTRIES`] distinct keys.
pub fn load_lookup_table(path: &Path) -> Result<LookupTable, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Io(format!("cannot open lookup table {}: {e}", path.display())))?;

    let headers = reader.headers()?.clone();
    let mut columns = [0usize; 3];
    for (slot, name) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::MissingLookupColumn(name.to_string()))?;
    }
    let [dstport_col, protocol_col, tag_col] = columns;

    let mut table = LookupTable::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let field = |col: usize| {
            record.get(col).ok_or_else(|| {
                AppError::MalformedLookupRow(format!(
                    "row {} has {} columns, expected at least {}",
                    row_idx + 2, // 1-based, after the header row
                    record.len(),
                    col + 1
                ))
            })
        };

        let dstport = field(dstport_col)?.to_lowercase();
        let protocol = field(protocol_col)?.to_lowercase();
        let tag = field(tag_col)?.to_string();
        table.insert((dstport, protocol), tag);

        if table.len() > MAX_LOOKUP_ENTRIES {
            return Err(AppError::InputTooLarge(format!(
                "lookup table exceeds {MAX_LOOKUP_ENTRIES} mappings"
            )));
        }
    }

    tracing::info!(entries = table.len(), "lookup table loaded");
    Ok(table)
}
