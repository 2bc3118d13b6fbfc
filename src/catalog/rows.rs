//! Flat category rows parsed from header-keyed CSV data.
//!
//! The source sheet has three labeled columns (대분류/중분류/소분류). The
//! minor and sub cells of one record may encode parallel bracketed lists
//! (`"['원피스', '셔츠']"`); those are expanded into one row per minor with
//! the i-th sub paired positionally. Malformed records are skipped
//! silently — one bad row never fails the whole load.

use std::io::Read;

/// Sentinel label meaning "no finer category" at this depth.
pub const NONE_SENTINEL: &str = "없음";

/// Header label of the top-level category column.
pub const COL_MAJOR: &str = "대분류";
/// Header label of the mid-level category column.
pub const COL_MINOR: &str = "중분류";
/// Header label of the fine-level category column.
pub const COL_SUB: &str = "소분류";

/// One flat (major, minor, sub) label triple.
///
/// Any field may be empty, meaning the path ends at the previous depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRow {
    /// Top-level label; blank majors contribute nothing to the tree.
    pub major: String,
    /// Mid-level label, possibly blank.
    pub minor: String,
    /// Fine-level label, possibly blank.
    pub sub: String,
}

impl CategoryRow {
    /// Convenience constructor used by tests and fixtures.
    #[must_use]
    pub fn new(major: &str, minor: &str, sub: &str) -> Self {
        Self {
            major: major.to_owned(),
            minor: minor.to_owned(),
            sub: sub.to_owned(),
        }
    }
}

/// Read and expand category rows from CSV data.
///
/// The reader must produce a header record naming the three columns;
/// missing columns fail the load (the navigation screen then stays on its
/// loading indicator). Individual unreadable records are skipped.
pub fn read_rows<R: Read>(reader: R) -> super::Result<Vec<CategoryRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let major_at = column_index(&headers, COL_MAJOR)
        .ok_or_else(|| format!("category data has no {COL_MAJOR} column"))?;
    let minor_at = column_index(&headers, COL_MINOR);
    let sub_at = column_index(&headers, COL_SUB);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let Ok(record) = record else {
            // Malformed row: contributes nothing rather than failing the build.
            continue;
        };
        let major = record.get(major_at).unwrap_or_default().trim();
        let minors = parse_cell_list(minor_at.and_then(|i| record.get(i)).unwrap_or_default());
        let subs = parse_cell_list(sub_at.and_then(|i| record.get(i)).unwrap_or_default());
        rows.extend(expand_row(major, &minors, &subs));
    }
    Ok(rows)
}

/// Locate `name` in the header record.
fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

/// Expand one CSV record into flat triples by positional pairing.
///
/// The i-th minor pairs with the i-th sub; a missing sub at that index
/// yields an empty label. A record with no minors still contributes its
/// major as a top-level leaf. Triples whose labels are all blank or
/// sentinel are dropped.
fn expand_row(major: &str, minors: &[String], subs: &[String]) -> Vec<CategoryRow> {
    let triples: Vec<CategoryRow> = if minors.is_empty() {
        vec![CategoryRow::new(major, "", "")]
    } else {
        minors
            .iter()
            .enumerate()
            .map(|(i, minor)| {
                let sub = subs.get(i).map(String::as_str).unwrap_or_default();
                CategoryRow::new(major, minor, sub)
            })
            .collect()
    };
    triples
        .into_iter()
        .filter(|row| {
            [&row.major, &row.minor, &row.sub]
                .into_iter()
                .any(|label| !label.is_empty() && label != NONE_SENTINEL)
        })
        .collect()
}

/// Parse a cell that may hold a single label or a bracketed list.
///
/// Strips the surrounding `[` `]`, splits on commas, trims whitespace and
/// single quotes, and drops blank or sentinel entries.
fn parse_cell_list(raw: &str) -> Vec<String> {
    let inner = raw
        .trim()
        .strip_prefix('[')
        .map_or_else(|| raw.trim(), |s| s.strip_suffix(']').unwrap_or(s));
    inner
        .split(',')
        .map(|part| {
            part.trim()
                .trim_start_matches('\'')
                .trim_end_matches('\'')
                .trim()
        })
        .filter(|part| !part.is_empty() && *part != NONE_SENTINEL)
        .map(str::to_owned)
        .collect()
}
