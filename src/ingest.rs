// src/ingest.rs
//
// Normalizes the raw page tables into one flat run of (year, population)
// samples. Leading blocks without the expected columns are navigation or
// infobox noise and get dropped; every block after the first data block
// must conform or the whole run is rejected.

use crate::config::consts::MISSING_GLYPH;
use crate::error::IngestError;

/// One raw table as extracted from the page: a header row plus body rows
/// of plain-text cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One normalized sample. Area assignment happens later, in segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub year: i32,
    pub population: u64,
}

/// Literal cleanup pass over every cell: percent signs go, the page's
/// missing-value glyph becomes a zero. Idempotent.
pub fn scrub(tables: &mut [RawTable]) {
    for t in tables {
        for h in &mut t.headers {
            scrub_cell(h);
        }
        for row in &mut t.rows {
            for cell in row {
                scrub_cell(cell);
            }
        }
    }
}

fn scrub_cell(cell: &mut String) {
    if cell.contains('%') {
        *cell = cell.replace('%', "");
    }
    if cell.contains(MISSING_GLYPH) {
        *cell = cell.replace(MISSING_GLYPH, "0");
    }
    if cell.trim().len() != cell.len() {
        *cell = cell.trim().to_string();
    }
}

/// Scrub, drop leading non-data blocks, concatenate the rest into samples.
pub fn ingest(mut tables: Vec<RawTable>) -> Result<Vec<Sample>, IngestError> {
    scrub(&mut tables);

    let first = tables
        .iter()
        .position(is_data_block)
        .ok_or_else(|| IngestError::MalformedInput(s!("no table with Year and Pop. columns")))?;
    if first > 0 {
        logd!("dropped {} leading non-data block(s)", first);
    }

    let mut samples = Vec::new();
    for (ti, table) in tables.iter().enumerate().skip(first) {
        let year_col = find_col(&table.headers, is_year_header).ok_or_else(|| {
            IngestError::MalformedInput(format!("table {}: no Year column", ti))
        })?;
        let pop_col = find_col(&table.headers, is_pop_header).ok_or_else(|| {
            IngestError::MalformedInput(format!("table {}: no population column", ti))
        })?;

        for (ri, row) in table.rows.iter().enumerate() {
            let year = cell(row, year_col)
                .and_then(parse_year)
                .ok_or_else(|| bad_cell(ti, ri, "Year", cell(row, year_col)))?;
            let population = cell(row, pop_col)
                .and_then(parse_count)
                .ok_or_else(|| bad_cell(ti, ri, "Pop.", cell(row, pop_col)))?;
            samples.push(Sample { year, population });
        }
    }

    logf!("ingested {} samples from {} table(s)", samples.len(), tables.len() - first);
    Ok(samples)
}

fn cell(row: &[String], col: usize) -> Option<&str> {
    row.get(col).map(String::as_str)
}

fn bad_cell(table: usize, row: usize, field: &str, got: Option<&str>) -> IngestError {
    IngestError::MalformedInput(format!(
        "table {}, row {}: {} field is {}",
        table,
        row,
        field,
        match got {
            Some(v) => format!("non-numeric ({:?})", v),
            None => s!("absent"),
        }
    ))
}

/// A data block is any table carrying both expected columns.
fn is_data_block(table: &RawTable) -> bool {
    find_col(&table.headers, is_year_header).is_some()
        && find_col(&table.headers, is_pop_header).is_some()
}

fn find_col(headers: &[String], pred: fn(&str) -> bool) -> Option<usize> {
    headers.iter().position(|h| pred(h.trim()))
}

fn is_year_header(h: &str) -> bool {
    h.eq_ignore_ascii_case("year")
}

fn is_pop_header(h: &str) -> bool {
    let lc = h.to_ascii_lowercase();
    lc == "pop." || lc == "pop" || lc == "population"
}

fn parse_year(s: &str) -> Option<i32> {
    s.trim().parse().ok()
}

/// Grouped count: "228,683" / "1 234" / plain digits.
fn parse_count(s: &str) -> Option<u64> {
    let digits: String = s
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}'))
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
