// src/specs/subregions.rs
//! Page spec for the continental-subregion population listing.
//!
//! Every `wikitable` block on the page is one area's year series (Year,
//! Pop., ±% p.a.), preceded by a handful of layout/infobox tables that the
//! ingester drops by header shape. This spec returns raw header+row tables
//! only; no cleanup, no typing.

use crate::config::consts::PAGE_PATH;
use crate::core::html::{inner_after_open_tag, next_tag_block_ci, open_tag_attrs, strip_tags};
use crate::core::net;
use crate::core::sanitize::{normalize_entities, strip_refs};
use crate::error::ScrapeError;
use crate::ingest::RawTable;

pub fn fetch() -> Result<Vec<RawTable>, ScrapeError> {
    let doc = net::http_get(PAGE_PATH)?;
    let tables = extract_tables(&doc);
    if tables.is_empty() {
        return Err(ScrapeError::NoTables);
    }
    logf!("pulled {} raw table(s) from {}", tables.len(), PAGE_PATH);
    Ok(tables)
}

/// Walk every `<table>` block and keep the `wikitable`-class ones.
pub fn extract_tables(doc: &str) -> Vec<RawTable> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some((tb_s, tb_e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let block = &doc[tb_s..tb_e];
        pos = tb_e;

        if open_tag_attrs(block).contains("wikitable") {
            out.push(parse_table(block));
        }
    }
    out
}

/// Shape one table block: first `<th>`-bearing row becomes the header,
/// every `<td>`-bearing row a body row.
fn parse_table(block: &str) -> RawTable {
    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();

    let mut tr_pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(block, "<tr", "</tr>", tr_pos) {
        let tr = &block[tr_s..tr_e];
        tr_pos = tr_e;

        let th_cells = cells_of(tr, "<th", "</th>");
        if !th_cells.is_empty() {
            if headers.is_empty() {
                headers = th_cells;
            }
            continue; // repeated header rows carry nothing new
        }

        let td_cells = cells_of(tr, "<td", "</td>");
        if !td_cells.is_empty() {
            rows.push(td_cells);
        }
    }

    RawTable { headers, rows }
}

fn cells_of(tr: &str, open: &str, close: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((c_s, c_e)) = next_tag_block_ci(tr, open, close, pos) {
        let inner = inner_after_open_tag(&tr[c_s..c_e]);
        cells.push(strip_refs(&strip_tags(normalize_entities(&inner))));
        pos = c_e;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal synthetic snippet following the page's layout: one nav table
    // without the wikitable class, then one series table with footnote refs,
    // grouped digits and a missing-value dash.
    const SNIPPET: &str = r#"
        <html><body>
          <table class="infobox"><tr><td>nav junk</td></tr></table>
          <table class="wikitable sortable">
            <caption>Eastern Africa</caption>
            <tr><th>Year</th><th>Pop.</th><th>±% p.a.</th></tr>
            <tr><td>1950</td><td>227,510<sup>[1]</sup></td><td>—</td></tr>
            <tr><td>1960</td><td>250&nbsp;000</td><td>+1.04%</td></tr>
          </table>
        </body></html>
    "#;

    #[test]
    fn keeps_only_wikitable_blocks() {
        let tables = extract_tables(SNIPPET);
        assert_eq!(tables.len(), 1);
    }

    #[test]
    fn shapes_headers_and_rows() {
        let t = &extract_tables(SNIPPET)[0];
        assert_eq!(t.headers[0], "Year");
        assert_eq!(t.headers[1], "Pop.");
        assert_eq!(t.rows.len(), 2);
        // refs stripped, entities resolved, tags gone
        assert_eq!(t.rows[0][0], "1950");
        assert_eq!(t.rows[0][1], "227,510");
        assert_eq!(t.rows[1][1], "250 000");
    }
}
