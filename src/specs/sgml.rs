// src/specs/sgml.rs
// HTML errcodes-appendix table parser (PostgreSQL < 9.1).
//
// The appendix carries the codes in the second <table> of the page. Class
// header rows span the full width via colspan; data rows look like
//   <td><tt>42501</tt></td><td>INSUFFICIENT PRIVILEGE</td><td>insufficient_privilege</td>
// with the two label columns required to agree. One historical layout (the
// 9.1 appendix) has only two cells, condition name in <tt>.

use std::error::Error;

use super::PageSpec;
use crate::catalog::Catalog;
use crate::core::html::{
    inner_after_open_tag, next_tag_block_ci, open_tag, slice_between_ci, strip_tags,
    to_lowercase_fast,
};
use crate::core::sanitize::normalize_entities;
use crate::params::Params;
use crate::version::Version;

pub struct SgmlSpec;

impl PageSpec for SgmlSpec {
    fn name(&self) -> &'static str {
        "sgml"
    }

    fn url(&self, params: &Params, version: Version) -> (String, String) {
        (
            s!(params.sgml_url.host),
            params.sgml_url.path_for(&version.to_string()),
        )
    }

    fn parse(&self, doc: &str) -> Result<Catalog, Box<dyn Error>> {
        parse_doc(doc)
    }
}

pub fn parse_doc(doc: &str) -> Result<Catalog, Box<dyn Error>> {
    let table = second_table(doc).ok_or("errcodes table not found")?;
    let tbody = slice_between_ci(table, "<tbody", "</tbody>").ok_or("errcodes table has no tbody")?;

    let mut cat = Catalog::new();
    let mut current_class: Option<String> = None;

    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(tbody, "<tr", "</tr>", pos) {
        let tr = &tbody[tr_s..tr_e];
        pos = tr_e;

        let (td_s, td_e) = next_tag_block_ci(tr, "<td", "</td>", 0)
            .ok_or_else(|| format!("row without cells: {tr}"))?;

        if to_lowercase_fast(open_tag(&tr[td_s..td_e])).contains("colspan") {
            // Class header row: all text nodes joined, em-dash flattened
            let label = class_label(tr);
            if !label.starts_with("Class") {
                return Err(format!("unexpected class row: {label}").into());
            }
            let class = label.split_whitespace().nth(1).unwrap_or_default();
            if class.chars().count() != 2 {
                return Err(format!("bad class code in: {label}").into());
            }
            cat.insert_class(class, &label);
            current_class = Some(s!(class));
        } else {
            // Data row, keyed by the monospaced code in the first cell
            let code = first_tt_text(tr).ok_or_else(|| format!("data row without <tt>: {tr}"))?;
            if code.chars().count() != 5 {
                return Err(format!("bad error code {code:?} in: {tr}").into());
            }

            let cells = td_blocks(tr);
            let label = match cells.len() {
                3 => {
                    let label = underscore_upper(&cell_text(cells[1]));
                    // double check the two label columns agree
                    let cond_name = cell_text(cells[2]).trim().to_uppercase();
                    if label != cond_name {
                        return Err(
                            format!("label mismatch: {label:?} vs {cond_name:?} in: {tr}").into()
                        );
                    }
                    label
                }
                2 => {
                    // found in PG 9.1 docs
                    first_tt_text(cells[1])
                        .ok_or_else(|| format!("no <tt> label in: {tr}"))?
                        .to_uppercase()
                }
                n => return Err(format!("unexpected row with {n} cells: {tr}").into()),
            };

            let class = current_class
                .as_deref()
                .ok_or_else(|| format!("data row before any class row: {tr}"))?;
            cat.insert_error(class, &code, &label);
        }
    }

    Ok(cat)
}

/* ---------- helpers ---------- */

/// The error-code table is the second <table> on the page.
fn second_table(doc: &str) -> Option<&str> {
    let (_, first_end) = next_tag_block_ci(doc, "<table", "</table>", 0)?;
    let (start, end) = next_tag_block_ci(doc, "<table", "</table>", first_end)?;
    Some(&doc[start..end])
}

fn td_blocks(tr: &str) -> Vec<&str> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", pos) {
        cells.push(&tr[td_s..td_e]);
        pos = td_e;
    }
    cells
}

/// Row text with tags stripped, whitespace collapsed, U+2014 → '-'.
fn class_label(tr: &str) -> String {
    strip_tags(normalize_entities(tr)).replace('\u{2014}', "-")
}

fn cell_text(td: &str) -> String {
    strip_tags(normalize_entities(&inner_after_open_tag(td)))
}

/// Text of the first `<tt>` block inside `s`, if any.
fn first_tt_text(s: &str) -> Option<String> {
    let (tt_s, tt_e) = next_tag_block_ci(s, "<tt", "</tt>", 0)?;
    Some(strip_tags(normalize_entities(&inner_after_open_tag(
        &s[tt_s..tt_e],
    ))))
}

/// "INSUFFICIENT PRIVILEGE" → "INSUFFICIENT_PRIVILEGE"
fn underscore_upper(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &str) -> String {
        format!(
            "<html><body>\n\
             <table class=nav><tr><td>nav junk</td></tr></table>\n\
             <table border=\"1\"><tbody>\n{rows}\n</tbody></table>\n\
             </body></html>"
        )
    }

    const CLASS_ROW: &str = "<tr><td colspan=\"3\">Class 42 \u{2014} Syntax Error or Access Rule Violation</td></tr>";

    #[test]
    fn class_row_and_three_cell_data_row() {
        let doc = page(&format!(
            "{CLASS_ROW}\n\
             <tr><td><tt>42501</tt></td><td>INSUFFICIENT PRIVILEGE</td><td>insufficient_privilege</td></tr>"
        ));
        let cat = parse_doc(&doc).unwrap();
        assert_eq!(
            cat.classes["42"],
            "Class 42 - Syntax Error or Access Rule Violation"
        );
        assert_eq!(cat.errors["42"]["42501"], "INSUFFICIENT_PRIVILEGE");
    }

    #[test]
    fn two_cell_data_row_takes_tt_label() {
        let doc = page(&format!(
            "{CLASS_ROW}\n\
             <tr><td><tt>42601</tt></td><td><tt>syntax_error</tt></td></tr>"
        ));
        let cat = parse_doc(&doc).unwrap();
        assert_eq!(cat.errors["42"]["42601"], "SYNTAX_ERROR");
    }

    #[test]
    fn label_mismatch_is_fatal() {
        let doc = page(&format!(
            "{CLASS_ROW}\n\
             <tr><td><tt>42501</tt></td><td>INSUFFICIENT PRIVILEGE</td><td>wrong_name</td></tr>"
        ));
        let err = parse_doc(&doc).unwrap_err();
        assert!(err.to_string().contains("label mismatch"));
    }

    #[test]
    fn four_cell_row_is_fatal() {
        let doc = page(&format!(
            "{CLASS_ROW}\n\
             <tr><td><tt>42501</tt></td><td>a</td><td>b</td><td>c</td></tr>"
        ));
        let err = parse_doc(&doc).unwrap_err();
        assert!(err.to_string().contains("4 cells"));
    }

    #[test]
    fn class_row_must_start_with_class() {
        let doc = page("<tr><td colspan=\"3\">Appendix A. Error Codes</td></tr>");
        let err = parse_doc(&doc).unwrap_err();
        assert!(err.to_string().contains("unexpected class row"));
    }

    #[test]
    fn missing_table_or_tbody_is_fatal() {
        assert!(parse_doc("<html><table><tbody></tbody></table></html>")
            .unwrap_err()
            .to_string()
            .contains("table not found"));
        let doc = "<table><tr><td>x</td></tr></table><table><tr><td>y</td></tr></table>";
        assert!(parse_doc(doc).unwrap_err().to_string().contains("tbody"));
    }

    #[test]
    fn em_dash_entity_also_normalized() {
        let doc = page(
            "<tr><td colspan=\"3\">Class 08 &mdash; Connection Exception</td></tr>\n\
             <tr><td><tt>08000</tt></td><td>CONNECTION EXCEPTION</td><td>connection_exception</td></tr>",
        );
        let cat = parse_doc(&doc).unwrap();
        assert_eq!(cat.classes["08"], "Class 08 - Connection Exception");
    }
}
