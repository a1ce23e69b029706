use super::Extractor;
use crate::error::PickerError;
use crate::model::TableRow;
use log::debug;

/// Opening marker of a MediaWiki table.
const TABLE_START: &str = "{|";
/// Closing marker of a MediaWiki table.
const TABLE_END: &str = "|}";
/// Separator between inline cells of one table row.
const CELL_SEPARATOR: &str = "||";
/// Cells in a data row of the Pokémon list: number, sprite, German,
/// English, Japanese, Japanese katakana, romaji, trademark, types, generation.
const RAW_CELLS: usize = 10;
/// Raw cells kept for a record, in record order.
const KEPT_CELLS: [usize; 5] = [0, 1, 2, 3, 6];

/// Line boundaries recognised in the table body, matching Python's
/// `str.splitlines`.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Pulls the Pokémon rows out of the wiki source of the list page.
///
/// The export page is mostly XML and page chrome. Only the text between the
/// first `{|` and the last `|}` is looked at, and only lines that split into
/// exactly ten `||`-separated cells count as data rows. Header rows, row
/// separators (`|-`) and anything else with a different shape are skipped.
pub struct WikiTableExtractor;

impl WikiTableExtractor {
    /// Returns the text strictly between the table markers.
    fn table_body<'a>(&self, document: &'a str) -> Result<&'a str, PickerError> {
        let start = document
            .find(TABLE_START)
            .ok_or_else(|| PickerError::ParseError("table start marker not found".to_string()))?
            + TABLE_START.len();

        // The list is near the end of a long document, so search backwards.
        let end = document
            .rfind(TABLE_END)
            .filter(|&end| end >= start)
            .ok_or_else(|| PickerError::ParseError("table end marker not found".to_string()))?;

        Ok(&document[start..end])
    }

    fn project(&self, line: &str) -> Option<TableRow> {
        let cells: Vec<&str> = line.split(CELL_SEPARATOR).collect();
        if cells.len() != RAW_CELLS {
            return None;
        }
        Some(KEPT_CELLS.map(|i| cells[i].to_string()))
    }
}

impl Extractor for WikiTableExtractor {
    fn extract(&self, document: &str) -> Result<Vec<TableRow>, PickerError> {
        let body = self.table_body(document)?;
        debug!("Table body spans {} bytes", body.len());

        // `\r\n` leaves an empty piece between the two breaks; it never has ten cells.
        let rows: Vec<TableRow> = body
            .split(is_line_break)
            .filter_map(|line| self.project(line))
            .collect();
        debug!("Extracted {} rows", rows.len());

        Ok(rows)
    }
}
