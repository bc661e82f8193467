//! Delimited-text parsing for the roster and results tables.
//!
//! The first non-blank row is the header. Fields may be wrapped in double
//! quotes to carry delimiters or newlines, with `""` as an escaped quote.
//! Every field is trimmed, and rows that are entirely blank are skipped.

use std::collections::HashMap;
use std::mem::take;

use tracing::warn;

use crate::error::{DatasetKind, LoadError};

/// Field separator for both input tables.
pub const DELIMITER: char = ',';

/// A parsed table: header names plus the data rows beneath them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    headers: Vec<String>,
    positions: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

/// One data row, with cells addressed by header name.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a CsvTable,
    cells: &'a [String],
    row_number: usize,
}

impl<'a> Record<'a> {
    /// Cell value for `column`, or `""` when the column or the cell is absent.
    pub fn get(&self, column: &str) -> &'a str {
        self.table
            .positions
            .get(column)
            .and_then(|&idx| self.cells.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// 1-based position of this row among the data rows.
    pub fn row_number(&self) -> usize {
        self.row_number
    }
}

impl CsvTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.positions.contains_key(column)
    }

    /// Check that every column in `columns` appears in the header.
    /// Reports the first absent column in `columns` order.
    pub fn require(&self, dataset: DatasetKind, columns: &[&str]) -> Result<(), LoadError> {
        match columns.iter().find(|c| !self.has_column(c)) {
            Some(missing) => Err(LoadError::missing_column(dataset, missing)),
            None => Ok(()),
        }
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().enumerate().map(move |(i, cells)| Record {
            table: self,
            cells,
            row_number: i + 1,
        })
    }
}

/// Parse delimited text into a header plus data rows.
pub fn parse_table(text: &str) -> CsvTable {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = parse_rows(text, DELIMITER).into_iter();
    let headers = rows.next().unwrap_or_default();

    // First occurrence wins for duplicated header names
    let mut positions = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        positions.entry(name.clone()).or_insert(idx);
    }

    CsvTable {
        headers,
        positions,
        rows: rows.collect(),
    }
}

/// Split text into trimmed fields, honoring quotes. Blank rows are dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row: Vec<String> = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else if field.trim().is_empty() {
                    // Quotes only open at the start of a field
                    field.clear();
                    in_quotes = true;
                } else {
                    field.push('"');
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field).trim().to_string());
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field).trim().to_string());
                push_row(&mut rows, take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing row even if quotes were left open
    row.push(field.trim().to_string());
    push_row(&mut rows, row);

    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    if row.iter().any(|cell| !cell.is_empty()) {
        rows.push(row);
    }
}

/// Boolean-like cell: the number 1 (in any spelling that parses to 1) is
/// true, everything else, including blanks, is false.
pub fn parse_flag(raw: &str) -> bool {
    let value = raw.trim();
    value == "1" || value.parse::<f64>().map(|n| n == 1.0).unwrap_or(false)
}

/// Non-negative count cell. Blanks read as 0; anything that is not a
/// non-negative number reads as 0 with a warning. Fractions are truncated.
pub fn parse_count(raw: &str, column: &str, row_number: usize) -> u32 {
    let value = raw.trim();
    if value.is_empty() {
        return 0;
    }
    if let Ok(n) = value.parse::<u32>() {
        return n;
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => n.min(u32::MAX as f64) as u32,
        _ => {
            warn!(
                column = %column,
                row = row_number,
                value = %value,
                "Unparseable count, treating as 0"
            );
            0
        }
    }
}
