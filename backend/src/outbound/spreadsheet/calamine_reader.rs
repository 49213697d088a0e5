//! calamine implementation of the [`WorkbookReader`] port.
//!
//! The format (xlsx, xls, xlsb, ods) is sniffed from the bytes. calamine
//! trims leading empty rows and columns from a range, so they are padded
//! back to keep row positions stable for the importer.

use std::io::Cursor;

use async_trait::async_trait;
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use tokio::task::spawn_blocking;
use tracing::debug;

use crate::domain::ports::{SheetRows, WorkbookError, WorkbookReader};

/// Reads the first worksheet of an uploaded workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineWorkbookReader;

impl CalamineWorkbookReader {
    pub fn new() -> Self {
        Self
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn sheet_rows(range: &Range<Data>) -> SheetRows {
    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    let pad_cols = first_col as usize;

    let mut rows: SheetRows = vec![Vec::new(); first_row as usize];
    for cells in range.rows() {
        let mut row = vec![String::new(); pad_cols];
        row.extend(cells.iter().map(cell_text));
        while row.last().is_some_and(String::is_empty) {
            row.pop();
        }
        rows.push(row);
    }
    rows
}

fn read_first_sheet_blocking(bytes: Vec<u8>) -> Result<SheetRows, WorkbookError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|err| WorkbookError::unreadable(err.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(WorkbookError::no_sheets)?
        .map_err(|err| WorkbookError::unreadable(err.to_string()))?;

    let rows = sheet_rows(&range);
    debug!(rows = rows.len(), "workbook sheet decoded");
    Ok(rows)
}

#[async_trait]
impl WorkbookReader for CalamineWorkbookReader {
    async fn read_first_sheet(&self, bytes: Vec<u8>) -> Result<SheetRows, WorkbookError> {
        spawn_blocking(move || read_first_sheet_blocking(bytes))
            .await
            .map_err(|err| WorkbookError::unreadable(format!("decode task failed: {err}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_xlsxwriter::Workbook;

    fn workbook(build: impl FnOnce(&mut rust_xlsxwriter::Worksheet)) -> Vec<u8> {
        let mut workbook = Workbook::new();
        build(workbook.add_worksheet());
        workbook.save_to_buffer().expect("xlsx buffer")
    }

    #[tokio::test]
    async fn reads_header_and_rows_as_text() {
        let bytes = workbook(|sheet| {
            for (col, title) in ["name", "description", "price", "subcategory_id", "quantity"]
                .iter()
                .enumerate()
            {
                sheet
                    .write_string(0, u16::try_from(col).expect("col"), *title)
                    .expect("header");
            }
            sheet.write_string(1, 0, "Brake pad").expect("name");
            sheet.write_string(1, 1, "Front").expect("description");
            sheet.write_number(1, 2, 19.5).expect("price");
            sheet.write_number(1, 3, 4).expect("subcategory");
            sheet.write_number(1, 4, 10).expect("quantity");
        });

        let rows = CalamineWorkbookReader::new()
            .read_first_sheet(bytes)
            .await
            .expect("readable workbook");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "name");
        assert_eq!(rows[1], ["Brake pad", "Front", "19.5", "4", "10"]);
    }

    #[tokio::test]
    async fn only_the_first_sheet_is_read() {
        let mut book = Workbook::new();
        book.add_worksheet()
            .write_string(0, 0, "first")
            .expect("first sheet");
        book.add_worksheet()
            .write_string(0, 0, "second")
            .expect("second sheet");
        let bytes = book.save_to_buffer().expect("xlsx buffer");

        let rows = CalamineWorkbookReader::new()
            .read_first_sheet(bytes)
            .await
            .expect("readable workbook");
        assert_eq!(rows, vec![vec!["first".to_owned()]]);
    }

    #[tokio::test]
    async fn leading_gaps_are_padded_and_trailing_blanks_dropped() {
        let bytes = workbook(|sheet| {
            sheet.write_string(2, 1, "b3").expect("cell");
            sheet.write_string(2, 3, "d3").expect("cell");
        });

        let rows = CalamineWorkbookReader::new()
            .read_first_sheet(bytes)
            .await
            .expect("readable workbook");
        assert_eq!(
            rows,
            vec![
                Vec::<String>::new(),
                Vec::new(),
                vec![String::new(), "b3".to_owned(), String::new(), "d3".to_owned()],
            ]
        );
    }

    #[rstest]
    #[case::plain_text(b"name,price\nPad,3".as_slice())]
    #[case::empty(b"".as_slice())]
    #[tokio::test]
    async fn non_workbook_bytes_are_unreadable(#[case] bytes: &[u8]) {
        let err = CalamineWorkbookReader::new()
            .read_first_sheet(bytes.to_vec())
            .await
            .expect_err("not a workbook");
        assert!(matches!(err, WorkbookError::Unreadable { .. }));
    }
}
