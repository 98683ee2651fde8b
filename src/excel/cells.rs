//! Styled cell access for `.xlsx` files
//!
//! calamine exposes cell values only, so leave highlighting is read through
//! umya-spreadsheet. Cells are looked up one at a time by 0-based position;
//! nothing is materialised beyond what the workbook reader already holds.

use crate::error::{ReconError, ReconResult};
use crate::excel::styles::FillColor;
use std::path::Path;
use umya_spreadsheet::{Spreadsheet, Worksheet};

/// First worksheet of a workbook, with values and fills
pub struct StyledSheet {
    book: Spreadsheet,
}

impl StyledSheet {
    /// Read an `.xlsx` file; other formats carry no readable fill styles
    pub fn open<P: AsRef<Path>>(path: P) -> ReconResult<Self> {
        let path = path.as_ref();
        let is_xlsx = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"));
        if !is_xlsx {
            return Err(ReconError::UnsupportedFormat(format!(
                "cell fills can only be read from .xlsx files: {}",
                path.display()
            )));
        }

        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| {
            ReconError::Workbook(format!("Failed to read styles of {}: {}", path.display(), e))
        })?;
        Self::from_book(book)
    }

    pub fn from_book(book: Spreadsheet) -> ReconResult<Self> {
        if book.get_sheet(&0).is_none() {
            return Err(ReconError::Workbook("workbook has no worksheets".to_string()));
        }
        Ok(Self { book })
    }

    fn sheet(&self) -> Option<&Worksheet> {
        self.book.get_sheet(&0)
    }

    /// Number of columns up to the last used one
    pub fn width(&self) -> usize {
        self.sheet()
            .map_or(0, |sheet| sheet.get_highest_column() as usize)
    }

    /// Value text of a cell (`""` when absent)
    pub fn text(&self, row: usize, col: usize) -> String {
        self.sheet()
            .and_then(|sheet| sheet.get_cell(coordinate(row, col)))
            .map(|cell| cell.get_value().to_string())
            .unwrap_or_default()
    }

    /// Fill of a cell; cells never written have no fill
    pub fn fill(&self, row: usize, col: usize) -> FillColor {
        self.sheet()
            .and_then(|sheet| sheet.get_cell(coordinate(row, col)))
            .map_or(FillColor::Unset, |cell| FillColor::from_style(cell.get_style()))
    }
}

/// 0-based (row, col) → umya's 1-based (col, row)
fn coordinate(row: usize, col: usize) -> (u32, u32) {
    (col as u32 + 1, row as u32 + 1)
}
