//! Grid reader - first worksheet of a workbook as header + data rows
//!
//! The caller supplies the 0-based offset of the header row; rows above it are
//! ignored. Cells are addressed by absolute position, so leading empty columns
//! and blank rows keep their place.

use crate::error::{ReconError, ReconResult};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

static EMPTY: Data = Data::Empty;

/// Tabular view of a worksheet below a known header row
#[derive(Debug, Clone, Default)]
pub struct Grid {
    headers: Vec<Data>,
    rows: Vec<Vec<Data>>,
}

impl Grid {
    pub fn new(headers: Vec<Data>, rows: Vec<Vec<Data>>) -> Self {
        Self { headers, rows }
    }

    /// Read the first worksheet of an `.xlsx`/`.xls` file
    pub fn open<P: AsRef<Path>>(path: P, header_row_offset: usize) -> ReconResult<Self> {
        let path = path.as_ref();
        let mut workbook = open_workbook_auto(path).map_err(|e| {
            ReconError::Workbook(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let range = workbook.worksheet_range_at(0).ok_or_else(|| {
            ReconError::Workbook(format!("{} has no worksheets", path.display()))
        })??;

        Self::from_range(&range, header_row_offset)
    }

    /// Slice a worksheet range at the header row
    pub fn from_range(range: &Range<Data>, header_row_offset: usize) -> ReconResult<Self> {
        let (last_row, last_col) = range
            .end()
            .ok_or_else(|| ReconError::Layout("worksheet is empty".to_string()))?;
        let (last_row, width) = (last_row as usize, last_col as usize + 1);

        if last_row < header_row_offset {
            return Err(ReconError::Layout(format!(
                "header row {} is below the last used row {}",
                header_row_offset + 1,
                last_row + 1
            )));
        }

        let read_row = |row: usize| -> Vec<Data> {
            (0..width)
                .map(|col| {
                    range
                        .get_value((row as u32, col as u32))
                        .cloned()
                        .unwrap_or(Data::Empty)
                })
                .collect()
        };

        let headers = read_row(header_row_offset);
        let rows = (header_row_offset + 1..=last_row).map(read_row).collect();

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[Data] {
        &self.headers
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Data]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Cell at a data row and column; out-of-range positions read as empty
    pub fn cell(&self, row: usize, col: usize) -> &Data {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Position of the first header whose text equals `label`
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| cell_text(h) == label)
    }

    /// Cell addressed by header label
    pub fn get(&self, row: usize, label: &str) -> Option<&Data> {
        self.column_index(label).map(|col| self.cell(row, col))
    }
}

/// Display text of a cell (`""` for empty cells)
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Hours value of a cell; blank or non-numeric cells count as zero
pub fn cell_hours(cell: &Data) -> f64 {
    let hours = match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if hours.is_nan() {
        0.0
    } else {
        hours
    }
}
