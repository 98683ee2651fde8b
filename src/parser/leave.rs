//! Leave days from cell highlighting
//!
//! Scans the client sheet below the header row. A day cell whose fill
//! resolves to the leave color marks that row's person as on leave for the
//! day in the same header column. The first row with an empty name cell ends
//! the person block.

use crate::config::ClientLayout;
use crate::error::ReconResult;
use crate::excel::cells::StyledSheet;
use crate::parser::client::parse_day_number;
use crate::types::LeaveRecord;
use tracing::debug;

pub struct LeaveExtractor<'a> {
    layout: &'a ClientLayout,
    leave_color: String,
}

impl<'a> LeaveExtractor<'a> {
    pub fn new(layout: &'a ClientLayout) -> Self {
        Self {
            layout,
            leave_color: layout.leave_color.to_ascii_uppercase(),
        }
    }

    pub fn extract(&self, sheet: &StyledSheet) -> ReconResult<LeaveRecord> {
        let header_row = self.layout.header_row_offset;
        let day_columns: Vec<(usize, u32)> = (0..sheet.width())
            .filter_map(|col| parse_day_number(&sheet.text(header_row, col)).map(|day| (col, day)))
            .collect();

        let mut leaves = LeaveRecord::new();
        for row in header_row + 1.. {
            let person = sheet.text(row, self.layout.name_column);
            if person.is_empty() {
                debug!(row = row + 1, "end of person block");
                break;
            }

            for &(col, day) in &day_columns {
                if sheet.fill(row, col).resolve()? == self.leave_color {
                    leaves.mark(&person, day);
                }
            }
        }

        Ok(leaves)
    }
}
