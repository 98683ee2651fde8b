//! Client timesheet parser
//!
//! Rows are grouped by country with the target country first; the first row
//! of any other country ends the block. Day columns are bare day numbers and
//! end at the stop column (the totals column) or at the cutoff day.

use crate::config::ClientLayout;
use crate::error::{ReconError, ReconResult};
use crate::excel::grid::{cell_hours, cell_text, Grid};
use crate::types::{Observation, PersonSeries};
use calamine::Data;
use tracing::debug;

pub struct ClientParser<'a> {
    layout: &'a ClientLayout,
    cutoff_day: u32,
}

impl<'a> ClientParser<'a> {
    /// `cutoff_day` is the last day of the month to read (see [`crate::core::cutoff_day`])
    pub fn new(layout: &'a ClientLayout, cutoff_day: u32) -> Self {
        Self { layout, cutoff_day }
    }

    pub fn parse(&self, grid: &Grid) -> ReconResult<PersonSeries> {
        let mut series = PersonSeries::new();

        for row in 0..grid.height() {
            let country = cell_text(grid.cell(row, self.layout.country_column));
            if country != self.layout.target_country {
                debug!(row, country = %country, "end of {} block", self.layout.target_country);
                break;
            }

            let person = cell_text(grid.cell(row, self.layout.name_column));

            for col in self.layout.first_date_column..grid.width() {
                let label = &grid.headers()[col];
                if cell_text(label) == self.layout.stop_column_label {
                    break;
                }

                let day = client_day(label)?;
                if day > self.cutoff_day {
                    break;
                }

                let hours = cell_hours(grid.cell(row, col));
                series.push(&person, Observation::new(day, hours));
            }
        }

        Ok(series)
    }
}

/// Day of month from a bare day-number header (`5`, `5.0` or `"5"`)
pub(crate) fn parse_day_number(text: &str) -> Option<u32> {
    let value = text.trim().parse::<f64>().ok()?;
    if value.fract() != 0.0 || !(1.0..=31.0).contains(&value) {
        return None;
    }
    Some(value as u32)
}

fn client_day(label: &Data) -> ReconResult<u32> {
    let day = match label {
        Data::Int(i) => u32::try_from(*i).ok().filter(|day| (1..=31).contains(day)),
        Data::Float(f) => parse_day_number(&f.to_string()),
        Data::String(s) => parse_day_number(s),
        _ => None,
    };

    day.ok_or_else(|| {
        ReconError::Layout(format!(
            "expected a day-of-month header, found {:?}",
            cell_text(label)
        ))
    })
}
