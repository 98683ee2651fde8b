//! S4Hana export parser
//!
//! One row per person, one column per calendar day from `first_date_column`
//! to the last column. Date headers read `dd.mm.yyyy`; the day is the first
//! two characters. Every row and every date column is taken as-is.

use crate::config::HanaLayout;
use crate::error::{ReconError, ReconResult};
use crate::excel::grid::{cell_hours, cell_text, Grid};
use crate::types::{Observation, PersonSeries};
use calamine::Data;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

pub struct HanaParser<'a> {
    layout: &'a HanaLayout,
}

impl<'a> HanaParser<'a> {
    pub fn new(layout: &'a HanaLayout) -> Self {
        Self { layout }
    }

    pub fn parse(&self, grid: &Grid) -> ReconResult<PersonSeries> {
        let days = grid
            .headers()
            .iter()
            .enumerate()
            .skip(self.layout.first_date_column)
            .map(|(col, label)| hana_day(label).map(|day| (col, day)))
            .collect::<ReconResult<Vec<_>>>()?;

        debug!(
            rows = grid.height(),
            date_columns = days.len(),
            "parsing S4Hana grid"
        );

        let mut series = PersonSeries::new();
        for row in 0..grid.height() {
            // Rows without a name still count; they are keyed under ""
            let person = cell_text(grid.cell(row, self.layout.name_column));

            for &(col, day) in &days {
                let hours = cell_hours(grid.cell(row, col));
                series.push(&person, Observation::new(day, hours));
            }
        }

        Ok(series)
    }
}

/// Day of month from a `dd.mm.yyyy` header (or a real date cell)
fn hana_day(label: &Data) -> ReconResult<u32> {
    let day = match label {
        Data::String(text) => text.chars().take(2).collect::<String>().parse::<u32>().ok(),
        Data::DateTime(dt) => dt.as_datetime().map(|dt| dt.day()),
        Data::DateTimeIso(text) => text
            .get(..10)
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
            .map(|date| date.day()),
        _ => None,
    };

    day.filter(|day| (1..=31).contains(day)).ok_or_else(|| {
        ReconError::Layout(format!(
            "expected a dd.mm.yyyy date header, found {:?}",
            cell_text(label)
        ))
    })
}
