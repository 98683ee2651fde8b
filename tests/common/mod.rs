//! Workbook fixtures shared by the integration suites
//!
//! Layouts follow the default config: S4Hana header on row 2 with
//! `dd.mm.yyyy` labels from column E, client header on row 12 with bare day
//! numbers from column E up to "Total Billable Hours".

#![allow(dead_code)]

use calamine::{open_workbook_auto, Reader};
use rust_xlsxwriter::{Color, Format, Workbook};
use std::path::Path;

pub struct HanaPerson {
    pub name: &'static str,
    pub hours: Vec<f64>,
}

impl HanaPerson {
    /// Fully blank row
    pub fn spacer() -> Self {
        Self {
            name: "",
            hours: Vec::new(),
        }
    }
}

pub struct ClientPerson {
    pub name: &'static str,
    pub country: &'static str,
    pub hours: Vec<f64>,
    /// Days whose cell is highlighted yellow
    pub leave_days: Vec<u32>,
}

impl ClientPerson {
    pub fn india(name: &'static str, hours: Vec<f64>) -> Self {
        Self {
            name,
            country: "India",
            hours,
            leave_days: Vec::new(),
        }
    }

    /// Fully blank row
    pub fn spacer() -> Self {
        Self {
            name: "",
            country: "",
            hours: Vec::new(),
            leave_days: Vec::new(),
        }
    }

    pub fn with_leave(mut self, days: &[u32]) -> Self {
        self.leave_days = days.to_vec();
        self
    }
}

/// `days` full days at `hours`, with selected days overridden
pub fn hours(days: usize, hours: f64, overrides: &[(u32, f64)]) -> Vec<f64> {
    let mut values = vec![hours; days];
    for (day, value) in overrides {
        values[*day as usize - 1] = *value;
    }
    values
}

pub fn write_hana(path: &Path, month: u32, people: &[HanaPerson]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "S4Hana timesheet export").unwrap();

    for (col, label) in ["Personnel No", "Name", "Project", "Activity"]
        .iter()
        .enumerate()
    {
        sheet.write_string(1, col as u16, *label).unwrap();
    }

    let days = people.iter().map(|p| p.hours.len()).max().unwrap_or(0);
    for day in 1..=days {
        sheet
            .write_string(1, 3 + day as u16, format!("{:02}.{:02}.2026", day, month))
            .unwrap();
    }

    for (idx, person) in people.iter().enumerate() {
        let row = 2 + idx as u32;
        if person.name.is_empty() && person.hours.is_empty() {
            continue;
        }
        sheet.write_number(row, 0, 1000 + idx as u32).unwrap();
        sheet.write_string(row, 1, person.name).unwrap();
        sheet.write_string(row, 2, "Payments").unwrap();
        sheet.write_string(row, 3, "Development").unwrap();
        for (offset, value) in person.hours.iter().enumerate() {
            sheet.write_number(row, 4 + offset as u16, *value).unwrap();
        }
    }

    workbook.save(path).unwrap();
}

pub fn write_client(path: &Path, days: u32, people: &[ClientPerson]) {
    let yellow = Format::new().set_background_color(Color::RGB(0xFFFF00));
    let green = Format::new().set_background_color(Color::RGB(0x00B050));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Client timesheet").unwrap();
    sheet.write_string(1, 0, "Squad billing period").unwrap();

    for (col, label) in ["Name", "Employee Id", "Role", "Country"].iter().enumerate() {
        sheet.write_string(11, col as u16, *label).unwrap();
    }
    for day in 1..=days {
        sheet.write_number(11, 3 + day as u16, day).unwrap();
    }
    let total_col = 4 + days as u16;
    sheet.write_string(11, total_col, "Total Billable Hours").unwrap();

    for (idx, person) in people.iter().enumerate() {
        let row = 12 + idx as u32;
        if person.name.is_empty() && person.hours.is_empty() {
            continue;
        }
        sheet.write_string(row, 0, person.name).unwrap();
        sheet.write_number(row, 1, 500 + idx as u32).unwrap();
        sheet.write_string(row, 2, "Developer").unwrap();
        sheet.write_string(row, 3, person.country).unwrap();

        for (offset, value) in person.hours.iter().enumerate() {
            let day = offset as u32 + 1;
            let col = 4 + offset as u16;
            if person.leave_days.contains(&day) {
                sheet.write_number_with_format(row, col, *value, &yellow).unwrap();
            } else if *value == 0.0 {
                // Highlighted, but not as leave
                sheet.write_number_with_format(row, col, *value, &green).unwrap();
            } else {
                sheet.write_number(row, col, *value).unwrap();
            }
        }
        let total: f64 = person.hours.iter().sum();
        sheet.write_number(row, total_col, total).unwrap();
    }

    workbook.save(path).unwrap();
}

/// Every row of a report sheet rendered as text
pub fn read_sheet(path: &Path, sheet_name: &str) -> Vec<Vec<String>> {
    let mut workbook = open_workbook_auto(path).unwrap();
    let range = workbook.worksheet_range(sheet_name).unwrap();
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

pub fn sheet_names(path: &Path) -> Vec<String> {
    let workbook = open_workbook_auto(path).unwrap();
    workbook.sheet_names().to_vec()
}

/// Expected report row
pub fn report_row(name: &str, day: u32, hana: &str, client: &str, leave: &str) -> Vec<String> {
    vec![
        name.to_string(),
        day.to_string(),
        hana.to_string(),
        client.to_string(),
        leave.to_string(),
    ]
}

pub fn report_header() -> Vec<String> {
    ["Name", "Day", "S4Hana Hours", "Client Hours", "Leave"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
