//! Excel workbook access
//!
//! - Import: cell values through calamine ([`Grid`]), cell fills through
//!   umya-spreadsheet ([`StyledSheet`])
//! - Export: the discrepancy report ([`ReportExporter`])

pub mod cells;
pub mod exporter;
pub mod grid;
pub mod styles;

pub use cells::StyledSheet;
pub use exporter::ReportExporter;
pub use grid::Grid;
pub use styles::FillColor;
