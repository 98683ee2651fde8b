//! Spreadsheet layouts → observation series

pub mod client;
pub mod hana;
pub mod leave;

pub use client::ClientParser;
pub use hana::HanaParser;
pub use leave::LeaveExtractor;
