//! Output module for Policy-Sift
//!
//! Serializes the final result set to CSV.

mod csv;

pub use self::csv::{write_csv, CSV_COLUMNS};
