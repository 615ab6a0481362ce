//! IO utilities for loading crime statistics spreadsheets.

pub mod spreadsheet;

pub use spreadsheet::{read_crime_csv, REGION_COLUMN};
