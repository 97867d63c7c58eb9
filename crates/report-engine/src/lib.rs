//! Report assembly for screening results
//!
//! Folds per-file results into a row-per-file table and serializes it as a
//! CSV spreadsheet and as Typst document source for the paginated report.
//! Compiling the Typst source to PDF is an external concern; everything
//! that can corrupt the report (unrenderable text) surfaces as a hard
//! `RenderError` here instead of failing silently downstream.

pub mod csv;
pub mod error;
pub mod table;
pub mod typst_source;

pub use csv::to_csv;
pub use error::RenderError;
pub use table::{JurisdictionNote, ReportRow, ReportTable, COLUMN_HEADERS, REPORT_TITLE};
pub use typst_source::to_typst_source;
