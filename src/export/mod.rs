//! Analysis export.
//!
//! This module writes analyzed posts out as flattened rows:
//! - CSV (one row per post)
//! - JSONL (one JSON object per line)
//!
//! Both exporters share the row-building logic in `row`.

mod csv;
mod jsonl;
mod row;

// Re-export public API
pub use csv::export_csv;
pub use jsonl::export_jsonl;
pub use row::{build_export_row, ExportRow, CSV_HEADER};
