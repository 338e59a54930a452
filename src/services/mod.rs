//! External collaborators
//!
//! - Row sources (CSV/JSON files, demo data)
//! - HTML export of selected rows

pub mod export;
pub mod rows;

pub use export::export_rows;
pub use rows::{DemoRowSource, FileRowSource, RowSource};
