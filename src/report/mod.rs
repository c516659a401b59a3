//! Report rendering: a stateless table model, the xlsx writer, and the
//! terminal summary.

pub mod console;
pub mod table;
pub mod xlsx;

use std::path::Path;

use crate::error::ReportError;

pub use console::summary_table;
pub use table::{ReportCell, ReportColumn, ReportTable};
pub use xlsx::XlsxRenderer;

/// Turns a finished [`ReportTable`] into a document at `path`.
pub trait ReportRenderer {
    fn render(&self, table: &ReportTable, path: &Path) -> Result<(), ReportError>;
}
