/// Error types for workbook ingest and report writing
use thiserror::Error;

/// Errors raised while reading the input workbook. All are fatal.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The workbook could not be opened or parsed
    #[error("Failed to open workbook {path}: {message}")]
    Open {
        /// Path given on the command line
        path: String,
        message: String,
    },

    /// One or more required sheets are absent
    #[error("Workbook is missing required sheet(s): {}", .0.join(", "))]
    MissingSheets(Vec<String>),

    /// Required columns are absent, listed per sheet
    #[error("Workbook is missing required column(s): {}", describe_columns(.0))]
    MissingColumns(Vec<(String, Vec<String>)>),

    /// A sheet could not be read after it was found
    #[error("Failed to read sheet '{sheet}': {message}")]
    Sheet { sheet: String, message: String },

    /// A required setting has no value
    #[error("Sheet '{sheet}' has no value for '{column}'")]
    MissingSetting { sheet: String, column: String },
}

/// Errors raised while rendering or writing the report. All are fatal.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The xlsx writer rejected the document
    #[error("Failed to build workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Filesystem error in the output directory
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// The finished temporary file could not be moved into place
    #[error("Failed to move report into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Any failure that stops a run.
#[derive(Debug, Error)]
pub enum DbScriptError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

fn describe_columns(missing: &[(String, Vec<String>)]) -> String {
    missing
        .iter()
        .map(|(sheet, columns)| format!("sheet '{}' lacks {}", sheet, columns.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
