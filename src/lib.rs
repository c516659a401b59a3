//! Generate MySQL user provisioning scripts (`create user` / `grant`) from a
//! request workbook, and write them back out as a formatted report.

pub mod config;
pub mod error;
pub mod generator;
pub mod ingest;
pub mod lookup;
pub mod models;
pub mod normalize;
pub mod report;
pub mod schema_resolver;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::DbScriptError;
use crate::models::GeneratedRecord;
use crate::report::{ReportRenderer, ReportTable, XlsxRenderer};

/// Result of a completed run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub records: Vec<GeneratedRecord>,
}

/// Read `input`, generate scripts for every request row, and write the report
/// into `output_dir` stamped with `generated_at`.
pub fn run(
    input: &Path,
    output_dir: &Path,
    generated_at: NaiveDateTime,
) -> Result<RunSummary, DbScriptError> {
    let workbook = ingest::read_workbook(input)?;

    let records = generator::generate(
        &workbook.request.records,
        &workbook.registry,
        &workbook.settings,
    );

    let table = ReportTable::from_records(&records, &workbook.request.extra_headers, &generated_at);
    let output_path = config::output_file_path(output_dir, &generated_at);
    XlsxRenderer.render(&table, &output_path)?;

    Ok(RunSummary {
        output_path,
        records,
    })
}
