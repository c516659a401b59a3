//! Input workbook reading.
//!
//! The workbook must carry three sheets: `request` (the provisioning rows),
//! `schema` (database to schema registry) and `env` (initial password).

pub mod parse;
pub mod sheet;

use std::path::Path;

use calamine::{open_workbook_auto, Reader};

use crate::config::{ENV_SHEET, REQUEST_SHEET, SCHEMA_SHEET};
use crate::error::IngestError;
use crate::models::{EnvironmentSettings, RequestTable, SchemaRegistry};

pub use parse::{
    check_columns, parse_registry, parse_request, parse_settings, REGISTRY_COLUMNS,
    REQUEST_COLUMNS, SETTINGS_COLUMNS,
};
pub use sheet::Sheet;

/// Everything a run reads from the input workbook.
#[derive(Clone, Debug)]
pub struct WorkbookInput {
    pub request: RequestTable,
    pub registry: SchemaRegistry,
    pub settings: EnvironmentSettings,
}

/// Open `path` and read all three sheets.
///
/// Fails before returning anything when a sheet or required column is absent.
pub fn read_workbook(path: &Path) -> Result<WorkbookInput, IngestError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let names = workbook.sheet_names();
    let missing: Vec<String> = [REQUEST_SHEET, SCHEMA_SHEET, ENV_SHEET]
        .iter()
        .filter(|required| !names.iter().any(|n| n == *required))
        .map(|s| s.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingSheets(missing));
    }

    let mut load = |name: &str| -> Result<Sheet, IngestError> {
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| IngestError::Sheet {
                sheet: name.to_string(),
                message: e.to_string(),
            })?;
        Ok(Sheet::from_range(name, &range))
    };

    let request_sheet = load(REQUEST_SHEET)?;
    let schema_sheet = load(SCHEMA_SHEET)?;
    let env_sheet = load(ENV_SHEET)?;
    check_columns(&[
        (&request_sheet, &REQUEST_COLUMNS[..]),
        (&schema_sheet, &REGISTRY_COLUMNS[..]),
        (&env_sheet, &SETTINGS_COLUMNS[..]),
    ])?;

    let request = parse_request(&request_sheet)?;
    let registry = parse_registry(&schema_sheet)?;
    let settings = parse_settings(&env_sheet)?;

    tracing::info!(
        path = %path.display(),
        rows = request.records.len(),
        registry_entries = registry.entries().len(),
        "Read input workbook"
    );

    Ok(WorkbookInput {
        request,
        registry,
        settings,
    })
}
