use crate::config::{
    COL_AUTHORITY, COL_DISPLAY_NAME, COL_INIT_PASSWORD, COL_REGISTRY_DATABASE,
    COL_REGISTRY_SCHEMA, COL_TARGET_DATABASE, COL_TARGET_SCHEMA, COL_USER_ID,
};
use crate::error::IngestError;
use crate::ingest::sheet::Sheet;
use crate::models::{
    EnvironmentSettings, RawRecord, RequestTable, SchemaRegistry, SchemaRegistryEntry,
};
use crate::normalize::is_absent;

pub const REQUEST_COLUMNS: [&str; 5] = [
    COL_DISPLAY_NAME,
    COL_USER_ID,
    COL_TARGET_DATABASE,
    COL_TARGET_SCHEMA,
    COL_AUTHORITY,
];
pub const REGISTRY_COLUMNS: [&str; 2] = [COL_REGISTRY_DATABASE, COL_REGISTRY_SCHEMA];
pub const SETTINGS_COLUMNS: [&str; 1] = [COL_INIT_PASSWORD];

/// Check every sheet against its required columns and report all gaps at once.
pub fn check_columns(sheets: &[(&Sheet, &[&str])]) -> Result<(), IngestError> {
    let missing: Vec<(String, Vec<String>)> = sheets
        .iter()
        .filter_map(|(sheet, labels)| match sheet.require_columns(labels) {
            Err(IngestError::MissingColumns(gaps)) => Some(gaps),
            _ => None,
        })
        .flatten()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns(missing))
    }
}

/// Read the `request` sheet. Columns other than the five known ones are kept
/// as extras in sheet order.
pub fn parse_request(sheet: &Sheet) -> Result<RequestTable, IngestError> {
    let known = sheet.require_columns(&REQUEST_COLUMNS)?;
    let extra_indexes: Vec<usize> = (0..sheet.headers.len())
        .filter(|idx| !known.contains(idx))
        .filter(|idx| !sheet.headers[*idx].is_empty())
        .collect();

    let records = (0..sheet.rows.len())
        .map(|row| {
            let text = |col: usize| sheet.cell(row, col).map(str::to_string);
            RawRecord {
                display_name: text(known[0]),
                user_id: text(known[1]),
                target_database: text(known[2]),
                target_schema_expr: text(known[3]),
                authority_expr: text(known[4]),
                extra: extra_indexes.iter().map(|col| text(*col)).collect(),
            }
        })
        .collect();

    Ok(RequestTable {
        extra_headers: extra_indexes
            .iter()
            .map(|idx| sheet.headers[*idx].clone())
            .collect(),
        records,
    })
}

/// Read the `schema` sheet. Rows without a database name are skipped.
pub fn parse_registry(sheet: &Sheet) -> Result<SchemaRegistry, IngestError> {
    let cols = sheet.require_columns(&REGISTRY_COLUMNS)?;
    let mut entries = Vec::with_capacity(sheet.rows.len());
    for row in 0..sheet.rows.len() {
        let Some(database) = sheet.cell(row, cols[0]).filter(|v| !is_absent(v)) else {
            tracing::warn!(sheet = %sheet.name, row = row + 2, "Skipping registry row without a database name");
            continue;
        };
        let schemas = sheet.cell(row, cols[1]).unwrap_or_default();
        entries.push(SchemaRegistryEntry::from_list(database, schemas));
    }
    Ok(SchemaRegistry::new(entries))
}

/// Read the initial password from the first data row of the `env` sheet.
pub fn parse_settings(sheet: &Sheet) -> Result<EnvironmentSettings, IngestError> {
    let cols = sheet.require_columns(&SETTINGS_COLUMNS)?;
    let initial_password = sheet
        .cell(0, cols[0])
        .filter(|v| !is_absent(v))
        .map(|v| v.trim().to_string())
        .ok_or_else(|| IngestError::MissingSetting {
            sheet: sheet.name.clone(),
            column: COL_INIT_PASSWORD.to_string(),
        })?;
    Ok(EnvironmentSettings { initial_password })
}
