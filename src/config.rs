use std::env;
use std::path::{Path, PathBuf};

// Input workbook layout
pub const REQUEST_SHEET: &str = "request";
pub const SCHEMA_SHEET: &str = "schema";
pub const ENV_SHEET: &str = "env";

pub const COL_DISPLAY_NAME: &str = "사용자";
pub const COL_USER_ID: &str = "P사번";
pub const COL_TARGET_DATABASE: &str = "대상DB";
pub const COL_TARGET_SCHEMA: &str = "대상 스키마";
pub const COL_AUTHORITY: &str = "권한";

pub const COL_REGISTRY_DATABASE: &str = "DB";
pub const COL_REGISTRY_SCHEMA: &str = "SCHEMA";

pub const COL_INIT_PASSWORD: &str = "InitPasswd";

/// Value substituted for any absent request field.
pub const MISSING: &str = "MISSING";

/// Tokens meaning "everything" in schema and authority expressions.
pub const WILDCARD_TOKENS: [&str; 2] = ["ALL", "전체"];

/// Separator used by schema, authority and registry lists.
pub const LIST_SEPARATOR: char = '/';

/// Cell texts a spreadsheet reader conventionally treats as "no value".
pub const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// Output document
pub const OUTPUT_SHEET: &str = "dbscripts";
pub const OUTPUT_FILE_PREFIX: &str = "generated_dbscript_";
pub const OUTPUT_FILE_EXTENSION: &str = "xlsx";
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M";
pub const REMARK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const OUTPUT_DIR_ENV: &str = "DBSCRIPT_OUTPUT_DIR";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Directory the generated workbook is written to.
///
/// Uses `DBSCRIPT_OUTPUT_DIR` when set, the current directory otherwise.
pub fn get_output_dir() -> PathBuf {
    match env::var(OUTPUT_DIR_ENV) {
        Ok(raw) if !raw.trim().is_empty() => PathBuf::from(raw.trim()),
        _ => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Build `<dir>/generated_dbscript_<timestamp>.xlsx`.
pub fn output_file_path(dir: &Path, generated_at: &chrono::NaiveDateTime) -> PathBuf {
    dir.join(format!(
        "{}{}.{}",
        OUTPUT_FILE_PREFIX,
        generated_at.format(OUTPUT_TIMESTAMP_FORMAT),
        OUTPUT_FILE_EXTENSION
    ))
}

pub fn is_wildcard(token: &str) -> bool {
    WILDCARD_TOKENS.contains(&token)
}
