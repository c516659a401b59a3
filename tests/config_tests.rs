use dbscript::config;
use once_cell::sync::Lazy;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// Tests touching DBSCRIPT_OUTPUT_DIR must not interleave.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn sample_time() -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2023, 11, 22)
        .and_then(|d| d.and_hms_opt(9, 5, 42))
        .unwrap()
}

#[test]
fn test_output_file_path_uses_prefix_and_minute_stamp() {
    let path = config::output_file_path(Path::new("/tmp/out"), &sample_time());
    assert_eq!(path, PathBuf::from("/tmp/out/generated_dbscript_20231122-0905.xlsx"));
}

#[test]
fn test_output_file_path_relative_dir() {
    let path = config::output_file_path(Path::new("."), &sample_time());
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("generated_dbscript_20231122-0905.xlsx")
    );
}

#[test]
fn test_get_output_dir_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var(config::OUTPUT_DIR_ENV, "  /srv/reports  ");

    assert_eq!(config::get_output_dir(), PathBuf::from("/srv/reports"));

    env::remove_var(config::OUTPUT_DIR_ENV);
}

#[test]
fn test_get_output_dir_defaults_to_current_dir() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var(config::OUTPUT_DIR_ENV);

    assert_eq!(config::get_output_dir(), env::current_dir().unwrap());
}

#[test]
fn test_get_output_dir_ignores_blank_value() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var(config::OUTPUT_DIR_ENV, "   ");

    assert_eq!(config::get_output_dir(), env::current_dir().unwrap());

    env::remove_var(config::OUTPUT_DIR_ENV);
}

#[test]
fn test_wildcard_spellings() {
    assert!(config::is_wildcard("ALL"));
    assert!(config::is_wildcard("전체"));
    assert!(!config::is_wildcard("all"));
    assert!(!config::is_wildcard("ALLOC"));
}
