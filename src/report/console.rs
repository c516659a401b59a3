use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};

use crate::config::{COL_DISPLAY_NAME, COL_TARGET_DATABASE, COL_USER_ID};
use crate::models::GeneratedRecord;

/// Terminal overview of a run: one line per request row.
pub fn summary_table(records: &[GeneratedRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec![
        COL_DISPLAY_NAME,
        COL_USER_ID,
        COL_TARGET_DATABASE,
        "create user",
        "grant column",
        "warnings",
    ]);
    for record in records {
        let create_user = if record.create_user_script.is_empty() { "-" } else { "yes" };
        let grant_column = record
            .granted_instance()
            .map(|instance| instance.column_key())
            .unwrap_or("-");
        let warnings = record
            .warnings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        table.add_row(vec![
            record.input.display_name.as_str(),
            record.input.user_id.as_str(),
            record.input.target_database.as_str(),
            create_user,
            grant_column,
            warnings.as_str(),
        ]);
    }
    table
}
