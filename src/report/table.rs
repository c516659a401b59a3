use chrono::NaiveDateTime;

use crate::config::{
    COL_AUTHORITY, COL_DISPLAY_NAME, COL_TARGET_DATABASE, COL_TARGET_SCHEMA, COL_USER_ID, MISSING,
    OUTPUT_SHEET, REMARK_TIMESTAMP_FORMAT,
};
use crate::lookup::DatabaseInstance;
use crate::models::GeneratedRecord;

/// Column label of the generated `create user` script.
pub const SCRIPT_USER_COLUMN: &str = "script_user";

/// Width of columns holding generated scripts.
pub const SCRIPT_COLUMN_WIDTH: f64 = 35.0;
/// Width of every other column.
pub const DEFAULT_COLUMN_WIDTH: f64 = 7.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ReportColumn {
    pub label: String,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportCell {
    pub text: String,
    /// The cell holds the `MISSING` placeholder and should stand out.
    pub missing: bool,
}

impl ReportCell {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            missing: text == MISSING,
        }
    }
}

/// The generated table plus everything a renderer needs to style it.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub columns: Vec<ReportColumn>,
    pub rows: Vec<Vec<ReportCell>>,
    pub remark_label: String,
    pub remark: String,
}

impl ReportTable {
    /// Lay out request columns, extra columns, then the four generated columns.
    pub fn from_records(
        records: &[GeneratedRecord],
        extra_headers: &[String],
        generated_at: &NaiveDateTime,
    ) -> Self {
        let request_labels = [
            COL_DISPLAY_NAME,
            COL_USER_ID,
            COL_TARGET_DATABASE,
            COL_TARGET_SCHEMA,
            COL_AUTHORITY,
        ];
        let script_labels = std::iter::once(SCRIPT_USER_COLUMN)
            .chain(DatabaseInstance::all().iter().map(|i| i.column_key()));

        let columns = request_labels
            .iter()
            .copied()
            .chain(extra_headers.iter().map(String::as_str))
            .map(|label| ReportColumn {
                label: label.to_string(),
                width: DEFAULT_COLUMN_WIDTH,
            })
            .chain(script_labels.map(|label| ReportColumn {
                label: label.to_string(),
                width: SCRIPT_COLUMN_WIDTH,
            }))
            .collect();

        let rows = records.iter().map(|record| report_row(record, extra_headers.len())).collect();

        Self {
            title: format!("[ {OUTPUT_SHEET} ]"),
            columns,
            rows,
            remark_label: "Remark:".to_string(),
            remark: format!(
                "The last update time is {}.",
                generated_at.format(REMARK_TIMESTAMP_FORMAT)
            ),
        }
    }
}

fn report_row(record: &GeneratedRecord, extra_len: usize) -> Vec<ReportCell> {
    let input = &record.input;
    let mut cells = vec![
        ReportCell::new(&input.display_name),
        ReportCell::new(&input.user_id),
        ReportCell::new(&input.target_database),
        ReportCell::new(&input.target_schema_expr),
        ReportCell::new(&input.authority_expr),
    ];
    cells.extend((0..extra_len).map(|idx| {
        ReportCell::new(input.extra.get(idx).map(String::as_str).unwrap_or_default())
    }));
    cells.push(ReportCell::new(&record.create_user_script));
    cells.extend(
        DatabaseInstance::all()
            .iter()
            .map(|instance| ReportCell::new(record.grant_script(*instance))),
    );
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InputRecord;

    fn record() -> GeneratedRecord {
        let mut record = GeneratedRecord::empty(InputRecord {
            display_name: "Kim".to_string(),
            user_id: "123".to_string(),
            target_database: MISSING.to_string(),
            target_schema_expr: "ALL".to_string(),
            authority_expr: "A".to_string(),
            extra: vec!["note".to_string()],
        });
        record.create_user_script = "create user '123'@'%' identified by 'pw';".to_string();
        record
    }

    fn generated_at() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 0))
            .unwrap()
    }

    #[test]
    fn columns_follow_request_extra_generated_order() {
        let table = ReportTable::from_records(&[record()], &["비고".to_string()], &generated_at());
        let labels: Vec<&str> = table.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "사용자", "P사번", "대상DB", "대상 스키마", "권한", "비고",
                "script_user", "sspord_grant", "sspstl_grant", "sspcmp_grant",
            ]
        );
        assert_eq!(table.columns[0].width, DEFAULT_COLUMN_WIDTH);
        assert_eq!(table.columns[6].width, SCRIPT_COLUMN_WIDTH);
        assert_eq!(table.rows[0].len(), labels.len());
    }

    #[test]
    fn missing_cells_are_flagged() {
        let table = ReportTable::from_records(&[record()], &[], &generated_at());
        let flagged: Vec<usize> = table.rows[0]
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.missing)
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(flagged, vec![2]);
    }

    #[test]
    fn title_and_remark_are_set() {
        let table = ReportTable::from_records(&[], &[], &generated_at());
        assert_eq!(table.title, "[ dbscripts ]");
        assert_eq!(table.remark, "The last update time is 2024-01-02 03:04.");
        assert!(table.rows.is_empty());
    }
}
