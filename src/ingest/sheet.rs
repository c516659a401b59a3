use calamine::{Data, Range};

use crate::error::IngestError;

/// A worksheet flattened to text: header labels plus data rows.
///
/// `None` marks an empty cell. Rows that are entirely empty are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Sheet {
    /// Build from a calamine range whose first row holds the column labels.
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|header| {
                header
                    .iter()
                    .map(|cell| cell_text(cell).map(|t| t.trim().to_string()).unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default();
        let rows = rows
            .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
            .filter(|row: &Vec<Option<String>>| row.iter().any(Option::is_some))
            .collect();
        Self {
            name: name.to_string(),
            headers,
            rows,
        }
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == label)
    }

    /// Indexes of `labels`, or one error naming every absent label.
    pub fn require_columns(&self, labels: &[&str]) -> Result<Vec<usize>, IngestError> {
        let mut indexes = Vec::with_capacity(labels.len());
        let mut missing = Vec::new();
        for label in labels {
            match self.column_index(label) {
                Some(idx) => indexes.push(idx),
                None => missing.push(label.to_string()),
            }
        }
        if missing.is_empty() {
            Ok(indexes)
        } else {
            Err(IngestError::MissingColumns(vec![(self.name.clone(), missing)]))
        }
    }

    /// Cell text at `row`/`col`, `None` when absent.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .and_then(|cell| cell.as_deref())
    }
}

/// Render a cell as text. Whole floats lose their `.0` so numeric ids read
/// back the way they were typed.
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(float_text(*f)),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        other => Some(other.to_string()),
    }
}

fn float_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> Sheet {
        Sheet {
            name: "request".to_string(),
            headers: vec!["a".to_string(), "b".to_string()],
            rows: vec![vec![Some("1".to_string()), None]],
        }
    }

    #[test]
    fn whole_floats_render_as_integers() {
        assert_eq!(cell_text(&Data::Float(123.0)).as_deref(), Some("123"));
        assert_eq!(cell_text(&Data::Float(1.5)).as_deref(), Some("1.5"));
        assert_eq!(cell_text(&Data::Int(42)).as_deref(), Some("42"));
    }

    #[test]
    fn empty_and_error_cells_are_absent() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(
            cell_text(&Data::Error(calamine::CellErrorType::NA)),
            None
        );
    }

    #[test]
    fn require_columns_lists_every_missing_label() {
        let err = sheet()
            .require_columns(&["a", "x", "y"])
            .expect_err("columns x and y are absent");
        match err {
            IngestError::MissingColumns(missing) => {
                assert_eq!(
                    missing,
                    vec![("request".to_string(), vec!["x".to_string(), "y".to_string()])]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(sheet().require_columns(&["b", "a"]).unwrap(), vec![1, 0]);
    }

    #[test]
    fn cell_lookup_handles_gaps() {
        let sheet = sheet();
        assert_eq!(sheet.cell(0, 0), Some("1"));
        assert_eq!(sheet.cell(0, 1), None);
        assert_eq!(sheet.cell(5, 0), None);
    }
}
