/// One row of the `request` sheet as read, before normalization.
///
/// `None` marks an absent cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub display_name: Option<String>,
    pub user_id: Option<String>,
    pub target_database: Option<String>,
    pub target_schema_expr: Option<String>,
    pub authority_expr: Option<String>,
    /// Values of request columns beyond the five known ones, in sheet order.
    pub extra: Vec<Option<String>>,
}

/// A request row after normalization. Absent fields hold `MISSING`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputRecord {
    pub display_name: String,
    pub user_id: String,
    pub target_database: String,
    pub target_schema_expr: String,
    pub authority_expr: String,
    pub extra: Vec<String>,
}

/// The `request` sheet: its rows plus the labels of any additional columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestTable {
    pub extra_headers: Vec<String>,
    pub records: Vec<RawRecord>,
}
