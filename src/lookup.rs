//! Fixed lookup tables: authority codes to SQL verbs, database instances to
//! report columns.

use crate::config;

/// SQL verbs granted when the whole authority set is requested.
pub const ALL_VERBS: &str = "insert,select,update,delete";

/// Single-letter authority code found in the request's `권한` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Authority {
    /// `C`: insert rows.
    Create,
    /// `R`: read rows.
    Read,
    /// `U`: update rows.
    Update,
    /// `D`: delete rows.
    Delete,
    /// `A`, `ALL` or `전체`: every verb above.
    All,
}

impl Authority {
    /// Parse a normalized (upper-cased) authority token.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "C" => Some(Authority::Create),
            "R" => Some(Authority::Read),
            "U" => Some(Authority::Update),
            "D" => Some(Authority::Delete),
            "A" => Some(Authority::All),
            other if config::is_wildcard(other) => Some(Authority::All),
            _ => None,
        }
    }

    pub fn sql_verb(&self) -> &'static str {
        match self {
            Authority::Create => "insert",
            Authority::Read => "select",
            Authority::Update => "update",
            Authority::Delete => "delete",
            Authority::All => ALL_VERBS,
        }
    }
}

/// Database instances that get their own grant column in the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatabaseInstance {
    Sspord,
    Sspstl,
    Sspcmp,
}

impl DatabaseInstance {
    /// Match a normalized `대상DB` value. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SSPORD" => Some(DatabaseInstance::Sspord),
            "SSPSTL" => Some(DatabaseInstance::Sspstl),
            "SSPCMP" => Some(DatabaseInstance::Sspcmp),
            _ => None,
        }
    }

    /// Report column holding this instance's grant script.
    pub fn column_key(&self) -> &'static str {
        match self {
            DatabaseInstance::Sspord => "sspord_grant",
            DatabaseInstance::Sspstl => "sspstl_grant",
            DatabaseInstance::Sspcmp => "sspcmp_grant",
        }
    }

    /// All instances in report column order.
    pub fn all() -> &'static [DatabaseInstance] {
        &[
            DatabaseInstance::Sspord,
            DatabaseInstance::Sspstl,
            DatabaseInstance::Sspcmp,
        ]
    }
}
