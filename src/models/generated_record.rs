use crate::lookup::DatabaseInstance;
use crate::models::InputRecord;

/// Non-fatal condition noticed while generating scripts for one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowWarning {
    /// `대상DB` is not one of the known instances; no grant column was written.
    UnknownDatabase(String),
    /// An authority token has no SQL verb mapping and was skipped.
    UnknownAuthority(String),
    /// A wildcard schema was requested for a database absent from the registry.
    UnregisteredDatabase(String),
}

impl std::fmt::Display for RowWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowWarning::UnknownDatabase(db) => write!(f, "unknown database '{db}'"),
            RowWarning::UnknownAuthority(code) => write!(f, "unknown authority '{code}'"),
            RowWarning::UnregisteredDatabase(db) => {
                write!(f, "no schemas registered for '{db}'")
            }
        }
    }
}

/// A normalized request row plus its generated scripts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedRecord {
    pub input: InputRecord,
    pub create_user_script: String,
    pub sspord_grant: String,
    pub sspstl_grant: String,
    pub sspcmp_grant: String,
    pub warnings: Vec<RowWarning>,
}

impl GeneratedRecord {
    /// A record with every generated field empty.
    pub fn empty(input: InputRecord) -> Self {
        Self {
            input,
            create_user_script: String::new(),
            sspord_grant: String::new(),
            sspstl_grant: String::new(),
            sspcmp_grant: String::new(),
            warnings: Vec::new(),
        }
    }

    pub fn grant_script(&self, instance: DatabaseInstance) -> &str {
        match instance {
            DatabaseInstance::Sspord => &self.sspord_grant,
            DatabaseInstance::Sspstl => &self.sspstl_grant,
            DatabaseInstance::Sspcmp => &self.sspcmp_grant,
        }
    }

    pub fn set_grant_script(&mut self, instance: DatabaseInstance, script: String) {
        match instance {
            DatabaseInstance::Sspord => self.sspord_grant = script,
            DatabaseInstance::Sspstl => self.sspstl_grant = script,
            DatabaseInstance::Sspcmp => self.sspcmp_grant = script,
        }
    }

    /// The instance whose grant column was populated, if any.
    pub fn granted_instance(&self) -> Option<DatabaseInstance> {
        DatabaseInstance::all()
            .iter()
            .copied()
            .find(|instance| !self.grant_script(*instance).is_empty())
    }
}
