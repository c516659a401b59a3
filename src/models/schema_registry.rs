use crate::config::LIST_SEPARATOR;

/// One row of the `schema` sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaRegistryEntry {
    pub database_name: String,
    pub schemas: Vec<String>,
}

impl SchemaRegistryEntry {
    /// Build an entry from a slash-delimited schema list. Blank segments are dropped.
    pub fn from_list(database_name: &str, schema_list: &str) -> Self {
        let schemas = schema_list
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            database_name: database_name.trim().to_string(),
            schemas,
        }
    }
}

/// Static database -> schema list reference data for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    entries: Vec<SchemaRegistryEntry>,
}

impl SchemaRegistry {
    pub fn new(entries: Vec<SchemaRegistryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SchemaRegistryEntry] {
        &self.entries
    }

    /// Every schema registered for `database_name`, compared case-insensitively.
    ///
    /// Entries naming the same database are concatenated in registry order.
    pub fn schemas_for(&self, database_name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.database_name.to_uppercase() == database_name.to_uppercase())
            .flat_map(|entry| entry.schemas.iter().map(String::as_str))
            .collect()
    }

    pub fn contains(&self, database_name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.database_name.to_uppercase() == database_name.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_list_splits_and_trims_segments() {
        let entry = SchemaRegistryEntry::from_list(" SSPORD ", "SCH1/ SCH2 //SCH3");
        assert_eq!(entry.database_name, "SSPORD");
        assert_eq!(entry.schemas, vec!["SCH1", "SCH2", "SCH3"]);
    }

    #[test]
    fn schemas_for_matches_case_insensitively_and_concatenates() {
        let registry = SchemaRegistry::new(vec![
            SchemaRegistryEntry::from_list("sspord", "A/B"),
            SchemaRegistryEntry::from_list("SSPSTL", "X"),
            SchemaRegistryEntry::from_list("SSPORD", "C"),
        ]);
        assert_eq!(registry.schemas_for("SSPORD"), vec!["A", "B", "C"]);
        assert!(registry.contains("SspStl"));
        assert!(registry.schemas_for("SSPCMP").is_empty());
    }
}
