use crate::config;
use crate::models::SchemaRegistry;

/// Expand one schema token for `database_name`.
///
/// A wildcard token (`ALL` / `전체`) yields every schema registered for the
/// database in registry order, or nothing when the database is unregistered.
/// Any other token is returned as-is.
pub fn resolve(schema_token: &str, database_name: &str, registry: &SchemaRegistry) -> Vec<String> {
    if config::is_wildcard(schema_token) {
        registry
            .schemas_for(database_name)
            .into_iter()
            .map(str::to_string)
            .collect()
    } else {
        vec![schema_token.to_string()]
    }
}
