use crate::config::{self, LIST_SEPARATOR, MISSING};
use crate::generator::grant_script::{build_grant_statements, resolve_sql_verbs};
use crate::lookup::DatabaseInstance;
use crate::models::{
    EnvironmentSettings, GeneratedRecord, InputRecord, RawRecord, RowWarning, SchemaRegistry,
};
use crate::normalize::normalize_record;

/// Normalize every raw request row and generate its scripts.
///
/// Rows are independent: a missing or unknown value only blanks the scripts
/// that depend on it.
pub fn generate(
    records: &[RawRecord],
    registry: &SchemaRegistry,
    settings: &EnvironmentSettings,
) -> Vec<GeneratedRecord> {
    let generated: Vec<GeneratedRecord> = records
        .iter()
        .map(|raw| generate_record(normalize_record(raw), registry, settings))
        .collect();

    let warned = generated.iter().filter(|r| !r.warnings.is_empty()).count();
    tracing::info!(rows = generated.len(), warned, "Generated database scripts");
    generated
}

/// Generate the scripts for one already-normalized row.
pub fn generate_record(
    input: InputRecord,
    registry: &SchemaRegistry,
    settings: &EnvironmentSettings,
) -> GeneratedRecord {
    let mut record = GeneratedRecord::empty(input);

    if record.input.user_id != MISSING {
        record.create_user_script =
            create_user_script(&record.input.user_id, &settings.initial_password);
    }

    let verbs = resolve_sql_verbs(&record.input.authority_expr);
    for code in &verbs.unknown_codes {
        tracing::warn!(user_id = %record.input.user_id, code = %code, "Skipping unknown authority code");
        record.warnings.push(RowWarning::UnknownAuthority(code.clone()));
    }

    let input = &record.input;
    if input.target_schema_expr == MISSING || verbs.is_missing() || input.target_database == MISSING {
        return record;
    }

    let Some(instance) = DatabaseInstance::from_name(&input.target_database) else {
        tracing::warn!(
            user_id = %input.user_id,
            database = %input.target_database,
            "Target database is not a known instance; grant script not written"
        );
        let database = input.target_database.clone();
        record.warnings.push(RowWarning::UnknownDatabase(database));
        return record;
    };

    let schema_tokens: Vec<&str> = input.target_schema_expr.split(LIST_SEPARATOR).collect();
    let wildcard_unregistered = schema_tokens.iter().any(|t| config::is_wildcard(t))
        && !registry.contains(&input.target_database);

    let script = build_grant_statements(
        &schema_tokens,
        &input.user_id,
        &verbs.verbs,
        &input.target_database,
        registry,
    );

    if wildcard_unregistered {
        tracing::warn!(
            database = %record.input.target_database,
            "Wildcard schema requested but database has no registry entry"
        );
        let database = record.input.target_database.clone();
        record.warnings.push(RowWarning::UnregisteredDatabase(database));
    }
    record.set_grant_script(instance, script);
    record
}

/// `create user '<id>'@'%' identified by '<password>';`
pub fn create_user_script(user_id: &str, initial_password: &str) -> String {
    format!("create user '{user_id}'@'%' identified by '{initial_password}';")
}
