use crate::config::{self, LIST_SEPARATOR, MISSING};
use crate::lookup::{Authority, ALL_VERBS};
use crate::models::SchemaRegistry;
use crate::schema_resolver;

/// SQL verb list derived from an authority expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbResolution {
    /// Comma-joined verbs, or `MISSING` when nothing can be granted.
    pub verbs: String,
    /// Tokens that had no verb mapping, in input order.
    pub unknown_codes: Vec<String>,
}

impl VerbResolution {
    pub fn is_missing(&self) -> bool {
        self.verbs == MISSING
    }

    fn missing(unknown_codes: Vec<String>) -> Self {
        Self {
            verbs: MISSING.to_string(),
            unknown_codes,
        }
    }
}

/// Turn a normalized authority expression such as `C/R` into `insert,select`.
///
/// A wildcard expression, or any `A`/`ALL`/`전체` token, grants all four verbs
/// regardless of the other tokens. Otherwise each token's verb is joined in
/// input order without deduplication.
pub fn resolve_sql_verbs(authority_expr: &str) -> VerbResolution {
    if authority_expr == MISSING {
        return VerbResolution::missing(Vec::new());
    }

    let tokens: Vec<&str> = authority_expr
        .split(LIST_SEPARATOR)
        .filter(|token| !token.is_empty() && *token != MISSING)
        .collect();

    let grants_everything = config::is_wildcard(authority_expr)
        || tokens
            .iter()
            .any(|token| Authority::from_code(token) == Some(Authority::All));
    if grants_everything {
        return VerbResolution {
            verbs: ALL_VERBS.to_string(),
            unknown_codes: Vec::new(),
        };
    }

    let mut verbs = Vec::with_capacity(tokens.len());
    let mut unknown_codes = Vec::new();
    for token in tokens {
        match Authority::from_code(token) {
            Some(authority) => verbs.push(authority.sql_verb()),
            None => unknown_codes.push(token.to_string()),
        }
    }

    if verbs.is_empty() {
        VerbResolution::missing(unknown_codes)
    } else {
        VerbResolution {
            verbs: verbs.join(","),
            unknown_codes,
        }
    }
}

/// Build the concatenated `grant` statements for one request row.
///
/// `MISSING` and blank schema tokens are skipped; wildcard tokens expand
/// through the registry for `database_name`.
pub fn build_grant_statements(
    schema_tokens: &[&str],
    user_id: &str,
    sql_verbs: &str,
    database_name: &str,
    registry: &SchemaRegistry,
) -> String {
    tracing::debug!(user_id, database_name, ?schema_tokens, sql_verbs, "Building grant script");

    let mut script = String::new();
    for token in schema_tokens
        .iter()
        .filter(|token| !token.is_empty() && **token != MISSING)
    {
        for schema in schema_resolver::resolve(token, database_name, registry) {
            script.push_str(&format!(
                "grant {sql_verbs} on {schema}.* to '{user_id}'@'%'; "
            ));
        }
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SchemaRegistryEntry;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new(vec![SchemaRegistryEntry::from_list("SSPORD", "SCH1/SCH2")])
    }

    #[test]
    fn verbs_follow_input_order() {
        assert_eq!(resolve_sql_verbs("C/R").verbs, "insert,select");
        assert_eq!(resolve_sql_verbs("D/U").verbs, "delete,update");
    }

    #[test]
    fn duplicate_codes_are_kept() {
        assert_eq!(resolve_sql_verbs("C/C").verbs, "insert,insert");
    }

    #[test]
    fn any_all_token_short_circuits() {
        assert_eq!(resolve_sql_verbs("ALL").verbs, ALL_VERBS);
        assert_eq!(resolve_sql_verbs("전체").verbs, ALL_VERBS);
        assert_eq!(resolve_sql_verbs("C/A").verbs, ALL_VERBS);
        assert_eq!(resolve_sql_verbs("R/ALL/X").verbs, ALL_VERBS);
    }

    #[test]
    fn missing_expression_yields_missing_verbs() {
        assert!(resolve_sql_verbs(MISSING).is_missing());
        assert!(resolve_sql_verbs("MISSING/MISSING").is_missing());
    }

    #[test]
    fn unknown_codes_are_reported_and_skipped() {
        let resolution = resolve_sql_verbs("C/X/R");
        assert_eq!(resolution.verbs, "insert,select");
        assert_eq!(resolution.unknown_codes, vec!["X".to_string()]);

        let resolution = resolve_sql_verbs("Q");
        assert!(resolution.is_missing());
        assert_eq!(resolution.unknown_codes, vec!["Q".to_string()]);
    }

    #[test]
    fn wildcard_schema_expands_per_registry() {
        let script = build_grant_statements(&["ALL"], "123", ALL_VERBS, "SSPORD", &registry());
        assert_eq!(
            script,
            "grant insert,select,update,delete on SCH1.* to '123'@'%'; \
             grant insert,select,update,delete on SCH2.* to '123'@'%'; "
        );
    }

    #[test]
    fn missing_schema_tokens_are_skipped() {
        let script = build_grant_statements(
            &["SCHEMA_A", "MISSING", "SCHEMA_B"],
            "P1",
            "select",
            "SSPORD",
            &registry(),
        );
        assert_eq!(
            script,
            "grant select on SCHEMA_A.* to 'P1'@'%'; grant select on SCHEMA_B.* to 'P1'@'%'; "
        );
    }

    #[test]
    fn wildcard_on_unregistered_database_builds_nothing() {
        assert_eq!(
            build_grant_statements(&["ALL"], "P1", "select", "SSPCMP", &registry()),
            ""
        );
    }
}
