/// Authority-to-verb resolution and `grant` statement text.
pub mod grant_script;
/// Per-row driver that turns request rows into generated records.
pub mod pipeline;

pub use grant_script::{build_grant_statements, resolve_sql_verbs, VerbResolution};
pub use pipeline::{create_user_script, generate, generate_record};
